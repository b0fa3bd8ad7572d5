use anyhow::{Context, Result};
use std::process::{Command, Stdio};
use which::which;

pub mod cli;
pub mod errors;
pub mod git;
pub mod guard;
pub mod logging;
pub mod output;
pub mod repo;
pub mod shell;
pub mod styles;
pub mod worktree;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn is_git_repository() -> Result<bool> {
    let status = Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .context("Failed to check if inside Git repository")?;

    Ok(status.success())
}

pub fn check_dependencies() -> Result<()> {
    if which("git").is_err() {
        anyhow::bail!("Missing required dependency: git");
    }
    Ok(())
}

/// Reject branch names that could escape the worktree base directory or
/// break the single-line stdout contract.
pub fn validate_branch_name(branch_name: &str) -> Result<()> {
    if branch_name.is_empty() {
        anyhow::bail!("Branch name cannot be empty");
    }

    if branch_name.contains("..") {
        anyhow::bail!("Branch name cannot contain '..'");
    }

    if branch_name.starts_with('/') || branch_name.ends_with('/') {
        anyhow::bail!("Branch name cannot start or end with '/'");
    }

    if branch_name.starts_with('-') {
        anyhow::bail!("Branch name cannot start with '-'");
    }

    if branch_name.starts_with('.') {
        anyhow::bail!("Branch name cannot start with '.'");
    }

    if branch_name.contains('\0') || branch_name.chars().any(|c| c.is_control()) {
        anyhow::bail!("Branch name contains control characters");
    }

    if branch_name.chars().any(|c| c.is_whitespace()) {
        anyhow::bail!("Branch name cannot contain whitespace");
    }

    if branch_name.len() > 255 {
        anyhow::bail!("Branch name too long (max 255 characters)");
    }

    Ok(())
}
