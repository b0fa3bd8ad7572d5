//! Delete execution.
//!
//! Resolves each target to a branch name, runs the default-branch guard
//! over the whole batch, then removes worktrees and branches one target at
//! a time. Execution is best-effort: a failed target is recorded and the
//! batch continues, so the caller gets every failure at once.

use super::list::{self, WorktreeEntry};
use crate::errors::WtError;
use crate::git::GitCommand;
use crate::guard;
use crate::repo::Repository;
use crate::{log_error, log_info, log_warning};
use anyhow::{bail, Result};
use std::path::Path;

/// Map a raw delete target to a branch name.
///
/// A target matching a local branch name wins outright, whether or not a
/// worktree exists for it; otherwise it is treated as a worktree path
/// (absolute, cwd-relative, or relative to the repository root) and mapped
/// to that worktree's branch. Detached or bare worktrees have no branch to
/// delete and are rejected.
fn resolve_target(
    git: &GitCommand,
    repo: &Repository,
    entries: &[WorktreeEntry],
    target: &str,
) -> Result<String> {
    if list::find_by_branch(entries, target).is_some()
        || git.show_ref_exists(&format!("refs/heads/{target}"))?
    {
        return Ok(target.to_string());
    }

    let candidates = [
        Path::new(target).to_path_buf(),
        std::env::current_dir()
            .map(|cwd| cwd.join(target))
            .unwrap_or_else(|_| Path::new(target).to_path_buf()),
        repo.root.join(target),
    ];

    for candidate in &candidates {
        let Ok(resolved) = candidate.canonicalize() else {
            continue;
        };
        for entry in entries {
            let entry_path = entry.path.canonicalize().unwrap_or_else(|_| entry.path.clone());
            if entry_path == resolved {
                return match &entry.branch {
                    Some(branch) => Ok(branch.clone()),
                    None => bail!(
                        "worktree '{}' has no branch checked out (bare or detached)",
                        entry.path.display()
                    ),
                };
            }
        }
    }

    bail!("no worktree or branch matches '{target}'")
}

/// Delete the worktree and branch for each target.
///
/// The guard runs over the fully resolved batch before anything is
/// removed, so a protected default branch rejects the batch atomically.
pub fn delete_targets(
    git: &GitCommand,
    repo: &Repository,
    targets: &[String],
    force: bool,
    allow_default: bool,
) -> Result<()> {
    let entries = list::worktree_entries(git)?;

    let mut branches = Vec::with_capacity(targets.len());
    for target in targets {
        branches.push(resolve_target(git, repo, &entries, target)?);
    }

    let checked = guard::check_delete_targets(repo, &branches, allow_default)?;

    let mut failures = Vec::new();
    for target in &checked {
        match delete_one(git, &entries, &target.name, force) {
            Ok(()) => log_info!("Deleted worktree and branch '{}'", target.name),
            Err(e) => {
                log_error!("Failed to delete '{}': {}", target.name, e);
                failures.push((target.name.clone(), e.to_string()));
            }
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(WtError::PartialDeletion { failures }.into())
    }
}

fn delete_one(
    git: &GitCommand,
    entries: &[WorktreeEntry],
    branch: &str,
    force: bool,
) -> Result<()> {
    match list::find_by_branch(entries, branch) {
        Some(entry) => git.worktree_remove(&entry.path, force)?,
        None => log_warning!("No worktree for branch '{}', deleting branch only", branch),
    }
    git.branch_delete(branch, force)
}
