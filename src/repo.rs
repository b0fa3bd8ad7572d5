//! Repository discovery and default-branch resolution.
//!
//! A `Repository` is resolved exactly once per invocation and passed by
//! reference afterwards; in particular the default branch is never
//! re-queried mid-operation.

use crate::git::GitCommand;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::Command;

const DEFAULT_REMOTE: &str = "origin";

/// A version-controlled project root plus its resolved default branch.
pub struct Repository {
    /// Root of the primary checkout (the directory holding `.git`).
    pub root: PathBuf,
    /// The branch protected from deletion (e.g. `main`).
    pub default_branch: String,
}

impl Repository {
    /// Resolve the repository the current directory belongs to.
    ///
    /// Works from anywhere inside the repository, including from inside a
    /// linked worktree: the git common directory always points back at the
    /// primary checkout.
    pub fn discover(git: &GitCommand) -> Result<Self> {
        let root = get_project_root()?;
        let default_branch = resolve_default_branch(git)?;
        Ok(Self {
            root,
            default_branch,
        })
    }

    pub fn is_default(&self, branch: &str) -> bool {
        branch == self.default_branch
    }

    /// Directory under which this repository's worktrees live:
    /// a `<name>-wt` sibling of the project root.
    pub fn worktree_base(&self) -> PathBuf {
        let name = self
            .root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("repo");
        match self.root.parent() {
            Some(parent) => parent.join(format!("{name}-wt")),
            None => self.root.join(format!("{name}-wt")),
        }
    }

    /// Deterministic worktree location for a branch. Branch names with
    /// slashes nest below the base directory.
    pub fn worktree_path(&self, branch: &str) -> PathBuf {
        self.worktree_base().join(branch)
    }
}

pub fn get_git_common_dir() -> Result<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--git-common-dir"])
        .output()
        .context("Failed to get git common directory")?;

    if !output.status.success() {
        anyhow::bail!("Not inside a Git repository");
    }

    let path_str = String::from_utf8(output.stdout)
        .context("Failed to parse git common directory output")?
        .trim()
        .to_string();

    // git reports a relative path (usually ".git") when invoked from the
    // primary checkout root; anchor it to the current directory.
    let path = PathBuf::from(&path_str);
    let absolute = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .context("Failed to get current working directory")?
            .join(path)
    };

    absolute
        .canonicalize()
        .with_context(|| format!("Failed to canonicalize git directory: {}", absolute.display()))
}

pub fn get_project_root() -> Result<PathBuf> {
    let git_common_dir = get_git_common_dir()?;
    let project_root = git_common_dir
        .parent()
        .context("Failed to determine project root directory")?;
    Ok(project_root.to_path_buf())
}

/// Resolve the repository's default branch.
///
/// Resolution order:
///   1. the symbolic ref `refs/remotes/origin/HEAD` (set by clone)
///   2. the `init.defaultBranch` config value, when that branch exists
///   3. existence probe of `main`, then `master`
///
/// When a branch exists under the same name both locally and on the remote,
/// git's own ref namespace disambiguates: only `refs/heads/` names count.
fn resolve_default_branch(git: &GitCommand) -> Result<String> {
    let remote_head = format!("refs/remotes/{DEFAULT_REMOTE}/HEAD");
    if let Some(target) = git.symbolic_ref(&remote_head)? {
        let prefix = format!("refs/remotes/{DEFAULT_REMOTE}/");
        if let Some(branch) = target.strip_prefix(&prefix) {
            if !branch.is_empty() {
                return Ok(branch.to_string());
            }
        }
    }

    // A configured name only counts when the branch actually exists;
    // inherited global config must not override a real `main`.
    if let Some(branch) = git.config_get("init.defaultBranch")? {
        if !branch.is_empty() && git.show_ref_exists(&format!("refs/heads/{branch}"))? {
            return Ok(branch);
        }
    }

    for candidate in ["main", "master"] {
        if git.show_ref_exists(&format!("refs/heads/{candidate}"))? {
            return Ok(candidate.to_string());
        }
    }

    anyhow::bail!(
        "Could not determine default branch. \
        Try: 'git remote set-head {} --auto' or set 'init.defaultBranch'",
        DEFAULT_REMOTE
    )
}
