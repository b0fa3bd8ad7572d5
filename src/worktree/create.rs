//! Create-or-switch execution.
//!
//! Switching to an existing worktree is a pure lookup with no subprocess
//! mutation and no diagnostic output; creating one delegates to
//! `git worktree add`, creating the branch first when it does not exist.

use super::list;
use crate::errors::WtError;
use crate::git::GitCommand;
use crate::repo::Repository;
use crate::{log_debug, validate_branch_name};
use anyhow::Result;
use std::path::PathBuf;

pub struct CreateOutcome {
    /// Absolute path of the branch's worktree.
    pub path: PathBuf,
    /// True when a new worktree was created, false for a switch.
    pub created: bool,
}

pub fn create_or_switch(
    git: &GitCommand,
    repo: &Repository,
    branch: &str,
) -> Result<CreateOutcome> {
    let entries = list::worktree_entries(git)?;

    // Existing worktree: resolve and return, nothing to mutate.
    if let Some(existing) = list::find_by_branch(&entries, branch) {
        let path = existing
            .path
            .canonicalize()
            .unwrap_or_else(|_| existing.path.clone());
        return Ok(CreateOutcome {
            path,
            created: false,
        });
    }

    validate_branch_name(branch)
        .map_err(|e| WtError::Usage(format!("invalid branch name '{branch}': {e}")))?;

    let worktree_path = repo.worktree_path(branch);
    if worktree_path.exists() {
        return Err(WtError::WorktreeCreation {
            branch: branch.to_string(),
            detail: format!(
                "path '{}' already exists but is not a registered worktree",
                worktree_path.display()
            ),
        }
        .into());
    }

    if let Some(parent) = worktree_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| WtError::WorktreeCreation {
            branch: branch.to_string(),
            detail: format!("failed to create '{}': {e}", parent.display()),
        })?;
    }

    let branch_exists = git.show_ref_exists(&format!("refs/heads/{branch}"))?;
    log_debug!(
        "Branch '{}' {} locally; adding worktree at '{}'",
        branch,
        if branch_exists { "exists" } else { "does not exist" },
        worktree_path.display()
    );

    let added = if branch_exists {
        git.worktree_add(&worktree_path, branch)
    } else {
        git.worktree_add_new_branch(&worktree_path, branch)
    };

    if let Err(e) = added {
        return Err(WtError::WorktreeCreation {
            branch: branch.to_string(),
            detail: e.to_string(),
        }
        .into());
    }

    let path = worktree_path
        .canonicalize()
        .unwrap_or_else(|_| worktree_path.clone());

    Ok(CreateOutcome {
        path,
        created: true,
    })
}
