//! Default branch guard.
//!
//! Pre-flight validation for delete batches: the repository's default
//! branch can never be deleted without the explicit override flag, and a
//! single protected name poisons the whole batch before anything is
//! removed. This is distinct from per-target execution failures, which are
//! best-effort and partial.

use crate::errors::WtError;
use crate::repo::Repository;
use anyhow::Result;

/// A delete target resolved to a branch name, with its protection status
/// computed once against the invocation's resolved default branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchTarget {
    pub name: String,
    pub is_default: bool,
}

/// Validate a whole delete batch against the default-branch invariant.
///
/// Targets must already be resolved to branch names (worktree-path
/// arguments are mapped to their branch by the executor before this runs).
/// Returns the targets unchanged when the batch is safe; fails without
/// side effects when any target is the default branch and `allow_default`
/// is unset.
pub fn check_delete_targets(
    repo: &Repository,
    branches: &[String],
    allow_default: bool,
) -> Result<Vec<BranchTarget>> {
    let targets: Vec<BranchTarget> = branches
        .iter()
        .map(|name| BranchTarget {
            name: name.clone(),
            is_default: repo.is_default(name),
        })
        .collect();

    if !allow_default {
        if let Some(protected) = targets.iter().find(|t| t.is_default) {
            return Err(WtError::DefaultBranchProtected {
                branch: protected.name.clone(),
            }
            .into());
        }
    }

    Ok(targets)
}
