//! Error taxonomy for git-wt.
//!
//! Validation errors (usage, default-branch guard, unsupported shell) are
//! produced from arguments and configuration alone, before any repository
//! mutation. Execution errors carry git's own diagnostic text so it can be
//! surfaced on stderr verbatim.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WtError {
    /// Malformed or contradictory command-line arguments.
    #[error("{0}")]
    Usage(String),

    /// A delete batch named the repository's default branch without the
    /// override flag. Fatal for the whole batch; nothing is deleted.
    #[error("cannot delete default branch '{branch}' (pass --allow-delete-default to override)")]
    DefaultBranchProtected { branch: String },

    /// `git worktree add` reported failure.
    #[error("failed to create worktree for '{branch}': {detail}")]
    WorktreeCreation { branch: String, detail: String },

    /// One or more targets in a delete batch failed after the guard passed.
    /// The remaining targets were still attempted.
    #[error("{}", format_failures(.failures))]
    PartialDeletion { failures: Vec<(String, String)> },

    /// `--init` was given a shell this tool has no profile for.
    #[error("unsupported shell '{0}' (expected bash, zsh, fish, or powershell)")]
    UnsupportedShell(String),
}

fn format_failures(failures: &[(String, String)]) -> String {
    let mut msg = format!("failed to delete {} target(s):", failures.len());
    for (target, reason) in failures {
        msg.push_str(&format!("\n  {target}: {}", reason.trim_end()));
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_branch_protected_names_branch_and_flag() {
        let err = WtError::DefaultBranchProtected {
            branch: "main".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("cannot delete default branch 'main'"));
        assert!(msg.contains("--allow-delete-default"));
    }

    #[test]
    fn test_partial_deletion_lists_every_failure() {
        let err = WtError::PartialDeletion {
            failures: vec![
                ("feature-a".to_string(), "uncommitted changes".to_string()),
                ("feature-b".to_string(), "branch not found".to_string()),
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("2 target(s)"));
        assert!(msg.contains("feature-a: uncommitted changes"));
        assert!(msg.contains("feature-b: branch not found"));
    }

    #[test]
    fn test_unsupported_shell_names_candidates() {
        let msg = WtError::UnsupportedShell("tcsh".to_string()).to_string();
        assert!(msg.contains("tcsh"));
        assert!(msg.contains("bash"));
        assert!(msg.contains("powershell"));
    }
}
