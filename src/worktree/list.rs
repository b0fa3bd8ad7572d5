//! Worktree enumeration.
//!
//! Parses `git worktree list --porcelain` into structured entries and
//! renders the list table. The table goes to stderr; its first column is
//! the branch name so the picker wiring in the generated shell scripts can
//! extract a selection with `awk '{print $1}'`.

use crate::git::GitCommand;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

/// One entry from `git worktree list --porcelain`.
///
/// Porcelain format, one block per worktree separated by blank lines:
/// ```text
/// worktree /path/to/worktree
/// HEAD <sha>
/// branch refs/heads/branch-name
/// ```
/// Bare entries carry `bare` instead of `branch`, detached ones `detached`;
/// `locked [reason]` and `prunable [reason]` lines may follow either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorktreeEntry {
    pub path: PathBuf,
    pub branch: Option<String>,
    pub is_bare: bool,
    pub is_detached: bool,
    pub is_locked: bool,
    pub is_prunable: bool,
}

/// Fetch and parse the repository's worktree list.
pub fn worktree_entries(git: &GitCommand) -> Result<Vec<WorktreeEntry>> {
    let porcelain_output = git
        .worktree_list_porcelain()
        .context("Failed to list worktrees")?;
    Ok(parse_porcelain(&porcelain_output))
}

pub fn parse_porcelain(output: &str) -> Vec<WorktreeEntry> {
    let mut entries = Vec::new();
    let mut current: Option<WorktreeEntry> = None;

    for line in output.lines() {
        if let Some(path_str) = line.strip_prefix("worktree ") {
            // Save previous entry if any
            if let Some(entry) = current.take() {
                entries.push(entry);
            }
            current = Some(WorktreeEntry {
                path: PathBuf::from(path_str),
                branch: None,
                is_bare: false,
                is_detached: false,
                is_locked: false,
                is_prunable: false,
            });
        } else if let Some(entry) = current.as_mut() {
            if let Some(branch_ref) = line.strip_prefix("branch ") {
                entry.branch = branch_ref.strip_prefix("refs/heads/").map(String::from);
            } else if line == "bare" {
                entry.is_bare = true;
            } else if line == "detached" {
                entry.is_detached = true;
            } else if line == "locked" || line.starts_with("locked ") {
                entry.is_locked = true;
            } else if line == "prunable" || line.starts_with("prunable ") {
                entry.is_prunable = true;
            }
        }
    }
    // Don't forget the last entry
    if let Some(entry) = current.take() {
        entries.push(entry);
    }

    entries
}

/// Find the worktree checked out on `branch`, if any.
pub fn find_by_branch<'a>(
    entries: &'a [WorktreeEntry],
    branch: &str,
) -> Option<&'a WorktreeEntry> {
    entries
        .iter()
        .find(|e| e.branch.as_deref() == Some(branch))
}

/// Render the worktree list as a table.
///
/// Branch name first (picker contract), then path, then status flags.
pub fn render_table(entries: &[WorktreeEntry]) -> String {
    let mut builder = Builder::new();
    builder.push_record(["Branch", "Path", "Status"]);

    for entry in entries {
        let branch = if entry.is_bare {
            "(bare)".to_string()
        } else if entry.is_detached {
            "(detached)".to_string()
        } else {
            entry.branch.clone().unwrap_or_default()
        };

        let mut status = Vec::new();
        if entry.is_locked {
            status.push("locked");
        }
        if entry.is_prunable {
            status.push("prunable");
        }

        builder.push_record([
            branch,
            entry.path.display().to_string(),
            status.join(","),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::blank());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_porcelain_basic() {
        let output = "\
worktree /home/user/project
HEAD abc123
branch refs/heads/main

worktree /home/user/project-wt/feature
HEAD def456
branch refs/heads/feature-branch
";
        let entries = parse_porcelain(output);
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].path, PathBuf::from("/home/user/project"));
        assert_eq!(entries[0].branch.as_deref(), Some("main"));
        assert!(!entries[0].is_bare);
        assert!(!entries[0].is_detached);

        assert_eq!(
            entries[1].path,
            PathBuf::from("/home/user/project-wt/feature")
        );
        assert_eq!(entries[1].branch.as_deref(), Some("feature-branch"));
    }

    #[test]
    fn test_parse_porcelain_bare() {
        let output = "\
worktree /home/user/project
HEAD abc123
bare
";
        let entries = parse_porcelain(output);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_bare);
        assert!(entries[0].branch.is_none());
    }

    #[test]
    fn test_parse_porcelain_detached() {
        let output = "\
worktree /home/user/project-wt/hotfix
HEAD abc123
detached
";
        let entries = parse_porcelain(output);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_detached);
        assert!(entries[0].branch.is_none());
    }

    #[test]
    fn test_parse_porcelain_locked_and_prunable() {
        let output = "\
worktree /home/user/project-wt/stale
HEAD abc123
branch refs/heads/stale
prunable gitdir file points to non-existent location

worktree /home/user/project-wt/pinned
HEAD def456
branch refs/heads/pinned
locked working on a USB stick
";
        let entries = parse_porcelain(output);
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_prunable);
        assert!(!entries[0].is_locked);
        assert!(entries[1].is_locked);
        assert!(!entries[1].is_prunable);
    }

    #[test]
    fn test_parse_porcelain_empty() {
        assert!(parse_porcelain("").is_empty());
    }

    #[test]
    fn test_find_by_branch() {
        let output = "\
worktree /home/user/project
HEAD abc123
branch refs/heads/main

worktree /home/user/project-wt/feature
HEAD def456
branch refs/heads/feature
";
        let entries = parse_porcelain(output);
        assert_eq!(
            find_by_branch(&entries, "feature").map(|e| e.path.clone()),
            Some(PathBuf::from("/home/user/project-wt/feature"))
        );
        assert!(find_by_branch(&entries, "missing").is_none());
    }

    #[test]
    fn test_render_table_first_column_is_branch() {
        let entries = vec![
            WorktreeEntry {
                path: PathBuf::from("/home/user/project"),
                branch: Some("main".to_string()),
                is_bare: false,
                is_detached: false,
                is_locked: false,
                is_prunable: false,
            },
            WorktreeEntry {
                path: PathBuf::from("/home/user/project-wt/feature"),
                branch: Some("feature".to_string()),
                is_bare: false,
                is_detached: false,
                is_locked: true,
                is_prunable: false,
            },
        ];
        let table = render_table(&entries);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].trim_start().starts_with("Branch"));

        let row = lines[2];
        assert_eq!(row.split_whitespace().next(), Some("feature"));
        assert!(row.contains("locked"));
    }

    #[test]
    fn test_render_table_deterministic() {
        let entries = parse_porcelain(
            "worktree /a\nHEAD x\nbranch refs/heads/one\n\nworktree /b\nHEAD y\ndetached\n",
        );
        assert_eq!(render_table(&entries), render_table(&entries));
    }
}
