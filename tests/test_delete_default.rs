use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn git_wt() -> Command {
    Command::cargo_bin("git-wt").expect("binary should build")
}

fn run_git(dir: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .expect("failed to run git");
    assert!(status.success(), "git {args:?} failed in {}", dir.display());
}

fn branch_exists(root: &Path, branch: &str) -> bool {
    let output = std::process::Command::new("git")
        .args(["branch", "--list", branch])
        .current_dir(root)
        .output()
        .expect("failed to run git branch");
    String::from_utf8_lossy(&output.stdout).contains(branch)
}

/// A repository with one commit on `main`, checked out on `other` so that
/// `main` is deletable in principle.
fn repo_on_other_branch() -> Result<(TempDir, PathBuf)> {
    let temp = TempDir::new()?;
    let root = temp.path().join("project");
    std::fs::create_dir(&root)?;
    run_git(&root, &["init", "-b", "main"]);
    run_git(&root, &["config", "user.email", "test@example.com"]);
    run_git(&root, &["config", "user.name", "Test"]);
    std::fs::write(root.join("README.md"), "# test\n")?;
    run_git(&root, &["add", "."]);
    run_git(&root, &["commit", "-m", "initial commit"]);
    run_git(&root, &["checkout", "-b", "other"]);
    Ok((temp, root))
}

#[test]
fn test_blocks_safe_delete_of_default_branch() -> Result<()> {
    let (_temp, root) = repo_on_other_branch()?;
    git_wt()
        .current_dir(&root)
        .args(["-d", "main"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot delete default branch"))
        .stderr(predicate::str::contains("--allow-delete-default"));

    assert!(branch_exists(&root, "main"));
    Ok(())
}

#[test]
fn test_blocks_force_delete_of_default_branch() -> Result<()> {
    let (_temp, root) = repo_on_other_branch()?;
    git_wt()
        .current_dir(&root)
        .args(["-D", "main"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot delete default branch"));

    assert!(branch_exists(&root, "main"));
    Ok(())
}

#[test]
fn test_override_flag_allows_deleting_default_branch() -> Result<()> {
    let (_temp, root) = repo_on_other_branch()?;
    git_wt()
        .current_dir(&root)
        .args(["-D", "--allow-delete-default", "main"])
        .assert()
        .success();

    assert!(!branch_exists(&root, "main"));
    Ok(())
}

#[test]
fn test_default_branch_in_batch_blocks_everything() -> Result<()> {
    let (_temp, root) = repo_on_other_branch()?;
    run_git(&root, &["branch", "feature-a"]);
    run_git(&root, &["branch", "feature-b"]);

    git_wt()
        .current_dir(&root)
        .args(["-D", "feature-a", "main", "feature-b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot delete default branch"));

    // The guard runs before any deletion, so the whole batch survives.
    assert!(branch_exists(&root, "feature-a"));
    assert!(branch_exists(&root, "main"));
    assert!(branch_exists(&root, "feature-b"));
    Ok(())
}

#[test]
fn test_blocks_deleting_worktree_of_default_branch() -> Result<()> {
    let (_temp, root) = repo_on_other_branch()?;

    // Put main into a worktree, then try to delete it by branch name.
    let output = git_wt().current_dir(&root).args(["main"]).output()?;
    assert!(output.status.success());
    let wt_path = String::from_utf8(output.stdout)?.trim_end().to_string();
    assert!(Path::new(&wt_path).is_dir());

    git_wt()
        .current_dir(&root)
        .args(["-d", "main"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot delete default branch"));
    assert!(Path::new(&wt_path).is_dir());

    // The same protection applies when the target is the worktree path.
    git_wt()
        .current_dir(&root)
        .args(["-d", &wt_path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot delete default branch"));
    assert!(Path::new(&wt_path).is_dir());
    Ok(())
}

#[test]
fn test_guard_matches_exact_name_only() -> Result<()> {
    let (_temp, root) = repo_on_other_branch()?;
    run_git(&root, &["branch", "main-backup"]);

    git_wt()
        .current_dir(&root)
        .args(["-D", "main-backup"])
        .assert()
        .success();

    assert!(!branch_exists(&root, "main-backup"));
    assert!(branch_exists(&root, "main"));
    Ok(())
}
