use super::GitCommand;
use anyhow::{Context, Result};
use std::process::Command;

impl GitCommand {
    pub fn branch_delete(&self, branch: &str, force: bool) -> Result<()> {
        let mut cmd = Command::new("git");
        cmd.args(["branch"]);

        if force {
            cmd.arg("-D");
        } else {
            cmd.arg("-d");
        }

        cmd.arg(branch);

        let output = cmd
            .output()
            .context("Failed to execute git branch command")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Git branch delete failed: {}", stderr);
        }

        Ok(())
    }

    pub fn show_ref_exists(&self, ref_name: &str) -> Result<bool> {
        let output = Command::new("git")
            .args(["show-ref", "--verify", "--quiet", ref_name])
            .output()
            .context("Failed to execute git show-ref command")?;

        Ok(output.status.success())
    }

    /// Read a symbolic ref (e.g. `refs/remotes/origin/HEAD`).
    /// Returns `None` when the ref does not exist or is not symbolic.
    pub fn symbolic_ref(&self, ref_name: &str) -> Result<Option<String>> {
        let output = Command::new("git")
            .args(["symbolic-ref", "--quiet", ref_name])
            .output()
            .context("Failed to execute git symbolic-ref command")?;

        if !output.status.success() {
            return Ok(None);
        }

        let target = String::from_utf8(output.stdout)
            .context("Failed to parse git symbolic-ref output")?
            .trim()
            .to_string();

        if target.is_empty() {
            Ok(None)
        } else {
            Ok(Some(target))
        }
    }
}
