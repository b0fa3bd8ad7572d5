//! Shell integration script generation.
//!
//! Each supported shell gets a self-contained script meant to be evaluated
//! by that shell (`eval "$(git-wt --init bash)"`, `git-wt --init fish |
//! source`, ...). A full script has three parts:
//!
//!   1. a `git` wrapper that intercepts `git wt`, captures stdout, and
//!      changes directory when the captured line is an existing directory
//!   2. an optional picker block inside the wrapper that turns a bare
//!      `git wt` into an interactive worktree selection via fzf or peco
//!   3. tab completion for branch names and flags
//!
//! With `--nocd` the wrapper (and with it any picker) is omitted and only
//! completion remains; the completion flag lists deliberately exclude the
//! picker flags so a picker name never leaks into output that did not ask
//! for one.

mod bash;
mod fish;
mod powershell;
mod zsh;

use crate::cli::Picker;
use crate::errors::WtError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

impl Shell {
    /// The shell's display name as used in the script header.
    pub fn name(&self) -> &'static str {
        match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Fish => "fish",
            Shell::PowerShell => "PowerShell",
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shell {
    type Err = WtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "fish" => Ok(Shell::Fish),
            "powershell" | "pwsh" => Ok(Shell::PowerShell),
            other => Err(WtError::UnsupportedShell(other.to_string())),
        }
    }
}

/// Build the integration script for `shell`.
///
/// `nocd` drops the wrapper (completion only); `picker` is already
/// resolved by the classifier, so a picker here is never combined with
/// `nocd`.
pub fn generate_init_script(shell: Shell, nocd: bool, picker: Option<Picker>) -> String {
    let body = match shell {
        Shell::Bash => bash::script(nocd, picker),
        Shell::Zsh => zsh::script(nocd, picker),
        Shell::Fish => fish::script(nocd, picker),
        Shell::PowerShell => powershell::script(nocd, picker),
    };
    format!("# git-wt shell hook for {}\n{body}", shell.name())
}
