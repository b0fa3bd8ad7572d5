//! Argument classification.
//!
//! Turns the raw invocation into exactly one [`Operation`] plus
//! [`InvocationOptions`], or fails with a usage error. Classification is
//! pure: it never touches the repository, so contradictory flags are
//! rejected before any subprocess runs.

use crate::errors::WtError;
use crate::shell::Shell;
use anyhow::Result;
use clap::Parser;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "git-wt")]
#[command(version = crate::VERSION)]
#[command(about = "Manage per-branch git worktrees and cd between them")]
#[command(long_about = r#"
Manages one worktree per branch, created under a '<repo>-wt' directory next
to the repository root.

With a branch name, creates the worktree (and the branch, if needed) or
switches to it when it already exists; the worktree path is printed to
stdout so the shell hook installed by --init can cd into it. With no
arguments, lists existing worktrees. With -d/-D, deletes worktrees and
their branches.

Install the shell hook with e.g.:  eval "$(git-wt --init bash)"
"#)]
pub struct Args {
    #[arg(short = 'd', help = "Delete the worktree and branch for each target")]
    pub delete: bool,

    #[arg(
        short = 'D',
        help = "Force delete, discarding uncommitted changes and unmerged commits"
    )]
    pub force_delete: bool,

    #[arg(long, help = "Allow deleting the repository's default branch")]
    pub allow_delete_default: bool,

    #[arg(
        long,
        value_name = "SHELL",
        help = "Print the integration script for bash, zsh, fish, or powershell"
    )]
    pub init: Option<String>,

    #[arg(
        long,
        help = "Never change directory (omits the wrapper from --init output)"
    )]
    pub nocd: bool,

    #[arg(long, help = "Wire fzf as the worktree picker in --init output")]
    pub fzf: bool,

    #[arg(long, help = "Wire peco as the worktree picker in --init output")]
    pub peco: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        value_name = "BRANCH",
        help = "One branch to create/switch to, or the targets to delete"
    )]
    pub branches: Vec<String>,
}

/// The single operation an invocation performs. Constructed once by
/// [`classify`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Create the branch's worktree, or switch to it if it already exists.
    /// Which of the two happens is decided by the executor, not here.
    CreateOrSwitch(String),
    Delete {
        targets: Vec<String>,
        force: bool,
        allow_default: bool,
    },
    List,
    InitScript(Shell),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvocationOptions {
    pub nocd: bool,
    pub fzf: bool,
    pub peco: bool,
}

/// The external fuzzy-selection program wired into the generated script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Picker {
    Fzf,
    Peco,
}

impl Picker {
    pub fn command(&self) -> &'static str {
        match self {
            Picker::Fzf => "fzf",
            Picker::Peco => "peco",
        }
    }
}

impl InvocationOptions {
    /// The picker to wire into the generated script, if any.
    ///
    /// `nocd` wins over both pickers: without a directory change there is
    /// nothing for a selection to do.
    pub fn picker(&self) -> Option<Picker> {
        if self.nocd {
            return None;
        }
        if self.fzf {
            Some(Picker::Fzf)
        } else if self.peco {
            Some(Picker::Peco)
        } else {
            None
        }
    }
}

/// Map parsed arguments to exactly one operation, or fail with a usage
/// error. Pure; no side effects.
pub fn classify(args: &Args) -> Result<(Operation, InvocationOptions)> {
    let options = InvocationOptions {
        nocd: args.nocd,
        fzf: args.fzf,
        peco: args.peco,
    };

    if args.fzf && args.peco {
        return Err(WtError::Usage("--fzf and --peco are mutually exclusive".to_string()).into());
    }

    if args.allow_delete_default && !args.delete && !args.force_delete {
        return Err(WtError::Usage(
            "--allow-delete-default is only meaningful with -d or -D".to_string(),
        )
        .into());
    }

    if let Some(shell_name) = &args.init {
        if args.delete || args.force_delete || !args.branches.is_empty() {
            return Err(WtError::Usage(
                "--init cannot be combined with worktree operations".to_string(),
            )
            .into());
        }
        let shell = Shell::from_str(shell_name)?;
        return Ok((Operation::InitScript(shell), options));
    }

    if (args.fzf || args.peco) && args.init.is_none() {
        return Err(
            WtError::Usage("--fzf and --peco are only meaningful with --init".to_string()).into(),
        );
    }

    if args.delete || args.force_delete {
        if args.branches.is_empty() {
            return Err(WtError::Usage("no branches given to delete".to_string()).into());
        }
        return Ok((
            Operation::Delete {
                targets: args.branches.clone(),
                force: args.force_delete,
                allow_default: args.allow_delete_default,
            },
            options,
        ));
    }

    match args.branches.len() {
        0 => Ok((Operation::List, options)),
        1 => Ok((
            Operation::CreateOrSwitch(args.branches[0].clone()),
            options,
        )),
        n => Err(WtError::Usage(format!(
            "expected one branch to create or switch to, got {n}"
        ))
        .into()),
    }
}
