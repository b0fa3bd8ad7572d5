/// git-wt - per-branch worktree manager with shell integration.
///
/// Invoked directly or as `git wt` through the wrapper installed by
/// `--init`. stdout carries at most one absolute worktree path per
/// invocation; everything else goes to stderr so the wrapper can decide
/// whether to cd.
use anyhow::Result;
use clap::Parser;
use git_wt::cli::{self, Args, Operation};
use git_wt::git::GitCommand;
use git_wt::logging::init_logging;
use git_wt::repo::Repository;
use git_wt::shell::generate_init_script;
use git_wt::worktree::{create, delete, list};
use git_wt::{check_dependencies, is_git_repository, log_info, output};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        output::emit_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let (operation, options) = cli::classify(args)?;

    match operation {
        // Script generation needs no repository and no git binary.
        Operation::InitScript(shell) => {
            print!(
                "{}",
                generate_init_script(shell, options.nocd, options.picker())
            );
            Ok(())
        }
        Operation::CreateOrSwitch(branch) => {
            let (git, repo) = open_repository()?;
            let outcome = create::create_or_switch(&git, &repo, &branch)?;
            if outcome.created {
                log_info!(
                    "Created worktree for '{}' at '{}'",
                    branch,
                    outcome.path.display()
                );
            }
            output::emit_cd_path(&outcome.path, options.nocd);
            Ok(())
        }
        Operation::Delete {
            targets,
            force,
            allow_default,
        } => {
            let (git, repo) = open_repository()?;
            delete::delete_targets(&git, &repo, &targets, force, allow_default)
        }
        Operation::List => {
            let (git, _repo) = open_repository()?;
            let entries = list::worktree_entries(&git)?;
            if entries.is_empty() {
                output::emit_diagnostic("No worktrees found");
            } else {
                output::emit_diagnostic(&list::render_table(&entries));
            }
            Ok(())
        }
    }
}

fn open_repository() -> Result<(GitCommand, Repository)> {
    check_dependencies()?;
    if !is_git_repository()? {
        anyhow::bail!("Not inside a Git repository");
    }
    let git = GitCommand::new(false);
    let repo = Repository::discover(&git)?;
    Ok((git, repo))
}
