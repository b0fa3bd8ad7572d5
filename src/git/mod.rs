mod branch;
mod config;
mod worktree;

/// Thin wrapper around the `git` binary.
///
/// Every repository mutation goes through a subprocess call so git's own
/// locking and atomicity guarantees apply; this tool adds no locking of its
/// own. Failures carry git's stderr text for surfacing on the diagnostic
/// channel.
pub struct GitCommand {
    pub(crate) quiet: bool,
}

impl GitCommand {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_command_new() {
        let git = GitCommand::new(true);
        assert!(git.quiet);

        let git = GitCommand::new(false);
        assert!(!git.quiet);
    }
}
