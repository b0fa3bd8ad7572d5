//! Output channel discipline.
//!
//! stdout carries exactly one line — the absolute worktree path of a
//! successful create or switch — and nothing else, ever. The shell wrapper
//! reads that line and changes directory when it denotes an existing
//! directory. Tables, progress, git chatter, and errors all go to stderr so
//! they can never be mistaken for a cd target.

use crate::styles;
use std::path::Path;

/// Report the worktree path of a successful create or switch.
///
/// With `nocd` the path is demoted to stderr: the wrapper then has nothing
/// to cd into, which is exactly the point of the flag.
pub fn emit_cd_path(path: &Path, nocd: bool) {
    if nocd {
        eprintln!("{}", path.display());
    } else {
        println!("{}", path.display());
    }
}

/// Print human-facing content (list tables, delete summaries) to stderr.
pub fn emit_diagnostic(content: &str) {
    eprintln!("{content}");
}

/// Print a fatal error to stderr in git's lowercase-prefix format.
pub fn emit_error(msg: &str) {
    if styles::colors_enabled_stderr() {
        eprintln!("{}error:{} {msg}", styles::RED, styles::RESET);
    } else {
        eprintln!("error: {msg}");
    }
}
