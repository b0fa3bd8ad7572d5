//! Worktree lifecycle executor.
//!
//! Performs create-or-switch, delete, and list against the repository via
//! [`crate::git::GitCommand`]. Each operation is a short sequence of
//! synchronous subprocess calls; delete batches run strictly in order so
//! every outcome can be attributed to its target.

pub mod create;
pub mod delete;
pub mod list;
