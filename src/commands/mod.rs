//! Command implementations, as methods on [`crate::areas::repository::Repository`]
//!
//! - `plumbing`: direct object access (cat-file, hash-object)
//! - `porcelain`: the user-facing workflow (init, add, commit, merge, ...)
//!
//! Commands return values; rendering them is left to the binary.

pub mod plumbing;
pub mod porcelain;
