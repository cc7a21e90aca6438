//! Working copy transitions
//!
//! Moving the working directory from one snapshot to another (branch
//! checkout, reset, fast-forward merge) is planned first and applied only
//! once no untracked file would be overwritten.

pub mod conflict;
pub mod migration;
