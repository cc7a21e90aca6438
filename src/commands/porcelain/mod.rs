//! Porcelain commands (user-facing operations)
//!
//! Each command is an `impl Repository` block that returns a value for the
//! binary to render; none of them prints.
//!
//! ## Commands
//!
//! - `init`: create the repository and its root commit
//! - `add`, `rm`: stage and unstage files
//! - `commit`: record the staged snapshot
//! - `branch`: create, delete and list branches
//! - `checkout`: switch branches or restore single files
//! - `reset`: move the current branch to any commit
//! - `merge`: three-way merge of another branch
//! - `log`: history listing, global listing and message search
//! - `status`: staging and working copy overview

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod status;
