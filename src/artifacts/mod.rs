//! Data structures and algorithms
//!
//! - `branch`: branch names and revision expressions
//! - `checkout`: working copy migration and untracked-file detection
//! - `core`: shared utilities (commit clock)
//! - `index`: on-disk layout of the staging area
//! - `log`: history traversal and log entries
//! - `merge`: split point search and three-way reconciliation
//! - `objects`: blobs, commits, trees and object ids
//! - `status`: working tree status inspection

pub mod branch;
pub mod checkout;
pub mod core;
pub mod index;
pub mod log;
pub mod merge;
pub mod objects;
pub mod status;
