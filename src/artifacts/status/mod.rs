//! Working tree status inspection
//!
//! Compares the working directory with the staging area and the HEAD
//! snapshot.
//!
//! - `file_change`: change kinds and section colours
//! - `inspector`: per-file content comparison
//! - `status_info`: section aggregation and rendering

pub mod file_change;
pub mod inspector;
pub mod status_info;
