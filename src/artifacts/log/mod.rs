//! Commit history listing
//!
//! - `rev_list`: first-parent traversal from a starting commit
//! - `log_entry`: the text block printed for each commit

pub mod log_entry;
pub mod rev_list;
