//! Merge engine
//!
//! - `split_point`: common ancestor discovery over both parents of merges
//! - `reconcile`: per-path three-way classification and conflict markers
//!
//! The porcelain `merge` command drives both and reports a [`MergeOutcome`].

pub mod reconcile;
pub mod split_point;

use crate::artifacts::objects::object_id::ObjectId;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The current branch moved to the given tip; no commit was created
    FastForwarded,
    /// The given tip is already part of the current history
    AlreadyAncestor,
    Merged { commit: ObjectId, conflict: bool },
}

impl fmt::Display for MergeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeOutcome::FastForwarded => write!(f, "Current branch fast-forwarded."),
            MergeOutcome::AlreadyAncestor => {
                write!(f, "Given branch is an ancestor of the current branch.")
            }
            MergeOutcome::Merged { conflict: true, .. } => {
                write!(f, "Encountered a merge conflict.")
            }
            MergeOutcome::Merged { commit, .. } => {
                write!(f, "Merged as {}.", commit.to_short_oid())
            }
        }
    }
}
