//! Per-path three-way reconciliation
//!
//! Given the trees at the split point (S), the current tip (C) and the given
//! tip (G), every path of `S ∪ C ∪ G` is classified by comparing blob ids,
//! where absence counts as a value of its own:
//!
//! | condition                     | resolution        |
//! |-------------------------------|-------------------|
//! | C == G                        | keep C            |
//! | S == C, G present             | take G            |
//! | S == C, G absent              | remove the path   |
//! | S == G                        | keep C            |
//! | S, C, G pairwise different    | conflict          |
//!
//! Kept paths need no action and are left out of the plan.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use bytes::{BufMut, Bytes, BytesMut};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Write the given side's blob and stage it
    Take(ObjectId),
    /// Drop the path from the tree and the working copy
    Remove,
    /// Both sides diverged from the split point
    Conflict {
        current: Option<ObjectId>,
        given: Option<ObjectId>,
    },
}

/// Actions a merge has to perform, by path
pub type MergePlan = BTreeMap<PathBuf, Resolution>;

pub fn reconcile(split: &Tree, current: &Tree, given: &Tree) -> MergePlan {
    let paths: BTreeSet<&PathBuf> = split
        .paths()
        .chain(current.paths())
        .chain(given.paths())
        .collect();

    let mut plan = MergePlan::new();
    for path in paths {
        let base = split.get(path);
        let ours = current.get(path);
        let theirs = given.get(path);

        let resolution = if ours == theirs || base == theirs {
            None
        } else if base == ours {
            Some(match theirs {
                Some(oid) => Resolution::Take(oid.clone()),
                None => Resolution::Remove,
            })
        } else {
            Some(Resolution::Conflict {
                current: ours.cloned(),
                given: theirs.cloned(),
            })
        };

        tracing::debug!(path = %path.display(), ?resolution, "reconciled path");

        if let Some(resolution) = resolution {
            plan.insert(path.clone(), resolution);
        }
    }

    plan
}

/// Content written in place of a conflicted file
pub fn conflict_markers(current: &[u8], given: &[u8]) -> Bytes {
    let mut content = BytesMut::with_capacity(current.len() + given.len() + 32);

    content.put_slice(b"<<<<<<< HEAD\n");
    content.put_slice(current);
    content.put_slice(b"=======\n");
    content.put_slice(given);
    content.put_slice(b">>>>>>>\n");

    content.freeze()
}
