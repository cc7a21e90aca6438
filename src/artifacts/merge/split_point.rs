//! Split point discovery
//!
//! The split point of two branch tips is the common ancestor a merge
//! reconciles against. It is found with two breadth-first walks over the
//! full commit graph, following every parent of every merge commit:
//!
//! 1. Walk from the current tip and mark each ancestor (with its distance).
//! 2. Walk from the given tip; the first commit dequeued that the first walk
//!    marked is the split point.
//!
//! Both walks use explicit work queues and a visited map, so deep histories
//! never recurse.
//!
//! ## Debug Logging
//!
//! Building with `--features debug_merge` prints every step of both walks to
//! stderr.

use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use bitflags::bitflags;
use std::collections::{HashMap, VecDeque};
use std::fmt;

macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_merge")]
        {
            eprintln!($($arg)*);
        }
    };
}

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    struct VisitState: u8 {
        const NONE = 0b00;
        const FROM_CURRENT = 0b01;
        const FROM_GIVEN = 0b10;
    }
}

impl fmt::Debug for VisitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = Vec::new();
        if self.contains(VisitState::FROM_CURRENT) {
            flags.push("CURRENT");
        }
        if self.contains(VisitState::FROM_GIVEN) {
            flags.push("GIVEN");
        }
        if flags.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", flags.join("|"))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Visit {
    state: VisitState,
    /// Minimum number of parent edges from the current tip
    distance: usize,
}

/// Finds the split point of two commits
///
/// `CommitLoaderFn` returns the graph shape of a commit; it lets the finder
/// run over the object database as well as over in-memory graphs.
pub struct SplitPointFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    commit_loader: CommitLoaderFn,
}

impl<CommitLoaderFn> SplitPointFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    pub fn new(commit_loader: CommitLoaderFn) -> Self {
        Self { commit_loader }
    }

    pub fn find_split_point(
        &self,
        current_tip: &ObjectId,
        given_tip: &ObjectId,
    ) -> anyhow::Result<ObjectId> {
        let mut visits = self.mark_current_ancestors(current_tip)?;

        let mut queue = VecDeque::from([given_tip.clone()]);
        while let Some(commit_id) = queue.pop_front() {
            let visit = visits.entry(commit_id.clone()).or_insert(Visit {
                state: VisitState::NONE,
                distance: usize::MAX,
            });

            if visit.state.contains(VisitState::FROM_CURRENT) {
                debug_log!("Split point {} at distance {}", commit_id, visit.distance);
                tracing::debug!(
                    split_point = %commit_id,
                    distance_from_current = visit.distance,
                    "found split point"
                );
                return Ok(commit_id);
            }
            if visit.state.contains(VisitState::FROM_GIVEN) {
                continue;
            }
            visit.state |= VisitState::FROM_GIVEN;
            debug_log!("Given walk: {} {:?}", commit_id, visit.state);

            for parent in (self.commit_loader)(&commit_id)?.parents {
                queue.push_back(parent);
            }
        }

        Err(RepositoryError::NoSplitPointFound(current_tip.clone(), given_tip.clone()).into())
    }

    fn mark_current_ancestors(
        &self,
        current_tip: &ObjectId,
    ) -> anyhow::Result<HashMap<ObjectId, Visit>> {
        let mut visits = HashMap::new();
        let mut queue = VecDeque::from([(current_tip.clone(), 0usize)]);

        while let Some((commit_id, distance)) = queue.pop_front() {
            if visits.contains_key(&commit_id) {
                continue;
            }
            debug_log!("Current walk: {} at distance {}", commit_id, distance);

            let commit = (self.commit_loader)(&commit_id)?;
            visits.insert(
                commit_id,
                Visit {
                    state: VisitState::FROM_CURRENT,
                    distance,
                },
            );

            for parent in commit.parents {
                if !visits.contains_key(&parent) {
                    queue.push_back((parent, distance + 1));
                }
            }
        }

        Ok(visits)
    }
}
