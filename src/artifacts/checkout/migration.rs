//! Working copy migration between two snapshots
//!
//! 1. Plan: every path of the target tree is written (added when the old
//!    tree lacks it, modified otherwise); every path only the old tree
//!    tracks is deleted.
//! 2. Check: a path the old tree does not track but the working directory
//!    holds with different content aborts the migration before any write.
//! 3. Apply: the workspace executes deletions, then writes.

use crate::areas::repository::Repository;
use crate::artifacts::checkout::conflict::UntrackedConflicts;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use bytes::Bytes;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionType {
    Add,
    Delete,
    Modify,
}

/// Planned actions grouped by type; deletions carry no blob
pub type ActionsSet = HashMap<ActionType, Vec<(PathBuf, Option<ObjectId>)>>;

pub struct Migration<'r> {
    repository: &'r Repository,
    old_tree: &'r Tree,
    new_tree: &'r Tree,
    actions: ActionsSet,
}

impl<'r> Migration<'r> {
    pub fn new(repository: &'r Repository, old_tree: &'r Tree, new_tree: &'r Tree) -> Self {
        let actions = HashMap::from([
            (ActionType::Add, Vec::new()),
            (ActionType::Delete, Vec::new()),
            (ActionType::Modify, Vec::new()),
        ]);

        Self {
            repository,
            old_tree,
            new_tree,
            actions,
        }
    }

    pub fn actions_of(&self, action: &ActionType) -> &[(PathBuf, Option<ObjectId>)] {
        self.actions.get(action).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn apply_changes(&mut self) -> anyhow::Result<()> {
        self.plan_changes()?;
        self.repository.workspace().apply_migration(self)
    }

    pub fn plan_changes(&mut self) -> anyhow::Result<()> {
        let mut conflicts = UntrackedConflicts::new(self.repository.workspace(), self.old_tree);

        for (path, oid) in self.new_tree {
            let action = if self.old_tree.contains(path) {
                ActionType::Modify
            } else {
                conflicts.check(path, oid)?;
                ActionType::Add
            };

            self.actions
                .entry(action)
                .or_default()
                .push((path.clone(), Some(oid.clone())));
        }

        for path in self.old_tree.paths() {
            if !self.new_tree.contains(path) {
                self.actions
                    .entry(ActionType::Delete)
                    .or_default()
                    .push((path.clone(), None));
            }
        }

        conflicts.into_result()?;

        tracing::debug!(
            added = self.actions_of(&ActionType::Add).len(),
            modified = self.actions_of(&ActionType::Modify).len(),
            deleted = self.actions_of(&ActionType::Delete).len(),
            "planned working copy migration"
        );

        Ok(())
    }

    pub fn load_blob_data(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let blob = self.repository.database().parse_object_as_blob(object_id)?;

        Ok(blob.into_content())
    }
}
