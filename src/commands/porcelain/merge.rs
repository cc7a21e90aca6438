use crate::areas::database::CommitCache;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::conflict::UntrackedConflicts;
use crate::artifacts::merge::MergeOutcome;
use crate::artifacts::merge::reconcile::{Resolution, conflict_markers, reconcile};
use crate::artifacts::merge::split_point::SplitPointFinder;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use bytes::Bytes;
use std::path::PathBuf;

/// A working-copy change the merge performs before committing
enum MergeWrite {
    Write { path: PathBuf, blob: Blob, oid: ObjectId },
    Delete { path: PathBuf },
}

impl Repository {
    pub fn merge(&self, given: &str) -> anyhow::Result<MergeOutcome> {
        self.load_index()?;
        if !self.index().is_empty() {
            anyhow::bail!(RepositoryError::DirtyWorkingState);
        }

        let unknown_branch = || RepositoryError::UnknownBranch(given.to_string());
        let given_branch = BranchName::try_parse(given.to_string()).map_err(|_| unknown_branch())?;
        let given_tip = self
            .refs()
            .read_branch(&given_branch)?
            .ok_or_else(unknown_branch)?;

        let current_branch = self.refs().current_branch()?;
        if current_branch.as_ref() == Some(&given_branch) {
            anyhow::bail!(RepositoryError::SelfMerge);
        }

        let (current_tip, current) = self.head_commit()?;

        let commit_cache = CommitCache::new();
        let database = self.database();
        let split_oid = SplitPointFinder::new(|oid| commit_cache.get_or_load_slim_commit(database, oid))
            .find_split_point(&current_tip, &given_tip)?;

        if split_oid == given_tip {
            return Ok(MergeOutcome::AlreadyAncestor);
        }

        let given_commit = database.parse_object_as_commit(&given_tip)?;

        if split_oid == current_tip {
            tracing::debug!(from = %current_tip, to = %given_tip, "fast-forwarding");
            self.migrate(current.tree(), given_commit.tree())?;
            self.refs().update_head(given_tip)?;

            return Ok(MergeOutcome::FastForwarded);
        }

        let split = database.parse_object_as_commit(&split_oid)?;
        let plan = reconcile(split.tree(), current.tree(), given_commit.tree());

        let mut conflict = false;
        let mut writes = Vec::with_capacity(plan.len());
        for (path, resolution) in plan {
            let blob = match resolution {
                Resolution::Remove => {
                    writes.push(MergeWrite::Delete { path });
                    continue;
                }
                Resolution::Take(oid) => database.parse_object_as_blob(&oid)?,
                Resolution::Conflict { current, given } => {
                    conflict = true;
                    let current_content = self.load_optional_blob(current.as_ref())?;
                    let given_content = self.load_optional_blob(given.as_ref())?;
                    Blob::new(conflict_markers(&current_content, &given_content))
                }
            };

            let oid = blob.object_id()?;
            writes.push(MergeWrite::Write { path, blob, oid });
        }

        let mut untracked = UntrackedConflicts::new(self.workspace(), current.tree());
        for write in &writes {
            if let MergeWrite::Write { path, oid, .. } = write {
                untracked.check(path, oid)?;
            }
        }
        untracked.into_result()?;

        {
            let mut index = self.index_mut();
            for write in writes {
                match write {
                    MergeWrite::Write { path, blob, oid } => {
                        database.store(&blob)?;
                        self.workspace().write_file(&path, blob.content())?;
                        index.stage_addition(path, oid);
                    }
                    MergeWrite::Delete { path } => {
                        self.workspace().delete_file(&path)?;
                        index.stage_removal(path);
                    }
                }
            }
        }

        let current_name = current_branch.map_or_else(|| "HEAD".to_string(), |name| name.to_string());
        let message = format!("Merged {given_branch} into {current_name}.");
        let summary = self.write_commit(&message, Some(given_tip))?;

        tracing::info!(commit = %summary.oid, conflict, "merge committed");

        Ok(MergeOutcome::Merged {
            commit: summary.oid,
            conflict,
        })
    }

    fn load_optional_blob(&self, oid: Option<&ObjectId>) -> anyhow::Result<Bytes> {
        match oid {
            Some(oid) => Ok(self.database().parse_object_as_blob(oid)?.into_content()),
            None => Ok(Bytes::new()),
        }
    }
}
