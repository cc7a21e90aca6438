use crate::areas::repository::Repository;
use crate::artifacts::branch::DEFAULT_BRANCH;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::fs;

impl Repository {
    /// Create the repository layout and its root commit on `master`
    pub fn init(&self) -> anyhow::Result<ObjectId> {
        if self.is_initialized() {
            anyhow::bail!(RepositoryError::AlreadyInitialized(self.path().to_path_buf()));
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .twig/objects directory")?;
        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .twig/refs/heads directory")?;

        let root_oid = self.database().store(&Commit::root())?;
        let default_branch = BranchName::try_parse(DEFAULT_BRANCH.to_string())?;
        self.refs().create_branch(&default_branch, &root_oid)?;

        self.index_mut()
            .write_updates()
            .context("Failed to create .twig/index file")?;

        self.refs()
            .set_head_to_branch(&default_branch)
            .context("Failed to create initial HEAD reference")?;

        tracing::info!(path = %self.path().display(), root = %root_oid, "initialized repository");

        Ok(root_oid)
    }
}
