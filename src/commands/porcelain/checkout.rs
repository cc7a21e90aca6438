use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::tree::Tree;
use crate::errors::RepositoryError;
use std::path::Path;

impl Repository {
    /// Switch the working copy and HEAD to another branch
    pub fn checkout_branch(&self, name: &str) -> anyhow::Result<BranchName> {
        self.load_index()?;

        let unknown_branch = || RepositoryError::UnknownBranch(name.to_string());
        let branch_name = BranchName::try_parse(name.to_string()).map_err(|_| unknown_branch())?;
        let target_oid = self
            .refs()
            .read_branch(&branch_name)?
            .ok_or_else(unknown_branch)?;

        if self.refs().is_current_branch(&branch_name)? {
            anyhow::bail!(RepositoryError::AlreadyOnBranch(branch_name.to_string()));
        }

        let (_, current) = self.head_commit()?;
        let target = self.database().parse_object_as_commit(&target_oid)?;
        self.migrate(current.tree(), target.tree())?;

        self.refs().set_head_to_branch(&branch_name)?;

        Ok(branch_name)
    }

    /// Restore one file from a commit (HEAD by default); the staging area is untouched
    pub fn checkout_file(&self, revision: Option<&str>, path: &Path) -> anyhow::Result<()> {
        self.require_initialized()?;

        let commit_oid = match revision {
            Some(revision) => self.resolve_revision(revision)?,
            None => self.head_oid()?,
        };
        let commit = self.database().parse_object_as_commit(&commit_oid)?;

        let path = self.workspace().relativize(path)?;
        let blob_oid = commit
            .tree()
            .get(&path)
            .ok_or_else(|| RepositoryError::path_not_tracked(&path))?;
        let blob = self.database().parse_object_as_blob(blob_oid)?;

        self.workspace().write_file(&path, blob.content())
    }

    /// Move the working copy from one snapshot to another and clear the
    /// staging area; the caller moves the refs afterwards
    pub(crate) fn migrate(&self, old_tree: &Tree, new_tree: &Tree) -> anyhow::Result<()> {
        Migration::new(self, old_tree, new_tree).apply_changes()?;

        let mut index = self.index_mut();
        index.clear();
        index.write_updates()
    }
}
