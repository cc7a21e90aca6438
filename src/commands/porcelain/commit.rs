use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::errors::RepositoryError;
use std::fmt;

/// What `commit` reports once the new commit is recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    pub oid: ObjectId,
    /// `None` when HEAD is detached
    pub branch: Option<BranchName>,
    pub message: String,
}

impl fmt::Display for CommitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let branch = self
            .branch
            .as_ref()
            .map_or_else(|| "detached HEAD".to_string(), ToString::to_string);
        let subject = self.message.lines().next().unwrap_or_default();

        write!(f, "[{} {}] {}", branch, self.oid.to_short_oid(), subject)
    }
}

impl Repository {
    pub fn commit(&self, message: &str) -> anyhow::Result<CommitSummary> {
        self.load_index()?;
        self.write_commit(message, None)
    }

    /// Record the staged changes on top of HEAD and advance it
    ///
    /// A merge commit passes the given branch tip as `second_parent`; it is
    /// recorded even when nothing is staged.
    pub fn write_commit(
        &self,
        message: &str,
        second_parent: Option<ObjectId>,
    ) -> anyhow::Result<CommitSummary> {
        if message.trim().is_empty() {
            anyhow::bail!(RepositoryError::EmptyMessage);
        }

        let mut index = self.index_mut();
        if second_parent.is_none() && index.is_empty() {
            anyhow::bail!(RepositoryError::NothingToCommit);
        }

        let (head_oid, head) = self.head_commit()?;
        let tree = build_snapshot(head.tree(), &index);
        let parents = std::iter::once(head_oid).chain(second_parent).collect();

        let commit = Commit::new(parents, tree, message.to_string(), self.clock().now());
        let oid = self.database().store(&commit)?;

        // HEAD moves last, after the cleared staging file is saved
        index.clear();
        index.write_updates()?;
        self.refs().update_head(oid.clone())?;

        Ok(CommitSummary {
            oid,
            branch: self.refs().current_branch()?,
            message: message.to_string(),
        })
    }
}

/// The parent tree with every staged addition overlaid and every removal dropped
pub fn build_snapshot(parent: &Tree, index: &Index) -> Tree {
    let mut tree = parent.clone();

    for (path, oid) in index.additions() {
        tree.insert(path.clone(), oid.clone());
    }
    for path in index.removals() {
        tree.remove(path);
    }

    tree
}
