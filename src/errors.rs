//! Repository error kinds
//!
//! Every user-recoverable failure of a repository operation is one of the
//! variants below. Operations return `anyhow::Result` and raise these through
//! `anyhow::bail!`, so callers match on a kind with
//! `err.downcast_ref::<RepositoryError>()`.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No `.twig` directory at the repository root
    #[error("not a twig repository: {}", .0.display())]
    NotARepository(PathBuf),

    #[error("a twig version-control system already exists in {}", .0.display())]
    AlreadyInitialized(PathBuf),

    /// An object, commit, branch or file is absent
    #[error("{0} does not exist")]
    NotFound(String),

    /// Branch name collision
    #[error("a branch named '{0}' already exists")]
    AlreadyExists(String),

    #[error("'{0}' is not a valid branch name")]
    InvalidBranchName(String),

    /// Zero or several commits start with the given id prefix
    #[error("no unique commit matches '{0}'")]
    AmbiguousOrNotFound(String),

    #[error("please enter a commit message")]
    EmptyMessage,

    #[error("no changes added to the commit")]
    NothingToCommit,

    #[error("no reason to remove the file {}", .0.display())]
    NothingToRemove(PathBuf),

    #[error("you have uncommitted changes")]
    DirtyWorkingState,

    #[error("a branch named '{0}' does not exist")]
    UnknownBranch(String),

    #[error("cannot merge a branch with itself")]
    SelfMerge,

    #[error(
        "there is an untracked file in the way; delete it, or add and commit it first:\n{}",
        format_paths(.0)
    )]
    UntrackedFileConflict(Vec<PathBuf>),

    #[error("cannot delete the current branch '{0}'")]
    CannotDeleteCurrent(String),

    /// The ancestor search exhausted the history without an intersection
    #[error("no split point found between {0} and {1}")]
    NoSplitPointFound(ObjectId, ObjectId),

    #[error("no commit with id {0} exists")]
    CommitNotFound(String),

    #[error("file {} does not exist in that commit", .0.display())]
    PathNotTracked(PathBuf),

    #[error("already on branch '{0}'")]
    AlreadyOnBranch(String),

    #[error("invalid object {0}: {1}")]
    InvalidObject(ObjectId, String),

    /// A file name that cannot be recorded in a commit: not UTF-8, or holding a line break
    #[error("unsupported file name {0:?}")]
    UnsupportedPath(PathBuf),
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("\t{}", path.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

impl RepositoryError {
    pub fn path_not_tracked(path: &Path) -> Self {
        RepositoryError::PathNotTracked(path.to_path_buf())
    }
}
