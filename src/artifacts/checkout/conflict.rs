use crate::areas::workspace::Workspace;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::errors::RepositoryError;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Collects untracked working files that an operation would overwrite
///
/// A path is in the way when the current snapshot does not track it but the
/// working directory holds a file there whose content differs from what the
/// operation is about to write.
#[derive(Debug)]
pub struct UntrackedConflicts<'r> {
    workspace: &'r Workspace,
    tracked: &'r Tree,
    paths: BTreeSet<PathBuf>,
}

impl<'r> UntrackedConflicts<'r> {
    pub fn new(workspace: &'r Workspace, tracked: &'r Tree) -> Self {
        Self {
            workspace,
            tracked,
            paths: BTreeSet::new(),
        }
    }

    /// Record `path` if writing `incoming` there would clobber an untracked file
    pub fn check(&mut self, path: &Path, incoming: &ObjectId) -> anyhow::Result<()> {
        if self.tracked.contains(path) || !self.workspace.file_exists(path) {
            return Ok(());
        }

        let on_disk = self.workspace.parse_blob(path)?.object_id()?;
        if &on_disk != incoming {
            tracing::debug!(path = %path.display(), "untracked file in the way");
            self.paths.insert(path.to_path_buf());
        }

        Ok(())
    }

    /// Fail with every offending path, or succeed when none was found
    pub fn into_result(self) -> anyhow::Result<()> {
        if self.paths.is_empty() {
            return Ok(());
        }

        Err(RepositoryError::UntrackedFileConflict(self.paths.into_iter().collect()).into())
    }
}
