use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use derive_new::new;
use std::path::Path;

/// Compares working files against the blob ids they are expected to hold
#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    /// The blob id the working file would get, if it exists
    pub fn workspace_oid(&self, path: &Path) -> anyhow::Result<Option<ObjectId>> {
        let workspace = self.repository.workspace();
        if !workspace.file_exists(path) {
            return Ok(None);
        }

        Ok(Some(workspace.parse_blob(path)?.object_id()?))
    }

    pub fn check_against_workspace(
        &self,
        path: &Path,
        expected: &ObjectId,
    ) -> anyhow::Result<Option<WorkspaceChangeType>> {
        Ok(match self.workspace_oid(path)? {
            None => Some(WorkspaceChangeType::Deleted),
            Some(oid) if &oid != expected => Some(WorkspaceChangeType::Modified),
            Some(_) => None,
        })
    }
}
