use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::path::Path;

impl Repository {
    /// Blob id of a working file, stored in the database when `write` is set
    pub fn hash_object(&self, path: &Path, write: bool) -> anyhow::Result<ObjectId> {
        let content = std::fs::read(self.path().join(path))
            .with_context(|| format!("Unable to read file {}", path.display()))?;
        let blob = Blob::new(content.into());

        if !write {
            return blob.object_id();
        }

        self.require_initialized()?;
        self.database().store(&blob)
    }
}
