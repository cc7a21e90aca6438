use crate::areas::repository::Repository;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;

impl Repository {
    /// Load any stored object by full or abbreviated id
    pub fn cat_file(&self, object_id: &str) -> anyhow::Result<ObjectBox> {
        self.require_initialized()?;

        let not_unique = || RepositoryError::AmbiguousOrNotFound(object_id.to_string());
        if !ObjectId::is_valid_prefix(object_id) {
            anyhow::bail!(not_unique());
        }

        let matches = self.database().find_objects_by_prefix(object_id)?;
        match matches.as_slice() {
            [oid] => self.database().parse_object(oid),
            _ => Err(not_unique().into()),
        }
    }
}
