use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Check out an arbitrary commit and move the current branch to it
    pub fn reset(&self, revision: &str) -> anyhow::Result<ObjectId> {
        self.load_index()?;

        let target_oid = self.resolve_revision(revision)?;
        let (_, current) = self.head_commit()?;
        let target = self.database().parse_object_as_commit(&target_oid)?;

        self.migrate(current.tree(), target.tree())?;
        self.refs().update_head(target_oid.clone())?;

        Ok(target_oid)
    }
}
