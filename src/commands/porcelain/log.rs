use crate::areas::repository::Repository;
use crate::artifacts::log::log_entry::LogEntry;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::RepositoryError;

impl Repository {
    /// First-parent history from HEAD, newest first
    pub fn log(&self) -> anyhow::Result<Vec<LogEntry>> {
        self.require_initialized()?;

        RevList::new(self, self.head_oid()?).into_iter().collect()
    }

    /// Every commit ever stored, in object store order
    pub fn global_log(&self) -> anyhow::Result<Vec<LogEntry>> {
        self.require_initialized()?;

        let database = self.database();
        let mut entries = Vec::new();
        for oid in database.list_objects()? {
            if database.object_type(&oid)? == ObjectType::Commit {
                let commit = database.parse_object_as_commit(&oid)?;
                entries.push(LogEntry::new(oid, commit));
            }
        }

        Ok(entries)
    }

    /// Ids of the commits whose message is exactly `message`
    pub fn find(&self, message: &str) -> anyhow::Result<Vec<ObjectId>> {
        let matches = self
            .global_log()?
            .into_iter()
            .filter(|entry| entry.commit().message() == message)
            .map(|entry| entry.oid().clone())
            .collect::<Vec<_>>();

        if matches.is_empty() {
            anyhow::bail!(RepositoryError::NotFound(format!(
                "commit with message '{message}'"
            )));
        }

        Ok(matches)
    }
}
