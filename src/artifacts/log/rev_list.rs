use crate::areas::repository::Repository;
use crate::artifacts::log::log_entry::LogEntry;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// First-parent history, newest first
#[derive(Clone, new)]
pub struct RevList<'r> {
    repository: &'r Repository,
    start: ObjectId,
}

impl<'r> IntoIterator for RevList<'r> {
    type Item = anyhow::Result<LogEntry>;
    type IntoIter = RevListIntoIter<'r>;

    fn into_iter(self) -> Self::IntoIter {
        RevListIntoIter {
            repository: self.repository,
            current_commit_oid: Some(self.start),
        }
    }
}

#[derive(Clone)]
pub struct RevListIntoIter<'r> {
    repository: &'r Repository,
    current_commit_oid: Option<ObjectId>,
}

impl Iterator for RevListIntoIter<'_> {
    type Item = anyhow::Result<LogEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        match self.repository.database().parse_object_as_commit(&commit_oid) {
            Ok(commit) => {
                self.current_commit_oid = commit.parent().cloned();
                Some(Ok(LogEntry::new(commit_oid, commit)))
            }
            Err(error) => Some(Err(error)),
        }
    }
}
