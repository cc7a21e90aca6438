use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use derive_new::new;
use std::fmt;

/// A commit as listed by `log` and `global-log`
///
/// ```text
/// ===
/// commit 3e8bf1d794ca2e9ef8a4007275acf3751c7170ff
/// Merge: 4975af1 2c1ead1
/// Date: Thu Nov 9 17:01:33 2017 -0800
/// Merged development into master.
/// ```
///
/// The `Merge:` line appears for merge commits only.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LogEntry {
    oid: ObjectId,
    commit: Commit,
}

impl LogEntry {
    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn commit(&self) -> &Commit {
        &self.commit
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===")?;
        writeln!(f, "{}", format!("commit {}", self.oid).yellow())?;
        if let [first, second, ..] = self.commit.parents() {
            writeln!(
                f,
                "Merge: {} {}",
                first.to_short_oid(),
                second.to_short_oid()
            )?;
        }
        writeln!(f, "Date: {}", self.commit.readable_timestamp())?;
        writeln!(f, "{}", self.commit.message())
    }
}
