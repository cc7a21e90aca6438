//! Commit object
//!
//! Commits are immutable snapshot records. Each holds:
//! - a timestamp (the zero epoch instant for the root commit)
//! - the ordered parent ids (none for the root, two for a merge)
//! - the complete tree of tracked files
//! - a message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! timestamp <unix-seconds> <+zzzz>
//! parent <parent-sha>
//! blob <blob-sha> <path>
//!
//! <commit message>
//! ```
//!
//! Tree entries are written in sorted path order, so the id of a commit is a
//! pure function of its fields.

use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::{Tree, storable_name};
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, Utc};
use std::io::BufRead;
use std::path::PathBuf;

/// Message of the commit created by `init`
pub const ROOT_MESSAGE: &str = "initial commit";

/// Date format shared by `log` and `global-log`
pub const READABLE_DATE_FORMAT: &str = "%a %b %-d %H:%M:%S %Y %z";

/// Slim representation of a commit
///
/// Only the graph shape, which is all the ancestor searches need.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SlimCommit {
    pub oid: ObjectId,
    pub parents: Vec<ObjectId>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    parents: Vec<ObjectId>,
    tree: Tree,
    message: String,
    timestamp: DateTime<FixedOffset>,
}

impl Commit {
    pub fn new(
        parents: Vec<ObjectId>,
        tree: Tree,
        message: String,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        Commit {
            parents,
            tree,
            message,
            timestamp,
        }
    }

    /// The commit every repository starts from
    ///
    /// No parents, no files, the epoch timestamp at offset +00:00: two
    /// independently initialized repositories share the same root id.
    pub fn root() -> Self {
        Commit::new(
            vec![],
            Tree::default(),
            ROOT_MESSAGE.to_string(),
            DateTime::<Utc>::UNIX_EPOCH.fixed_offset(),
        )
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// First parent, followed by `log` and by `~`/`^` revisions
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Timestamp like "Thu Jan 1 00:00:00 1970 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format(READABLE_DATE_FORMAT).to_string()
    }

    pub fn to_slim(&self, oid: ObjectId) -> SlimCommit {
        SlimCommit {
            oid,
            parents: self.parents.clone(),
        }
    }

    fn body(&self) -> String {
        let mut lines = vec![];

        lines.push(format!(
            "timestamp {} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        ));
        for parent in &self.parents {
            lines.push(format!("parent {parent}"));
        }
        for (path, oid) in &self.tree {
            lines.push(format!("blob {oid} {}", path.display()));
        }

        format!("{}\n\n{}", lines.join("\n"), self.message)
    }
}

/// Parse a `+hhmm` / `-hhmm` offset
fn parse_offset(offset: &str) -> anyhow::Result<FixedOffset> {
    let invalid = || anyhow::anyhow!("Invalid timezone: {offset}");

    let (sign, digits) = match offset.split_at_checked(1) {
        Some(("+", digits)) => (1, digits),
        Some(("-", digits)) => (-1, digits),
        _ => return Err(invalid()),
    };
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours = digits[..2].parse::<i32>().map_err(|_| invalid())?;
    let minutes = digits[2..].parse::<i32>().map_err(|_| invalid())?;

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

fn parse_timestamp(line: &str) -> anyhow::Result<DateTime<FixedOffset>> {
    let (seconds, offset) = line
        .split_once(' ')
        .context("Invalid commit object: malformed timestamp line")?;
    let seconds = seconds
        .parse::<i64>()
        .map_err(|_| anyhow::anyhow!("Invalid timestamp: {seconds}"))?;

    let offset = parse_offset(offset)?;
    let instant = DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| anyhow::anyhow!("Timestamp out of range: {seconds}"))?;

    Ok(instant.with_timezone(&offset))
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        for path in self.tree.paths() {
            storable_name(path)?;
        }

        Ok(frame(self.object_type(), self.body().as_bytes()))
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let (header, message) = content
            .split_once("\n\n")
            .context("Invalid commit object: missing message separator")?;
        let mut lines = header.lines();

        let timestamp = lines
            .next()
            .and_then(|line| line.strip_prefix("timestamp "))
            .context("Invalid commit object: missing timestamp line")?;
        let timestamp = parse_timestamp(timestamp)?;

        let mut parents = Vec::new();
        let mut tree = Tree::default();

        for line in lines {
            if let Some(parent) = line.strip_prefix("parent ") {
                parents.push(ObjectId::try_parse(parent.to_string())?);
            } else if let Some(entry) = line.strip_prefix("blob ") {
                let (oid, path) = entry
                    .split_once(' ')
                    .context("Invalid commit object: malformed blob line")?;
                tree.insert(PathBuf::from(path), ObjectId::try_parse(oid.to_string())?);
            } else {
                anyhow::bail!("Invalid commit object: unexpected line {line:?}");
            }
        }

        Ok(Self::new(parents, tree, message.to_string(), timestamp))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        self.body()
    }
}
