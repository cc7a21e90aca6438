//! Staging area
//!
//! The staging area buffers the changes of the next commit:
//! - `additions`: path to the blob id of its new content
//! - `removals`: paths to drop from the snapshot
//!
//! A path is never in both at once. The area is persisted in `.twig/index`
//! (see `artifacts::index` for the layout) and cleared after every commit.

use crate::artifacts::index::checksum::Checksum;
use crate::artifacts::index::index_entry::{StagedAddition, StagedRemoval};
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::HEADER_SIZE;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the staging file (`.twig/index`)
    path: Box<Path>,
    additions: BTreeMap<PathBuf, ObjectId>,
    removals: BTreeSet<PathBuf>,
    /// Whether the in-memory state differs from what was loaded
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            additions: BTreeMap::new(),
            removals: BTreeSet::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the staging area from disk
    ///
    /// A missing or empty file is an empty staging area. Reads take a shared
    /// lock and verify the trailing checksum.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.additions.clear();
        self.removals.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new().read(true).open(&self.path)?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        if lock.deref_mut().metadata()?.len() == 0 {
            return Ok(());
        }

        let mut reader = Checksum::new(lock);
        let header = IndexHeader::deserialize(&reader.read(HEADER_SIZE)?)?;

        for _ in 0..header.additions_count {
            let addition = StagedAddition::read_from(&mut reader)?;
            self.additions.insert(addition.path, addition.oid);
        }
        for _ in 0..header.removals_count {
            let removal = StagedRemoval::read_from(&mut reader)?;
            self.removals.insert(removal.path);
        }

        reader.verify()
    }

    /// Persist the staging area under an exclusive lock
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        let lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;

        let mut writer = Checksum::new(lock);

        let header = IndexHeader::for_counts(self.additions.len(), self.removals.len())?;
        writer.write(&header.serialize()?)?;

        for (path, oid) in &self.additions {
            let addition = StagedAddition {
                path: path.clone(),
                oid: oid.clone(),
            };
            writer.write(&addition.to_bytes()?)?;
        }
        for path in &self.removals {
            let removal = StagedRemoval { path: path.clone() };
            writer.write(&removal.to_bytes()?)?;
        }

        writer.write_checksum()?;
        self.changed = false;

        Ok(())
    }

    /// Stage new content for `path`, cancelling any pending removal
    pub fn stage_addition(&mut self, path: PathBuf, oid: ObjectId) {
        tracing::debug!(path = %path.display(), %oid, "staging addition");

        self.removals.remove(&path);
        self.additions.insert(path, oid);
        self.changed = true;
    }

    /// Stage `path` for removal, cancelling any pending addition
    pub fn stage_removal(&mut self, path: PathBuf) {
        tracing::debug!(path = %path.display(), "staging removal");

        self.additions.remove(&path);
        self.removals.insert(path);
        self.changed = true;
    }

    /// Forget everything staged for `path`; returns whether anything was staged
    pub fn discard(&mut self, path: &Path) -> bool {
        let discarded = self.additions.remove(path).is_some() | self.removals.remove(path);

        if discarded {
            tracing::debug!(path = %path.display(), "discarded staged change");
            self.changed = true;
        }

        discarded
    }

    pub fn unstage_addition(&mut self, path: &Path) -> Option<ObjectId> {
        let removed = self.additions.remove(path);
        if removed.is_some() {
            self.changed = true;
        }

        removed
    }

    pub fn additions(&self) -> &BTreeMap<PathBuf, ObjectId> {
        &self.additions
    }

    pub fn removals(&self) -> &BTreeSet<PathBuf> {
        &self.removals
    }

    pub fn staged_oid(&self, path: &Path) -> Option<&ObjectId> {
        self.additions.get(path)
    }

    pub fn is_staged_for_removal(&self, path: &Path) -> bool {
        self.removals.contains(path)
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn clear(&mut self) {
        if !self.is_empty() {
            self.changed = true;
        }

        self.additions.clear();
        self.removals.clear();
    }
}
