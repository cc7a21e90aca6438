//! Snapshot tree
//!
//! A flat, sorted mapping from repository-relative path to blob id. Trees are
//! not stored as separate objects: every commit embeds its complete tree.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: BTreeMap<PathBuf, ObjectId>,
}

impl Tree {
    pub fn get(&self, path: &Path) -> Option<&ObjectId> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn insert(&mut self, path: PathBuf, oid: ObjectId) -> Option<ObjectId> {
        self.entries.insert(path, oid)
    }

    pub fn remove(&mut self, path: &Path) -> Option<ObjectId> {
        self.entries.remove(path)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, PathBuf, ObjectId> {
        self.entries.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The textual form a path is recorded under
///
/// Commit bodies are line oriented and staging records hold UTF-8, so a
/// name must be valid UTF-8 without `\n` or `\r`.
pub fn storable_name(path: &Path) -> anyhow::Result<&str> {
    match path.to_str() {
        Some(name) if !name.contains(['\n', '\r']) => Ok(name),
        _ => Err(RepositoryError::UnsupportedPath(path.to_path_buf()).into()),
    }
}

impl FromIterator<(PathBuf, ObjectId)> for Tree {
    fn from_iter<I: IntoIterator<Item = (PathBuf, ObjectId)>>(iter: I) -> Self {
        Tree {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Tree {
    type Item = (PathBuf, ObjectId);
    type IntoIter = btree_map::IntoIter<PathBuf, ObjectId>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'t> IntoIterator for &'t Tree {
    type Item = (&'t PathBuf, &'t ObjectId);
    type IntoIter = btree_map::Iter<'t, PathBuf, ObjectId>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
