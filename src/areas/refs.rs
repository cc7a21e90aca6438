//! Reference table (branches and HEAD)
//!
//! References are text files under the repository directory:
//! - `refs/heads/<branch>` holds the 40-hex id of the branch tip
//! - `HEAD` holds either `ref: refs/heads/<branch>` or, when detached, a commit id
//!
//! Every write takes an exclusive `file_guard` lock on the ref file.

use crate::artifacts::branch::branch_name::{BranchName, SymRefName};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository directory (`.twig`)
    path: Box<Path>,
}

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

pub const HEAD_REF_NAME: &str = "HEAD";

/// What HEAD currently designates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    Branch(BranchName),
    Detached(ObjectId),
}

#[derive(Debug, Clone)]
enum SymRefOrOid {
    SymRef { sym_ref_name: SymRefName },
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read_symref_or_oid(path: &Path) -> anyhow::Result<Option<SymRefOrOid>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ref file at {:?}", path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        if let Some(symref_match) = symref_match {
            Ok(Some(SymRefOrOid::SymRef {
                sym_ref_name: SymRefName::new(symref_match[1].to_string()),
            }))
        } else {
            Ok(Some(SymRefOrOid::Oid(ObjectId::try_parse(
                content.to_string(),
            )?)))
        }
    }
}

impl Refs {
    pub fn head(&self) -> anyhow::Result<Head> {
        match SymRefOrOid::read_symref_or_oid(&self.head_path())? {
            Some(SymRefOrOid::SymRef { sym_ref_name }) => Ok(Head::Branch(
                BranchName::try_parse_sym_ref_name(&sym_ref_name)?,
            )),
            Some(SymRefOrOid::Oid(oid)) => Ok(Head::Detached(oid)),
            None => anyhow::bail!("HEAD is missing or empty at {:?}", self.head_path()),
        }
    }

    /// The checked-out branch, `None` when HEAD is detached
    pub fn current_branch(&self) -> anyhow::Result<Option<BranchName>> {
        match self.head()? {
            Head::Branch(branch_name) => Ok(Some(branch_name)),
            Head::Detached(_) => Ok(None),
        }
    }

    pub fn is_current_branch(&self, branch_name: &BranchName) -> anyhow::Result<bool> {
        Ok(self.current_branch()?.as_ref() == Some(branch_name))
    }

    /// Commit id HEAD resolves to, following the symbolic ref
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        self.read_symref(&self.head_path())
    }

    /// Advance whatever HEAD designates: the current branch, or HEAD itself when detached
    pub fn update_head(&self, oid: ObjectId) -> anyhow::Result<()> {
        self.update_symref(&self.head_path(), oid)
    }

    pub fn set_head_to_branch(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        tracing::debug!(branch = %branch_name, "moving HEAD to branch");
        self.update_ref_file(
            self.head_path(),
            format!("ref: {}", branch_name.to_sym_ref_name().as_ref_path()),
        )
    }

    pub fn set_head_detached(&self, oid: &ObjectId) -> anyhow::Result<()> {
        tracing::debug!(%oid, "detaching HEAD");
        self.update_ref_file(self.head_path(), oid.to_string())
    }

    fn read_symref(&self, path: &Path) -> anyhow::Result<Option<ObjectId>> {
        match SymRefOrOid::read_symref_or_oid(path)? {
            Some(SymRefOrOid::SymRef { sym_ref_name }) => {
                self.read_symref(&self.path.join(sym_ref_name.as_ref_path()))
            }
            Some(SymRefOrOid::Oid(oid)) => Ok(Some(oid)),
            None => Ok(None),
        }
    }

    fn update_symref(&self, path: &Path, oid: ObjectId) -> anyhow::Result<()> {
        match SymRefOrOid::read_symref_or_oid(path)? {
            Some(SymRefOrOid::SymRef { sym_ref_name }) => {
                let target_path = self.path.join(sym_ref_name.as_ref_path());
                self.update_symref(&target_path, oid)
            }
            Some(SymRefOrOid::Oid(_)) | None => {
                tracing::debug!(?path, %oid, "updating ref");
                self.update_ref_file(path.into(), oid.to_string())
            }
        }
    }

    fn update_ref_file(&self, path: Box<Path>, raw_ref: String) -> anyhow::Result<()> {
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?)?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(raw_ref.as_bytes())?;
        lock.deref_mut().write_all(b"\n")?;

        Ok(())
    }

    pub fn read_branch(&self, branch_name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        self.read_symref(&self.branch_path(branch_name))
    }

    pub fn branch_exists(&self, branch_name: &BranchName) -> bool {
        self.branch_path(branch_name).is_file()
    }

    pub fn create_branch(&self, name: &BranchName, source_oid: &ObjectId) -> anyhow::Result<()> {
        if self.branch_exists(name) {
            anyhow::bail!(RepositoryError::AlreadyExists(name.to_string()));
        }

        tracing::debug!(branch = %name, oid = %source_oid, "creating branch");
        self.update_ref_file(self.branch_path(name), source_oid.to_string())
    }

    /// Move an existing or new branch to `oid`
    pub fn point_branch(&self, name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        tracing::debug!(branch = %name, %oid, "pointing branch");
        self.update_ref_file(self.branch_path(name), oid.to_string())
    }

    pub fn delete_branch(&self, name: &BranchName) -> anyhow::Result<ObjectId> {
        let branch_path = self.branch_path(name);

        let Some(oid) = self.read_symref(&branch_path)? else {
            anyhow::bail!(RepositoryError::NotFound(format!("branch '{name}'")));
        };
        if self.is_current_branch(name)? {
            anyhow::bail!(RepositoryError::CannotDeleteCurrent(name.to_string()));
        }

        std::fs::remove_file(&branch_path)
            .with_context(|| format!("failed to delete branch file at {:?}", branch_path))?;
        self.prune_branch_empty_parent_dirs(&branch_path)?;
        tracing::debug!(branch = %name, %oid, "deleted branch");

        Ok(oid)
    }

    /// All branch names in sorted order
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();

        let mut branches = WalkDir::new(&heads_path)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| {
                let relative_path = entry.path().strip_prefix(self.path.as_ref())?;
                BranchName::try_parse_sym_ref_name(&SymRefName::new(
                    relative_path.to_string_lossy().to_string(),
                ))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        branches.sort();

        Ok(branches)
    }

    fn prune_branch_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.heads_path().as_ref()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent).with_context(|| {
                format!("failed to remove empty branch directory at {:?}", parent)
            })?;
            self.prune_branch_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    fn branch_path(&self, branch_name: &BranchName) -> Box<Path> {
        self.path
            .join(branch_name.to_sym_ref_name().as_ref_path())
            .into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
