use crate::artifacts::checkout::migration::{ActionType, Migration};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::tree::storable_name;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Repository directory, never listed as part of the working copy
pub const REPOSITORY_DIR: &str = ".twig";

/// Working directory I/O, all paths relative to the repository root
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every working file, sorted, excluding the repository directory
    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        self.list_files_under(&self.path)
    }

    /// The files a user-supplied path designates: itself, or everything below a directory
    pub fn expand(&self, path: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let relative = self.relativize(path)?;
        let absolute = self.path.join(&relative);

        if absolute.is_dir() {
            self.list_files_under(&absolute)
        } else if absolute.is_file() {
            Ok(vec![relative])
        } else {
            anyhow::bail!(RepositoryError::NotFound(format!(
                "file {}",
                relative.display()
            )))
        }
    }

    fn list_files_under(&self, root: &Path) -> anyhow::Result<Vec<PathBuf>> {
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.file_name() != REPOSITORY_DIR)
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| -> anyhow::Result<PathBuf> {
                let relative = entry
                    .path()
                    .strip_prefix(&self.path)
                    .with_context(|| format!("{:?} is outside the repository", entry.path()))?;
                storable_name(relative)?;

                Ok(relative.to_path_buf())
            })
            .collect()
    }

    /// Normalize a user-supplied path to one relative to the repository root
    pub fn relativize(&self, path: &Path) -> anyhow::Result<PathBuf> {
        let path = if path.is_absolute() {
            path.strip_prefix(&self.path)
                .with_context(|| format!("{} is outside the repository", path.display()))?
        } else {
            path
        };

        let mut relative = PathBuf::new();
        for component in path.components() {
            match component {
                Component::Normal(name) => relative.push(name),
                Component::CurDir => {}
                _ => anyhow::bail!("{} is outside the repository", path.display()),
            }
        }

        if relative.starts_with(REPOSITORY_DIR) {
            anyhow::bail!("{} is inside the repository directory", path.display());
        }
        storable_name(&relative)?;

        Ok(relative)
    }

    pub fn file_exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let content = std::fs::read(self.path.join(file_path))
            .with_context(|| format!("Unable to read file {}", file_path.display()))?;

        Ok(Bytes::from(content))
    }

    pub fn parse_blob(&self, file_path: &Path) -> anyhow::Result<Blob> {
        Ok(Blob::new(self.read_file(file_path)?))
    }

    /// Write a file, creating missing parent directories
    pub fn write_file(&self, file_path: &Path, content: &[u8]) -> anyhow::Result<()> {
        let path = self.path.join(file_path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create directory for {}", file_path.display())
            })?;
        }

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))
    }

    /// Delete a file if present, pruning directories left empty
    pub fn delete_file(&self, file_path: &Path) -> anyhow::Result<()> {
        let path = self.path.join(file_path);

        if path.is_file() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove file: {:?}", file_path))?;
        }

        self.prune_empty_parent_dirs(&path)
    }

    fn prune_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.path.as_ref()
            && parent.is_dir()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent)
                .with_context(|| format!("Failed to remove empty directory {:?}", parent))?;
            self.prune_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    // Deletions run first so a deleted file never blocks a directory that
    // the target tree needs at the same path.
    pub fn apply_migration(&self, migration: &Migration) -> anyhow::Result<()> {
        for action in [ActionType::Delete, ActionType::Modify, ActionType::Add] {
            for (file_path, oid) in migration.actions_of(&action) {
                match (&action, oid) {
                    (ActionType::Delete, _) => self.delete_file(file_path)?,
                    (ActionType::Add | ActionType::Modify, Some(oid)) => {
                        let data = migration.load_blob_data(oid)?;
                        self.write_file(file_path, &data)?;
                    }
                    (_, None) => anyhow::bail!("Invalid action and entry combination"),
                }
            }
        }

        Ok(())
    }
}
