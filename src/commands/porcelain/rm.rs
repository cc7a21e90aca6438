use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::tree::Tree;
use crate::errors::RepositoryError;
use std::path::Path;

impl Repository {
    /// Unstage a file, and stop tracking it if HEAD tracks it
    pub fn rm(&self, path: &Path) -> anyhow::Result<()> {
        self.load_index()?;

        let path = self.workspace().relativize(path)?;
        let (_, head) = self.head_commit()?;
        let mut index = self.index_mut();

        if self.unstage(&mut index, head.tree(), &path)? {
            self.workspace().delete_file(&path)?;
        }

        index.write_updates()
    }

    /// Returns whether the working file has to be deleted
    pub fn unstage(&self, index: &mut Index, tracked: &Tree, path: &Path) -> anyhow::Result<bool> {
        let was_staged = index.unstage_addition(path).is_some();

        if tracked.contains(path) {
            index.stage_removal(path.to_path_buf());
            return Ok(true);
        }

        if !was_staged {
            anyhow::bail!(RepositoryError::NothingToRemove(path.to_path_buf()));
        }

        Ok(false)
    }
}
