use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::tree::Tree;
use bytes::Bytes;
use std::path::PathBuf;

impl Repository {
    /// Stage the working content of every file the paths designate
    pub fn add(&self, paths: &[PathBuf]) -> anyhow::Result<()> {
        self.load_index()?;

        // every path is validated before anything is staged
        let files = paths
            .iter()
            .map(|path| self.workspace().expand(path))
            .collect::<anyhow::Result<Vec<_>>>()?
            .into_iter()
            .flatten();

        let (_, head) = self.head_commit()?;
        let mut index = self.index_mut();

        for path in files {
            let content = self.workspace().read_file(&path)?;
            self.stage_into(&mut index, head.tree(), path, content)?;
        }

        index.write_updates()
    }

    /// Stage `content` for `path` against the snapshot HEAD tracks
    ///
    /// Content identical to the tracked blob cancels whatever was staged for
    /// the path and stores nothing.
    pub fn stage_into(
        &self,
        index: &mut Index,
        tracked: &Tree,
        path: PathBuf,
        content: Bytes,
    ) -> anyhow::Result<()> {
        let blob = Blob::new(content);
        let oid = blob.object_id()?;

        if tracked.get(&path) == Some(&oid) {
            index.discard(&path);
            return Ok(());
        }

        self.database().store(&blob)?;
        index.stage_addition(path, oid);

        Ok(())
    }
}
