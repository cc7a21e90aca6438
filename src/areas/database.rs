use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::{Commit, SlimCommit};
use crate::artifacts::objects::object::{Object, ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{BufRead, Cursor, Read, Write};
use std::path::{Path, PathBuf};

/// Append-only, content-addressed object store
///
/// Objects live zlib-compressed under `objects/xx/yyyy...`. Nothing is ever
/// updated or deleted: storing an object that is already present is a no-op.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Raw, decompressed object bytes (header included)
    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            anyhow::bail!(RepositoryError::NotFound(format!("object {object_id}")));
        }

        self.read_object(object_path)
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let object_id = object.object_id()?;
        let object_path = self.path.join(object_id.to_path());

        if object_path.exists() {
            tracing::trace!(oid = %object_id, "object already stored");
            return Ok(object_id);
        }

        std::fs::create_dir_all(
            object_path
                .parent()
                .context(format!("Invalid object path {}", object_path.display()))?,
        )
        .context(format!(
            "Unable to create object directory {}",
            object_path.display()
        ))?;

        self.write_object(object_path, object.serialize()?)?;
        tracing::debug!(oid = %object_id, kind = %object.object_type(), "stored object");

        Ok(object_id)
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> anyhow::Result<ObjectBox> {
        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        let object = match object_type {
            ObjectType::Blob => ObjectBox::Blob(Box::new(Blob::deserialize(object_reader)?)),
            ObjectType::Commit => ObjectBox::Commit(Box::new(Commit::deserialize(object_reader)?)),
        };

        Ok(object)
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        match object_type {
            ObjectType::Blob => Blob::deserialize(object_reader),
            other => Err(RepositoryError::InvalidObject(
                object_id.clone(),
                format!("expected a blob, found a {other}"),
            )
            .into()),
        }
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        match object_type {
            ObjectType::Commit => Commit::deserialize(object_reader),
            other => Err(RepositoryError::InvalidObject(
                object_id.clone(),
                format!("expected a commit, found a {other}"),
            )
            .into()),
        }
    }

    pub fn object_type(&self, object_id: &ObjectId) -> anyhow::Result<ObjectType> {
        let (object_type, _) = self.parse_object_as_bytes(object_id)?;
        Ok(object_type)
    }

    fn parse_object_as_bytes(
        &self,
        object_id: &ObjectId,
    ) -> anyhow::Result<(ObjectType, impl BufRead)> {
        let object_content = self.load(object_id)?;
        let mut object_reader = Cursor::new(object_content);

        let (object_type, size) = ObjectType::parse_header(&mut object_reader)
            .map_err(|err| RepositoryError::InvalidObject(object_id.clone(), err.to_string()))?;

        let body_length = object_reader.get_ref().len() - object_reader.position() as usize;
        if body_length != size {
            anyhow::bail!(RepositoryError::InvalidObject(
                object_id.clone(),
                format!("declared size {size} but body has {body_length} bytes"),
            ));
        }

        Ok((object_type, object_reader))
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Self::decompress(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let object_content = Self::compress(object_content)?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // the rename publishes the object atomically
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }

    /// Every stored object id, in fan-out directory order
    pub fn list_objects(&self) -> anyhow::Result<Vec<ObjectId>> {
        self.find_objects_by_prefix("")
    }

    /// All stored ids starting with `prefix`
    ///
    /// With two or more prefix characters only the matching fan-out directory
    /// is scanned.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        let prefix = prefix.to_ascii_lowercase();
        let mut matches = Vec::new();

        let directories: Vec<String> = if prefix.len() >= 2 {
            vec![prefix[..2].to_string()]
        } else {
            (0..=255u8).map(|i| format!("{i:02x}")).collect()
        };

        for dir_name in directories {
            let dir_path = self.path.join(&dir_name);
            if !dir_path.is_dir() {
                continue;
            }

            let mut entries = std::fs::read_dir(&dir_path)
                .context(format!("Unable to list {}", dir_path.display()))?
                .collect::<Result<Vec<_>, _>>()?;
            entries.sort_by_key(|entry| entry.file_name());

            for entry in entries {
                let full_oid = format!("{dir_name}{}", entry.file_name().to_string_lossy());

                // temp files and strays never parse as ids
                if let Ok(oid) = ObjectId::try_parse(full_oid)
                    && oid.starts_with(&prefix)
                {
                    matches.push(oid);
                }
            }
        }

        Ok(matches)
    }
}

/// Memoizes the graph shape of commits during ancestor searches
#[derive(Debug, Default)]
pub struct CommitCache {
    commits: RefCell<HashMap<ObjectId, SlimCommit>>,
}

impl CommitCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load_slim_commit(
        &self,
        database: &Database,
        oid: &ObjectId,
    ) -> anyhow::Result<SlimCommit> {
        if let Some(slim) = self.commits.borrow().get(oid) {
            return Ok(slim.clone());
        }

        let commit = database
            .parse_object_as_commit(oid)
            .with_context(|| format!("Unable to load commit {oid}"))?;
        let slim = commit.to_slim(oid.clone());
        self.commits.borrow_mut().insert(oid.clone(), slim.clone());

        Ok(slim)
    }
}
