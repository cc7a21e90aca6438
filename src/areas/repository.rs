use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::{REPOSITORY_DIR, Workspace};
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::core::clock::Clock;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::cell::{Ref, RefCell, RefMut};
use std::path::Path;

/// An open repository session
///
/// Owns the object database, the reference table, the staging area and the
/// working directory of one project. The staging area is loaded lazily and
/// flushed by the commands that mutate it.
pub struct Repository {
    path: Box<Path>,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    clock: Clock,
}

impl Repository {
    pub fn new(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("Unable to create {}", path.display()))?;
        }
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", path.display()))?;
        let repository_path = path.join(REPOSITORY_DIR);

        let index = Index::new(repository_path.join("index").into_boxed_path());
        let database = Database::new(repository_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(repository_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            index: RefCell::new(index),
            database,
            workspace,
            refs,
            clock: Clock::default(),
        })
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repository_path(&self) -> Box<Path> {
        self.path.join(REPOSITORY_DIR).into_boxed_path()
    }

    pub fn is_initialized(&self) -> bool {
        self.repository_path().is_dir()
    }

    pub fn require_initialized(&self) -> anyhow::Result<()> {
        if !self.is_initialized() {
            anyhow::bail!(RepositoryError::NotARepository(self.path.to_path_buf()));
        }

        Ok(())
    }

    pub fn index(&self) -> Ref<'_, Index> {
        self.index.borrow()
    }

    pub fn index_mut(&self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    /// Reload the staging area from disk
    pub fn load_index(&self) -> anyhow::Result<()> {
        self.require_initialized()?;
        self.index.borrow_mut().rehydrate()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn head_oid(&self) -> anyhow::Result<ObjectId> {
        self.refs
            .read_head()?
            .ok_or_else(|| anyhow::anyhow!("HEAD does not resolve to a commit"))
    }

    pub fn head_commit(&self) -> anyhow::Result<(ObjectId, Commit)> {
        let oid = self.head_oid()?;
        let commit = self.database.parse_object_as_commit(&oid)?;

        Ok((oid, commit))
    }

    /// Resolve a user-supplied revision to a commit id
    ///
    /// A revision that does not even parse names no commit.
    pub fn resolve_revision(&self, revision: &str) -> anyhow::Result<ObjectId> {
        let parsed = Revision::try_parse(revision)
            .map_err(|_| RepositoryError::CommitNotFound(revision.to_string()))?;

        parsed.resolve(self)
    }
}
