use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::{STATE_DIR_NAME, Workspace};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::BoughError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Entry point to every repository operation
///
/// Owns the four durable areas: object store, staging index, branch
/// pointers and working directory. Operations are `impl Repository` blocks
/// under `commands::porcelain`.
pub struct Repository {
    path: Box<Path>,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Repository rooted at `path`, whether or not it is initialized yet
    pub fn new(path: &Path) -> crate::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve repository path {path:?}"))?;
        let state_path = path.join(STATE_DIR_NAME);

        let index = Index::new(state_path.join("index").into_boxed_path());
        let database = Database::new(state_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(state_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            index: RefCell::new(index),
            database,
            workspace,
            refs,
        })
    }

    /// Repository rooted at `path`, loading its staging index
    pub fn open(path: &Path) -> crate::Result<Self> {
        let repository = Self::new(path)?;

        if !repository.is_initialized() {
            return Err(BoughError::NotInitialized);
        }

        repository.index().rehydrate()?;

        Ok(repository)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state_path(&self) -> Box<Path> {
        self.path.join(STATE_DIR_NAME).into_boxed_path()
    }

    pub fn is_initialized(&self) -> bool {
        self.state_path().is_dir()
    }

    pub fn index(&self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
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

    pub fn head_commit(&self) -> crate::Result<(ObjectId, Commit)> {
        let head_oid = self.refs.read_head()?;
        let commit = self.database.load_commit(&head_oid)?;

        Ok((head_oid, commit))
    }

    /// Persist the staging index if an operation changed it
    pub(crate) fn flush_index(&self) -> crate::Result<()> {
        let mut index = self.index();
        if index.has_changed() {
            index.write_updates()?;
        }

        Ok(())
    }
}
