use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::BoughError;
use anyhow::Context;

impl Repository {
    /// Create the repository state, the root commit and `master` pointing at it
    pub fn init(&self) -> crate::Result<ObjectId> {
        if self.is_initialized() {
            return Err(BoughError::AlreadyInitialized);
        }

        let objects_path = self.database().objects_path().to_path_buf();
        let heads_path = self.refs().heads_path().to_path_buf();
        for dir in [objects_path, heads_path] {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Unable to create directory {dir:?}"))?;
        }

        let root_id = self.database().store(&Commit::root())?;

        let master = BranchName::default_branch();
        self.refs().create_branch(&master, &root_id)?;
        self.refs().set_current_branch(&master)?;

        let mut index = self.index();
        index.clear();
        index.write_updates()?;

        tracing::info!(path = ?self.path(), %root_id, "initialized repository");

        Ok(root_id)
    }
}
