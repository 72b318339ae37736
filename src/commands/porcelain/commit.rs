use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::BoughError;

impl Repository {
    /// Fold the staging index into a new commit on the current branch
    pub fn commit(&self, message: &str) -> crate::Result<ObjectId> {
        if message.trim().is_empty() {
            return Err(BoughError::UserInput(
                "Please enter a commit message.".to_string(),
            ));
        }
        if self.index().is_clean() {
            return Err(BoughError::NothingToCommit);
        }

        self.write_commit(message, None)
    }

    /// Store a child of HEAD built from the staging index, advance the
    /// current branch to it and clear the index
    pub(crate) fn write_commit(
        &self,
        message: &str,
        merge_parent: Option<ObjectId>,
    ) -> crate::Result<ObjectId> {
        let (head_oid, head) = self.head_commit()?;
        let timestamp = Commit::load_timestamp_from_env()?;

        let commit = {
            let index = self.index();
            Commit::with_changes(
                message.to_string(),
                head.snapshot(),
                index.added(),
                index.removed(),
                head_oid,
                merge_parent,
                timestamp,
            )
        };

        let commit_id = self.database().store(&commit)?;
        self.refs().update_head(&commit_id)?;
        self.index().clear();
        self.flush_index()?;

        tracing::info!(%commit_id, files = commit.snapshot().len(), "created commit");

        Ok(commit_id)
    }
}
