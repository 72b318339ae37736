use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Move the current branch to an arbitrary commit, rewriting the working
    /// directory to its snapshot and clearing the staging index
    pub fn reset(&self, commit_prefix: &str) -> crate::Result<ObjectId> {
        let target_oid = self.database().resolve_commit_prefix(commit_prefix)?;

        self.migrate_to(&target_oid)?;
        self.refs().update_head(&target_oid)?;
        self.index().clear();
        self.flush_index()?;

        tracing::info!(commit = %target_oid, "reset current branch");

        Ok(target_oid)
    }
}
