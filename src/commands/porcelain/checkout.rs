use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::BoughError;

impl Repository {
    /// Restore a file from HEAD, leaving the staging index untouched
    pub fn checkout_file(&self, raw_path: &str) -> crate::Result<()> {
        let head_oid = self.refs().read_head()?;

        self.restore_file_from(&head_oid, raw_path)
    }

    /// Restore a file from the commit an abbreviated ID names
    pub fn checkout_commit_file(&self, commit_prefix: &str, raw_path: &str) -> crate::Result<()> {
        let commit_oid = self.database().resolve_commit_prefix(commit_prefix)?;

        self.restore_file_from(&commit_oid, raw_path)
    }

    /// Switch to another branch, rewriting the working directory to its
    /// snapshot and clearing the staging index
    pub fn checkout_branch(&self, name: &str) -> crate::Result<()> {
        let branch_name = BranchName::try_parse(name.to_string())
            .map_err(|_| BoughError::NoSuchBranch(name.to_string()))?;
        let target_oid = self
            .refs()
            .read_branch(&branch_name)?
            .ok_or_else(|| BoughError::NoSuchBranch(name.to_string()))?;

        if self.refs().is_current_branch(&branch_name)? {
            return Err(BoughError::AlreadyOnBranch(name.to_string()));
        }

        self.migrate_to(&target_oid)?;
        self.refs().set_current_branch(&branch_name)?;
        self.index().clear();
        self.flush_index()?;

        tracing::info!(branch = %branch_name, commit = %target_oid, "switched branch");

        Ok(())
    }

    /// Rewrite the working directory from HEAD's snapshot to `target_oid`'s
    ///
    /// Fails before touching anything if an untracked file would be
    /// overwritten.
    pub(crate) fn migrate_to(&self, target_oid: &ObjectId) -> crate::Result<()> {
        let (_, head) = self.head_commit()?;
        let target = self.database().load_commit(target_oid)?;

        Migration::new(self, head.snapshot(), target.snapshot()).apply_changes()
    }

    fn restore_file_from(&self, commit_oid: &ObjectId, raw_path: &str) -> crate::Result<()> {
        let path = Workspace::normalize(raw_path)?;
        let commit = self.database().load_commit(commit_oid)?;

        let blob_id = commit
            .tracked(&path)
            .ok_or_else(|| BoughError::FileNotInCommit(path.clone()))?;
        let blob = self.database().load_blob(blob_id)?;

        self.workspace().write_file(&path, blob.content())?;
        tracing::debug!(path, commit = %commit_oid, "restored file");

        Ok(())
    }
}
