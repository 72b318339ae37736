use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::BoughError;

impl Repository {
    /// Create a branch at HEAD without switching to it
    pub fn create_branch(&self, name: &str) -> crate::Result<ObjectId> {
        let branch_name = BranchName::try_parse(name.to_string())?;
        let head_oid = self.refs().read_head()?;

        self.refs().create_branch(&branch_name, &head_oid)?;
        tracing::info!(branch = %branch_name, commit = %head_oid, "created branch");

        Ok(head_oid)
    }

    /// Delete a branch pointer; its commits stay in the object store
    pub fn delete_branch(&self, name: &str) -> crate::Result<ObjectId> {
        let branch_name = BranchName::try_parse(name.to_string())
            .map_err(|_| BoughError::NoSuchBranch(name.to_string()))?;

        if !self.refs().branch_exists(&branch_name) {
            return Err(BoughError::NoSuchBranch(name.to_string()));
        }
        if self.refs().is_current_branch(&branch_name)? {
            return Err(BoughError::CannotRemoveCurrent(name.to_string()));
        }

        let oid = self.refs().delete_branch(&branch_name)?;
        tracing::info!(branch = %branch_name, commit = %oid, "deleted branch");

        Ok(oid)
    }
}
