use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// History from HEAD back to the root, first parents only
    pub fn log_from_head(&self) -> crate::Result<RevList<'_>> {
        let head_oid = self.refs().read_head()?;

        Ok(RevList::new(self.database(), head_oid))
    }

    /// Every commit in the object store, in no particular order
    pub fn log_all(&self) -> crate::Result<Vec<(ObjectId, Commit)>> {
        self.database().all_commits()
    }
}
