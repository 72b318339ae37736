use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::status::status_info::{StatusInfo, WorkingSet};

impl Repository {
    pub fn status(&self) -> crate::Result<StatusInfo> {
        let (_, head) = self.head_commit()?;
        let current_branch = self.refs().current_branch()?;
        let branches = self.refs().list_branches()?;

        let mut working = WorkingSet::new();
        for file_name in self.workspace().list_files()? {
            let blob_id = self.workspace().parse_blob(&file_name)?.object_id()?;
            working.insert(file_name, blob_id);
        }

        Ok(StatusInfo::compute(
            current_branch,
            branches,
            head.snapshot(),
            &self.index(),
            &working,
        ))
    }
}
