use crate::areas::index::StageOutcome;
use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::object::Object;
use crate::errors::BoughError;

impl Repository {
    /// Stage the current content of a working file
    ///
    /// Content identical to HEAD's version is never stored; it only drops a
    /// pending entry for the path, if any.
    pub fn stage_file(&self, raw_path: &str) -> crate::Result<StageOutcome> {
        let path = Workspace::normalize(raw_path)?;
        if !self.workspace().exists(&path) {
            return Err(BoughError::UserInput("File does not exist.".to_string()));
        }

        let (_, head) = self.head_commit()?;
        let blob = self.workspace().parse_blob(&path)?;
        let blob_id = blob.object_id()?;
        let head_tracked = head.tracked(&path);

        if head_tracked != Some(&blob_id) {
            self.database().store(&blob)?;
        }

        let outcome = self.index().stage(&path, blob_id, head_tracked);
        tracing::debug!(path, ?outcome, "staged file");

        self.flush_index()?;

        Ok(outcome)
    }
}
