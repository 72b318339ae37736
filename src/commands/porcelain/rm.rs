use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::errors::BoughError;

/// Effect of removing a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// A pending addition was dropped; the working file is left alone
    Unstaged,
    /// The path is staged for removal and deleted from the working directory
    Removed,
}

impl Repository {
    pub fn remove_file(&self, raw_path: &str) -> crate::Result<RemoveOutcome> {
        let path = Workspace::normalize(raw_path)?;
        let (_, head) = self.head_commit()?;

        let outcome = if let Some(head_blob_id) = head.tracked(&path) {
            self.index().record_removal(&path, head_blob_id.clone());
            self.workspace().remove_file(&path)?;
            RemoveOutcome::Removed
        } else if self.index().unstage(&path) {
            RemoveOutcome::Unstaged
        } else {
            return Err(BoughError::NoReasonToRemove(path));
        };

        tracing::debug!(path, ?outcome, "removed file");
        self.flush_index()?;

        Ok(outcome)
    }
}
