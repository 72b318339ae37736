use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Snapshot;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::BoughError;
use bytes::Bytes;
use std::collections::BTreeMap;

/// Type of file system action required to reach the target snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionType {
    /// Create a file the source did not track
    Add,
    /// Delete a file only the source tracked
    Delete,
    /// Rewrite a file both snapshots track
    Modify,
}

/// Planned actions grouped by type, each with the blob to write
pub type ActionsSet = BTreeMap<ActionType, Vec<(String, Option<ObjectId>)>>;

/// Plan and execution of a move from `source` to `target`
pub struct Migration<'r> {
    repository: &'r Repository,
    source: &'r Snapshot,
    target: &'r Snapshot,
    actions: ActionsSet,
}

impl<'r> Migration<'r> {
    pub fn new(repository: &'r Repository, source: &'r Snapshot, target: &'r Snapshot) -> Self {
        Migration {
            repository,
            source,
            target,
            actions: ActionsSet::new(),
        }
    }

    pub fn actions_of(&self, action: ActionType) -> impl Iterator<Item = (&str, Option<&ObjectId>)> {
        self.actions
            .get(&action)
            .into_iter()
            .flatten()
            .map(|(file_name, oid)| (file_name.as_str(), oid.as_ref()))
    }

    /// Fail with the paths of working files that would be clobbered
    ///
    /// Only files the target tracks are considered. A file obstructs when its
    /// content differs from the target's version and from the source's
    /// version (or the source does not track it).
    pub fn check_for_obstructions(&self) -> crate::Result<()> {
        let workspace = self.repository.workspace();
        let mut obstructions = Vec::new();

        for file_name in workspace.list_files()? {
            let Some(target_oid) = self.target.get(&file_name) else {
                continue;
            };

            let on_disk = workspace.parse_blob(&file_name)?.object_id()?;
            if &on_disk != target_oid && self.source.get(&file_name) != Some(&on_disk) {
                obstructions.push(file_name);
            }
        }

        if obstructions.is_empty() {
            Ok(())
        } else {
            tracing::debug!(?obstructions, "untracked files in the way");
            Err(BoughError::UntrackedObstruction(obstructions))
        }
    }

    /// Check, plan, then rewrite the working directory
    pub fn apply_changes(&mut self) -> crate::Result<()> {
        self.check_for_obstructions()?;
        self.plan_changes();
        self.repository.workspace().apply_migration(self)?;

        Ok(())
    }

    fn plan_changes(&mut self) {
        self.actions.clear();

        for file_name in self.source.keys() {
            if !self.target.contains_key(file_name) {
                self.actions
                    .entry(ActionType::Delete)
                    .or_default()
                    .push((file_name.clone(), None));
            }
        }

        // every target file is written, so stray edits to tracked files are reset
        for (file_name, oid) in self.target {
            let action = if self.source.contains_key(file_name) {
                ActionType::Modify
            } else {
                ActionType::Add
            };

            self.actions
                .entry(action)
                .or_default()
                .push((file_name.clone(), Some(oid.clone())));
        }
    }

    pub fn load_blob_data(&self, object_id: &ObjectId) -> crate::Result<Bytes> {
        Ok(self
            .repository
            .database()
            .load_blob(object_id)?
            .into_content())
    }
}
