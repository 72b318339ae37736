use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::merge::conflict::render_conflict;
use crate::artifacts::merge::resolve::{MergeAction, plan_merge};
use crate::artifacts::merge::split_point::SplitPointFinder;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::{Commit, Snapshot};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::BoughError;
use bytes::Bytes;

/// How a merge concluded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The target is already part of the current history; nothing changed
    AlreadyAncestor,
    /// The current branch was moved forward to the target's tip
    FastForwarded { commit: ObjectId },
    /// A merge commit was created; `conflicts` lists the paths written with
    /// conflict markers
    Merged {
        commit: ObjectId,
        conflicts: Vec<String>,
    },
}

impl MergeOutcome {
    pub fn has_conflicts(&self) -> bool {
        matches!(self, MergeOutcome::Merged { conflicts, .. } if !conflicts.is_empty())
    }
}

impl Repository {
    /// Merge another branch into the current one
    pub fn merge(&self, name: &str) -> crate::Result<MergeOutcome> {
        if !self.index().is_clean() {
            return Err(BoughError::UncommittedChanges);
        }

        let target_branch = BranchName::try_parse(name.to_string())
            .map_err(|_| BoughError::NoSuchBranch(name.to_string()))?;
        let target_oid = self
            .refs()
            .read_branch(&target_branch)?
            .ok_or_else(|| BoughError::NoSuchBranch(name.to_string()))?;

        let current_branch = self.refs().current_branch()?;
        if current_branch == target_branch {
            return Err(BoughError::CannotMergeSelf(name.to_string()));
        }

        let (head_oid, head) = self.head_commit()?;
        let target = self.database().load_commit(&target_oid)?;
        Migration::new(self, head.snapshot(), target.snapshot()).check_for_obstructions()?;

        let split_oid = SplitPointFinder::new(|oid: &ObjectId| self.database().load_slim_commit(oid))
            .find_split_point(&head_oid, &target_oid)?
            .ok_or_else(|| {
                anyhow::anyhow!("No common history between {current_branch} and {target_branch}")
            })?;

        if split_oid == target_oid {
            tracing::info!(target = %target_branch, "target already merged");
            return Ok(MergeOutcome::AlreadyAncestor);
        }

        if split_oid == head_oid {
            self.migrate_to(&target_oid)?;
            self.refs().update_head(&target_oid)?;
            tracing::info!(branch = %current_branch, commit = %target_oid, "fast-forwarded");

            return Ok(MergeOutcome::FastForwarded { commit: target_oid });
        }

        let split = self.database().load_commit(&split_oid)?;
        let conflicts = self.apply_merge_plan(split.snapshot(), &head, &target)?;

        let message = format!("Merged {target_branch} into {current_branch}.");
        let commit = self.write_commit(&message, Some(target_oid))?;

        if !conflicts.is_empty() {
            tracing::warn!(?conflicts, "merge produced conflicts");
        }

        Ok(MergeOutcome::Merged { commit, conflicts })
    }

    /// Write and stage every path the plan touches, returning the
    /// conflicted ones
    fn apply_merge_plan(
        &self,
        split: &Snapshot,
        head: &Commit,
        target: &Commit,
    ) -> crate::Result<Vec<String>> {
        let mut conflicts = Vec::new();

        for (path, action) in plan_merge(split, head.snapshot(), target.snapshot()) {
            match action {
                MergeAction::TakeTarget(blob_id) => {
                    let blob = self.database().load_blob(&blob_id)?;
                    self.workspace().write_file(&path, blob.content())?;
                    self.index().stage(&path, blob_id, head.tracked(&path));
                }
                MergeAction::Remove => {
                    self.workspace().remove_file(&path)?;
                    if let Some(head_blob_id) = head.tracked(&path) {
                        self.index().record_removal(&path, head_blob_id.clone());
                    }
                }
                MergeAction::Conflict { current, target } => {
                    let current = self.load_side(current.as_ref())?;
                    let target = self.load_side(target.as_ref())?;
                    let blob = Blob::new(render_conflict(current.as_deref(), target.as_deref()));

                    let blob_id = self.database().store(&blob)?;
                    self.workspace().write_file(&path, blob.content())?;
                    self.index().stage(&path, blob_id, head.tracked(&path));
                    conflicts.push(path);
                }
            }
        }

        Ok(conflicts)
    }

    fn load_side(&self, blob_id: Option<&ObjectId>) -> crate::Result<Option<Bytes>> {
        match blob_id {
            Some(blob_id) => Ok(Some(self.database().load_blob(blob_id)?.into_content())),
            None => Ok(None),
        }
    }
}
