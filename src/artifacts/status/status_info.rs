use crate::areas::index::Index;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Snapshot;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;

/// Working file name to the blob ID of its current content
pub type WorkingSet = BTreeMap<String, ObjectId>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modification {
    Modified,
    Deleted,
}

impl Modification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modification::Modified => "modified",
            Modification::Deleted => "deleted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub current_branch: BranchName,
    /// All branches, sorted
    pub branches: Vec<BranchName>,
    pub staged: Vec<String>,
    pub removed: Vec<String>,
    pub modified: BTreeMap<String, Modification>,
    pub untracked: Vec<String>,
}

impl StatusInfo {
    pub fn compute(
        current_branch: BranchName,
        branches: Vec<BranchName>,
        head: &Snapshot,
        index: &Index,
        working: &WorkingSet,
    ) -> Self {
        let added = index.added();
        let removed = index.removed();
        let mut modified = BTreeMap::new();

        for (path, staged_oid) in added {
            match working.get(path) {
                None => {
                    modified.insert(path.clone(), Modification::Deleted);
                }
                Some(on_disk) if on_disk != staged_oid => {
                    modified.insert(path.clone(), Modification::Modified);
                }
                Some(_) => {}
            }
        }

        for (path, head_oid) in head {
            if added.contains_key(path) || removed.contains_key(path) {
                continue;
            }

            match working.get(path) {
                None => {
                    modified.insert(path.clone(), Modification::Deleted);
                }
                Some(on_disk) if on_disk != head_oid => {
                    modified.insert(path.clone(), Modification::Modified);
                }
                Some(_) => {}
            }
        }

        let untracked = working
            .keys()
            .filter(|path| {
                removed.contains_key(*path)
                    || (!added.contains_key(*path) && !head.contains_key(*path))
            })
            .cloned()
            .collect();

        StatusInfo {
            current_branch,
            branches,
            staged: added.keys().cloned().collect(),
            removed: removed.keys().cloned().collect(),
            modified,
            untracked,
        }
    }
}
