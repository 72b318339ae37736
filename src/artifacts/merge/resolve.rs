//! Three-way reconciliation
//!
//! For every path tracked by the split point (S), the current side (C) or
//! the target side (T), the blob IDs on each side decide the outcome:
//!
//! | Condition                          | Action                    |
//! |------------------------------------|---------------------------|
//! | C equals T                         | keep                      |
//! | C equals S, T changed              | take T (or remove it)     |
//! | T equals S, C changed              | keep                      |
//! | C and T changed differently        | conflict                  |
//!
//! "Absent" is a side's value too, so additions and deletions fall out of
//! the same comparisons: a path one side deleted and the other modified is a
//! conflict.

use crate::artifacts::objects::commit::Snapshot;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeAction {
    /// Write the target's blob and stage it
    TakeTarget(ObjectId),
    /// Delete the path and stage the removal
    Remove,
    /// Both sides changed the path in different ways
    Conflict {
        current: Option<ObjectId>,
        target: Option<ObjectId>,
    },
}

/// Paths that need work, in lexicographic order; unlisted paths keep the
/// current version
pub type MergePlan = BTreeMap<String, MergeAction>;

pub fn classify(
    split: Option<&ObjectId>,
    current: Option<&ObjectId>,
    target: Option<&ObjectId>,
) -> Option<MergeAction> {
    if current == target || target == split {
        return None;
    }

    if current == split {
        return Some(match target {
            Some(oid) => MergeAction::TakeTarget(oid.clone()),
            None => MergeAction::Remove,
        });
    }

    Some(MergeAction::Conflict {
        current: current.cloned(),
        target: target.cloned(),
    })
}

pub fn plan_merge(split: &Snapshot, current: &Snapshot, target: &Snapshot) -> MergePlan {
    let paths = split
        .keys()
        .chain(current.keys())
        .chain(target.keys())
        .collect::<BTreeSet<_>>();

    paths
        .into_iter()
        .filter_map(|path| {
            let action = classify(split.get(path), current.get(path), target.get(path))?;
            tracing::debug!(path, ?action, "merge decision");
            Some((path.clone(), action))
        })
        .collect()
}
