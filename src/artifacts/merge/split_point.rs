//! Split point discovery for merges
//!
//! The split point is the ancestor the three-way merge compares both sides
//! against. It is found in two passes:
//!
//! 1. Walk the current branch's history breadth-first from HEAD, following
//!    both parents of merge commits, and record the smallest distance at which
//!    each ancestor is reached. HEAD itself sits at depth 0.
//! 2. Walk the target branch's history depth-first from its tip, first parent
//!    before second parent. Among visited commits present in the depth map,
//!    the first one with the strictly smallest depth wins.
//!
//! This is not a lowest-common-ancestor search: in criss-cross histories the
//! result depends on the traversal order above, and callers rely on that
//! order being stable.
//!
//! ```text
//!     A
//!    / \
//!   B   C      split_point(HEAD = B, target = C) == A
//! ```

use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{HashMap, HashSet, VecDeque};

/// Smallest distance from HEAD to each of its ancestors
#[derive(Debug, Clone, Default)]
pub struct DepthMap {
    depths: HashMap<ObjectId, usize>,
}

impl DepthMap {
    pub fn build<CommitLoaderFn>(
        head: &ObjectId,
        commit_loader: &CommitLoaderFn,
    ) -> crate::Result<Self>
    where
        CommitLoaderFn: Fn(&ObjectId) -> crate::Result<SlimCommit>,
    {
        let mut depths = HashMap::new();
        let mut queue = VecDeque::from([(head.clone(), 0usize)]);

        // breadth-first, so the first visit is the shallowest
        while let Some((commit_id, depth)) = queue.pop_front() {
            if depths.contains_key(&commit_id) {
                continue;
            }

            let commit = commit_loader(&commit_id)?;
            depths.insert(commit_id, depth);

            for parent in commit.parents {
                if !depths.contains_key(&parent) {
                    queue.push_back((parent, depth + 1));
                }
            }
        }

        Ok(DepthMap { depths })
    }

    pub fn depth_of(&self, commit_id: &ObjectId) -> Option<usize> {
        self.depths.get(commit_id).copied()
    }

    pub fn len(&self) -> usize {
        self.depths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }
}

pub struct SplitPointFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> crate::Result<SlimCommit>,
{
    commit_loader: CommitLoaderFn,
}

impl<CommitLoaderFn> SplitPointFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> crate::Result<SlimCommit>,
{
    pub fn new(commit_loader: CommitLoaderFn) -> Self {
        Self { commit_loader }
    }

    /// Split point between HEAD and a target tip, `None` only for unrelated
    /// histories
    pub fn find_split_point(
        &self,
        head: &ObjectId,
        target: &ObjectId,
    ) -> crate::Result<Option<ObjectId>> {
        let depth_map = DepthMap::build(head, &self.commit_loader)?;
        tracing::debug!(%head, ancestors = depth_map.len(), "built depth map");

        let mut best: Option<(usize, ObjectId)> = None;
        let mut visited = HashSet::new();
        let mut stack = vec![target.clone()];

        while let Some(commit_id) = stack.pop() {
            if !visited.insert(commit_id.clone()) {
                continue;
            }

            if let Some(depth) = depth_map.depth_of(&commit_id)
                && best.as_ref().is_none_or(|(best_depth, _)| depth < *best_depth)
            {
                tracing::debug!(candidate = %commit_id, depth, "closer split point candidate");
                best = Some((depth, commit_id.clone()));
            }

            let commit = (self.commit_loader)(&commit_id)?;
            // reversed so the first parent is popped first
            for parent in commit.parents.into_iter().rev() {
                if !visited.contains(&parent) {
                    stack.push(parent);
                }
            }
        }

        let split_point = best.map(|(_, commit_id)| commit_id);
        tracing::debug!(%head, %target, split_point = ?split_point, "resolved split point");

        Ok(split_point)
    }
}
