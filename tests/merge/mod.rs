mod merge_after_earlier_merges;
mod merge_already_ancestor;
mod merge_conflict;
mod merge_fast_forward;
mod merge_keeps_deletions;
mod merge_preconditions;
