//! Commit history traversal
//!
//! History display follows first parents only: a merge commit's second
//! parent is shown in its `Merge:` line but never walked.

pub mod rev_list;
