//! Working directory status
//!
//! Status compares three states of every path: HEAD's snapshot, the pending
//! changes in the staging index and the content on disk.

pub mod status_info;
