//! Switching the working directory between snapshots
//!
//! Checkout, reset and merge move the working directory from a source
//! snapshot (HEAD) to a target snapshot. Before anything is written, every
//! working file the target tracks is checked: a file whose content matches
//! neither side would be lost and aborts the whole operation.

pub mod migration;
