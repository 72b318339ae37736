//! Data structures and algorithms
//!
//! - `branch`: validated branch names
//! - `checkout`: working directory migrations between snapshots
//! - `core`: shared output helpers (pager writer)
//! - `index`: staging index file format
//! - `log`: history traversal
//! - `merge`: split point discovery and three-way reconciliation
//! - `objects`: blob and commit objects and their identifiers
//! - `status`: comparison of HEAD, index and working directory

pub mod branch;
pub mod checkout;
pub mod core;
pub mod index;
pub mod log;
pub mod merge;
pub mod objects;
pub mod status;
