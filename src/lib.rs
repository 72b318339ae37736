//! Bough: a small local version-control engine
//!
//! Content-addressed blobs and commits, a staging index, named branches and
//! a three-way merge, all stored under `.bough/` at the root of the working
//! tree. [`Repository`] is the entry point; each operation lives in an
//! `impl Repository` block under [`commands::porcelain`] and returns a typed
//! payload or a [`BoughError`].

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

pub use areas::repository::Repository;
pub use errors::{BoughError, ErrorKind, Result};
