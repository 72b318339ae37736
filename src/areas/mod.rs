//! Durable repository areas
//!
//! - `database`: content-addressed object store for blobs and commits
//! - `index`: staging index of pending additions and removals
//! - `refs`: branch pointers and the HEAD symbolic reference
//! - `repository`: owner of the other four areas
//! - `workspace`: working directory file operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
