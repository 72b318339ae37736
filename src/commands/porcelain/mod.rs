//! User-facing repository operations
//!
//! Every operation runs its checks to completion before the first write to
//! the object store, the working directory, the branch pointers or the
//! staging index, so a rejected operation leaves all of them as it found
//! them.
//!
//! ## Operations
//!
//! - `init`: create the repository state and the root commit
//! - `add` / `rm`: stage additions and removals
//! - `commit`: fold the staging index into a new commit
//! - `log` / `find`: walk history
//! - `status`: compare HEAD, the index and the working directory
//! - `checkout` / `reset`: restore files or move to another snapshot
//! - `branch`: create and delete branches
//! - `merge`: three-way merge of another branch into the current one

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod find;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod status;
