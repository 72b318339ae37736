//! Object types kept in the content-addressed store
//!
//! - **Blob**: file content (raw bytes)
//! - **Commit**: snapshot of path names to blob IDs, with parents and a message
//!
//! Every record is framed as `<type> <size>\0<payload>` before compression.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
