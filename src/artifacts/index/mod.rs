//! Staging index file format
//!
//! ```text
//! Header (12 bytes):
//!   - Signature: "BIDX" (4 bytes)
//!   - Version: 1 (4 bytes)
//!   - Entry count (4 bytes)
//!
//! Entries (variable length):
//!   - Stage: 0 added, 1 removed (1 byte)
//!   - Blob ID (20 bytes)
//!   - Path length (2 bytes) followed by the path
//!
//! Checksum (20 bytes):
//!   - SHA-1 hash of all preceding bytes
//! ```
//!
//! All integers are big-endian.

pub mod checksum;
pub mod index_entry;
pub mod index_header;

/// Size of SHA-1 checksum in bytes
pub const CHECKSUM_SIZE: usize = 20;

/// Size of index header in bytes
pub const HEADER_SIZE: usize = 12;

/// Magic signature identifying index files
pub const SIGNATURE: &str = "BIDX";

/// Index file format version
pub const VERSION: u32 = 1;
