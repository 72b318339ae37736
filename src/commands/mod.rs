//! Repository operations
//!
//! - `porcelain`: one `impl Repository` block per user-facing operation, each
//!   returning a typed payload
//! - `render`: turns those payloads into the text the binary prints

pub mod porcelain;
pub mod render;
