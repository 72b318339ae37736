//! Merge engine
//!
//! - [`split_point`]: which ancestor both sides are compared against
//! - [`resolve`]: per-path three-way decisions
//! - [`conflict`]: content written for paths both sides changed

pub mod conflict;
pub mod resolve;
pub mod split_point;
