//! Recursive empty-directory sweeping
//!
//! The walker and the deletion policy live together here because the
//! emptiness determination is itself recursive and depth-aware: a child
//! outside the depth window reads as content to its parent even when its
//! own contents are empty.

mod config;
mod utils;
mod walker;

pub use config::SweepConfig;
pub use utils::glob_match;
pub use walker::Sweeper;
