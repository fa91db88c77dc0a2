//! Tailwatch - incremental file follower
//!
//! Tailwatch continuously observes a set of files, detects appended,
//! truncated, or otherwise modified content, and prints only the incremental
//! delta. This is the `tail --follow` problem, with truncation and rotation
//! detection instead of an append-only byte offset.

pub mod encoding;
pub mod error;
pub mod follow;

/// Program name used to prefix warning and error lines.
pub const PROGRAM_NAME: &str = "tailwatch";

// Re-exports for convenience
pub use encoding::Encoding;
pub use error::FollowError;
pub use follow::{
    detect_change, follow_file, follow_files, ChangeEvent, FollowOptions, FollowTarget,
    OutputSink, Snapshot, DEFAULT_INTERVAL_MS,
};
