//! Incremental follow engine
//!
//! Implements follow mode with:
//! - One polling worker thread per file
//! - Full-file snapshot on every poll (detects truncation and rotation)
//! - Prefix comparison to extract the appended delta
//! - A single synchronized sink so workers never interleave output
//! - Graceful Ctrl+C shutdown via a shared cancellation flag
//!
//! Re-reading each file from the start on every poll is O(file size) per
//! poll. That is the price of detecting truncation and in-place
//! modification, which a seek-to-offset tail cannot do; it is acceptable for
//! modest log files but does not scale to very large ones.

mod detect;
mod sink;
mod snapshot;
mod worker;


pub use detect::{detect_change, ChangeEvent};
pub use sink::OutputSink;
pub use snapshot::Snapshot;
pub use worker::{follow_file, FollowTarget};

use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::encoding::Encoding;

/// Default polling interval in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 500;

/// Follow options shared by every worker.
#[derive(Debug, Clone, Copy)]
pub struct FollowOptions {
    /// Text decoding scheme for file content.
    pub encoding: Encoding,
    /// Fixed wait between successive polls of one file.
    pub interval: Duration,
}

impl Default for FollowOptions {
    fn default() -> Self {
        Self {
            encoding: Encoding::default(),
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }
    }
}

/// Follow every path concurrently until cancellation.
///
/// Spawns one worker thread per path so a slow or stuck read on one target
/// never delays detection on another. Returns only after every worker has
/// terminated, which in normal operation happens only when `running` is
/// cleared; a deleted or inaccessible file stops just its own worker.
pub fn follow_files(
    paths: Vec<PathBuf>,
    options: FollowOptions,
    sink: Arc<OutputSink>,
    running: Arc<AtomicBool>,
) {
    let mut handles = Vec::with_capacity(paths.len());

    for path in paths {
        let sink = Arc::clone(&sink);
        let running = Arc::clone(&running);
        handles.push(thread::spawn(move || {
            follow_file(path, &options, &sink, &running);
        }));
    }

    for handle in handles {
        let _ = handle.join();
    }
}
