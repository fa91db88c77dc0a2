//! Follow worker
//!
//! One worker owns one file. It loops snapshot, detect, emit with a fixed
//! sleep between iterations, and terminates on its file's first
//! unrecoverable error or on cancellation. Other workers are unaffected
//! either way.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use super::detect::{detect_change, ChangeEvent};
use super::sink::OutputSink;
use super::snapshot::Snapshot;
use super::FollowOptions;

/// How often a sleeping worker re-checks the cancellation flag.
const CANCEL_POLL_MS: u64 = 50;

/// One file being watched, owned exclusively by its worker.
///
/// Holds the last-known snapshot; a worker only ever compares its own
/// previous snapshot to its own next one.
#[derive(Debug)]
pub struct FollowTarget {
    path: PathBuf,
    previous: Option<Snapshot>,
}

impl FollowTarget {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            previous: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True until the baseline snapshot has been stored.
    pub fn is_first_observation(&self) -> bool {
        self.previous.is_none()
    }

    /// Last-known content, or empty before the first observation.
    pub fn content(&self) -> &str {
        self.previous.as_ref().map_or("", |snap| &snap.content)
    }

    /// Store `snapshot` and classify the change since the previous one.
    ///
    /// Returns `None` for the first observation: pre-existing content is
    /// never reported as a change.
    pub fn observe(&mut self, snapshot: Snapshot) -> Option<ChangeEvent> {
        let event = self
            .previous
            .as_ref()
            .map(|prev| detect_change(&prev.content, &snapshot.content));
        self.previous = Some(snapshot);
        event
    }
}

/// Follow a single file until cancellation or a terminal error.
///
/// The baseline snapshot is taken before the first sleep and emits nothing;
/// only changes observed after that are printed. `Deleted` and
/// `Inaccessible` are reported once and end the worker.
pub fn follow_file(
    path: PathBuf,
    options: &FollowOptions,
    sink: &OutputSink,
    running: &AtomicBool,
) {
    let mut target = FollowTarget::new(path);

    match Snapshot::read(target.path(), options.encoding) {
        Ok(snapshot) => {
            target.observe(snapshot);
        }
        Err(err) => {
            sink.warn(err);
            return;
        }
    }

    while sleep_unless_cancelled(options.interval, running) {
        let snapshot = match Snapshot::read(target.path(), options.encoding) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                sink.warn(err);
                return;
            }
        };

        match target.observe(snapshot) {
            Some(ChangeEvent::Appended(delta)) => sink.emit(target.path(), &delta),
            Some(ChangeEvent::Truncated) => {
                let warning = format!("data deleted in: {}", target.path().display());
                sink.emit_full(target.path(), &warning, target.content());
            }
            Some(ChangeEvent::Modified) => {
                let warning = format!("data modified in: {}", target.path().display());
                sink.emit_full(target.path(), &warning, target.content());
            }
            Some(ChangeEvent::Unchanged) | None => {}
        }
    }
}

/// Sleep for `interval`, waking early if `running` is cleared.
///
/// Returns false once cancelled, so it doubles as the loop condition. Sleeps
/// in short slices so cancellation is noticed promptly even with a long
/// polling interval.
fn sleep_unless_cancelled(interval: Duration, running: &AtomicBool) -> bool {
    let deadline = Instant::now() + interval;
    loop {
        if !running.load(Ordering::SeqCst) {
            return false;
        }
        let now = Instant::now();
        if now >= deadline {
            return true;
        }
        thread::sleep((deadline - now).min(Duration::from_millis(CANCEL_POLL_MS)));
    }
}
