//! Output sink
//!
//! The single synchronized consumer of worker emissions. All writes to the
//! shared stdout/stderr pass through one mutex, so two workers' output is
//! never interleaved mid-line. Each emission flushes, so output survives an
//! abrupt kill of the process.

use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::PROGRAM_NAME;

struct SinkInner {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
}

/// Serializes concurrent emissions from multiple workers.
pub struct OutputSink {
    inner: Mutex<SinkInner>,
    headers: bool,
    had_warnings: AtomicBool,
}

impl OutputSink {
    /// Sink over arbitrary writers. `headers` controls whether each payload
    /// is preceded by a line identifying its file.
    pub fn new(out: Box<dyn Write + Send>, err: Box<dyn Write + Send>, headers: bool) -> Self {
        Self {
            inner: Mutex::new(SinkInner { out, err }),
            headers,
            had_warnings: AtomicBool::new(false),
        }
    }

    /// Sink over the process stdout/stderr.
    pub fn stdio(headers: bool) -> Self {
        Self::new(Box::new(io::stdout()), Box::new(io::stderr()), headers)
    }

    /// Print a payload for `path`, with its header when headers are enabled.
    pub fn emit(&self, path: &Path, payload: &str) {
        let mut inner = self.inner.lock().unwrap();
        Self::write_payload(&mut inner, self.headers, path, payload);
    }

    /// Print a warning for `path` followed by its full payload, under one
    /// lock so the pair cannot be split by another worker.
    pub fn emit_full(&self, path: &Path, warning: &str, payload: &str) {
        self.had_warnings.store(true, Ordering::SeqCst);
        let mut inner = self.inner.lock().unwrap();
        let _ = writeln!(inner.err, "{}: {}", PROGRAM_NAME, warning);
        let _ = inner.err.flush();
        Self::write_payload(&mut inner, self.headers, path, payload);
    }

    /// Print a warning line on the error stream.
    pub fn warn(&self, message: impl std::fmt::Display) {
        self.had_warnings.store(true, Ordering::SeqCst);
        let mut inner = self.inner.lock().unwrap();
        let _ = writeln!(inner.err, "{}: {}", PROGRAM_NAME, message);
        let _ = inner.err.flush();
    }

    /// Whether any warning or error line was ever written.
    pub fn had_warnings(&self) -> bool {
        self.had_warnings.load(Ordering::SeqCst)
    }

    /// Flush both streams.
    pub fn flush(&self) {
        let mut inner = self.inner.lock().unwrap();
        let _ = inner.out.flush();
        let _ = inner.err.flush();
    }

    fn write_payload(inner: &mut SinkInner, headers: bool, path: &Path, payload: &str) {
        if headers {
            let _ = writeln!(inner.out, "{}:", path.display());
        }
        let _ = write!(inner.out, "{}", payload);
        let _ = inner.out.flush();
    }
}
