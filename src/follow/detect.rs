//! Change detector
//!
//! Compares two complete file bodies and classifies the delta. A prefix
//! check is the cheapest correct way to tell "grew by appending" (the
//! expected case for logs) from any other structural change, which must be
//! surfaced instead of silently under- or over-printed.

/// Result of comparing a previous snapshot to a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    /// Content identical; nothing to emit.
    Unchanged,
    /// New content starts with the previous content; carries the suffix.
    Appended(String),
    /// New content is shorter and not a clean append; data was removed.
    Truncated,
    /// Content changed in place or was replaced.
    Modified,
}

/// Classify the change from `previous` to `next`.
///
/// After `Truncated` or `Modified` there is no well-defined delta, so the
/// caller prints the new content in full from index 0.
pub fn detect_change(previous: &str, next: &str) -> ChangeEvent {
    if next == previous {
        ChangeEvent::Unchanged
    } else if next.starts_with(previous) {
        ChangeEvent::Appended(next[previous.len()..].to_string())
    } else if next.len() < previous.len() {
        ChangeEvent::Truncated
    } else {
        ChangeEvent::Modified
    }
}
