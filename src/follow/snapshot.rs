//! Snapshot reader
//!
//! Reads the full current content of one file at one poll instant. No file
//! handle is held between polls, so external truncation and rotation are
//! observed instead of reading through a stale descriptor.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

use crate::encoding::Encoding;
use crate::error::FollowError;

/// The complete content of a file captured at one point in time.
///
/// Transient: produced and consumed within a single poll iteration, only the
/// most recent snapshot per target is retained for comparison.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Decoded file content.
    pub content: String,
    /// Size of the raw content in bytes.
    pub size: u64,
    /// When the read happened.
    pub taken_at: Instant,
}

impl Snapshot {
    /// Open and fully read `path`, decoding under `encoding`.
    ///
    /// A missing path classifies as [`FollowError::Deleted`]; any other
    /// open/read failure, or undecodable content, as
    /// [`FollowError::Inaccessible`].
    pub fn read(path: &Path, encoding: Encoding) -> Result<Self, FollowError> {
        let bytes = fs::read(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => FollowError::Deleted {
                path: path.to_path_buf(),
            },
            _ => FollowError::Inaccessible {
                path: path.to_path_buf(),
            },
        })?;

        let size = bytes.len() as u64;
        let content = encoding.decode(bytes).ok_or_else(|| FollowError::Inaccessible {
            path: path.to_path_buf(),
        })?;

        Ok(Self {
            content,
            size,
            taken_at: Instant::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_read_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, "a\nb\n").unwrap();

        let snapshot = Snapshot::read(&path, Encoding::Utf8).unwrap();
        assert_eq!(snapshot.content, "a\nb\n");
        assert_eq!(snapshot.size, 4);
    }

    #[test]
    fn test_read_missing_file_is_deleted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gone.log");

        let err = Snapshot::read(&path, Encoding::Utf8).unwrap_err();
        assert_eq!(err, FollowError::Deleted { path });
    }

    #[test]
    fn test_read_invalid_utf8_is_inaccessible() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.log");
        fs::write(&path, [0x66, 0xE9, 0x6C]).unwrap();

        let err = Snapshot::read(&path, Encoding::Utf8).unwrap_err();
        assert_eq!(err, FollowError::Inaccessible { path });
    }

    #[test]
    fn test_read_latin1_accepts_any_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.log");
        fs::write(&path, [0x66, 0xE9, 0x6C]).unwrap();

        let snapshot = Snapshot::read(&path, Encoding::Latin1).unwrap();
        assert_eq!(snapshot.content, "fél");
        assert_eq!(snapshot.size, 3);
    }

    #[test]
    fn test_read_directory_is_inaccessible() {
        let dir = tempdir().unwrap();
        let path = dir.path().to_path_buf();

        let err = Snapshot::read(&path, Encoding::Utf8).unwrap_err();
        assert_eq!(err, FollowError::Inaccessible { path });
    }
}
