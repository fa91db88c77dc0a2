//! Error types for tailwatch
//!
//! Uses `thiserror` for library errors. Both variants are terminal for the
//! worker that hit them and fatal for nothing else.

use std::path::PathBuf;
use thiserror::Error;

/// Terminal conditions for a single followed file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FollowError {
    /// The path no longer resolves to a file.
    #[error("{} has been deleted", path.display())]
    Deleted { path: PathBuf },

    /// Permission or I/O failure, or content no longer decodable.
    #[error("{} is no longer accessible", path.display())]
    Inaccessible { path: PathBuf },
}

impl FollowError {
    /// The file this error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            FollowError::Deleted { path } | FollowError::Inaccessible { path } => path,
        }
    }
}
