//! Error taxonomy for the merge pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a merge run. Nothing is retried or partially
/// committed; the first error propagates out of `main`.
#[derive(Debug, Error)]
pub enum MergeError {
    /// A path could not be read or written.
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input text is not valid JSON5, or its top-level value is not an object.
    #[error("cannot decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    /// A table key is not an integer literal in any supported base.
    #[error("key {key:?} is not a valid integer literal")]
    KeyFormat { key: String },
}

impl MergeError {
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess { path: path.into(), source }
    }

    pub fn decode(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Decode { path: path.into(), reason: reason.into() }
    }
}
