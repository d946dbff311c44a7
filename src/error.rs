//! Error types for Xgen

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Xgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating bundles
#[derive(Error, Debug)]
pub enum Error {
    /// A reference cannot be expressed relative to its containing bundle
    #[error("Invalid path: cannot reach {target:?} from {base:?}: {reason}")]
    InvalidPath {
        base: PathBuf,
        target: PathBuf,
        reason: String,
    },

    /// A directory-create or file-write call failed
    #[error("File system error at {path:?}: {source}")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_path(
        base: impl Into<PathBuf>,
        target: impl Into<PathBuf>,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidPath {
            base: base.into(),
            target: target.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileSystem {
            path: path.into(),
            source,
        }
    }
}
