//! Error types for snippa-fs

use std::path::PathBuf;

/// Result type for snippa-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in snippa-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse state document '{key}' at {path}: {message}")]
    StateParse {
        key: String,
        path: PathBuf,
        message: String,
    },

    #[error("Failed to serialize state document '{key}': {message}")]
    StateSerialize { key: String, message: String },

    #[error("Invalid state key: {key}")]
    InvalidKey { key: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
