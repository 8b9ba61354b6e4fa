//! Error types for snippa-core

use std::path::PathBuf;

/// Result type for snippa-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in snippa-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured snippets directory does not exist.
    ///
    /// Raised before any registry mutation, so a misconfigured directory
    /// never produces partial state.
    #[error("Snippets directory missing: {path}")]
    SnippetsDirMissing { path: PathBuf },

    #[error("Filesystem error: {0}")]
    Fs(#[from] snippa_fs::Error),

    #[error("Git error: {0}")]
    Git(#[from] snippa_git::Error),

    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },
}
