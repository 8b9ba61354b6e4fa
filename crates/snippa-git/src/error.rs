//! Error types for snippa-git

use std::path::PathBuf;

/// Result type for snippa-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in snippa-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Not a git repository: {path}")]
    NotARepository { path: PathBuf },

    #[error("Remote '{name}' not found")]
    RemoteNotFound { name: String },

    #[error("Repository HEAD is detached; a checked-out branch is required")]
    DetachedHead,

    #[error("Clone target is not empty: {path}")]
    CloneTargetNotEmpty { path: PathBuf },

    #[error("Clone failed: {message}")]
    CloneFailed { message: String },

    #[error("Pull failed: {message}")]
    PullFailed { message: String },

    #[error("Cannot fast-forward: {message}")]
    CannotFastForward { message: String },

    #[error("Invalid commit id '{id}'")]
    InvalidCommitId { id: String },
}
