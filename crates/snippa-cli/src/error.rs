//! Error types for snippa-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from snippa-core
    #[error(transparent)]
    Core(#[from] snippa_core::Error),

    /// Error from snippa-fs
    #[error(transparent)]
    Fs(#[from] snippa_fs::Error),

    /// Error from snippa-git
    #[error(transparent)]
    Git(#[from] snippa_git::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
