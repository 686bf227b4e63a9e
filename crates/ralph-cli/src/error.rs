//! Error types for ralph-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from ralph-core
    #[error(transparent)]
    Core(#[from] ralph_core::Error),

    /// Error from ralph-fs
    #[error(transparent)]
    Fs(#[from] ralph_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// One or more subtrees failed to sync
    #[error("{failed} of {attempted} subtrees failed to sync")]
    IncompleteSync { failed: usize, attempted: usize },

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
