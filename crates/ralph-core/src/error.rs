//! Error types for ralph-core

use std::path::PathBuf;

use crate::mirror::Subtree;

/// Result type for ralph-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ralph-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No configuration record exists in the workspace
    #[error("Ralph is not installed: no configuration at {path}")]
    NotInstalled { path: PathBuf },

    /// Copying one asset subtree into a mirror target failed
    #[error("Sync of {subtree}/ into {target} failed: {cause}")]
    SyncFailed {
        subtree: Subtree,
        target: PathBuf,
        #[source]
        cause: ralph_fs::Error,
    },

    /// The distribution does not declare a usable version
    #[error("Distribution version unavailable: {reason}")]
    VersionUnavailable { reason: String },

    /// A configuration record violates a field-combination rule
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// The prompting collaborator could not produce an answer
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// Filesystem error from ralph-fs
    #[error(transparent)]
    Fs(#[from] ralph_fs::Error),
}

impl Error {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
