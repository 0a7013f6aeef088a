//! Error types for Sherpa operations.
//!
//! This module defines [`SherpaError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `SherpaError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `SherpaError::Other`) for unexpected errors
//! - Remote and command failures are values, not control flow: the session
//!   decides per-action whether to continue or abort

use thiserror::Error;

/// Core error type for Sherpa operations.
#[derive(Debug, Error)]
pub enum SherpaError {
    /// Repository unreachable, credential rejected, or API failure.
    #[error("Remote repository error: {message}")]
    Remote { message: String },

    /// A file does not exist in the repository.
    #[error("File not found in repository: {path}")]
    FileNotFound { path: String },

    /// The requested tool is not in the registry.
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    /// Shell command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SherpaError {
    /// Build a `Remote` error from any displayable cause.
    pub fn remote(message: impl std::fmt::Display) -> Self {
        Self::Remote {
            message: message.to_string(),
        }
    }
}

/// Result type alias for Sherpa operations.
pub type Result<T> = std::result::Result<T, SherpaError>;
