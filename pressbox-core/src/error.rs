//! Error types for Pressbox.
//!
//! All errors use `thiserror` for ergonomic error handling and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Pressbox operations.
pub type Result<T> = std::result::Result<T, PressboxError>;

/// Main error type for Pressbox.
#[derive(Error, Debug)]
pub enum PressboxError {
    // External tool errors
    #[error("Tool not found: {program}")]
    ToolNotFound { program: String },

    #[error("Command failed: {command}: {stderr}")]
    CommandFailed { command: String, stderr: String },

    // Installer errors
    #[error("Download failed: {url}: {reason}")]
    DownloadFailed { url: String, reason: String },

    #[error("No compose binary published for {os}/{arch}")]
    UnsupportedPlatform { os: String, arch: String },

    // File system errors
    #[error("I/O error at {path:?}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Configuration errors
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PressboxError {
    /// Create an Internal error from any error type.
    pub fn internal(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Internal(err.to_string())
    }
}
