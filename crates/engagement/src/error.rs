//! Error types for the engagement library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for engagement operations.
#[derive(Debug, Error)]
pub enum EngagementError {
    /// Error reading, creating or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EngagementError {
    /// Wrap an IO error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EngagementError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for engagement operations.
pub type Result<T> = std::result::Result<T, EngagementError>;
