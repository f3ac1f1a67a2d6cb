//! Error types for interchange operations.

use thiserror::Error;

/// Errors that can occur while reading front-end output.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(String),

    /// JSON parsing error on one line of a JSON Lines document.
    #[error("JSON error on line {line}: {message}")]
    JsonLine { line: usize, message: String },

    /// IO error during read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InterchangeError {
    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }
}
