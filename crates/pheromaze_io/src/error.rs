//! Error types for pheromaze_io crate.
//!
//! Loading failures are fatal for the caller; nothing here ever returns a
//! partially built maze or specification.

use pheromaze_core::AcoError;
use thiserror::Error;

/// Main error type for pheromaze_io operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed text input, with the 1-based line it was found on
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Well-formed input describing something invalid
    #[error("Validation error: {0}")]
    Validation(String),

    /// The maze grid was rejected by the engine
    #[error("Maze error: {0}")]
    Maze(#[from] AcoError),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<IoError>,
    },
}

/// Result type alias for pheromaze_io operations.
pub type Result<T> = std::result::Result<T, IoError>;

impl IoError {
    #[must_use]
    pub fn parse<S: Into<String>>(line: usize, message: S) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}
