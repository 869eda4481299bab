//! Error types for the Wordhoard library.
//!
//! All fallible operations return [`WordhoardError`], which classifies what
//! went wrong: rejected input, a missing word, an I/O or decode problem, or an
//! unsupported export format.
//!
//! # Examples
//!
//! ```
//! use wordhoard::error::{Result, WordhoardError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordhoardError::validation("word must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Wordhoard operations.
#[derive(Error, Debug)]
pub enum WordhoardError {
    /// Invalid input (empty word, blank prefix, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Search or delete miss
    #[error("Not found: {0}")]
    NotFound(String),

    /// I/O errors (missing file, permissions, ...)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Binary serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Snapshot failed integrity checks
    #[error("Corrupt snapshot: {0}")]
    Corrupt(String),

    /// Unsupported export format
    #[error("Unsupported format: {0}")]
    Format(String),
}

/// Result type alias for operations that may fail with WordhoardError.
pub type Result<T> = std::result::Result<T, WordhoardError>;

impl WordhoardError {
    /// Create a new validation error.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        WordhoardError::Validation(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        WordhoardError::NotFound(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        WordhoardError::Serialization(msg.into())
    }

    /// Create a new corrupt snapshot error.
    pub fn corrupt<S: Into<String>>(msg: S) -> Self {
        WordhoardError::Corrupt(msg.into())
    }

    /// Create a new unsupported format error.
    pub fn format<S: Into<String>>(msg: S) -> Self {
        WordhoardError::Format(msg.into())
    }

    /// Whether this error came from reading, writing or decoding a file.
    pub fn is_io_failure(&self) -> bool {
        matches!(
            self,
            WordhoardError::Io(_)
                | WordhoardError::Json(_)
                | WordhoardError::Csv(_)
                | WordhoardError::Serialization(_)
                | WordhoardError::Corrupt(_)
        )
    }
}

impl From<bincode::Error> for WordhoardError {
    fn from(err: bincode::Error) -> Self {
        WordhoardError::Serialization(err.to_string())
    }
}
