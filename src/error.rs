//! Error types for the lexitag library.
//!
//! All fallible operations return [`LexitagError`] through the crate-wide
//! [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use lexitag::error::{LexitagError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexitagError::invalid_argument("parameter 'query' cannot be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lexitag operations.
#[derive(Error, Debug)]
pub enum LexitagError {
    /// A label or query was missing or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure reported by a similarity scorer.
    #[error("Similarity error: {0}")]
    Similarity(String),

    /// I/O errors while loading configuration or classification files
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error, mostly raised by user supplied scorers
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexitagError.
pub type Result<T> = std::result::Result<T, LexitagError>;

impl LexitagError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexitagError::InvalidArgument(msg.into())
    }

    /// Create a new similarity error.
    pub fn similarity<S: Into<String>>(msg: S) -> Self {
        LexitagError::Similarity(msg.into())
    }

    /// Whether this error was raised by argument validation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, LexitagError::InvalidArgument(_))
    }
}
