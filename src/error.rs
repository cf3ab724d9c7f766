//! Error types for the Veracity library.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`VeracityError`] enum. Two variants carry the bulk of the
//! semantics: [`VeracityError::Data`] for fatal load/fit-time problems with
//! the corpus (missing columns, non-binary labels, empty or single-class
//! training data), and [`VeracityError::Validation`] for recoverable bad
//! inference input (empty or token-free text). Data errors are surfaced
//! immediately and never retried; validation errors are reported to the
//! caller without tearing anything down.
//!
//! # Examples
//!
//! ```
//! use veracity::error::{Result, VeracityError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(VeracityError::validation("headline must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Veracity operations.
#[derive(Error, Debug)]
pub enum VeracityError {
    /// I/O errors (reading dataset files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corpus/data errors (malformed dataset, empty or single-class corpus)
    #[error("Data error: {0}")]
    Data(String),

    /// Validation errors (bad inference input)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// CSV parsing/deserialization errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with VeracityError.
pub type Result<T> = std::result::Result<T, VeracityError>;

impl VeracityError {
    /// Create a new data error.
    pub fn data<S: Into<String>>(msg: S) -> Self {
        VeracityError::Data(msg.into())
    }

    /// Create a new validation error.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        VeracityError::Validation(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        VeracityError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        VeracityError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        VeracityError::Other(msg.into())
    }

    /// Whether this error is a recoverable validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, VeracityError::Validation(_))
    }
}
