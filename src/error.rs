//! Error types for the ReviewLens library.
//!
//! All fallible operations return [`ReviewLensError`] through the crate-wide
//! [`Result`] alias. The analytics core itself almost never fails: empty input,
//! unparseable dates and scorer failures all degrade to well-defined results.
//! Errors are reserved for the outer surface, such as reading a dataset file,
//! parsing a configuration or building an invalid filter.
//!
//! # Examples
//!
//! ```
//! use reviewlens::error::{ReviewLensError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ReviewLensError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for ReviewLens operations.
#[derive(Error, Debug)]
pub enum ReviewLensError {
    /// I/O errors (reading datasets, writing exports)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV reading or writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Dataset errors (missing columns, malformed records)
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Polarity scoring errors
    #[error("Scoring error: {0}")]
    Scoring(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ReviewLensError.
pub type Result<T> = std::result::Result<T, ReviewLensError>;

impl ReviewLensError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ReviewLensError::Analysis(msg.into())
    }

    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        ReviewLensError::Dataset(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ReviewLensError::Config(msg.into())
    }

    /// Create a new scoring error.
    pub fn scoring<S: Into<String>>(msg: S) -> Self {
        ReviewLensError::Scoring(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ReviewLensError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ReviewLensError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
