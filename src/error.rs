//! Error types for the Symptomatch library.
//!
//! The matching and spelling operations are total and never fail; errors only
//! arise at the edges, when a catalog is loaded from disk, validated, or when
//! the CLI receives arguments it cannot act on. All of them are represented by
//! the [`SymptomatchError`] enum.
//!
//! # Examples
//!
//! ```
//! use symptomatch::error::{SymptomatchError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SymptomatchError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Symptomatch operations.
#[derive(Error, Debug)]
pub enum SymptomatchError {
    /// I/O errors (reading catalog files, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog integrity violations (duplicate ids, dangling references, ...)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A symptom identifier or name that the catalog does not know
    #[error("Unknown symptom: {0}")]
    UnknownSymptom(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with SymptomatchError.
pub type Result<T> = std::result::Result<T, SymptomatchError>;

impl SymptomatchError {
    /// Create a new catalog error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        SymptomatchError::Catalog(msg.into())
    }

    /// Create a new unknown symptom error.
    pub fn unknown_symptom<S: Into<String>>(msg: S) -> Self {
        SymptomatchError::UnknownSymptom(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SymptomatchError::InvalidArgument(msg.into())
    }
}
