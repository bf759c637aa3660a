//! Error types for the roomfit library.
//!
//! This module provides the error hierarchy for every fallible operation
//! in the roomfit library, using `thiserror` for ergonomic error handling.
//!
//! Note that an infeasible request is *not* an error: the combination
//! solver and the cost optimizer report infeasibility through their result
//! types. Errors are reserved for malformed input, I/O and configuration
//! failures, and searches stopped by a budget.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a roomfit error.
///
/// # Examples
///
/// ```
/// use roomfit::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the roomfit library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid room identifier was provided.
    #[error("invalid room id '{value}': {reason}")]
    InvalidRoomId {
        /// The rejected identifier.
        value: String,
        /// The reason the identifier is invalid.
        reason: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A JSON encoding or decoding error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A CSV encoding error occurred.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The same room identifier appeared twice in a snapshot.
    #[error("duplicate room id in snapshot: {id}")]
    DuplicateRoom {
        /// The repeated identifier.
        id: String,
    },

    /// A combination search was stopped by its budget before finishing.
    #[error("search interrupted after {steps} step(s): {reason}")]
    SearchInterrupted {
        /// Number of rooms examined before the search stopped.
        steps: u64,
        /// Which limit was reached.
        reason: String,
    },
}

impl Error {
    /// Check if the error reports a search stopped by its budget.
    ///
    /// # Examples
    ///
    /// ```
    /// use roomfit::Error;
    ///
    /// let err = Error::SearchInterrupted { steps: 10, reason: "step limit".into() };
    /// assert!(err.is_interrupted());
    /// ```
    #[must_use]
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::SearchInterrupted { .. })
    }

    /// Shorthand for building a [`Error::Validation`].
    pub(crate) fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
