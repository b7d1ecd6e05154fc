//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV encoding/decoding errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Ledger file could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Date did not parse as YYYY-MM-DD
    #[error("Invalid date format: '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),

    /// Amount did not parse as a decimal number
    #[error("Invalid amount: '{0}'. Use a number like 12.50")]
    InvalidAmount(String),

    /// Amount parsed but was zero or negative
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(String),

    /// Category outside the fixed set
    #[error("Invalid category: '{0}'. Choose one of: {1}")]
    InvalidCategory(String, String),

    /// Record index out of range
    #[error("Invalid index: {index} (ledger has {len} expenses)")]
    InvalidIndex { index: String, len: usize },

    /// Menu or sub-menu option not recognized
    #[error("Invalid option: '{0}'")]
    InvalidOption(String),

    /// Other validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operator input stream was closed
    #[error("End of input")]
    EndOfInput,
}

impl LedgerError {
    /// Create an invalid-index error
    pub fn invalid_index(index: impl Into<String>, len: usize) -> Self {
        Self::InvalidIndex {
            index: index.into(),
            len,
        }
    }

    /// Check if this error was caused by bad operator input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate(_)
                | Self::InvalidAmount(_)
                | Self::NonPositiveAmount(_)
                | Self::InvalidCategory(..)
                | Self::InvalidIndex { .. }
                | Self::InvalidOption(_)
                | Self::Validation(_)
        )
    }

    /// Check if this error came from reading or writing the ledger file
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Io(_) | Self::Csv(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
