//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::LedgerMonth;

/// The main error type for expense ledger operations
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

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// No ledger file exists for the requested month
    #[error("No ledger found for {month} ({file})")]
    LedgerNotFound { month: LedgerMonth, file: String },

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl LedgerError {
    /// Create a "not found" error for a month's ledger
    pub fn ledger_not_found(month: LedgerMonth) -> Self {
        Self::LedgerNotFound {
            month,
            file: month.file_name(),
        }
    }

    /// Check if this is a missing-ledger error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::LedgerNotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
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

/// Result type alias for expense ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
