//! Custom error types for daily-allowance
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for daily-allowance operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BudgetError {
    /// The allocation period contains no days
    #[error("Invalid period: start day {start_day} is after the last day of the month ({last_day})")]
    InvalidPeriod { start_day: u32, last_day: u32 },

    /// An expense amount that is not a positive finite number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A day index outside the ledger
    #[error("Day index {index} is out of range (ledger has {len} days)")]
    DayOutOfRange { index: usize, len: usize },

    /// No budget has been set up yet
    #[error("No budget has been initialized. Run 'allowance init' first.")]
    NotInitialized,

    /// Validation errors for budget input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BudgetError {
    /// Create an "invalid amount" error from the rejected input
    pub fn invalid_amount(input: impl std::fmt::Display) -> Self {
        Self::InvalidAmount(format!("'{}' is not a positive number", input))
    }

    /// Check if this is an invalid amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for daily-allowance operations
pub type BudgetResult<T> = Result<T, BudgetError>;
