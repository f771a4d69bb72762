//! Custom error types for the teller application
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::{AccountNumber, Money};

/// The main error type for teller operations
#[derive(Error, Debug)]
pub enum TellerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// No account with the given number exists in the ledger
    #[error("Account not found: {number}")]
    AccountNotFound { number: AccountNumber },

    /// A deposit, withdrawal, or opening balance that is not a usable amount
    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: Money },

    /// Withdrawal exceeds the current balance
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },

    /// The ledger is at its account capacity
    #[error("Account limit reached: the ledger holds at most {limit} accounts")]
    AccountLimitReached { limit: usize },

    /// Division by zero in the calculator
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TellerError {
    /// Create a "not found" error for an account number
    pub fn account_not_found(number: AccountNumber) -> Self {
        Self::AccountNotFound { number }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AccountNotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TellerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TellerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for teller operations
pub type TellerResult<T> = Result<T, TellerError>;
