//! Custom error types for expense-guard
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Store-level failures (duplicate keys, type
//! mismatches, unknown ids) are returned as values so callers can branch on them.

use thiserror::Error;

/// The main error type for expense-guard operations
#[derive(Error, Debug)]
pub enum GuardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for schemas and user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Insert attempted with a primary key that already exists
    #[error("Primary key {key} already exists in table '{table}'")]
    DuplicateKey { table: String, key: String },

    /// Insert attempted with a missing field or a field of the wrong type
    #[error("Type error in table '{table}': {column} must be {expected}")]
    TypeMismatch {
        table: String,
        column: String,
        expected: &'static str,
    },

    /// Update or delete referencing an unknown primary key
    #[error("Record {id} not found in table '{table}'")]
    NotFound { table: String, id: i64 },

    /// Spending more than what is left of the monthly budget
    #[error("Insufficient funds: need {needed:.2}, only {available:.2} left")]
    InsufficientFunds { needed: f64, available: f64 },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl GuardError {
    /// Create a "not found" error for a table record
    pub fn not_found(table: impl Into<String>, id: i64) -> Self {
        Self::NotFound {
            table: table.into(),
            id,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a duplicate primary key error
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }

    /// Check if this is a schema type error
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for GuardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GuardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense-guard operations
pub type GuardResult<T> = Result<T, GuardError>;
