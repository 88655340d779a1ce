//! Core error types for schedulyze-core.
//!
//! Validation failures are fatal and abort a run before any block is
//! produced; everything recoverable (e.g. the day-count ceiling) is
//! reported on the run itself rather than through these types.

use thiserror::Error;

/// Core error type for schedulyze-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Empty collection
    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Session plus break cannot fit into the daily budget
    #[error(
        "No session fits: session ({session_minutes} min) + break ({break_minutes} min) \
         exceed the daily budget of {daily_minutes} min"
    )]
    NoSessionFits {
        session_minutes: u32,
        break_minutes: u32,
        daily_minutes: i64,
    },
}

impl ValidationError {
    /// Shorthand for field-level validation failures.
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
