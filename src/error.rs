//! Error types for the contacts API.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur while operating on the contact aggregate.
///
/// Everything below the HTTP boundary signals one of these kinds; only
/// the boundary turns them into client-visible statuses and messages.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No contact exists with the given id
    #[error("contact {0} not found")]
    NotFound(i64),

    /// A contact with the given id already exists
    #[error("contact {0} already exists")]
    AlreadyExists(i64),

    /// Input failed field-level validation
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Underlying storage failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Generic internal error with context
    #[error("internal error: {0}")]
    Internal(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with ApiError
pub type ApiResult<T> = Result<T, ApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
