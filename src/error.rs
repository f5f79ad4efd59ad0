//! Error types for the contact flow.
//!
//! Transport and configuration failures are modelled with `thiserror`.
//! Field-level validation failures live in [`crate::domain`] because they
//! never leave the form.

use thiserror::Error;

/// Errors that can occur when posting to the contact endpoint.
#[derive(Error, Debug)]
pub enum ContactApiError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Endpoint answered with a non-2xx status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Request could not be built (bad URL, invalid body)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Generic error with context
    #[error("API error: {0}")]
    Other(String),
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
}

/// Convenience type alias for Results with ContactApiError
pub type ContactApiResult<T> = Result<T, ContactApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
