//! Error Handling
//!
//! Unified error types for the client library.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Default request timeout used when a reqwest timeout carries no duration.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Input rejected before any network call (e.g. wrong archive extension)
    #[error("Validation error: {0}")]
    Validation(String),

    /// HTTP request failed at the transport layer
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Non-success HTTP status from the analysis service
    #[error("HTTP error {status}: {detail}")]
    Http { status: u16, detail: String },

    /// Failed to parse a response body into its typed record
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// The message a user-facing surface should show for this error.
    ///
    /// HTTP errors carry the service's `detail` string verbatim; everything
    /// else uses the display form.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Http { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(DEFAULT_TIMEOUT_SECS)
        } else if err.is_connect() {
            AppError::Network(format!("Connection failed: {}", err))
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidResponse(format!("JSON parse error: {}", err))
    }
}
