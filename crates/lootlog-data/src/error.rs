//! Error types for the market snapshot client.

use thiserror::Error;

/// Errors reported by the market snapshot service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// HTTP-level error with status code.
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// Rate limit exceeded.
    #[error("rate limited{}", retry_suffix(.retry_after))]
    RateLimit { retry_after: Option<u64> },

    /// No snapshot exists for the requested league/date.
    #[error("no snapshot for league '{league}' on {date}")]
    NotFound { league: String, date: String },

    /// Network/connection error.
    #[error("network error: {message}")]
    Network { message: String },
}

fn retry_suffix(retry_after: &Option<u64>) -> String {
    match retry_after {
        Some(secs) => format!(", retry after {secs} seconds"),
        None => String::new(),
    }
}

impl ApiError {
    /// Returns true if this error is potentially retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::RateLimit { .. } | ApiError::Network { .. } => true,
            ApiError::Http { status, .. } => *status >= 500,
            ApiError::NotFound { .. } => false,
        }
    }

    /// Returns the appropriate CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ApiError::Network { .. } => 3,
            ApiError::RateLimit { .. } => 4,
            _ => 2,
        }
    }
}

/// Errors returned by [`RatesClient`](crate::client::RatesClient).
#[derive(Debug, Error)]
pub enum Error {
    /// The service answered with an error.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Transport-level failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not a valid snapshot.
    #[error("invalid snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true if retrying the request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Api(api) => api.is_retryable(),
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            Error::Json(_) => false,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
