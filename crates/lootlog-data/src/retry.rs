//! Retry logic for snapshot requests with exponential backoff.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::error::{ApiError, Error, Result};

/// Default initial backoff duration for retries (1 second).
pub(crate) const DEFAULT_INITIAL_BACKOFF_SECS: u64 = 1;

/// Default maximum backoff duration for retries (30 seconds).
pub(crate) const DEFAULT_MAX_BACKOFF_SECS: u64 = 30;

/// Default maximum number of retry attempts.
pub(crate) const DEFAULT_MAX_RETRIES: u32 = 3;

/// Configuration for retry behavior.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Maximum number of retry attempts.
    pub max_retries: u32,
    /// Initial backoff duration for retries.
    pub initial_backoff: Duration,
    /// Maximum backoff duration for retries.
    pub max_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            initial_backoff: Duration::from_secs(DEFAULT_INITIAL_BACKOFF_SECS),
            max_backoff: Duration::from_secs(DEFAULT_MAX_BACKOFF_SECS),
        }
    }
}

impl RetryConfig {
    /// A configuration that never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Calculates the backoff duration for a retry attempt.
    ///
    /// If `retry_after` is provided (from a 429 response), uses that value.
    /// Otherwise, uses exponential backoff: initial * 2^attempt, capped at max_backoff.
    pub fn calculate_backoff(&self, attempt: u32, retry_after: Option<u64>) -> Duration {
        let max_backoff_secs = self.max_backoff.as_secs();
        if let Some(secs) = retry_after {
            Duration::from_secs(secs.min(max_backoff_secs))
        } else {
            let initial_secs = self.initial_backoff.as_secs();
            let backoff_secs = initial_secs.saturating_mul(1u64 << attempt.min(32));
            Duration::from_secs(backoff_secs.min(max_backoff_secs))
        }
    }
}

/// Decision type for retry logic.
pub(crate) enum RetryDecision<T> {
    /// Request succeeded with this value.
    Success(T),
    /// Request should be retried.
    Retry { retry_after: Option<u64> },
}

fn retry_after_header(response: &reqwest::Response) -> Option<u64> {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
}

/// Handles the HTTP response, returning a retry decision or error.
pub(crate) async fn handle_response_with_retry<T: DeserializeOwned>(
    response: reqwest::Response,
    attempt: u32,
    max_retries: u32,
    not_found: impl FnOnce() -> ApiError,
) -> Result<RetryDecision<T>> {
    let status = response.status();

    if status.is_success() {
        let body = response.bytes().await?;
        return Ok(RetryDecision::Success(serde_json::from_slice(&body)?));
    }

    if (status.as_u16() == 429 || status.is_server_error()) && attempt < max_retries {
        return Ok(RetryDecision::Retry {
            retry_after: retry_after_header(&response),
        });
    }

    if status.as_u16() == 404 {
        return Err(Error::Api(not_found()));
    }

    Err(parse_error_response(response).await)
}

/// Parses an error response into our error types.
pub(crate) async fn parse_error_response(response: reqwest::Response) -> Error {
    let status = response.status();
    let status_code = status.as_u16();
    let retry_after = retry_after_header(&response);
    let message = response.text().await.unwrap_or_default();

    let api_error = match status_code {
        429 => ApiError::RateLimit { retry_after },
        _ => ApiError::Http {
            status: status_code,
            message: if message.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                message
            },
        },
    };

    Error::Api(api_error)
}

/// Executes a request with retry logic.
pub(crate) async fn execute_with_retry<T, F, Fut, N>(
    config: &RetryConfig,
    mut make_request: F,
    not_found: N,
) -> Result<T>
where
    T: DeserializeOwned,
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = std::result::Result<reqwest::Response, reqwest::Error>>,
    N: Fn() -> ApiError,
{
    for attempt in 0..=config.max_retries {
        let response = match make_request().await {
            Ok(response) => response,
            Err(e) if (e.is_connect() || e.is_timeout()) && attempt < config.max_retries => {
                tracing::debug!(attempt, error = %e, "snapshot request failed, retrying");
                sleep(config.calculate_backoff(attempt, None)).await;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        match handle_response_with_retry(response, attempt, config.max_retries, &not_found).await? {
            RetryDecision::Success(value) => return Ok(value),
            RetryDecision::Retry { retry_after } => {
                let backoff = config.calculate_backoff(attempt, retry_after);
                tracing::debug!(attempt, ?backoff, "snapshot service busy, backing off");
                sleep(backoff).await;
            }
        }
    }

    Err(Error::Api(ApiError::RateLimit { retry_after: None }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_uses_retry_after_capped() {
        let config = RetryConfig::default();
        assert_eq!(config.calculate_backoff(0, Some(5)), Duration::from_secs(5));
        assert_eq!(config.calculate_backoff(0, Some(120)), Duration::from_secs(30));
    }

    #[test]
    fn test_backoff_is_exponential() {
        let config = RetryConfig::default();
        assert_eq!(config.calculate_backoff(0, None), Duration::from_secs(1));
        assert_eq!(config.calculate_backoff(1, None), Duration::from_secs(2));
        assert_eq!(config.calculate_backoff(2, None), Duration::from_secs(4));
        assert_eq!(config.calculate_backoff(10, None), Duration::from_secs(30));
    }

    #[test]
    fn test_none_disables_retries() {
        assert_eq!(RetryConfig::none().max_retries, 0);
    }
}
