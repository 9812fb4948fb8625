//! HTTP client for the market snapshot service.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;

use crate::error::{ApiError, Result};
use crate::models::PriceTable;
use crate::retry::{execute_with_retry, RetryConfig};

/// Default base URL of the snapshot service.
pub const DEFAULT_BASE_URL: &str = "https://rates.lootlog.dev/api/v1";

/// Client for fetching dated price snapshots.
///
/// The service answers `GET {base}/rates?league=..&date=YYYY-MM-DD` with the
/// nested mapping `category -> identifier -> chaos value`.
#[derive(Clone)]
pub struct RatesClient {
    http_client: reqwest::Client,
    base_url: String,
    retry: RetryConfig,
}

impl RatesClient {
    /// Creates a client against the default service.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            retry: RetryConfig::default(),
        }
    }

    /// Replaces the retry configuration.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the snapshot for a league on a date.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` when the service has no snapshot for that
    /// date, `ApiError::RateLimit` once retries are exhausted, and
    /// `Error::Json` if the body is not a nested numeric mapping.
    pub async fn fetch_rates(&self, league: &str, date: NaiveDate) -> Result<PriceTable> {
        let date_str = date.format("%Y-%m-%d").to_string();
        let url = reqwest::Url::parse_with_params(
            &format!("{}/rates", self.base_url),
            &[("league", league), ("date", date_str.as_str())],
        )
        .map_err(|e| ApiError::Network {
            message: format!("invalid snapshot URL: {e}"),
        })?;

        tracing::debug!(%url, "fetching price snapshot");

        let categories: HashMap<String, HashMap<String, f64>> = execute_with_retry(
            &self.retry,
            || self.http_client.get(url.clone()).send(),
            || ApiError::NotFound {
                league: league.to_string(),
                date: date_str.clone(),
            },
        )
        .await?;

        Ok(PriceTable::from_categories(date, categories))
    }
}

impl Default for RatesClient {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RatesClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatesClient")
            .field("base_url", &self.base_url)
            .field("retry", &self.retry)
            .finish()
    }
}
