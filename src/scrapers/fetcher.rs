//! Page fetcher.
//!
//! Issues exactly one GET per call with the configured browser-like headers
//! and timeout, and classifies the response. There are no retries: a failed
//! fetch is terminal for the run.

use crate::config::{ConfigError, ScraperConfig};
use crate::utils::{snapshot_time, truncate_for_log};
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Why a fetch produced no content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("page not found (404)")]
    NotFound,
    #[error("unexpected response status: {0}")]
    UnexpectedStatus(u16),
    #[error("request failed: {0}")]
    Transport(String),
}

/// Result of fetching one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// Status 200 with the decoded body.
    Content(String),
    Absent(FetchFailure),
}

#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Build a fetcher whose client carries the configured `User-Agent`,
    /// `Accept-Language` and overall request timeout.
    pub fn new(config: &ScraperConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language)?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        debug!(timeout_secs = config.timeout_secs, "Built page fetcher");
        Ok(Self { client })
    }

    /// Fetch `url` once and classify the outcome.
    ///
    /// Transport failures (DNS, refused connection, TLS, timeout, body read)
    /// win over everything else; then 404, then any other non-200 status.
    #[instrument(level = "info", skip(self))]
    pub async fn fetch(&self, url: &str) -> FetchResult {
        if let Some(captured_at) = snapshot_time(url) {
            info!(%captured_at, "Fetching archive snapshot");
        }

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Request failed");
                return FetchResult::Absent(FetchFailure::Transport(e.to_string()));
            }
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!(status = status.as_u16(), "Page not found");
            return FetchResult::Absent(FetchFailure::NotFound);
        }
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Unexpected response status");
            return FetchResult::Absent(FetchFailure::UnexpectedStatus(status.as_u16()));
        }

        match response.text().await {
            Ok(body) => {
                info!(status = status.as_u16(), bytes = body.len(), "Fetched page");
                debug!(preview = %truncate_for_log(&body, 200), "Response body");
                FetchResult::Content(body)
            }
            Err(e) => {
                warn!(error = %e, "Failed reading response body");
                FetchResult::Absent(FetchFailure::Transport(e.to_string()))
            }
        }
    }
}
