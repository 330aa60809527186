use crate::error::{AttemptError, FetchError};
use crate::retry::{with_retry, RetryConfig};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; MOP-Guide/1.0)";

/// Hard limit on a single attempt, connect through body
pub const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);

/// Downloads the guide dataset as JSON, retrying with exponential backoff.
#[derive(Debug, Clone)]
pub struct GuideFetcher {
    client: reqwest::Client,
    retry: RetryConfig,
    attempt_timeout: Duration,
}

impl GuideFetcher {
    /// Build a fetcher. The retry config is validated here so a bad config
    /// never reaches the network.
    pub fn new(retry: RetryConfig) -> Result<Self, FetchError> {
        retry.validate()?;

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            retry,
            attempt_timeout: ATTEMPT_TIMEOUT,
        })
    }

    /// Override the per-attempt timeout
    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// GET `url` and parse the body as JSON.
    ///
    /// Network errors, non-2xx responses and malformed bodies all count as a
    /// failed attempt.
    pub async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        with_retry(&self.retry, "Guide data fetch", |attempt| {
            self.attempt(url, attempt)
        })
        .await
    }

    async fn attempt(&self, url: &str, attempt: u32) -> Result<Value, AttemptError> {
        debug!(
            "Fetching data (attempt {}/{}): {}",
            attempt, self.retry.max_attempts, url
        );

        let response = self
            .client
            .get(url)
            .timeout(self.attempt_timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AttemptError::Status {
                status: status.as_u16(),
                text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await?;
        let payload = serde_json::from_slice(&body)?;
        debug!("Successfully fetched data on attempt {}", attempt);
        Ok(payload)
    }
}

/// One-shot form of [`GuideFetcher::fetch_json`].
///
/// `max_retries` is the total number of attempts and must be at least 1.
pub async fn fetch_with_retry(
    url: &str,
    max_retries: u32,
    initial_delay: Duration,
) -> Result<Value, FetchError> {
    GuideFetcher::new(RetryConfig::new(max_retries, initial_delay))?
        .fetch_json(url)
        .await
}
