use crate::error::FetchError;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Configuration for retry behavior
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the first one)
    pub max_attempts: u32,
    /// Delay after the first failed attempt
    pub initial_delay: Duration,
    /// Optional ceiling on a single wait
    pub max_delay: Option<Duration>,
    /// Multiplier for exponential backoff (e.g., 2.0 doubles the delay each time)
    pub backoff_multiplier: f64,
}

impl RetryConfig {
    /// Create a new retry configuration with doubling backoff and no ceiling
    pub fn new(max_attempts: u32, initial_delay: Duration) -> Self {
        Self {
            max_attempts,
            initial_delay,
            max_delay: None,
            backoff_multiplier: 2.0,
        }
    }

    /// Set the maximum delay between retries
    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = Some(max_delay);
        self
    }

    /// Set the backoff multiplier
    pub fn with_backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Preset: guide dataset download (3 attempts)
    /// Delays: 1s, 2s = 3s total wait time
    pub fn guide_data() -> Self {
        Self::new(3, Duration::from_secs(1))
    }

    /// Reject configurations that cannot make a single attempt.
    pub fn validate(&self) -> Result<(), FetchError> {
        if self.max_attempts == 0 {
            return Err(FetchError::Validation(format!(
                "max_attempts must be a positive integer, got {}",
                self.max_attempts
            )));
        }
        if !self.backoff_multiplier.is_finite() || self.backoff_multiplier < 0.0 {
            return Err(FetchError::Validation(format!(
                "backoff_multiplier must be a non-negative finite number, got {}",
                self.backoff_multiplier
            )));
        }
        Ok(())
    }

    /// Wait that follows failed attempt `attempt` (1-indexed)
    pub fn delay_after_attempt(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }

        let delay_ms = self.initial_delay.as_millis() as f64
            * self.backoff_multiplier.powi((attempt - 1) as i32);

        let delay = Duration::from_millis(delay_ms as u64);
        match self.max_delay {
            Some(max) => delay.min(max),
            None => delay,
        }
    }

    /// Total time spent waiting if the first `failures` attempts fail and
    /// a later one succeeds.
    pub fn total_backoff(&self, failures: u32) -> Duration {
        (1..=failures).map(|n| self.delay_after_attempt(n)).sum()
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::guide_data()
    }
}

/// Execute an async operation with retries
///
/// The operation runs up to `config.max_attempts` times. After each failure
/// except the last, the loop sleeps for `config.delay_after_attempt(n)`.
///
/// # Returns
/// The first successful result, `FetchError::Validation` if the config is
/// unusable (no attempt is made), or `FetchError::Exhausted` with the last
/// error's message.
pub async fn with_retry<T, E, F, Fut>(
    config: &RetryConfig,
    operation_name: &str,
    mut operation: F,
) -> Result<T, FetchError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    config.validate()?;

    let mut last_error = String::from("Unknown error");

    for attempt in 1..=config.max_attempts {
        match operation(attempt).await {
            Ok(result) => {
                debug!(
                    "{}: Succeeded on attempt {}/{}",
                    operation_name, attempt, config.max_attempts
                );
                return Ok(result);
            }
            Err(e) => {
                last_error = e.to_string();

                // No wait after the final attempt
                if attempt == config.max_attempts {
                    warn!(
                        "{}: All {} attempts failed. Last error: {}",
                        operation_name, config.max_attempts, last_error
                    );
                    break;
                }

                warn!(
                    "{}: Attempt {}/{} failed ({}), {} retries remaining",
                    operation_name,
                    attempt,
                    config.max_attempts,
                    last_error,
                    config.max_attempts - attempt
                );

                let delay = config.delay_after_attempt(attempt);
                debug!("{}: Waiting {:?} before retry", operation_name, delay);
                sleep(delay).await;
            }
        }
    }

    Err(FetchError::Exhausted {
        attempts: config.max_attempts,
        last_error,
    })
}
