//! Throttling-aware call wrapper
//!
//! Every Route 53 call goes through a [`Throttle`] owned alongside the client:
//! - calls are spaced at least `min_interval` apart (a `governor` limiter with
//!   one call per period and no burst);
//! - throttling errors ([`ProviderError::RateLimited`]) are retried with
//!   exponential backoff, at most `max_retries` times;
//! - every other error is returned immediately.

use std::future::Future;
use std::time::Duration;

use governor::{DefaultDirectRateLimiter, Quota};

use crate::config::ClientConfig;
use crate::error::{ProviderError, Result};

/// Base delay of the backoff sequence.
const BACKOFF_BASE_MS: u64 = 250;
/// Upper bound for computed backoff delays.
const BACKOFF_MAX_MS: u64 = 10_000;
/// Upper bound for provider-supplied `Retry-After`.
const RETRY_AFTER_MAX_SECS: u64 = 30;

/// Paces and retries calls made through one provider client.
#[derive(Debug)]
pub struct Throttle {
    max_retries: u32,
    /// `None` when pacing is off (`min_interval` of zero).
    limiter: Option<DefaultDirectRateLimiter>,
}

impl Throttle {
    pub fn new(max_retries: u32, min_interval: Duration) -> Self {
        Self {
            max_retries,
            limiter: Quota::with_period(min_interval).map(DefaultDirectRateLimiter::direct),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.max_retries, config.min_call_interval)
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Run `f`, retrying it while it fails with a throttling error.
    ///
    /// `operation` only appears in log lines.
    pub async fn call<T, F, Fut>(&self, operation: &str, mut f: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 0;

        loop {
            self.pace().await;

            match f().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.max_retries && e.is_throttling() => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "{operation} throttled (attempt {}/{}), retrying in {:.1}s: {e}",
                        attempt + 1,
                        self.max_retries,
                        delay.as_secs_f32(),
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Wait until `min_interval` has passed since the previous call.
    async fn pace(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }
}

/// Calculate retry delay
///
/// A `RateLimited` error carrying `retry_after` uses that value (capped at 30s).
/// Otherwise exponential backoff is used.
fn retry_delay(error: &ProviderError, attempt: u32) -> Duration {
    if let ProviderError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(RETRY_AFTER_MAX_SECS))
    } else {
        backoff_delay(attempt)
    }
}

/// Backoff strategy: 250ms, 500ms, 1s, 2s, 4s, 8s, 10s, 10s, ...
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20); // Prevent 2^attempt from overflowing
    let delay_ms = BACKOFF_BASE_MS.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(BACKOFF_MAX_MS))
}
