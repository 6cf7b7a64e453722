//! Bounded retry loop.
//!
//! Each attempt reports an explicit [`Attempt`] outcome; the loop never
//! inspects errors to decide whether to continue. Attempts run strictly one
//! after another with the backoff delay in between.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use crate::config::RetryConfig;
use crate::observability::metrics;
use crate::resilience::backoff::calculate_backoff;

/// Outcome of a single attempt.
#[derive(Debug)]
pub enum Attempt<T, E> {
    /// Finished successfully.
    Done(T),
    /// Failed in a way worth trying again.
    Retry(E),
    /// Failed in a way another attempt cannot fix.
    Abort(E),
}

/// Attempt budget and backoff schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay_ms: u64,
    max_delay_ms: u64,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay_ms: u64, max_delay_ms: u64) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay_ms,
            max_delay_ms,
        }
    }

    pub fn from_config(config: &RetryConfig) -> Self {
        Self::new(config.max_attempts, config.base_delay_ms, config.max_delay_ms)
    }

    /// Total attempts including the first.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay slept before retry `retry` (1-based).
    pub fn delay_before(&self, retry: u32) -> Duration {
        calculate_backoff(retry, self.base_delay_ms, self.max_delay_ms)
    }

    /// Run `op` until it finishes, aborts, or the attempt budget is spent.
    ///
    /// `op` receives the 1-based attempt number. On exhaustion the error from
    /// the last attempt is returned.
    pub async fn run<T, E, F, Fut>(&self, mut op: F) -> Result<T, E>
    where
        E: Display,
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Attempt<T, E>>,
    {
        let mut attempt = 1;
        loop {
            match op(attempt).await {
                Attempt::Done(value) => return Ok(value),
                Attempt::Abort(err) => {
                    tracing::debug!(attempt, error = %err, "Attempt failed, not retryable");
                    return Err(err);
                }
                Attempt::Retry(err) => {
                    if attempt >= self.max_attempts {
                        tracing::warn!(attempts = attempt, error = %err, "Retries exhausted");
                        return Err(err);
                    }

                    let delay = self.delay_before(attempt);
                    tracing::info!(attempt, delay = ?delay, error = %err, "Retrying after failure");
                    metrics::record_retry();
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}
