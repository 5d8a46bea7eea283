//! Generic retry combinator with exponential backoff
//!
//! Parameterized by a predicate distinguishing retryable from terminal
//! errors, so providers stay free of inline status-code checks. Retryable
//! failures are fully absorbed inside the loop; only the terminal failure
//! after exhausting the budget is surfaced.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

/// Backoff policy for retried operations
///
/// Delay before retry attempt `n` (0-based) is
/// `base_delay * backoff_factor^n`.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of retries after the initial attempt
    pub max_retries: u32,

    /// Delay before the first retry
    pub base_delay: Duration,

    /// Multiplier applied per retry
    pub backoff_factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(500),
            backoff_factor: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Policy that never retries
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::ZERO,
            backoff_factor: 1.0,
        }
    }

    /// Policy with no sleeping between attempts (for tests)
    pub fn immediate(max_retries: u32) -> Self {
        Self {
            max_retries,
            base_delay: Duration::ZERO,
            backoff_factor: 1.0,
        }
    }

    /// Delay before the given 0-based retry attempt
    pub fn delay_for(&self, attempt: u32) -> Duration {
        // Cap the exponent so pathological configs can't overflow
        let exponent = attempt.min(16) as i32;
        self.base_delay.mul_f64(self.backoff_factor.powi(exponent))
    }
}

/// Run `op`, retrying per `policy` while `is_retryable` approves the error
///
/// Returns the first success, or the last error once the operation fails
/// terminally (non-retryable error, or retry budget exhausted). Dropping the
/// returned future cancels the loop; no attempt starts after cancellation.
pub async fn retry_with_backoff<T, E, F, Fut, P>(
    policy: &RetryPolicy,
    is_retryable: P,
    mut op: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&E) -> bool,
    E: std::fmt::Display,
{
    let mut attempt: u32 = 0;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if attempt >= policy.max_retries || !is_retryable(&error) {
                    return Err(error);
                }

                let delay = policy.delay_for(attempt);
                debug!(
                    attempt = attempt + 1,
                    max_retries = policy.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    error = %error,
                    "retrying after transient failure"
                );

                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                attempt += 1;
            }
        }
    }
}
