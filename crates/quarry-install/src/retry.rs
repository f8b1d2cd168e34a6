//! Retry policy and the execute-with-policy combinator.

use std::future::Future;
use std::time::Duration;

use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Retry budget and backoff configuration.
///
/// The delay before retry `n` (0-indexed) is `base_delay * 2^n`, with
/// saturating arithmetic. The default allows 3 retries on a 100 ms base;
/// [`RetryPolicy::none`] is the single-attempt configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(100),
        }
    }
}

impl RetryPolicy {
    /// Single-attempt policy: the operation runs once, failures are final.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::ZERO,
        }
    }

    /// Delay before the given retry (0-indexed).
    pub fn delay_for(&self, retry: u32) -> Duration {
        let multiplier = 2_u32.saturating_pow(retry);
        self.base_delay.saturating_mul(multiplier)
    }

    /// Total attempts this policy allows.
    pub fn attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

/// Why a retried operation stopped.
#[derive(Debug)]
pub enum RetryError<E> {
    /// The cancellation token fired before an attempt or during backoff.
    Cancelled,
    /// The budget ran out, or the classifier ruled the error permanent.
    /// Carries the last underlying error and the number of attempts made.
    Exhausted { attempts: u32, source: E },
}

/// Run `op` under `policy`, retrying failures that `is_transient` accepts.
///
/// The classifier sees every failed attempt exactly once. Backoff sleeps
/// race against `cancel`, so a cancelled caller never waits out a delay,
/// and no attempt starts after the token has fired.
pub async fn run<T, E, F, Fut>(
    policy: &RetryPolicy,
    cancel: &CancellationToken,
    is_transient: impl Fn(&E) -> bool,
    mut op: F,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt = 0u32;
    loop {
        if cancel.is_cancelled() {
            return Err(RetryError::Cancelled);
        }
        attempt += 1;
        match op().await {
            Ok(value) => return Ok(value),
            Err(source) => {
                if !is_transient(&source) || attempt > policy.max_retries {
                    return Err(RetryError::Exhausted { attempts: attempt, source });
                }
                let delay = policy.delay_for(attempt - 1);
                debug!(attempt, delay_ms = delay.as_millis() as u64, "retrying after backoff");
                tokio::select! {
                    _ = cancel.cancelled() => return Err(RetryError::Cancelled),
                    _ = tokio::time::sleep(delay) => {}
                }
            }
        }
    }
}
