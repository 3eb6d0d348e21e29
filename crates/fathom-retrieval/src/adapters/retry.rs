//! Bounded single-retry policy applied uniformly at the adapter boundary.
//!
//! One retry, only for `Unavailable` failures (a timeout has already spent
//! the deadline), and only when enough deadline budget remains for the
//! second attempt to plausibly finish.

use std::future::Future;
use std::time::Duration;

use fathom_core::config::RetrievalConfig;
use fathom_core::errors::BackendError;
use fathom_core::models::{Candidate, Origin};
use tokio::time::{timeout, Instant};
use tracing::warn;

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub enabled: bool,
    pub min_budget: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &RetrievalConfig) -> Self {
        Self {
            enabled: config.retry_enabled,
            min_budget: Duration::from_millis(config.retry_min_budget_ms),
        }
    }
}

/// Run `op` under `deadline`, retrying once per the policy.
///
/// `op` receives the budget remaining for its attempt and must treat it as a
/// hard bound; the wrapper enforces it regardless via `tokio::time::timeout`.
pub(crate) async fn fetch_with_retry<F, Fut>(
    origin: Origin,
    deadline: Duration,
    policy: RetryPolicy,
    mut op: F,
) -> Result<Vec<Candidate>, BackendError>
where
    F: FnMut(Duration) -> Fut,
    Fut: Future<Output = Result<Vec<Candidate>, BackendError>>,
{
    let deadline_ms = deadline.as_millis() as u64;
    let started = Instant::now();

    let first = match timeout(deadline, op(deadline)).await {
        Ok(Ok(candidates)) => return Ok(candidates),
        Ok(Err(err)) => err,
        Err(_) => return Err(BackendError::Timeout { origin, deadline_ms }),
    };

    let remaining = deadline.saturating_sub(started.elapsed());
    if !(policy.enabled && first.is_retryable() && remaining >= policy.min_budget) {
        return Err(first);
    }

    warn!(%origin, error = %first, remaining_ms = remaining.as_millis() as u64, "backend call failed, retrying once");
    match timeout(remaining, op(remaining)).await {
        Ok(result) => result,
        Err(_) => Err(BackendError::Timeout { origin, deadline_ms }),
    }
}
