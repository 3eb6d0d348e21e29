use crate::models::Origin;

/// Failure of a single backend adapter call.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BackendError {
    #[error("{origin} backend exceeded its {deadline_ms}ms deadline")]
    Timeout { origin: Origin, deadline_ms: u64 },

    #[error("{origin} backend unavailable: {reason}")]
    Unavailable { origin: Origin, reason: String },
}

impl BackendError {
    pub fn origin(&self) -> Origin {
        match self {
            BackendError::Timeout { origin, .. } => *origin,
            BackendError::Unavailable { origin, .. } => *origin,
        }
    }

    /// Whether the bounded single-retry policy may re-attempt this failure.
    /// Timeouts are never retried — the deadline is already spent.
    pub fn is_retryable(&self) -> bool {
        matches!(self, BackendError::Unavailable { .. })
    }
}
