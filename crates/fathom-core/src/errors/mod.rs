//! Error taxonomy for the retrieval pipeline.
//!
//! Per-backend failures (`BackendError`) and reranker failures
//! (`RerankError`) are recovered inside the pipeline and folded into the
//! response's `degraded`/`warnings` fields. Only `InvalidQuery` and
//! `AllBackendsFailed` escape to the caller.

mod backend_error;
mod rerank_error;

pub use backend_error::BackendError;
pub use rerank_error::RerankError;

/// Convenience result alias used across all fathom crates.
pub type FathomResult<T> = Result<T, FathomError>;

/// Top-level error type surfaced to callers of the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum FathomError {
    /// Rejected before fan-out: empty text or unusable parameters.
    #[error("invalid query: {reason}")]
    InvalidQuery { reason: String },

    /// Every planned adapter failed; no best-effort ranking is possible.
    #[error("all {attempted} planned backends failed")]
    AllBackendsFailed { attempted: usize },

    /// Configuration rejected by validation.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    /// A backend failure escaping outside the orchestrator's recovery path.
    #[error(transparent)]
    Backend(#[from] BackendError),
}
