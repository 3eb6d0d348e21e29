use std::future::Future;
use std::time::Duration;

use crate::errors::RerankError;

/// Cross-encoder scoring of (query, passage) pairs.
pub trait RerankerClient: Send + Sync {
    /// Score each passage against `query_text` on the model's native scale.
    ///
    /// The returned vector must align index-for-index with `passages`;
    /// a mismatched length is treated as a reranker failure.
    fn score(
        &self,
        query_text: &str,
        passages: &[&str],
        deadline: Duration,
    ) -> impl Future<Output = Result<Vec<f64>, RerankError>> + Send;
}
