/// Failure of the cross-encoder reranking call.
///
/// Always recovered: the pipeline falls back to fusion order and flags the
/// response as degraded rather than failing the request.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RerankError {
    #[error("reranker exceeded its {deadline_ms}ms deadline")]
    Timeout { deadline_ms: u64 },

    #[error("reranker unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("reranker returned {got} scores for {expected} passages")]
    Misaligned { expected: usize, got: usize },
}
