//! Named default values for [`RetrievalConfig`](super::RetrievalConfig).

/// Fusion weight for the vector origin.
pub const DEFAULT_VECTOR_WEIGHT: f64 = 0.5;
/// Fusion weight for the graph origin.
pub const DEFAULT_GRAPH_WEIGHT: f64 = 0.3;
/// Fusion weight for the keyword origin.
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.2;

/// Global fan-out deadline shared by all backend calls.
pub const DEFAULT_FANOUT_DEADLINE_MS: u64 = 3_000;
/// Separate deadline for the single post-fan-in reranker call.
pub const DEFAULT_RERANK_TIMEOUT_MS: u64 = 2_000;

/// How many deduplicated fused results are sent to the reranker.
pub const DEFAULT_RERANK_TOP_N: usize = 50;
/// Reranked results scoring below this are dropped entirely.
pub const DEFAULT_RERANK_CUTOFF: f64 = 0.0;
/// Final result count when the query does not specify one.
pub const DEFAULT_TOP_K: usize = 10;

/// Per-origin candidate fetch limit.
pub const DEFAULT_FETCH_LIMIT: usize = 20;

/// Span-overlap fraction (of the shorter span) above which two results from
/// the same document are considered duplicates.
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.5;

/// Minimum deadline budget left for a retry attempt to be worth issuing.
pub const DEFAULT_RETRY_MIN_BUDGET_MS: u64 = 150;
