/// Fathom system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of backend origins the pipeline can fan out to.
pub const ORIGIN_COUNT: usize = 3;

/// Hard ceiling on graph traversal depth, regardless of planner policy.
pub const MAX_GRAPH_HOPS: u8 = 2;

/// Hard ceiling on the per-response result count a query may request.
pub const MAX_TOP_K: usize = 64;
