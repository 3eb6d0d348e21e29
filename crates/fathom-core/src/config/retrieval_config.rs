use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MAX_TOP_K;
use crate::errors::{FathomError, FathomResult};
use crate::models::Origin;

/// Per-origin fusion weights.
///
/// Weights scale each origin's normalized score contribution; they do not
/// need to sum to 1.0 — cross-backend agreement is meant to push a source's
/// fused score above any single origin's weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionWeights {
    pub vector: f64,
    pub graph: f64,
    pub keyword: f64,
}

impl FusionWeights {
    pub fn for_origin(&self, origin: Origin) -> f64 {
        match origin {
            Origin::Vector => self.vector,
            Origin::Graph => self.graph,
            Origin::Keyword => self.keyword,
        }
    }
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            vector: defaults::DEFAULT_VECTOR_WEIGHT,
            graph: defaults::DEFAULT_GRAPH_WEIGHT,
            keyword: defaults::DEFAULT_KEYWORD_WEIGHT,
        }
    }
}

/// Configuration for the full retrieval pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Fusion weights per origin. Default: vector 0.5, graph 0.3, keyword 0.2.
    pub weights: FusionWeights,
    /// Global wall-clock bound on the backend fan-out (ms). Default: 3000.
    pub fanout_deadline_ms: u64,
    /// Separate bound on the reranker call (ms). Default: 2000.
    pub rerank_timeout_ms: u64,
    /// How many deduplicated results go to the reranker. Default: 50.
    pub rerank_top_n: usize,
    /// Reranker score below which results are dropped. Default: 0.0.
    pub rerank_cutoff: f64,
    /// Final result count when the query requests none. Default: 10.
    pub top_k: usize,
    /// Candidates requested from the vector backend. Default: 20.
    pub vector_limit: usize,
    /// Candidates requested from the graph backend. Default: 20.
    pub graph_limit: usize,
    /// Candidates requested from the keyword backend. Default: 20.
    pub keyword_limit: usize,
    /// Raw-score floor per origin; hits below it are discarded at the
    /// adapter boundary. Defaults: 0.0 (keep everything).
    pub min_vector_score: f64,
    pub min_graph_score: f64,
    pub min_keyword_score: f64,
    /// Span-overlap fraction treated as duplicate. Default: 0.5.
    pub overlap_threshold: f64,
    /// Whether a failed backend call gets one retry. Default: true.
    pub retry_enabled: bool,
    /// Minimum remaining deadline budget (ms) for a retry. Default: 150.
    pub retry_min_budget_ms: u64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            weights: FusionWeights::default(),
            fanout_deadline_ms: defaults::DEFAULT_FANOUT_DEADLINE_MS,
            rerank_timeout_ms: defaults::DEFAULT_RERANK_TIMEOUT_MS,
            rerank_top_n: defaults::DEFAULT_RERANK_TOP_N,
            rerank_cutoff: defaults::DEFAULT_RERANK_CUTOFF,
            top_k: defaults::DEFAULT_TOP_K,
            vector_limit: defaults::DEFAULT_FETCH_LIMIT,
            graph_limit: defaults::DEFAULT_FETCH_LIMIT,
            keyword_limit: defaults::DEFAULT_FETCH_LIMIT,
            min_vector_score: 0.0,
            min_graph_score: 0.0,
            min_keyword_score: 0.0,
            overlap_threshold: defaults::DEFAULT_OVERLAP_THRESHOLD,
            retry_enabled: true,
            retry_min_budget_ms: defaults::DEFAULT_RETRY_MIN_BUDGET_MS,
        }
    }
}

impl RetrievalConfig {
    /// Parse from TOML and validate.
    pub fn from_toml_str(s: &str) -> FathomResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| FathomError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the pipeline stages cannot work with.
    pub fn validate(&self) -> FathomResult<()> {
        for (name, w) in [
            ("weights.vector", self.weights.vector),
            ("weights.graph", self.weights.graph),
            ("weights.keyword", self.weights.keyword),
        ] {
            if !w.is_finite() || w <= 0.0 {
                return Err(FathomError::InvalidConfig {
                    reason: format!("{name} must be finite and positive, got {w}"),
                });
            }
        }
        if !self.overlap_threshold.is_finite()
            || self.overlap_threshold <= 0.0
            || self.overlap_threshold > 1.0
        {
            return Err(FathomError::InvalidConfig {
                reason: format!(
                    "overlap_threshold must be in (0.0, 1.0], got {}",
                    self.overlap_threshold
                ),
            });
        }
        if !self.rerank_cutoff.is_finite() {
            return Err(FathomError::InvalidConfig {
                reason: "rerank_cutoff must be finite".to_string(),
            });
        }
        for (name, v) in [
            ("top_k", self.top_k),
            ("rerank_top_n", self.rerank_top_n),
            ("vector_limit", self.vector_limit),
            ("graph_limit", self.graph_limit),
            ("keyword_limit", self.keyword_limit),
        ] {
            if v == 0 {
                return Err(FathomError::InvalidConfig {
                    reason: format!("{name} must be at least 1"),
                });
            }
        }
        if self.top_k > MAX_TOP_K {
            return Err(FathomError::InvalidConfig {
                reason: format!("top_k {} exceeds maximum {MAX_TOP_K}", self.top_k),
            });
        }
        if self.fanout_deadline_ms == 0 || self.rerank_timeout_ms == 0 {
            return Err(FathomError::InvalidConfig {
                reason: "deadlines must be non-zero".to_string(),
            });
        }
        Ok(())
    }

    /// Effective result count for a query: its own `top_k` when given,
    /// otherwise the configured default, always capped at [`MAX_TOP_K`].
    pub fn effective_top_k(&self, query_top_k: usize) -> usize {
        let k = if query_top_k == 0 {
            self.top_k
        } else {
            query_top_k
        };
        k.min(MAX_TOP_K)
    }

    pub fn fetch_limit(&self, origin: Origin) -> usize {
        match origin {
            Origin::Vector => self.vector_limit,
            Origin::Graph => self.graph_limit,
            Origin::Keyword => self.keyword_limit,
        }
    }

    pub fn min_score(&self, origin: Origin) -> f64 {
        match origin {
            Origin::Vector => self.min_vector_score,
            Origin::Graph => self.min_graph_score,
            Origin::Keyword => self.min_keyword_score,
        }
    }
}
