//! Query planning: which adapters to invoke and with what parameters.
//!
//! Pure and deterministic — no I/O, same `Query` always yields the same
//! plan, which keeps the policy independently unit-testable.

use fathom_core::config::RetrievalConfig;
use fathom_core::constants::MAX_GRAPH_HOPS;
use fathom_core::models::{Origin, Query};

/// One planned adapter invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFetch {
    pub origin: Origin,
    /// How many candidates to request from this backend.
    pub limit: usize,
    /// Traversal depth, graph origin only.
    pub max_hops: Option<u8>,
}

/// Ordered set of adapter invocations for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    pub fetches: Vec<PlannedFetch>,
}

impl QueryPlan {
    pub fn len(&self) -> usize {
        self.fetches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fetches.is_empty()
    }

    pub fn fetch_for(&self, origin: Origin) -> Option<&PlannedFetch> {
        self.fetches.iter().find(|f| f.origin == origin)
    }
}

/// Decide which backends to invoke for `query`.
///
/// Policy: Vector always (baseline semantic coverage). Keyword always (cheap
/// high-precision complement). Graph only when entity mentions are present —
/// traversal is expensive and low-yield on generic queries. Hop depth is 2
/// for a single mention (one seed needs a wider neighborhood) and 1 when
/// multiple mentions already span the subgraph.
pub fn plan(query: &Query, config: &RetrievalConfig) -> QueryPlan {
    let mut fetches = vec![PlannedFetch {
        origin: Origin::Vector,
        limit: config.fetch_limit(Origin::Vector),
        max_hops: None,
    }];

    if !query.entity_mentions.is_empty() {
        let hops = if query.entity_mentions.len() == 1 { 2 } else { 1 };
        fetches.push(PlannedFetch {
            origin: Origin::Graph,
            limit: config.fetch_limit(Origin::Graph),
            max_hops: Some(hops.min(MAX_GRAPH_HOPS)),
        });
    }

    fetches.push(PlannedFetch {
        origin: Origin::Keyword,
        limit: config.fetch_limit(Origin::Keyword),
        max_hops: None,
    });

    QueryPlan { fetches }
}
