//! Concurrent fan-out over the planned adapters, bounded by one deadline.
//!
//! All planned calls run as joined futures on the request task: dropping the
//! caller's future drops every in-flight adapter call, so caller disconnect
//! propagates as cooperative cancellation without detached tasks to leak.
//! A per-adapter failure never aborts its siblings; it is recorded and the
//! pipeline proceeds degraded as long as at least one adapter succeeded.

use std::time::Duration;

use fathom_core::errors::{BackendError, FathomError, FathomResult};
use fathom_core::models::{Candidate, Origin, Query};
use fathom_core::traits::{GraphClient, KeywordClient, QueryEmbedder, VectorSearchClient};
use tracing::{debug, warn};

use crate::adapters::{GraphAdapter, KeywordAdapter, VectorAdapter};
use crate::planner::QueryPlan;

/// What came back from the fan-in barrier.
#[derive(Debug)]
pub struct FanOutResult {
    /// Successful origins with their candidates, in origin priority order.
    /// An origin that succeeded with zero hits is present with an empty list.
    pub origin_lists: Vec<(Origin, Vec<Candidate>)>,
    /// Failures from the origins that did not make it.
    pub failures: Vec<BackendError>,
}

impl FanOutResult {
    /// True when any planned adapter failed.
    pub fn degraded(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn total_candidates(&self) -> usize {
        self.origin_lists.iter().map(|(_, list)| list.len()).sum()
    }
}

/// Fans out one query to the planned adapters under a shared deadline.
pub struct Orchestrator<'a, E, V, G, K> {
    vector: &'a VectorAdapter<E, V>,
    graph: &'a GraphAdapter<G>,
    keyword: &'a KeywordAdapter<K>,
    deadline: Duration,
}

impl<'a, E, V, G, K> Orchestrator<'a, E, V, G, K>
where
    E: QueryEmbedder,
    V: VectorSearchClient,
    G: GraphClient,
    K: KeywordClient,
{
    pub fn new(
        vector: &'a VectorAdapter<E, V>,
        graph: &'a GraphAdapter<G>,
        keyword: &'a KeywordAdapter<K>,
        deadline: Duration,
    ) -> Self {
        Self {
            vector,
            graph,
            keyword,
            deadline,
        }
    }

    /// Execute the plan and collect whatever finished in time.
    ///
    /// Returns `AllBackendsFailed` only when every planned adapter failed —
    /// a successful fan-out with zero candidates is an ordinary empty result.
    pub async fn run(&self, query: &Query, plan: &QueryPlan) -> FathomResult<FanOutResult> {
        let vector_fut = async {
            match plan.fetch_for(Origin::Vector) {
                Some(planned) => Some(self.vector.fetch(query, planned, self.deadline).await),
                None => None,
            }
        };
        let graph_fut = async {
            match plan.fetch_for(Origin::Graph) {
                Some(planned) => Some(self.graph.fetch(query, planned, self.deadline).await),
                None => None,
            }
        };
        let keyword_fut = async {
            match plan.fetch_for(Origin::Keyword) {
                Some(planned) => Some(self.keyword.fetch(query, planned, self.deadline).await),
                None => None,
            }
        };

        // Fan-in barrier: all three finish (or hit the deadline) before any
        // downstream stage runs; no concurrency survives past this point.
        let (vector_out, graph_out, keyword_out) =
            tokio::join!(vector_fut, graph_fut, keyword_fut);

        let mut origin_lists = Vec::new();
        let mut failures = Vec::new();
        let outcomes = [
            (Origin::Vector, vector_out),
            (Origin::Graph, graph_out),
            (Origin::Keyword, keyword_out),
        ];
        for (origin, outcome) in outcomes {
            match outcome {
                None => {}
                Some(Ok(candidates)) => {
                    debug!(%origin, candidates = candidates.len(), query_id = %query.query_id, "backend returned");
                    origin_lists.push((origin, candidates));
                }
                Some(Err(err)) => {
                    warn!(%origin, error = %err, query_id = %query.query_id, "backend failed");
                    failures.push(err);
                }
            }
        }

        if origin_lists.is_empty() {
            return Err(FathomError::AllBackendsFailed {
                attempted: plan.len(),
            });
        }
        Ok(FanOutResult {
            origin_lists,
            failures,
        })
    }
}
