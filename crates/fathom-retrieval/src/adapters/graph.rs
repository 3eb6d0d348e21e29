use std::sync::Arc;
use std::time::Duration;

use fathom_core::config::RetrievalConfig;
use fathom_core::constants::MAX_GRAPH_HOPS;
use fathom_core::errors::BackendError;
use fathom_core::models::{Candidate, Origin, Query};
use fathom_core::traits::GraphClient;

use super::retry::{fetch_with_retry, RetryPolicy};
use crate::planner::PlannedFetch;

/// Entity-graph adapter: traverses from the query's entity mentions.
pub struct GraphAdapter<C> {
    client: Arc<C>,
    min_score: f64,
    retry: RetryPolicy,
}

impl<C: GraphClient> GraphAdapter<C> {
    pub fn new(client: Arc<C>, config: &RetrievalConfig) -> Self {
        Self {
            client,
            min_score: config.min_score(Origin::Graph),
            retry: RetryPolicy::from_config(config),
        }
    }

    pub async fn fetch(
        &self,
        query: &Query,
        planned: &PlannedFetch,
        deadline: Duration,
    ) -> Result<Vec<Candidate>, BackendError> {
        let max_hops = planned.max_hops.unwrap_or(1).min(MAX_GRAPH_HOPS);
        let raw = fetch_with_retry(Origin::Graph, deadline, self.retry, |budget| async move {
            self.client
                .traverse(
                    &query.entity_mentions,
                    max_hops,
                    query.tenant_filter.as_ref(),
                    planned.limit,
                    budget,
                )
                .await
        })
        .await?;
        Ok(super::finalize(
            Origin::Graph,
            self.min_score,
            planned.limit,
            raw,
        ))
    }
}
