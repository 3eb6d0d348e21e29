use std::sync::Arc;
use std::time::Duration;

use fathom_core::config::RetrievalConfig;
use fathom_core::errors::BackendError;
use fathom_core::models::{Candidate, Origin, Query};
use fathom_core::traits::{QueryEmbedder, VectorSearchClient};

use super::retry::{fetch_with_retry, RetryPolicy};
use crate::planner::PlannedFetch;

/// Dense vector adapter: embeds the query text, then searches the index.
///
/// The embedding call sits inside the retried operation, so a flaky embedder
/// gets the same single retry as a flaky store. An embedding failure counts
/// as a vector backend failure for degradation purposes.
pub struct VectorAdapter<E, C> {
    embedder: Arc<E>,
    client: Arc<C>,
    min_score: f64,
    retry: RetryPolicy,
}

impl<E: QueryEmbedder, C: VectorSearchClient> VectorAdapter<E, C> {
    pub fn new(embedder: Arc<E>, client: Arc<C>, config: &RetrievalConfig) -> Self {
        Self {
            embedder,
            client,
            min_score: config.min_score(Origin::Vector),
            retry: RetryPolicy::from_config(config),
        }
    }

    pub async fn fetch(
        &self,
        query: &Query,
        planned: &PlannedFetch,
        deadline: Duration,
    ) -> Result<Vec<Candidate>, BackendError> {
        let raw = fetch_with_retry(Origin::Vector, deadline, self.retry, |budget| async move {
            let embedding = self.embedder.embed(&query.text).await?;
            self.client
                .search(
                    &embedding,
                    query.tenant_filter.as_ref(),
                    planned.limit,
                    budget,
                )
                .await
        })
        .await?;
        Ok(super::finalize(
            Origin::Vector,
            self.min_score,
            planned.limit,
            raw,
        ))
    }
}
