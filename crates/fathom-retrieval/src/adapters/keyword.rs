use std::sync::Arc;
use std::time::Duration;

use fathom_core::config::RetrievalConfig;
use fathom_core::errors::BackendError;
use fathom_core::models::{Candidate, Origin, Query};
use fathom_core::traits::KeywordClient;

use super::retry::{fetch_with_retry, RetryPolicy};
use crate::planner::PlannedFetch;

/// Lexical adapter: term search over the raw query text.
pub struct KeywordAdapter<C> {
    client: Arc<C>,
    min_score: f64,
    retry: RetryPolicy,
}

impl<C: KeywordClient> KeywordAdapter<C> {
    pub fn new(client: Arc<C>, config: &RetrievalConfig) -> Self {
        Self {
            client,
            min_score: config.min_score(Origin::Keyword),
            retry: RetryPolicy::from_config(config),
        }
    }

    pub async fn fetch(
        &self,
        query: &Query,
        planned: &PlannedFetch,
        deadline: Duration,
    ) -> Result<Vec<Candidate>, BackendError> {
        let raw = fetch_with_retry(Origin::Keyword, deadline, self.retry, |budget| async move {
            self.client
                .search(
                    &query.text,
                    query.tenant_filter.as_ref(),
                    planned.limit,
                    budget,
                )
                .await
        })
        .await?;
        Ok(super::finalize(
            Origin::Keyword,
            self.min_score,
            planned.limit,
            raw,
        ))
    }
}
