//! RetrievalEngine: orchestrates the full pipeline.
//!
//! validate → plan → fan out → fuse → dedup → rerank → cite → respond.
//! Each stage owns the list it produces; after the fan-in barrier everything
//! is sequential, so no stage ever observes another stage's mutation.

use std::sync::Arc;
use std::time::{Duration, Instant};

use fathom_core::config::RetrievalConfig;
use fathom_core::errors::{FathomError, FathomResult};
use fathom_core::models::{CitedResult, Query, RetrievalResponse};
use fathom_core::traits::{
    GraphClient, KeywordClient, QueryEmbedder, RerankerClient, VectorSearchClient,
};
use tracing::{debug, info};

use crate::adapters::{GraphAdapter, KeywordAdapter, VectorAdapter};
use crate::citation::CitationAssigner;
use crate::orchestrator::Orchestrator;
use crate::{dedup, fusion, planner, rerank};

/// The main retrieval engine, generic over the external service clients.
///
/// Holds no per-request state: every `retrieve` call builds its lists fresh,
/// so concurrent requests share nothing mutable.
pub struct RetrievalEngine<E, V, G, K, R> {
    embedder: Arc<E>,
    vector: Arc<V>,
    graph: Arc<G>,
    keyword: Arc<K>,
    reranker: Arc<R>,
    config: RetrievalConfig,
}

impl<E, V, G, K, R> RetrievalEngine<E, V, G, K, R>
where
    E: QueryEmbedder,
    V: VectorSearchClient,
    G: GraphClient,
    K: KeywordClient,
    R: RerankerClient,
{
    /// Build an engine, rejecting invalid configuration up front.
    pub fn new(
        embedder: Arc<E>,
        vector: Arc<V>,
        graph: Arc<G>,
        keyword: Arc<K>,
        reranker: Arc<R>,
        config: RetrievalConfig,
    ) -> FathomResult<Self> {
        config.validate()?;
        Ok(Self {
            embedder,
            vector,
            graph,
            keyword,
            reranker,
            config,
        })
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Run the full retrieval pipeline for one query.
    ///
    /// Fatal errors are `InvalidQuery` and `AllBackendsFailed`; everything
    /// else degrades into `degraded`/`warnings` on the response.
    pub async fn retrieve(&self, query: &Query) -> FathomResult<RetrievalResponse> {
        let started = Instant::now();
        validate(query)?;
        let top_k = self.config.effective_top_k(query.top_k);

        // Step 1: Plan the fan-out.
        let plan = planner::plan(query, &self.config);
        debug!(
            query_id = %query.query_id,
            session = %query.session_id,
            adapters = plan.len(),
            "planned fan-out"
        );

        // Step 2: Fan out concurrently under the global deadline.
        let vector_adapter =
            VectorAdapter::new(Arc::clone(&self.embedder), Arc::clone(&self.vector), &self.config);
        let graph_adapter = GraphAdapter::new(Arc::clone(&self.graph), &self.config);
        let keyword_adapter = KeywordAdapter::new(Arc::clone(&self.keyword), &self.config);
        let orchestrator = Orchestrator::new(
            &vector_adapter,
            &graph_adapter,
            &keyword_adapter,
            Duration::from_millis(self.config.fanout_deadline_ms),
        );
        let fanout = orchestrator.run(query, &plan).await?;

        let mut degraded = fanout.degraded();
        let mut warnings: Vec<String> = fanout.failures.iter().map(|e| e.to_string()).collect();
        info!(
            query_id = %query.query_id,
            candidates = fanout.total_candidates(),
            failed_backends = fanout.failures.len(),
            "fan-out complete"
        );

        // Step 3: Fuse the heterogeneous score distributions.
        let fused = fusion::fuse(&fanout.origin_lists, &self.config.weights);
        debug!(fused = fused.len(), "fusion complete");

        // Step 4: Collapse overlapping chunk windows.
        let deduped = dedup::dedup(fused, self.config.overlap_threshold, &self.config.weights);

        // Step 5: Cross-encoder rerank with fallback.
        let outcome = rerank::rerank(
            self.reranker.as_ref(),
            &query.text,
            deduped,
            &self.config,
            top_k,
        )
        .await;
        degraded |= outcome.degraded;
        warnings.extend(outcome.warnings);

        // Step 6: Assign citation indices in final order.
        let mut assigner = CitationAssigner::new();
        let mut results = Vec::with_capacity(outcome.results.len());
        for reranked in &outcome.results {
            let Some(citation) = assigner.cite(reranked) else {
                continue;
            };
            let representative = &reranked.fused.representative;
            results.push(CitedResult {
                citation_index: citation.index,
                source_id: citation.source_id,
                span: citation.span,
                snippet: representative.snippet.clone(),
                display_text: citation.display_text,
                final_score: reranked.final_score,
                origins: reranked
                    .fused
                    .origins()
                    .iter()
                    .map(|o| o.as_str().to_string())
                    .collect(),
            });
        }

        let elapsed_ms = started.elapsed().as_millis() as u64;
        info!(
            query_id = %query.query_id,
            results = results.len(),
            degraded,
            elapsed_ms,
            "retrieval complete"
        );
        Ok(RetrievalResponse {
            results,
            degraded,
            warnings,
            elapsed_ms,
        })
    }
}

/// Reject queries the pipeline cannot serve, before any fan-out happens.
fn validate(query: &Query) -> FathomResult<()> {
    if query.text.trim().is_empty() {
        return Err(FathomError::InvalidQuery {
            reason: "query text is empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_invalid() {
        let query = Query::new("   ", "s");
        assert!(matches!(
            validate(&query),
            Err(FathomError::InvalidQuery { .. })
        ));
    }

    #[test]
    fn non_empty_text_is_valid() {
        assert!(validate(&Query::new("lease", "s")).is_ok());
    }
}
