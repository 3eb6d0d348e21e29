//! Scripted mock backends for Fathom integration and property tests.
//!
//! Each mock is configured per test with canned candidates, an artificial
//! delay, and a failure script (fail every call, or fail the first N calls
//! and then succeed — the latter exercises the adapter retry policy).

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use fathom_core::errors::{BackendError, RerankError};
use fathom_core::models::{Candidate, ContentSpan, Origin, TenantFilter};
use fathom_core::traits::{
    GraphClient, KeywordClient, QueryEmbedder, RerankerClient, VectorSearchClient,
};

/// Shorthand candidate constructor used throughout the test suites.
pub fn candidate(
    source_id: &str,
    doc_id: &str,
    origin: Origin,
    raw_score: f64,
    span: (usize, usize),
) -> Candidate {
    Candidate::new(
        source_id,
        doc_id,
        origin,
        raw_score,
        ContentSpan::new(span.0, span.1),
        format!("snippet for {source_id}"),
    )
}

/// Candidate carrying a document title in its metadata, for display-text
/// assertions.
pub fn titled_candidate(
    source_id: &str,
    doc_id: &str,
    origin: Origin,
    raw_score: f64,
    span: (usize, usize),
    title: &str,
) -> Candidate {
    candidate(source_id, doc_id, origin, raw_score, span)
        .with_metadata(serde_json::json!({ "title": title }))
}

/// Failure script shared by the backend mocks.
#[derive(Debug, Clone)]
enum FailureScript {
    Never,
    /// Fail the first `n` calls with `Unavailable`, then succeed.
    FirstCalls(usize, String),
    /// Fail every call with `Unavailable`.
    Always(String),
}

/// Scripted behavior behind each backend mock.
#[derive(Debug)]
struct ScriptedBackend {
    origin: Origin,
    candidates: Vec<Candidate>,
    delay: Option<Duration>,
    failure: FailureScript,
    calls: AtomicUsize,
}

impl ScriptedBackend {
    fn new(origin: Origin) -> Self {
        Self {
            origin,
            candidates: Vec::new(),
            delay: None,
            failure: FailureScript::Never,
            calls: AtomicUsize::new(0),
        }
    }

    async fn respond(&self, limit: usize) -> Result<Vec<Candidate>, BackendError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let fail_reason = match &self.failure {
            FailureScript::Never => None,
            FailureScript::Always(reason) => Some(reason.clone()),
            FailureScript::FirstCalls(n, reason) => (call < *n).then(|| reason.clone()),
        };
        if let Some(reason) = fail_reason {
            return Err(BackendError::Unavailable {
                origin: self.origin,
                reason,
            });
        }
        Ok(self.candidates.iter().take(limit).cloned().collect())
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

macro_rules! scripted_builders {
    () => {
        pub fn with_candidates(mut self, candidates: Vec<Candidate>) -> Self {
            self.inner.candidates = candidates;
            self
        }

        /// Sleep this long before responding (drives timeout tests).
        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.inner.delay = Some(delay);
            self
        }

        /// Fail every call with `Unavailable`.
        pub fn failing(mut self, reason: &str) -> Self {
            self.inner.failure = FailureScript::Always(reason.to_string());
            self
        }

        /// Fail the first `n` calls, then succeed (retry-policy tests).
        pub fn failing_first(mut self, n: usize, reason: &str) -> Self {
            self.inner.failure = FailureScript::FirstCalls(n, reason.to_string());
            self
        }

        pub fn call_count(&self) -> usize {
            self.inner.call_count()
        }
    };
}

/// Mock dense vector backend.
#[derive(Debug)]
pub struct ScriptedVectorClient {
    inner: ScriptedBackend,
}

impl ScriptedVectorClient {
    pub fn new() -> Self {
        Self {
            inner: ScriptedBackend::new(Origin::Vector),
        }
    }

    scripted_builders!();
}

impl Default for ScriptedVectorClient {
    fn default() -> Self {
        Self::new()
    }
}

impl VectorSearchClient for ScriptedVectorClient {
    async fn search(
        &self,
        _embedding: &[f32],
        _tenant_filter: Option<&TenantFilter>,
        limit: usize,
        _deadline: Duration,
    ) -> Result<Vec<Candidate>, BackendError> {
        self.inner.respond(limit).await
    }
}

/// Mock graph traversal backend. Records the hop depth it was asked for.
#[derive(Debug)]
pub struct ScriptedGraphClient {
    inner: ScriptedBackend,
    last_max_hops: Mutex<Option<u8>>,
}

impl ScriptedGraphClient {
    pub fn new() -> Self {
        Self {
            inner: ScriptedBackend::new(Origin::Graph),
            last_max_hops: Mutex::new(None),
        }
    }

    scripted_builders!();

    /// Hop depth from the most recent `traverse` call.
    pub fn last_max_hops(&self) -> Option<u8> {
        *self.last_max_hops.lock().unwrap()
    }
}

impl Default for ScriptedGraphClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphClient for ScriptedGraphClient {
    async fn traverse(
        &self,
        _entity_mentions: &[String],
        max_hops: u8,
        _tenant_filter: Option<&TenantFilter>,
        limit: usize,
        _deadline: Duration,
    ) -> Result<Vec<Candidate>, BackendError> {
        *self.last_max_hops.lock().unwrap() = Some(max_hops);
        self.inner.respond(limit).await
    }
}

/// Mock keyword backend.
#[derive(Debug)]
pub struct ScriptedKeywordClient {
    inner: ScriptedBackend,
}

impl ScriptedKeywordClient {
    pub fn new() -> Self {
        Self {
            inner: ScriptedBackend::new(Origin::Keyword),
        }
    }

    scripted_builders!();
}

impl Default for ScriptedKeywordClient {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordClient for ScriptedKeywordClient {
    async fn search(
        &self,
        _text: &str,
        _tenant_filter: Option<&TenantFilter>,
        limit: usize,
        _deadline: Duration,
    ) -> Result<Vec<Candidate>, BackendError> {
        self.inner.respond(limit).await
    }
}

/// Embedder returning a fixed vector (or a scripted failure).
#[derive(Debug)]
pub struct FixedEmbedder {
    embedding: Vec<f32>,
    fail_reason: Option<String>,
}

impl FixedEmbedder {
    pub fn new() -> Self {
        Self {
            embedding: vec![0.1, 0.2, 0.3],
            fail_reason: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            embedding: Vec::new(),
            fail_reason: Some(reason.to_string()),
        }
    }
}

impl Default for FixedEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryEmbedder for FixedEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, BackendError> {
        match &self.fail_reason {
            Some(reason) => Err(BackendError::Unavailable {
                origin: Origin::Vector,
                reason: reason.clone(),
            }),
            None => Ok(self.embedding.clone()),
        }
    }
}

/// How the mock reranker answers a `score` call.
#[derive(Debug, Clone)]
enum RerankScript {
    /// Look each passage up by text; unknown passages score 0.0.
    BySnippet(HashMap<String, f64>),
    /// Return exactly this vector regardless of the passage count.
    Verbatim(Vec<f64>),
    Fail(String),
}

/// Mock cross-encoder.
#[derive(Debug)]
pub struct ScriptedReranker {
    script: RerankScript,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl ScriptedReranker {
    /// Score passages by their exact snippet text (0.0 for unknown).
    pub fn by_snippet(scores: &[(&str, f64)]) -> Self {
        Self {
            script: RerankScript::BySnippet(
                scores.iter().map(|(s, v)| (s.to_string(), *v)).collect(),
            ),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Return this exact score vector (length mismatches included, to drive
    /// misalignment handling).
    pub fn verbatim(scores: Vec<f64>) -> Self {
        Self {
            script: RerankScript::Verbatim(scores),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            script: RerankScript::Fail(reason.to_string()),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RerankerClient for ScriptedReranker {
    async fn score(
        &self,
        _query_text: &str,
        passages: &[&str],
        _deadline: Duration,
    ) -> Result<Vec<f64>, RerankError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.script {
            RerankScript::BySnippet(map) => Ok(passages
                .iter()
                .map(|p| map.get(*p).copied().unwrap_or(0.0))
                .collect()),
            RerankScript::Verbatim(scores) => Ok(scores.clone()),
            RerankScript::Fail(reason) => Err(RerankError::Unavailable {
                reason: reason.clone(),
            }),
        }
    }
}
