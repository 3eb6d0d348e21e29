//! # fathom-retrieval
//!
//! Query-time hybrid retrieval: plan which backends to ask, fan out
//! concurrently under one deadline, fuse the heterogeneous score
//! distributions into a single ranking, collapse span-overlapping evidence,
//! rerank the top of the list with a cross-encoder, and hand back a
//! citation-indexed response.
//!
//! Stage order: planner → orchestrator → fusion → dedup → rerank → citations.
//! Everything after the fan-in barrier is sequential and pure.

pub mod adapters;
pub mod citation;
pub mod dedup;
pub mod engine;
pub mod fusion;
pub mod orchestrator;
pub mod planner;
pub mod rerank;

pub use engine::RetrievalEngine;
