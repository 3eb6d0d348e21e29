//! Citation assignment: stable, dense 1-based indices over the final list.

use std::collections::HashMap;

use fathom_core::models::{Citation, RerankedResult};

/// Longest snippet head used when a result has no title metadata.
const DISPLAY_SNIPPET_CHARS: usize = 60;

/// Mints dense citation indices for one response.
///
/// Post-dedup a source id cannot appear twice, but the invariant is guarded
/// anyway: a repeat source reuses its existing index instead of minting a
/// new one, so indices stay exactly 1..N with no gaps.
#[derive(Debug, Default)]
pub struct CitationAssigner {
    by_source: HashMap<String, usize>,
}

impl CitationAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cite one result, in final rank order.
    ///
    /// Returns `None` when the source was already cited in this response.
    pub fn cite(&mut self, result: &RerankedResult) -> Option<Citation> {
        let source_id = &result.fused.representative.source_id;
        if self.by_source.contains_key(source_id) {
            return None;
        }
        let index = self.by_source.len() + 1;
        self.by_source.insert(source_id.clone(), index);
        Some(Citation {
            index,
            source_id: source_id.clone(),
            span: result.fused.representative.span,
            display_text: display_text(index, result),
        })
    }

    /// Index previously minted for a source, if any.
    pub fn index_of(&self, source_id: &str) -> Option<usize> {
        self.by_source.get(source_id).copied()
    }
}

/// `[n] Title` when the backend supplied one, otherwise the snippet head.
fn display_text(index: usize, result: &RerankedResult) -> String {
    let representative = &result.fused.representative;
    let label = representative
        .metadata
        .get("title")
        .and_then(|t| t.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| snippet_head(&representative.snippet));
    format!("[{index}] {label}")
}

fn snippet_head(snippet: &str) -> String {
    if snippet.chars().count() <= DISPLAY_SNIPPET_CHARS {
        return snippet.to_string();
    }
    let head: String = snippet.chars().take(DISPLAY_SNIPPET_CHARS).collect();
    format!("{head}…")
}
