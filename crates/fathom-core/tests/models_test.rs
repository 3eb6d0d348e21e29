use std::collections::BTreeMap;

use proptest::prelude::*;

use fathom_core::models::{
    Candidate, ContentSpan, FusedResult, Origin, OriginContribution, Query, TenantFilter,
};

#[test]
fn span_overlap_len_and_fraction() {
    let a = ContentSpan::new(0, 100);
    let b = ContentSpan::new(50, 150);
    assert_eq!(a.overlap_len(&b), 50);
    // Both spans are 100 long; overlap is half the shorter.
    assert!((a.overlap_fraction(&b) - 0.5).abs() < f64::EPSILON);
}

#[test]
fn disjoint_spans_do_not_overlap() {
    let a = ContentSpan::new(0, 10);
    let b = ContentSpan::new(10, 20);
    assert_eq!(a.overlap_len(&b), 0);
    assert_eq!(a.overlap_fraction(&b), 0.0);
}

#[test]
fn zero_length_span_has_zero_overlap_fraction() {
    let a = ContentSpan::new(5, 5);
    let b = ContentSpan::new(0, 10);
    assert_eq!(a.overlap_fraction(&b), 0.0);
}

#[test]
fn overlap_fraction_uses_shorter_span() {
    let short = ContentSpan::new(0, 10);
    let long = ContentSpan::new(0, 1000);
    // The short span is fully contained, so the fraction is 1.0.
    assert!((short.overlap_fraction(&long) - 1.0).abs() < f64::EPSILON);
    assert!((long.overlap_fraction(&short) - 1.0).abs() < f64::EPSILON);
}

proptest! {
    #[test]
    fn overlap_fraction_is_symmetric_and_bounded(
        a_start in 0usize..1000,
        a_len in 0usize..500,
        b_start in 0usize..1000,
        b_len in 0usize..500,
    ) {
        let a = ContentSpan::new(a_start, a_start + a_len);
        let b = ContentSpan::new(b_start, b_start + b_len);
        let fraction = a.overlap_fraction(&b);
        prop_assert!((0.0..=1.0).contains(&fraction));
        prop_assert_eq!(fraction, b.overlap_fraction(&a));
    }

    #[test]
    fn contained_span_overlaps_fully(
        start in 0usize..1000,
        len in 1usize..500,
        pad in 0usize..100,
    ) {
        let inner = ContentSpan::new(start + pad, start + pad + len);
        let outer = ContentSpan::new(start, start + pad + len + pad);
        prop_assert!((inner.overlap_fraction(&outer) - 1.0).abs() < 1e-12);
        prop_assert!((outer.overlap_fraction(&inner) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn query_builder_threads_fields() {
    let query = Query::new("lease terms", "session-1")
        .with_entity_mentions(vec!["Acme Corp".into()])
        .with_tenant_filter(TenantFilter(serde_json::json!({"dept": "legal"})))
        .with_top_k(5);
    assert_eq!(query.text, "lease terms");
    assert_eq!(query.session_id, "session-1");
    assert_eq!(query.entity_mentions, vec!["Acme Corp".to_string()]);
    assert_eq!(query.top_k, 5);
    assert!(query.tenant_filter.is_some());
}

#[test]
fn queries_get_distinct_ids() {
    let a = Query::new("x", "s");
    let b = Query::new("x", "s");
    assert_ne!(a.query_id, b.query_id);
}

#[test]
fn origin_priority_order_is_vector_graph_keyword() {
    assert!(Origin::Vector.priority() < Origin::Graph.priority());
    assert!(Origin::Graph.priority() < Origin::Keyword.priority());
    assert_eq!(Origin::Vector.as_str(), "vector");
}

fn fused_with(origins: &[(Origin, f64, usize)]) -> FusedResult {
    let representative = Candidate::new(
        "chunk-1",
        "doc-1",
        origins[0].0,
        origins[0].1,
        ContentSpan::new(0, 10),
        "snippet",
    );
    let mut contributions = BTreeMap::new();
    for (origin, normalized, rank) in origins {
        contributions.insert(
            *origin,
            OriginContribution {
                normalized_score: *normalized,
                rank: *rank,
            },
        );
    }
    FusedResult {
        representative,
        contributions,
        fused_score: 0.0,
        merged_snippets: Vec::new(),
    }
}

#[test]
fn fused_result_accessors() {
    let fused = fused_with(&[(Origin::Keyword, 1.0, 3), (Origin::Vector, 0.8, 1)]);
    assert_eq!(fused.origin_count(), 2);
    assert_eq!(fused.best_origin_priority(), Origin::Vector.priority());
    assert_eq!(fused.best_rank(), 1);
    // Origins come back in priority order regardless of insertion order.
    assert_eq!(fused.origins(), vec![Origin::Vector, Origin::Keyword]);
}

#[test]
fn candidate_serializes_with_lowercase_origin() {
    let candidate = Candidate::new(
        "chunk-9",
        "doc-2",
        Origin::Graph,
        0.4,
        ContentSpan::new(3, 30),
        "text",
    );
    let json = serde_json::to_value(&candidate).expect("serializes");
    assert_eq!(json["origin"], "graph");
    assert_eq!(json["source_id"], "chunk-9");
}
