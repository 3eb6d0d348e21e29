//! Property tests over the pure ranking stages: normalization, fusion,
//! dedup, and citation assignment.

use std::collections::{BTreeMap, HashSet};

use proptest::collection::vec;
use proptest::prelude::*;

use fathom_core::config::FusionWeights;
use fathom_core::models::{
    Candidate, ContentSpan, FusedResult, Origin, OriginContribution, RerankedResult,
};
use fathom_retrieval::citation::CitationAssigner;
use fathom_retrieval::dedup::dedup;
use fathom_retrieval::fusion::{fuse, normalize};

fn origin_strategy() -> impl Strategy<Value = Origin> {
    prop_oneof![
        Just(Origin::Vector),
        Just(Origin::Graph),
        Just(Origin::Keyword),
    ]
}

fn candidate_strategy() -> impl Strategy<Value = Candidate> {
    (
        0usize..24,
        0usize..8,
        origin_strategy(),
        0.0f64..100.0,
        0usize..400,
        1usize..200,
    )
        .prop_map(|(source, doc, origin, raw_score, start, len)| {
            Candidate::new(
                format!("src-{source}"),
                format!("doc-{doc}"),
                origin,
                raw_score,
                ContentSpan::new(start, start + len),
                format!("text of src-{source}"),
            )
        })
}

fn origin_lists_strategy() -> impl Strategy<Value = Vec<(Origin, Vec<Candidate>)>> {
    vec(candidate_strategy(), 0..40).prop_map(|candidates| {
        let mut lists: Vec<(Origin, Vec<Candidate>)> = vec![
            (Origin::Vector, Vec::new()),
            (Origin::Graph, Vec::new()),
            (Origin::Keyword, Vec::new()),
        ];
        for candidate in candidates {
            let slot = lists
                .iter_mut()
                .find(|(origin, _)| *origin == candidate.origin);
            if let Some((_, list)) = slot {
                list.push(candidate);
            }
        }
        lists.retain(|(_, list)| !list.is_empty());
        lists
    })
}

proptest! {
    #[test]
    fn normalized_scores_stay_in_the_unit_interval(raw in vec(0.0f64..1e6, 0..50)) {
        let normalized = normalize(&raw);
        prop_assert_eq!(normalized.len(), raw.len());
        for score in normalized {
            prop_assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn the_best_raw_score_normalizes_to_one(raw in vec(0.0f64..1e6, 1..50)) {
        let normalized = normalize(&raw);
        let top = normalized.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!((top - 1.0).abs() < 1e-9);
    }

    #[test]
    fn fusion_yields_unique_sources_in_non_increasing_order(
        lists in origin_lists_strategy(),
    ) {
        let weights = FusionWeights::default();
        let fused = fuse(&lists, &weights);

        let mut seen = HashSet::new();
        for result in &fused {
            prop_assert!(seen.insert(result.representative.source_id.clone()));
        }
        for pair in fused.windows(2) {
            prop_assert!(pair[0].fused_score >= pair[1].fused_score);
        }
    }

    #[test]
    fn fused_scores_are_bounded_by_the_weight_mass(lists in origin_lists_strategy()) {
        let weights = FusionWeights::default();
        let ceiling = weights.vector + weights.graph + weights.keyword;
        for result in fuse(&lists, &weights) {
            prop_assert!(result.fused_score >= 0.0);
            prop_assert!(result.fused_score <= ceiling + 1e-9);
        }
    }

    #[test]
    fn fusion_is_a_pure_function_of_its_inputs(lists in origin_lists_strategy()) {
        let weights = FusionWeights::default();
        let first = fuse(&lists, &weights);
        let second = fuse(&lists, &weights);
        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            prop_assert_eq!(&a.representative.source_id, &b.representative.source_id);
            prop_assert_eq!(a.fused_score, b.fused_score);
        }
    }

    #[test]
    fn dedup_never_grows_the_list_and_keeps_sources_unique(
        lists in origin_lists_strategy(),
        threshold in 0.1f64..=1.0,
    ) {
        let weights = FusionWeights::default();
        let fused = fuse(&lists, &weights);
        let input_len = fused.len();
        let deduped = dedup(fused, threshold, &weights);

        prop_assert!(deduped.len() <= input_len);
        let mut seen = HashSet::new();
        for result in &deduped {
            prop_assert!(seen.insert(result.representative.source_id.clone()));
        }
        for pair in deduped.windows(2) {
            prop_assert!(pair[0].fused_score >= pair[1].fused_score);
        }
    }

    #[test]
    fn merging_never_lowers_a_result_below_its_inputs(lists in origin_lists_strategy()) {
        // Union-and-rescore means every surviving result scores at least as
        // high as the best fused input it absorbed.
        let weights = FusionWeights::default();
        let fused = fuse(&lists, &weights);
        let best_input = fused
            .iter()
            .map(|f| f.fused_score)
            .fold(f64::NEG_INFINITY, f64::max);
        let deduped = dedup(fused, 0.5, &weights);
        if let Some(top) = deduped.first() {
            prop_assert!(top.fused_score >= best_input - 1e-9);
        }
    }

    #[test]
    fn citation_indices_are_dense_and_one_based(
        ids in vec(0usize..16, 0..30),
    ) {
        let mut assigner = CitationAssigner::new();
        let mut minted = Vec::new();
        for id in ids {
            let result = reranked(&format!("src-{id}"));
            if let Some(citation) = assigner.cite(&result) {
                minted.push(citation.index);
            }
        }
        let expected: Vec<usize> = (1..=minted.len()).collect();
        prop_assert_eq!(minted, expected);
    }
}

fn reranked(source_id: &str) -> RerankedResult {
    let mut contributions = BTreeMap::new();
    contributions.insert(
        Origin::Vector,
        OriginContribution {
            normalized_score: 1.0,
            rank: 0,
        },
    );
    RerankedResult {
        fused: FusedResult {
            representative: Candidate::new(
                source_id,
                "doc",
                Origin::Vector,
                1.0,
                ContentSpan::new(0, 10),
                "snippet",
            ),
            contributions,
            fused_score: 0.5,
            merged_snippets: Vec::new(),
        },
        final_score: 0.5,
        rank: 1,
    }
}
