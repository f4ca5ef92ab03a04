use super::*;
use crate::document::{Chunk, Clause};
use crate::embedding::normalize_l2;
use crate::index::{IndexError, VectorIndex};
use proptest::prelude::*;

/// Unit vector in the xy-plane with the given cosine to the x axis.
fn at_cosine(cos: f32) -> Vec<f32> {
    let sin = (1.0 - cos * cos).max(0.0).sqrt();
    vec![cos, sin]
}

fn index_of(cosines: &[f32]) -> VectorIndex {
    let chunks: Vec<Chunk> = cosines
        .iter()
        .enumerate()
        .map(|(id, &c)| Chunk::new(id, format!("chunk {id}"), at_cosine(c)))
        .collect();
    VectorIndex::build(&chunks).expect("valid chunks")
}

fn x_axis_clause(id: usize) -> Clause {
    Clause::new(id, format!("clause {id}"), vec![1.0, 0.0])
}

#[test]
fn test_match_config_defaults() {
    let config = MatchConfig::default();
    assert_eq!(config.top_k, 3);
    assert_eq!(config.threshold, 0.75);
    assert!(!config.parallel);
}

#[test]
fn test_match_config_validation() {
    assert!(MatchConfig::default().with_top_k(0).validate().is_err());
    assert!(MatchConfig::default().with_threshold(1.5).validate().is_err());
    assert!(MatchConfig::default().with_threshold(f32::NAN).validate().is_err());
    assert!(Matcher::new(MatchConfig::default().with_threshold(-1.0)).is_ok());
}

#[test]
fn test_match_clause_filters_strictly_above_threshold() {
    let index = index_of(&[0.95, 0.60, 0.80]);
    let matcher = Matcher::new(MatchConfig::default().with_threshold(0.80)).unwrap();

    let candidates = matcher.match_clause(&x_axis_clause(0), &index).unwrap();

    // exactly 0.80 does not clear a 0.80 threshold
    assert!(candidates.iter().all(|c| c.similarity > 0.80));
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].chunk_id, 0);
}

#[test]
fn test_match_clause_respects_top_k() {
    let index = index_of(&[0.99, 0.98, 0.97, 0.96]);
    let matcher = Matcher::new(MatchConfig::default().with_top_k(2)).unwrap();

    let candidates = matcher.match_clause(&x_axis_clause(0), &index).unwrap();
    let ids: Vec<usize> = candidates.iter().map(|c| c.chunk_id).collect();
    assert_eq!(ids, vec![0, 1]);
}

#[test]
fn test_clause_without_survivors_contributes_nothing() {
    let index = index_of(&[0.10, 0.20]);
    let matcher = Matcher::default();

    let candidates = matcher
        .match_all(&[x_axis_clause(0), x_axis_clause(1)], &index)
        .unwrap();
    assert!(candidates.is_empty());
}

#[test]
fn test_match_all_orders_by_clause_then_similarity() {
    let index = index_of(&[0.80, 0.95, 0.90]);
    let y_clause = Clause::new(1, "y", at_cosine(0.0));
    let clauses = vec![x_axis_clause(0), y_clause, x_axis_clause(2)];

    let candidates = Matcher::default().match_all(&clauses, &index).unwrap();
    let pairs: Vec<(usize, usize)> = candidates.iter().map(|c| (c.clause_id, c.chunk_id)).collect();

    assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 0), (2, 1), (2, 2), (2, 0)]);
}

#[test]
fn test_match_all_parallel_matches_sequential() {
    let mut chunks = Vec::new();
    for id in 0..40 {
        let mut v = vec![1.0, (id as f32) * 0.05, ((id * 7) % 11) as f32 * 0.03];
        normalize_l2(&mut v);
        chunks.push(Chunk::new(id, format!("chunk {id}"), v));
    }
    let index = VectorIndex::build(&chunks).unwrap();

    let clauses: Vec<Clause> = (0..25)
        .map(|id| {
            let mut v = vec![1.0, (id as f32) * 0.08, 0.1];
            normalize_l2(&mut v);
            Clause::new(id, format!("clause {id}"), v)
        })
        .collect();

    let sequential = Matcher::default().match_all(&clauses, &index).unwrap();
    let parallel = Matcher::new(MatchConfig::default().with_parallel(true))
        .unwrap()
        .match_all(&clauses, &index)
        .unwrap();

    assert!(!sequential.is_empty());
    assert_eq!(sequential, parallel);
}

#[test]
fn test_match_all_empty_index_is_an_error() {
    let index = VectorIndex::build(&[]).unwrap();
    let err = Matcher::default()
        .match_all(&[x_axis_clause(0)], &index)
        .unwrap_err();

    assert!(err.is_empty_index());
    assert_eq!(err.index_error(), Some(&IndexError::EmptyIndex));
}

#[test]
fn test_match_all_empty_index_with_no_clauses_is_still_an_error() {
    let index = VectorIndex::build(&[]).unwrap();
    assert!(Matcher::default().match_all(&[], &index).unwrap_err().is_empty_index());
}

#[test]
fn test_match_all_reports_first_failing_clause() {
    let index = index_of(&[0.9]);
    let clauses = vec![
        x_axis_clause(0),
        Clause::new(1, "bad dim", vec![1.0, 0.0, 0.0]),
        Clause::new(2, "bad norm", vec![2.0, 0.0]),
    ];

    for parallel in [false, true] {
        let matcher = Matcher::new(MatchConfig::default().with_parallel(parallel)).unwrap();
        match matcher.match_all(&clauses, &index).unwrap_err() {
            MatchError::Search { clause_id, source } => {
                assert_eq!(clause_id, 1);
                assert!(matches!(source, IndexError::DimensionMismatch { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[test]
fn test_dedupe_keeps_best_per_chunk() {
    let candidates = vec![
        CandidateMatch::new(0, 0, 0.80),
        CandidateMatch::new(0, 1, 0.90),
        CandidateMatch::new(1, 1, 0.95),
    ];

    let best = dedupe(&candidates);

    assert_eq!(
        best,
        vec![
            CandidateMatch::new(1, 1, 0.95),
            CandidateMatch::new(0, 0, 0.80),
        ]
    );
}

#[test]
fn test_dedupe_tie_prefers_smallest_clause_id() {
    let candidates = vec![
        CandidateMatch::new(4, 7, 0.88),
        CandidateMatch::new(2, 7, 0.88),
        CandidateMatch::new(3, 7, 0.88),
    ];

    assert_eq!(dedupe(&candidates), vec![CandidateMatch::new(2, 7, 0.88)]);
}

#[test]
fn test_dedupe_equal_similarity_keeps_input_order() {
    let candidates = vec![
        CandidateMatch::new(0, 9, 0.80),
        CandidateMatch::new(0, 3, 0.80),
        CandidateMatch::new(1, 5, 0.80),
    ];

    let chunk_ids: Vec<usize> = dedupe(&candidates).iter().map(|c| c.chunk_id).collect();
    assert_eq!(chunk_ids, vec![9, 3, 5]);
}

#[test]
fn test_dedupe_empty() {
    assert!(dedupe(&[]).is_empty());
}

#[test]
fn test_best_match_round_trips_candidate() {
    let candidate = CandidateMatch::new(1, 2, 0.9);
    let best = BestMatch::new(candidate, crate::risk::RiskTier::Medium);
    assert_eq!(best.candidate(), candidate);
    assert_eq!(best.risk_tier, crate::risk::RiskTier::Medium);
}

fn candidate_strategy() -> impl Strategy<Value = CandidateMatch> {
    (0usize..6, 0usize..10, 0.75f32..1.0)
        .prop_map(|(clause_id, chunk_id, similarity)| CandidateMatch::new(clause_id, chunk_id, similarity))
}

proptest! {
    #[test]
    fn prop_dedupe_unique_and_maximal(candidates in prop::collection::vec(candidate_strategy(), 0..60)) {
        let best = dedupe(&candidates);

        let mut seen = std::collections::HashSet::new();
        for m in &best {
            prop_assert!(seen.insert(m.chunk_id), "duplicate chunk {}", m.chunk_id);

            let max = candidates
                .iter()
                .filter(|c| c.chunk_id == m.chunk_id)
                .map(|c| c.similarity)
                .fold(f32::NEG_INFINITY, f32::max);
            prop_assert_eq!(m.similarity, max);
        }

        let distinct: std::collections::HashSet<usize> = candidates.iter().map(|c| c.chunk_id).collect();
        prop_assert_eq!(distinct.len(), best.len());

        for pair in best.windows(2) {
            prop_assert!(pair[0].similarity >= pair[1].similarity);
        }
    }
}
