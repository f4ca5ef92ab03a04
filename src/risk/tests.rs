use super::*;
use crate::matching::{BestMatch, CandidateMatch};

fn best(clause_id: usize, chunk_id: usize, similarity: f32) -> BestMatch {
    let candidate = CandidateMatch::new(clause_id, chunk_id, similarity);
    BestMatch::new(candidate, RiskClassifier::default().classify(similarity))
}

#[test]
fn test_tier_ordering() {
    assert!(RiskTier::Low < RiskTier::Medium);
    assert!(RiskTier::Medium < RiskTier::High);
    assert_eq!(RiskTier::ALL.iter().max(), Some(&RiskTier::High));
}

#[test]
fn test_tier_labels() {
    assert_eq!(RiskTier::Low.label(), "Low Risk");
    assert_eq!(RiskTier::Medium.to_string(), "Medium Risk");
    assert_eq!(RiskTier::High.as_str(), "high");
}

#[test]
fn test_classify_boundaries_are_exact() {
    let classifier = RiskClassifier::default();

    assert_eq!(classifier.classify(0.85), RiskTier::Low);
    assert_eq!(classifier.classify(0.850001), RiskTier::Medium);
    assert_eq!(classifier.classify(0.91), RiskTier::Medium);
    assert_eq!(classifier.classify(0.910001), RiskTier::High);
}

#[test]
fn test_classify_full_domain() {
    let classifier = RiskClassifier::default();

    assert_eq!(classifier.classify(-1.0), RiskTier::Low);
    assert_eq!(classifier.classify(0.76), RiskTier::Low);
    assert_eq!(classifier.classify(0.88), RiskTier::Medium);
    assert_eq!(classifier.classify(1.0), RiskTier::High);
    assert_eq!(classifier.classify(f32::NAN), RiskTier::Low);
}

#[test]
fn test_classify_custom_breakpoints() {
    let classifier = RiskClassifier::new(RiskBreakpoints::new(0.5, 0.7).unwrap());

    assert_eq!(classifier.classify(0.5), RiskTier::Low);
    assert_eq!(classifier.classify(0.6), RiskTier::Medium);
    assert_eq!(classifier.classify(0.71), RiskTier::High);
}

#[test]
fn test_breakpoints_validation() {
    assert!(RiskBreakpoints::new(0.91, 0.85).is_err());
    assert!(RiskBreakpoints::new(0.9, 0.9).is_err());
    assert!(RiskBreakpoints::new(f32::NAN, 0.9).is_err());
    assert_eq!(RiskBreakpoints::default(), RiskBreakpoints::new(0.85, 0.91).unwrap());
}

#[test]
fn test_weights_validation() {
    assert!(TierWeights::default().validate().is_ok());

    let err = TierWeights {
        low: 0.0,
        ..Default::default()
    }
    .validate()
    .unwrap_err();
    assert_eq!(
        err,
        RiskError::InvalidWeight {
            tier: "low",
            value: 0.0
        }
    );

    assert!(
        TierWeights {
            high: f32::INFINITY,
            ..Default::default()
        }
        .validate()
        .is_err()
    );
}

#[test]
fn test_annotate_preserves_order() {
    let annotated = RiskClassifier::default().annotate(vec![
        CandidateMatch::new(0, 3, 0.95),
        CandidateMatch::new(1, 1, 0.88),
        CandidateMatch::new(0, 2, 0.80),
    ]);

    let tiers: Vec<RiskTier> = annotated.iter().map(|m| m.risk_tier).collect();
    assert_eq!(tiers, vec![RiskTier::High, RiskTier::Medium, RiskTier::Low]);
    assert_eq!(annotated[0].chunk_id, 3);
}

#[test]
fn test_aggregate_empty_is_no_matches() {
    let summary = Aggregator::default().aggregate(Vec::new());

    assert_eq!(summary.weighted_score, 0.0);
    assert_eq!(summary.tier, None);
    assert_eq!(summary.counts, TierCounts::default());
    assert!(summary.is_no_matches());
    assert_eq!(summary.verdict(), RiskVerdict::NoMatches);
}

#[test]
fn test_aggregate_weighted_scenario() {
    // chunk 0 best 0.80 (Low), chunk 1 best 0.95 (High)
    let summary = Aggregator::default().aggregate(vec![best(1, 1, 0.95), best(0, 0, 0.80)]);

    assert!((summary.weighted_score - 0.90).abs() < 1e-6);
    assert_eq!(summary.tier, Some(RiskTier::Medium));
    assert_eq!(
        summary.counts,
        TierCounts {
            low: 1,
            medium: 0,
            high: 1
        }
    );
    assert_eq!(summary.counts.total(), 2);
    assert_eq!(summary.matches.len(), 2);
}

#[test]
fn test_aggregate_single_low_match_is_low_not_no_matches() {
    let summary = Aggregator::default().aggregate(vec![best(0, 0, 0.78)]);

    assert_eq!(summary.tier, Some(RiskTier::Low));
    assert!(!summary.is_no_matches());
    assert_eq!(summary.verdict().tier(), Some(RiskTier::Low));
}

#[test]
fn test_aggregate_uses_stored_tier_not_similarity() {
    // Stored tier is authoritative: a High-tagged 0.80 gets full weight.
    let forced = BestMatch::new(CandidateMatch::new(0, 0, 0.80), RiskTier::High);
    let low = best(1, 1, 0.80);

    let summary = Aggregator::default().aggregate(vec![forced, low]);

    assert_eq!(summary.counts.high, 1);
    assert_eq!(summary.counts.low, 1);
    assert!((summary.weighted_score - 0.80).abs() < 1e-6);
}

#[test]
fn test_aggregate_low_volume_does_not_dominate() {
    let mut matches = vec![best(0, 0, 0.95)];
    matches.extend((1..5).map(|id| best(id, id, 0.78)));

    let summary = Aggregator::default().aggregate(matches);

    // (0.95 + 4 * 0.78 * 0.5) / (1 + 4 * 0.5) = 2.51 / 3.0
    assert!((summary.weighted_score - 0.8367).abs() < 1e-3);
    assert_eq!(summary.tier, Some(RiskTier::Low));
}

#[test]
fn test_aggregate_is_bit_identical_on_repeat() {
    let matches: Vec<BestMatch> = (0..50)
        .map(|i| best(i % 7, i, 0.76 + (i as f32) * 0.0047))
        .collect();

    let aggregator = Aggregator::default();
    let first = aggregator.aggregate(matches.clone());
    let second = aggregator.aggregate(matches);

    assert_eq!(
        first.weighted_score.to_bits(),
        second.weighted_score.to_bits()
    );
    assert_eq!(first, second);
}

#[test]
fn test_aggregate_custom_weights() {
    let weights = TierWeights {
        low: 1.0,
        medium: 1.0,
        high: 1.0,
    };
    let aggregator = Aggregator::new(RiskClassifier::default(), weights);
    let summary = aggregator.aggregate(vec![best(0, 0, 0.95), best(1, 1, 0.80)]);

    assert!((summary.weighted_score - 0.875).abs() < 1e-6);
    assert_eq!(summary.tier, Some(RiskTier::Medium));
    assert_eq!(aggregator.weights(), weights);
}

#[test]
fn test_verdict_display() {
    let verdict = RiskVerdict::Assessed {
        score: 0.9,
        tier: RiskTier::Medium,
    };
    assert_eq!(verdict.to_string(), "Medium Risk (score: 0.9000)");
    assert_eq!(verdict.as_str(), "ASSESSED");
    assert_eq!(verdict.score(), Some(0.9));

    assert_eq!(RiskVerdict::NoMatches.to_string(), "NO_MATCHES");
    assert_eq!(RiskVerdict::NoMatches.score(), None);
    assert_eq!(RiskVerdict::NoMatches.tier(), None);
}

#[test]
fn test_summary_serializes_null_tier_for_no_matches() {
    let summary = Aggregator::default().aggregate(Vec::new());
    let json = serde_json::to_value(&summary).unwrap();

    assert!(json["tier"].is_null());
    assert_eq!(json["counts"]["low"], 0);
    assert_eq!(json["matches"].as_array().map(Vec::len), Some(0));
}
