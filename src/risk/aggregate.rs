use tracing::{info, warn};

use super::classifier::RiskClassifier;
use super::types::{DocumentRiskSummary, TierCounts, TierWeights};
use crate::matching::BestMatch;

/// Folds deduplicated matches into one [`DocumentRiskSummary`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aggregator {
    classifier: RiskClassifier,
    weights: TierWeights,
}

impl Aggregator {
    pub fn new(classifier: RiskClassifier, weights: TierWeights) -> Self {
        Self {
            classifier,
            weights,
        }
    }

    pub fn classifier(&self) -> &RiskClassifier {
        &self.classifier
    }

    pub fn weights(&self) -> TierWeights {
        self.weights
    }

    /// Computes counts, the weighted score and the document tier.
    ///
    /// Each match's stored `risk_tier` selects its weight; it is not re-derived. Sums
    /// run in slice order with `f64` accumulators and the quotient is rounded to `f32`
    /// once, so equal input order gives a bit-identical score.
    pub fn aggregate(&self, matches: Vec<BestMatch>) -> DocumentRiskSummary {
        if matches.is_empty() {
            warn!("No matches above threshold; document risk not computed");
            return DocumentRiskSummary {
                weighted_score: 0.0,
                tier: None,
                counts: TierCounts::default(),
                matches,
            };
        }

        let mut counts = TierCounts::default();
        let mut weighted_sum = 0.0f64;
        let mut total_weight = 0.0f64;

        for m in &matches {
            counts.increment(m.risk_tier);
            let weight = f64::from(self.weights.weight(m.risk_tier));
            weighted_sum += f64::from(m.similarity) * weight;
            total_weight += weight;
        }

        let weighted_score = (weighted_sum / total_weight) as f32;
        let tier = self.classifier.classify(weighted_score);

        info!(
            weighted_score,
            tier = tier.as_str(),
            matches = matches.len(),
            low = counts.low,
            medium = counts.medium,
            high = counts.high,
            "Document risk aggregated"
        );

        DocumentRiskSummary {
            weighted_score,
            tier: Some(tier),
            counts,
            matches,
        }
    }
}
