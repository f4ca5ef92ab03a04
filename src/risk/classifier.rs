use super::types::{RiskBreakpoints, RiskTier};
use crate::matching::{BestMatch, CandidateMatch};

/// Maps similarity scores to tiers.
///
/// `s <= medium_above` is Low, `medium_above < s <= high_above` is Medium and
/// `s > high_above` is High. NaN falls through to Low.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RiskClassifier {
    breakpoints: RiskBreakpoints,
}

impl RiskClassifier {
    pub fn new(breakpoints: RiskBreakpoints) -> Self {
        Self { breakpoints }
    }

    pub fn breakpoints(&self) -> RiskBreakpoints {
        self.breakpoints
    }

    #[inline]
    pub fn classify(&self, similarity: f32) -> RiskTier {
        if similarity > self.breakpoints.high_above {
            RiskTier::High
        } else if similarity > self.breakpoints.medium_above {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    /// Tags each deduplicated candidate with its tier, preserving order.
    pub fn annotate(&self, candidates: Vec<CandidateMatch>) -> Vec<BestMatch> {
        candidates
            .into_iter()
            .map(|candidate| BestMatch::new(candidate, self.classify(candidate.similarity)))
            .collect()
    }
}
