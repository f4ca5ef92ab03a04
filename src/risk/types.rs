use serde::{Deserialize, Serialize};

use super::error::RiskError;
use crate::constants::{
    DEFAULT_HIGH_ABOVE, DEFAULT_MEDIUM_ABOVE, DEFAULT_WEIGHT_HIGH, DEFAULT_WEIGHT_LOW,
    DEFAULT_WEIGHT_MEDIUM,
};
use crate::matching::BestMatch;

/// Discrete risk level, ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Medium, RiskTier::High];

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }

    /// Human-readable label used in reports (`"Medium Risk"`).
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Medium => "Medium Risk",
            RiskTier::High => "High Risk",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Exclusive lower bounds for the Medium and High tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskBreakpoints {
    pub medium_above: f32,
    pub high_above: f32,
}

impl Default for RiskBreakpoints {
    fn default() -> Self {
        Self {
            medium_above: DEFAULT_MEDIUM_ABOVE,
            high_above: DEFAULT_HIGH_ABOVE,
        }
    }
}

impl RiskBreakpoints {
    pub fn new(medium_above: f32, high_above: f32) -> Result<Self, RiskError> {
        let breakpoints = Self {
            medium_above,
            high_above,
        };
        breakpoints.validate()?;
        Ok(breakpoints)
    }

    pub fn validate(&self) -> Result<(), RiskError> {
        if !self.medium_above.is_finite()
            || !self.high_above.is_finite()
            || self.medium_above >= self.high_above
        {
            return Err(RiskError::InvalidBreakpoints {
                medium_above: self.medium_above,
                high_above: self.high_above,
            });
        }
        Ok(())
    }
}

/// Per-tier weights for the document score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierWeights {
    pub low: f32,
    pub medium: f32,
    pub high: f32,
}

impl Default for TierWeights {
    fn default() -> Self {
        Self {
            low: DEFAULT_WEIGHT_LOW,
            medium: DEFAULT_WEIGHT_MEDIUM,
            high: DEFAULT_WEIGHT_HIGH,
        }
    }
}

impl TierWeights {
    #[inline]
    pub fn weight(&self, tier: RiskTier) -> f32 {
        match tier {
            RiskTier::Low => self.low,
            RiskTier::Medium => self.medium,
            RiskTier::High => self.high,
        }
    }

    pub fn validate(&self) -> Result<(), RiskError> {
        for tier in RiskTier::ALL {
            let value = self.weight(tier);
            if !value.is_finite() || value <= 0.0 {
                return Err(RiskError::InvalidWeight {
                    tier: tier.as_str(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Number of matches per tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl TierCounts {
    #[inline]
    pub fn get(&self, tier: RiskTier) -> usize {
        match tier {
            RiskTier::Low => self.low,
            RiskTier::Medium => self.medium,
            RiskTier::High => self.high,
        }
    }

    pub(crate) fn increment(&mut self, tier: RiskTier) {
        match tier {
            RiskTier::Low => self.low += 1,
            RiskTier::Medium => self.medium += 1,
            RiskTier::High => self.high += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

/// Document-level outcome of one run.
///
/// `tier` is `None` exactly when `matches` is empty: nothing cleared the match
/// threshold, which is a different statement from "assessed as Low".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRiskSummary {
    pub weighted_score: f32,
    pub tier: Option<RiskTier>,
    pub counts: TierCounts,
    pub matches: Vec<BestMatch>,
}

impl DocumentRiskSummary {
    pub fn verdict(&self) -> RiskVerdict {
        match self.tier {
            Some(tier) => RiskVerdict::Assessed {
                score: self.weighted_score,
                tier,
            },
            None => RiskVerdict::NoMatches,
        }
    }

    /// Returns `true` if no match survived the threshold.
    pub fn is_no_matches(&self) -> bool {
        self.tier.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Compact view of a [`DocumentRiskSummary`].
pub enum RiskVerdict {
    /// At least one match; score and tier were computed.
    Assessed {
        /// Weighted document score.
        score: f32,
        /// Tier of `score`.
        tier: RiskTier,
    },
    /// No candidate cleared the match threshold.
    NoMatches,
}

impl RiskVerdict {
    /// Returns the score (if assessed).
    pub fn score(&self) -> Option<f32> {
        match self {
            RiskVerdict::Assessed { score, .. } => Some(*score),
            RiskVerdict::NoMatches => None,
        }
    }

    /// Returns the tier (if assessed).
    pub fn tier(&self) -> Option<RiskTier> {
        match self {
            RiskVerdict::Assessed { tier, .. } => Some(*tier),
            RiskVerdict::NoMatches => None,
        }
    }

    /// Returns a short status string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskVerdict::Assessed { .. } => "ASSESSED",
            RiskVerdict::NoMatches => "NO_MATCHES",
        }
    }
}

impl std::fmt::Display for RiskVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskVerdict::Assessed { score, tier } => {
                write!(f, "{} (score: {:.4})", tier, score)
            }
            RiskVerdict::NoMatches => write!(f, "NO_MATCHES"),
        }
    }
}
