//! Risk tiers, per-match classification and document-level aggregation.
//!
//! [`Aggregator`] owns the [`RiskClassifier`] it uses for the document tier. Build both
//! from the same [`RiskBreakpoints`] (the pipeline does) so a match at exactly a
//! breakpoint lands in the same tier at both call sites.

pub mod aggregate;
pub mod classifier;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use aggregate::Aggregator;
pub use classifier::RiskClassifier;
pub use error::RiskError;
pub use types::{
    DocumentRiskSummary, RiskBreakpoints, RiskTier, RiskVerdict, TierCounts, TierWeights,
};
