//! Clause-to-chunk matching and per-chunk deduplication.

pub mod dedupe;
pub mod error;
pub mod matcher;
pub mod types;

#[cfg(test)]
mod tests;

pub use dedupe::dedupe;
pub use error::MatchError;
pub use matcher::{MatchConfig, Matcher};
pub use types::{BestMatch, CandidateMatch};
