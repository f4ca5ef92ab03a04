use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::MatchError;
use super::types::CandidateMatch;
use crate::constants::{DEFAULT_MATCH_THRESHOLD, DEFAULT_TOP_K};
use crate::document::Clause;
use crate::index::{IndexError, VectorIndex};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Candidates fetched from the index per clause.
    pub top_k: usize,
    /// Candidates must score strictly above this.
    pub threshold: f32,
    /// Search clauses on the rayon pool. Output order is unchanged.
    pub parallel: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            threshold: DEFAULT_MATCH_THRESHOLD,
            parallel: false,
        }
    }
}

impl MatchConfig {
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.top_k == 0 {
            return Err(MatchError::InvalidConfig {
                reason: "top_k must be at least 1".to_string(),
            });
        }
        if !self.threshold.is_finite() || !(-1.0..=1.0).contains(&self.threshold) {
            return Err(MatchError::InvalidConfig {
                reason: format!("threshold {} must lie in [-1, 1]", self.threshold),
            });
        }
        Ok(())
    }
}

/// Turns clauses into threshold-filtered candidate matches.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Matches every clause against `index`.
    ///
    /// Output is in clause order, then descending similarity within a clause. When
    /// several clauses fail, the error of the first one in clause order is returned,
    /// in parallel mode too.
    pub fn match_all(
        &self,
        clauses: &[Clause],
        index: &VectorIndex,
    ) -> Result<Vec<CandidateMatch>, MatchError> {
        if index.is_empty() {
            return Err(IndexError::EmptyIndex.into());
        }

        let per_clause: Vec<Result<Vec<CandidateMatch>, MatchError>> = if self.config.parallel {
            clauses
                .par_iter()
                .map(|clause| self.match_clause(clause, index))
                .collect()
        } else {
            clauses
                .iter()
                .map(|clause| self.match_clause(clause, index))
                .collect()
        };

        let mut candidates = Vec::new();
        for result in per_clause {
            candidates.extend(result?);
        }

        info!(
            clauses = clauses.len(),
            chunks = index.len(),
            candidates = candidates.len(),
            top_k = self.config.top_k,
            threshold = self.config.threshold,
            parallel = self.config.parallel,
            "Clause matching complete"
        );

        Ok(candidates)
    }

    /// Matches one clause. A clause with no survivors yields an empty vec.
    pub fn match_clause(
        &self,
        clause: &Clause,
        index: &VectorIndex,
    ) -> Result<Vec<CandidateMatch>, MatchError> {
        let hits = index
            .search(&clause.embedding, self.config.top_k)
            .map_err(|source| MatchError::Search {
                clause_id: clause.id,
                source,
            })?;

        let candidates: Vec<CandidateMatch> = hits
            .into_iter()
            .filter(|hit| hit.similarity > self.config.threshold)
            .map(|hit| CandidateMatch::new(clause.id, hit.chunk_id, hit.similarity))
            .collect();

        debug!(
            clause_id = clause.id,
            survivors = candidates.len(),
            "Clause searched"
        );

        Ok(candidates)
    }
}
