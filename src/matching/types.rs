use serde::{Deserialize, Serialize};

use crate::risk::RiskTier;

/// A clause/chunk pair that cleared the match threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateMatch {
    pub clause_id: usize,
    pub chunk_id: usize,
    pub similarity: f32,
}

impl CandidateMatch {
    pub fn new(clause_id: usize, chunk_id: usize, similarity: f32) -> Self {
        Self {
            clause_id,
            chunk_id,
            similarity,
        }
    }
}

/// The surviving match for one chunk, tagged with its tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BestMatch {
    pub clause_id: usize,
    pub chunk_id: usize,
    pub similarity: f32,
    pub risk_tier: RiskTier,
}

impl BestMatch {
    pub fn new(candidate: CandidateMatch, risk_tier: RiskTier) -> Self {
        Self {
            clause_id: candidate.clause_id,
            chunk_id: candidate.chunk_id,
            similarity: candidate.similarity,
            risk_tier,
        }
    }

    pub fn candidate(&self) -> CandidateMatch {
        CandidateMatch::new(self.clause_id, self.chunk_id, self.similarity)
    }
}
