use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::debug;

use super::types::CandidateMatch;

/// Keeps one candidate per chunk: the highest similarity, ties to the smallest clause id.
///
/// Winners come back in descending similarity; equal similarities keep their input
/// order. This order is the canonical one the aggregator sums in.
pub fn dedupe(candidates: &[CandidateMatch]) -> Vec<CandidateMatch> {
    let mut best: HashMap<usize, usize> = HashMap::with_capacity(candidates.len());

    for (position, candidate) in candidates.iter().enumerate() {
        match best.entry(candidate.chunk_id) {
            Entry::Vacant(slot) => {
                slot.insert(position);
            }
            Entry::Occupied(mut slot) => {
                if beats(candidate, &candidates[*slot.get()]) {
                    slot.insert(position);
                }
            }
        }
    }

    let mut positions: Vec<usize> = best.into_values().collect();
    positions.sort_unstable();

    let mut winners: Vec<CandidateMatch> = positions.into_iter().map(|p| candidates[p]).collect();
    winners.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    debug!(
        candidates = candidates.len(),
        unique_chunks = winners.len(),
        "Candidates deduplicated by chunk"
    );

    winners
}

#[inline]
fn beats(challenger: &CandidateMatch, current: &CandidateMatch) -> bool {
    match challenger.similarity.total_cmp(&current.similarity) {
        Ordering::Greater => true,
        Ordering::Equal => challenger.clause_id < current.clause_id,
        Ordering::Less => false,
    }
}
