//! Scenario builders with hand-placed unit vectors.

use clause_risk::embedding::normalize_l2;
use clause_risk::{Chunk, Clause};

/// Normalizes `values` to unit length.
pub fn unit(values: &[f32]) -> Vec<f32> {
    let mut v = values.to_vec();
    assert!(normalize_l2(&mut v), "fixture vector must be non-zero");
    v
}

/// Builds chunks and clauses with positional ids.
#[derive(Debug, Default)]
pub struct ScenarioBuilder {
    chunks: Vec<Chunk>,
    clauses: Vec<Clause>,
}

impl ScenarioBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chunk(mut self, text: &str, vector: &[f32]) -> Self {
        let id = self.chunks.len();
        self.chunks.push(Chunk::new(id, text, unit(vector)));
        self
    }

    pub fn clause(mut self, text: &str, vector: &[f32]) -> Self {
        let id = self.clauses.len();
        self.clauses.push(Clause::new(id, text, unit(vector)));
        self
    }

    pub fn build(self) -> (Vec<Chunk>, Vec<Clause>) {
        (self.chunks, self.clauses)
    }
}

/// Two chunks, two clauses.
///
/// Similarities: A·c0 = 0.80, A·c1 = 0.90, B·c1 = 0.95, B·c0 ≈ 0.44.
pub fn contract_scenario() -> ScenarioBuilder {
    let s = 0.19_f32.sqrt();
    let t = 0.0975_f32.sqrt();

    ScenarioBuilder::new()
        .chunk("Payment is due within thirty days", &[0.8, -0.6, 0.0])
        .chunk("Supplier may terminate without notice", &[0.9, s, 0.0])
        .clause("late payment penalty", &[1.0, 0.0, 0.0])
        .clause("termination for convenience", &[0.95 * 0.9, 0.95 * s, t])
}

/// One chunk pointing away from every clause.
pub fn unrelated_scenario() -> ScenarioBuilder {
    ScenarioBuilder::new()
        .chunk("The parties agree to meet quarterly", &[0.0, 1.0, 0.0])
        .clause("late payment penalty", &[1.0, 0.0, 0.0])
        .clause("termination for convenience", &[0.0, 0.0, 1.0])
}
