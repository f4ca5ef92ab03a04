use tracing::debug;

use super::error::EmbeddingError;
use super::{Embedder, normalize_l2};
use crate::constants::{DEFAULT_EMBEDDING_DIM, MIN_EMBEDDING_DIM};

/// Deterministic bag-of-words embedder.
///
/// Each lower-cased alphanumeric word and each adjacent word pair is hashed with BLAKE3
/// into one of `dim` buckets with a signed weight, then the vector is L2-normalized.
/// Identical text always maps to the identical vector, and texts sharing vocabulary get a
/// positive cosine similarity. It is a stand-in for a real sentence model, not a
/// replacement for one.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dim: usize,
}

impl HashEmbedder {
    pub fn new(dim: usize) -> Result<Self, EmbeddingError> {
        if dim < MIN_EMBEDDING_DIM {
            return Err(EmbeddingError::InvalidConfig {
                reason: format!("embedding_dim must be at least {MIN_EMBEDDING_DIM}, got {dim}"),
            });
        }
        Ok(Self { dim })
    }

    fn features(text: &str) -> Vec<String> {
        let words: Vec<String> = text
            .split_whitespace()
            .map(|word| {
                word.chars()
                    .filter(|c| c.is_alphanumeric())
                    .flat_map(char::to_lowercase)
                    .collect::<String>()
            })
            .filter(|word| !word.is_empty())
            .collect();

        let mut features = Vec::with_capacity(words.len() * 2);
        for (i, word) in words.iter().enumerate() {
            features.push(format!("w:{word}"));
            if let Some(next) = words.get(i + 1) {
                features.push(format!("b:{word}_{next}"));
            }
        }
        features
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self {
            dim: DEFAULT_EMBEDDING_DIM,
        }
    }
}

impl Embedder for HashEmbedder {
    fn embedding_dim(&self) -> usize {
        self.dim
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let features = Self::features(text);
        if features.is_empty() {
            return Err(EmbeddingError::EmptyInput);
        }

        let mut vector = vec![0.0f32; self.dim];
        for feature in &features {
            let hash = blake3::hash(feature.as_bytes());
            let bytes = hash.as_bytes();
            let bucket = u64::from_le_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
            ]);
            let index = (bucket % self.dim as u64) as usize;
            let sign = if bytes[8] & 1 == 0 { 1.0 } else { -1.0 };
            let weight = 1.0 + f32::from(bytes[9]) / 255.0;
            vector[index] += sign * weight;
        }

        // Opposing signs can cancel every bucket out.
        if !normalize_l2(&mut vector) {
            return Err(EmbeddingError::InferenceFailed {
                reason: "feature hashing produced a zero vector".to_string(),
            });
        }

        debug!(
            text_len = text.len(),
            features = features.len(),
            "Generated hash embedding"
        );

        Ok(vector)
    }
}
