//! Exact, in-memory cosine-similarity index over chunk embeddings.
//!
//! Vectors are stored row-major in one contiguous buffer. Every stored vector and every
//! query must already be unit length, so cosine similarity reduces to an inner product.
//! The index checks this at the boundary and never renormalizes: a silently unnormalized
//! vector would skew every similarity and every tier computed from it.

mod error;


pub use error::{IndexError, IndexResult};

use std::cmp::Ordering;

use tracing::{debug, info};

use crate::constants::NORM_TOLERANCE;
use crate::document::Chunk;
use crate::embedding::l2_norm;

/// One search result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    pub chunk_id: usize,
    pub similarity: f32,
}

#[derive(Debug, Clone)]
pub struct VectorIndex {
    dim: usize,
    ids: Vec<usize>,
    vectors: Vec<f32>,
}

impl VectorIndex {
    /// Builds an index from document chunks, copying their embeddings.
    pub fn build(chunks: &[Chunk]) -> IndexResult<Self> {
        Self::from_vectors(
            chunks
                .iter()
                .map(|chunk| (chunk.id, chunk.embedding.as_slice())),
        )
    }

    /// Builds an index from `(chunk_id, embedding)` pairs.
    ///
    /// The first vector fixes the dimension. An empty input yields an empty index, which
    /// can be built but not searched.
    pub fn from_vectors<'a, I>(entries: I) -> IndexResult<Self>
    where
        I: IntoIterator<Item = (usize, &'a [f32])>,
    {
        let mut dim = 0usize;
        let mut ids = Vec::new();
        let mut vectors = Vec::new();

        for (id, embedding) in entries {
            if embedding.is_empty() {
                return Err(IndexError::ZeroDimension {
                    context: format!("chunk {id}"),
                });
            }

            if ids.is_empty() {
                dim = embedding.len();
            } else if embedding.len() != dim {
                return Err(IndexError::DimensionMismatch {
                    context: format!("chunk {id}"),
                    expected: dim,
                    actual: embedding.len(),
                });
            }

            check_unit_norm(embedding, || format!("chunk {id}"))?;

            ids.push(id);
            vectors.extend_from_slice(embedding);
        }

        info!(chunks = ids.len(), dim, "Vector index built");

        Ok(Self { dim, ids, vectors })
    }

    /// Returns the `k` most similar chunks, by descending similarity then ascending id.
    pub fn search(&self, query: &[f32], k: usize) -> IndexResult<Vec<SearchHit>> {
        if self.ids.is_empty() {
            return Err(IndexError::EmptyIndex);
        }

        if query.len() != self.dim {
            return Err(IndexError::DimensionMismatch {
                context: "query".to_string(),
                expected: self.dim,
                actual: query.len(),
            });
        }

        check_unit_norm(query, || "query".to_string())?;

        if k == 0 {
            return Ok(Vec::new());
        }

        let mut hits: Vec<SearchHit> = self
            .ids
            .iter()
            .zip(self.vectors.chunks_exact(self.dim))
            .map(|(&chunk_id, vector)| SearchHit {
                chunk_id,
                similarity: inner_product(query, vector),
            })
            .collect();

        hits.sort_by(compare_hits);
        hits.truncate(k);

        debug!(
            k,
            returned = hits.len(),
            top = hits.first().map(|h| h.similarity),
            "Index search complete"
        );

        Ok(hits)
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Descending similarity, ascending chunk id.
#[inline]
fn compare_hits(a: &SearchHit, b: &SearchHit) -> Ordering {
    b.similarity
        .total_cmp(&a.similarity)
        .then_with(|| a.chunk_id.cmp(&b.chunk_id))
}

/// Inner product with `f32` accumulation in dimension order.
///
/// For unit vectors this is the cosine similarity.
#[inline]
pub fn inner_product(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).fold(0.0f32, |acc, (x, y)| acc + x * y)
}

fn check_unit_norm<F>(embedding: &[f32], context: F) -> IndexResult<()>
where
    F: FnOnce() -> String,
{
    let norm = l2_norm(embedding);
    if !norm.is_finite() || (norm - 1.0).abs() > NORM_TOLERANCE {
        return Err(IndexError::NotNormalized {
            context: context(),
            norm,
        });
    }
    Ok(())
}
