//! Embedding boundary.
//!
//! The matching core never calls a model. It receives unit-norm vectors, either
//! supplied by the caller or produced through an [`Embedder`]. [`HashEmbedder`] is a
//! deterministic, model-free implementation used by the CLI when records carry
//! only text, and by tests.

mod error;
/// Feature-hashing embedder.
pub mod hash;


pub use error::EmbeddingError;
pub use hash::HashEmbedder;

/// Produces embeddings for text.
///
/// Implementations must return vectors of length [`embedding_dim`](Embedder::embedding_dim)
/// and should L2-normalize them; the vector index rejects anything that is not unit norm.
pub trait Embedder: Send + Sync {
    fn embedding_dim(&self) -> usize;

    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        texts.iter().map(|text| self.embed(text)).collect()
    }
}

/// Euclidean norm, accumulated in `f64`.
#[inline]
pub fn l2_norm(values: &[f32]) -> f32 {
    values
        .iter()
        .map(|v| f64::from(*v) * f64::from(*v))
        .sum::<f64>()
        .sqrt() as f32
}

/// Scales `values` to unit length in place.
///
/// Returns `false` (and leaves the slice untouched) for an all-zero vector.
pub fn normalize_l2(values: &mut [f32]) -> bool {
    let norm = l2_norm(values);
    if norm == 0.0 || !norm.is_finite() {
        return false;
    }

    for v in values.iter_mut() {
        *v /= norm;
    }
    true
}

/// Returns `true` if the L2 norm is within `tolerance` of `1.0`.
#[inline]
pub fn is_unit_norm(values: &[f32], tolerance: f32) -> bool {
    (l2_norm(values) - 1.0).abs() <= tolerance
}
