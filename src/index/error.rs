use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
/// Errors returned by vector index construction and search.
pub enum IndexError {
    /// A vector's length disagrees with the index dimension.
    #[error("embedding dimension mismatch for {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// What carried the bad vector (`chunk 4`, `query`).
        context: String,
        /// Established index dimension.
        expected: usize,
        /// Offending length.
        actual: usize,
    },

    /// A vector is not unit length.
    #[error("embedding for {context} is not L2-normalized (norm {norm:.6})")]
    NotNormalized {
        /// What carried the bad vector.
        context: String,
        /// Measured norm.
        norm: f32,
    },

    /// An embedding has no components.
    #[error("embedding for {context} is empty")]
    ZeroDimension {
        /// What carried the empty vector.
        context: String,
    },

    /// Search attempted against an index with no vectors.
    #[error("search attempted against an empty index")]
    EmptyIndex,
}

pub type IndexResult<T> = Result<T, IndexError>;
