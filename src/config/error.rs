//! Configuration error types.

use thiserror::Error;

use crate::risk::RiskError;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("failed to parse {name}='{value}': {reason}")]
    ParseError {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// `top_k` must be at least one.
    #[error("invalid top_k {value}: must be at least 1")]
    InvalidTopK { value: usize },

    /// Match threshold outside the cosine range.
    #[error("invalid match threshold {value}: must lie in [-1, 1]")]
    InvalidThreshold { value: f32 },

    /// Embedding dimension too small for the hash embedder.
    #[error("invalid embedding dimension {value}: must be at least {min}")]
    InvalidEmbeddingDim { value: usize, min: usize },

    /// Breakpoints or weights rejected.
    #[error(transparent)]
    Risk(#[from] RiskError),
}
