//! Cross-cutting, shared constants.
//!
//! The matcher, classifier and aggregator all read their defaults from here so the
//! numbers cannot drift between call sites.
//!
//! # Breakpoint Invariants
//!
//! [`DEFAULT_MEDIUM_ABOVE`] and [`DEFAULT_HIGH_ABOVE`] are exclusive lower bounds: a
//! similarity of exactly `0.85` is Low and exactly `0.91` is Medium. Both the per-match
//! and the document-level tier go through the same [`RiskClassifier`](crate::risk::RiskClassifier),
//! so there is exactly one place these comparisons happen.

/// Candidates considered per clause.
pub const DEFAULT_TOP_K: usize = 3;

/// Minimum similarity (exclusive) for a candidate to survive matching.
pub const DEFAULT_MATCH_THRESHOLD: f32 = 0.75;

/// Similarities strictly above this are at least Medium.
pub const DEFAULT_MEDIUM_ABOVE: f32 = 0.85;

/// Similarities strictly above this are High.
pub const DEFAULT_HIGH_ABOVE: f32 = 0.91;

pub const DEFAULT_WEIGHT_LOW: f32 = 0.5;
pub const DEFAULT_WEIGHT_MEDIUM: f32 = 1.0;
pub const DEFAULT_WEIGHT_HIGH: f32 = 1.0;

/// Chunks must be longer than this many characters to be kept by the sentence splitter.
pub const DEFAULT_MIN_CHUNK_CHARS: usize = 20;

/// Output dimension of the built-in [`HashEmbedder`](crate::embedding::HashEmbedder).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Smallest dimension the hash embedder accepts.
pub const MIN_EMBEDDING_DIM: usize = 8;

/// Allowed deviation of an L2 norm from `1.0` at the index boundary.
pub const NORM_TOLERANCE: f32 = 1e-3;
