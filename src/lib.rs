//! Clause risk library crate (used by the CLI binary and integration tests).
//!
//! Scores a document against a set of reference clauses by embedding similarity and
//! rolls the best matches up into a single weighted document risk level.
//!
//! # Public API Surface
//!
//! ## Pipeline
//! - [`RiskPipeline`], [`PipelineError`] - End-to-end run over chunks and clauses
//! - [`RiskConfig`], [`ConfigError`] - Thresholds, weights and matcher settings
//!
//! ## Stages
//! - [`VectorIndex`], [`SearchHit`] - Exact inner-product search over unit vectors
//! - [`Matcher`], [`MatchConfig`], [`dedupe`] - Clause matching and per-chunk winners
//! - [`RiskClassifier`], [`Aggregator`] - Tiering and weighted aggregation
//! - [`DocumentRiskSummary`], [`RiskVerdict`] - Aggregation output
//!
//! ## Inputs & Outputs
//! - [`Embedder`], [`HashEmbedder`] - Text to unit vector
//! - [`ingest`] - Record loading, document chunking and embedding
//! - [`RiskReport`] - JSON/CSV reports and console summary
//!
//! ## Constants
//! Default thresholds and weights live in [`constants`]; [`RiskConfig::default`] uses them.

pub mod config;
pub mod constants;
pub mod document;
pub mod embedding;
pub mod index;
pub mod ingest;
pub mod matching;
pub mod pipeline;
pub mod report;
pub mod risk;

pub use config::{ConfigError, RiskConfig};
pub use document::{Chunk, Clause};
pub use embedding::{Embedder, EmbeddingError, HashEmbedder};
pub use index::{IndexError, SearchHit, VectorIndex};
pub use ingest::{IngestError, TextRecord};
pub use matching::{BestMatch, CandidateMatch, MatchConfig, MatchError, Matcher, dedupe};
pub use pipeline::{PipelineError, RiskPipeline};
pub use report::{ReportError, RiskReport};
pub use risk::{
    Aggregator, DocumentRiskSummary, RiskBreakpoints, RiskClassifier, RiskError, RiskTier,
    RiskVerdict, TierCounts, TierWeights,
};
