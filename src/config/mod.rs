//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `CLAUSE_RISK_*` environment variables;
//! the CLI applies its own flags on top.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_EMBEDDING_DIM, DEFAULT_MATCH_THRESHOLD, DEFAULT_MIN_CHUNK_CHARS, DEFAULT_TOP_K,
    MIN_EMBEDDING_DIM,
};
use crate::matching::MatchConfig;
use crate::risk::{RiskBreakpoints, TierWeights};

/// Settings for one analysis run.
///
/// Use [`RiskConfig::from_env`] to read `CLAUSE_RISK_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Candidates considered per clause. Default: `3`.
    pub top_k: usize,

    /// Minimum similarity (exclusive) to keep a candidate. Default: `0.75`.
    pub match_threshold: f32,

    /// Tier breakpoints. Default: `0.85` / `0.91`.
    pub breakpoints: RiskBreakpoints,

    /// Tier weights for the document score. Default: `0.5` / `1.0` / `1.0`.
    pub weights: TierWeights,

    /// Search clauses in parallel. Default: `false`.
    pub parallel: bool,

    /// Sentence chunks must be longer than this. Default: `20`.
    pub min_chunk_chars: usize,

    /// Dimension of the built-in hash embedder. Default: `384`.
    pub embedding_dim: usize,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            breakpoints: RiskBreakpoints::default(),
            weights: TierWeights::default(),
            parallel: false,
            min_chunk_chars: DEFAULT_MIN_CHUNK_CHARS,
            embedding_dim: DEFAULT_EMBEDDING_DIM,
        }
    }
}

impl RiskConfig {
    const ENV_TOP_K: &'static str = "CLAUSE_RISK_TOP_K";
    const ENV_MATCH_THRESHOLD: &'static str = "CLAUSE_RISK_MATCH_THRESHOLD";
    const ENV_MEDIUM_ABOVE: &'static str = "CLAUSE_RISK_MEDIUM_ABOVE";
    const ENV_HIGH_ABOVE: &'static str = "CLAUSE_RISK_HIGH_ABOVE";
    const ENV_WEIGHT_LOW: &'static str = "CLAUSE_RISK_WEIGHT_LOW";
    const ENV_WEIGHT_MEDIUM: &'static str = "CLAUSE_RISK_WEIGHT_MEDIUM";
    const ENV_WEIGHT_HIGH: &'static str = "CLAUSE_RISK_WEIGHT_HIGH";
    const ENV_PARALLEL: &'static str = "CLAUSE_RISK_PARALLEL";
    const ENV_MIN_CHUNK_CHARS: &'static str = "CLAUSE_RISK_MIN_CHUNK_CHARS";
    const ENV_EMBEDDING_DIM: &'static str = "CLAUSE_RISK_EMBEDDING_DIM";

    /// Loads configuration from environment variables (falling back to defaults).
    ///
    /// Parses only; call [`validate`](Self::validate) before use.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            top_k: Self::parse_from_env(Self::ENV_TOP_K, defaults.top_k)?,
            match_threshold: Self::parse_from_env(
                Self::ENV_MATCH_THRESHOLD,
                defaults.match_threshold,
            )?,
            breakpoints: RiskBreakpoints {
                medium_above: Self::parse_from_env(
                    Self::ENV_MEDIUM_ABOVE,
                    defaults.breakpoints.medium_above,
                )?,
                high_above: Self::parse_from_env(
                    Self::ENV_HIGH_ABOVE,
                    defaults.breakpoints.high_above,
                )?,
            },
            weights: TierWeights {
                low: Self::parse_from_env(Self::ENV_WEIGHT_LOW, defaults.weights.low)?,
                medium: Self::parse_from_env(Self::ENV_WEIGHT_MEDIUM, defaults.weights.medium)?,
                high: Self::parse_from_env(Self::ENV_WEIGHT_HIGH, defaults.weights.high)?,
            },
            parallel: Self::parse_bool_from_env(Self::ENV_PARALLEL, defaults.parallel)?,
            min_chunk_chars: Self::parse_from_env(
                Self::ENV_MIN_CHUNK_CHARS,
                defaults.min_chunk_chars,
            )?,
            embedding_dim: Self::parse_from_env(Self::ENV_EMBEDDING_DIM, defaults.embedding_dim)?,
        })
    }

    /// Checks ranges and ordering of every setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_k == 0 {
            return Err(ConfigError::InvalidTopK { value: self.top_k });
        }

        if !self.match_threshold.is_finite() || !(-1.0..=1.0).contains(&self.match_threshold) {
            return Err(ConfigError::InvalidThreshold {
                value: self.match_threshold,
            });
        }

        self.breakpoints.validate()?;
        self.weights.validate()?;

        if self.embedding_dim < MIN_EMBEDDING_DIM {
            return Err(ConfigError::InvalidEmbeddingDim {
                value: self.embedding_dim,
                min: MIN_EMBEDDING_DIM,
            });
        }

        Ok(())
    }

    /// The matcher's slice of this config.
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            top_k: self.top_k,
            threshold: self.match_threshold,
            parallel: self.parallel,
        }
    }

    fn parse_from_env<T>(var_name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match env::var(var_name) {
            Ok(value) => value.trim().parse::<T>().map_err(|e| ConfigError::ParseError {
                name: var_name,
                value: value.clone(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(var_name) {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::ParseError {
                    name: var_name,
                    value,
                    reason: "expected a boolean".to_string(),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}
