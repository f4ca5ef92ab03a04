use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RiskError {
    #[error("invalid risk breakpoints: medium_above {medium_above} must be finite and below high_above {high_above}")]
    InvalidBreakpoints { medium_above: f32, high_above: f32 },

    #[error("invalid weight for {tier} tier: {value} (must be finite and > 0)")]
    InvalidWeight { tier: &'static str, value: f32 },
}
