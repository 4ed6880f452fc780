use std::fmt;

/// Errors raised while validating scenario configuration.
///
/// Every variant is detected before the first sweep point is computed;
/// malformed parameters are never clamped into range.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidSubgroupParams {
        mean: f64,
        spread: f64,
        reason: &'static str,
    },
    InvalidPopulationShare(f64),
    InvalidThreshold(f64),
    /// A bias value in the sweep sequence was NaN or infinite
    InvalidBiasValue(f64),
    InvalidBiasGrid {
        max_bias: f64,
        steps: usize,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSubgroupParams {
                mean,
                spread,
                reason,
            } => {
                write!(
                    f,
                    "invalid subgroup parameters (mean={mean}, spread={spread}): {reason}"
                )
            }
            ConfigError::InvalidPopulationShare(share) => {
                write!(
                    f,
                    "population share {share} is outside the closed unit interval"
                )
            }
            ConfigError::InvalidThreshold(threshold) => {
                write!(f, "acceptance threshold {threshold} is not finite")
            }
            ConfigError::InvalidBiasValue(bias) => {
                write!(f, "bias coefficient {bias} is not finite")
            }
            ConfigError::InvalidBiasGrid {
                max_bias,
                steps,
                reason,
            } => {
                write!(
                    f,
                    "invalid bias grid (max_bias={max_bias}, steps={steps}): {reason}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub type Result<T> = std::result::Result<T, ConfigError>;
