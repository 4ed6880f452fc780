//! Scenario configuration types
//!
//! A scenario fixes the competence distributions of the two applicant
//! subgroups, the shared "fair" acceptance threshold, and the population mix.
//! All fields are plain values; nothing here is mutated after construction.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Gaussian competence distribution of one applicant subgroup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubgroupParams {
    /// Mean competence of the subgroup
    pub mean: f64,
    /// Standard deviation of competence, must be positive
    pub spread: f64,
}

impl SubgroupParams {
    #[must_use]
    pub fn new(mean: f64, spread: f64) -> Self {
        Self { mean, spread }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.spread.is_finite() || self.spread <= 0.0 {
            return Err(ConfigError::InvalidSubgroupParams {
                mean: self.mean,
                spread: self.spread,
                reason: "spread must be positive and finite",
            });
        }
        if !self.mean.is_finite() {
            return Err(ConfigError::InvalidSubgroupParams {
                mean: self.mean,
                spread: self.spread,
                reason: "mean must be finite",
            });
        }
        Ok(())
    }
}

/// Full configuration for one named sweep scenario.
///
/// Subgroup A is always held at `fair_threshold`; subgroup B's cutoff is
/// lowered by the bias coefficient during a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub subgroup_a: SubgroupParams,
    pub subgroup_b: SubgroupParams,
    /// The shared acceptance cutoff before any bias is applied
    pub fair_threshold: f64,
    /// Fraction of the applicant pool belonging to subgroup A, in [0, 1]
    pub population_share_a: f64,
}

impl ScenarioConfig {
    /// Fraction of the applicant pool belonging to subgroup B
    #[must_use]
    pub fn population_share_b(&self) -> f64 {
        1.0 - self.population_share_a
    }

    /// Check every invariant, failing fast before any sweep point is computed
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.subgroup_a.validate()?;
        self.subgroup_b.validate()?;
        if !self.fair_threshold.is_finite() {
            return Err(ConfigError::InvalidThreshold(self.fair_threshold));
        }
        if !self.population_share_a.is_finite()
            || !(0.0..=1.0).contains(&self.population_share_a)
        {
            return Err(ConfigError::InvalidPopulationShare(self.population_share_a));
        }
        Ok(())
    }
}
