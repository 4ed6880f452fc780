//! Scenario Builder
//!
//! Fluent API for constructing validated scenario configurations. The builder
//! starts from the equal-ability baseline of the reference study (both
//! subgroups at mean 0.60 with spread 0.15, fair threshold 0.75, even
//! population split) so tests and callers only override what they care about.
//!
//! # Example
//!
//! ```ignore
//! use hiresim_core::config::ScenarioBuilder;
//!
//! let config = ScenarioBuilder::new()
//!     .subgroup_a(0.65, 0.15)
//!     .subgroup_b(0.55, 0.15)
//!     .fair_threshold(0.75)
//!     .population_share_a(0.5)
//!     .build()?;
//! ```

use crate::error::ConfigError;
use crate::model::{ScenarioConfig, SubgroupParams};

/// Builder for [`ScenarioConfig`] with validation at build time
#[derive(Debug, Clone)]
pub struct ScenarioBuilder {
    subgroup_a: SubgroupParams,
    subgroup_b: SubgroupParams,
    fair_threshold: f64,
    population_share_a: f64,
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioBuilder {
    /// Create a builder seeded with the equal-ability baseline
    #[must_use]
    pub fn new() -> Self {
        Self {
            subgroup_a: SubgroupParams::new(0.60, 0.15),
            subgroup_b: SubgroupParams::new(0.60, 0.15),
            fair_threshold: 0.75,
            population_share_a: 0.5,
        }
    }

    /// Set subgroup A's competence distribution
    #[must_use]
    pub fn subgroup_a(mut self, mean: f64, spread: f64) -> Self {
        self.subgroup_a = SubgroupParams::new(mean, spread);
        self
    }

    /// Set subgroup B's competence distribution
    #[must_use]
    pub fn subgroup_b(mut self, mean: f64, spread: f64) -> Self {
        self.subgroup_b = SubgroupParams::new(mean, spread);
        self
    }

    /// Set the same spread on both subgroups, keeping their means
    #[must_use]
    pub fn shared_spread(mut self, spread: f64) -> Self {
        self.subgroup_a.spread = spread;
        self.subgroup_b.spread = spread;
        self
    }

    /// Set the fair acceptance threshold both subgroups start from
    #[must_use]
    pub fn fair_threshold(mut self, threshold: f64) -> Self {
        self.fair_threshold = threshold;
        self
    }

    /// Set subgroup A's fraction of the applicant pool
    #[must_use]
    pub fn population_share_a(mut self, share: f64) -> Self {
        self.population_share_a = share;
        self
    }

    /// Validate and produce the configuration
    pub fn build(self) -> Result<ScenarioConfig, ConfigError> {
        let config = ScenarioConfig {
            subgroup_a: self.subgroup_a,
            subgroup_b: self.subgroup_b,
            fair_threshold: self.fair_threshold,
            population_share_a: self.population_share_a,
        };
        config.validate()?;
        Ok(config)
    }
}
