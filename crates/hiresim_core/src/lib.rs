//! Hiring-bias selection simulation library
//!
//! This crate models how an asymmetric selection standard ("bias") applied to
//! one subgroup of a candidate pool distorts both the subgroup composition and
//! the average competence of those selected, assuming Gaussian competence
//! distributions. It supports:
//! - Truncated-normal selection moments (acceptance rate and conditional
//!   expected competence above a cutoff)
//! - Bias sweeps that lower one subgroup's cutoff while the other stays fixed
//! - Organization-level aggregation weighted by the population mix
//! - Multi-scenario runs producing flat, serializable result records
//!
//! # Builder DSL
//!
//! Use the fluent builder API for ergonomic scenario setup:
//!
//! ```ignore
//! use hiresim_core::config::ScenarioBuilder;
//! use hiresim_core::simulation::{bias_grid, sweep};
//!
//! let config = ScenarioBuilder::new()
//!     .subgroup_a(0.65, 0.15)
//!     .subgroup_b(0.55, 0.15)
//!     .fair_threshold(0.75)
//!     .population_share_a(0.5)
//!     .build()?;
//!
//! let result = sweep(&config, &bias_grid(0.2, 21)?, "survey-calibrated")?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod selector;
pub mod simulation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::ScenarioBuilder;
pub use error::ConfigError;
pub use model::{
    ScenarioConfig, ScenarioResult, SelectionOutcome, SimulationRecord, SubgroupParams,
};
pub use selector::{RATE_EPSILON, select};
pub use simulation::{aggregate, bias_grid, run_scenarios, sweep};
