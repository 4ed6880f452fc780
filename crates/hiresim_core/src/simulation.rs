//! Bias sweep engine, aggregation, and multi-scenario runs
//!
//! A sweep holds subgroup A at the fair threshold, lowers subgroup B's cutoff
//! by each bias coefficient in turn, and aggregates the two selection outcomes
//! into one organization-level record per bias value. Every record is computed
//! independently; output order always matches input order.

use crate::error::ConfigError;
use crate::model::{ScenarioConfig, ScenarioResult, SelectionOutcome, SimulationRecord};
use crate::selector::select;

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

/// Run the bias sweep for one scenario.
///
/// Validates the configuration once up front, then evaluates both subgroups at
/// every bias value. An empty `bias_values` sequence yields an empty result.
pub fn sweep(
    config: &ScenarioConfig,
    bias_values: &[f64],
    label: &str,
) -> Result<ScenarioResult, ConfigError> {
    config.validate()?;

    let mut records = Vec::with_capacity(bias_values.len());
    for &bias in bias_values {
        if !bias.is_finite() {
            return Err(ConfigError::InvalidBiasValue(bias));
        }

        let outcome_a = select(
            config.subgroup_a.mean,
            config.subgroup_a.spread,
            config.fair_threshold,
        )?;
        let outcome_b = select(
            config.subgroup_b.mean,
            config.subgroup_b.spread,
            config.fair_threshold - bias,
        )?;

        records.push(aggregate(config, bias, label, outcome_a, outcome_b));
    }

    Ok(ScenarioResult {
        label: label.to_string(),
        records,
    })
}

/// Combine the two subgroup outcomes into one organization-level record.
///
/// Hire counts are the population shares weighted by acceptance rates; the
/// organization average is the hire-weighted convex combination of the two
/// conditional competences. When both rates are degenerate the share and the
/// average are exactly zero.
#[must_use]
pub fn aggregate(
    config: &ScenarioConfig,
    bias: f64,
    label: &str,
    outcome_a: SelectionOutcome,
    outcome_b: SelectionOutcome,
) -> SimulationRecord {
    let hires_a = config.population_share_a * outcome_a.acceptance_rate;
    let hires_b = config.population_share_b() * outcome_b.acceptance_rate;
    let total = hires_a + hires_b;

    let (subgroup_b_share, org_avg_competence) = if total > 0.0 {
        let share = hires_b / total;
        let avg = (outcome_a.expected_competence * hires_a
            + outcome_b.expected_competence * hires_b)
            / total;
        (share, avg)
    } else {
        (0.0, 0.0)
    };

    SimulationRecord {
        scenario: label.to_string(),
        bias,
        org_avg_competence,
        subgroup_b_share,
        subgroup_a: outcome_a,
        subgroup_b: outcome_b,
        subgroup_b_threshold: config.fair_threshold - bias,
    }
}

/// Run every scenario over the same bias sequence and concatenate the records
/// in scenario order.
///
/// Scenarios are independent; with the `parallel` feature they are distributed
/// across worker threads and the order is restored before returning, so serial
/// and parallel runs produce identical output.
pub fn run_scenarios(
    scenarios: &[(String, ScenarioConfig)],
    bias_values: &[f64],
) -> Result<Vec<SimulationRecord>, ConfigError> {
    let results = sweep_all(scenarios, bias_values)?;
    Ok(results
        .into_iter()
        .flat_map(ScenarioResult::into_records)
        .collect())
}

#[cfg(feature = "parallel")]
fn sweep_all(
    scenarios: &[(String, ScenarioConfig)],
    bias_values: &[f64],
) -> Result<Vec<ScenarioResult>, ConfigError> {
    scenarios
        .par_iter()
        .map(|(label, config)| sweep(config, bias_values, label))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn sweep_all(
    scenarios: &[(String, ScenarioConfig)],
    bias_values: &[f64],
) -> Result<Vec<ScenarioResult>, ConfigError> {
    scenarios
        .iter()
        .map(|(label, config)| sweep(config, bias_values, label))
        .collect()
}

/// Uniform inclusive grid of bias coefficients from zero to `max_bias`.
///
/// `steps` is the total number of grid points and must be at least two;
/// `max_bias` must be non-negative and finite.
pub fn bias_grid(max_bias: f64, steps: usize) -> Result<Vec<f64>, ConfigError> {
    if !max_bias.is_finite() || max_bias < 0.0 {
        return Err(ConfigError::InvalidBiasGrid {
            max_bias,
            steps,
            reason: "maximum bias must be non-negative and finite",
        });
    }
    if steps < 2 {
        return Err(ConfigError::InvalidBiasGrid {
            max_bias,
            steps,
            reason: "grid needs at least two points",
        });
    }

    let step = max_bias / (steps - 1) as f64;
    Ok((0..steps).map(|i| i as f64 * step).collect())
}
