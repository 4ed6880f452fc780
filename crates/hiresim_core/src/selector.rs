//! Truncated-normal selection moments
//!
//! Given a subgroup's Gaussian competence distribution and an acceptance
//! cutoff, computes the share of the subgroup that clears the cutoff and the
//! conditional expected competence of those who do (the mean of the upper
//! tail, via the inverse Mills ratio).

use statrs::distribution::{Continuous, ContinuousCDF, Normal};

use crate::error::ConfigError;
use crate::model::{SelectionOutcome, SubgroupParams};

/// Acceptance rates at or below this are treated as the defined
/// "no one clears the bar" outcome rather than divided through.
pub const RATE_EPSILON: f64 = 1e-9;

/// Acceptance rate and conditional expected competence for one subgroup.
///
/// `acceptance_rate = 1 - Φ((cutoff - mean) / spread)` and, when that rate is
/// above [`RATE_EPSILON`],
/// `expected_competence = mean + spread * φ(alpha) / acceptance_rate`.
/// Below the epsilon the outcome is exactly zero in both fields.
///
/// Rejects `spread <= 0` and non-finite inputs; for valid inputs the result is
/// always finite with `acceptance_rate` in `[0, 1]`.
pub fn select(mean: f64, spread: f64, cutoff: f64) -> Result<SelectionOutcome, ConfigError> {
    SubgroupParams::new(mean, spread).validate()?;
    if !cutoff.is_finite() {
        return Err(ConfigError::InvalidThreshold(cutoff));
    }

    let standard = Normal::standard();
    let alpha = (cutoff - mean) / spread;
    let acceptance_rate = 1.0 - standard.cdf(alpha);

    if acceptance_rate <= RATE_EPSILON {
        return Ok(SelectionOutcome {
            acceptance_rate: 0.0,
            expected_competence: 0.0,
        });
    }

    let inverse_mills = standard.pdf(alpha) / acceptance_rate;
    Ok(SelectionOutcome {
        acceptance_rate,
        expected_competence: mean + spread * inverse_mills,
    })
}
