//! Tests for organization-level aggregation
//!
//! These tests verify:
//! - Zero-bias symmetry: equal subgroups hire in proportion to the pool mix
//! - The biased reference scenario against hand-computed values
//! - Convexity of the organization average in the subgroup competences
//! - The defined zero fallback when no one is hired at all

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::model::{ScenarioConfig, SubgroupParams};
use crate::simulation::sweep;

fn symmetric_config(population_share_a: f64) -> ScenarioConfig {
    ScenarioConfig {
        subgroup_a: SubgroupParams::new(0.60, 0.15),
        subgroup_b: SubgroupParams::new(0.60, 0.15),
        fair_threshold: 0.75,
        population_share_a,
    }
}

/// With identical subgroups and no bias, hires mirror the population mix.
/// The even split cancels exactly in floating point.
#[test]
fn zero_bias_symmetry_even_split() {
    let result = sweep(&symmetric_config(0.5), &[0.0], "parity").unwrap();
    let record = result.first().unwrap();

    assert_eq!(record.subgroup_b_share, 0.5);
    assert!(
        (record.org_avg_competence - record.subgroup_a.expected_competence).abs() < 1e-14
    );
}

#[test]
fn zero_bias_symmetry_uneven_split() {
    let result = sweep(&symmetric_config(0.3), &[0.0], "uneven").unwrap();
    let record = result.first().unwrap();

    assert!((record.subgroup_b_share - 0.7).abs() < 1e-12);
}

/// Reference scenario: bias equal to the spread drops subgroup B's cutoff to
/// its mean, so exactly half of B clears the bar against A's 15.9%, and B's
/// share of hires rises well above parity.
#[test]
fn bias_equal_to_spread_reference_values() {
    let result = sweep(&symmetric_config(0.5), &[0.15], "biased").unwrap();
    let record = result.first().unwrap();

    assert!((record.subgroup_b.acceptance_rate - 0.5).abs() < 1e-12);
    assert!((record.subgroup_a.acceptance_rate - 0.158655).abs() < 1e-5);
    assert!(record.subgroup_b_share > 0.5);
    assert!((record.subgroup_b_share - 0.759117).abs() < 1e-5);
    assert!((record.org_avg_competence - 0.745958).abs() < 1e-5);
}

/// The organization average is a convex combination of the two subgroup
/// competences whenever anyone is hired.
#[test]
fn org_average_is_convex_combination() {
    let mut rng = SmallRng::seed_from_u64(11);

    for _ in 0..500 {
        let config = ScenarioConfig {
            subgroup_a: SubgroupParams::new(rng.random_range(0.3..0.9), rng.random_range(0.05..0.4)),
            subgroup_b: SubgroupParams::new(rng.random_range(0.3..0.9), rng.random_range(0.05..0.4)),
            fair_threshold: rng.random_range(0.5..1.0),
            population_share_a: rng.random_range(0.0..1.0),
        };
        let bias = rng.random_range(0.0..0.3);
        let result = sweep(&config, &[bias], "convexity").unwrap();
        let record = result.first().unwrap();

        let hires_a = config.population_share_a * record.subgroup_a.acceptance_rate;
        let hires_b = config.population_share_b() * record.subgroup_b.acceptance_rate;
        if hires_a + hires_b == 0.0 {
            continue;
        }

        let lo = record
            .subgroup_a
            .expected_competence
            .min(record.subgroup_b.expected_competence);
        let hi = record
            .subgroup_a
            .expected_competence
            .max(record.subgroup_b.expected_competence);
        assert!(record.org_avg_competence >= lo - 1e-12);
        assert!(record.org_avg_competence <= hi + 1e-12);
    }
}

/// A threshold far above both distributions hires no one; the record carries
/// the defined zeros instead of NaN.
#[test]
fn nobody_hired_falls_back_to_zero() {
    let config = ScenarioConfig {
        fair_threshold: 100.0,
        ..symmetric_config(0.5)
    };
    let result = sweep(&config, &[0.0], "deserted").unwrap();
    let record = result.first().unwrap();

    assert_eq!(record.subgroup_b_share, 0.0);
    assert_eq!(record.org_avg_competence, 0.0);
}

/// When only subgroup B clears its (lowered) bar, the organization is all B.
#[test]
fn single_sided_hiring() {
    let config = ScenarioConfig {
        subgroup_a: SubgroupParams::new(-10.0, 0.15),
        subgroup_b: SubgroupParams::new(0.60, 0.15),
        fair_threshold: 0.75,
        population_share_a: 0.5,
    };
    let result = sweep(&config, &[0.15], "one-sided").unwrap();
    let record = result.first().unwrap();

    assert_eq!(record.subgroup_a.acceptance_rate, 0.0);
    assert_eq!(record.subgroup_b_share, 1.0);
    assert!(
        (record.org_avg_competence - record.subgroup_b.expected_competence).abs() < 1e-14
    );
}

/// A population made entirely of one subgroup hires only from it.
#[test]
fn degenerate_population_mix() {
    let result = sweep(&symmetric_config(1.0), &[0.15], "all-a").unwrap();
    let record = result.first().unwrap();

    assert_eq!(record.subgroup_b_share, 0.0);
    assert!(
        (record.org_avg_competence - record.subgroup_a.expected_competence).abs() < 1e-14
    );
}

#[test]
fn productivity_gap_is_a_minus_b() {
    let config = ScenarioConfig {
        subgroup_a: SubgroupParams::new(0.65, 0.15),
        subgroup_b: SubgroupParams::new(0.55, 0.15),
        fair_threshold: 0.75,
        population_share_a: 0.5,
    };
    let result = sweep(&config, &[0.1], "gap").unwrap();
    let record = result.first().unwrap();

    assert_eq!(
        record.productivity_gap(),
        record.subgroup_a.expected_competence - record.subgroup_b.expected_competence
    );
    assert!(record.productivity_gap() > 0.0);
}
