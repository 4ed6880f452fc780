//! Criterion benchmarks for hiresim_core sweeps
//!
//! Run with: cargo bench -p hiresim_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hiresim_core::model::{ScenarioConfig, SubgroupParams};
use hiresim_core::simulation::{bias_grid, run_scenarios, sweep};

fn reference_config() -> ScenarioConfig {
    ScenarioConfig {
        subgroup_a: SubgroupParams::new(0.65, 0.15),
        subgroup_b: SubgroupParams::new(0.55, 0.15),
        fair_threshold: 0.75,
        population_share_a: 0.5,
    }
}

fn bench_single_sweep(c: &mut Criterion) {
    let config = reference_config();
    let mut group = c.benchmark_group("sweep");

    for steps in [21, 201, 2001] {
        let grid = bias_grid(0.2, steps).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(steps), &grid, |b, grid| {
            b.iter(|| sweep(black_box(&config), black_box(grid), "bench").unwrap());
        });
    }

    group.finish();
}

fn bench_scenario_run(c: &mut Criterion) {
    let scenarios: Vec<(String, ScenarioConfig)> = (0..8)
        .map(|i| (format!("scenario-{i}"), reference_config()))
        .collect();
    let grid = bias_grid(0.2, 201).unwrap();

    c.bench_function("run_scenarios/8x201", |b| {
        b.iter(|| run_scenarios(black_box(&scenarios), black_box(&grid)).unwrap());
    });
}

criterion_group!(benches, bench_single_sweep, bench_scenario_run);
criterion_main!(benches);
