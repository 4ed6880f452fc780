//! CSV report generation and the stdout summary
//!
//! The CSV column set mirrors the record fields one-to-one; downstream
//! tooling keys on these header names.

use std::fmt::Write as _;
use std::path::PathBuf;

use hiresim_core::{ScenarioConfig, SimulationRecord, bias_grid, run_scenarios};

use crate::data;
use crate::util::format::{format_competence, format_share};
use crate::util::io::atomic_write;

/// File name of the tabular report inside the output directory
pub const RESULTS_FILE: &str = "simulation_results.csv";

const CSV_HEADER: &str = "scenario,bias,org_avg_competence,subgroup_b_share,\
subgroup_a_rate,subgroup_a_competence,subgroup_b_rate,subgroup_b_competence,\
subgroup_b_threshold,productivity_gap";

/// Options resolved from the command line
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Scenario file to load; the built-in pair is used when absent
    pub scenario_file: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub max_bias: f64,
    pub steps: usize,
}

/// Run the configured scenarios, write the CSV report, and print the summary.
///
/// Returns the path of the written report.
pub fn generate_report(opts: &ReportOptions) -> color_eyre::Result<PathBuf> {
    let (scenarios, max_bias, steps) = resolve_scenarios(opts)?;
    let grid = bias_grid(max_bias, steps)?;

    tracing::info!(
        scenario_count = scenarios.len(),
        steps = grid.len(),
        max_bias,
        "running bias sweep"
    );
    let records = run_scenarios(&scenarios, &grid)?;

    std::fs::create_dir_all(&opts.out_dir)?;
    let csv_path = opts.out_dir.join(RESULTS_FILE);
    atomic_write(&csv_path, &render_csv(&records))?;
    tracing::info!(path = %csv_path.display(), rows = records.len(), "report written");

    print_summary(&summarize(&scenarios, &records));

    Ok(csv_path)
}

/// Scenario list plus effective grid parameters. File-level grid overrides
/// win over the command line when a scenario file is given.
fn resolve_scenarios(
    opts: &ReportOptions,
) -> color_eyre::Result<(Vec<(String, ScenarioConfig)>, f64, usize)> {
    match &opts.scenario_file {
        Some(path) => {
            let file = data::load_scenarios(path)?;
            let max_bias = file.max_bias.unwrap_or(opts.max_bias);
            let steps = file.steps.unwrap_or(opts.steps);
            Ok((file.to_scenarios(), max_bias, steps))
        }
        None => Ok((data::default_scenarios(), opts.max_bias, opts.steps)),
    }
}

/// Render records as CSV, one row per (scenario, bias value) pair
#[must_use]
pub fn render_csv(records: &[SimulationRecord]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');

    for r in records {
        let _ = writeln!(
            csv,
            "{},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6}",
            csv_field(&r.scenario),
            r.bias,
            r.org_avg_competence,
            r.subgroup_b_share,
            r.subgroup_a.acceptance_rate,
            r.subgroup_a.expected_competence,
            r.subgroup_b.acceptance_rate,
            r.subgroup_b.expected_competence,
            r.subgroup_b_threshold,
            r.productivity_gap(),
        );
    }

    csv
}

/// Quote a label if it contains CSV metacharacters
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Per-scenario comparison of the unbiased baseline against the maximum bias
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSummary {
    pub label: String,
    pub base_competence: f64,
    pub final_competence: f64,
    pub base_share_b: f64,
    pub final_share_b: f64,
}

/// Extract first-row/last-row summaries per scenario, in scenario order
#[must_use]
pub fn summarize(
    scenarios: &[(String, ScenarioConfig)],
    records: &[SimulationRecord],
) -> Vec<ScenarioSummary> {
    scenarios
        .iter()
        .filter_map(|(label, _)| {
            let mut rows = records.iter().filter(|r| &r.scenario == label);
            let first = rows.next()?;
            let last = rows.last().unwrap_or(first);
            Some(ScenarioSummary {
                label: label.clone(),
                base_competence: first.org_avg_competence,
                final_competence: last.org_avg_competence,
                base_share_b: first.subgroup_b_share,
                final_share_b: last.subgroup_b_share,
            })
        })
        .collect()
}

fn print_summary(summaries: &[ScenarioSummary]) {
    if summaries.is_empty() {
        return;
    }

    println!("Scenario summary (zero bias -> max bias):");
    for s in summaries {
        println!("  {}", s.label);
        println!(
            "    org avg competence  {} -> {}  ({:+.3})",
            format_competence(s.base_competence),
            format_competence(s.final_competence),
            s.final_competence - s.base_competence,
        );
        println!(
            "    subgroup B share    {} -> {}",
            format_share(s.base_share_b),
            format_share(s.final_share_b),
        );
    }
}
