use std::path::PathBuf;

use clap::Parser;
use hiresim::{ReportOptions, generate_report, init_logging};

#[derive(Parser, Debug)]
#[command(name = "hiresim")]
#[command(about = "Batch report generator for the hiring-bias selection model")]
struct Args {
    /// Path to a YAML scenario file (default: the built-in scenario pair)
    #[arg(short, long)]
    scenarios: Option<PathBuf>,

    /// Directory the CSV report is written to
    #[arg(short, long, default_value = "results")]
    out_dir: PathBuf,

    /// Largest bias coefficient in the sweep grid
    #[arg(long, default_value_t = 0.2)]
    max_bias: f64,

    /// Total number of grid points between zero and the maximum bias
    #[arg(long, default_value_t = 21)]
    steps: usize,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let opts = ReportOptions {
        scenario_file: args.scenarios,
        out_dir: args.out_dir,
        max_bias: args.max_bias,
        steps: args.steps,
    };
    let path = generate_report(&opts)?;
    println!("Report written to {}", path.display());

    Ok(())
}
