//! Batch report front end for the hiring-bias selection model
//!
//! Loads scenario definitions (the built-in pair or a YAML file), runs the
//! bias sweep through `hiresim_core`, writes a CSV report, and prints a short
//! per-scenario summary. All numeric work happens in the core crate; this
//! crate only adapts configuration in and records out.

pub mod data;
pub mod logging;
pub mod report;
pub mod util;

pub use logging::init_logging;
pub use report::{ReportOptions, generate_report};
