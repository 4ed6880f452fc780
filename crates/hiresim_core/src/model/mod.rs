mod config;
mod results;

pub use config::{ScenarioConfig, SubgroupParams};
pub use results::{ScenarioResult, SelectionOutcome, SimulationRecord};
