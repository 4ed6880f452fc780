//! Scenario definitions and file loading
//!
//! Scenario files are YAML:
//!
//! ```yaml
//! max_bias: 0.2
//! steps: 21
//! scenarios:
//!   - label: "Equal ability"
//!     mean_a: 0.60
//!     mean_b: 0.60
//!     spread: 0.15
//!     fair_threshold: 0.75
//!     population_share_a: 0.5
//! ```
//!
//! `population_share_a` is required per scenario; nothing defaults silently.
//! Validation of the numeric invariants happens in the core when the sweep
//! starts, so a malformed file fails before any point is computed.

use std::fs;
use std::path::Path;

use hiresim_core::{ScenarioConfig, SubgroupParams};
use serde::{Deserialize, Serialize};

/// Error types for scenario file loading
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// One scenario entry as written in a scenario file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub label: String,
    pub mean_a: f64,
    pub mean_b: f64,
    /// Standard deviation shared by both subgroups
    pub spread: f64,
    pub fair_threshold: f64,
    pub population_share_a: f64,
}

impl ScenarioSpec {
    #[must_use]
    pub fn to_config(&self) -> ScenarioConfig {
        ScenarioConfig {
            subgroup_a: SubgroupParams::new(self.mean_a, self.spread),
            subgroup_b: SubgroupParams::new(self.mean_b, self.spread),
            fair_threshold: self.fair_threshold,
            population_share_a: self.population_share_a,
        }
    }
}

/// Top-level contents of a scenario file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFile {
    /// Override for the sweep's largest bias coefficient
    #[serde(default)]
    pub max_bias: Option<f64>,
    /// Override for the number of sweep grid points
    #[serde(default)]
    pub steps: Option<usize>,
    pub scenarios: Vec<ScenarioSpec>,
}

impl ScenarioFile {
    /// Labeled configurations in file order
    #[must_use]
    pub fn to_scenarios(&self) -> Vec<(String, ScenarioConfig)> {
        self.scenarios
            .iter()
            .map(|spec| (spec.label.clone(), spec.to_config()))
            .collect()
    }
}

pub fn load_scenarios(path: &Path) -> Result<ScenarioFile, StorageError> {
    let content = fs::read_to_string(path)
        .map_err(|e| StorageError::Io(format!("failed to read {}: {}", path.display(), e)))?;
    serde_saphyr::from_str(&content)
        .map_err(|e| StorageError::Parse(format!("failed to parse {}: {}", path.display(), e)))
}

/// The built-in scenario pair from the reference study: an equal-ability
/// baseline, and a survey-calibrated pair where subgroup A's mean sits a
/// decade above subgroup B's.
#[must_use]
pub fn default_scenarios() -> Vec<(String, ScenarioConfig)> {
    let equal = ScenarioConfig {
        subgroup_a: SubgroupParams::new(0.60, 0.15),
        subgroup_b: SubgroupParams::new(0.60, 0.15),
        fair_threshold: 0.75,
        population_share_a: 0.5,
    };
    let shifted = ScenarioConfig {
        subgroup_a: SubgroupParams::new(0.65, 0.15),
        subgroup_b: SubgroupParams::new(0.55, 0.15),
        ..equal
    };

    vec![
        ("Equal ability".to_string(), equal),
        ("Unequal ability (A leads)".to_string(), shifted),
    ]
}
