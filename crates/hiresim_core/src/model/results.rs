//! Sweep output types
//!
//! Records are immutable once created and carry only named scalar fields, so
//! they serialize directly to tabular formats. The field set is the
//! compatibility contract that rendering and export consumers rely on.

use serde::{Deserialize, Serialize};

/// Result of applying the selection cutoff to one subgroup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionOutcome {
    /// Probability mass of the subgroup lying above its cutoff, in [0, 1]
    pub acceptance_rate: f64,
    /// Conditional expected competence of those accepted.
    /// Exactly 0.0 in the degenerate no-one-clears-the-bar case.
    pub expected_competence: f64,
}

/// One row of sweep output, produced per (scenario, bias value) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    pub scenario: String,
    /// How far subgroup B's cutoff was lowered below the fair threshold
    pub bias: f64,
    /// Hire-count-weighted mean competence across both subgroups
    pub org_avg_competence: f64,
    /// Subgroup B's fraction of all hires
    pub subgroup_b_share: f64,
    pub subgroup_a: SelectionOutcome,
    pub subgroup_b: SelectionOutcome,
    /// The effective cutoff subgroup B was held to (`fair_threshold - bias`)
    pub subgroup_b_threshold: f64,
}

impl SimulationRecord {
    /// Competence spread between the unshifted subgroup and the favored one
    #[must_use]
    pub fn productivity_gap(&self) -> f64 {
        self.subgroup_a.expected_competence - self.subgroup_b.expected_competence
    }
}

/// Ordered records for a single scenario; row order matches the bias sequence
/// the sweep was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub label: String,
    pub records: Vec<SimulationRecord>,
}

impl ScenarioResult {
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at the first bias value (conventionally the unbiased baseline)
    #[must_use]
    pub fn first(&self) -> Option<&SimulationRecord> {
        self.records.first()
    }

    /// Record at the last bias value (conventionally the maximum bias)
    #[must_use]
    pub fn last(&self) -> Option<&SimulationRecord> {
        self.records.last()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<SimulationRecord> {
        self.records
    }
}
