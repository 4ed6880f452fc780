//! Number formatting helpers for the stdout summary table

/// Format a fraction as a percentage with one decimal place
#[must_use]
pub fn format_share(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Format a competence value to three decimal places
#[must_use]
pub fn format_competence(value: f64) -> String {
    format!("{value:.3}")
}
