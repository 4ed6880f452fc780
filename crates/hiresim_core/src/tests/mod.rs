//! Integration tests for the selection model
//!
//! Tests are organized by topic:
//! - `selector` - Truncated-normal moments and the degenerate guard
//! - `sweep` - Bias sweeps, record ordering, and grid construction
//! - `aggregation` - Organization-level weighting and fallbacks
//! - `scenarios` - Multi-scenario runs and the builder DSL

mod aggregation;
