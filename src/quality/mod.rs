//! Compliance scoring.
//!
//! Provides the proceed gate, score bands, per-layer check statistics, and
//! the aggregated final-report summary. All figures are derived from the
//! catalog each time they are needed.

mod scoring;
mod summary;

pub use scoring::{
    GOOD_THRESHOLD, LayerStats, PROCEED_THRESHOLD, ScoreBand, can_proceed, meets_threshold,
    percentage, round_half_up,
};
pub use summary::{ComplianceSummary, LayerScore};
