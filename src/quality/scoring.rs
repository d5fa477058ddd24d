//! Score thresholds, colour bands, and per-layer check statistics.

use crate::model::{CheckStatus, LayerRecord};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Minimum layer score that allows moving past the layer.
pub const PROCEED_THRESHOLD: u8 = 70;

/// Minimum score rendered in the "good" band.
pub const GOOD_THRESHOLD: u8 = 80;

/// Whether a score clears the proceed gate.
#[must_use]
pub const fn meets_threshold(score: u8) -> bool {
    score >= PROCEED_THRESHOLD
}

/// Whether review may advance past this layer.
#[must_use]
pub fn can_proceed(layer: &LayerRecord) -> bool {
    meets_threshold(layer.score)
}

/// Colour band a score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// `>= 80`
    Good,
    /// `70..80`
    Fair,
    /// `< 70`
    Poor,
}

impl ScoreBand {
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= GOOD_THRESHOLD {
            Self::Good
        } else if score >= PROCEED_THRESHOLD {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

/// Check counts by status, derived from a layer on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LayerStats {
    pub total: usize,
    pub passed: usize,
    pub warnings: usize,
    pub failed: usize,
}

impl LayerStats {
    #[must_use]
    pub fn from_layer(layer: &LayerRecord) -> Self {
        Self {
            total: layer.checks.len(),
            passed: layer.count_status(CheckStatus::Pass),
            warnings: layer.count_status(CheckStatus::Warning),
            failed: layer.count_status(CheckStatus::Fail),
        }
    }
}

/// `numerator / denominator` rounded half up. Zero when the denominator is zero.
#[must_use]
pub const fn round_half_up(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }
    (2 * numerator + denominator) / (2 * denominator)
}

/// `part / total` as a whole percentage, rounded half up.
#[must_use]
pub fn percentage(part: usize, total: usize) -> u8 {
    let pct = round_half_up(part as u64 * 100, total as u64);
    u8::try_from(pct.min(100)).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Check, LayerKind};

    fn layer_with_score(score: u8) -> LayerRecord {
        LayerRecord {
            name: "Gate".to_string(),
            kind: LayerKind::Privacy,
            score,
            checks: vec![Check::new("only", CheckStatus::Pass, score)],
            radar_points: vec![],
            findings: vec![],
        }
    }

    #[test]
    fn test_gate_boundary() {
        assert!(can_proceed(&layer_with_score(70)));
        assert!(!can_proceed(&layer_with_score(69)));
        assert!(can_proceed(&layer_with_score(100)));
        assert!(!can_proceed(&layer_with_score(0)));
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(70), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(69), ScoreBand::Poor);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(323, 4), 81); // 80.75
        assert_eq!(round_half_up(5, 2), 3); // 2.5
        assert_eq!(round_half_up(9, 4), 2); // 2.25
        assert_eq!(round_half_up(7, 0), 0);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(14, 17), 82);
        assert_eq!(percentage(1, 8), 13); // 12.5
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(5, 5), 100);
    }
}
