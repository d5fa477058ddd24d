//! Final report figures aggregated over the catalog.

use super::scoring::{LayerStats, ScoreBand, percentage, round_half_up};
use crate::model::{Catalog, LayerKind, Recommendation};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Per-layer row of the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LayerScore {
    pub name: String,
    pub kind: LayerKind,
    pub score: u8,
    pub band: ScoreBand,
    pub stats: LayerStats,
}

/// Overall compliance figures across every layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ComplianceSummary {
    /// Mean of the layer scores, rounded half up
    pub overall_score: u8,
    pub overall_band: ScoreBand,
    pub total_checks: usize,
    pub passed_checks: usize,
    /// `passed_checks / total_checks` as a whole percentage
    pub success_rate: u8,
    /// Score of the ABDM integration layer
    pub abdm_readiness: Option<u8>,
    pub layers: Vec<LayerScore>,
    pub recommendations: Vec<Recommendation>,
}

impl ComplianceSummary {
    /// Compute the summary for a catalog. Pure: nothing is cached or mutated.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let layers: Vec<LayerScore> = catalog
            .layers()
            .iter()
            .map(|layer| LayerScore {
                name: layer.name.clone(),
                kind: layer.kind,
                score: layer.score,
                band: ScoreBand::from_score(layer.score),
                stats: LayerStats::from_layer(layer),
            })
            .collect();

        let score_sum: u64 = layers.iter().map(|l| u64::from(l.score)).sum();
        let overall = round_half_up(score_sum, layers.len() as u64);
        let overall_score = u8::try_from(overall).unwrap_or(u8::MAX);

        let total_checks = layers.iter().map(|l| l.stats.total).sum();
        let passed_checks = layers.iter().map(|l| l.stats.passed).sum();

        Self {
            overall_score,
            overall_band: ScoreBand::from_score(overall_score),
            total_checks,
            passed_checks,
            success_rate: percentage(passed_checks, total_checks),
            abdm_readiness: catalog.abdm_layer().map(|l| l.score),
            layers,
            recommendations: catalog.recommendations().to_vec(),
        }
    }

    /// Number of layers below the proceed threshold.
    #[must_use]
    pub fn blocked_layers(&self) -> usize {
        self.layers
            .iter()
            .filter(|l| l.band == ScoreBand::Poor)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_summary_figures() {
        let summary = ComplianceSummary::from_catalog(&Catalog::builtin());
        assert_eq!(summary.overall_score, 81);
        assert_eq!(summary.overall_band, ScoreBand::Good);
        assert_eq!(summary.total_checks, 17);
        assert_eq!(summary.passed_checks, 14);
        assert_eq!(summary.success_rate, 82);
        assert_eq!(summary.abdm_readiness, Some(88));
        assert_eq!(summary.layers.len(), 4);
        assert_eq!(summary.recommendations.len(), 3);
        assert_eq!(summary.blocked_layers(), 0);
    }

    #[test]
    fn test_per_layer_stats() {
        let summary = ComplianceSummary::from_catalog(&Catalog::builtin());
        let totals: Vec<usize> = summary.layers.iter().map(|l| l.stats.total).collect();
        assert_eq!(totals, vec![4, 3, 5, 5]);
        let warnings: Vec<usize> = summary.layers.iter().map(|l| l.stats.warnings).collect();
        assert_eq!(warnings, vec![1, 0, 2, 0]);
        assert!(summary.layers.iter().all(|l| l.stats.failed == 0));
    }

    #[test]
    fn test_summary_is_stable() {
        let catalog = Catalog::builtin();
        assert_eq!(
            ComplianceSummary::from_catalog(&catalog),
            ComplianceSummary::from_catalog(&catalog)
        );
    }
}
