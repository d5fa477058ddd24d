//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{Catalog, LayerRecord, Recommendation};
use crate::quality::{ComplianceSummary, LayerScore, can_proceed};
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(
        &self,
        catalog: &Catalog,
        summary: &ComplianceSummary,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonComplianceReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: config.metadata.tool_version.clone(),
                },
                title: config.title().to_string(),
                document: config.metadata.document.clone(),
                generated_at: config.metadata.generated_at.clone(),
            },
            summary: JsonSummary {
                overall_score: summary.overall_score,
                overall_band: summary.overall_band.label(),
                total_checks: summary.total_checks,
                passed_checks: summary.passed_checks,
                success_rate: summary.success_rate,
                abdm_readiness: summary.abdm_readiness,
            },
            layers: summary
                .layers
                .iter()
                .zip(catalog.layers())
                .map(|(score, layer)| JsonLayer::new(score, layer, config.include_details))
                .collect(),
            recommendations: &summary.recommendations,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
        .map_err(|e| ReportError::SerializationError(e.to_string()))?;

        Ok(json)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON structures for serialization

#[derive(Serialize)]
struct JsonComplianceReport<'a> {
    metadata: JsonReportMetadata,
    summary: JsonSummary,
    layers: Vec<JsonLayer<'a>>,
    recommendations: &'a [Recommendation],
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    document: Option<String>,
    generated_at: String,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[derive(Serialize)]
struct JsonSummary {
    overall_score: u8,
    overall_band: &'static str,
    total_checks: usize,
    passed_checks: usize,
    success_rate: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    abdm_readiness: Option<u8>,
}

#[derive(Serialize)]
struct JsonLayer<'a> {
    #[serde(flatten)]
    score: &'a LayerScore,
    can_proceed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a LayerRecord>,
}

impl<'a> JsonLayer<'a> {
    fn new(score: &'a LayerScore, layer: &'a LayerRecord, include_details: bool) -> Self {
        Self {
            score,
            can_proceed: can_proceed(layer),
            details: include_details.then_some(layer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn render(config: &ReportConfig) -> Value {
        let catalog = Catalog::builtin();
        let summary = ComplianceSummary::from_catalog(&catalog);
        let json = JsonReporter::new()
            .generate(&catalog, &summary, config)
            .unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_json_summary_fields() {
        let value = render(&ReportConfig::default());
        assert_eq!(value["summary"]["overall_score"], 81);
        assert_eq!(value["summary"]["overall_band"], "good");
        assert_eq!(value["summary"]["total_checks"], 17);
        assert_eq!(value["summary"]["passed_checks"], 14);
        assert_eq!(value["summary"]["success_rate"], 82);
        assert_eq!(value["summary"]["abdm_readiness"], 88);
        assert_eq!(value["metadata"]["tool"]["name"], "ehr-compliance");
    }

    #[test]
    fn test_json_layers() {
        let value = render(&ReportConfig::default());
        let layers = value["layers"].as_array().unwrap();
        assert_eq!(layers.len(), 4);
        assert_eq!(layers[2]["name"], "Security Layer");
        assert_eq!(layers[2]["score"], 72);
        assert_eq!(layers[2]["band"], "fair");
        assert_eq!(layers[2]["can_proceed"], true);
        assert_eq!(layers[2]["details"]["checks"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_json_summary_only_drops_details() {
        let value = render(&ReportConfig::summary_only());
        assert!(value["layers"][0].get("details").is_none());
        assert_eq!(value["recommendations"].as_array().unwrap().len(), 3);
        assert_eq!(value["recommendations"][0]["severity"], "high");
    }

    #[test]
    fn test_compact_output() {
        let catalog = Catalog::builtin();
        let summary = ComplianceSummary::from_catalog(&catalog);
        let json = JsonReporter::new()
            .pretty(false)
            .generate(&catalog, &summary, &ReportConfig::default())
            .unwrap();
        assert!(!json.contains('\n'));
    }
}
