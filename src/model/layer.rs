//! Layer records and their parts: checks, radar points, findings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of every score in the catalog.
pub const MAX_SCORE: u8 = 100;

/// The four compliance domains, in review order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Privacy,
    Interoperability,
    Security,
    AbdmIntegration,
}

impl LayerKind {
    /// Short title used on the home screen cards.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Privacy => "Privacy & Policy",
            Self::Interoperability => "Interoperability",
            Self::Security => "Security",
            Self::AbdmIntegration => "ABDM Integration",
        }
    }

    /// What the layer covers.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Privacy => {
                "SPDI, ABDM HDM, consent management, and patient rights compliance"
            }
            Self::Interoperability => "FHIR, ICD/SNOMED/LOINC, and DICOM standard conformance",
            Self::Security => "Access control, encryption, ISO 27001, and audit logging",
            Self::AbdmIntegration => {
                "API schemas, consent artefacts, and ABHA identifier validation"
            }
        }
    }

    /// Single-glyph marker drawn next to the layer name.
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Privacy => "🔒",
            Self::Interoperability => "🌐",
            Self::Security => "🛡",
            Self::AbdmIntegration => "⚡",
        }
    }

    /// All kinds in canonical review order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Privacy,
            Self::Interoperability,
            Self::Security,
            Self::AbdmIntegration,
        ]
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Fail,
}

impl CheckStatus {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warning => "warning",
            Self::Fail => "fail",
        }
    }

    /// Status icon used in the heat map and text reports.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Pass => "✓",
            Self::Warning => "⚠",
            Self::Fail => "✗",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity of a finding or recommendation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named sub-criterion of a layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Check {
    pub name: String,
    pub status: CheckStatus,
    #[schemars(range(min = 0, max = 100))]
    pub score: u8,
}

impl Check {
    pub fn new(name: impl Into<String>, status: CheckStatus, score: u8) -> Self {
        Self {
            name: name.into(),
            status,
            score,
        }
    }
}

/// One axis of the layer radar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RadarPoint {
    pub subject: String,
    #[schemars(range(min = 0, max = 100))]
    pub score: u8,
    #[serde(default = "default_full_mark")]
    pub full_mark: u8,
}

const fn default_full_mark() -> u8 {
    MAX_SCORE
}

impl RadarPoint {
    pub fn new(subject: impl Into<String>, score: u8) -> Self {
        Self {
            subject: subject.into(),
            score,
            full_mark: MAX_SCORE,
        }
    }

    /// Score as a fraction of the full mark, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.full_mark == 0 {
            return 0.0;
        }
        (f64::from(self.score) / f64::from(self.full_mark)).clamp(0.0, 1.0)
    }
}

/// A flagged issue with its suggested remediation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
    pub fix: String,
}

impl Finding {
    pub fn new(severity: Severity, message: impl Into<String>, fix: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            fix: fix.into(),
        }
    }
}

/// One compliance layer as shown during review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LayerRecord {
    pub name: String,
    pub kind: LayerKind,
    #[schemars(range(min = 0, max = 100))]
    pub score: u8,
    pub checks: Vec<Check>,
    pub radar_points: Vec<RadarPoint>,
    pub findings: Vec<Finding>,
}

impl LayerRecord {
    /// Number of checks with the given status.
    #[must_use]
    pub fn count_status(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }
}

/// A prioritised action item on the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    pub severity: Severity,
    pub message: String,
    /// Display name of the layer the item belongs to.
    pub layer: String,
}

impl Recommendation {
    pub fn new(severity: Severity, message: impl Into<String>, layer: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            layer: layer.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_status() {
        let layer = LayerRecord {
            name: "Test Layer".to_string(),
            kind: LayerKind::Security,
            score: 70,
            checks: vec![
                Check::new("a", CheckStatus::Pass, 90),
                Check::new("b", CheckStatus::Warning, 60),
                Check::new("c", CheckStatus::Fail, 10),
                Check::new("d", CheckStatus::Pass, 80),
            ],
            radar_points: vec![RadarPoint::new("a", 90)],
            findings: vec![],
        };
        assert_eq!(layer.count_status(CheckStatus::Pass), 2);
        assert_eq!(layer.count_status(CheckStatus::Warning), 1);
        assert_eq!(layer.count_status(CheckStatus::Fail), 1);
    }

    #[test]
    fn test_radar_ratio() {
        assert!((RadarPoint::new("x", 50).ratio() - 0.5).abs() < f64::EPSILON);
        let zero = RadarPoint {
            subject: "z".to_string(),
            score: 10,
            full_mark: 0,
        };
        assert_eq!(zero.ratio(), 0.0);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&CheckStatus::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let kind: LayerKind = serde_json::from_str("\"abdm_integration\"").unwrap();
        assert_eq!(kind, LayerKind::AbdmIntegration);
    }
}
