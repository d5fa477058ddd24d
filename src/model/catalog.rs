//! The layer catalog: the constant table of compliance layers.
//!
//! The built-in catalog reproduces the reference data shipped with the
//! tool. A catalog can also be loaded from a YAML file with the same shape;
//! loaded catalogs are validated against the same invariants the built-in
//! one satisfies (four layers, canonical order, non-empty parts, scores in
//! `0..=100`).

use super::layer::{
    Check, CheckStatus, Finding, LayerKind, LayerRecord, MAX_SCORE, RadarPoint, Recommendation,
    Severity,
};
use crate::error::{CatalogErrorKind, ComplianceError, ErrorContext, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of layers every catalog holds.
pub const LAYER_COUNT: usize = 4;

/// Layer records plus the final-report recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Catalog {
    layers: Vec<LayerRecord>,
    #[serde(default)]
    recommendations: Vec<Recommendation>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The built-in reference catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            layers: vec![
                privacy_layer(),
                interoperability_layer(),
                security_layer(),
                abdm_layer(),
            ],
            recommendations: vec![
                Recommendation::new(
                    Severity::High,
                    "Implement AES-256 encryption for data at rest",
                    "Security Layer",
                ),
                Recommendation::new(
                    Severity::Medium,
                    "Add consent tracking for all patient data access",
                    "Privacy & Policy Layer",
                ),
                Recommendation::new(
                    Severity::Low,
                    "Update HPR reference format to latest ABDM specification",
                    "ABDM Integration Layer",
                ),
            ],
        }
    }

    /// Parse and validate a catalog from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let catalog: Self = serde_yaml::from_str(yaml).map_err(|e| {
            ComplianceError::catalog("parsing YAML", CatalogErrorKind::InvalidYaml(e.to_string()))
        })?;
        catalog.validated()
    }

    /// Load and validate a catalog file.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ComplianceError::io(path, e))?;
        let catalog = Self::from_yaml_str(&content)
            .with_context(|| format!("loading catalog {}", path.display()))?;
        tracing::debug!(
            "Loaded catalog with {} layers from {}",
            catalog.layers.len(),
            path.display()
        );
        Ok(catalog)
    }

    fn validated(self) -> Result<Self> {
        if self.layers.len() != LAYER_COUNT {
            return Err(ComplianceError::catalog(
                "validating layers",
                CatalogErrorKind::LayerCount {
                    expected: LAYER_COUNT,
                    found: self.layers.len(),
                },
            ));
        }
        let problems = self.problems();
        if problems.is_empty() {
            Ok(self)
        } else {
            Err(ComplianceError::catalog(
                "validating layers",
                CatalogErrorKind::Invalid(problems),
            ))
        }
    }

    /// Every invariant violation in this catalog, one message each.
    #[must_use]
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        for (idx, (layer, expected)) in self.layers.iter().zip(LayerKind::all()).enumerate() {
            if layer.kind != *expected {
                problems.push(format!(
                    "layer {idx} is {:?}, expected {:?}",
                    layer.kind, expected
                ));
            }
            if layer.name.trim().is_empty() {
                problems.push(format!("layer {idx} has an empty name"));
            }
            if layer.score > MAX_SCORE {
                problems.push(format!("{}: score {} exceeds 100", layer.name, layer.score));
            }
            if layer.checks.is_empty() {
                problems.push(format!("{}: no checks", layer.name));
            }
            if layer.radar_points.is_empty() {
                problems.push(format!("{}: no radar points", layer.name));
            }
            if layer.findings.is_empty() {
                problems.push(format!("{}: no findings", layer.name));
            }
            for check in layer.checks.iter().filter(|c| c.score > MAX_SCORE) {
                problems.push(format!(
                    "{}: check '{}' score {} exceeds 100",
                    layer.name, check.name, check.score
                ));
            }
            for point in &layer.radar_points {
                if point.full_mark == 0 || point.score > point.full_mark {
                    problems.push(format!(
                        "{}: radar point '{}' score {} outside 0..={}",
                        layer.name, point.subject, point.score, point.full_mark
                    ));
                }
            }
        }

        problems
    }

    #[must_use]
    pub fn layers(&self) -> &[LayerRecord] {
        &self.layers
    }

    #[must_use]
    pub fn layer(&self, index: usize) -> Option<&LayerRecord> {
        self.layers.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// The layer reported as "integration readiness".
    #[must_use]
    pub fn abdm_layer(&self) -> Option<&LayerRecord> {
        self.layers
            .iter()
            .find(|l| l.kind == LayerKind::AbdmIntegration)
    }

    #[must_use]
    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }
}

// ============================================================================
// Built-in layer table
// ============================================================================

fn privacy_layer() -> LayerRecord {
    LayerRecord {
        name: "Privacy & Policy Layer".to_string(),
        kind: LayerKind::Privacy,
        score: 78,
        checks: vec![
            Check::new("SPDI compliance", CheckStatus::Pass, 85),
            Check::new("ABDM HDM checks", CheckStatus::Pass, 75),
            Check::new("Consent availability", CheckStatus::Warning, 70),
            Check::new("Patient rights (view/export)", CheckStatus::Pass, 82),
        ],
        radar_points: vec![
            RadarPoint::new("SPDI", 85),
            RadarPoint::new("ABDM HDM", 75),
            RadarPoint::new("Consent", 70),
            RadarPoint::new("Patient Rights", 82),
        ],
        findings: vec![
            Finding::new(
                Severity::Medium,
                "Consent logs missing for 3 patient records",
                "Implement consent tracking for all patient data access",
            ),
            Finding::new(
                Severity::Low,
                "Export functionality lacks JSON format option",
                "Add JSON export capability to patient portal",
            ),
        ],
    }
}

fn interoperability_layer() -> LayerRecord {
    LayerRecord {
        name: "Interoperability Layer".to_string(),
        kind: LayerKind::Interoperability,
        score: 85,
        checks: vec![
            Check::new("FHIR structure + ABDM profiles", CheckStatus::Pass, 92),
            Check::new("ICD/SNOMED/LOINC correctness", CheckStatus::Pass, 88),
            Check::new("DICOM conformance", CheckStatus::Pass, 75),
        ],
        radar_points: vec![
            RadarPoint::new("FHIR/ABDM", 92),
            RadarPoint::new("ICD/SNOMED", 88),
            RadarPoint::new("DICOM", 75),
        ],
        findings: vec![Finding::new(
            Severity::Low,
            "DICOM metadata incomplete in 2 imaging studies",
            "Ensure all required DICOM tags are populated",
        )],
    }
}

fn security_layer() -> LayerRecord {
    LayerRecord {
        name: "Security Layer".to_string(),
        kind: LayerKind::Security,
        score: 72,
        checks: vec![
            Check::new("Access control", CheckStatus::Pass, 80),
            Check::new("Authentication/authorization", CheckStatus::Pass, 85),
            Check::new("Encryption standards", CheckStatus::Warning, 65),
            Check::new("ISO 27001-style checks", CheckStatus::Warning, 70),
            Check::new("Audit log completeness", CheckStatus::Pass, 75),
        ],
        radar_points: vec![
            RadarPoint::new("Access Control", 80),
            RadarPoint::new("Auth", 85),
            RadarPoint::new("Encryption", 65),
            RadarPoint::new("ISO 27001", 70),
            RadarPoint::new("Audit Logs", 75),
        ],
        findings: vec![
            Finding::new(
                Severity::High,
                "Data at rest not encrypted using AES-256",
                "Implement AES-256 encryption for database storage",
            ),
            Finding::new(
                Severity::Medium,
                "Password policy allows weak passwords",
                "Enforce minimum 12 characters with complexity requirements",
            ),
        ],
    }
}

fn abdm_layer() -> LayerRecord {
    LayerRecord {
        name: "ABDM Integration Layer".to_string(),
        kind: LayerKind::AbdmIntegration,
        score: 88,
        checks: vec![
            Check::new("API schema correctness", CheckStatus::Pass, 95),
            Check::new("Consent artefact correctness", CheckStatus::Pass, 90),
            Check::new("Gateway encryption rules", CheckStatus::Pass, 85),
            Check::new("ABHA identifier formats", CheckStatus::Pass, 88),
            Check::new("HPR/HFR referencing rules", CheckStatus::Pass, 82),
        ],
        radar_points: vec![
            RadarPoint::new("API Schema", 95),
            RadarPoint::new("Consent", 90),
            RadarPoint::new("Encryption", 85),
            RadarPoint::new("ABHA", 88),
            RadarPoint::new("HPR/HFR", 82),
        ],
        findings: vec![Finding::new(
            Severity::Low,
            "Some HPR references use outdated format",
            "Update HPR reference format to latest ABDM specification",
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), LAYER_COUNT);
        assert!(catalog.problems().is_empty());

        let kinds: Vec<LayerKind> = catalog.layers().iter().map(|l| l.kind).collect();
        assert_eq!(kinds, LayerKind::all());

        let scores: Vec<u8> = catalog.layers().iter().map(|l| l.score).collect();
        assert_eq!(scores, vec![78, 85, 72, 88]);
    }

    #[test]
    fn test_builtin_parts_non_empty() {
        for layer in Catalog::builtin().layers() {
            assert!(!layer.checks.is_empty(), "{} has no checks", layer.name);
            assert!(!layer.radar_points.is_empty(), "{} has no radar", layer.name);
            assert!(!layer.findings.is_empty(), "{} has no findings", layer.name);
            assert_eq!(layer.checks.len(), layer.radar_points.len());
        }
    }

    #[test]
    fn test_abdm_layer_lookup() {
        let catalog = Catalog::builtin();
        let abdm = catalog.abdm_layer().expect("builtin has ABDM layer");
        assert_eq!(abdm.score, 88);
        assert_eq!(abdm.name, "ABDM Integration Layer");
    }

    #[test]
    fn test_yaml_roundtrip_of_builtin() {
        let yaml = serde_yaml::to_string(&Catalog::builtin()).unwrap();
        let parsed = Catalog::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, Catalog::builtin());
    }

    #[test]
    fn test_rejects_wrong_layer_count() {
        let mut catalog = Catalog::builtin();
        catalog.layers.pop();
        let yaml = serde_yaml::to_string(&catalog).unwrap();
        let err = Catalog::from_yaml_str(&yaml).unwrap_err();
        assert!(err.to_string().contains("catalog"), "{err}");
        match err {
            ComplianceError::Catalog {
                source: CatalogErrorKind::LayerCount { expected, found },
                ..
            } => {
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_out_of_order_and_empty_parts() {
        let mut catalog = Catalog::builtin();
        catalog.layers.swap(0, 1);
        catalog.layers[2].findings.clear();
        catalog.layers[3].checks[0].score = 150;

        let problems = catalog.problems();
        assert!(problems.iter().any(|p| p.contains("layer 0")));
        assert!(problems.iter().any(|p| p.contains("no findings")));
        assert!(problems.iter().any(|p| p.contains("exceeds 100")));
    }

    #[test]
    fn test_rejects_invalid_yaml() {
        let err = Catalog::from_yaml_str("layers: [not, a, layer").unwrap_err();
        assert!(matches!(
            err,
            ComplianceError::Catalog {
                source: CatalogErrorKind::InvalidYaml(_),
                ..
            }
        ));
    }
}
