//! Markdown report generator.

use super::escape::{escape_markdown_inline, escape_markdown_table};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{Catalog, LayerRecord};
use crate::quality::{ComplianceSummary, can_proceed};
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_layer_details(md: &mut String, layer: &LayerRecord) -> Result<(), ReportError> {
        writeln!(md, "### {}", escape_markdown_inline(&layer.name))?;
        writeln!(md)?;
        writeln!(
            md,
            "{} Score: **{}%**{}",
            layer.kind.glyph(),
            layer.score,
            if can_proceed(layer) {
                ""
            } else {
                " (below proceed threshold)"
            }
        )?;
        writeln!(md)?;

        writeln!(md, "| Check | Status | Score |")?;
        writeln!(md, "|-------|--------|------:|")?;
        for check in &layer.checks {
            writeln!(
                md,
                "| {} | {} {} | {}% |",
                escape_markdown_table(&check.name),
                check.status.symbol(),
                check.status.label(),
                check.score
            )?;
        }
        writeln!(md)?;

        if !layer.findings.is_empty() {
            writeln!(md, "**Findings**")?;
            writeln!(md)?;
            for finding in &layer.findings {
                writeln!(
                    md,
                    "- **{}**: {}",
                    finding.severity.label(),
                    escape_markdown_inline(&finding.message)
                )?;
                writeln!(md, "  - Fix: {}", escape_markdown_inline(&finding.fix))?;
            }
            writeln!(md)?;
        }
        Ok(())
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(
        &self,
        catalog: &Catalog,
        summary: &ComplianceSummary,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();

        writeln!(md, "# {}", escape_markdown_inline(config.title()))?;
        writeln!(md)?;
        if let Some(document) = &config.metadata.document {
            writeln!(md, "**Document:** {}  ", escape_markdown_inline(document))?;
        }
        writeln!(md, "**Generated:** {}  ", config.metadata.generated_at)?;
        writeln!(md, "**Tool version:** {}", config.metadata.tool_version)?;
        writeln!(md)?;

        writeln!(md, "## Summary")?;
        writeln!(md)?;
        writeln!(md, "| Metric | Value |")?;
        writeln!(md, "|--------|-------|")?;
        writeln!(
            md,
            "| Overall score | {}% ({}) |",
            summary.overall_score,
            summary.overall_band.label()
        )?;
        writeln!(
            md,
            "| Checks passed | {}/{} |",
            summary.passed_checks, summary.total_checks
        )?;
        writeln!(md, "| Success rate | {}% |", summary.success_rate)?;
        if let Some(abdm) = summary.abdm_readiness {
            writeln!(md, "| ABDM readiness | {abdm}% |")?;
        }
        writeln!(md)?;

        writeln!(md, "## Layers")?;
        writeln!(md)?;
        writeln!(md, "| Layer | Score | Band | Passed | Warnings | Failed |")?;
        writeln!(md, "|-------|------:|------|-------:|---------:|-------:|")?;
        for layer in &summary.layers {
            writeln!(
                md,
                "| {} | {}% | {} | {} | {} | {} |",
                escape_markdown_table(&layer.name),
                layer.score,
                layer.band.label(),
                layer.stats.passed,
                layer.stats.warnings,
                layer.stats.failed
            )?;
        }
        writeln!(md)?;

        if config.include_details {
            writeln!(md, "## Layer Details")?;
            writeln!(md)?;
            for layer in catalog.layers() {
                Self::write_layer_details(&mut md, layer)?;
            }
        }

        if !summary.recommendations.is_empty() {
            writeln!(md, "## Recommendations")?;
            writeln!(md)?;
            for (i, rec) in summary.recommendations.iter().enumerate() {
                writeln!(
                    md,
                    "{}. **{}** {} _({})_",
                    i + 1,
                    rec.severity.label(),
                    escape_markdown_inline(&rec.message),
                    escape_markdown_inline(&rec.layer)
                )?;
            }
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(config: &ReportConfig) -> String {
        let catalog = Catalog::builtin();
        let summary = ComplianceSummary::from_catalog(&catalog);
        MarkdownReporter::new()
            .generate(&catalog, &summary, config)
            .unwrap()
    }

    #[test]
    fn test_markdown_sections() {
        let md = render(&ReportConfig::default());
        assert!(md.starts_with("# EHR Compliance Report"));
        assert!(md.contains("| Overall score | 81% (good) |"));
        assert!(md.contains("| Checks passed | 14/17 |"));
        assert!(md.contains("| ABDM readiness | 88% |"));
        assert!(md.contains("## Layer Details"));
        assert!(md.contains("### Security Layer"));
        assert!(md.contains("1. **high** Implement AES-256 encryption for data at rest"));
    }

    #[test]
    fn test_markdown_summary_only() {
        let md = render(&ReportConfig::summary_only());
        assert!(!md.contains("## Layer Details"));
        assert!(md.contains("| Security Layer | 72% | fair | 3 | 2 | 0 |"));
    }

    #[test]
    fn test_markdown_escapes_catalog_text() {
        let catalog = Catalog::builtin();
        let summary = ComplianceSummary::from_catalog(&catalog);
        let config = ReportConfig {
            title: Some("Audit | <draft>".to_string()),
            ..ReportConfig::default()
        };
        let md = MarkdownReporter::new()
            .generate(&catalog, &summary, &config)
            .unwrap();
        assert!(md.starts_with("# Audit \\| \\<draft\\>"));
        assert!(md.contains("### Privacy & Policy Layer"));
    }
}
