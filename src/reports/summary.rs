//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{Catalog, CheckStatus, Severity};
use crate::quality::{ComplianceSummary, ScoreBand};
use crate::tui::widgets::bar_cells;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn band_color(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Good => "green",
        ScoreBand::Fair => "yellow",
        ScoreBand::Poor => "red",
    }
}

const fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "red",
        Severity::Medium => "yellow",
        Severity::Low => "cyan",
    }
}

const fn status_color(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => "green",
        CheckStatus::Warning => "yellow",
        CheckStatus::Fail => "red",
    }
}

const BAR_WIDTH: u16 = 10;

/// Ten-cell text bar for a 0..=100 score, filled like the wizard's bars.
fn score_bar(score: u8) -> String {
    let filled = bar_cells(score, BAR_WIDTH);
    format!(
        "{}{}",
        "█".repeat(usize::from(filled)),
        "░".repeat(usize::from(BAR_WIDTH - filled))
    )
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        catalog: &Catalog,
        summary: &ComplianceSummary,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color(config.title(), "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        if let Some(document) = &config.metadata.document {
            lines.push(format!("{}  {document}", self.color("Document:", "cyan")));
        }
        lines.push(format!(
            "{}  {}",
            self.color("Generated:", "cyan"),
            config.metadata.generated_at
        ));
        lines.push(String::new());

        let overall = format!(
            "{}% ({})",
            summary.overall_score,
            summary.overall_band.label()
        );
        lines.push(format!(
            "{}       {}",
            self.color("Overall:", "bold"),
            self.color(&overall, band_color(summary.overall_band))
        ));
        lines.push(format!(
            "{}  {}/{}",
            self.color("Checks passed:", "cyan"),
            summary.passed_checks,
            summary.total_checks
        ));
        lines.push(format!(
            "{}   {}%",
            self.color("Success rate:", "cyan"),
            summary.success_rate
        ));
        if let Some(abdm) = summary.abdm_readiness {
            lines.push(format!(
                "{} {abdm}%",
                self.color("ABDM readiness:", "cyan")
            ));
        }

        lines.push(String::new());
        lines.push(self.color("Layers:", "bold"));
        for layer in &summary.layers {
            let score = format!("{:>3}%", layer.score);
            lines.push(format!(
                "  {:<24} {} {}  {} passed, {} warnings",
                layer.name,
                self.color(&score_bar(layer.score), band_color(layer.band)),
                self.color(&score, band_color(layer.band)),
                layer.stats.passed,
                layer.stats.warnings
            ));
        }

        if config.include_details {
            for layer in catalog.layers() {
                lines.push(String::new());
                lines.push(self.color(&layer.name, "bold"));
                for check in &layer.checks {
                    lines.push(format!(
                        "  {} {:<32} {:>3}%",
                        self.color(check.status.symbol(), status_color(check.status)),
                        check.name,
                        check.score
                    ));
                }
                for finding in &layer.findings {
                    lines.push(format!(
                        "  [{}] {}",
                        self.color(finding.severity.label(), severity_color(finding.severity)),
                        finding.message
                    ));
                    lines.push(format!("    {} {}", self.color("fix:", "dim"), finding.fix));
                }
            }
        }

        if !summary.recommendations.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Recommendations:", "bold"));
            for rec in &summary.recommendations {
                lines.push(format!(
                    "  [{}] {} {}",
                    self.color(rec.severity.label(), severity_color(rec.severity)),
                    rec.message,
                    self.color(&format!("({})", rec.layer), "dim")
                ));
            }
        }

        Ok(lines.join("\n") + "\n")
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(config: &ReportConfig) -> String {
        let catalog = Catalog::builtin();
        let summary = ComplianceSummary::from_catalog(&catalog);
        SummaryReporter::new()
            .no_color()
            .generate(&catalog, &summary, config)
            .unwrap()
    }

    #[test]
    fn test_summary_headline_figures() {
        let text = render(&ReportConfig::default());
        assert!(text.contains("81% (good)"));
        assert!(text.contains("14/17"));
        assert!(text.contains("82%"));
        assert!(text.contains("ABDM readiness: 88%"));
    }

    #[test]
    fn test_summary_only_omits_checks() {
        let text = render(&ReportConfig::summary_only());
        assert!(text.contains("Privacy & Policy"));
        assert!(!text.contains("ABHA identifier formats"));
        assert!(text.contains("Recommendations:"));
    }

    #[test]
    fn test_details_include_findings() {
        let text = render(&ReportConfig::default());
        assert!(text.contains("ABHA identifier formats"));
        assert!(text.contains("fix:"));
    }

    #[test]
    fn test_score_bar() {
        assert_eq!(score_bar(88), "█████████░");
        assert_eq!(score_bar(100).chars().count(), 10);
        assert_eq!(score_bar(0), "░░░░░░░░░░");
    }

    #[test]
    fn test_score_bar_rounds_half_up() {
        assert_eq!(score_bar(75), "████████░░");
        assert_eq!(score_bar(72), "███████░░░");
        assert_eq!(score_bar(4), "░░░░░░░░░░");
        assert_eq!(score_bar(5), "█░░░░░░░░░");
    }

    #[test]
    fn test_colored_output_has_ansi() {
        let catalog = Catalog::builtin();
        let summary = ComplianceSummary::from_catalog(&catalog);
        let text = SummaryReporter::new()
            .generate(&catalog, &summary, &ReportConfig::default())
            .unwrap();
        assert!(text.contains("\x1b[32m"));
    }
}
