//! Report command handler.
//!
//! Implements the `report` subcommand: prints the final compliance report
//! without running the interactive wizard.

use super::output::{OutputTarget, exit_codes, should_use_color, write_output};
use crate::model::Catalog;
use crate::quality::ComplianceSummary;
use crate::reports::{ReportConfig, ReportFormat, ReportMetadata, create_reporter_with_options};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Report command configuration
#[derive(Debug, Clone, Default)]
pub struct ReportCommandConfig {
    pub format: ReportFormat,
    pub output_file: Option<PathBuf>,
    pub min_score: Option<u8>,
    /// Print summary figures only
    pub summary_only: bool,
    /// Document name shown in the report header
    pub document: Option<String>,
    pub no_color: bool,
    pub quiet: bool,
}

/// Run the report command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_report(catalog: &Catalog, config: ReportCommandConfig) -> Result<i32> {
    let summary = ComplianceSummary::from_catalog(catalog);
    tracing::info!(
        "Overall score {}% across {} layers",
        summary.overall_score,
        summary.layers.len()
    );

    let target = OutputTarget::from_option(config.output_file);
    // Color only makes sense for the terminal summary
    let use_color = should_use_color(config.no_color) && target.is_terminal();
    let reporter = create_reporter_with_options(config.format, use_color);

    let mut report_config = if config.summary_only {
        ReportConfig::summary_only()
    } else {
        ReportConfig::default()
    };
    report_config.metadata = ReportMetadata::new().with_document(config.document);

    let text = reporter
        .generate(catalog, &summary, &report_config)
        .with_context(|| format!("Failed to generate {} report", config.format))?;
    write_output(&text, &target, config.quiet)?;

    if let Some(threshold) = config.min_score {
        if summary.overall_score < threshold {
            tracing::error!(
                "Compliance score {}% is below minimum threshold {}%",
                summary.overall_score,
                threshold
            );
            return Ok(exit_codes::BELOW_MIN_SCORE);
        }
    }

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn to_file(dir: &TempDir, format: ReportFormat, min_score: Option<u8>) -> (i32, String) {
        let path = dir.path().join(format!("report.{}", format.extension()));
        let code = run_report(
            &Catalog::builtin(),
            ReportCommandConfig {
                format,
                output_file: Some(path.clone()),
                min_score,
                quiet: true,
                ..ReportCommandConfig::default()
            },
        )
        .unwrap();
        (code, std::fs::read_to_string(path).unwrap())
    }

    #[test]
    fn test_report_passes_threshold() {
        let tmp = TempDir::new().unwrap();
        let (code, text) = to_file(&tmp, ReportFormat::Summary, Some(81));
        assert_eq!(code, exit_codes::SUCCESS);
        assert!(text.contains("81% (good)"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_report_below_threshold() {
        let tmp = TempDir::new().unwrap();
        let (code, _) = to_file(&tmp, ReportFormat::Json, Some(82));
        assert_eq!(code, exit_codes::BELOW_MIN_SCORE);
    }

    #[test]
    fn test_markdown_report_file() {
        let tmp = TempDir::new().unwrap();
        let (code, text) = to_file(&tmp, ReportFormat::Markdown, None);
        assert_eq!(code, exit_codes::SUCCESS);
        assert!(text.starts_with("# EHR Compliance Report"));
    }
}
