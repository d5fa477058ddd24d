//! TUI export of the final report.
//!
//! Writes the same reports as the `report` command to a timestamped file.

use crate::model::Catalog;
use crate::quality::ComplianceSummary;
use crate::reports::{ReportConfig, ReportFormat, ReportMetadata, create_reporter};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Export format selection for TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl ExportFormat {
    /// Get file extension for this format
    pub(crate) const fn extension(self) -> &'static str {
        self.to_report_format().extension()
    }

    /// Convert to report format
    const fn to_report_format(self) -> ReportFormat {
        match self {
            Self::Json => ReportFormat::Json,
            Self::Markdown => ReportFormat::Markdown,
        }
    }
}

/// Result of an export operation
#[derive(Debug)]
pub struct ExportResult {
    pub path: PathBuf,
    pub success: bool,
    pub message: String,
}

/// `ehr_compliance_<timestamp>.<ext>`, inside `output_dir` when given.
pub(crate) fn export_path(format: ExportFormat, output_dir: Option<&Path>) -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("ehr_compliance_{}.{}", timestamp, format.extension());
    output_dir.map_or_else(|| PathBuf::from(&filename), |dir| dir.join(&filename))
}

/// Export the final report for `catalog` to a file.
pub fn export_report(
    format: ExportFormat,
    catalog: &Catalog,
    document: Option<String>,
    output_dir: Option<&Path>,
) -> ExportResult {
    let path = export_path(format, output_dir);
    let summary = ComplianceSummary::from_catalog(catalog);
    let config = ReportConfig {
        metadata: ReportMetadata::new().with_document(document),
        ..ReportConfig::default()
    };

    let reporter = create_reporter(format.to_report_format());
    let result = match reporter.generate(catalog, &summary, &config) {
        Ok(content) => match write_to_file(&path, &content) {
            Ok(()) => ExportResult {
                path,
                success: true,
                message: String::new(),
            },
            Err(e) => ExportResult {
                path,
                success: false,
                message: format!("Failed to write file: {e}"),
            },
        },
        Err(e) => ExportResult {
            path,
            success: false,
            message: format!("Failed to generate report: {e}"),
        },
    };

    if result.success {
        tracing::info!("Exported {} report to {}", format.extension(), result.path.display());
        ExportResult {
            message: format!("Exported to {}", result.path.display()),
            ..result
        }
    } else {
        tracing::warn!("{}", result.message);
        result
    }
}

fn write_to_file(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
