//! Report generation for the final compliance review.
//!
//! Three output formats share one [`ReportGenerator`] trait:
//! - Summary: compact shell-friendly text, optionally colored
//! - JSON: structured data for programmatic integration
//! - Markdown: human-readable documentation
//!
//! Catalog text may come from a user-supplied file, so the Markdown
//! reporter routes every catalog string through [`escape`].

pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::model::Catalog;
use crate::quality::ComplianceSummary;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report for a catalog and its computed summary
    fn generate(
        &self,
        catalog: &Catalog,
        summary: &ComplianceSummary,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_report(
        &self,
        catalog: &Catalog,
        summary: &ComplianceSummary,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate(catalog, summary, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator, controlling ANSI color for terminal formats
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_formats() {
        for format in [
            ReportFormat::Summary,
            ReportFormat::Json,
            ReportFormat::Markdown,
        ] {
            assert_eq!(create_reporter(format).format(), format);
        }
    }

    #[test]
    fn test_write_report_to_buffer() {
        let catalog = Catalog::builtin();
        let summary = ComplianceSummary::from_catalog(&catalog);
        let reporter = create_reporter_with_options(ReportFormat::Summary, false);

        let mut buf = Vec::new();
        reporter
            .write_report(&catalog, &summary, &ReportConfig::default(), &mut buf)
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("81%"));
        assert!(!text.contains('\x1b'));
    }
}
