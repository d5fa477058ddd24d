//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Compact terminal summary
    #[default]
    Summary,
    /// Structured JSON output
    Json,
    /// Human-readable Markdown
    #[value(alias = "md")]
    Markdown,
}

impl ReportFormat {
    /// File extension for exported reports.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Summary => "txt",
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Include per-layer checks and findings, not just the summary
    pub include_details: bool,
    /// Metadata included in the report header
    pub metadata: ReportMetadata,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: None,
            include_details: true,
            metadata: ReportMetadata::new(),
        }
    }
}

impl ReportConfig {
    /// Summary figures only.
    #[must_use]
    pub fn summary_only() -> Self {
        Self {
            include_details: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("EHR Compliance Report")
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Tool version
    pub tool_version: String,
    /// Name of the document the review was started for
    pub document: Option<String>,
    /// Generation timestamp (RFC 3339)
    pub generated_at: String,
}

impl ReportMetadata {
    /// Metadata stamped with the current local time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            document: None,
            generated_at: chrono::Local::now().to_rfc3339(),
        }
    }

    #[must_use]
    pub fn with_document(mut self, document: Option<String>) -> Self {
        self.document = document;
        self
    }
}
