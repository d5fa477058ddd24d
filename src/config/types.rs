//! Configuration types for ehr-compliance.

use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Top-level configuration, loaded from a config file and overridden by CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Report output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// TUI-specific configuration
    pub tui: TuiConfig,
    /// Layer catalog source
    pub catalog: CatalogConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Exit non-zero from `report` when the overall score is below this.
    pub const fn min_score(mut self, min_score: Option<u8>) -> Self {
        self.config.behavior.min_score = min_score;
        self
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.config.tui.theme = theme.into();
        self
    }

    pub fn catalog_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.catalog.file = file;
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section types
// ============================================================================

/// Report output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format: summary, json, markdown
    pub format: ReportFormat,
    /// Output file path (stdout if not specified)
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Minimum overall score for `report` to exit successfully
    #[schemars(range(min = 0, max = 100))]
    pub min_score: Option<u8>,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Event poll interval in milliseconds
    #[schemars(range(min = 16, max = 5000))]
    pub tick_rate_ms: u64,
    /// Directory for exported reports (working directory if not specified)
    pub export_dir: Option<PathBuf>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            tick_rate_ms: 250,
            export_dir: None,
        }
    }
}

/// Where the layer catalog comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CatalogConfig {
    /// YAML catalog file (built-in catalog if not specified)
    pub file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .no_color(true)
            .min_score(Some(75))
            .theme("light")
            .build();
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.output.no_color);
        assert_eq!(config.behavior.min_score, Some(75));
        assert_eq!(config.tui.theme, "light");
        assert_eq!(config.catalog.file, None);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("tui:\n  theme: light\n").unwrap();
        assert_eq!(config.tui.theme, "light");
        assert_eq!(config.tui.tick_rate_ms, 250);
        assert_eq!(config.output.format, ReportFormat::Summary);
    }
}
