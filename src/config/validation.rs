//! Configuration validation.

use super::types::{AppConfig, BehaviorConfig, CatalogConfig, OutputConfig, TuiConfig};
use crate::error::{ComplianceError, Result};
use crate::model::MAX_SCORE;
use crate::tui::THEME_NAMES;

// ============================================================================
// Configuration Error
// ============================================================================

/// A single invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors.extend(self.tui.validate());
        errors.extend(self.catalog.validate());
        errors
    }
}

impl AppConfig {
    /// Consume the config, failing with every validation problem joined.
    pub fn validated(self) -> Result<Self> {
        let problems = self.validate();
        if problems.is_empty() {
            return Ok(self);
        }
        let joined = problems
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(ComplianceError::validation(joined))
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(parent) = self.file.as_ref().and_then(|f| f.parent()) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("Parent directory does not exist: {}", parent.display()),
                ));
            }
        }
        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(min) = self.min_score {
            if min > MAX_SCORE {
                errors.push(ConfigError::new(
                    "behavior.min_score",
                    format!("Minimum score must be between 0 and 100, got {min}"),
                ));
            }
        }
        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !THEME_NAMES.contains(&self.theme.to_lowercase().as_str()) {
            errors.push(ConfigError::new(
                "tui.theme",
                format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    THEME_NAMES.join(", ")
                ),
            ));
        }
        if !(16..=5000).contains(&self.tick_rate_ms) {
            errors.push(ConfigError::new(
                "tui.tick_rate_ms",
                format!(
                    "Tick rate must be between 16 and 5000 ms, got {}",
                    self.tick_rate_ms
                ),
            ));
        }
        if let Some(dir) = &self.export_dir {
            if !dir.is_dir() {
                errors.push(ConfigError::new(
                    "tui.export_dir",
                    format!("Not a directory: {}", dir.display()),
                ));
            }
        }
        errors
    }
}

impl Validatable for CatalogConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(file) = &self.file {
            if !file.is_file() {
                errors.push(ConfigError::new(
                    "catalog.file",
                    format!("Catalog file not found: {}", file.display()),
                ));
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_validated_joins_problems() {
        let config = AppConfig::builder().theme("neon").min_score(Some(120)).build();
        match config.validated() {
            Err(ComplianceError::Validation(msg)) => {
                assert!(msg.contains("behavior.min_score: "));
                assert!(msg.contains("; tui.theme: "));
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
        assert!(AppConfig::default().validated().is_ok());
    }

    #[test]
    fn test_tui_config_validation() {
        let invalid = TuiConfig {
            theme: "neon".to_string(),
            ..TuiConfig::default()
        };
        let errors = invalid.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "tui.theme");

        let hc = TuiConfig {
            theme: "High-Contrast".to_string(),
            ..TuiConfig::default()
        };
        assert!(hc.is_valid());

        let too_fast = TuiConfig {
            tick_rate_ms: 1,
            ..TuiConfig::default()
        };
        assert!(!too_fast.is_valid());
    }

    #[test]
    fn test_min_score_range() {
        let invalid = BehaviorConfig {
            min_score: Some(101),
            ..BehaviorConfig::default()
        };
        assert!(!invalid.is_valid());
        let valid = BehaviorConfig {
            min_score: Some(100),
            ..BehaviorConfig::default()
        };
        assert!(valid.is_valid());
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = CatalogConfig {
            file: Some(PathBuf::from("/nonexistent/catalog.yaml")),
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().starts_with("catalog.file: "));
    }

    #[test]
    fn test_output_parent_must_exist() {
        let config = OutputConfig {
            file: Some(PathBuf::from("/nonexistent/dir/report.json")),
            ..OutputConfig::default()
        };
        assert!(!config.is_valid());
        let local = OutputConfig {
            file: Some(PathBuf::from("report.json")),
            ..OutputConfig::default()
        };
        assert!(local.is_valid());
    }
}
