//! Configuration file loading and discovery.

use super::types::AppConfig;
use crate::error::{ErrorContext, Result};
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".ehr-compliance.yaml",
    ".ehr-compliance.yml",
    "ehr-compliance.yaml",
    "ehr-compliance.yml",
];

/// Directory name under the user config dir.
const CONFIG_DIR_NAME: &str = "ehr-compliance";

/// Discover a config file by searching standard locations.
///
/// An explicit path is returned as is, whether or not it exists; the
/// search only runs without one.
///
/// Search order:
/// 1. Current directory
/// 2. User config directory (~/.config/ehr-compliance/)
/// 3. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    search_paths()
        .into_iter()
        .find_map(|dir| find_config_in_dir(&dir))
}

/// Directories searched when no explicit path is given, in order.
#[must_use]
pub fn search_paths() -> Vec<PathBuf> {
    let mut dirs_to_search = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs_to_search.push(cwd);
    }
    if let Some(config_dir) = dirs::config_dir() {
        dirs_to_search.push(config_dir.join(CONFIG_DIR_NAME));
    }
    if let Some(home) = dirs::home_dir() {
        dirs_to_search.push(home);
    }
    dirs_to_search
}

fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> std::result::Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from an explicit or discovered file, or return default.
///
/// An explicit path must exist and parse. A discovered file that fails to
/// load is skipped with a warning.
pub fn load_or_default(
    explicit_path: Option<&Path>,
) -> std::result::Result<(AppConfig, Option<PathBuf>), ConfigFileError> {
    if let Some(path) = explicit_path {
        let config = load_config_file(path)?;
        tracing::debug!("Loaded config from {}", path.display());
        return Ok((config, Some(path.to_path_buf())));
    }

    Ok(discover_config_file(None).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    ))
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence
    /// wherever it differs from the defaults.
    pub fn merge(&mut self, other: &Self) {
        let defaults = Self::default();

        if other.output.format != defaults.output.format {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
        if other.behavior.min_score.is_some() {
            self.behavior.min_score = other.behavior.min_score;
        }

        if other.tui.theme != defaults.tui.theme {
            self.tui.theme.clone_from(&other.tui.theme);
        }
        if other.tui.tick_rate_ms != defaults.tui.tick_rate_ms {
            self.tui.tick_rate_ms = other.tui.tick_rate_ms;
        }
        if other.tui.export_dir.is_some() {
            self.tui.export_dir.clone_from(&other.tui.export_dir);
        }

        if other.catalog.file.is_some() {
            self.catalog.file.clone_from(&other.catalog.file);
        }
    }

    /// Load from file and merge with CLI overrides.
    ///
    /// Fails with [`ComplianceError::Config`](crate::ComplianceError::Config)
    /// when `config_path` is given but cannot be loaded.
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> Result<(Self, Option<PathBuf>)> {
        let (mut config, loaded_from) = load_or_default(config_path).with_context(|| {
            config_path.map_or_else(
                || "loading config".to_string(),
                |path| format!("loading config {}", path.display()),
            )
        })?;
        config.merge(cli_overrides);
        Ok((config, loaded_from))
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_example_config() -> String {
    r"# EHR Compliance Configuration
# =============================
#
# Place this file at .ehr-compliance.yaml in the working directory or at
# ~/.config/ehr-compliance/ehr-compliance.yaml. CLI flags override it.

# Report output (the `report` command)
output:
  # Format: summary, json, markdown
  format: summary
  # Output file path (omit for stdout)
  # file: compliance-report.md
  no_color: false

behavior:
  quiet: false
  # Exit with code 1 when the overall score is below this value
  # min_score: 75

# Interactive wizard
tui:
  # Theme: dark, light, high-contrast
  theme: dark
  tick_rate_ms: 250
  # Directory for exported reports (omit for the working directory)
  # export_dir: ./reports

# Layer catalog (leave empty to use the built-in catalog)
# catalog:
#   file: ./layers.yaml
catalog: {}
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".ehr-compliance.yaml");
        std::fs::write(&config_path, "tui:\n  theme: light\n").unwrap();

        assert_eq!(find_config_in_dir(tmp.path()), Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        let yaml = r"
output:
  format: markdown
behavior:
  min_score: 80
tui:
  theme: high-contrast
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.output.format, ReportFormat::Markdown);
        assert_eq!(config.behavior.min_score, Some(80));
        assert_eq!(config.tui.theme, "high-contrast");
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_parse_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("broken.yaml");
        std::fs::write(&config_path, "tui: [unterminated").unwrap();
        assert!(matches!(
            load_config_file(&config_path),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::builder().theme("light").min_score(Some(60)).build();
        let overrides = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .min_score(Some(90))
            .build();

        base.merge(&overrides);

        assert_eq!(base.output.format, ReportFormat::Json);
        assert_eq!(base.behavior.min_score, Some(90));
        // Default theme in overrides does not clobber the file value
        assert_eq!(base.tui.theme, "light");
    }

    #[test]
    fn test_example_config_parses() {
        let config: AppConfig = serde_yaml::from_str(&generate_example_config()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom.yaml");
        std::fs::write(&config_path, "output:\n  no_color: true\n").unwrap();

        assert_eq!(discover_config_file(Some(&config_path)), Some(config_path));
    }

    #[test]
    fn test_discover_missing_explicit_path_skips_search() {
        let missing = Path::new("/nonexistent/typo.yaml");
        assert_eq!(
            discover_config_file(Some(missing)),
            Some(missing.to_path_buf())
        );
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let result = AppConfig::from_file_with_overrides(
            Some(Path::new("/nonexistent/typo.yaml")),
            &AppConfig::default(),
        );
        match result {
            Err(crate::ComplianceError::Config { context, source }) => {
                assert_eq!(context, "loading config /nonexistent/typo.yaml");
                assert!(matches!(source, ConfigFileError::NotFound(_)));
            }
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_explicit_config_is_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("ci.yaml");
        std::fs::write(&config_path, "behavior:\n  min_score: 90\ntui: [oops").unwrap();

        let result = AppConfig::from_file_with_overrides(Some(&config_path), &AppConfig::default());
        assert!(matches!(
            result,
            Err(crate::ComplianceError::Config {
                source: ConfigFileError::Parse(_),
                ..
            })
        ));
    }

    #[test]
    fn test_explicit_config_merged_with_overrides() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("ci.yaml");
        std::fs::write(&config_path, "behavior:\n  min_score: 90\ntui:\n  theme: light\n")
            .unwrap();

        let overrides = AppConfig::builder().quiet(true).build();
        let (config, loaded_from) =
            AppConfig::from_file_with_overrides(Some(&config_path), &overrides).unwrap();
        assert_eq!(loaded_from, Some(config_path));
        assert_eq!(config.behavior.min_score, Some(90));
        assert_eq!(config.tui.theme, "light");
        assert!(config.behavior.quiet);
    }
}
