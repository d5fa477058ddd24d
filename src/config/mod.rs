//! Configuration module for ehr-compliance.
//!
//! - Type-safe configuration structures with serde defaults
//! - Validation through the [`Validatable`] trait
//! - YAML config file discovery and loading
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.ehr-compliance.yaml` file in the working directory or
//! `~/.config/ehr-compliance/`:
//!
//! ```yaml
//! output:
//!   format: markdown
//! tui:
//!   theme: light
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, CatalogConfig, OutputConfig, TuiConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    CONFIG_FILE_NAMES, ConfigFileError, discover_config_file, generate_example_config,
    load_config_file, load_or_default, search_paths,
};

/// Generate a JSON Schema for the config file format.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
