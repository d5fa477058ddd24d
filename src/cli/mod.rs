//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod config;
mod output;
mod report;
mod run;

pub use config::{
    DEFAULT_CONFIG_FILE, init_config_in, run_config_init, run_config_path, run_config_schema,
    run_config_show,
};
pub use output::{OutputTarget, exit_codes, should_use_color, write_output};
pub use report::{ReportCommandConfig, run_report};
pub use run::run_wizard;

use crate::config::AppConfig;
use crate::model::Catalog;
use anyhow::{Context, Result};

/// Load the layer catalog named by the config, or the built-in one.
pub fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    match &config.catalog.file {
        Some(path) => {
            tracing::info!("Loading layer catalog from {}", path.display());
            Catalog::from_yaml_file(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display()))
        }
        None => Ok(Catalog::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_builtin_catalog() {
        let catalog = load_catalog(&AppConfig::default()).unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_load_missing_catalog_file() {
        let config = AppConfig::builder()
            .catalog_file(Some("/nonexistent/layers.yaml".into()))
            .build();
        let err = load_catalog(&config).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load catalog"));
    }
}
