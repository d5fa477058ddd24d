//! Config command handlers.
//!
//! Implements `config show|path|init|schema`. Human-oriented lines go to
//! stderr so that stdout carries only the YAML or JSON payload.

use super::output::exit_codes;
use crate::config::{
    CONFIG_FILE_NAMES, discover_config_file, generate_example_config, generate_json_schema,
    load_or_default, search_paths,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File name written by `config init`.
pub const DEFAULT_CONFIG_FILE: &str = ".ehr-compliance.yaml";

/// Print the effective configuration (defaults merged with the discovered file).
pub fn run_config_show(explicit: Option<&Path>) -> Result<i32> {
    let (config, loaded_from) = load_or_default(explicit).with_context(|| {
        explicit.map_or_else(
            || "failed to load config".to_string(),
            |path| format!("failed to load config {}", path.display()),
        )
    })?;
    if let Some(path) = &loaded_from {
        eprintln!("# Loaded from: {}", path.display());
    } else {
        eprintln!("# No config file found; showing defaults");
    }
    let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
    print!("{yaml}");
    Ok(exit_codes::SUCCESS)
}

/// Print the config search paths and the file that would be used.
pub fn run_config_path(explicit: Option<&Path>) -> Result<i32> {
    eprintln!("Config file search paths (in order):");
    for path in search_paths() {
        eprintln!("  {}", path.display());
    }
    eprintln!();
    eprintln!("Recognized file names:");
    for name in CONFIG_FILE_NAMES {
        eprintln!("  {name}");
    }
    eprintln!();
    match discover_config_file(explicit) {
        Some(path) if !path.exists() => {
            eprintln!("Config file does not exist: {}", path.display());
        }
        Some(path) => eprintln!("Active config file: {}", path.display()),
        None => eprintln!("No config file found."),
    }
    Ok(exit_codes::SUCCESS)
}

/// Write an example config into `dir`, refusing to overwrite.
pub fn init_config_in(dir: &Path) -> Result<PathBuf> {
    let target = dir.join(DEFAULT_CONFIG_FILE);
    if target.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first to re-initialize.",
            target.display()
        );
    }
    std::fs::write(&target, generate_example_config())
        .with_context(|| format!("failed to write {}", target.display()))?;
    Ok(target)
}

/// Write an example config into the current directory.
pub fn run_config_init() -> Result<i32> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let target = init_config_in(&cwd)?;
    eprintln!("Created {}", target.display());
    Ok(exit_codes::SUCCESS)
}

/// Print the JSON Schema of the config file, or write it to `output`.
pub fn run_config_schema(output: Option<&Path>) -> Result<i32> {
    let schema = generate_json_schema();
    match output {
        Some(path) => {
            std::fs::write(path, &schema)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Schema written to {}", path.display());
        }
        None => println!("{schema}"),
    }
    Ok(exit_codes::SUCCESS)
}
