//! Run command handler.
//!
//! Implements the `run` subcommand: the interactive compliance wizard.

use super::output::exit_codes;
use crate::config::TuiConfig;
use crate::model::Catalog;
use crate::tui::{App, Theme, run_tui, set_theme};
use crate::wizard::Navigator;
use anyhow::{Context, Result};

/// Run the interactive wizard until the user quits.
///
/// `file` pre-selects a document, skipping the upload prompt. With
/// `use_color` off the high-contrast scheme replaces the configured theme.
pub fn run_wizard(
    catalog: Catalog,
    tui: &TuiConfig,
    use_color: bool,
    file: Option<&str>,
) -> Result<i32> {
    let theme = wizard_theme(tui, use_color);
    tracing::debug!("Starting wizard with theme {}", theme.name);
    set_theme(theme);

    let mut app = App::new(Navigator::new(catalog)).with_export_dir(tui.export_dir.clone());
    if let Some(file) = file {
        app = app.with_file(file);
    }

    run_tui(&mut app, tui.tick_rate_ms).context("terminal error while running the wizard")?;
    Ok(exit_codes::SUCCESS)
}

fn wizard_theme(tui: &TuiConfig, use_color: bool) -> Theme {
    if use_color {
        Theme::from_name(&tui.theme)
    } else {
        Theme::high_contrast()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizard_theme_follows_config() {
        let tui = TuiConfig {
            theme: "light".to_string(),
            ..TuiConfig::default()
        };
        assert_eq!(wizard_theme(&tui, true).name, "light");
    }

    #[test]
    fn test_no_color_forces_high_contrast() {
        let tui = TuiConfig {
            theme: "light".to_string(),
            ..TuiConfig::default()
        };
        assert_eq!(wizard_theme(&tui, false).name, "high-contrast");
        assert_eq!(wizard_theme(&TuiConfig::default(), false).name, "high-contrast");
    }
}
