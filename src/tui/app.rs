//! TUI application state.
//!
//! [`App`] owns the [`Navigator`] and the presentation-only state around it:
//! the file prompt, overlays, and the status line. Wizard rules live in the
//! navigator; this type only translates their outcomes into messages.

use super::export::{ExportFormat, export_report};
use crate::wizard::{Navigator, Screen, Transition, UploadedFile};
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Text prompt for the file reference on the home screen.
#[derive(Debug, Clone, Default)]
pub struct FileInput {
    /// Prompt has keyboard focus
    pub active: bool,
    pub buffer: String,
}

impl FileInput {
    pub fn push(&mut self, c: char) {
        self.buffer.push(c);
    }

    pub fn pop(&mut self) {
        self.buffer.pop();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

/// Overlay visibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlays {
    pub show_help: bool,
    pub show_export: bool,
}

impl Overlays {
    pub const fn any_visible(&self) -> bool {
        self.show_help || self.show_export
    }

    pub fn close_all(&mut self) {
        self.show_help = false;
        self.show_export = false;
    }
}

/// Main application state
#[derive(Debug)]
pub struct App {
    pub(crate) navigator: Navigator,
    pub(crate) input: FileInput,
    pub(crate) overlays: Overlays,
    pub(crate) status_message: Option<String>,
    /// When true, the status message survives one extra keypress before clearing.
    pub(crate) status_sticky: bool,
    /// When the final report was reached
    pub(crate) report_generated_at: Option<DateTime<Local>>,
    pub(crate) export_dir: Option<PathBuf>,
    pub(crate) should_quit: bool,
    /// Animation tick counter
    pub(crate) tick: u64,
}

impl App {
    /// Create an app on the home screen with the prompt focused.
    #[must_use]
    pub fn new(navigator: Navigator) -> Self {
        Self {
            navigator,
            input: FileInput {
                active: true,
                buffer: String::new(),
            },
            overlays: Overlays::default(),
            status_message: None,
            status_sticky: false,
            report_generated_at: None,
            export_dir: None,
            should_quit: false,
            tick: 0,
        }
    }

    /// Directory for exported reports (working directory when unset).
    #[must_use]
    pub fn with_export_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.export_dir = dir;
        self
    }

    /// Pre-select a file, as if typed into the prompt.
    #[must_use]
    pub fn with_file(mut self, input: &str) -> Self {
        if let Some(file) = UploadedFile::from_input(input) {
            self.select(file);
            self.input.active = false;
        }
        self
    }

    #[must_use]
    pub const fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.navigator.screen()
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Set a status message to display.
    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Clear the status message.
    pub fn clear_status_message(&mut self) {
        if self.status_sticky {
            self.status_sticky = false;
        } else {
            self.status_message = None;
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.overlays.show_help = !self.overlays.show_help;
    }

    pub fn toggle_theme(&mut self) {
        let name = super::theme::toggle_theme();
        self.set_status_message(format!("Theme: {name}"));
    }

    // ------------------------------------------------------------------
    // Wizard actions
    // ------------------------------------------------------------------

    /// Select the file typed into the prompt. Blank input selects nothing.
    pub fn submit_file_input(&mut self) {
        let Some(file) = UploadedFile::from_input(&self.input.buffer) else {
            self.set_status_message("Enter a file path to select it");
            return;
        };
        self.select(file);
        self.input.clear();
        self.input.active = false;
    }

    fn select(&mut self, file: UploadedFile) {
        let advisory = !file.has_advertised_extension();
        let name = file.name();
        let transition = self.navigator.select_file(file);
        if self.apply(transition) {
            if advisory {
                self.set_status_message(format!(
                    "Selected {name} (not a listed format, accepted anyway)"
                ));
            } else {
                self.set_status_message(format!("Selected {name}"));
            }
        }
    }

    pub fn start_analysis(&mut self) {
        let transition = self.navigator.start_analysis();
        self.apply(transition);
    }

    pub fn advance(&mut self) {
        let transition = self.navigator.advance();
        if self.apply(transition) && self.screen() == Screen::Final {
            self.report_generated_at = Some(Local::now());
        }
    }

    pub fn cancel(&mut self) {
        let transition = self.navigator.cancel();
        if self.apply(transition) {
            self.back_home();
        }
    }

    pub fn restart(&mut self) {
        let transition = self.navigator.restart();
        if self.apply(transition) {
            self.back_home();
        }
    }

    pub fn reset(&mut self) {
        let transition = self.navigator.reset();
        self.apply(transition);
        self.back_home();
        self.set_status_message("Session reset");
    }

    fn back_home(&mut self) {
        self.input.clear();
        self.input.active = true;
        self.overlays.close_all();
        self.report_generated_at = None;
    }

    /// Show a blocked transition on the status line; true when state changed.
    fn apply(&mut self, transition: Transition) -> bool {
        match transition {
            Transition::Blocked(reason) => {
                self.set_status_message(reason.to_string());
                false
            }
            Transition::Moved { .. } | Transition::Updated => true,
        }
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    pub fn open_export(&mut self) {
        if self.screen() == Screen::Final {
            self.overlays.show_export = true;
        } else {
            self.set_status_message("Export is available on the final report");
        }
    }

    pub fn export(&mut self, format: ExportFormat) {
        self.overlays.show_export = false;
        let document = self.navigator.uploaded_file().map(UploadedFile::name);
        let result = export_report(
            format,
            self.navigator.catalog(),
            document,
            self.export_dir.as_deref(),
        );
        if result.success {
            self.set_status_message(result.message);
            self.status_sticky = true;
        } else {
            self.set_status_message(format!("Export failed: {}", result.message));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Catalog;

    fn app() -> App {
        App::new(Navigator::new(Catalog::builtin()))
    }

    #[test]
    fn test_new_app_starts_home_with_prompt() {
        let app = app();
        assert_eq!(app.screen(), Screen::Home);
        assert!(app.input.active);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_submit_blank_input_selects_nothing() {
        let mut app = app();
        app.input.buffer = "   ".to_string();
        app.submit_file_input();
        assert!(app.navigator().uploaded_file().is_none());
        assert!(app.input.active);
    }

    #[test]
    fn test_submit_file_then_start() {
        let mut app = app();
        app.input.buffer = "records/discharge.pdf".to_string();
        app.submit_file_input();
        assert_eq!(app.status_message(), Some("Selected discharge.pdf"));
        assert!(!app.input.active);

        app.start_analysis();
        assert_eq!(app.screen(), Screen::Layer);
    }

    #[test]
    fn test_unlisted_extension_is_advisory() {
        let app = app().with_file("scan.png");
        assert!(app.navigator().uploaded_file().is_some());
        assert!(app.status_message().unwrap_or("").contains("accepted anyway"));
    }

    #[test]
    fn test_start_without_file_reports_block() {
        let mut app = app();
        app.start_analysis();
        assert_eq!(app.screen(), Screen::Home);
        assert_eq!(
            app.status_message(),
            Some("Select a file before starting the analysis")
        );
    }

    #[test]
    fn test_reaching_final_stamps_report_time() {
        let mut app = app().with_file("a.json");
        app.start_analysis();
        for _ in 0..4 {
            app.advance();
        }
        assert_eq!(app.screen(), Screen::Final);
        assert!(app.report_generated_at.is_some());

        app.restart();
        assert_eq!(app.screen(), Screen::Home);
        assert!(app.report_generated_at.is_none());
        assert!(app.navigator().uploaded_file().is_none());
    }

    #[test]
    fn test_export_only_on_final() {
        let mut app = app();
        app.open_export();
        assert!(!app.overlays.show_export);
    }

    #[test]
    fn test_sticky_status_survives_one_clear() {
        let mut app = app();
        app.set_status_message("Exported");
        app.status_sticky = true;
        app.clear_status_message();
        assert_eq!(app.status_message(), Some("Exported"));
        app.clear_status_message();
        assert_eq!(app.status_message(), None);
    }
}
