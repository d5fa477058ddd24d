//! Event handling for the TUI.
//!
//! - Key polling with a tick for the prompt cursor
//! - Dispatch of keys to the overlay, the prompt, or the current screen

use super::app::App;
use super::export::ExportFormat;
use crate::wizard::Screen;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Application event
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal tick (for animations)
    Tick,
    /// Resize event
    Resize(u16, u16),
}

/// Event handler
pub struct EventHandler {
    /// Tick rate in milliseconds
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub const fn new(tick_rate: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Event, std::io::Error> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Ok(Event::Key(key)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(250)
    }
}

/// Handle key events and update app state
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    app.clear_status_message();

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // Help closes on any key
    if app.overlays.show_help {
        app.overlays.show_help = false;
        return;
    }

    if app.overlays.show_export {
        match key.code {
            KeyCode::Char('j') => app.export(ExportFormat::Json),
            KeyCode::Char('m') => app.export(ExportFormat::Markdown),
            KeyCode::Esc | KeyCode::Char('q') => app.overlays.show_export = false,
            _ => {}
        }
        return;
    }

    if app.screen() == Screen::Home && app.input.active {
        handle_prompt_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') | KeyCode::F(1) => app.toggle_help(),
        KeyCode::Char('T') => app.toggle_theme(),
        KeyCode::Char('R') => app.reset(),
        _ => match app.screen() {
            Screen::Home => handle_home_key(app, key),
            Screen::Layer => handle_layer_key(app, key),
            Screen::Final => handle_final_key(app, key),
        },
    }
}

/// Keys while the file prompt has focus: everything printable is text.
fn handle_prompt_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_file_input(),
        KeyCode::Esc => app.input.active = false,
        KeyCode::Backspace => app.input.pop(),
        KeyCode::Char(c) => app.input.push(c),
        _ => {}
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('i' | '/') => app.input.active = true,
        KeyCode::Enter | KeyCode::Char('s') => app.start_analysis(),
        _ => {}
    }
}

fn handle_layer_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('n') | KeyCode::Right => app.advance(),
        KeyCode::Esc | KeyCode::Char('c') => app.cancel(),
        _ => {}
    }
}

fn handle_final_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('r') | KeyCode::Enter => app.restart(),
        KeyCode::Char('e') => app.open_export(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Catalog;
    use crate::wizard::Navigator;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app() -> App {
        App::new(Navigator::new(Catalog::builtin()))
    }

    #[test]
    fn test_prompt_captures_shortcut_letters() {
        let mut app = app();
        type_str(&mut app, "q?R.pdf");
        assert!(!app.should_quit());
        assert_eq!(app.input.buffer, "q?R.pdf");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input.buffer, "q?R.pd");
    }

    #[test]
    fn test_full_walkthrough_by_keys() {
        let mut app = app();
        type_str(&mut app, "patient.json");
        press(&mut app, KeyCode::Enter);
        assert!(app.navigator().uploaded_file().is_some());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Layer);
        assert_eq!(app.navigator().current_layer_index(), 0);

        for expected in 1..4 {
            press(&mut app, KeyCode::Char('n'));
            assert_eq!(app.navigator().current_layer_index(), expected);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Final);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.screen(), Screen::Home);
        assert!(app.input.active);
    }

    #[test]
    fn test_start_without_file_stays_home() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.screen(), Screen::Home);
        assert!(app.status_message().is_some());
    }

    #[test]
    fn test_cancel_from_layer() {
        let mut app = app().with_file("a.pdf");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Home);
        assert!(app.navigator().state().is_initial());
    }

    #[test]
    fn test_help_overlay_swallows_next_key() {
        let mut app = app().with_file("a.pdf");
        press(&mut app, KeyCode::Char('?'));
        assert!(app.overlays.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.overlays.show_help);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits_while_typing() {
        let mut app = app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit());
    }

    #[test]
    fn test_reset_from_layer() {
        let mut app = app().with_file("a.pdf");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('R'));
        assert!(app.navigator().state().is_initial());
        assert_eq!(app.status_message(), Some("Session reset"));
    }

    #[test]
    fn test_export_dialog_keys() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut app = app()
            .with_file("a.pdf")
            .with_export_dir(Some(tmp.path().to_path_buf()));
        press(&mut app, KeyCode::Enter);
        for _ in 0..4 {
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.screen(), Screen::Final);

        press(&mut app, KeyCode::Char('e'));
        assert!(app.overlays.show_export);
        press(&mut app, KeyCode::Char('m'));
        assert!(!app.overlays.show_export);
        assert!(app.status_message().unwrap_or("").starts_with("Exported to"));

        let files: Vec<_> = std::fs::read_dir(tmp.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
    }
}
