//! Interactive review wizard using ratatui.
//!
//! The TUI renders the [`Navigator`](crate::wizard::Navigator) state and
//! turns key presses into navigator actions. Screens are dispatched with a
//! `match` on [`Screen`](crate::wizard::Screen):
//! - home: file prompt and layer preview
//! - layer: score, radar chart, heat map and findings
//! - final: overall figures, per-layer rows and recommendations

mod app;
mod events;
pub(crate) mod export;
pub mod theme;
mod ui;
mod views;
pub(crate) mod widgets;

pub use app::{App, FileInput, Overlays};
pub use events::Event;
pub use export::{ExportFormat, ExportResult, export_report};
pub use theme::{
    ColorScheme, FooterHints, Styles, THEME_NAMES, Theme, colors, current_theme_name, set_theme,
    toggle_theme,
};
pub use ui::run_tui;
