//! Centralized theme and color scheme for the TUI.
//!
//! This module provides consistent styling across the wizard screens.

use crate::model::{CheckStatus, Severity};
use crate::quality::ScoreBand;
use crate::wizard::Screen;
use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Names accepted by [`Theme::from_name`] and the `tui.theme` config key.
pub const THEME_NAMES: &[&str] = &["dark", "light", "high-contrast"];

/// Color scheme for the TUI application.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Check status colors
    pub pass: Color,
    pub warn: Color,
    pub fail: Color,

    // Severity colors
    pub high: Color,
    pub medium: Color,
    pub low: Color,

    // UI element colors
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub highlight: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Badge foreground colors (for text on colored backgrounds)
    pub badge_fg_dark: Color,
    pub badge_fg_light: Color,

    /// Background of an unfilled bar cell
    pub track: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            pass: Color::Green,
            warn: Color::Yellow,
            fail: Color::Red,

            high: Color::Red,
            medium: Color::Yellow,
            low: Color::Cyan,

            primary: Color::Cyan,
            secondary: Color::Blue,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,
            highlight: Color::Yellow,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,

            track: Color::Rgb(50, 50, 60),
        }
    }

    /// Light theme
    #[must_use]
    pub const fn light() -> Self {
        Self {
            pass: Color::Rgb(0, 128, 0),
            warn: Color::Rgb(180, 140, 0),
            fail: Color::Rgb(200, 0, 0),

            high: Color::Rgb(200, 0, 0),
            medium: Color::Rgb(180, 140, 0),
            low: Color::Rgb(0, 128, 128),

            primary: Color::Rgb(0, 100, 180),
            secondary: Color::Rgb(0, 0, 200),
            accent: Color::Rgb(180, 100, 0),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(180, 180, 180),
            border_focused: Color::Rgb(0, 100, 180),
            background_alt: Color::Rgb(235, 235, 240),
            text: Color::Black,
            text_muted: Color::Rgb(90, 90, 90),
            highlight: Color::Rgb(180, 100, 0),

            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 140, 0),
            error: Color::Rgb(200, 0, 0),

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,

            track: Color::Rgb(220, 220, 225),
        }
    }

    /// High contrast theme (accessibility)
    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            pass: Color::LightGreen,
            warn: Color::LightYellow,
            fail: Color::LightRed,

            high: Color::LightRed,
            medium: Color::LightYellow,
            low: Color::LightCyan,

            primary: Color::White,
            secondary: Color::LightCyan,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::LightYellow,
            background_alt: Color::Black,
            text: Color::White,
            text_muted: Color::White,
            highlight: Color::LightYellow,

            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::Black,

            track: Color::DarkGray,
        }
    }

    #[must_use]
    pub const fn status_color(&self, status: CheckStatus) -> Color {
        match status {
            CheckStatus::Pass => self.pass,
            CheckStatus::Warning => self.warn,
            CheckStatus::Fail => self.fail,
        }
    }

    #[must_use]
    pub const fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }

    #[must_use]
    pub const fn severity_badge_fg(&self, severity: Severity) -> Color {
        match severity {
            Severity::High => self.badge_fg_light,
            Severity::Medium | Severity::Low => self.badge_fg_dark,
        }
    }

    #[must_use]
    pub const fn band_color(&self, band: ScoreBand) -> Color {
        match band {
            ScoreBand::Good => self.success,
            ScoreBand::Fair => self.warning,
            ScoreBand::Poor => self.error,
        }
    }

    /// Color for a raw 0..=100 score.
    #[must_use]
    pub const fn score_color(&self, score: u8) -> Color {
        self.band_color(ScoreBand::from_score(score))
    }
}

// ============================================================================
// Global theme
// ============================================================================

static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// A named color scheme.
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            name: "dark",
        }
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    /// Theme by name; unknown names fall back to dark.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Next theme in the dark -> light -> high-contrast cycle.
    #[must_use]
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

pub fn current_theme_name() -> &'static str {
    THEME.read().unwrap_or_else(PoisonError::into_inner).name
}

pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Switch to the next theme, returning its name.
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Colors of the active theme.
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Common styles
// ============================================================================

pub struct Styles;

impl Styles {
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn section_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn label() -> Style {
        Style::default().fg(colors().muted)
    }

    pub fn value() -> Style {
        Style::default().fg(colors().text).bold()
    }

    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    pub fn status_bar() -> Style {
        Style::default().bg(colors().background_alt)
    }

    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn success() -> Style {
        Style::default().fg(colors().success)
    }

    pub fn warning() -> Style {
        Style::default().fg(colors().warning)
    }

    pub fn error() -> Style {
        Style::default().fg(colors().error)
    }

    pub fn score(score: u8) -> Style {
        Style::default().fg(colors().score_color(score)).bold()
    }
}

// ============================================================================
// Badges
// ============================================================================

/// Inline ` HIGH ` style badge.
pub fn severity_badge(severity: Severity) -> Span<'static> {
    let scheme = colors();
    let style = Style::default()
        .fg(scheme.severity_badge_fg(severity))
        .bg(scheme.severity_color(severity));
    let style = if severity == Severity::High {
        style.bold()
    } else {
        style
    };
    Span::styled(format!(" {} ", severity.label().to_uppercase()), style)
}

/// Check status icon in its status color.
pub fn status_icon(status: CheckStatus) -> Span<'static> {
    Span::styled(
        status.symbol(),
        Style::default().fg(colors().status_color(status)).bold(),
    )
}

/// Screen indicator shown in the header.
pub fn screen_badge(screen: Screen) -> Span<'static> {
    let scheme = colors();
    let color = match screen {
        Screen::Home => scheme.primary,
        Screen::Layer => scheme.accent,
        Screen::Final => scheme.success,
    };
    Span::styled(
        format!(" {} ", screen.name().to_uppercase()),
        Style::default().fg(scheme.badge_fg_dark).bg(color).bold(),
    )
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Screen-specific footer hints
pub struct FooterHints;

impl FooterHints {
    /// Hints for a screen; `typing` is set while the file prompt has focus.
    #[must_use]
    pub fn for_screen(screen: Screen, typing: bool) -> Vec<(&'static str, &'static str)> {
        if typing {
            return vec![
                ("Enter", "select file"),
                ("Esc", "stop typing"),
                ("Ctrl+C", "quit"),
            ];
        }

        let mut hints = Self::global();
        match screen {
            Screen::Home => {
                hints.insert(0, ("i", "type path"));
                hints.insert(1, ("Enter/s", "start analysis"));
            }
            Screen::Layer => {
                hints.insert(0, ("Enter/n", "next"));
                hints.insert(1, ("c/Esc", "cancel"));
            }
            Screen::Final => {
                hints.insert(0, ("r", "new analysis"));
                hints.insert(1, ("e", "export"));
            }
        }
        hints
    }

    /// Global hints (always shown)
    #[must_use]
    pub fn global() -> Vec<(&'static str, &'static str)> {
        vec![("R", "reset"), ("T", "theme"), ("?", "help"), ("q", "quit")]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}
