//! Terminal setup, the main loop, and top-level rendering.

use super::app::App;
use super::events::{Event, EventHandler, handle_key_event};
use super::theme::{FooterHints, Styles, colors, render_footer_hints, screen_badge};
use super::views;
use super::widgets::{MIN_HEIGHT, MIN_WIDTH, centered_rect, check_terminal_size, render_size_warning};
use crate::wizard::Screen;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::io::{self, stdout};

/// Run the TUI application until the user quits.
pub fn run_tui(app: &mut App, tick_rate_ms: u64) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    tracing::debug!("TUI started");

    let result = event_loop(&mut terminal, app, &EventHandler::new(tick_rate_ms));

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    tracing::debug!("TUI stopped");

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Resize(_, _) => {}
            Event::Tick => app.tick = app.tick.wrapping_add(1),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Main render function
pub(crate) fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);

    match app.screen() {
        Screen::Home => views::render_home(frame, chunks[1], app),
        Screen::Layer => views::render_layer(frame, chunks[1], app),
        Screen::Final => views::render_final_report(frame, chunks[1], app),
    }

    render_status_bar(frame, chunks[2], app);
    render_footer(frame, chunks[3], app);

    if app.overlays.show_help {
        render_help_overlay(frame, area);
    }
    if app.overlays.show_export {
        render_export_dialog(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let subtitle = match app.screen() {
        Screen::Home => "Upload a document to begin".to_string(),
        Screen::Layer => {
            let (position, total) = app.navigator.progress();
            format!("Reviewing layer {position} of {total}")
        }
        Screen::Final => "Compliance summary".to_string(),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled("ehr-compliance", Styles::header_title()),
        Span::raw(" "),
        screen_badge(app.screen()),
        Span::styled(" │ ", Style::default().fg(colors().muted)),
        Span::styled(subtitle, Styles::text()),
    ]))
    .block(Block::default().borders(Borders::BOTTOM).border_style(Styles::border()));
    frame.render_widget(header, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let file = app
        .navigator
        .uploaded_file()
        .map_or_else(|| "none".to_string(), |f| f.name());

    let mut spans = vec![
        Span::styled(" File: ", Styles::text_muted()),
        Span::styled(file, Style::default().fg(scheme.primary).bold()),
    ];

    if let Some(layer) = app.navigator.current_layer() {
        spans.push(Span::styled(" │ ", Style::default().fg(scheme.muted)));
        spans.push(Span::styled("Score: ", Styles::text_muted()));
        spans.push(Span::styled(format!("{}%", layer.score), Styles::score(layer.score)));
        spans.push(Span::styled(" │ ", Style::default().fg(scheme.muted)));
        if app.navigator.can_proceed() {
            spans.push(Span::styled("can proceed", Styles::success()));
        } else {
            spans.push(Span::styled("blocked", Styles::error()));
        }
    }

    spans.push(Span::styled(" │ ", Style::default().fg(scheme.muted)));
    spans.push(Span::styled("Theme: ", Styles::text_muted()));
    spans.push(Span::styled(super::theme::current_theme_name(), Styles::text()));

    let status = Paragraph::new(Line::from(spans)).style(Styles::status_bar());
    frame.render_widget(status, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(msg) = app.status_message() {
        let status_line = Line::from(vec![
            Span::styled("ℹ ", Style::default().fg(colors().accent)),
            Span::styled(msg, Style::default().fg(colors().accent).bold()),
        ]);
        let footer = Paragraph::new(status_line).alignment(Alignment::Center);
        frame.render_widget(footer, area);
        return;
    }

    let typing = app.screen() == Screen::Home && app.input.active;
    let hints = FooterHints::for_screen(app.screen(), typing);
    let footer = Paragraph::new(Line::from(render_footer_hints(&hints)))
        .alignment(Alignment::Center)
        .style(Styles::text_muted());
    frame.render_widget(footer, area);
}

fn help_line(keys: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<14} "), Style::default().fg(colors().accent)),
        Span::styled(desc, Style::default().fg(colors().text)),
    ])
}

fn help_section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(title, Style::default().fg(colors().primary).bold()))
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::styled(
            "━━━ Keyboard Shortcuts ━━━",
            Style::default().fg(colors().accent).bold(),
        ),
        Line::from(""),
        help_section("Upload"),
        help_line("i or /", "Focus the file prompt"),
        help_line("Enter", "Select the typed file / start analysis"),
        help_line("Esc", "Leave the prompt"),
        help_line("s", "Start analysis"),
        Line::from(""),
        help_section("Layer review"),
        help_line("Enter/n/→", "Next layer (score must be at least 70%)"),
        help_line("c/Esc", "Cancel and return home"),
        Line::from(""),
        help_section("Final report"),
        help_line("r", "Start a new analysis"),
        help_line("e", "Export report (JSON or Markdown)"),
        Line::from(""),
        help_section("Anywhere"),
        help_line("R", "Reset the session"),
        help_line("T", "Cycle theme"),
        help_line("?", "Toggle this help"),
        help_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        Line::styled("Press any key to close", Styles::text_muted()),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(Style::default().fg(colors().accent).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors().accent)),
    );
    frame.render_widget(help, popup_area);
}

fn render_export_dialog(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(40, 30, area);
    frame.render_widget(Clear, popup_area);

    let lines = vec![
        Line::styled("Export the final report", Styles::section_title()),
        Line::from(""),
        help_line("j", "JSON"),
        help_line("m", "Markdown"),
        Line::from(""),
        Line::styled("Esc to cancel", Styles::text_muted()),
    ];
    let dialog = Paragraph::new(lines).block(
        Block::default()
            .title(" Export ")
            .title_style(Style::default().fg(colors().accent).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors().accent)),
    );
    frame.render_widget(dialog, popup_area);
}
