//! Home screen: file prompt and the layers that will be reviewed.

use crate::tui::app::App;
use crate::tui::theme::{Styles, colors};
use crate::tui::widgets::truncate_to_width;
use crate::wizard::ADVERTISED_FORMATS;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render_home(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Intro
            Constraint::Length(7), // Upload prompt
            Constraint::Min(6),    // Layer preview
            Constraint::Length(3), // Start action
        ])
        .split(area);

    render_intro(frame, chunks[0]);
    render_upload(frame, chunks[1], app);
    render_layer_preview(frame, chunks[2], app);
    render_start(frame, chunks[3], app);
}

fn render_intro(frame: &mut Frame, area: Rect) {
    let intro = Paragraph::new(vec![
        Line::styled("EHR Multi-Layer Compliance Review", Styles::header_title()),
        Line::styled(
            "Upload an EHR document to review privacy, interoperability, security and ABDM readiness.",
            Styles::text_muted(),
        ),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(intro, area);
}

fn render_upload(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let inner_width = usize::from(area.width.saturating_sub(12));

    let cursor = if app.input.active && app.tick % 2 == 0 {
        "▏"
    } else {
        " "
    };
    let mut lines = vec![Line::from(vec![
        Span::styled("Path: ", Styles::label()),
        Span::styled(
            truncate_to_width(&app.input.buffer, inner_width),
            Styles::text(),
        ),
        Span::styled(cursor, Style::default().fg(scheme.accent)),
    ])];

    match app.navigator.uploaded_file() {
        Some(file) => {
            lines.push(Line::from(vec![
                Span::styled("Selected: ", Styles::label()),
                Span::styled(
                    truncate_to_width(&file.name(), inner_width),
                    Style::default().fg(scheme.success).bold(),
                ),
            ]));
            if !file.has_advertised_extension() {
                lines.push(Line::styled(
                    "Not one of the listed formats; it will be reviewed anyway.",
                    Styles::warning(),
                ));
            }
        }
        None => lines.push(Line::styled("No file selected", Styles::text_muted())),
    }
    lines.push(Line::from(vec![
        Span::styled("Supported formats: ", Styles::label()),
        Span::styled(ADVERTISED_FORMATS, Styles::text_muted()),
    ]));

    let border = if app.input.active {
        Styles::border_focused()
    } else {
        Styles::border()
    };
    let title = if app.input.active {
        " Upload EHR document (typing) "
    } else {
        " Upload EHR document [i] "
    };
    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(panel, area);
}

fn render_layer_preview(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .navigator
        .catalog()
        .layers()
        .iter()
        .enumerate()
        .map(|(i, layer)| {
            Line::from(vec![
                Span::styled(format!(" {}. ", i + 1), Styles::label()),
                Span::raw(format!("{} ", layer.kind.glyph())),
                Span::styled(layer.kind.title(), Styles::value()),
                Span::styled(" · ", Styles::label()),
                Span::styled(layer.kind.description(), Styles::text_muted()),
            ])
        })
        .collect();

    let title = format!(" {} compliance layers ", app.navigator.catalog().len());
    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        );
    frame.render_widget(panel, area);
}

fn render_start(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let line = if app.navigator.can_start() {
        Line::from(vec![
            Span::styled(
                " ▶ Start Analysis ",
                Style::default()
                    .fg(scheme.badge_fg_dark)
                    .bg(scheme.success)
                    .bold(),
            ),
            Span::styled("  press Enter or s", Styles::text_muted()),
        ])
    } else {
        Line::from(vec![
            Span::styled(" ▶ Start Analysis ", Style::default().fg(scheme.muted)),
            Span::styled("  select a file first", Styles::text_muted()),
        ])
    };

    let action = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP).border_style(Styles::border()));
    frame.render_widget(action, area);
}
