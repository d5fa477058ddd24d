//! Layer review screen: score, radar, heat map and findings for one layer.

use crate::model::{Check, CheckStatus, LayerRecord};
use crate::quality::{LayerStats, PROCEED_THRESHOLD, ScoreBand, can_proceed};
use crate::tui::app::App;
use crate::tui::theme::{ColorScheme, Styles, colors, severity_badge, status_icon};
use crate::tui::widgets::{RadarChart, ScoreBar, truncate_to_width};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, Wrap},
};

const HEAT_BAR_WIDTH: u16 = 10;

pub fn render_layer(frame: &mut Frame, area: Rect, app: &App) {
    let Some(layer) = app.navigator.current_layer() else {
        return;
    };
    let findings_height = u16::try_from(layer.findings.len() * 2 + 2)
        .unwrap_or(u16::MAX)
        .min(8);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Title + progress
            Constraint::Min(10),                 // Score, radar, heat map
            Constraint::Length(findings_height), // Findings
            Constraint::Length(3),               // Action
        ])
        .split(area);

    render_title(frame, chunks[0], app, layer);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(28),
            Constraint::Percentage(34),
            Constraint::Percentage(38),
        ])
        .split(chunks[1]);
    render_score_panel(frame, columns[0], layer);
    render_radar(frame, columns[1], layer);
    render_heat_map(frame, columns[2], layer);

    render_findings(frame, chunks[2], layer);
    render_action(frame, chunks[3], app, layer);
}

fn render_title(frame: &mut Frame, area: Rect, app: &App, layer: &LayerRecord) {
    let scheme = colors();
    let (position, total) = app.navigator.progress();
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(vec![
            Span::raw(format!("{} ", layer.kind.glyph())),
            Span::styled(layer.name.clone(), Styles::header_title()),
        ]),
        Line::styled(layer.kind.description(), Styles::text_muted()),
    ]);
    frame.render_widget(title, halves[0]);

    let ratio = if total == 0 {
        0.0
    } else {
        position as f64 / total as f64
    };
    let progress = Gauge::default()
        .block(Block::default().borders(Borders::ALL).border_style(Styles::border()))
        .gauge_style(Style::default().fg(scheme.primary).bg(scheme.track))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("Layer {position} of {total}"));
    frame.render_widget(progress, halves[1]);
}

fn render_score_panel(frame: &mut Frame, area: Rect, layer: &LayerRecord) {
    let scheme = colors();
    let band = ScoreBand::from_score(layer.score);
    let color = scheme.band_color(band);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .gauge_style(Style::default().fg(color).bg(scheme.track))
        .percent(u16::from(layer.score.min(100)))
        .label(format!("{}% ({})", layer.score, band.label()));
    frame.render_widget(gauge, rows[0]);

    let stats = LayerStats::from_layer(layer);
    let count_line = |label: &'static str, count: usize, status: CheckStatus| {
        Line::from(vec![
            status_icon(status),
            Span::styled(format!(" {label:<9}"), Styles::label()),
            Span::styled(
                count.to_string(),
                Style::default().fg(scheme.status_color(status)).bold(),
            ),
        ])
    };
    let index = Paragraph::new(vec![
        count_line("Passed", stats.passed, CheckStatus::Pass),
        count_line("Warnings", stats.warnings, CheckStatus::Warning),
        count_line("Failed", stats.failed, CheckStatus::Fail),
        Line::from(vec![
            Span::styled("  Total     ", Styles::label()),
            Span::styled(stats.total.to_string(), Styles::value()),
        ]),
    ])
    .block(
        Block::default()
            .title(" Compliance Index ")
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(index, rows[1]);
}

fn render_radar(frame: &mut Frame, area: Rect, layer: &LayerRecord) {
    let radar = RadarChart::new(&layer.radar_points)
        .color(colors().score_color(layer.score))
        .block(
            Block::default()
                .title(" Coverage ")
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        );
    frame.render_widget(radar, area);
}

/// Heat-map bar colored by the score band; the row icon carries the status.
fn heat_bar(scheme: &ColorScheme, check: &Check) -> Line<'static> {
    Line::from(
        ScoreBar::new(check.score)
            .color(scheme.score_color(check.score))
            .spans(HEAT_BAR_WIDTH),
    )
}

fn render_heat_map(frame: &mut Frame, area: Rect, layer: &LayerRecord) {
    let name_width = usize::from(area.width.saturating_sub(HEAT_BAR_WIDTH + 12));
    let rows: Vec<Row> = layer
        .checks
        .iter()
        .map(|check| {
            Row::new(vec![
                Cell::from(status_icon(check.status)),
                Cell::from(truncate_to_width(&check.name, name_width)),
                Cell::from(heat_bar(&colors(), check)),
                Cell::from(Span::styled(
                    format!("{:>3}%", check.score),
                    Styles::score(check.score),
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(HEAT_BAR_WIDTH),
            Constraint::Length(4),
        ],
    )
    .column_spacing(1)
    .block(
        Block::default()
            .title(" Checks ")
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(table, area);
}

fn render_findings(frame: &mut Frame, area: Rect, layer: &LayerRecord) {
    let mut lines = Vec::new();
    for finding in &layer.findings {
        lines.push(Line::from(vec![
            severity_badge(finding.severity),
            Span::raw(" "),
            Span::styled(finding.message.clone(), Styles::text()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("   → ", Styles::label()),
            Span::styled(finding.fix.clone(), Styles::text_muted()),
        ]));
    }

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(format!(" Findings ({}) ", layer.findings.len()))
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(panel, area);
}

fn render_action(frame: &mut Frame, area: Rect, app: &App, layer: &LayerRecord) {
    let scheme = colors();
    let label = if app.navigator.is_last_layer() {
        "Generate Final Report"
    } else {
        "Next Layer"
    };

    let line = if can_proceed(layer) {
        Line::from(vec![
            Span::styled(
                format!(" ▶ {label} "),
                Style::default()
                    .fg(scheme.badge_fg_dark)
                    .bg(scheme.success)
                    .bold(),
            ),
            Span::styled("  Enter/n", Styles::text_muted()),
            Span::styled("   c cancel", Styles::text_muted()),
        ])
    } else {
        Line::from(vec![
            Span::styled(format!(" ▶ {label} "), Style::default().fg(scheme.muted)),
            Span::styled(
                format!("  Score below threshold ({PROCEED_THRESHOLD}%)"),
                Styles::error(),
            ),
        ])
    };

    let action = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP).border_style(Styles::border()));
    frame.render_widget(action, area);
}
