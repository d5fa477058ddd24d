//! Final report screen.

use crate::quality::ComplianceSummary;
use crate::tui::app::App;
use crate::tui::theme::{Styles, colors, severity_badge};
use crate::tui::widgets::{ScoreBar, truncate_to_width};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, Wrap},
};

const LAYER_BAR_WIDTH: u16 = 20;

pub fn render_final_report(frame: &mut Frame, area: Rect, app: &App) {
    // Figures are derived from the catalog on every draw
    let summary = ComplianceSummary::from_catalog(app.navigator.catalog());
    let recs_height = u16::try_from(summary.recommendations.len() + 2)
        .unwrap_or(u16::MAX)
        .clamp(3, 8);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),           // Headline figures
            Constraint::Min(6),              // Per-layer rows
            Constraint::Length(recs_height), // Recommendations
            Constraint::Length(3),           // Actions
        ])
        .split(area);

    render_headline(frame, chunks[0], app, &summary);
    render_layer_table(frame, chunks[1], app, &summary);
    render_recommendations(frame, chunks[2], &summary);
    render_actions(frame, chunks[3]);
}

fn render_headline(frame: &mut Frame, area: Rect, app: &App, summary: &ComplianceSummary) {
    let scheme = colors();
    let color = scheme.band_color(summary.overall_band);
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Overall Compliance ")
                .title_style(Styles::section_title())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .gauge_style(Style::default().fg(color).bg(scheme.track))
        .percent(u16::from(summary.overall_score.min(100)))
        .label(format!(
            "{}% ({})",
            summary.overall_score,
            summary.overall_band.label()
        ));
    frame.render_widget(gauge, halves[0]);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Checks passed   ", Styles::label()),
            Span::styled(
                format!("{}/{}", summary.passed_checks, summary.total_checks),
                Styles::value(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Success rate    ", Styles::label()),
            Span::styled(
                format!("{}%", summary.success_rate),
                Styles::score(summary.success_rate),
            ),
        ]),
    ];
    if let Some(abdm) = summary.abdm_readiness {
        lines.push(Line::from(vec![
            Span::styled("ABDM Readiness  ", Styles::label()),
            Span::styled(format!("{abdm}%"), Styles::score(abdm)),
        ]));
    }
    if let Some(at) = app.report_generated_at {
        lines.push(Line::from(vec![
            Span::styled("Generated       ", Styles::label()),
            Span::styled(at.format("%Y-%m-%d %H:%M:%S").to_string(), Styles::text_muted()),
        ]));
    }

    let document = app
        .navigator
        .uploaded_file()
        .map_or_else(|| "Summary".to_string(), |f| f.name());
    let title = format!(
        " {} ",
        truncate_to_width(&document, usize::from(halves[1].width.saturating_sub(4)))
    );
    let stats = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(stats, halves[1]);
}

fn render_layer_table(frame: &mut Frame, area: Rect, app: &App, summary: &ComplianceSummary) {
    let rows: Vec<Row> = summary
        .layers
        .iter()
        .map(|layer| {
            Row::new(vec![
                Cell::from(format!("{} {}", layer.kind.glyph(), layer.name)),
                Cell::from(Line::from(ScoreBar::new(layer.score).spans(LAYER_BAR_WIDTH))),
                Cell::from(Span::styled(
                    format!("{:>3}%", layer.score),
                    Styles::score(layer.score),
                )),
                Cell::from(format!("{} checks", layer.stats.total)),
                Cell::from(Span::styled(
                    format!("{} passed", layer.stats.passed),
                    Styles::success(),
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(LAYER_BAR_WIDTH),
            Constraint::Length(4),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(vec!["Layer", "", "Score", "Checks", "Passed"])
            .style(Styles::label())
            .bottom_margin(1),
    )
    .column_spacing(2)
    .block(
        Block::default()
            .title(format!(" Layers ({}) ", app.navigator.catalog().len()))
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(table, area);
}

fn render_recommendations(frame: &mut Frame, area: Rect, summary: &ComplianceSummary) {
    let lines: Vec<Line> = if summary.recommendations.is_empty() {
        vec![Line::styled("No recommendations", Styles::text_muted())]
    } else {
        summary
            .recommendations
            .iter()
            .map(|rec| {
                Line::from(vec![
                    severity_badge(rec.severity),
                    Span::raw(" "),
                    Span::styled(rec.message.clone(), Styles::text()),
                    Span::styled(format!("  ({})", rec.layer), Styles::label()),
                ])
            })
            .collect()
    };

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Key Recommendations ")
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(panel, area);
}

fn render_actions(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let line = Line::from(vec![
        Span::styled(
            " ↺ Start New Analysis ",
            Style::default()
                .fg(scheme.badge_fg_dark)
                .bg(scheme.primary)
                .bold(),
        ),
        Span::styled("  r", Styles::text_muted()),
        Span::raw("     "),
        Span::styled(
            " ⇩ Export Report ",
            Style::default().fg(scheme.badge_fg_dark).bg(scheme.accent),
        ),
        Span::styled("  e", Styles::text_muted()),
    ]);

    let actions = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP).border_style(Styles::border()));
    frame.render_widget(actions, area);
}
