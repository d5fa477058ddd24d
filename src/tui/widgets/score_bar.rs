//! Proportional score bar used by the heat map and the final report.

use crate::model::MAX_SCORE;
use crate::quality::round_half_up;
use crate::tui::theme::colors;
use ratatui::{prelude::*, widgets::Widget};

const FILLED: char = '█';
const EMPTY: char = '░';

/// Filled cells for `score` in a bar `width` cells wide.
#[must_use]
pub fn bar_cells(score: u8, width: u16) -> u16 {
    let score = u64::from(score.min(MAX_SCORE));
    let filled = round_half_up(score * u64::from(width), u64::from(MAX_SCORE));
    u16::try_from(filled).unwrap_or(width).min(width)
}

/// Horizontal bar filled in proportion to a 0..=100 score.
#[derive(Debug, Clone, Copy)]
pub struct ScoreBar {
    score: u8,
    color: Option<Color>,
}

impl ScoreBar {
    #[must_use]
    pub const fn new(score: u8) -> Self {
        Self { score, color: None }
    }

    /// Override the band color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    fn fill_color(&self) -> Color {
        self.color
            .unwrap_or_else(|| colors().score_color(self.score))
    }

    /// The bar as inline spans, for table cells and paragraphs.
    #[must_use]
    pub fn spans(&self, width: u16) -> Vec<Span<'static>> {
        let filled = bar_cells(self.score, width);
        vec![
            Span::styled(
                FILLED.to_string().repeat(usize::from(filled)),
                Style::default().fg(self.fill_color()),
            ),
            Span::styled(
                EMPTY.to_string().repeat(usize::from(width - filled)),
                Style::default().fg(colors().track),
            ),
        ]
    }
}

impl Widget for ScoreBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let filled = bar_cells(self.score, area.width);
        let fill = Style::default().fg(self.fill_color());
        let track = Style::default().fg(colors().track);

        for i in 0..area.width {
            let (ch, style) = if i < filled {
                (FILLED, fill)
            } else {
                (EMPTY, track)
            };
            if let Some(cell) = buf.cell_mut((area.x + i, area.y)) {
                cell.set_char(ch).set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_cells() {
        assert_eq!(bar_cells(0, 20), 0);
        assert_eq!(bar_cells(100, 20), 20);
        assert_eq!(bar_cells(72, 20), 14);
        // 7.5 rounds up
        assert_eq!(bar_cells(75, 10), 8);
        assert_eq!(bar_cells(250, 10), 10);
    }

    #[test]
    fn test_spans_cover_width() {
        let spans = ScoreBar::new(85).spans(10);
        let total: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn test_render_into_buffer() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        ScoreBar::new(50).render(area, &mut buf);
        assert_eq!(buf[(4, 0)].symbol(), "█");
        assert_eq!(buf[(5, 0)].symbol(), "░");
    }
}
