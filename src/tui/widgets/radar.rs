//! Radar (spider) chart drawn on a braille canvas.

use crate::model::RadarPoint;
use crate::tui::theme::colors;
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        Block, Widget,
        canvas::{Canvas, Line as CanvasLine},
    },
};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Grid rings as fractions of the full mark.
const RINGS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];
/// Distance of axis labels from the centre.
const LABEL_RADIUS: f64 = 1.18;
const BOUND: f64 = 1.45;

fn axis_angle(index: usize, count: usize) -> f64 {
    // First axis points up, the rest follow clockwise
    FRAC_PI_2 - TAU * index as f64 / count as f64
}

/// Polygon vertices for the points, each at `ratio` along its axis.
///
/// Coordinates are on a unit circle centred at the origin.
#[must_use]
pub fn radar_vertices(points: &[RadarPoint]) -> Vec<(f64, f64)> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let angle = axis_angle(i, points.len());
            let r = p.ratio();
            (r * angle.cos(), r * angle.sin())
        })
        .collect()
}

fn ring_vertices(count: usize, radius: f64) -> Vec<(f64, f64)> {
    (0..count)
        .map(|i| {
            let angle = axis_angle(i, count);
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Closed polygon as line segments.
fn polygon(vertices: &[(f64, f64)], color: Color) -> Vec<CanvasLine> {
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(&(x1, y1), &(x2, y2))| CanvasLine::new(x1, y1, x2, y2, color))
        .collect()
}

/// Radar chart over a layer's radar points.
pub struct RadarChart<'a> {
    points: &'a [RadarPoint],
    block: Option<Block<'a>>,
    color: Color,
}

impl<'a> RadarChart<'a> {
    pub fn new(points: &'a [RadarPoint]) -> Self {
        Self {
            points,
            block: None,
            color: colors().primary,
        }
    }

    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for RadarChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let scheme = colors();
        let count = self.points.len();
        let data = polygon(&radar_vertices(self.points), self.color);
        let labels: Vec<(f64, f64, String, u8)> = ring_vertices(count, LABEL_RADIUS)
            .into_iter()
            .zip(self.points)
            .map(|((x, y), p)| (x, y, p.subject.clone(), p.score))
            .collect();

        let mut canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-BOUND, BOUND])
            .y_bounds([-BOUND, BOUND])
            .paint(move |ctx| {
                if count < 3 {
                    // Too few axes for a polygon; fall back to spokes only
                    for (x, y) in radar_vertices(self.points) {
                        ctx.draw(&CanvasLine::new(0.0, 0.0, x, y, self.color));
                    }
                } else {
                    for radius in RINGS {
                        for line in polygon(&ring_vertices(count, radius), scheme.muted) {
                            ctx.draw(&line);
                        }
                    }
                    for (x, y) in ring_vertices(count, 1.0) {
                        ctx.draw(&CanvasLine::new(0.0, 0.0, x, y, scheme.border));
                    }
                    ctx.layer();
                    for line in &data {
                        ctx.draw(line);
                    }
                }
                for (x, y, subject, score) in &labels {
                    // Shift left-side labels so they end near the axis tip
                    let offset = if *x < -0.1 {
                        (subject.len() as f64 + 5.0) * 0.04
                    } else {
                        0.0
                    };
                    ctx.print(
                        x - offset,
                        *y,
                        Line::from(vec![
                            Span::styled(subject.clone(), Style::default().fg(scheme.text)),
                            Span::styled(
                                format!(" {score}"),
                                Style::default().fg(scheme.score_color(*score)),
                            ),
                        ]),
                    );
                }
            });

        if let Some(block) = self.block {
            canvas = canvas.block(block);
        }
        canvas.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_first_vertex_points_up() {
        let points = vec![
            RadarPoint::new("SPDI", 85),
            RadarPoint::new("ABDM HDM", 75),
            RadarPoint::new("Consent", 70),
            RadarPoint::new("Patient Rights", 82),
        ];
        let v = radar_vertices(&points);
        assert_eq!(v.len(), 4);
        assert!(approx(v[0].0, 0.0));
        assert!(approx(v[0].1, 0.85));
        // Second axis is to the right (clockwise)
        assert!(approx(v[1].0, 0.75));
        assert!(approx(v[1].1, 0.0));
    }

    #[test]
    fn test_polygon_is_closed() {
        let ring = ring_vertices(5, 1.0);
        let lines = polygon(&ring, Color::White);
        assert_eq!(lines.len(), 5);
        assert!(approx(lines[4].x2, ring[0].0));
        assert!(approx(lines[4].y2, ring[0].1));
    }

    #[test]
    fn test_renders_without_panic() {
        let points = vec![
            RadarPoint::new("FHIR/ABDM", 92),
            RadarPoint::new("ICD/SNOMED", 88),
            RadarPoint::new("DICOM", 75),
        ];
        let area = Rect::new(0, 0, 40, 16);
        let mut buf = Buffer::empty(area);
        RadarChart::new(&points).render(area, &mut buf);
    }
}
