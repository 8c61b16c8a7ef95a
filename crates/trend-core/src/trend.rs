// File: crates/trend-core/src/trend.rs
// Summary: Maps per-column values onto grid points and draws the static trend line with markers.

use crate::error::{ChartError, Result};
use crate::geometry::Point;
use crate::grid::GridPoints;
use crate::scene::Layer;
use crate::types::MARKER_RADIUS;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Trend line resolved for one draw cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrendPlot {
    pub points: Vec<Point>,
    pub labels: Vec<String>,
    pub segments: Vec<Segment>,
}

impl TrendPlot {
    /// Resolve `values` (one per column, each in `1..=row_count`) against the grid.
    pub fn resolve(grid: &GridPoints, values: &[i64]) -> Result<Self> {
        let expected = grid.column_count();
        if values.len() != expected {
            return Err(ChartError::ShapeMismatch { expected, actual: values.len() });
        }
        let row_count = grid.row_count();
        let mut points = Vec::with_capacity(values.len());
        let mut labels = Vec::with_capacity(values.len());
        for (column, &value) in values.iter().enumerate() {
            if value < 1 || value > row_count as i64 {
                return Err(ChartError::ValueOutOfRange { column, value, row_count });
            }
            let row = (value - 1) as usize;
            let Some(p) = grid.get(column, row) else {
                return Err(ChartError::ValueOutOfRange { column, value, row_count });
            };
            points.push(p);
            labels.push((row_count as i64 - value + 1).to_string());
        }
        let segments = points
            .windows(2)
            .map(|w| Segment { from: w[0], to: w[1] })
            .collect();
        Ok(Self { points, labels, segments })
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
}

/// Draws a whole trend at once.
pub struct TrendRenderer;

impl TrendRenderer {
    /// Resolve the plot and issue its draw calls: segments on `lines`, markers on `markers`.
    pub fn render(grid: &GridPoints, values: &[i64], lines: &mut Layer, markers: &mut Layer) -> Result<TrendPlot> {
        let plot = TrendPlot::resolve(grid, values)?;
        Self::draw(&plot, lines, markers);
        log::debug!("trend: drew {} points, {} segments", plot.len(), plot.segments.len());
        Ok(plot)
    }

    pub fn draw(plot: &TrendPlot, lines: &mut Layer, markers: &mut Layer) {
        for (i, &p) in plot.points.iter().enumerate() {
            markers.circle(p, MARKER_RADIUS);
            if i != 0 {
                lines.line_to(p);
            }
            lines.move_to(p);
        }
        lines.stroke();
        markers.fill();
    }
}
