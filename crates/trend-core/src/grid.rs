// File: crates/trend-core/src/grid.rs
// Summary: Row/column lattice layout for the chart rect.

use crate::error::{ChartError, Result};
use crate::geometry::{Point, Rect};

/// Evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f32, end: f32, steps: usize) -> Vec<f32> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f32 - 1.0);
    (0..steps).map(|i| start + step * i as f32).collect()
}

/// Grid coordinates indexed `[column][row]`.
///
/// `x` depends only on the column and `y` only on the row; both are evenly
/// spaced across the rect, first column at `rect.x`, first row at `rect.y`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridPoints {
    rect: Rect,
    columns: Vec<Vec<Point>>,
    row_count: usize,
    column_count: usize,
}

impl GridPoints {
    /// Lay out `column_count * row_count` points over `rect`.
    pub fn compute(rect: Rect, row_count: usize, column_count: usize) -> Result<Self> {
        if row_count < 2 { return Err(ChartError::RowCountTooSmall(row_count)); }
        if column_count < 2 { return Err(ChartError::ColumnCountTooSmall(column_count)); }
        if !rect.is_valid() { return Err(ChartError::InvalidRect(rect)); }

        let xs = linspace(rect.left(), rect.right(), column_count);
        let ys = linspace(rect.top(), rect.bottom(), row_count);
        let columns = xs
            .iter()
            .map(|&x| ys.iter().map(|&y| Point::new(x, y)).collect())
            .collect();
        log::debug!("grid: {column_count} columns x {row_count} rows over {rect:?}");
        Ok(Self { rect, columns, row_count, column_count })
    }

    pub fn rect(&self) -> Rect { self.rect }
    pub fn row_count(&self) -> usize { self.row_count }
    pub fn column_count(&self) -> usize { self.column_count }

    pub fn column_spacing(&self) -> f32 {
        self.rect.width / (self.column_count - 1) as f32
    }

    pub fn row_spacing(&self) -> f32 {
        self.rect.height / (self.row_count - 1) as f32
    }

    pub fn get(&self, column: usize, row: usize) -> Option<Point> {
        self.columns.get(column).and_then(|c| c.get(row)).copied()
    }

    pub fn column(&self, column: usize) -> &[Point] {
        &self.columns[column]
    }

    pub fn columns(&self) -> &[Vec<Point>] {
        &self.columns
    }
}
