// File: crates/trend-core/src/config.rs
// Summary: Chart configuration with defaults, TOML loading and construction-time validation.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ChartError, Result};
use crate::geometry::{Point, Rect};

/// Row titles, top row first.
pub const ROW_TITLES: [&str; 10] = ["10", "9", "8", "7", "6", "5", "4", "3", "2", "1"];
/// Column titles, left column first.
pub const COLUMN_TITLES: [&str; 15] = [
    "15", "16", "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29",
];

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub rect: Rect,
    pub row_count: usize,
    pub column_count: usize,
    pub row_titles: Vec<String>,
    pub column_titles: Vec<String>,
    pub theme: String,
    pub title_font_size: f32,
    pub tooltip_font_size: f32,
    /// Offset from the first-column grid point of each row to its title.
    pub row_title_offset: Point,
    /// Offset from the first-row grid point of each column to its title.
    pub column_title_offset: Point,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, 700.0, 360.0),
            row_count: ROW_TITLES.len(),
            column_count: COLUMN_TITLES.len(),
            row_titles: ROW_TITLES.iter().map(|s| s.to_string()).collect(),
            column_titles: COLUMN_TITLES.iter().map(|s| s.to_string()).collect(),
            theme: "classic".to_string(),
            title_font_size: 20.0,
            tooltip_font_size: 20.0,
            row_title_offset: Point::new(-34.0, 7.0),
            column_title_offset: Point::new(-10.0, -14.0),
        }
    }
}

impl ChartConfig {
    pub fn new(rect: Rect, row_count: usize, column_count: usize) -> Self {
        Self { rect, row_count, column_count, ..Self::default() }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: ChartConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ChartError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }

    /// Check counts, rect and title tables before anything is laid out.
    pub fn validate(&self) -> Result<()> {
        if self.row_count < 2 { return Err(ChartError::RowCountTooSmall(self.row_count)); }
        if self.column_count < 2 { return Err(ChartError::ColumnCountTooSmall(self.column_count)); }
        if !self.rect.is_valid() { return Err(ChartError::InvalidRect(self.rect)); }
        if self.row_titles.len() < self.row_count {
            return Err(ChartError::TitleTableTooShort {
                axis: "row",
                needed: self.row_count,
                available: self.row_titles.len(),
            });
        }
        if self.column_titles.len() < self.column_count {
            return Err(ChartError::TitleTableTooShort {
                axis: "column",
                needed: self.column_count,
                available: self.column_titles.len(),
            });
        }
        Ok(())
    }
}
