// File: crates/trend-core/src/error.rs
// Summary: Configuration errors reported before any drawing or ticking happens.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("row count must be at least 2 (got {0})")]
    RowCountTooSmall(usize),
    #[error("column count must be at least 2 (got {0})")]
    ColumnCountTooSmall(usize),
    #[error("value {value} in column {column} is outside 1..={row_count}")]
    ValueOutOfRange { column: usize, value: i64, row_count: usize },
    #[error("expected {expected} column values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("{axis} title table has {available} entries, {needed} required")]
    TitleTableTooShort { axis: &'static str, needed: usize, available: usize },
    #[error("chart rect must be finite with positive size: {0:?}")]
    InvalidRect(crate::geometry::Rect),
    #[error("animation duration must be finite and positive (got {0})")]
    InvalidDuration(f64),
    #[error("config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;

impl From<toml::de::Error> for ChartError {
    fn from(e: toml::de::Error) -> Self {
        ChartError::Config(e.to_string())
    }
}

impl From<std::io::Error> for ChartError {
    fn from(e: std::io::Error) -> Self {
        ChartError::Config(e.to_string())
    }
}
