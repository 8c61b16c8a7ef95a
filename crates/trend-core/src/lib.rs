// File: crates/trend-core/src/lib.rs
// Summary: Core library entry point; exports grid layout, trend drawing, animation, tooltip and chart API.

pub mod animate;
pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod render;
pub mod scene;
pub mod scheduler;
pub mod table;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod trend;
pub mod types;

pub use animate::{AnimatedTrendRenderer, AnimationState, Frame, TickOutcome};
pub use chart::TrendChart;
pub use config::ChartConfig;
pub use error::{ChartError, Result};
pub use geometry::{Point, Rect};
pub use grid::GridPoints;
pub use render::RenderOptions;
pub use scene::{Label, LabelId, Layer, LayerId, Scene};
pub use scheduler::RepeatTimer;
pub use theme::Theme;
pub use tooltip::{PointerEvent, TooltipController};
pub use trend::{Segment, TrendPlot, TrendRenderer};
