// File: crates/trend-core/src/types.rs
// Summary: Shared constants (surface size, marker radii, tick rate) and insets.

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 480;

/// Radius of the marker drawn at every trend point.
pub const MARKER_RADIUS: f32 = 5.0;
/// Radius of the highlight drawn behind the tooltip point.
pub const HIGHLIGHT_RADIUS: f32 = 8.0;
/// Vertical distance between a trend point and its tooltip label.
pub const TOOLTIP_OFFSET: f32 = 5.0;
/// Host clock rate the animation is stepped at.
pub const TICKS_PER_SECOND: u32 = 60;

/// Screen margins around the chart rect, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(56, 32, 48, 32)
    }
}
