// File: crates/trend-core/src/tooltip.rs
// Summary: Pointer hit-testing against trend points and the tooltip label/highlight it drives.

use crate::geometry::{Point, Rect};
use crate::grid::GridPoints;
use crate::scene::{Label, Layer};
use crate::trend::TrendPlot;
use crate::types::{HIGHLIGHT_RADIUS, TOOLTIP_OFFSET};

/// Pointer input in chart-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    TouchStart(Point),
    TouchMove(Point),
    MouseEnter(Point),
    MouseMove(Point),
    MouseLeave(Point),
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::TouchStart(p)
            | PointerEvent::TouchMove(p)
            | PointerEvent::MouseEnter(p)
            | PointerEvent::MouseMove(p)
            | PointerEvent::MouseLeave(p) => p,
        }
    }
}

/// Index of the first point whose x lies within `±tolerance_x` of the pointer.
pub fn hit_test(pointer: Point, points: &[Point], tolerance_x: f32) -> Option<usize> {
    points.iter().position(|p| (pointer.x - p.x).abs() <= tolerance_x)
}

#[derive(Clone, Debug)]
pub struct TooltipController {
    rect: Rect,
    tolerance_x: f32,
    highlighted: Option<usize>,
}

impl TooltipController {
    /// Tolerance is half the column spacing, so neighbouring hit bands touch.
    pub fn new(grid: &GridPoints) -> Self {
        Self::with_tolerance(grid.rect(), grid.column_spacing() * 0.5)
    }

    pub fn with_tolerance(rect: Rect, tolerance_x: f32) -> Self {
        Self { rect, tolerance_x, highlighted: None }
    }

    pub fn highlighted(&self) -> Option<usize> { self.highlighted }
    pub fn tolerance_x(&self) -> f32 { self.tolerance_x }

    /// Route one pointer event. Returns true when the tooltip changed.
    pub fn handle(&mut self, event: PointerEvent, plot: &TrendPlot, label: &mut Label, highlight: &mut Layer) -> bool {
        self.handle_revealed(event, plot, plot.len(), label, highlight)
    }

    /// Like [`TooltipController::handle`], but only the first `revealed` points can be hit.
    pub fn handle_revealed(
        &mut self,
        event: PointerEvent,
        plot: &TrendPlot,
        revealed: usize,
        label: &mut Label,
        highlight: &mut Layer,
    ) -> bool {
        let p = event.position();
        match event {
            PointerEvent::MouseLeave(_) => return self.hide(label, highlight),
            PointerEvent::TouchStart(_) if !self.rect.contains(p) => return self.hide(label, highlight),
            _ => {}
        }
        if !self.rect.in_vertical_band(p.y) {
            return self.hide(label, highlight);
        }
        let points = &plot.points[..revealed.min(plot.len())];
        match hit_test(p, points, self.tolerance_x) {
            Some(i) => self.show(i, plot.points[i], &plot.labels[i], label, highlight),
            None => false,
        }
    }

    /// Show the tooltip for `index` at `point`. No-op when `index` is already shown.
    pub fn show(&mut self, index: usize, point: Point, text: &str, label: &mut Label, highlight: &mut Layer) -> bool {
        if self.highlighted == Some(index) { return false; }
        label.position = point.offset(0.0, -TOOLTIP_OFFSET);
        label.text = text.to_string();
        label.visible = true;
        self.highlighted = Some(index);
        highlight.clear();
        highlight.circle(point, HIGHLIGHT_RADIUS);
        highlight.fill();
        log::debug!("tooltip: show column {index} ({text})");
        true
    }

    /// Hide the tooltip. No-op when nothing is shown.
    pub fn hide(&mut self, label: &mut Label, highlight: &mut Layer) -> bool {
        if self.highlighted.take().is_none() { return false; }
        label.visible = false;
        highlight.clear();
        log::debug!("tooltip: hide");
        true
    }
}
