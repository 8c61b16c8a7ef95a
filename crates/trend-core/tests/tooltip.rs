// File: crates/trend-core/tests/tooltip.rs
// Purpose: Hit-testing tolerance, show/hide idempotence and vertical band handling.

use trend_core::tooltip::hit_test;
use trend_core::{GridPoints, Point, PointerEvent, Rect, Scene, TooltipController, TrendPlot};

#[test]
fn hit_test_tolerance_band() {
    let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
    assert_eq!(hit_test(Point::new(3.0, 0.0), &points, 5.0), Some(0));
    assert_eq!(hit_test(Point::new(14.0, 0.0), &points, 5.0), Some(1));
    assert_eq!(hit_test(Point::new(16.0, 0.0), &points, 5.0), None);
    // first match wins on the shared boundary
    assert_eq!(hit_test(Point::new(5.0, 0.0), &points, 5.0), Some(0));
}

struct Fixture {
    scene: Scene,
    highlight: trend_core::LayerId,
    label: trend_core::LabelId,
    plot: TrendPlot,
    tooltip: TooltipController,
}

fn fixture() -> Fixture {
    let grid = GridPoints::compute(Rect::new(0.0, 0.0, 100.0, 50.0), 3, 5).expect("grid");
    let plot = TrendPlot::resolve(&grid, &[1, 2, 3, 2, 1]).expect("plot");
    let mut scene = Scene::new();
    let highlight = scene.create_layer("highlight");
    let label = scene.create_label("tooltip", "0", Point::ZERO, 20.0, skia_safe::Color::WHITE);
    scene.label_mut(label).visible = false;
    Fixture { scene, highlight, label, plot, tooltip: TooltipController::new(&grid) }
}

impl Fixture {
    fn send(&mut self, event: PointerEvent) -> bool {
        let (hl, label) = self.scene.layer_and_label_mut(self.highlight, self.label);
        self.tooltip.handle(event, &self.plot, label, hl)
    }
}

#[test]
fn move_shows_nearest_column() {
    let mut f = fixture();
    assert_eq!(f.tooltip.tolerance_x(), 12.5);
    assert!(f.send(PointerEvent::MouseMove(Point::new(48.0, 20.0))));
    assert_eq!(f.tooltip.highlighted(), Some(2));
    let label = f.scene.label(f.label);
    assert!(label.visible);
    assert_eq!(label.text, "1");
    assert_eq!(label.position, Point::new(50.0, 45.0));
    assert_eq!(f.scene.layer(f.highlight).circle_count(), 1);
}

#[test]
fn show_and_hide_are_idempotent() {
    let mut f = fixture();
    assert!(f.send(PointerEvent::TouchStart(Point::new(1.0, 10.0))));
    assert!(!f.send(PointerEvent::TouchMove(Point::new(2.0, 12.0))));
    assert_eq!(f.scene.layer(f.highlight).circle_count(), 1);

    assert!(f.send(PointerEvent::MouseLeave(Point::new(2.0, 12.0))));
    assert!(!f.send(PointerEvent::MouseLeave(Point::new(2.0, 12.0))));
    assert_eq!(f.tooltip.highlighted(), None);
    assert!(!f.scene.label(f.label).visible);
    assert!(f.scene.layer(f.highlight).is_empty());
}

#[test]
fn switching_columns_keeps_one_highlight() {
    let mut f = fixture();
    f.send(PointerEvent::MouseEnter(Point::new(0.0, 10.0)));
    f.send(PointerEvent::MouseMove(Point::new(75.0, 10.0)));
    assert_eq!(f.tooltip.highlighted(), Some(3));
    assert_eq!(f.scene.layer(f.highlight).circle_count(), 1);
}

#[test]
fn outside_vertical_band_hides() {
    let mut f = fixture();
    f.send(PointerEvent::MouseMove(Point::new(25.0, 25.0)));
    assert_eq!(f.tooltip.highlighted(), Some(1));
    assert!(f.send(PointerEvent::MouseMove(Point::new(25.0, 80.0))));
    assert_eq!(f.tooltip.highlighted(), None);
    f.send(PointerEvent::MouseMove(Point::new(25.0, 25.0)));
    assert!(f.send(PointerEvent::TouchMove(Point::new(25.0, -1.0))));
}

#[test]
fn touch_outside_rect_hides() {
    let mut f = fixture();
    f.send(PointerEvent::TouchStart(Point::new(100.0, 10.0)));
    assert_eq!(f.tooltip.highlighted(), Some(4));
    assert!(f.send(PointerEvent::TouchStart(Point::new(110.0, 10.0))));
    assert_eq!(f.tooltip.highlighted(), None);
}

#[test]
fn revealed_limit_excludes_later_points() {
    let mut f = fixture();
    let (hl, label) = f.scene.layer_and_label_mut(f.highlight, f.label);
    assert!(!f.tooltip.handle_revealed(PointerEvent::MouseMove(Point::new(50.0, 10.0)), &f.plot, 2, label, hl));
    assert!(f.tooltip.handle_revealed(PointerEvent::MouseMove(Point::new(25.0, 10.0)), &f.plot, 2, label, hl));
    assert_eq!(f.tooltip.highlighted(), Some(1));
}
