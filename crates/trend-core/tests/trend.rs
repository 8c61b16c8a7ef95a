// File: crates/trend-core/tests/trend.rs
// Purpose: Value-to-point mapping, labels, segments and the draw calls of the static renderer.

use trend_core::{ChartError, GridPoints, Point, Rect, Scene, TrendPlot, TrendRenderer};

fn grid(rows: usize, cols: usize) -> GridPoints {
    GridPoints::compute(Rect::new(0.0, 0.0, 100.0, 100.0), rows, cols).expect("grid")
}

#[test]
fn worked_example() {
    let plot = TrendPlot::resolve(&grid(2, 2), &[1, 2]).expect("plot");
    assert_eq!(plot.points, vec![Point::new(0.0, 0.0), Point::new(100.0, 100.0)]);
    assert_eq!(plot.labels, vec!["2".to_string(), "1".to_string()]);
    assert_eq!(plot.segments.len(), 1);
    assert_eq!(plot.segments[0].from, plot.points[0]);
    assert_eq!(plot.segments[0].to, plot.points[1]);
}

#[test]
fn points_and_labels_follow_values() {
    let g = grid(10, 5);
    let values = [3, 10, 1, 7, 7];
    let plot = TrendPlot::resolve(&g, &values).expect("plot");
    for (i, &v) in values.iter().enumerate() {
        assert_eq!(plot.points[i], g.get(i, (v - 1) as usize).unwrap());
        assert_eq!(plot.labels[i], (10 - v + 1).to_string());
    }
    assert_eq!(plot.segments.len(), values.len() - 1);
}

#[test]
fn rejects_bad_values() {
    let g = grid(4, 3);
    assert!(matches!(
        TrendPlot::resolve(&g, &[1, 2]),
        Err(ChartError::ShapeMismatch { expected: 3, actual: 2 })
    ));
    assert!(matches!(
        TrendPlot::resolve(&g, &[1, 0, 2]),
        Err(ChartError::ValueOutOfRange { column: 1, value: 0, .. })
    ));
    assert!(matches!(
        TrendPlot::resolve(&g, &[1, 2, 5]),
        Err(ChartError::ValueOutOfRange { column: 2, value: 5, row_count: 4 })
    ));
}

#[test]
fn render_draws_segments_and_markers() {
    let mut scene = Scene::new();
    let lines = scene.create_layer("trends");
    let markers = scene.create_layer("markers");
    let (l, m) = scene.layer_pair_mut(lines, markers);
    let plot = TrendRenderer::render(&grid(5, 4), &[1, 2, 3, 4], l, m).expect("render");
    assert_eq!(plot.len(), 4);
    assert_eq!(scene.layer(lines).line_count(), 3);
    assert_eq!(scene.layer(markers).circle_count(), 4);
}
