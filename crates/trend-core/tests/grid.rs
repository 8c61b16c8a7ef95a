// File: crates/trend-core/tests/grid.rs
// Purpose: Grid layout spacing, worked example and precondition errors.

use trend_core::{ChartError, GridPoints, Point, Rect};

#[test]
fn two_by_two_example() {
    let g = GridPoints::compute(Rect::new(0.0, 0.0, 100.0, 100.0), 2, 2).expect("grid");
    assert_eq!(g.column(0), &[Point::new(0.0, 0.0), Point::new(0.0, 100.0)]);
    assert_eq!(g.column(1), &[Point::new(100.0, 0.0), Point::new(100.0, 100.0)]);
}

#[test]
fn spacing_is_constant() {
    let rect = Rect::new(12.5, -40.0, 333.0, 217.0);
    for (rows, cols) in [(2usize, 2usize), (3, 7), (10, 15), (17, 4)] {
        let g = GridPoints::compute(rect, rows, cols).expect("grid");
        let dx = g.column_spacing();
        let dy = g.row_spacing();
        for c in 0..cols {
            for r in 0..rows {
                let p = g.get(c, r).expect("point");
                assert!((p.x - (rect.x + c as f32 * dx)).abs() < 1e-3, "x at [{c}][{r}]");
                assert!((p.y - (rect.y + r as f32 * dy)).abs() < 1e-3, "y at [{c}][{r}]");
                // x depends only on column, y only on row
                assert_eq!(p.x, g.get(c, 0).unwrap().x);
                assert_eq!(p.y, g.get(0, r).unwrap().y);
            }
        }
        let last = g.get(cols - 1, rows - 1).unwrap();
        assert!((last.x - rect.right()).abs() < 1e-3);
        assert!((last.y - rect.bottom()).abs() < 1e-3);
    }
}

#[test]
fn rejects_degenerate_counts() {
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(matches!(GridPoints::compute(rect, 1, 5), Err(ChartError::RowCountTooSmall(1))));
    assert!(matches!(GridPoints::compute(rect, 5, 0), Err(ChartError::ColumnCountTooSmall(0))));
    assert!(matches!(
        GridPoints::compute(Rect::new(0.0, 0.0, 0.0, 10.0), 5, 5),
        Err(ChartError::InvalidRect(_))
    ));
}
