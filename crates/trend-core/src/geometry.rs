// File: crates/trend-core/src/geometry.rs
// Summary: Lightweight geometry helpers for chart-local point math.

use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Linear interpolation from `self` towards `to`; `t = 0` is `self`, `t = 1` is `to`.
    pub fn lerp(self, to: Point, t: f32) -> Self {
        Self {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }

    pub fn with_x(self, x: f32) -> Self {
        Self { x, y: self.y }
    }
}

/// Bounding box of the chart in its local coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
    pub fn left(&self) -> f32 { self.x }
    pub fn right(&self) -> f32 { self.x + self.width }
    pub fn top(&self) -> f32 { self.y }
    pub fn bottom(&self) -> f32 { self.y + self.height }
    pub fn center_y(&self) -> f32 { self.y + self.height * 0.5 }

    /// Inclusive on all edges.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// True when `y` lies within the rect's vertical extent (edges included).
    pub fn in_vertical_band(&self, y: f32) -> bool {
        let half = self.height * 0.5;
        let c = self.center_y();
        !(y < c - half || y > c + half)
    }

    pub fn is_valid(&self) -> bool {
        [self.x, self.y, self.width, self.height].iter().all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        let a = Point::new(0.0, 10.0);
        let b = Point::new(10.0, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point::new(5.0, 5.0));
    }

    #[test]
    fn vertical_band_is_inclusive() {
        let r = Rect::new(0.0, 10.0, 100.0, 50.0);
        assert!(r.in_vertical_band(10.0));
        assert!(r.in_vertical_band(60.0));
        assert!(!r.in_vertical_band(9.9));
        assert!(!r.in_vertical_band(60.1));
    }

    #[test]
    fn invalid_rects() {
        assert!(!Rect::new(0.0, 0.0, 0.0, 10.0).is_valid());
        assert!(!Rect::new(f32::NAN, 0.0, 10.0, 10.0).is_valid());
        assert!(Rect::new(-5.0, -5.0, 10.0, 10.0).is_valid());
    }
}
