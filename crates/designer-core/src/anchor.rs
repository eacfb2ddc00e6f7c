//! Resize anchors around an overlay.

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// One of the eight resize anchors: corners and edge midpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anchor {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

/// Geometry after applying a resize step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeOutcome {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Anchor {
    /// All anchors in hit-test order (corners win over edges where they overlap).
    pub const ALL: [Anchor; 8] = [
        Anchor::NorthWest,
        Anchor::NorthEast,
        Anchor::SouthWest,
        Anchor::SouthEast,
        Anchor::North,
        Anchor::South,
        Anchor::West,
        Anchor::East,
    ];

    /// Sign of the width and height change per unit of pointer movement.
    ///
    /// Negative means the anchor sits on the leading edge, so the opposite
    /// edge is held fixed by moving left/top along with the pointer.
    fn factors(self) -> (f64, f64) {
        match self {
            Anchor::West => (-1.0, 0.0),
            Anchor::East => (1.0, 0.0),
            Anchor::North => (0.0, -1.0),
            Anchor::South => (0.0, 1.0),
            Anchor::NorthWest => (-1.0, -1.0),
            Anchor::NorthEast => (1.0, -1.0),
            Anchor::SouthWest => (-1.0, 1.0),
            Anchor::SouthEast => (1.0, 1.0),
        }
    }

    /// Whether this anchor changes the width.
    pub fn resizes_width(self) -> bool {
        self.factors().0 != 0.0
    }

    /// Whether this anchor changes the height.
    pub fn resizes_height(self) -> bool {
        self.factors().1 != 0.0
    }

    /// Centre of the anchor on the given bounds.
    pub fn position(self, bounds: Rect) -> Point {
        let center = bounds.center();
        match self {
            Anchor::North => Point::new(center.x, bounds.y0),
            Anchor::South => Point::new(center.x, bounds.y1),
            Anchor::East => Point::new(bounds.x1, center.y),
            Anchor::West => Point::new(bounds.x0, center.y),
            Anchor::NorthEast => Point::new(bounds.x1, bounds.y0),
            Anchor::NorthWest => Point::new(bounds.x0, bounds.y0),
            Anchor::SouthEast => Point::new(bounds.x1, bounds.y1),
            Anchor::SouthWest => Point::new(bounds.x0, bounds.y1),
        }
    }

    /// Square drawn for the anchor.
    pub fn rect(self, bounds: Rect, size: f64) -> Rect {
        Rect::from_center_size(self.position(bounds), (size, size))
    }

    /// Check if a point hits this anchor.
    pub fn hit_test(self, bounds: Rect, point: Point, tolerance: f64) -> bool {
        let d = point - self.position(bounds);
        d.x * d.x + d.y * d.y <= tolerance * tolerance
    }

    /// Apply one pointer step to a frame given as left/top/width/height.
    ///
    /// Width and height never go below zero. When the clamp bites, left/top
    /// only move by the size change actually applied, so the opposite edge
    /// stays where it was.
    pub fn apply(self, left: f64, top: f64, width: f64, height: f64, delta: Vec2) -> ResizeOutcome {
        let (fx, fy) = self.factors();

        let new_width = (width + fx * delta.x).max(0.0);
        let new_left = if fx < 0.0 { left - (new_width - width) } else { left };

        let new_height = (height + fy * delta.y).max(0.0);
        let new_top = if fy < 0.0 { top - (new_height - height) } else { top };

        ResizeOutcome {
            left: new_left,
            top: new_top,
            width: new_width,
            height: new_height,
        }
    }
}

/// Find which anchor (if any) is hit at the given point.
pub fn hit_test_anchors(bounds: Rect, point: Point, tolerance: f64) -> Option<Anchor> {
    Anchor::ALL
        .into_iter()
        .find(|anchor| anchor.hit_test(bounds, point, tolerance))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn frame(anchor: Anchor, delta: Vec2) -> ResizeOutcome {
        anchor.apply(50.0, 50.0, 100.0, 100.0, delta)
    }

    #[test]
    fn test_policy_table() {
        let d = Vec2::new(10.0, 20.0);
        let cases = [
            (Anchor::West, (60.0, 50.0, 90.0, 100.0)),
            (Anchor::East, (50.0, 50.0, 110.0, 100.0)),
            (Anchor::North, (50.0, 70.0, 100.0, 80.0)),
            (Anchor::South, (50.0, 50.0, 100.0, 120.0)),
            (Anchor::NorthWest, (60.0, 70.0, 90.0, 80.0)),
            (Anchor::NorthEast, (50.0, 70.0, 110.0, 80.0)),
            (Anchor::SouthWest, (60.0, 50.0, 90.0, 120.0)),
            (Anchor::SouthEast, (50.0, 50.0, 110.0, 120.0)),
        ];
        for (anchor, (l, t, w, h)) in cases {
            let out = frame(anchor, d);
            assert!((out.left - l).abs() < EPS, "{anchor:?} left");
            assert!((out.top - t).abs() < EPS, "{anchor:?} top");
            assert!((out.width - w).abs() < EPS, "{anchor:?} width");
            assert!((out.height - h).abs() < EPS, "{anchor:?} height");
        }
    }

    #[test]
    fn test_clamp_keeps_opposite_edge() {
        let out = frame(Anchor::West, Vec2::new(500.0, 0.0));
        assert_eq!(out.width, 0.0);
        // Right edge stays at 150.
        assert!((out.left + out.width - 150.0).abs() < EPS);

        let out = frame(Anchor::SouthEast, Vec2::new(-500.0, -500.0));
        assert_eq!((out.width, out.height), (0.0, 0.0));
        assert_eq!((out.left, out.top), (50.0, 50.0));
    }

    #[test]
    fn test_anchor_positions() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(Anchor::West.position(bounds), Point::new(0.0, 25.0));
        assert_eq!(Anchor::SouthEast.position(bounds), Point::new(100.0, 50.0));
        assert_eq!(Anchor::North.position(bounds), Point::new(50.0, 0.0));
    }

    #[test]
    fn test_hit_test_anchors() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(
            hit_test_anchors(bounds, Point::new(2.0, 24.0), 6.0),
            Some(Anchor::West)
        );
        assert_eq!(
            hit_test_anchors(bounds, Point::new(99.0, 1.0), 6.0),
            Some(Anchor::NorthEast)
        );
        assert_eq!(hit_test_anchors(bounds, Point::new(50.0, 25.0), 6.0), None);
    }
}
