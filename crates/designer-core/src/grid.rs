//! Background grid geometry for the design panel.

use kurbo::{Line, Point, Size};

/// Distance between grid lines.
pub const DEFAULT_GRID_SPACING: f64 = 8.0;
/// Stroke width for grid lines.
pub const DEFAULT_GRID_STROKE: f64 = 2.0;

/// Vertical then horizontal grid lines covering `size`, starting at zero.
pub fn grid_lines(size: Size, spacing: f64) -> Vec<Line> {
    if spacing <= 0.0 || !spacing.is_finite() {
        return Vec::new();
    }
    let mut lines = Vec::new();

    let mut x = 0.0;
    while x < size.width {
        lines.push(Line::new(Point::new(x, 0.0), Point::new(x, size.height)));
        x += spacing;
    }

    let mut y = 0.0;
    while y < size.height {
        lines.push(Line::new(Point::new(0.0, y), Point::new(size.width, y)));
        y += spacing;
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        let lines = grid_lines(Size::new(64.0, 20.0), 8.0);
        // x = 0..56 (8 lines), y = 0, 8, 16 (3 lines)
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[7].p0, Point::new(56.0, 0.0));
        assert_eq!(lines[8].p1, Point::new(64.0, 0.0));
    }

    #[test]
    fn test_bad_spacing() {
        assert!(grid_lines(Size::new(100.0, 100.0), 0.0).is_empty());
        assert!(grid_lines(Size::new(100.0, 100.0), -3.0).is_empty());
    }
}
