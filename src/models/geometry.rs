// src/models/geometry.rs
//
// Anchor points for the plus and check glyphs.
// Every anchor is derived from `size`: the square drawing area left after padding.
// Coordinates are widget-local, origin top-left, y growing downwards.

use nannou::prelude::*;

/// The six fixed points the two glyphs are built from.
/// Names for the plus anchors come from the plus glyph (edge midpoints),
/// the check anchors are the three vertices of the check mark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    pub plus_top: Point2,
    pub plus_bottom: Point2,
    pub plus_left: Point2,
    pub plus_right: Point2,
    pub check_left: Point2,
    pub check_middle: Point2,
    pub check_right: Point2,
}

impl Anchors {
    pub fn new(size: f32) -> Self {
        let middle = size / 2.0;

        Self {
            plus_top: pt2(middle, 0.0),
            plus_bottom: pt2(middle, size),
            plus_left: pt2(0.0, middle),
            plus_right: pt2(size, middle),
            check_left: pt2(1.0, middle),
            check_middle: pt2(5.0 * size / 16.0, 13.0 * size / 16.0),
            check_right: pt2(size, size / 8.0),
        }
    }
}

/// Side of the square drawing area for a widget of `width` x `height`
/// with `padding` on every edge. Never negative.
pub fn drawable_size(width: f32, height: f32, padding: f32) -> f32 {
    (width.min(height) - 2.0 * padding).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod anchor_tests {
        use super::*;

        #[test]
        fn test_plus_anchors_share_center_lines() {
            for size in [0.0, 1.0, 13.0, 48.0, 160.0, 1021.5] {
                let anchors = Anchors::new(size);
                assert_eq!(anchors.plus_top.x, size / 2.0);
                assert_eq!(anchors.plus_bottom.x, size / 2.0);
                assert_eq!(anchors.plus_left.y, size / 2.0);
                assert_eq!(anchors.plus_right.y, size / 2.0);
            }
        }

        #[test]
        fn test_reference_size_160() {
            let anchors = Anchors::new(160.0);

            assert_eq!(anchors.plus_top, pt2(80.0, 0.0));
            assert_eq!(anchors.plus_bottom, pt2(80.0, 160.0));
            assert_eq!(anchors.plus_left, pt2(0.0, 80.0));
            assert_eq!(anchors.plus_right, pt2(160.0, 80.0));
            assert_eq!(anchors.check_left, pt2(1.0, 80.0));
            assert_eq!(anchors.check_middle, pt2(50.0, 130.0));
            assert_eq!(anchors.check_right, pt2(160.0, 20.0));
        }

        #[test]
        fn test_zero_size_collapses_plus() {
            let anchors = Anchors::new(0.0);
            assert_eq!(anchors.plus_top, Vec2::ZERO);
            assert_eq!(anchors.plus_right, Vec2::ZERO);
            assert_eq!(anchors.check_middle, Vec2::ZERO);
            // check_left keeps its fixed one unit inset
            assert_eq!(anchors.check_left, pt2(1.0, 0.0));
        }
    }

    mod drawable_size_tests {
        use super::*;

        #[test]
        fn test_uses_smaller_side() {
            assert_eq!(drawable_size(200.0, 160.0, 0.0), 160.0);
            assert_eq!(drawable_size(100.0, 300.0, 10.0), 80.0);
        }

        #[test]
        fn test_never_negative() {
            assert_eq!(drawable_size(20.0, 20.0, 12.0), 0.0);
            assert_eq!(drawable_size(0.0, 0.0, 0.0), 0.0);
        }
    }
}
