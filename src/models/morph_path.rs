// src/models/morph_path.rs
//
// The four straight paths the line endpoints slide along.
// Each path starts at a plus anchor and ends at a check anchor, so one shared
// fraction places all four endpoints: 0 is the plus glyph, 1 is the check glyph.

use nannou::prelude::*;

use super::geometry::Anchors;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphPath {
    pub start: Point2,
    pub end: Point2,
    pub length: f32,
}

impl MorphPath {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            start,
            end,
            length: start.distance(end),
        }
    }

    /// Point at `fraction` of the way along the path, measured by arc length.
    pub fn point_at(&self, fraction: f32) -> Point2 {
        if self.length == 0.0 || fraction <= 0.0 {
            return self.start;
        }
        if fraction >= 1.0 {
            return self.end;
        }

        let direction = (self.end - self.start) / self.length;
        self.start + direction * (self.length * fraction)
    }
}

/// One drawn line: the endpoints of a pair of paths at the same fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point2,
    pub to: Point2,
}

/// All four paths, always built together from one size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphPaths {
    pub size: f32,
    pub first: MorphPath,
    pub second: MorphPath,
    pub third: MorphPath,
    pub fourth: MorphPath,
}

impl MorphPaths {
    pub fn build(size: f32) -> Self {
        let size = size.max(0.0);
        let anchors = Anchors::new(size);

        Self {
            size,
            first: MorphPath::new(anchors.plus_top, anchors.check_right),
            second: MorphPath::new(anchors.plus_bottom, anchors.check_middle),
            third: MorphPath::new(anchors.plus_left, anchors.check_left),
            // shares its check end with `second`: the two strokes meet at the check's vertex
            fourth: MorphPath::new(anchors.plus_right, anchors.check_middle),
        }
    }

    /// The two line segments to draw at `fraction` (first-second, third-fourth).
    pub fn segments(&self, fraction: f32) -> [Segment; 2] {
        [
            Segment {
                from: self.first.point_at(fraction),
                to: self.second.point_at(fraction),
            },
            Segment {
                from: self.third.point_at(fraction),
                to: self.fourth.point_at(fraction),
            },
        ]
    }

    pub fn iter(&self) -> impl Iterator<Item = &MorphPath> {
        [&self.first, &self.second, &self.third, &self.fourth].into_iter()
    }
}
