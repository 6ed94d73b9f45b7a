// src/render/surface.rs
//
// Where the check view's lines end up. Points arrive in widget-local
// coordinates: origin at the widget's top-left corner, y growing downwards.

use nannou::lyon::tessellation::LineCap;
use nannou::prelude::*;

use super::StrokeStyle;

pub trait Surface {
    fn draw_line(&mut self, from: Point2, to: Point2, style: &StrokeStyle);
}

/// Draws into a nannou `Draw`, with the widget occupying `bounds`.
pub struct NannouSurface<'a> {
    draw: &'a Draw,
    bounds: Rect,
}

impl<'a> NannouSurface<'a> {
    pub fn new(draw: &'a Draw, bounds: Rect) -> Self {
        Self { draw, bounds }
    }

    // nannou's origin is the window centre with y up
    fn to_nannou(&self, local: Point2) -> Point2 {
        pt2(self.bounds.left() + local.x, self.bounds.top() - local.y)
    }
}

impl Surface for NannouSurface<'_> {
    fn draw_line(&mut self, from: Point2, to: Point2, style: &StrokeStyle) {
        self.draw
            .line()
            .points(self.to_nannou(from), self.to_nannou(to))
            .color(style.color)
            .stroke_weight(style.width)
            .caps(LineCap::Square);
    }
}
