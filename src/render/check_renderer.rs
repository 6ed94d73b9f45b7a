// src/render/check_renderer.rs
//
// Two strokes: first-to-second path points and third-to-fourth path points,
// all taken at the same fraction.

use nannou::prelude::*;

use super::{StrokeStyle, Surface};
use crate::models::MorphPaths;

pub fn draw_check<S: Surface + ?Sized>(
    surface: &mut S,
    paths: &MorphPaths,
    fraction: f32,
    padding: f32,
    style: &StrokeStyle,
) {
    let offset = vec2(padding, padding);

    for segment in paths.segments(fraction) {
        surface.draw_line(segment.from + offset, segment.to + offset, style);
    }
}
