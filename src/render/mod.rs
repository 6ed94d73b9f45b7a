// src/render/mod.rs
// Drawing the check view: the surface abstraction and the stroke parameters

pub mod check_renderer;
pub mod surface;

pub use check_renderer::draw_check;
pub use surface::{NannouSurface, Surface};

use nannou::prelude::*;

/// Stroke-only, square capped. Anti-aliasing is the host's job (window MSAA
/// for nannou).
#[derive(Debug, Clone, Copy)]
pub struct StrokeStyle {
    pub color: Rgba,
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: rgba(0.0, 0.0, 0.0, 1.0),
            width: 4.0,
        }
    }
}
