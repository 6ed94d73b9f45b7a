// src/lib.rs
//
// A two-stroke widget that morphs between a plus and a check mark.
// The endpoints of both strokes slide along four fixed straight paths; one
// shared fraction places all of them.

pub mod animation;
pub mod config;
pub mod controllers;
pub mod errors;
pub mod models;
pub mod render;
pub mod views;

pub use animation::{EasingType, DEFAULT_DURATION_MS};
pub use errors::{ConfigError, StateError};
pub use models::{GlyphState, SavedState};
pub use render::{NannouSurface, StrokeStyle, Surface};
pub use views::CheckView;
