pub mod geometry;
pub mod morph_path;
pub mod morph_state;
pub mod saved_state;

pub use geometry::{drawable_size, Anchors};
pub use morph_path::{MorphPath, MorphPaths, Segment};
pub use morph_state::{GlyphState, MorphState, FLAG_STATE_CHECK, FLAG_STATE_PLUS};
pub use saved_state::SavedState;
