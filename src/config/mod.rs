pub mod config_load;
pub mod config_types;

pub use config_load::Config;
pub use config_types::{
    dp_to_px, AnimationConfig, OscConfig, PathConfig, StyleConfig, WindowConfig,
    DEFAULT_PADDING_DP, DEFAULT_STROKE_WIDTH_DP,
};
