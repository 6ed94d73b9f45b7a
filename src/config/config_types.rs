// src/config/config_types.rs
//
// Config types for the app

use nannou::prelude::*;
use serde::Deserialize;

use crate::animation::{EasingType, DEFAULT_DURATION_MS};

pub const DEFAULT_STROKE_WIDTH_DP: f32 = 4.0;
pub const DEFAULT_PADDING_DP: f32 = 12.0;

/// Density-independent pixels to physical pixels.
pub fn dp_to_px(dp: f32, scale_factor: f32) -> f32 {
    dp * scale_factor
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub background: [f32; 3],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 240,
            height: 240,
            title: "checkmorph".to_string(),
            background: [1.0, 1.0, 1.0],
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StyleConfig {
    pub color: [f32; 4],
    pub stroke_width_dp: f32,
    pub padding_dp: Option<f32>,
    pub auto_toggle: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color: [0.0, 0.0, 0.0, 1.0],
            stroke_width_dp: DEFAULT_STROKE_WIDTH_DP,
            padding_dp: None,
            auto_toggle: true,
        }
    }
}

impl StyleConfig {
    pub fn color(&self) -> Rgba {
        let [r, g, b, a] = self.color;
        rgba(r, g, b, a)
    }

    pub fn stroke_width_px(&self, scale_factor: f32) -> f32 {
        dp_to_px(self.stroke_width_dp, scale_factor)
    }

    // unset padding falls back to the default, an explicit 0 is kept
    pub fn padding_px(&self, scale_factor: f32) -> f32 {
        dp_to_px(self.padding_dp.unwrap_or(DEFAULT_PADDING_DP), scale_factor)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AnimationConfig {
    pub duration_ms: u64,
    pub easing: EasingType,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            easing: EasingType::AccelerateDecelerate,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OscConfig {
    pub enabled: bool,
    pub rx_port: u16,
}

impl Default for OscConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            rx_port: 9000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PathConfig {
    pub state_file: String,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            state_file: "checkview_state.json".to_string(),
        }
    }
}
