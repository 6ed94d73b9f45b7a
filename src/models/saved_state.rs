// src/models/saved_state.rs
//
// The piece of a CheckView that survives the host tearing it down and
// recreating it. Only the settled glyph is kept.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

use super::morph_state::{GlyphState, FLAG_STATE_PLUS};
use crate::errors::StateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    #[serde(default = "default_flag")]
    pub flag_state: i32,
}

fn default_flag() -> i32 {
    FLAG_STATE_PLUS
}

impl Default for SavedState {
    fn default() -> Self {
        Self {
            flag_state: FLAG_STATE_PLUS,
        }
    }
}

impl SavedState {
    pub fn new(state: GlyphState) -> Self {
        Self {
            flag_state: state.flag(),
        }
    }

    /// Unknown flags fall back to plus.
    pub fn state(&self) -> GlyphState {
        GlyphState::from_flag(self.flag_state).unwrap_or_else(|| {
            warn!(flag = self.flag_state, "unknown saved glyph flag, using plus");
            GlyphState::Plus
        })
    }

    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, StateError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Like `from_json`, but any failure yields the plus state.
    pub fn from_json_or_default(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|err| {
            warn!(%err, "malformed saved state, using plus");
            Self::default()
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StateError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StateError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
