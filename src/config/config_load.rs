// src/config/config_load.rs
//
// loading config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::config_types::*;
use crate::errors::ConfigError;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub style: StyleConfig,
    pub animation: AnimationConfig,
    pub osc: OscConfig,
    pub paths: PathConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn load_from_exe_dir() -> Option<Self> {
        let config_path = exe_dir()?.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            Self::from_toml_str(&content).ok()
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, ConfigError> {
        let content = fs::read_to_string("config.toml")?;
        Self::from_toml_str(&content)
    }

    pub fn resolve_state_path(&self) -> PathBuf {
        let state_file = Path::new(&self.paths.state_file);
        if state_file.is_absolute() {
            return state_file.to_path_buf();
        }

        // relative paths live next to the executable when we can find it
        exe_dir()
            .map(|dir| dir.join(state_file))
            .unwrap_or_else(|| state_file.to_path_buf())
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
}
