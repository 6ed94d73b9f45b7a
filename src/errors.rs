// src/errors.rs
//
// Error types for the few fallible operations: reading config and saved state.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum StateError {
    #[error("failed to access saved state: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid saved state: {0}")]
    Json(#[from] serde_json::Error),
}
