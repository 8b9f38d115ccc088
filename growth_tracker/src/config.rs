//! TOML configuration for the tracker binary.
//!
//! Everything has a built-in default, so the config file is optional and may
//! be partial. CLI flags override whatever the file says.

use std::fs;

use serde::Deserialize;
use tracing::error;

use crate::errors::Error;
use crate::providers::pushshift::provider::BASE_URL;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub render: RenderConfig,
}

/// The `[provider]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Endpoint to query. Overridable for mirrors and tests.
    pub base_url: String,
    /// Local request-rate cap applied before every call.
    pub requests_per_second: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            requests_per_second: 1,
        }
    }
}

/// The `[render]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub fps: u32,
    pub width: u32,
    pub height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fps: 20,
            width: 1000,
            height: 600,
        }
    }
}

pub fn read_config(config_path: &str) -> Result<Config, Error> {
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to read config file: {:?}", e);
            return Err(e.into());
        }
    };

    let config = match toml::from_str(&config_content) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to parse config file: {:?}", e);
            return Err(Error::Config(e.to_string()));
        }
    };

    Ok(config)
}
