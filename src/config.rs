//! Client configuration at ~/.config/calgrid/config.toml
//!
//! Holds the backend base URL and the session token saved by `login`.
//! Auth itself is the backend's concern; we only store and send the token.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

static DEFAULT_API_URL: &str = "http://localhost:8080/api";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// JWT bearer token from the last `login`. None when logged out.
    pub token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: default_api_url(),
            token: None,
        }
    }
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("calgrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, falling back to defaults when no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
    }
}
