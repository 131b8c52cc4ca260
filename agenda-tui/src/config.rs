use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const APP_DIR: &str = "agenda-tui";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaConfig {
    /// Base URL of the agenda API, e.g. "http://localhost:8080"
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Session token sent as the `id` cookie. Obtained outside this tool.
    #[serde(default)]
    pub session_token: Option<String>,
    /// Dark mode when no preference has been saved yet.
    #[serde(default = "default_prefer_dark")]
    pub prefer_dark: bool,
    /// Seconds between background refreshes of the loaded activities.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

fn default_api_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_prefer_dark() -> bool {
    true
}

fn default_refresh_interval_secs() -> u64 {
    60
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            session_token: None,
            prefer_dark: default_prefer_dark(),
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

pub fn app_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Cannot determine config directory")?
        .join(APP_DIR))
}

impl AgendaConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(app_dir()?.join("config.toml"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }

    /// Print the config path, writing a default file first if there is none.
    pub fn ensure_exists() -> Result<PathBuf> {
        let path = Self::config_path()?;
        if !path.exists() {
            Self::default().save()?;
        }
        Ok(path)
    }
}
