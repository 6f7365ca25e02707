use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::repos::RepoFilter;

pub const BASE_URL_ENV: &str = "PARTNER_SEARCH_BASE_URL";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchConfig {
    /// Repository preselected on startup: a known repository name or `all-repositories`.
    #[serde(default)]
    pub default_repository: Option<String>,
}

impl SearchConfig {
    pub fn initial_repo(&self) -> Option<RepoFilter> {
        let value = self.default_repository.as_deref()?;
        let repo = RepoFilter::from_value(value);
        if repo.is_none() {
            log::warn!("Unknown default_repository {:?}, leaving selection empty", value);
        }
        repo
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Seconds before a search is abandoned. 0 disables the client-side timeout.
    #[serde(default)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_base_url() -> String {
    "http://localhost:8000".into()
}

fn default_width() -> f32 {
    900.0
}

fn default_height() -> f32 {
    640.0
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: 0,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl ServiceConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("partner-search").join("config.toml"))
}

pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn load_config() -> AppConfig {
    let mut config = match config_path() {
        Some(path) if path.exists() => read_config(&path).unwrap_or_else(|e| {
            log::warn!("Ignoring {}: {}", path.display(), e);
            AppConfig::default()
        }),
        _ => AppConfig::default(),
    };

    apply_base_url_override(&mut config, std::env::var(BASE_URL_ENV).ok());
    config
}

fn apply_base_url_override(config: &mut AppConfig, base_url: Option<String>) {
    if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
        config.service.base_url = url.trim().to_string();
    }
}
