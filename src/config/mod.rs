//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use webgrab::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Default scraping endpoint. Overridable via `--endpoint` or the settings
/// screen; the backend expects `POST { "url": ... }` and answers
/// `{ "images": [...] }`.
pub const DEFAULT_ENDPOINT: &str = "https://image-backend-231q.onrender.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Preferred directory for image downloads. `None` falls back to the
    /// platform download dir at save time.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            endpoint: Some(DEFAULT_ENDPOINT.to_string()),
            download_dir: None,
            theme_mode: ThemeMode::System,
        }
    }
}

impl Config {
    /// The effective scraping endpoint, falling back to the default when
    /// the config carries none.
    #[must_use]
    pub fn effective_endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// The directory downloads are suggested into.
    #[must_use]
    pub fn effective_download_dir(&self) -> Option<PathBuf> {
        self.download_dir.clone().or_else(dirs::download_dir)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    crate::app::paths::get_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    // Unknown or invalid settings fall back to defaults rather than failing startup.
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            language: Some("fr".to_string()),
            endpoint: Some("http://localhost:9000".to_string()),
            download_dir: Some(PathBuf::from("/tmp/grabs")),
            theme_mode: ThemeMode::Dark,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
        assert_eq!(loaded.effective_endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");
        let config = Config::default();

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_points_at_default_endpoint() {
        let config = Config::default();
        assert_eq!(config.effective_endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.theme_mode, ThemeMode::System);
    }

    #[test]
    fn explicit_endpoint_wins_over_default() {
        let config = Config {
            endpoint: Some("http://127.0.0.1:3000/scrape".into()),
            ..Config::default()
        };
        assert_eq!(config.effective_endpoint(), "http://127.0.0.1:3000/scrape");
    }
}
