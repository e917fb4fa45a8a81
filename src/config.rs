//! Application configuration (`config.json` in the user config directory).

use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

mod app_config;

pub use app_config::{
    normalize_drawer_width, Config, DataConfig, DrawerConfig, StartupBehavior, WindowConfig,
    DEFAULT_DRAWER_TITLE, DEFAULT_DRAWER_WIDTH, DEFAULT_SEARCH_PLACEHOLDER, MAX_DRAWER_WIDTH,
    MIN_DRAWER_WIDTH, MIN_WINDOW_DIMENSION,
};

const APP_DIR: &str = "client-drawer";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to write configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Config {
    /// Get the config file path
    pub fn path() -> PathBuf {
        const FILENAME: &str = "config.json";
        if let Some(mut path) = dirs::config_dir() {
            path.push(APP_DIR);
            path.push(FILENAME);
            return path;
        }

        // Fallback to home directory
        if let Some(mut path) = dirs::home_dir() {
            path.push(format!(".{APP_DIR}"));
            path.push(FILENAME);
            return path;
        }

        PathBuf::from(FILENAME)
    }

    /// Load configuration from the default location or return defaults
    pub fn load() -> Self {
        Self::load_from(Self::path())
    }

    /// Load configuration from `path`, falling back to defaults on any error
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::error!(path = %path.display(), ?e, "Invalid configuration, using defaults");
                Self::default()
            }),
            Err(e) => {
                tracing::error!(path = %path.display(), ?e, "Failed to read configuration");
                Self::default()
            }
        }
    }

    /// Save configuration to the default location.
    ///
    /// Library API for embedders that edit settings; the binary only reads them.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Self::path())
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Saving configuration");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Global configuration, loaded once on first access
pub static CONFIG: LazyLock<RwLock<Config>> = LazyLock::new(|| RwLock::new(Config::load()));
