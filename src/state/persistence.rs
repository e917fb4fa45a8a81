use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_DRAWER_WIDTH;
use crate::state::AppState;

/// State of the last closed window
///
/// Saved to state.json when a window closes and loaded on app startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedState {
    pub drawer_open: bool,
    pub drawer_width: f64,
    /// Id of the selected item, resolved against the loaded items on startup
    pub selected_id: Option<String>,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            drawer_open: true,
            drawer_width: DEFAULT_DRAWER_WIDTH,
            selected_id: None,
        }
    }
}

impl From<&AppState> for PersistedState {
    fn from(state: &AppState) -> Self {
        let drawer = state.drawer.read();
        Self {
            drawer_open: drawer.open,
            drawer_width: drawer.width,
            selected_id: state.selected.read().as_ref().map(|item| item.id.clone()),
        }
    }
}

impl PersistedState {
    /// Get the state file path (state.json in local data directory)
    pub fn path() -> PathBuf {
        const FILENAME: &str = "state.json";
        if let Some(mut path) = dirs::data_local_dir() {
            path.push("client-drawer");
            path.push(FILENAME);
            return path;
        }

        // Fallback to home directory
        if let Some(mut path) = dirs::home_dir() {
            path.push(".client-drawer");
            path.push(FILENAME);
            return path;
        }

        PathBuf::from(FILENAME)
    }

    /// Load persisted state from file or return default
    pub fn load() -> Self {
        Self::load_from(Self::path())
    }

    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save persisted state to file
    ///
    /// Called when the window is closing.
    pub fn save(&self) {
        self.save_to(Self::path());
    }

    pub fn save_to(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();

        tracing::debug!(
            path = %path.display(),
            drawer_open = self.drawer_open,
            drawer_width = self.drawer_width,
            selected_id = ?self.selected_id,
            "Saving persisted state"
        );

        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!(?e, "Failed to create state directory");
                return;
            }
        }

        match serde_json::to_string_pretty(self) {
            Ok(content) => {
                if let Err(e) = fs::write(path, content) {
                    tracing::error!(?e, "Failed to save persisted state");
                }
            }
            Err(e) => {
                tracing::error!(?e, "Failed to serialize persisted state");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_persisted_state_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");

        let state = PersistedState {
            drawer_open: false,
            drawer_width: 400.0,
            selected_id: Some("42".to_string()),
        };
        state.save_to(&path);

        assert_eq!(PersistedState::load_from(&path), state);
    }

    #[test]
    fn test_persisted_state_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = PersistedState::load_from(temp_dir.path().join("state.json"));
        assert_eq!(loaded, PersistedState::default());
    }

    #[test]
    fn test_persisted_state_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        fs::write(&path, "{{{").unwrap();

        assert_eq!(PersistedState::load_from(&path), PersistedState::default());
    }

    #[test]
    fn test_persisted_state_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        fs::write(&path, r#"{"selectedId":"3"}"#).unwrap();

        let loaded = PersistedState::load_from(&path);
        assert!(loaded.drawer_open);
        assert_eq!(loaded.drawer_width, DEFAULT_DRAWER_WIDTH);
        assert_eq!(loaded.selected_id.as_deref(), Some("3"));
    }
}
