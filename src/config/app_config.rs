use serde::{Deserialize, Serialize};

mod behavior;
mod data_config;
mod drawer_config;
mod window_config;

pub use behavior::StartupBehavior;
pub use data_config::DataConfig;
pub use drawer_config::{
    normalize_drawer_width, DrawerConfig, DEFAULT_DRAWER_TITLE, DEFAULT_DRAWER_WIDTH,
    DEFAULT_SEARCH_PLACEHOLDER, MAX_DRAWER_WIDTH, MIN_DRAWER_WIDTH,
};
pub use window_config::{WindowConfig, MIN_WINDOW_DIMENSION};

/// Global application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub drawer: DrawerConfig,
    pub data: DataConfig,
    pub window: WindowConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        // Drawer defaults
        assert!(config.drawer.default_open);
        assert_eq!(config.drawer.default_width, 320.0);
        assert_eq!(config.drawer.title, "Select Client");
        assert_eq!(config.drawer.search_placeholder, "Search clients...");
        assert!(!config.drawer.clear_selection_on_close);
        assert_eq!(config.drawer.on_startup, StartupBehavior::Default);

        // Data defaults
        assert_eq!(config.data.path, None);

        // Window defaults
        assert_eq!(config.window.width, 1000);
        assert_eq!(config.window.height, 720);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = Config {
            drawer: DrawerConfig {
                default_open: false,
                default_width: 280.0,
                title: "Customers".to_string(),
                search_placeholder: "Find a customer".to_string(),
                clear_selection_on_close: true,
                on_startup: StartupBehavior::LastClosed,
            },
            data: DataConfig {
                path: Some(PathBuf::from("/srv/clients.json")),
            },
            window: WindowConfig {
                width: 1200,
                height: 900,
            },
        };

        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("\"clearSelectionOnClose\": true"));
        assert!(json.contains("\"onStartup\": \"last_closed\""));

        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_empty_object_uses_defaults() {
        let parsed: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_window_config_clamped() {
        let window = WindowConfig {
            width: 10,
            height: 800,
        };
        let clamped = window.clamped();
        assert_eq!(clamped.width, MIN_WINDOW_DIMENSION);
        assert_eq!(clamped.height, 800);
    }
}
