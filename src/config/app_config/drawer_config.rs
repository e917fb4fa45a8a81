use super::behavior::StartupBehavior;
use serde::{Deserialize, Serialize};

/// Default drawer width in pixels
pub const DEFAULT_DRAWER_WIDTH: f64 = 320.0;

/// Minimum drawer width in pixels
pub const MIN_DRAWER_WIDTH: f64 = 200.0;

/// Maximum drawer width in pixels
pub const MAX_DRAWER_WIDTH: f64 = 600.0;

pub const DEFAULT_DRAWER_TITLE: &str = "Select Client";

pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search clients...";

fn default_drawer_open() -> bool {
    true
}

fn default_drawer_width() -> f64 {
    DEFAULT_DRAWER_WIDTH
}

fn default_drawer_title() -> String {
    DEFAULT_DRAWER_TITLE.to_string()
}

fn default_search_placeholder() -> String {
    DEFAULT_SEARCH_PLACEHOLDER.to_string()
}

/// Clamp width to the valid range, falling back to the default for NaN/inf
pub fn normalize_drawer_width(width: f64) -> f64 {
    if !width.is_finite() {
        return DEFAULT_DRAWER_WIDTH;
    }
    width.clamp(MIN_DRAWER_WIDTH, MAX_DRAWER_WIDTH)
}

/// Configuration for the client selector drawer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerConfig {
    /// Whether the drawer is open when a window opens
    #[serde(default = "default_drawer_open")]
    pub default_open: bool,
    /// Default drawer width in pixels
    #[serde(default = "default_drawer_width")]
    pub default_width: f64,
    /// Title shown in the drawer header
    #[serde(default = "default_drawer_title")]
    pub title: String,
    /// Placeholder of the search input
    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,
    /// Drop the selected item whenever the drawer closes
    #[serde(default)]
    pub clear_selection_on_close: bool,
    /// Behavior on app startup: "default" or "last_closed"
    #[serde(default)]
    pub on_startup: StartupBehavior,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            default_open: default_drawer_open(),
            default_width: default_drawer_width(),
            title: default_drawer_title(),
            search_placeholder: default_search_placeholder(),
            clear_selection_on_close: false,
            on_startup: StartupBehavior::Default,
        }
    }
}
