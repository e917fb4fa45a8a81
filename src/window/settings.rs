use std::sync::OnceLock;

use crate::config::{normalize_drawer_width, DrawerConfig, CONFIG};
use crate::state::{InitialState, PersistedState};
use crate::types::Item;

/// Launch-time override forcing the drawer closed (`--closed`)
static START_CLOSED: OnceLock<bool> = OnceLock::new();

/// Force every new window to start with the drawer closed. Only the first call wins.
pub fn set_start_closed(closed: bool) {
    let _ = START_CLOSED.set(closed);
}

fn start_closed() -> bool {
    START_CLOSED.get().copied().unwrap_or(false)
}

// ============================================================================
// Preference Types
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct DrawerPreference {
    pub open: bool,
    pub width: f64,
    pub selected_id: Option<String>,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Drawer settings for a new window, from the config defaults or the last
/// closed window depending on `on_startup`. `start_closed` overrides both.
pub fn resolve_drawer_preference(
    config: &DrawerConfig,
    last: &PersistedState,
    start_closed: bool,
) -> DrawerPreference {
    let preference = config.on_startup.choose(
        || DrawerPreference {
            open: config.default_open,
            width: config.default_width,
            selected_id: None,
        },
        || DrawerPreference {
            open: last.drawer_open,
            width: last.drawer_width,
            selected_id: last.selected_id.clone(),
        },
    );
    DrawerPreference {
        open: preference.open && !start_closed,
        width: normalize_drawer_width(preference.width),
        ..preference
    }
}

/// Find the item with `selected_id`. Ids that vanished from the data yield `None`.
pub fn find_selected(items: &[Item], selected_id: Option<&str>) -> Option<Item> {
    let id = selected_id?;
    let found = items.iter().find(|item| item.id == id).cloned();
    if found.is_none() {
        tracing::debug!(id, "Previously selected item no longer exists");
    }
    found
}

// ============================================================================
// Public API
// ============================================================================

/// Initial state of the main window for the given items
pub fn initial_state(items: &[Item]) -> InitialState {
    let cfg = CONFIG.read();
    let preference =
        resolve_drawer_preference(&cfg.drawer, &PersistedState::load(), start_closed());
    InitialState {
        drawer_open: preference.open,
        drawer_width: preference.width,
        selected: find_selected(items, preference.selected_id.as_deref()),
        clear_selection_on_close: cfg.drawer.clear_selection_on_close,
    }
}
