//! Process-wide data store for the drawer.
//!
//! This module provides:
//! - `DataStore`: items plus the drawer title and search placeholder
//! - `STORE`: Global static for app-wide access
//! - `STORE_CHANGED`: Broadcast channel so mounted drawers can refresh
//!
//! The setters are the embedding API: a host application fills the store
//! and every open drawer picks up the change.

use parking_lot::RwLock;
use std::sync::LazyLock;
use tokio::sync::broadcast;

use crate::config::{DEFAULT_DRAWER_TITLE, DEFAULT_SEARCH_PLACEHOLDER};
use crate::types::Item;

#[derive(Debug, Clone, PartialEq)]
pub struct DataStore {
    pub items: Vec<Item>,
    pub title: String,
    pub search_placeholder: String,
}

impl Default for DataStore {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            title: DEFAULT_DRAWER_TITLE.to_string(),
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
        }
    }
}

/// Global store instance. Starts empty.
pub static STORE: LazyLock<RwLock<DataStore>> = LazyLock::new(|| RwLock::new(DataStore::default()));

/// Broadcast channel for store changes
///
/// The payload is empty since subscribers should read from STORE directly.
pub static STORE_CHANGED: LazyLock<broadcast::Sender<()>> =
    LazyLock::new(|| broadcast::channel(16).0);

fn update(f: impl FnOnce(&mut DataStore)) {
    f(&mut *STORE.write());
    STORE_CHANGED.send(()).ok();
}

/// Replace the items shown by every drawer
pub fn set_data(items: Vec<Item>) {
    tracing::debug!(count = items.len(), "Setting drawer data");
    update(|store| store.items = items);
}

/// Set the title shown in the drawer header
pub fn set_drawer_title(title: impl Into<String>) {
    let title = title.into();
    update(|store| store.title = title);
}

/// Set the placeholder text of the search input
pub fn set_search_placeholder(placeholder: impl Into<String>) {
    let placeholder = placeholder.into();
    update(|store| store.search_placeholder = placeholder);
}

/// Snapshot of the current items
pub fn data() -> Vec<Item> {
    STORE.read().items.clone()
}

/// Number of items in the store. Library API for embedders.
pub fn data_len() -> usize {
    STORE.read().items.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    // The store is a process-wide global; keep every assertion on it in a
    // single test so parallel tests cannot interleave.
    #[test]
    fn test_store_setters_broadcast() {
        let mut rx = STORE_CHANGED.subscribe();

        set_data(vec![Item::new("1", "Alice"), Item::new("2", "Bob")]);
        assert_eq!(data_len(), 2);
        assert_eq!(data()[1].name, "Bob");
        assert!(rx.try_recv().is_ok());

        set_drawer_title("Pick one");
        set_search_placeholder("Find...");
        {
            let store = STORE.read();
            assert_eq!(store.title, "Pick one");
            assert_eq!(store.search_placeholder, "Find...");
        }
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_data_store_default() {
        let store = DataStore::default();
        assert!(store.items.is_empty());
        assert_eq!(store.title, "Select Client");
        assert_eq!(store.search_placeholder, "Search clients...");
    }
}
