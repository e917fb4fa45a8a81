use dioxus::prelude::*;

use crate::store::DataStore;
use crate::types::Item;

mod drawer;

pub use drawer::DrawerState;

/// Whether `selected` still has a matching id in `items`. No selection is always kept.
pub fn retains_selection(selected: Option<&Item>, items: &[Item]) -> bool {
    selected.map_or(true, |selected| items.iter().any(|item| item.id == selected.id))
}

/// Initial values for a window's [`AppState`]
#[derive(Debug, Clone, PartialEq)]
pub struct InitialState {
    pub drawer_open: bool,
    pub drawer_width: f64,
    pub selected: Option<Item>,
    pub clear_selection_on_close: bool,
}

/// Per-window application state.
///
/// # Copy Semantics
///
/// All fields are `Signal<T>`, which are cheap to copy, so `AppState` can be
/// moved into event handlers and async blocks without `.clone()`.
///
/// Per-field signals keep re-renders narrow: typing in the search input only
/// touches `drawer`, so the navbar (which watches `selected`) stays put.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppState {
    pub drawer: Signal<DrawerState>,
    pub items: Signal<Vec<Item>>,
    pub selected: Signal<Option<Item>>,
    pub title: Signal<String>,
    pub search_placeholder: Signal<String>,
    pub clear_selection_on_close: Signal<bool>,
}

impl AppState {
    /// Build signals from the initial values and a store snapshot.
    /// Must be called inside a Dioxus runtime.
    pub fn new(initial: InitialState, store: &DataStore) -> Self {
        let mut drawer = DrawerState {
            open: initial.drawer_open,
            ..DrawerState::default()
        };
        drawer.set_width(initial.drawer_width);

        Self {
            drawer: Signal::new(drawer),
            items: Signal::new(store.items.clone()),
            selected: Signal::new(initial.selected),
            title: Signal::new(store.title.clone()),
            search_placeholder: Signal::new(store.search_placeholder.clone()),
            clear_selection_on_close: Signal::new(initial.clear_selection_on_close),
        }
    }

    /// Mark `item` as the selected one
    pub fn select_item(&mut self, item: Item) {
        tracing::debug!(id = %item.id, name = %item.name, "Item selected");
        self.selected.set(Some(item));
    }

    pub fn clear_selection(&mut self) {
        self.selected.set(None);
    }

    /// Copy the shared store into this window's signals.
    ///
    /// A selection whose id no longer exists in the new items is dropped.
    pub fn sync_from_store(&mut self, store: &DataStore) {
        let keep = retains_selection(self.selected.read().as_ref(), &store.items);
        if !keep {
            tracing::debug!("Selected item vanished from the store");
            self.clear_selection();
        }
        self.items.set(store.items.clone());
        self.title.set(store.title.clone());
        self.search_placeholder.set(store.search_placeholder.clone());
    }

    /// Label of the drawer trigger: selected item name or the drawer title
    pub fn trigger_label(&self) -> String {
        match self.selected.read().as_ref() {
            Some(item) => item.name.clone(),
            None => self.title.read().clone(),
        }
    }
}
