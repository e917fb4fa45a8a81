use super::AppState;
use crate::config::{normalize_drawer_width, DEFAULT_DRAWER_WIDTH};
use crate::selector;
use crate::types::Item;
use dioxus::prelude::*;

/// State of the client selector drawer: visibility plus the filter inputs
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerState {
    pub open: bool,
    pub width: f64,
    pub search_term: String,
    pub selected_letter: Option<String>,
}

impl Default for DrawerState {
    fn default() -> Self {
        Self {
            open: true,
            width: DEFAULT_DRAWER_WIDTH,
            search_term: String::new(),
            selected_letter: None,
        }
    }
}

impl DrawerState {
    /// Update the search term. A non-blank term clears the letter filter.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        if !self.search_term.trim().is_empty() {
            self.selected_letter = None;
        }
    }

    /// Select an index letter (`None` means "All"). Clears the search term.
    pub fn select_letter(&mut self, letter: Option<String>) {
        self.selected_letter = letter;
        self.search_term.clear();
    }

    /// Focusing the search input drops the letter filter
    pub fn focus_search(&mut self) {
        self.selected_letter = None;
    }

    pub fn reset_filters(&mut self) {
        self.search_term.clear();
        self.selected_letter = None;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the drawer. Filters never survive a close.
    pub fn close(&mut self) {
        self.open = false;
        self.reset_filters();
    }

    pub fn toggle(&mut self) {
        self.set_open(!self.open);
    }

    pub fn set_open(&mut self, open: bool) {
        if open {
            self.open();
        } else {
            self.close();
        }
    }

    /// Whether moving the drawer to `open` drops the current selection
    pub fn drops_selection(open: bool, clear_selection_on_close: bool) -> bool {
        !open && clear_selection_on_close
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = normalize_drawer_width(width);
    }

    /// Items passing the current filters
    pub fn filtered(&self, items: &[Item]) -> Vec<Item> {
        selector::filter_items(items, &self.search_term, self.selected_letter.as_deref())
    }

    pub fn no_results_message(&self) -> String {
        selector::no_results_message(&self.search_term, self.selected_letter.as_deref())
    }
}

impl AppState {
    pub fn toggle_drawer(&mut self) {
        let open = !self.drawer.read().open;
        self.set_drawer_open(open);
    }

    /// Library API for embedders; the bundled UI only toggles and closes.
    pub fn open_drawer(&mut self) {
        self.set_drawer_open(true);
    }

    pub fn close_drawer(&mut self) {
        self.set_drawer_open(false);
    }

    /// Open or close the drawer, clearing the selection on close if configured
    pub fn set_drawer_open(&mut self, open: bool) {
        tracing::debug!(open, "Setting drawer visibility");
        self.drawer.write().set_open(open);
        if DrawerState::drops_selection(open, *self.clear_selection_on_close.read()) {
            self.clear_selection();
        }
    }

    pub fn set_search_term(&mut self, term: String) {
        self.drawer.write().set_search_term(term);
    }

    pub fn select_letter(&mut self, letter: Option<String>) {
        tracing::debug!(?letter, "Selecting index letter");
        self.drawer.write().select_letter(letter);
    }

    pub fn focus_search(&mut self) {
        self.drawer.write().focus_search();
    }

    /// Items passing the drawer filters
    pub fn filtered_items(&self) -> Vec<Item> {
        self.drawer.read().filtered(&self.items.read())
    }

    pub fn index_letters(&self) -> Vec<String> {
        selector::index_letters(&self.items.read())
    }
}
