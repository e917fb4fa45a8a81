//! A searchable, alphabetically indexed client selector drawer for Dioxus.
//!
//! Hosts fill the shared [`store`] with items and mount
//! [`components::main_app::MainApp`] (or [`components::app::App`] with an
//! explicit [`state::InitialState`]). The filtering itself lives in
//! [`selector`] and has no UI dependency.

pub mod assets;
pub mod components;
pub mod config;
pub mod dataset;
pub mod selector;
pub mod state;
pub mod store;
pub mod types;
pub mod window;

pub use selector::{filter_items, index_letters};
pub use store::{set_data, set_drawer_title, set_search_placeholder};
pub use types::Item;
