// State module - manages application state

mod app_state;
pub use app_state::{AppState, DrawerState, InitialState};

mod persistence;
pub use persistence::PersistedState;
