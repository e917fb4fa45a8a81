use dioxus::core::use_drop;
use dioxus::prelude::*;
use tokio::sync::broadcast::error::RecvError;

use super::layout::Layout;
use crate::state::{AppState, InitialState, PersistedState};
use crate::store::{STORE, STORE_CHANGED};

#[component]
pub fn App(initial: InitialState) -> Element {
    // Initialize application state from the resolved preferences and the store
    let mut state = use_context_provider(|| AppState::new(initial, &STORE.read()));

    // Pick up data pushed into the shared store after launch
    use_future(move || async move {
        let mut rx = STORE_CHANGED.subscribe();
        loop {
            match rx.recv().await {
                Ok(()) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Store subscriber lagged, resyncing");
                }
                Err(RecvError::Closed) => break,
            }
            state.sync_from_store(&STORE.read());
        }
    });

    // Save last used state when the window closes
    use_drop(move || {
        PersistedState::from(&state).save();
    });

    let selected_name = state.selected.read().as_ref().map(|item| item.name.clone());

    rsx! {
        Layout {
            main {
                class: "main-content",
                match selected_name {
                    Some(name) => rsx! { p { "Selected: {name}" } },
                    None => rsx! { p { "No client selected" } },
                }
            }
        }
    }
}
