use dioxus::prelude::*;

use crate::store;
use crate::window::settings;

/// Root component of the main window
///
/// Resolves the initial window state once and hands it to [`App`](super::app::App).
#[component]
pub fn MainApp() -> Element {
    let initial = use_hook(|| {
        let initial = settings::initial_state(&store::data());
        tracing::debug!(?initial, "Resolved initial state");
        initial
    });

    rsx! {
        super::app::App { initial }
    }
}
