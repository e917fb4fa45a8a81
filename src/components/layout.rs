use dioxus::prelude::*;

use super::drawer::Drawer;
use crate::state::AppState;

/// Navbar with the drawer trigger, the page content, and the drawer itself
#[component]
pub fn Layout(children: Element) -> Element {
    let mut state = use_context::<AppState>();
    let is_open = state.drawer.read().open;
    let label = state.trigger_label();

    rsx! {
        div {
            class: "layout",

            div {
                class: "layout-content",
                nav {
                    class: "navbar",
                    DrawerTrigger { label }
                }
                {children}
            }

            if is_open {
                div {
                    class: "drawer-overlay",
                    "aria-label": "close sidebar",
                    onclick: move |_| state.close_drawer(),
                }
            }

            Drawer {}
        }
    }
}

/// Button toggling the drawer, labelled with the current selection
#[component]
pub fn DrawerTrigger(label: String) -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        button {
            class: "drawer-trigger",
            onclick: move |_| state.toggle_drawer(),
            "{label}"
        }
    }
}
