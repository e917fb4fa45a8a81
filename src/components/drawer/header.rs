use dioxus::prelude::*;

/// Drawer title with a close button
#[component]
pub fn DrawerHeader(title: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "drawer-header",
            h2 { "{title}" }
            button {
                class: "drawer-close",
                title: "Close",
                "aria-label": "Close sidebar",
                onclick: move |_| on_close.call(()),
                "✕"
            }
        }
    }
}
