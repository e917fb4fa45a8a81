use dioxus::prelude::*;

#[component]
pub fn SearchInput(
    value: String,
    placeholder: String,
    on_input: EventHandler<String>,
    on_focus: EventHandler<()>,
    on_escape: EventHandler<()>,
) -> Element {
    rsx! {
        input {
            r#type: "search",
            class: "search-input",
            name: "list-data-search",
            id: "list-data-search-input",
            placeholder: "{placeholder}",
            value: "{value}",
            // The input only mounts while the drawer is open
            onmounted: move |evt| async move {
                if let Err(e) = evt.set_focus(true).await {
                    tracing::debug!(?e, "Failed to focus search input");
                }
            },
            oninput: move |evt| on_input.call(evt.value()),
            onfocus: move |_| on_focus.call(()),
            onkeydown: move |evt| {
                if let Key::Escape = evt.key() {
                    on_escape.call(());
                }
            },
        }
    }
}
