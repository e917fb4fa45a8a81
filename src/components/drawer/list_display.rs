use dioxus::prelude::*;

use crate::types::Item;

const DEFAULT_NO_RESULTS: &str = "No clients found.";

/// Filtered rows, or a fallback message when there are none
#[component]
pub fn ListDisplay(
    items: Vec<Item>,
    #[props(!optional)] selected_id: Option<String>,
    no_results_message: String,
    on_select: EventHandler<Item>,
) -> Element {
    rsx! {
        div {
            class: "list-display",
            if items.is_empty() {
                NoResults { message: no_results_message }
            } else {
                // Ids are not guaranteed unique, so the key includes the position
                for (index, item) in items.iter().enumerate() {
                    ListItem {
                        key: "{index}-{item.id}",
                        selected: selected_id.as_deref() == Some(item.id.as_str()),
                        item: item.clone(),
                        on_select,
                    }
                }
            }
        }
    }
}

#[component]
pub fn ListItem(item: Item, selected: bool, on_select: EventHandler<Item>) -> Element {
    let id = item.id.clone();
    let name = item.name.clone();
    rsx! {
        button {
            class: if selected { "list-item selected" } else { "list-item" },
            title: "{id}",
            onclick: move |_| on_select.call(item.clone()),
            "{name}"
        }
    }
}

#[component]
pub fn NoResults(#[props(default = DEFAULT_NO_RESULTS.to_string())] message: String) -> Element {
    rsx! {
        div { class: "no-results", "{message}" }
    }
}
