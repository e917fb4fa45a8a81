pub mod header;
pub mod letter_index;
pub mod list_display;
pub mod search_input;

use dioxus::document;
use dioxus::prelude::*;

use header::DrawerHeader;
use letter_index::LetterIndex;
use list_display::ListDisplay;
use search_input::SearchInput;

use crate::state::AppState;

/// JavaScript to reset the list scroll position after a letter jump
const JS_SCROLL_LIST_TOP: &str = r#"
    const list = document.querySelector('.list-display');
    if (list) list.scrollTo({ top: 0 });
"#;

#[component]
pub fn Drawer() -> Element {
    let mut state = use_context::<AppState>();
    let drawer = state.drawer.read().clone();
    let is_open = drawer.open;

    let title = state.title.read().clone();
    let placeholder = state.search_placeholder.read().clone();
    let letters = state.index_letters();
    let filtered = state.filtered_items();
    let total = state.items.read().len();
    let shown = filtered.len();
    let selected_id = state.selected.read().as_ref().map(|item| item.id.clone());

    rsx! {
        aside {
            class: "drawer",
            class: if is_open { "open" },
            style: "width: {drawer.width}px;",

            // Contents mount on open so the search input grabs focus each time
            if is_open {
                div {
                    class: "drawer-top",
                    DrawerHeader {
                        title,
                        on_close: move |_| state.close_drawer(),
                    }
                    SearchInput {
                        value: drawer.search_term.clone(),
                        placeholder,
                        on_input: move |term| state.set_search_term(term),
                        on_focus: move |_| state.focus_search(),
                        on_escape: move |_| state.close_drawer(),
                    }
                }

                div {
                    class: "drawer-body",
                    LetterIndex {
                        letters,
                        selected_letter: drawer.selected_letter.clone(),
                        on_select: move |letter| {
                            state.select_letter(letter);
                            spawn(async move {
                                let _ = document::eval(JS_SCROLL_LIST_TOP).await;
                            });
                        },
                    }
                    ListDisplay {
                        items: filtered,
                        selected_id,
                        no_results_message: drawer.no_results_message(),
                        on_select: move |item| state.select_item(item),
                    }
                }

                div {
                    class: "drawer-footer",
                    "{shown} of {total}"
                }
            }
        }
    }
}
