use dioxus::prelude::*;

/// Vertical "All" + A-Z style index; `None` stands for "All"
#[component]
pub fn LetterIndex(
    letters: Vec<String>,
    #[props(!optional)] selected_letter: Option<String>,
    on_select: EventHandler<Option<String>>,
) -> Element {
    rsx! {
        div {
            class: "letter-index",
            button {
                class: if selected_letter.is_none() { "letter-button active" } else { "letter-button" },
                onclick: move |_| on_select.call(None),
                "All"
            }
            for letter in letters {
                button {
                    key: "{letter}",
                    class: if selected_letter.as_deref() == Some(letter.as_str()) { "letter-button active" } else { "letter-button" },
                    onclick: {
                        let letter = letter.clone();
                        move |_| on_select.call(Some(letter.clone()))
                    },
                    "{letter}"
                }
            }
        }
    }
}
