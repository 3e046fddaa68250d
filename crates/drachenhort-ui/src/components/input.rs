//! Input Components
//!
//! The gallery's search box and the description-search toggle.

use dioxus::prelude::*;

/// Search input with icon
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Current search value
    pub value: String,
    /// Handler called on every keystroke
    pub oninput: EventHandler<String>,
    #[props(default = "Suche nach Kartennamen...".to_string())]
    pub placeholder: String,
}

/// Free-text search box
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SearchInput {
///         value: gallery.read().filter().search_term.clone(),
///         oninput: move |term| gallery.write().set_search_term(term),
///     }
/// }
/// ```
#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon", "\u{1F50D}" }
            input {
                class: "input-field search-input",
                r#type: "search",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ToggleProps {
    pub checked: bool,
    /// Receives the new state
    pub on_toggle: EventHandler<bool>,
    pub label: String,
}

/// Labelled checkbox
#[component]
pub fn Toggle(props: ToggleProps) -> Element {
    let checked = props.checked;

    rsx! {
        label { class: if checked { "toggle checked" } else { "toggle" },
            input {
                r#type: "checkbox",
                checked: checked,
                onclick: move |_| props.on_toggle.call(!checked),
            }
            span { class: "toggle-label", "{props.label}" }
        }
    }
}
