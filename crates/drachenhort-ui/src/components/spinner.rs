//! Loading spinner shown while the card file is read.

use dioxus::prelude::*;

#[component]
pub fn Spinner(#[props(default)] label: Option<String>) -> Element {
    rsx! {
        div { class: "spinner-container",
            div { class: "spinner", role: "status" }
            if let Some(label) = label {
                p { class: "spinner-label", "{label}" }
            }
        }
    }
}
