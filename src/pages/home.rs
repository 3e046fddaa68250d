//! The only page: title and gallery.

use dioxus::prelude::*;

use crate::components::CardGallery;

/// Heading of the page and title of the window.
pub const PAGE_TITLE: &str = "Drachenhort Kartensammlung";

#[component]
pub fn Home() -> Element {
    rsx! {
        main { class: "page",
            div { class: "page-inner",
                h1 { class: "page-title", "{PAGE_TITLE}" }
                CardGallery {}
            }
        }
    }
}
