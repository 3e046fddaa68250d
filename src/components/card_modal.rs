//! Card Detail Modal
//!
//! Full view of one card. Clicking the backdrop or the close button
//! closes it; clicks inside the dialog do not.

use dioxus::prelude::*;
use drachenhort_core::FlattenedCard;
use drachenhort_ui::CloseButton;

use super::{CardImage, Description};

#[component]
pub fn CardModal(
    card: FlattenedCard,
    #[props(default)] description_term: Option<String>,
    on_close: EventHandler<()>,
) -> Element {
    let name = card.name().to_string();

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "card-modal",
                role: "dialog",
                onclick: move |e| e.stop_propagation(),

                CloseButton { onclick: move |_| on_close.call(()) }

                CardImage {
                    image: card.image().to_string(),
                    alt: name.clone(),
                }

                div { class: "card-modal__body",
                    div { class: "card-modal__header",
                        h2 { class: "card-modal__title", "{name}" }
                        span { class: "category-badge", "{card.category}" }
                    }
                    Description {
                        text: card.description().to_string(),
                        highlight: description_term,
                    }
                }
            }
        }
    }
}
