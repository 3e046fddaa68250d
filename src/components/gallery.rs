//! Card Gallery Component
//!
//! Filter bar, card grid, empty state and detail modal over the shared
//! [`Gallery`](drachenhort_core::Gallery) signal.

use dioxus::prelude::*;
use drachenhort_core::{FlattenedCard, LoadState};
use drachenhort_ui::{Button, Spinner};

use super::{CardModal, CardTile, FilterBar};
use crate::context::{use_entry_gate, use_gallery};

/// Shown under the spinner while the card file is read.
pub const LOADING_MESSAGE: &str = "Karten werden geladen...";

/// Shown instead of the gallery when the card file cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Fehler beim Laden der Karten";

#[component]
pub fn CardGallery() -> Element {
    let gallery = use_gallery();
    let state = gallery.read().load_state().clone();

    match state {
        LoadState::Loading => rsx! {
            div { class: "gallery-loading",
                Spinner { label: LOADING_MESSAGE.to_string() }
            }
        },
        LoadState::Failed(detail) => rsx! {
            div { class: "gallery-error",
                p { class: "gallery-error__title", "{LOAD_ERROR_MESSAGE}" }
                p { class: "gallery-error__detail", "{detail}" }
            }
        },
        LoadState::Ready(_) => rsx! { GalleryView {} },
    }
}

/// The loaded gallery.
#[component]
fn GalleryView() -> Element {
    let mut gallery = use_gallery();
    let visible = use_memo(move || gallery.read().visible_cards());

    let selected = gallery.read().selection().card().cloned();
    let description_term = gallery
        .read()
        .filter()
        .description_highlight()
        .map(str::to_string);

    rsx! {
        div { class: "gallery",
            FilterBar { result_count: visible.read().len() }

            if visible.read().is_empty() {
                EmptyResult {}
            } else {
                CardGrid { cards: visible() }
            }

            if let Some(card) = selected {
                CardModal {
                    card: card,
                    description_term: description_term,
                    on_close: move |_| gallery.write().close_modal(),
                }
            }
        }
    }
}

/// Grid of card tiles.
#[component]
fn CardGrid(cards: Vec<FlattenedCard>) -> Element {
    let mut gallery = use_gallery();
    let gate = use_entry_gate();

    let phase = gate.read().phase();
    let term = gallery.read().filter().search_term.clone();
    let description_term = gallery
        .read()
        .filter()
        .description_highlight()
        .map(str::to_string);

    rsx! {
        div { class: "card-grid",
            for (index, card) in cards.into_iter().enumerate() {
                CardTile {
                    key: "{card.list_key(index)}",
                    card: card,
                    index: index,
                    phase: phase,
                    term: term.clone(),
                    description_term: description_term.clone(),
                    on_select: move |card| gallery.write().select(card),
                }
            }
        }
    }
}

/// Filters exclude every card: offer the one-click reset.
#[component]
fn EmptyResult() -> Element {
    let mut gallery = use_gallery();

    rsx! {
        div { class: "empty-result",
            p { class: "empty-result__text", "Keine Karten gefunden" }
            Button {
                class: "empty-result__reset",
                onclick: move |_| gallery.write().reset_filters(),
                "Filter zurücksetzen"
            }
        }
    }
}
