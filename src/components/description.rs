//! Highlighted text and multi-line descriptions.

use dioxus::prelude::*;
use drachenhort_core::{highlight, render_description, Segment};

#[component]
fn Segments(segments: Vec<Segment>) -> Element {
    rsx! {
        for (i, segment) in segments.into_iter().enumerate() {
            if segment.highlighted {
                mark { key: "{i}", class: "match", "{segment.text}" }
            } else {
                span { key: "{i}", "{segment.text}" }
            }
        }
    }
}

/// `text` with every occurrence of `term` marked.
#[component]
pub fn HighlightedText(text: String, #[props(default)] term: String) -> Element {
    rsx! {
        Segments { segments: highlight(&text, &term) }
    }
}

/// A card description split on its `\n` markers.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Description {
///         text: card.description().to_string(),
///         highlight: Some("drache".to_string()),
///     }
/// }
/// ```
#[component]
pub fn Description(text: String, #[props(default)] highlight: Option<String>) -> Element {
    let lines = render_description(&text, highlight.as_deref());

    rsx! {
        p { class: "card-description",
            for (i, line) in lines.into_iter().enumerate() {
                span { key: "{i}",
                    Segments { segments: line.segments }
                    if line.line_break {
                        br {}
                    }
                }
            }
        }
    }
}
