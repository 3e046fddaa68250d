//! A single card in the grid.

use dioxus::prelude::*;
use drachenhort_core::{entry_motion, AnimationPhase, FlattenedCard, ENTRY_CARD_DURATION};

use super::{CardImage, Description, HighlightedText};

/// Inline style placing a card at its entry launch point.
///
/// Empty once the animation is over.
pub fn entry_style(phase: AnimationPhase, index: usize) -> String {
    if !phase.is_animating() {
        return String::new();
    }
    let motion = entry_motion(index);
    format!(
        "--entry-x: {}px; --entry-y: {}px; --entry-duration: {}ms; animation-delay: {}ms;",
        motion.offset_x,
        motion.offset_y,
        ENTRY_CARD_DURATION.as_millis(),
        motion.delay.as_millis()
    )
}

#[component]
pub fn CardTile(
    card: FlattenedCard,
    /// Position in the rendered list
    index: usize,
    phase: AnimationPhase,
    /// Search term highlighted in the name
    term: String,
    /// Term highlighted in the description, when descriptions are searched
    description_term: Option<String>,
    on_select: EventHandler<FlattenedCard>,
) -> Element {
    let class = if phase.is_animating() {
        "card-tile entering"
    } else {
        "card-tile"
    };
    let style = entry_style(phase, index);
    let clicked = card.clone();

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            onclick: move |_| on_select.call(clicked.clone()),

            CardImage { image: card.image().to_string(), alt: card.name().to_string() }
            div { class: "card-tile__header",
                h3 { class: "card-tile__name",
                    HighlightedText { text: card.name().to_string(), term: term }
                }
                span { class: "category-badge", "{card.category}" }
            }
            Description {
                text: card.description().to_string(),
                highlight: description_term,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_style_only_while_entering() {
        assert_eq!(entry_style(AnimationPhase::Complete, 3), "");
        assert_eq!(entry_style(AnimationPhase::Skipped, 0), "");

        let style = entry_style(AnimationPhase::Entering, 0);
        assert!(style.contains("--entry-x: -140px"));
        assert!(style.contains("animation-delay: 0ms"));
        assert!(style.contains("--entry-duration: 300ms"));
        assert!(entry_style(AnimationPhase::Entering, 2).contains("animation-delay: 120ms"));
    }

    #[test]
    fn stylesheet_duration_matches_core() {
        let declared = format!("--entry-duration: {}ms;", ENTRY_CARD_DURATION.as_millis());
        assert!(crate::theme::GLOBAL_STYLES.contains(&declared));
    }
}
