//! Search box, category selector and result counter.

use dioxus::prelude::*;
use drachenhort_core::result_summary;
use drachenhort_ui::{CategorySelect, SearchInput, Toggle};

use crate::context::use_gallery;

#[component]
pub fn FilterBar(result_count: usize) -> Element {
    let mut gallery = use_gallery();

    let (term, selected, in_description, categories) = {
        let g = gallery.read();
        (
            g.filter().search_term.clone(),
            g.filter().filter_type.as_value().to_string(),
            g.filter().search_in_description,
            g.categories(),
        )
    };

    rsx! {
        div { class: "filter-bar",
            div { class: "filter-bar__row",
                SearchInput {
                    value: term,
                    oninput: move |value: String| gallery.write().set_search_term(value),
                }
                CategorySelect {
                    categories: categories,
                    selected: selected,
                    on_select: move |value: String| {
                        if let Err(e) = gallery.write().set_filter_type(&value) {
                            tracing::warn!("Ignoring category selection: {}", e);
                        }
                    },
                }
            }
            div { class: "filter-bar__row filter-bar__meta",
                Toggle {
                    checked: in_description,
                    on_toggle: move |enabled| gallery.write().set_search_in_description(enabled),
                    label: "Auch in Beschreibungen suchen".to_string(),
                }
                span { class: "result-count", "{result_summary(result_count)}" }
            }
        }
    }
}
