//! Category Selector Component
//!
//! Dropdown choosing between all categories and a single one.

use dioxus::prelude::*;
use drachenhort_core::types::ALL_CATEGORIES;

/// Label of the "every category" option
pub const ALL_CATEGORIES_LABEL: &str = "Alle Typen";

/// One entry of the selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryOption {
    /// Value reported to `on_select`
    pub value: String,
    pub label: String,
}

/// Selector entries: "Alle Typen" first, then each category in order.
pub fn category_options(categories: &[String]) -> Vec<CategoryOption> {
    std::iter::once(CategoryOption {
        value: ALL_CATEGORIES.to_string(),
        label: ALL_CATEGORIES_LABEL.to_string(),
    })
    .chain(categories.iter().map(|name| CategoryOption {
        value: name.clone(),
        label: name.clone(),
    }))
    .collect()
}

#[derive(Clone, PartialEq, Props)]
pub struct CategorySelectProps {
    /// Category keys in display order
    pub categories: Vec<String>,
    /// Currently selected value (`"all"` or a category key)
    pub selected: String,
    /// Handler called with the chosen value
    pub on_select: EventHandler<String>,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CategorySelect {
///         categories: gallery.read().categories(),
///         selected: gallery.read().filter().filter_type.as_value().to_string(),
///         on_select: move |value: String| { let _ = gallery.write().set_filter_type(&value); },
///     }
/// }
/// ```
#[component]
pub fn CategorySelect(props: CategorySelectProps) -> Element {
    let options = category_options(&props.categories);
    let on_select = props.on_select;

    rsx! {
        select {
            class: "category-select",
            "aria-label": "Kartentyp",
            value: "{props.selected}",
            onchange: move |e| on_select.call(e.value()),
            for opt in options {
                option {
                    key: "{opt.value}",
                    value: "{opt.value}",
                    selected: opt.value == props.selected,
                    "{opt.label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_start_with_all() {
        let options = category_options(&["Raum".to_string(), "Leiche".to_string()]);
        let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["all", "Raum", "Leiche"]);
        assert_eq!(options[0].label, "Alle Typen");
    }

    #[test]
    fn options_without_categories() {
        assert_eq!(category_options(&[]).len(), 1);
    }
}
