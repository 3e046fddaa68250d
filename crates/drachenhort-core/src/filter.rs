//! Derivation of the visible card list from the filter state.

use crate::highlight::contains_ignore_case;
use crate::types::{CardCollection, FilterState, FlattenedCard};

/// Whether a single card passes the search and category predicates.
pub fn matches(card: &FlattenedCard, filter: &FilterState) -> bool {
    let term = filter.search_term.as_str();
    let matches_search = contains_ignore_case(card.name(), term)
        || (filter.search_in_description && contains_ignore_case(card.description(), term));

    matches_search && filter.filter_type.matches(&card.category)
}

/// Cards to display for `filter`, in collection order.
///
/// Pure: the same collection and filter always give the same list.
pub fn visible_cards(collection: &CardCollection, filter: &FilterState) -> Vec<FlattenedCard> {
    collection
        .flatten()
        .into_iter()
        .filter(|card| matches(card, filter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Card, CategoryFilter, Category};

    fn collection() -> CardCollection {
        let card = |name: &str, description: &str| Card {
            name: name.to_string(),
            description: description.to_string(),
            image: format!("{}.png", name.to_lowercase()),
        };
        CardCollection::from_categories(vec![
            Category {
                name: "Raum".into(),
                cards: vec![
                    card("Drachenhöhle", "Ein dunkler Ort."),
                    card("Schatzkammer", "Gold und ein schlafender Drache."),
                ],
            },
            Category {
                name: "Monster".into(),
                cards: vec![card("DRACHE", "Feuer."), card("DracheXYZ", "Test.")],
            },
        ])
    }

    fn names(cards: &[FlattenedCard]) -> Vec<&str> {
        cards.iter().map(|c| c.name()).collect()
    }

    #[test]
    fn test_empty_filter_shows_everything() {
        let cards = visible_cards(&collection(), &FilterState::default());
        assert_eq!(cards.len(), 4);
    }

    #[test]
    fn test_name_search_is_case_insensitive() {
        let filter = FilterState {
            search_term: "drache".into(),
            ..Default::default()
        };
        let cards = visible_cards(&collection(), &filter);
        assert_eq!(names(&cards), vec!["Drachenhöhle", "DRACHE", "DracheXYZ"]);
    }

    #[test]
    fn test_description_only_with_toggle() {
        let mut filter = FilterState {
            search_term: "schlafender".into(),
            ..Default::default()
        };
        assert!(visible_cards(&collection(), &filter).is_empty());

        filter.search_in_description = true;
        let cards = visible_cards(&collection(), &filter);
        assert_eq!(names(&cards), vec!["Schatzkammer"]);
    }

    #[test]
    fn test_category_and_search_combine() {
        let filter = FilterState {
            search_term: "drache".into(),
            filter_type: CategoryFilter::Category("Monster".into()),
            search_in_description: false,
        };
        let cards = visible_cards(&collection(), &filter);
        assert_eq!(names(&cards), vec!["DRACHE", "DracheXYZ"]);
        assert!(cards.iter().all(|c| c.category == "Monster"));
    }
}
