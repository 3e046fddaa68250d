//! Core types for the Drachenhort gallery

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Value of the category selector that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// A single card as stored in the card file.
///
/// Cards are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "Name")]
    pub name: String,
    /// Raw description; line breaks are the literal two characters `\n`
    #[serde(rename = "Description")]
    pub description: String,
    /// Image reference (path relative to the card file, or URL)
    #[serde(rename = "Image")]
    pub image: String,
}

/// One named group of cards, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub cards: Vec<Card>,
}

/// The loaded card set: category name -> ordered cards.
///
/// Category order is the key order of the source document. Unlike a
/// `HashMap`, iteration order is therefore stable and meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardCollection {
    categories: Vec<Category>,
}

impl CardCollection {
    /// Build a collection from categories.
    ///
    /// Later categories with a name already present are merged into the
    /// first one so that category keys stay unique.
    pub fn from_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut merged: Vec<Category> = Vec::new();
        for category in categories {
            match merged.iter_mut().find(|c| c.name == category.name) {
                Some(existing) => existing.cards.extend(category.cards),
                None => merged.push(category),
            }
        }
        Self { categories: merged }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category keys in document order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }

    /// Cards of one category, if it exists.
    pub fn cards_in(&self, name: &str) -> Option<&[Card]> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.cards.as_slice())
    }

    /// Total number of cards across all categories.
    pub fn card_count(&self) -> usize {
        self.categories.iter().map(|c| c.cards.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.card_count() == 0
    }

    /// Tag every card with its category and concatenate, keeping
    /// category order and the order within each category.
    pub fn flatten(&self) -> Vec<FlattenedCard> {
        self.categories
            .iter()
            .flat_map(|category| {
                category.cards.iter().map(move |card| FlattenedCard {
                    card: card.clone(),
                    category: category.name.clone(),
                })
            })
            .collect()
    }
}

impl Serialize for CardCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &category.cards)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CardCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = CardCollection;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category names to card lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut categories: Vec<Category> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, cards)) = map.next_entry::<String, Vec<Card>>()? {
                    if categories.iter().any(|c| c.name == name) {
                        return Err(de::Error::custom(format_args!(
                            "duplicate category `{}`",
                            name
                        )));
                    }
                    categories.push(Category { name, cards });
                }
                Ok(CardCollection { categories })
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}

/// A card tagged with the category it was loaded from.
///
/// Derived from a [`CardCollection`]; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedCard {
    pub card: Card,
    pub category: String,
}

impl FlattenedCard {
    pub fn name(&self) -> &str {
        &self.card.name
    }

    pub fn description(&self) -> &str {
        &self.card.description
    }

    pub fn image(&self) -> &str {
        &self.card.image
    }

    /// Render key for a card at a position in a rendered list.
    ///
    /// Names are not unique across the set, so the position is part of it.
    pub fn list_key(&self, index: usize) -> String {
        format!("{}-{}-{}", self.category, self.card.name, index)
    }
}

/// Category selection of the filter bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Show every category
    #[default]
    All,
    /// Show only cards of this category key
    Category(String),
}

impl CategoryFilter {
    /// Parse a selector value; `"all"` selects every category.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    /// The selector value for this filter.
    pub fn as_value(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(name) => name,
        }
    }

    /// Whether a card tagged `category` passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => name == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// User-controlled search and filter settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterState {
    pub search_term: String,
    pub filter_type: CategoryFilter,
    /// Also match the search term against descriptions
    pub search_in_description: bool,
}

impl FilterState {
    /// Clear the search term and category filter.
    ///
    /// The description toggle is a search scope preference and survives.
    pub fn reset(&mut self) {
        self.search_term.clear();
        self.filter_type = CategoryFilter::All;
    }

    /// Term to highlight in descriptions, if descriptions are searched.
    pub fn description_highlight(&self) -> Option<&str> {
        if self.search_in_description && !self.search_term.is_empty() {
            Some(&self.search_term)
        } else {
            None
        }
    }
}
