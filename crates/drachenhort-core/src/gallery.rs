//! The gallery controller.
//!
//! [`Gallery`] owns everything the gallery view needs apart from the
//! entry animation: the load state of the card collection, the user's
//! filter settings and the modal selection. It is renderer-independent;
//! the desktop app keeps one in a signal and the CLI drives one directly.

use std::sync::Arc;

use crate::error::{GalleryError, GalleryResult};
use crate::filter::visible_cards;
use crate::selection::Selection;
use crate::types::{CardCollection, CategoryFilter, FilterState, FlattenedCard};

/// Progress of the one-time card load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready(Arc<CardCollection>),
    /// Terminal: the message is shown in place of the gallery
    Failed(String),
}

impl LoadState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LoadState::Loading)
    }
}

#[derive(Debug, Clone)]
pub struct Gallery {
    load: LoadState,
    load_started: bool,
    filter: FilterState,
    selection: Selection,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

impl Gallery {
    pub fn new() -> Self {
        Self {
            load: LoadState::Loading,
            load_started: false,
            filter: FilterState::default(),
            selection: Selection::Closed,
        }
    }

    /// Gallery over an already loaded collection.
    pub fn with_collection(collection: CardCollection) -> Self {
        let mut gallery = Self::new();
        gallery.begin_load();
        gallery.finish_load(Ok(collection));
        gallery
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Loading
    // ═══════════════════════════════════════════════════════════════════════

    /// Claim the one load of this gallery.
    ///
    /// Returns `true` exactly once; callers only start reading the card file
    /// when it does, so re-renders never trigger a second load.
    pub fn begin_load(&mut self) -> bool {
        if self.load_started {
            return false;
        }
        self.load_started = true;
        true
    }

    /// Record the outcome of the load.
    ///
    /// Results arriving after the gallery already reached a terminal state
    /// are dropped.
    pub fn finish_load(&mut self, result: GalleryResult<CardCollection>) {
        if self.load.is_terminal() {
            tracing::debug!("Ignoring late card load result");
            return;
        }

        self.load = match result {
            Ok(collection) => LoadState::Ready(Arc::new(collection)),
            Err(e) => {
                tracing::error!("Failed to load cards: {}", e);
                LoadState::Failed(e.to_string())
            }
        };
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn collection(&self) -> Option<&Arc<CardCollection>> {
        match &self.load {
            LoadState::Ready(collection) => Some(collection),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Category keys in document order (empty until loaded).
    pub fn categories(&self) -> Vec<String> {
        self.collection()
            .map(|c| c.category_names().map(str::to_string).collect())
            .unwrap_or_default()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Filtering
    // ═══════════════════════════════════════════════════════════════════════

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
        tracing::debug!(term = %self.filter.search_term, "Search term changed");
    }

    /// Select a category by selector value (`"all"` or a category key).
    ///
    /// Unknown keys are rejected and leave the filter unchanged.
    pub fn set_filter_type(&mut self, value: &str) -> GalleryResult<()> {
        let filter = CategoryFilter::from_value(value);
        if let CategoryFilter::Category(name) = &filter {
            let collection = self.collection().ok_or(GalleryError::NotLoaded)?;
            if !collection.has_category(name) {
                return Err(GalleryError::UnknownCategory(name.clone()));
            }
        }

        tracing::debug!(filter = %filter, "Category filter changed");
        self.filter.filter_type = filter;
        Ok(())
    }

    pub fn set_search_in_description(&mut self, enabled: bool) {
        self.filter.search_in_description = enabled;
    }

    /// Clear the search term and category filter.
    pub fn reset_filters(&mut self) {
        self.filter.reset();
        tracing::debug!("Filters reset");
    }

    /// Cards passing the current filter (empty until loaded).
    pub fn visible_cards(&self) -> Vec<FlattenedCard> {
        self.collection()
            .map(|c| visible_cards(c, &self.filter))
            .unwrap_or_default()
    }

    /// Loaded, but the filters exclude every card.
    pub fn has_empty_result(&self) -> bool {
        self.collection().is_some() && self.visible_cards().is_empty()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Selection
    // ═══════════════════════════════════════════════════════════════════════

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn select(&mut self, card: FlattenedCard) {
        self.selection.open(card);
    }

    pub fn close_modal(&mut self) {
        self.selection.close();
    }
}

/// Counter line shown above the grid ("1 Karte gefunden", "3 Karten gefunden").
pub fn result_summary(count: usize) -> String {
    let noun = if count == 1 { "Karte" } else { "Karten" };
    format!("{} {} gefunden", count, noun)
}
