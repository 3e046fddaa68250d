//! Drachenhort Card Gallery Core Library
//!
//! Data model, loading, filtering and presentation state for the
//! Drachenhort card gallery, independent of any renderer.
//!
//! ## Overview
//!
//! A card file groups cards by category. The gallery loads one collection
//! from it, flattens it into a tagged list and derives the visible cards
//! from a search term, a category filter and a description-search toggle.
//! Matches are highlighted segment by segment, descriptions are split into
//! lines, and a one-shot entry animation is remembered in a key-value store.
//!
//! ## Quick Start
//!
//! ```ignore
//! use drachenhort_core::{load_collection, Gallery, DEFAULT_COLLECTION_KEY};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut gallery = Gallery::new();
//!     if gallery.begin_load() {
//!         let result = load_collection("assets/allCards.json", DEFAULT_COLLECTION_KEY).await;
//!         gallery.finish_load(result);
//!     }
//!
//!     gallery.set_search_term("drache");
//!     for card in gallery.visible_cards() {
//!         println!("[{}] {}", card.category, card.name());
//!     }
//!     Ok(())
//! }
//! ```

pub mod animation;
pub mod config;
pub mod description;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod highlight;
pub mod loader;
pub mod logging;
pub mod selection;
pub mod storage;
pub mod types;

// Re-exports
pub use animation::{
    entry_motion, run_entry_timer, AnimationPhase, EntryGate, EntryMotion, ENTRY_ANIMATION_DURATION,
    ENTRY_CARD_DURATION,
};
pub use config::{GalleryConfig, ImageSource};
pub use description::{render_description, DescriptionLine};
pub use error::{GalleryError, GalleryResult};
pub use filter::visible_cards;
pub use gallery::{result_summary, Gallery, LoadState};
pub use highlight::{contains_ignore_case, find_ignore_case, highlight, Segment};
pub use loader::{load_collection, parse_collection, DEFAULT_COLLECTION_KEY};
pub use selection::Selection;
pub use storage::{KeyValueStore, MemoryStore, RedbStore};
pub use types::*;
