//! End-to-end gallery scenarios
//!
//! Drive a [`Gallery`] the way the front ends do: load the card file,
//! change the filters, open and close the modal.

use std::sync::Arc;

use drachenhort_core::animation::ENTRY_ANIMATION_FLAG;
use drachenhort_core::{
    load_collection, parse_collection, render_description, result_summary, run_entry_timer,
    AnimationPhase, CategoryFilter, EntryGate, Gallery, GalleryError, KeyValueStore, LoadState,
    MemoryStore, DEFAULT_COLLECTION_KEY,
};
use tempfile::TempDir;

const DOC: &str = r#"{"Drachenhort": {
    "Raum": [{"Name":"Drachenhöhle","Description":"Ein dunkler Ort.","Image":"x.png"}],
    "Leiche": [{"Name":"Skelett","Description":"Knochen.","Image":"y.png"}]
}}"#;

fn gallery() -> Gallery {
    Gallery::with_collection(parse_collection(DOC.as_bytes(), DEFAULT_COLLECTION_KEY).unwrap())
}

fn visible_names(gallery: &Gallery) -> Vec<String> {
    gallery
        .visible_cards()
        .iter()
        .map(|c| c.name().to_string())
        .collect()
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn test_search_drachen_across_all_categories() {
    let mut gallery = gallery();
    gallery.set_search_term("drachen");
    gallery.set_filter_type("all").unwrap();

    assert_eq!(visible_names(&gallery), vec!["Drachenhöhle"]);
}

#[test]
fn test_category_only() {
    let mut gallery = gallery();
    gallery.set_filter_type("Leiche").unwrap();

    let cards = gallery.visible_cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name(), "Skelett");
    assert_eq!(cards[0].category, "Leiche");
}

#[test]
fn test_reset_restores_full_list() {
    let mut gallery = gallery();
    gallery.set_filter_type("Raum").unwrap();
    gallery.set_search_term("zzz");
    assert!(gallery.has_empty_result());
    assert_eq!(result_summary(gallery.visible_cards().len()), "0 Karten gefunden");

    gallery.reset_filters();

    assert_eq!(gallery.filter().search_term, "");
    assert_eq!(gallery.filter().filter_type, CategoryFilter::All);
    assert_eq!(visible_names(&gallery), vec!["Drachenhöhle", "Skelett"]);
    assert!(!gallery.has_empty_result());
}

#[test]
fn test_description_toggle() {
    let mut gallery = gallery();
    gallery.set_search_term("knochen");
    assert!(gallery.visible_cards().is_empty());

    gallery.set_search_in_description(true);
    assert_eq!(visible_names(&gallery), vec!["Skelett"]);
    assert_eq!(gallery.filter().description_highlight(), Some("knochen"));

    // Reset keeps the toggle
    gallery.reset_filters();
    assert!(gallery.filter().search_in_description);
}

// ============================================================================
// Modal
// ============================================================================

#[test]
fn test_modal_replaces_selection() {
    let mut gallery = gallery();
    let cards = gallery.visible_cards();

    gallery.select(cards[0].clone());
    gallery.select(cards[1].clone());
    assert_eq!(gallery.selection().card().map(|c| c.name()), Some("Skelett"));

    gallery.close_modal();
    assert!(gallery.selection().card().is_none());
}

#[test]
fn test_filtering_does_not_close_modal() {
    let mut gallery = gallery();
    let first = gallery.visible_cards()[0].clone();
    gallery.select(first);

    gallery.set_search_term("zzz");
    assert!(gallery.selection().is_open());
}

// ============================================================================
// Descriptions
// ============================================================================

#[test]
fn test_description_lines() {
    let lines = render_description("Zeile1\\nZeile2", None);
    let rendered: Vec<(String, bool)> = lines.iter().map(|l| (l.text(), l.line_break)).collect();
    assert_eq!(
        rendered,
        vec![("Zeile1".to_string(), true), ("Zeile2".to_string(), false)]
    );
}

// ============================================================================
// Loading
// ============================================================================

#[tokio::test]
async fn test_load_once_then_filter() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("allCards.json");
    std::fs::write(&path, DOC).unwrap();

    let mut gallery = Gallery::new();
    assert!(gallery.is_loading());
    assert!(gallery.visible_cards().is_empty());

    assert!(gallery.begin_load());
    let result = load_collection(&path, DEFAULT_COLLECTION_KEY).await;
    gallery.finish_load(result);
    assert!(!gallery.begin_load());

    assert!(matches!(gallery.load_state(), LoadState::Ready(_)));
    assert_eq!(gallery.categories(), vec!["Raum", "Leiche"]);
    assert_eq!(gallery.visible_cards().len(), 2);
}

#[tokio::test]
async fn test_failed_load_shows_error_state() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("allCards.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut gallery = Gallery::new();
    gallery.begin_load();
    let result = load_collection(&path, DEFAULT_COLLECTION_KEY).await;
    assert!(matches!(result, Err(GalleryError::Parse(_))));
    gallery.finish_load(result);

    assert!(gallery.error().is_some());
    assert!(gallery.collection().is_none());
    assert!(!gallery.has_empty_result());
}

// ============================================================================
// Entry animation
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_entry_animation_recorded_while_nothing_matches() {
    let store = Arc::new(MemoryStore::new());
    let mut gate = EntryGate::new(store.clone());
    let mut gallery = gallery();

    // The gallery is ready; the user filters everything away right away
    let phase = gate.phase();
    gallery.set_search_term("zzz");
    assert!(gallery.has_empty_result());

    assert!(run_entry_timer(phase, || gate.complete()).await);
    assert_eq!(gate.phase(), AnimationPhase::Complete);
    assert_eq!(store.get(ENTRY_ANIMATION_FLAG).unwrap().as_deref(), Some("true"));

    // Next launch
    assert_eq!(EntryGate::new(store).phase(), AnimationPhase::Skipped);
}
