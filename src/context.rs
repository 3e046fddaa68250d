//! Shared application context.
//!
//! Configuration and the settings store are fixed before launch and kept in
//! process-wide cells. Gallery state lives in signals provided by
//! [`crate::app::App`].
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut gallery = use_gallery();
//! gallery.write().set_search_term("drache");
//! ```

use std::sync::{Arc, OnceLock};

use dioxus::prelude::*;
use drachenhort_core::{EntryGate, Gallery, GalleryConfig, KeyValueStore, MemoryStore};

/// Settings store shared by every component.
pub type SharedStore = Arc<dyn KeyValueStore>;

static CONFIG: OnceLock<GalleryConfig> = OnceLock::new();
static STORE: OnceLock<SharedStore> = OnceLock::new();

/// Fix configuration and store for the lifetime of the process.
///
/// Later calls are ignored.
pub fn install(config: GalleryConfig, store: SharedStore) {
    let _ = CONFIG.set(config);
    let _ = STORE.set(store);
}

/// Configuration set at startup (defaults if never installed).
pub fn get_config() -> GalleryConfig {
    CONFIG
        .get()
        .cloned()
        .unwrap_or_else(|| GalleryConfig::new("."))
}

/// Settings store set at startup (an in-memory store if never installed).
pub fn get_store() -> SharedStore {
    STORE
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(MemoryStore::new()))
}

/// Hook to access the gallery controller.
pub fn use_gallery() -> Signal<Gallery> {
    use_context::<Signal<Gallery>>()
}

/// Hook to access the entry animation gate.
pub fn use_entry_gate() -> Signal<EntryGate> {
    use_context::<Signal<EntryGate>>()
}
