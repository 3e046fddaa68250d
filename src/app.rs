use dioxus::prelude::*;
use drachenhort_core::{load_collection, run_entry_timer, EntryGate, Gallery, LoadState};

use crate::context::{get_config, get_store};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the gallery state, starts the one card
/// load of this mount and, once it is ready, the entry animation timer.
#[component]
pub fn App() -> Element {
    let mut gallery: Signal<Gallery> = use_signal(Gallery::new);
    let mut gate: Signal<EntryGate> = use_signal(|| EntryGate::new(get_store()));
    let mut entry_timer_started = use_signal(|| false);

    use_context_provider(|| gallery);
    use_context_provider(|| gate);

    use_effect(move || {
        if !gallery.write().begin_load() {
            return;
        }
        spawn(async move {
            let config = get_config();
            let result = load_collection(&config.cards_path, &config.collection_key).await;
            gallery.write().finish_load(result);
        });
    });

    use_effect(move || {
        let ready = matches!(gallery.read().load_state(), LoadState::Ready(_));
        if !ready || *entry_timer_started.peek() {
            return;
        }
        entry_timer_started.set(true);

        let phase = gate.peek().phase();
        spawn(async move {
            run_entry_timer(phase, move || gate.write().complete()).await;
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
