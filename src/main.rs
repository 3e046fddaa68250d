#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use drachenhort_core::logging::LoggingBuilder;
use drachenhort_core::{EntryGate, GalleryConfig, MemoryStore, RedbStore, DEFAULT_COLLECTION_KEY};

use crate::context::SharedStore;

/// Drachenhort Kartensammlung - card gallery
#[derive(Parser, Debug)]
#[command(name = "drachenhort-desktop")]
#[command(about = "Drachenhort Kartensammlung - browse the Drachenhort card set")]
struct Args {
    /// Card file to load
    #[arg(short, long, default_value = drachenhort_core::config::DEFAULT_CARDS_PATH)]
    cards: PathBuf,

    /// Data directory for settings and logs
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Top-level collection to load from the card file
    #[arg(long, default_value = DEFAULT_COLLECTION_KEY)]
    collection: String,

    /// Play the entry animation again on this launch
    #[arg(long)]
    replay_intro: bool,
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("drachenhort")
}

/// Open the settings database, falling back to memory if it is unavailable
/// (for example while another instance holds the lock).
fn open_store(config: &GalleryConfig) -> SharedStore {
    match RedbStore::open(config.settings_path()) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::warn!("Settings store unavailable, using memory: {}", e);
            Arc::new(MemoryStore::new())
        }
    }
}

fn main() {
    let args = Args::parse();

    let config = GalleryConfig::new(args.data_dir.unwrap_or_else(default_data_dir))
        .with_cards_path(args.cards)
        .with_collection_key(args.collection);

    match LoggingBuilder::new("desktop")
        .with_logs_dir(config.logs_dir())
        .with_filter("drachenhort=info,drachenhort_core=info")
        .init()
    {
        Ok(Some(path)) => tracing::info!("Logging to {:?}", path),
        Ok(None) => {}
        Err(e) => eprintln!("Failed to initialize logging: {}", e),
    }

    let store = open_store(&config);
    if args.replay_intro {
        if let Err(e) = EntryGate::replay(store.as_ref()) {
            tracing::warn!("Failed to reset entry animation: {}", e);
        }
    }

    tracing::info!(
        "Starting with cards {:?} and data dir {:?}",
        config.cards_path,
        config.data_dir
    );

    context::install(config, store);

    let window_config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(pages::PAGE_TITLE)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window_config)
        .launch(app::App);
}
