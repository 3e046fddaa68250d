//! Drachenhort CLI
//!
//! Thin wrapper around drachenhort-core for browsing the card set in a
//! terminal.
//!
//! ## Usage
//!
//! ```bash
//! # List every card
//! drachenhort list
//!
//! # Search names (matches are wrapped in «»)
//! drachenhort list --search drache
//!
//! # Search names and descriptions within one category, with descriptions
//! drachenhort list --search gold --descriptions --category Raum --long
//!
//! # Category keys with card counts
//! drachenhort categories
//!
//! # One card in full
//! drachenhort show Drachenhöhle
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use drachenhort_core::logging::LoggingBuilder;
use drachenhort_core::{
    highlight, load_collection, render_description, result_summary, CardCollection,
    DescriptionLine, FlattenedCard, Gallery, Segment, DEFAULT_COLLECTION_KEY,
};

/// Drachenhort Kartensammlung - browse the card set
#[derive(Parser)]
#[command(name = "drachenhort")]
#[command(version = "0.1.0")]
#[command(about = "Drachenhort Kartensammlung - browse the card set")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Card file to load
    #[arg(short, long, global = true, default_value = drachenhort_core::config::DEFAULT_CARDS_PATH)]
    cards: PathBuf,

    /// Top-level collection to load from the card file
    #[arg(long, global = true, default_value = DEFAULT_COLLECTION_KEY)]
    collection: String,

    /// Also write JSONL logs into this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the cards passing the filters
    List {
        /// Free-text search term
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category key, or "all"
        #[arg(short = 't', long, default_value = "all")]
        category: String,

        /// Match the search term against descriptions too
        #[arg(short, long)]
        descriptions: bool,

        /// Print descriptions below each card
        #[arg(short, long)]
        long: bool,
    },

    /// List category keys with their card counts
    Categories,

    /// Show one card in full
    Show {
        /// Card name (case-insensitive)
        name: String,
    },
}

fn setup_logging(verbosity: u8, log_dir: Option<PathBuf>) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let mut builder = LoggingBuilder::new("cli").with_filter(filter);
    if let Some(dir) = log_dir {
        builder = builder.with_logs_dir(dir);
    }
    if let Err(e) = builder.init() {
        eprintln!("Failed to initialize logging: {}", e);
    }
}

/// Render segments as plain text with matches wrapped in «».
fn marked(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| {
            if s.highlighted {
                format!("«{}»", s.text)
            } else {
                s.text.clone()
            }
        })
        .collect()
}

fn print_description(lines: &[DescriptionLine], indent: &str) {
    for line in lines {
        println!("{}{}", indent, marked(&line.segments));
    }
}

fn find_card(collection: &CardCollection, name: &str) -> Option<FlattenedCard> {
    let wanted = name.to_lowercase();
    collection
        .flatten()
        .into_iter()
        .find(|card| card.name().to_lowercase() == wanted)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.log_dir);

    let collection = load_collection(&cli.cards, &cli.collection)
        .await
        .with_context(|| format!("Fehler beim Laden der Karten aus {}", cli.cards.display()))?;
    let mut gallery = Gallery::with_collection(collection);

    match cli.command {
        Commands::List {
            search,
            category,
            descriptions,
            long,
        } => {
            gallery.set_search_term(search);
            gallery.set_search_in_description(descriptions);
            gallery.set_filter_type(&category)?;

            let cards = gallery.visible_cards();
            if cards.is_empty() {
                println!("Keine Karten gefunden");
                return Ok(());
            }

            let term = gallery.filter().search_term.clone();
            let description_term = gallery.filter().description_highlight();
            for card in &cards {
                println!("[{}] {}", card.category, marked(&highlight(card.name(), &term)));
                if long {
                    print_description(&render_description(card.description(), description_term), "    ");
                }
            }
            println!();
            println!("{}", result_summary(cards.len()));
        }

        Commands::Categories => {
            if let Some(collection) = gallery.collection() {
                for category in collection.categories() {
                    println!("{} ({})", category.name, category.cards.len());
                }
            }
        }

        Commands::Show { name } => {
            let collection = gallery
                .collection()
                .context("Cards are not loaded")?;
            let card = find_card(collection, &name)
                .with_context(|| format!("Card not found: {}", name))?;

            println!("{}", card.name());
            println!("  Typ: {}", card.category);
            println!("  Bild: {}", card.image());
            println!();
            print_description(&render_description(card.description(), None), "");
        }
    }

    Ok(())
}
