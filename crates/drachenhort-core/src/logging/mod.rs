//! JSONL logging for gallery sessions.
//!
//! Every run of an application writes its tracing events to a JSONL file
//! under the data directory, one self-contained JSON object per line:
//!
//! ```text
//! <data_dir>/logs/
//! ├── 2026-10-18_desktop.jsonl
//! └── 2026-10-18_cli.jsonl
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use drachenhort_core::logging::JsonlLayer;
//! use tracing_subscriber::prelude::*;
//!
//! let jsonl_layer = JsonlLayer::new("./logs", "desktop")?;
//!
//! tracing_subscriber::registry()
//!     .with(jsonl_layer)
//!     .with(tracing_subscriber::fmt::layer())
//!     .init();
//! ```
//!
//! Entries can be queried with jq:
//!
//! ```bash
//! jq 'select(.level == "error")' logs/*.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

pub use entry::LogEntry;
pub use layer::{JsonlLayer, LoggingBuilder};
pub use writer::{read_entries, SessionLogWriter};
