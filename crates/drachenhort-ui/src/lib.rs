//! Drachenhort UI Components
//!
//! Small Dioxus widgets used by the gallery: buttons, the search box,
//! the category selector and the loading spinner. They carry no gallery
//! state themselves; everything comes in through props and goes out
//! through event handlers.
//!
//! Class names match the stylesheet of the desktop app (`.btn-*`,
//! `.search-input`, `.category-select`, `.spinner`).

pub mod components;

pub use components::*;
