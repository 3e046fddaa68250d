//! Gallery components.

mod card_image;
mod card_modal;
mod card_tile;
mod description;
mod filter_bar;
mod gallery;

pub use card_image::CardImage;
pub use card_modal::CardModal;
pub use card_tile::CardTile;
pub use description::{Description, HighlightedText};
pub use filter_bar::FilterBar;
pub use gallery::CardGallery;
