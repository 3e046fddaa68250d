//! Gallery configuration.

use std::path::{Path, PathBuf};

use crate::loader::DEFAULT_COLLECTION_KEY;

/// Default location of the card file.
pub const DEFAULT_CARDS_PATH: &str = "assets/allCards.json";

/// File name of the settings database inside the data directory.
pub const SETTINGS_FILE: &str = "settings.redb";

/// Where the gallery reads its cards from and keeps its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    pub cards_path: PathBuf,
    pub collection_key: String,
    pub data_dir: PathBuf,
}

/// A resolved card image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Remote or inline image, used as-is
    Url(String),
    /// Local image file
    File(PathBuf),
}

impl GalleryConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            cards_path: PathBuf::from(DEFAULT_CARDS_PATH),
            collection_key: DEFAULT_COLLECTION_KEY.to_string(),
            data_dir: data_dir.into(),
        }
    }

    pub fn with_cards_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cards_path = path.into();
        self
    }

    pub fn with_collection_key(mut self, key: impl Into<String>) -> Self {
        self.collection_key = key.into();
        self
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }

    /// Resolve a card's image reference.
    ///
    /// URLs pass through; everything else is a path relative to the
    /// directory of the card file (site-root paths like `/img/a.png`
    /// included, since the card file sits at the site root).
    pub fn resolve_image(&self, image: &str) -> ImageSource {
        if image.contains("://") || image.starts_with("data:") {
            return ImageSource::Url(image.to_string());
        }
        let base = self.cards_path.parent().unwrap_or_else(|| Path::new(""));
        ImageSource::File(base.join(image.trim_start_matches('/')))
    }
}
