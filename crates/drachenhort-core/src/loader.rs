//! Reading the card file.
//!
//! The card file holds several top-level collections; exactly one of them
//! (by default `Drachenhort`) is loaded:
//!
//! ```json
//! { "Drachenhort": { "Raum": [ { "Name": "...", "Description": "...", "Image": "..." } ] } }
//! ```

use std::fmt;
use std::path::Path;

use serde::de::{DeserializeSeed, Deserializer, IgnoredAny, MapAccess, Visitor};

use crate::error::{GalleryError, GalleryResult};
use crate::types::CardCollection;

/// Collection key used when none is configured.
pub const DEFAULT_COLLECTION_KEY: &str = "Drachenhort";

/// Picks one collection out of the top-level map, skipping the others
/// without building them.
struct CollectionSeed<'a> {
    key: &'a str,
}

impl<'de> DeserializeSeed<'de> for CollectionSeed<'_> {
    type Value = Option<CardCollection>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de> Visitor<'de> for CollectionSeed<'_> {
    type Value = Option<CardCollection>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a map containing the `{}` collection", self.key)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut found = None;
        while let Some(name) = map.next_key::<String>()? {
            if found.is_none() && name == self.key {
                found = Some(map.next_value::<CardCollection>()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(found)
    }
}

/// Parse the card file contents and extract the collection named `key`.
pub fn parse_collection(bytes: &[u8], key: &str) -> GalleryResult<CardCollection> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let found = CollectionSeed { key }.deserialize(&mut deserializer)?;
    deserializer.end()?;

    found.ok_or_else(|| GalleryError::MissingCollection(key.to_string()))
}

/// Read and parse the card file at `path`.
pub async fn load_collection(path: impl AsRef<Path>, key: &str) -> GalleryResult<CardCollection> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), collection = key, "Loading card file");

    let bytes = tokio::fs::read(path).await?;
    let collection = parse_collection(&bytes, key)?;

    tracing::info!(
        categories = collection.categories().len(),
        cards = collection.card_count(),
        "Loaded {} collection",
        key
    );
    Ok(collection)
}
