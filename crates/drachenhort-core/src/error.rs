//! Error types for the Drachenhort gallery

use thiserror::Error;

/// Main error type for gallery operations
#[derive(Error, Debug)]
pub enum GalleryError {
    /// The card file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The card file is not valid JSON or has the wrong shape
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document has no entry for the requested collection key
    #[error("Collection not found: {0}")]
    MissingCollection(String),

    /// A category filter named a key the collection does not have
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The card data has not finished loading
    #[error("Cards are not loaded")]
    NotLoaded,

    /// Error from the key-value store
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),
}

impl GalleryError {
    /// Whether this error means the card data itself could not be obtained.
    ///
    /// These are terminal for a session: the gallery shows an error
    /// indicator instead of any cards.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            GalleryError::Io(_) | GalleryError::Parse(_) | GalleryError::MissingCollection(_)
        )
    }
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;
