//! Detail modal selection.

use crate::types::FlattenedCard;

/// Which card, if any, is shown in the detail modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Closed,
    Open(FlattenedCard),
}

impl Selection {
    /// Show `card`, replacing any card already open.
    pub fn open(&mut self, card: FlattenedCard) {
        *self = Selection::Open(card);
    }

    /// Close the modal. Closing an already closed modal does nothing.
    pub fn close(&mut self) {
        *self = Selection::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }

    pub fn card(&self) -> Option<&FlattenedCard> {
        match self {
            Selection::Open(card) => Some(card),
            Selection::Closed => None,
        }
    }
}
