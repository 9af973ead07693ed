//! Card faces - static card content.
//!
//! `CardFace` holds what a template stores for one card: its id and the
//! two display strings. Flip and match state lives on `BoardCard`.

use serde::{Deserialize, Serialize};

/// Identifier of a template card.
///
/// Both copies of a pair on the board carry their template card's id
/// as their identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u64);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// One card of a game template.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{CardFace, CardId};
///
/// let card = CardFace::new(CardId::new(1), "H2O", "Water");
/// assert_eq!(card.front, "H2O");
/// assert!(card.is_complete());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    pub id: CardId,
    pub front: String,
    pub back: String,
}

impl CardFace {
    /// Create a card face.
    pub fn new(id: CardId, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id,
            front: front.into(),
            back: back.into(),
        }
    }

    /// True when both sides carry non-blank text.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.front.trim().is_empty() && !self.back.trim().is_empty()
    }
}
