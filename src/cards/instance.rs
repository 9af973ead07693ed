//! Board cards - runtime card state.
//!
//! `BoardCard` is one of the two copies of a template card dealt onto a
//! board. It tracks whether it is face-up pending resolution and whether
//! its pair has been found.
//!
//! ## Flags
//!
//! - `is_flipped`: transient, true while face-up and unresolved
//! - `is_matched`: permanent, never reverts once set

use serde::{Deserialize, Serialize};

use super::definition::{CardFace, CardId};

/// A card instance on a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardCard {
    /// Shared by both copies of a pair.
    pub identity: CardId,
    pub front: String,
    pub back: String,
    pub is_flipped: bool,
    pub is_matched: bool,
}

impl BoardCard {
    /// Deal a face-down copy of a template card.
    #[must_use]
    pub fn from_face(face: &CardFace) -> Self {
        Self {
            identity: face.id,
            front: face.front.clone(),
            back: face.back.clone(),
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Visible to the player: pending or already matched.
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.is_flipped || self.is_matched
    }

    /// Check whether two cards form a pair.
    #[must_use]
    pub fn pairs_with(&self, other: &BoardCard) -> bool {
        self.identity == other.identity
    }
}
