//! Board state for one game session.
//!
//! A `Board` owns the shuffled cards, the indices currently face-up and
//! awaiting resolution, and the move counter. Outside the crate it is
//! read-only; all mutation goes through the match rules.
//!
//! Deserialization checks the same invariants dealing and flipping keep,
//! so a loaded board can be handed to the rules without further checks.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{BoardCard, CardId};
use crate::core::MatchError;

/// Most cards that may be face-up and unresolved at once.
pub const MAX_FLIPPED: usize = 2;

/// The shuffled cards of one game plus flip bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawBoard")]
pub struct Board {
    cards: Vec<BoardCard>,
    flipped_indices: SmallVec<[usize; MAX_FLIPPED]>,
    move_count: u32,
}

/// Unchecked wire form of a `Board`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBoard {
    cards: Vec<BoardCard>,
    flipped_indices: Vec<usize>,
    move_count: u32,
}

impl TryFrom<RawBoard> for Board {
    type Error = MatchError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let RawBoard {
            cards,
            flipped_indices,
            move_count,
        } = raw;

        if cards.len() % 2 != 0 {
            return Err(MatchError::InvalidBoard("odd number of cards"));
        }
        if flipped_indices.len() > MAX_FLIPPED {
            return Err(MatchError::InvalidBoard("more than two cards face-up"));
        }
        if flipped_indices.iter().any(|&i| i >= cards.len()) {
            return Err(MatchError::InvalidBoard("face-up index out of range"));
        }
        if flipped_indices.len() == MAX_FLIPPED && flipped_indices[0] == flipped_indices[1] {
            return Err(MatchError::InvalidBoard("card face-up twice"));
        }
        let flags_agree = cards
            .iter()
            .enumerate()
            .all(|(i, c)| c.is_flipped == flipped_indices.contains(&i));
        if !flags_agree {
            return Err(MatchError::InvalidBoard("flipped flags disagree with face-up list"));
        }

        // Every identity is dealt exactly twice and both copies match together.
        let mut copies: FxHashMap<CardId, (u8, bool)> = FxHashMap::default();
        for card in &cards {
            let entry = copies.entry(card.identity).or_insert((0, card.is_matched));
            entry.0 += 1;
            if entry.0 > 2 || entry.1 != card.is_matched {
                return Err(MatchError::InvalidBoard("cards do not form matched pairs"));
            }
        }
        if copies.values().any(|&(n, _)| n != 2) {
            return Err(MatchError::InvalidBoard("card without a partner"));
        }

        if let [a, b] = flipped_indices[..] {
            if cards[a].identity == cards[b].identity && !cards[a].is_matched {
                return Err(MatchError::InvalidBoard("face-up pair left unmatched"));
            }
        }

        Ok(Self {
            cards,
            flipped_indices: flipped_indices.into_iter().collect(),
            move_count,
        })
    }
}

impl Board {
    /// Wrap an already dealt card sequence.
    ///
    /// Panics if the card count is odd.
    #[must_use]
    pub fn new(cards: Vec<BoardCard>) -> Self {
        assert!(cards.len() % 2 == 0, "Board must hold whole pairs");
        Self {
            cards,
            flipped_indices: SmallVec::new(),
            move_count: 0,
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[BoardCard] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, index: usize) -> Option<&BoardCard> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Indices face-up and awaiting resolution, in flip order.
    #[must_use]
    pub fn flipped_indices(&self) -> &[usize] {
        &self.flipped_indices
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Derived from the per-card flags.
    #[must_use]
    pub fn matched_pair_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count() / 2
    }

    /// True once every pair has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.cards.is_empty() && self.matched_pair_count() == self.total_pairs()
    }

    /// Two cards are face-up and the round has not resolved yet.
    #[must_use]
    pub fn is_awaiting_resolution(&self) -> bool {
        self.flipped_indices.len() >= MAX_FLIPPED
    }

    /// Board positions holding the given identity.
    #[must_use]
    pub fn positions_of(&self, identity: CardId) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.identity == identity)
            .map(|(i, _)| i)
            .collect()
    }

    // === Mutation (match rules only) ===

    pub(crate) fn turn_up(&mut self, index: usize) {
        debug_assert!(self.flipped_indices.len() < MAX_FLIPPED);
        self.cards[index].is_flipped = true;
        self.flipped_indices.push(index);
        self.move_count += 1;
    }

    pub(crate) fn mark_matched(&mut self, a: usize, b: usize) {
        self.cards[a].is_matched = true;
        self.cards[b].is_matched = true;
    }

    /// Turn every pending card back down and end the round.
    ///
    /// Matched cards stay visible through `is_matched`.
    pub(crate) fn clear_flipped(&mut self) -> SmallVec<[usize; MAX_FLIPPED]> {
        let cleared = std::mem::take(&mut self.flipped_indices);
        for &i in &cleared {
            self.cards[i].is_flipped = false;
        }
        cleared
    }
}
