//! Game templates - the stored definition a board is dealt from.
//!
//! A template serializes as
//! `{ "id", "title", "cards": [{ "id", "front", "back" }], "gridSize" }`
//! where `gridSize` is written `"<rows>x<cols>"`.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::cards::CardFace;
use crate::core::{MatchError, Result};

/// Identifier of a stored game.
///
/// `GameId::UNSET` asks the library to allocate one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl GameId {
    pub const UNSET: GameId = GameId(0);

    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

/// Layout hint for rendering a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub rows: u8,
    pub cols: u8,
}

impl GridSize {
    /// Create a grid size.
    ///
    /// Panics on a zero dimension.
    #[must_use]
    pub fn new(rows: u8, cols: u8) -> Self {
        assert!(rows > 0 && cols > 0, "Grid dimensions must be positive");
        Self { rows, cols }
    }

    /// Number of card slots.
    #[must_use]
    pub fn capacity(self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Smallest near-square grid holding `pairs * 2` cards.
    #[must_use]
    pub fn for_pairs(pairs: usize) -> Self {
        let cards = (pairs * 2).max(1);
        let mut cols = 1usize;
        while cols * cols < cards {
            cols += 1;
        }
        let rows = cards.div_ceil(cols);
        Self::new(
            rows.min(u8::MAX as usize) as u8,
            cols.min(u8::MAX as usize) as u8,
        )
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(4, 4)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl FromStr for GridSize {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || MatchError::InvalidGridSize(s.to_string());
        let (rows, cols) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let rows: u8 = rows.trim().parse().map_err(|_| invalid())?;
        let cols: u8 = cols.trim().parse().map_err(|_| invalid())?;
        if rows == 0 || cols == 0 {
            return Err(invalid());
        }
        Ok(Self { rows, cols })
    }
}

impl Serialize for GridSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GridSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A stored matching game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameTemplate {
    #[serde(default)]
    pub id: GameId,
    pub title: String,
    pub cards: Vec<CardFace>,
    #[serde(default)]
    pub grid_size: GridSize,
}

impl GameTemplate {
    /// Create a template with no id and a grid sized for its cards.
    pub fn new(title: impl Into<String>, cards: Vec<CardFace>) -> Self {
        let grid_size = GridSize::for_pairs(cards.len());
        Self {
            id: GameId::UNSET,
            title: title.into(),
            cards,
            grid_size,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: GameId) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn with_grid_size(mut self, grid_size: GridSize) -> Self {
        self.grid_size = grid_size;
        self
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len()
    }

    /// Check the template can be played.
    ///
    /// Requires a title, at least `min_pairs` cards (never fewer than one),
    /// text on both sides of every card, and unique card ids.
    pub fn validate(&self, min_pairs: usize) -> Result<()> {
        let required = min_pairs.max(1);
        if self.title.trim().is_empty() {
            return Err(MatchError::EmptyTitle);
        }
        if self.cards.len() < required {
            return Err(MatchError::NotEnoughPairs {
                required,
                actual: self.cards.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for (index, card) in self.cards.iter().enumerate() {
            if !card.is_complete() {
                return Err(MatchError::EmptyCardText { index });
            }
            if !seen.insert(card.id) {
                return Err(MatchError::DuplicateCardId { id: card.id.raw() });
            }
        }
        Ok(())
    }

    /// Export this template as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a single exported template.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
