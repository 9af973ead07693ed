//! Events queued by the board controller.
//!
//! The host drains them after each call and updates its view. Every event
//! carries the generation of the board that produced it.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Something that happened on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    GameStarted {
        generation: u64,
        total_pairs: usize,
    },
    CardFlipped {
        generation: u64,
        index: usize,
    },
    PairMatched {
        generation: u64,
        identity: CardId,
        indices: [usize; 2],
    },
    PairMismatched {
        generation: u64,
        indices: [usize; 2],
    },
    /// The pending pair was cleared after the display delay.
    PairResolved {
        generation: u64,
        indices: [usize; 2],
        matched: bool,
    },
    /// Queued once per game, when the last pair is matched.
    GameCompleted {
        generation: u64,
        moves: u32,
        elapsed_ms: u64,
    },
}

impl GameEvent {
    /// Generation of the board this event belongs to.
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            GameEvent::GameStarted { generation, .. }
            | GameEvent::CardFlipped { generation, .. }
            | GameEvent::PairMatched { generation, .. }
            | GameEvent::PairMismatched { generation, .. }
            | GameEvent::PairResolved { generation, .. }
            | GameEvent::GameCompleted { generation, .. } => *generation,
        }
    }

    #[must_use]
    pub fn is_completion(&self) -> bool {
        matches!(self, GameEvent::GameCompleted { .. })
    }
}
