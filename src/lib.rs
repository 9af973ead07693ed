//! # memory-match
//!
//! Engine for a memory-matching study game: deal shuffled pairs from a
//! stored template, flip cards two at a time, and resolve each revealed
//! pair after a short display delay.
//!
//! ## Design Principles
//!
//! 1. **Owned state**: A `Board` is mutated only through the
//!    `BoardController`; hosts read it, never write it.
//!
//! 2. **Clock-free**: Hosts pass `now_ms` in. Deferred resolution is a
//!    ticket with a due time, guarded by a board generation so callbacks
//!    from a replaced board are no-ops.
//!
//! 3. **Deterministic when seeded**: Deals come from a ChaCha8 `GameRng`.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Template faces and board cards
//! - `board`: Shuffle, pair generation, board state
//! - `rules`: Flip guard, comparison, resolution
//! - `game`: Board controller, events, statistics
//! - `library`: Game templates with validated CRUD and JSON export/import
//! - `timer`: Pomodoro countdown

pub mod core;
pub mod cards;
pub mod board;
pub mod rules;
pub mod game;
pub mod library;
pub mod timer;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, MatchConfig, MatchError, Result};

pub use crate::cards::{BoardCard, CardFace, CardId};

pub use crate::board::{generate_pairs, shuffled, Board};

pub use crate::rules::{FlipResult, IgnoreReason, Resolution};

pub use crate::game::{BoardController, FlipOutcome, GameEvent, GameStats, ResolutionTicket};

pub use crate::library::{GameId, GameLibrary, GameTemplate, GridSize};

pub use crate::timer::{Pomodoro, TimerConfig, TimerEvent, TimerPhase, TimerStatus};
