//! Core engine types: RNG, configuration, errors.
//!
//! These are shared by the board, the controller, and the game library.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{MatchConfig, DEFAULT_MIN_PAIRS, DEFAULT_RESOLVE_DELAY_MS};
pub use error::{MatchError, Result};
pub use rng::{GameRng, GameRngState};
