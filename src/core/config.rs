//! Game configuration.
//!
//! `MatchConfig` tunes the board controller:
//! - how long a revealed pair stays on screen before it resolves
//! - how many pairs a template needs before a game may start
//! - an optional fixed seed for reproducible deals

use serde::{Deserialize, Serialize};

/// Default delay between revealing the second card and resolving the pair.
pub const DEFAULT_RESOLVE_DELAY_MS: u64 = 1000;

/// Fewest pairs a game may be started with.
pub const DEFAULT_MIN_PAIRS: usize = 2;

/// Configuration for a `BoardController`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Display delay before a revealed pair is resolved, in milliseconds.
    pub resolve_delay_ms: u64,

    /// Minimum number of unique cards a template needs to start a game.
    pub min_pairs: usize,

    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            resolve_delay_ms: DEFAULT_RESOLVE_DELAY_MS,
            min_pairs: DEFAULT_MIN_PAIRS,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resolve delay.
    #[must_use]
    pub fn with_resolve_delay_ms(mut self, delay_ms: u64) -> Self {
        self.resolve_delay_ms = delay_ms;
        self
    }

    /// Set the minimum pair count.
    ///
    /// Panics if `min_pairs` is zero: a board needs at least one pair.
    #[must_use]
    pub fn with_min_pairs(mut self, min_pairs: usize) -> Self {
        assert!(min_pairs > 0, "Must require at least 1 pair");
        self.min_pairs = min_pairs;
        self
    }

    /// Use a fixed seed for reproducible deals.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
