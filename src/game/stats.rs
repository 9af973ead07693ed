//! Session statistics.

use serde::{Deserialize, Serialize};

/// Snapshot of a game in progress or finished.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub moves: u32,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    /// Moves per pair, see `efficiency`.
    pub efficiency: f64,
    /// Frozen once the game completes.
    pub elapsed_ms: u64,
    pub completed: bool,
}

/// Moves divided by total pairs, rounded to the nearest whole number.
///
/// Halves round up. A perfect game scores 2, not 1.
#[must_use]
pub fn efficiency(moves: u32, total_pairs: usize) -> f64 {
    if total_pairs == 0 {
        return 0.0;
    }
    (f64::from(moves) / total_pairs as f64).round()
}
