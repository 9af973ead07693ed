//! Board dealing and state.
//!
//! - `shuffle`: Fisher–Yates over any slice
//! - `pairs`: duplicate template faces into pairs and shuffle them
//! - `state`: the `Board` a single game session plays on

pub mod pairs;
pub mod shuffle;
pub mod state;

pub use pairs::generate_pairs;
pub use shuffle::{shuffle_in_place, shuffled};
pub use state::{Board, MAX_FLIPPED};
