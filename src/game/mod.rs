//! Game sessions: the board controller, its events, and statistics.
//!
//! `BoardController` deals a board from a `GameTemplate`, routes flips
//! through the match rules, and resolves revealed pairs after the
//! configured delay.

pub mod controller;
pub mod event;
pub mod stats;

pub use controller::{BoardController, FlipOutcome, ResolutionTicket};
pub use event::GameEvent;
pub use stats::{efficiency, GameStats};
