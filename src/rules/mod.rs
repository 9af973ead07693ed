//! Match rules for a single board.
//!
//! - Which flips are legal
//! - How the second flip of a round is compared
//! - How a pending pair is resolved
//!
//! The rules are stateless functions over `Board`; timing and
//! stale-callback guarding belong to the controller.

pub mod engine;

pub use engine::{check_flip, flip, resolve, FlipResult, IgnoreReason, Resolution};
