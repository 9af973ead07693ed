//! Stored matching games.
//!
//! ## Key Types
//!
//! - `GameId`: Identifier of a stored game
//! - `GridSize`: Layout hint, serialized as `"4x4"`
//! - `GameTemplate`: Title, cards, and grid of one game
//! - `GameLibrary`: Validated CRUD with an edit lock plus JSON export/import

pub mod collection;
pub mod template;

pub use collection::GameLibrary;
pub use template::{GameId, GameTemplate, GridSize};
