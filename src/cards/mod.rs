//! Card system: template faces and board instances.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier of a template card, shared by both copies of a pair
//! - `CardFace`: Static front/back content stored in a game template
//! - `BoardCard`: Runtime card state (flipped, matched)

pub mod definition;
pub mod instance;

pub use definition::{CardFace, CardId};
pub use instance::BoardCard;
