//! Crate error type.
//!
//! Flip guards never produce errors; they are reported as ignored flips.
//! `MatchError` covers template validation, library bookkeeping, and
//! JSON/file import-export failures.

use std::fmt;

use crate::library::GameId;

/// Errors returned by the game library and the board controller.
#[derive(Debug)]
pub enum MatchError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// Imported JSON parsed but its top level is not an array.
    ImportNotArray,
    EmptyTitle,
    NotEnoughPairs {
        required: usize,
        actual: usize,
    },
    EmptyCardText {
        index: usize,
    },
    DuplicateCardId {
        id: u64,
    },
    InvalidGridSize(String),
    /// A deserialized board breaks a dealing or flip invariant.
    InvalidBoard(&'static str),
    UnknownGame(GameId),
    GameBeingEdited(GameId),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io: {err}"),
            Self::Json(err) => write!(f, "json: {err}"),
            Self::ImportNotArray => write!(f, "import: expected a JSON array of games"),
            Self::EmptyTitle => write!(f, "game title must not be empty"),
            Self::NotEnoughPairs { required, actual } => write!(
                f,
                "not enough cards (required={required}, actual={actual})"
            ),
            Self::EmptyCardText { index } => {
                write!(f, "card {index} has an empty front or back")
            }
            Self::DuplicateCardId { id } => write!(f, "duplicate card id {id}"),
            Self::InvalidGridSize(raw) => write!(f, "invalid grid size {raw:?}"),
            Self::InvalidBoard(reason) => write!(f, "invalid board: {reason}"),
            Self::UnknownGame(id) => write!(f, "unknown game {id}"),
            Self::GameBeingEdited(id) => write!(f, "game {id} is being edited"),
        }
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MatchError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatchError>;
