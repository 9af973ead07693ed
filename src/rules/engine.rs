//! Flip guard, pair comparison, and resolution.
//!
//! A round is two accepted flips. The second flip compares identities
//! immediately and marks a match on the spot; clearing the face-up pair
//! is left to `resolve`, which the controller runs after the display delay.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::CardId;

/// Why a flip request was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No board is in play.
    NoActiveGame,
    /// Index past the end of the board.
    OutOfRange,
    AlreadyMatched,
    AlreadyFaceUp,
    /// Two cards are already face-up.
    AwaitingResolution,
}

/// Result of applying one flip to a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipResult {
    Ignored(IgnoreReason),
    /// First card of a round is face-up.
    First { index: usize },
    /// Second card is face-up and the pair has been compared.
    Second {
        indices: [usize; 2],
        identity: CardId,
        matched: bool,
    },
}

/// What a resolution did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub indices: [usize; 2],
    pub matched: bool,
}

/// Check whether `index` may be flipped right now.
pub fn check_flip(board: &Board, index: usize) -> Result<(), IgnoreReason> {
    let card = board.card(index).ok_or(IgnoreReason::OutOfRange)?;

    if board.is_awaiting_resolution() {
        return Err(IgnoreReason::AwaitingResolution);
    }
    if card.is_matched {
        return Err(IgnoreReason::AlreadyMatched);
    }
    if card.is_flipped {
        return Err(IgnoreReason::AlreadyFaceUp);
    }
    Ok(())
}

/// Flip one card, comparing identities on the second flip of a round.
///
/// Ignored flips leave the board untouched, including the move counter.
pub fn flip(board: &mut Board, index: usize) -> FlipResult {
    if let Err(reason) = check_flip(board, index) {
        debug!("Ignoring flip at {index}: {reason:?}");
        return FlipResult::Ignored(reason);
    }

    board.turn_up(index);

    match *board.flipped_indices() {
        [first, second] => {
            let a = &board.cards()[first];
            let b = &board.cards()[second];
            let identity = a.identity;
            let matched = a.pairs_with(b);

            if matched {
                board.mark_matched(first, second);
            }
            debug!("Compared {first} and {second}: matched={matched}");

            FlipResult::Second {
                indices: [first, second],
                identity,
                matched,
            }
        }
        _ => FlipResult::First { index },
    }
}

/// End the current round by turning the pending pair face-down.
///
/// Returns `None` when no complete pair is pending.
pub fn resolve(board: &mut Board) -> Option<Resolution> {
    if !board.is_awaiting_resolution() {
        return None;
    }

    let cleared = board.clear_flipped();
    let indices = [cleared[0], cleared[1]];
    let matched = board.cards()[indices[0]].is_matched;

    Some(Resolution { indices, matched })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{BoardCard, CardFace};

    /// Board laid out as A B A B.
    fn board() -> Board {
        let a = CardFace::new(CardId::new(1), "A", "a");
        let b = CardFace::new(CardId::new(2), "B", "b");
        Board::new(vec![
            BoardCard::from_face(&a),
            BoardCard::from_face(&b),
            BoardCard::from_face(&a),
            BoardCard::from_face(&b),
        ])
    }

    #[test]
    fn test_first_flip() {
        let mut board = board();
        assert_eq!(flip(&mut board, 1), FlipResult::First { index: 1 });
        assert!(board.cards()[1].is_flipped);
        assert_eq!(board.move_count(), 1);
    }

    #[test]
    fn test_match_marks_both() {
        let mut board = board();
        flip(&mut board, 0);
        let result = flip(&mut board, 2);

        assert_eq!(
            result,
            FlipResult::Second {
                indices: [0, 2],
                identity: CardId::new(1),
                matched: true,
            }
        );
        assert!(board.cards()[0].is_matched);
        assert!(board.cards()[2].is_matched);
        assert_eq!(board.matched_pair_count(), 1);
    }

    #[test]
    fn test_mismatch_leaves_matched_unset() {
        let mut board = board();
        flip(&mut board, 0);
        let result = flip(&mut board, 1);

        assert!(matches!(result, FlipResult::Second { matched: false, .. }));
        assert!(board.cards().iter().all(|c| !c.is_matched));
    }

    #[test]
    fn test_guards() {
        let mut board = board();

        assert_eq!(
            flip(&mut board, 9),
            FlipResult::Ignored(IgnoreReason::OutOfRange)
        );

        flip(&mut board, 0);
        assert_eq!(
            flip(&mut board, 0),
            FlipResult::Ignored(IgnoreReason::AlreadyFaceUp)
        );

        flip(&mut board, 1);
        assert_eq!(
            flip(&mut board, 3),
            FlipResult::Ignored(IgnoreReason::AwaitingResolution)
        );
        assert_eq!(board.flipped_indices().len(), 2);
        assert_eq!(board.move_count(), 2);
    }

    #[test]
    fn test_matched_card_is_guarded() {
        let mut board = board();
        flip(&mut board, 0);
        flip(&mut board, 2);
        resolve(&mut board);

        assert_eq!(
            flip(&mut board, 2),
            FlipResult::Ignored(IgnoreReason::AlreadyMatched)
        );
    }

    #[test]
    fn test_resolve_mismatch_turns_down() {
        let mut board = board();
        flip(&mut board, 0);
        flip(&mut board, 1);

        let resolution = resolve(&mut board).unwrap();

        assert_eq!(resolution.indices, [0, 1]);
        assert!(!resolution.matched);
        assert!(board.flipped_indices().is_empty());
        assert!(board.cards().iter().all(|c| !c.is_face_up()));
    }

    #[test]
    fn test_resolve_match_keeps_cards_visible() {
        let mut board = board();
        flip(&mut board, 1);
        flip(&mut board, 3);

        let resolution = resolve(&mut board).unwrap();

        assert!(resolution.matched);
        assert!(board.cards()[1].is_face_up());
        assert!(board.cards()[3].is_face_up());
        assert!(!board.cards()[1].is_flipped);
    }

    #[test]
    fn test_resolve_without_pair() {
        let mut board = board();
        assert!(resolve(&mut board).is_none());

        flip(&mut board, 0);
        assert!(resolve(&mut board).is_none());
        assert_eq!(board.flipped_indices(), &[0]);
    }
}
