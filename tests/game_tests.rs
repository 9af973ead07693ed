//! End-to-end tests for the board controller.

use memory_match::cards::{CardFace, CardId};
use memory_match::core::MatchConfig;
use memory_match::game::{BoardController, FlipOutcome, GameEvent};
use memory_match::library::GameTemplate;
use memory_match::rules::IgnoreReason;

const A: CardId = CardId::new(1);
const B: CardId = CardId::new(2);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn ab_template() -> GameTemplate {
    GameTemplate::new(
        "A and B",
        vec![
            CardFace::new(A, "Apple", "Manzana"),
            CardFace::new(B, "Bread", "Pan"),
        ],
    )
}

fn new_game(seed: u64) -> BoardController {
    init_logging();
    let mut game = BoardController::new(MatchConfig::new().with_seed(seed));
    game.start_game(&ab_template(), 0).unwrap();
    game
}

fn positions(game: &BoardController, id: CardId) -> (usize, usize) {
    let pos = game.board().unwrap().positions_of(id);
    assert_eq!(pos.len(), 2);
    (pos[0], pos[1])
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_matching_the_two_as() {
    let mut game = new_game(42);
    assert_eq!(game.board().unwrap().len(), 4);

    let (a1, a2) = positions(&game, A);
    game.flip(a1, 0);
    let outcome = game.flip(a2, 0);

    assert!(matches!(outcome, FlipOutcome::PairRevealed { matched: true, .. }));
    let board = game.board().unwrap();
    assert!(board.cards()[a1].is_matched);
    assert!(board.cards()[a2].is_matched);
    assert_eq!(game.matched_pair_count(), 1);
    assert!(!game.is_complete());

    // Finding B finishes the game.
    game.tick(1000);
    let (b1, b2) = positions(&game, B);
    game.flip(b1, 2000);
    game.flip(b2, 2000);

    assert_eq!(game.matched_pair_count(), 2);
    assert!(game.is_complete());
}

#[test]
fn test_a_then_b_reverts_after_delay() {
    let mut game = new_game(7);
    let (a1, _) = positions(&game, A);
    let (b1, _) = positions(&game, B);

    game.flip(a1, 0);
    let FlipOutcome::PairRevealed { matched, ticket, .. } = game.flip(b1, 100) else {
        panic!("expected a revealed pair");
    };
    assert!(!matched);

    // Still face-up during the display delay.
    assert!(game.board().unwrap().cards()[a1].is_flipped);
    assert!(game.tick(ticket.due_at_ms() - 1).is_none());

    let resolution = game.tick(ticket.due_at_ms()).unwrap();
    assert!(!resolution.matched);

    let board = game.board().unwrap();
    assert!(!board.cards()[a1].is_face_up());
    assert!(!board.cards()[b1].is_face_up());
    assert!(board.cards().iter().all(|c| !c.is_matched));
    assert!(!game.is_complete());
}

#[test]
fn test_third_flip_ignored_while_resolving() {
    let mut game = new_game(3);
    let (a1, a2) = positions(&game, A);
    let (b1, _) = positions(&game, B);

    game.flip(a1, 0);
    game.flip(b1, 0);

    assert_eq!(
        game.flip(a2, 0),
        FlipOutcome::Ignored(IgnoreReason::AwaitingResolution)
    );
    assert_eq!(game.board().unwrap().flipped_indices().len(), 2);
    assert_eq!(game.move_count(), 2);
}

#[test]
fn test_move_count_per_flip() {
    let mut game = new_game(11);
    let (a1, a2) = positions(&game, A);
    let (b1, b2) = positions(&game, B);

    let flips = [a1, b1, a1, a2, b1, b2];
    for (n, &index) in flips.iter().enumerate() {
        let before = game.move_count();
        game.flip(index, 0);
        assert_eq!(game.move_count(), before + 1, "flip {n}");
        game.tick(u64::MAX);
    }

    assert!(game.is_complete());
    assert_eq!(game.move_count(), 6);
    assert_eq!(game.efficiency(), 3.0);
}

#[test]
fn test_stale_callback_after_restart() {
    let mut game = new_game(5);
    let (a1, _) = positions(&game, A);
    let (b1, _) = positions(&game, B);

    game.flip(a1, 0);
    let FlipOutcome::PairRevealed { ticket, .. } = game.flip(b1, 0) else {
        panic!("expected a revealed pair");
    };

    // Restart before the deferred callback fires.
    game.start_game(&ab_template(), 50).unwrap();
    let (c1, c2) = positions(&game, A);
    game.flip(c1, 60);
    game.flip(c2, 60);

    assert!(game.resolve(ticket).is_none());
    let board = game.board().unwrap();
    assert_eq!(board.flipped_indices().len(), 2);
    assert_eq!(board.matched_pair_count(), 1);
}

#[test]
fn test_event_stream() {
    let mut game = new_game(9);
    let (a1, a2) = positions(&game, A);
    let (b1, b2) = positions(&game, B);

    for (i, j) in [(a1, a2), (b1, b2)] {
        game.flip(i, 10);
        game.flip(j, 20);
        game.tick(5000);
    }

    let events = game.drain_events();
    assert_eq!(
        events.first(),
        Some(&GameEvent::GameStarted {
            generation: 1,
            total_pairs: 2
        })
    );
    assert_eq!(events.iter().filter(|e| e.is_completion()).count(), 1);
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::PairMatched { .. }))
            .count(),
        2
    );
    assert!(events.iter().all(|e| e.generation() == 1));
    assert!(game.drain_events().is_empty());
}

#[test]
fn test_same_seed_same_deal() {
    let a = new_game(123);
    let b = new_game(123);
    assert_eq!(a.board(), b.board());
}
