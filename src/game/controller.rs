//! Board controller: one game session at a time.
//!
//! ## Deferred resolution
//!
//! The second flip of a round returns a `ResolutionTicket`. The pair stays
//! face-up until the host either hands the ticket back to `resolve` (from
//! its own timer callback) or calls `tick` with a time past the ticket's
//! due time. Tickets name the board generation and round they belong to;
//! after `start_game`, `reset` or `end_game` an old ticket resolves nothing.
//!
//! ## Time
//!
//! The controller never reads a clock. Callers pass `now_ms`, milliseconds
//! on any monotonic scale they like.

use log::{debug, info, warn};

use super::event::GameEvent;
use super::stats::{efficiency, GameStats};
use crate::board::{generate_pairs, Board};
use crate::core::{GameRng, GameRngState, MatchConfig, Result};
use crate::library::GameTemplate;
use crate::rules::{self, FlipResult, IgnoreReason, Resolution};

/// Handle for resolving one revealed pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolutionTicket {
    generation: u64,
    round: u64,
    due_at_ms: u64,
}

impl ResolutionTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Earliest time `tick` will resolve this pair.
    #[must_use]
    pub fn due_at_ms(&self) -> u64 {
        self.due_at_ms
    }
}

/// Result of a flip request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    Ignored(IgnoreReason),
    /// First card of a round turned face-up.
    Revealed { index: usize },
    /// Second card turned face-up; `matched` is already decided.
    PairRevealed {
        indices: [usize; 2],
        matched: bool,
        ticket: ResolutionTicket,
    },
}

/// Owns the board of the current game and every mutation of it.
///
/// ```
/// use memory_match::cards::{CardFace, CardId};
/// use memory_match::core::MatchConfig;
/// use memory_match::game::{BoardController, FlipOutcome};
/// use memory_match::library::GameTemplate;
///
/// let template = GameTemplate::new("Pairs", vec![
///     CardFace::new(CardId::new(1), "A", "a"),
///     CardFace::new(CardId::new(2), "B", "b"),
/// ]);
///
/// let mut game = BoardController::new(MatchConfig::new().with_seed(1));
/// game.start_game(&template, 0).unwrap();
///
/// let pos = game.board().unwrap().positions_of(CardId::new(1));
/// game.flip(pos[0], 10);
/// let outcome = game.flip(pos[1], 20);
///
/// assert!(matches!(outcome, FlipOutcome::PairRevealed { matched: true, .. }));
/// assert_eq!(game.matched_pair_count(), 1);
/// ```
#[derive(Debug)]
pub struct BoardController {
    config: MatchConfig,
    rng: GameRng,
    template: Option<GameTemplate>,
    /// RNG position the current board was dealt from.
    deal_state: Option<GameRngState>,
    board: Option<Board>,
    generation: u64,
    round: u64,
    pending: Option<ResolutionTicket>,
    started_at_ms: u64,
    completed_at_ms: Option<u64>,
    events: Vec<GameEvent>,
}

impl Default for BoardController {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

impl BoardController {
    /// Create a controller with no game in play.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self {
            config,
            rng,
            template: None,
            deal_state: None,
            board: None,
            generation: 0,
            round: 0,
            pending: None,
            started_at_ms: 0,
            completed_at_ms: None,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    // === Lifecycle ===

    /// Deal a fresh board from `template`, replacing any game in play.
    ///
    /// Fails without touching the current game if the template does not
    /// validate (including having fewer than `min_pairs` cards).
    pub fn start_game(&mut self, template: &GameTemplate, now_ms: u64) -> Result<()> {
        template.validate(self.config.min_pairs)?;

        let deal_state = self.rng.state();
        let board = Board::new(generate_pairs(&template.cards, &mut self.rng));
        let total_pairs = board.total_pairs();

        self.generation += 1;
        self.round = 0;
        self.pending = None;
        self.started_at_ms = now_ms;
        self.completed_at_ms = None;
        self.board = Some(board);
        self.deal_state = Some(deal_state);
        self.template = Some(template.clone());
        self.events.clear();
        self.events.push(GameEvent::GameStarted {
            generation: self.generation,
            total_pairs,
        });

        info!(
            "Started {:?} (generation {}, {} pairs)",
            template.title, self.generation, total_pairs
        );
        Ok(())
    }

    /// Re-deal the current template with a fresh shuffle.
    ///
    /// Does nothing when no game has been started.
    pub fn reset(&mut self, now_ms: u64) -> Result<()> {
        match self.template.take() {
            Some(template) => self.start_game(&template, now_ms),
            None => Ok(()),
        }
    }

    /// Re-deal the current board in the same order it was first dealt.
    ///
    /// Progress is lost and the generation is bumped as with `reset`.
    /// Does nothing when no game has been started.
    pub fn replay(&mut self, now_ms: u64) -> Result<()> {
        let (Some(template), Some(state)) = (self.template.take(), self.deal_state.take()) else {
            return Ok(());
        };
        self.rng = GameRng::from_state(&state);
        self.start_game(&template, now_ms)
    }

    /// Discard the current game.
    pub fn end_game(&mut self) {
        if self.board.take().is_some() {
            debug!("Ended game (generation {})", self.generation);
        }
        self.template = None;
        self.deal_state = None;
        self.pending = None;
        self.completed_at_ms = None;
        self.generation += 1;
    }

    // === Play ===

    /// Flip the card at `index`.
    ///
    /// Guarded flips are ignored and do not count as moves.
    pub fn flip(&mut self, index: usize, now_ms: u64) -> FlipOutcome {
        let generation = self.generation;
        let Some(board) = self.board.as_mut() else {
            return FlipOutcome::Ignored(IgnoreReason::NoActiveGame);
        };

        match rules::flip(board, index) {
            FlipResult::Ignored(reason) => {
                if reason == IgnoreReason::OutOfRange {
                    warn!("Flip index {index} out of range for {} cards", board.len());
                }
                FlipOutcome::Ignored(reason)
            }
            FlipResult::First { index } => {
                self.events.push(GameEvent::CardFlipped { generation, index });
                FlipOutcome::Revealed { index }
            }
            FlipResult::Second {
                indices,
                identity,
                matched,
            } => {
                let complete = board.is_complete();
                let moves = board.move_count();

                self.round += 1;
                let ticket = ResolutionTicket {
                    generation,
                    round: self.round,
                    due_at_ms: now_ms.saturating_add(self.config.resolve_delay_ms),
                };
                self.pending = Some(ticket);

                self.events.push(GameEvent::CardFlipped {
                    generation,
                    index: indices[1],
                });
                if matched {
                    self.events.push(GameEvent::PairMatched {
                        generation,
                        identity,
                        indices,
                    });
                } else {
                    self.events.push(GameEvent::PairMismatched { generation, indices });
                }

                if complete && self.completed_at_ms.is_none() {
                    self.completed_at_ms = Some(now_ms);
                    let elapsed_ms = now_ms.saturating_sub(self.started_at_ms);
                    self.events.push(GameEvent::GameCompleted {
                        generation,
                        moves,
                        elapsed_ms,
                    });
                    info!("Game complete in {moves} moves ({elapsed_ms} ms)");
                }

                FlipOutcome::PairRevealed {
                    indices,
                    matched,
                    ticket,
                }
            }
        }
    }

    /// Resolve the pair named by `ticket`.
    ///
    /// Returns `None` for a stale ticket: one from an earlier game, an
    /// earlier round, or one already resolved.
    pub fn resolve(&mut self, ticket: ResolutionTicket) -> Option<Resolution> {
        if self.pending != Some(ticket) {
            debug!(
                "Ignoring stale ticket (generation {}, round {})",
                ticket.generation, ticket.round
            );
            return None;
        }
        self.pending = None;

        let resolution = rules::resolve(self.board.as_mut()?)?;
        self.events.push(GameEvent::PairResolved {
            generation: ticket.generation,
            indices: resolution.indices,
            matched: resolution.matched,
        });
        Some(resolution)
    }

    /// Resolve the pending pair if its delay has elapsed.
    pub fn tick(&mut self, now_ms: u64) -> Option<Resolution> {
        let ticket = self.pending?;
        if now_ms < ticket.due_at_ms {
            return None;
        }
        self.resolve(ticket)
    }

    /// Take all events queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Views ===

    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    #[must_use]
    pub fn template(&self) -> Option<&GameTemplate> {
        self.template.as_ref()
    }

    /// RNG state the current board was dealt from.
    #[must_use]
    pub fn deal_state(&self) -> Option<&GameRngState> {
        self.deal_state.as_ref()
    }

    /// Bumped by every start, reset, and end.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Ticket of the pair waiting to be resolved, if any.
    #[must_use]
    pub fn pending(&self) -> Option<ResolutionTicket> {
        self.pending
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.board.as_ref().map_or(0, Board::move_count)
    }

    #[must_use]
    pub fn matched_pair_count(&self) -> usize {
        self.board.as_ref().map_or(0, Board::matched_pair_count)
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.board.as_ref().map_or(0, Board::total_pairs)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.board.as_ref().is_some_and(Board::is_complete)
    }

    /// Moves per pair, rounded to a whole number.
    #[must_use]
    pub fn efficiency(&self) -> f64 {
        efficiency(self.move_count(), self.total_pairs())
    }

    /// Snapshot of the current game, `None` when no game is in play.
    #[must_use]
    pub fn stats(&self, now_ms: u64) -> Option<GameStats> {
        let board = self.board.as_ref()?;
        let end = self.completed_at_ms.unwrap_or(now_ms);

        Some(GameStats {
            moves: board.move_count(),
            matched_pairs: board.matched_pair_count(),
            total_pairs: board.total_pairs(),
            efficiency: efficiency(board.move_count(), board.total_pairs()),
            elapsed_ms: end.saturating_sub(self.started_at_ms),
            completed: board.is_complete(),
        })
    }
}
