//! The game state machine.
//!
//! Owns the board, turn order, undo history, score tally, mode, theme,
//! and focus index. Every mutation persists through the injected store
//! and re-derives the outcome from the board; the machine never enters a
//! board/turn/outcome combination the rules cannot produce.

use super::ai;
use super::focus::{self, FocusDir};
use super::invariants::{InvariantSet, RoundInvariants};
use super::mode::GameMode;
use super::rules::{self, Outcome};
use super::theme::Theme;
use super::types::{Board, Mark, Scores};
use crate::store::{self, StateStore};
use rand::Rng;
use tracing::{debug, info, instrument, warn};

/// Per-round state: everything a new round resets.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub(crate) board: Board,
    pub(crate) turn: Mark,
    pub(crate) history: Vec<Board>,
    pub(crate) outcome: Outcome,
}

impl RoundState {
    fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            history: Vec::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whose turn it is.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the undo history of pre-move snapshots.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the derived outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

/// What an applied move did - the presentation signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The round continues with the other mark.
    Continued,
    /// The move completed a line.
    Won {
        /// The mark that won.
        winner: Mark,
        /// The completed triple.
        line: [usize; 3],
    },
    /// The move filled the board without a line.
    Drawn,
}

/// Claim ticket for a scheduled computer move.
///
/// A ticket is only redeemable while it is the machine's outstanding
/// one; every mutation invalidates outstanding tickets, so a stale timer
/// can never move against a board it was not computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerTicket(u64);

/// The game state machine over an injected key-value store.
#[derive(Debug)]
pub struct GameMachine<S> {
    round: RoundState,
    scores: Scores,
    mode: GameMode,
    theme: Theme,
    focus: usize,
    pending_computer: Option<u64>,
    generation: u64,
    store: S,
}

impl<S: StateStore> GameMachine<S> {
    /// Loads a machine from the store, defaulting each absent or corrupt
    /// key independently.
    ///
    /// The outcome is always derived from the loaded board, never
    /// trusted from storage. Undo history is not persisted; a loaded
    /// round starts with an empty stack.
    #[instrument(skip(store))]
    pub fn load(store: S) -> Self {
        let mut board: Board = store::get_json(&store, store::KEY_BOARD).unwrap_or_default();
        let turn_is_x: bool = store::get_json(&store, store::KEY_TURN_IS_X).unwrap_or(true);
        let scores: Scores = store::get_json(&store, store::KEY_SCORES).unwrap_or_default();
        let mode: GameMode = store::get_json(&store, store::KEY_MODE).unwrap_or_default();
        let theme: Theme = store::get_json(&store, store::KEY_THEME).unwrap_or_default();

        // A board the rules cannot produce counts as corrupt.
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        if !(x == o || x == o + 1) {
            warn!(x, o, "Stored board is unbalanced, starting fresh");
            board = Board::default();
        }

        // X always opens, so the turn is derivable from the counts; a
        // stored turn that disagrees loses to the derivation.
        let turn = if board.count(Mark::X) == board.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        };
        if turn != (if turn_is_x { Mark::X } else { Mark::O }) {
            warn!(%turn, "Stored turn disagrees with board, using derived turn");
        }

        let outcome = rules::derive_outcome(&board);
        info!(?mode, ?theme, ?outcome, "Game state loaded");

        Self {
            round: RoundState {
                board,
                turn,
                history: Vec::new(),
                outcome,
            },
            scores,
            mode,
            theme,
            focus: 0,
            pending_computer: None,
            generation: 0,
            store,
        }
    }

    /// Applies a move at the given cell index.
    ///
    /// Returns `None` without touching any state when the index is out
    /// of range, the cell is occupied, or the round is over.
    #[instrument(skip(self), fields(turn = %self.round.turn))]
    pub fn apply_move(&mut self, index: usize) -> Option<Transition> {
        if index >= 9
            || !self.round.outcome.is_in_progress()
            || !self.round.board.is_empty(index)
        {
            debug!(index, "Move ignored");
            return None;
        }

        let mark = self.round.turn;
        self.round.history.push(self.round.board);
        self.round.board.set(index, mark);
        self.round.outcome = rules::derive_outcome(&self.round.board);

        let transition = match self.round.outcome {
            Outcome::Won { winner, line } => {
                self.scores.record_win(winner);
                info!(%winner, ?line, "Round won");
                Transition::Won { winner, line }
            }
            Outcome::Draw => {
                self.scores.record_tie();
                info!("Round drawn");
                Transition::Drawn
            }
            Outcome::InProgress => Transition::Continued,
        };

        self.round.turn = mark.opponent();
        self.focus = index;
        self.invalidate();
        self.persist();
        self.check_invariants();

        Some(transition)
    }

    /// Undoes the most recent move of the round.
    ///
    /// Restores the pre-move snapshot and returns the round to a live
    /// state; a score increment from an undone win or draw is kept.
    /// Returns false when there is nothing to undo.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.round.history.pop() else {
            debug!("Undo ignored, empty history");
            return false;
        };

        let before = self.round.board;
        self.round.board = snapshot;
        self.round.turn = self.round.turn.opponent();
        self.round.outcome = rules::derive_outcome(&self.round.board);
        self.focus = focus::undo_focus_target(&self.round.board, &before).unwrap_or(0);

        self.invalidate();
        self.persist();
        self.check_invariants();
        true
    }

    /// Starts a new round. Scores, mode, and theme are untouched.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        info!("New round");
        self.round = RoundState::new();
        self.focus = 0;
        self.invalidate();
        self.persist();
    }

    /// Resets everything: scores, mode, theme, the round, and every key
    /// the store holds.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        info!("Full reset");
        self.scores = Scores::default();
        self.mode = GameMode::default();
        self.theme = Theme::default();
        self.store.clear();
        self.reset_round();
    }

    /// Sets the game mode. Changing mode mid-round starts a new round.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset_round();
    }

    /// Sets the theme identifier.
    #[instrument(skip(self))]
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.persist();
    }

    /// Moves the focus index one step, clamped to the grid.
    pub fn move_focus(&mut self, dir: FocusDir) {
        self.focus = focus::shift(self.focus, dir);
    }

    /// Applies a move at the focused cell (Enter/Space activation).
    pub fn activate_focused(&mut self) -> Option<Transition> {
        self.apply_move(self.focus)
    }

    /// Hands out a ticket for a computer move, when one is due.
    ///
    /// A ticket is issued only while {mode = versus-computer, turn = O,
    /// round in progress} and no ticket is outstanding, so at most one
    /// computer move is ever pending.
    #[instrument(skip(self))]
    pub fn schedule_computer(&mut self) -> Option<ComputerTicket> {
        if self.mode != GameMode::VersusComputer
            || self.round.turn != Mark::O
            || !self.round.outcome.is_in_progress()
            || self.pending_computer.is_some()
        {
            return None;
        }

        self.pending_computer = Some(self.generation);
        debug!(generation = self.generation, "Computer move scheduled");
        Some(ComputerTicket(self.generation))
    }

    /// Redeems a scheduled computer move: picks a uniformly random empty
    /// cell and applies it.
    ///
    /// A ticket invalidated by any intervening mutation is a no-op, as
    /// is one whose preconditions no longer hold.
    #[instrument(skip(self, rng))]
    pub fn redeem_computer<R: Rng + ?Sized>(
        &mut self,
        ticket: ComputerTicket,
        rng: &mut R,
    ) -> Option<Transition> {
        if self.pending_computer != Some(ticket.0) {
            debug!("Stale computer ticket ignored");
            return None;
        }
        self.pending_computer = None;

        if self.mode != GameMode::VersusComputer
            || self.round.turn != Mark::O
            || !self.round.outcome.is_in_progress()
        {
            return None;
        }

        let index = ai::pick_move(&self.round.board, rng)?;
        debug!(index, "Computer plays");
        self.apply_move(index)
    }

    /// Invalidates any outstanding computer ticket.
    fn invalidate(&mut self) {
        self.generation += 1;
        self.pending_computer = None;
    }

    /// Writes every owned key to the store, best-effort.
    fn persist(&mut self) {
        store::put_json(&mut self.store, store::KEY_BOARD, &self.round.board);
        store::put_json(
            &mut self.store,
            store::KEY_TURN_IS_X,
            &(self.round.turn == Mark::X),
        );
        store::put_json(&mut self.store, store::KEY_SCORES, &self.scores);
        store::put_json(&mut self.store, store::KEY_MODE, &self.mode);
        store::put_json(&mut self.store, store::KEY_THEME, &self.theme);
    }

    fn check_invariants(&self) {
        debug_assert!(
            RoundInvariants::check_all(&self.round).is_ok(),
            "round invariant violated: {:?}",
            RoundInvariants::check_all(&self.round)
        );
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.round.board
    }

    /// Returns whose turn it is.
    pub fn turn(&self) -> Mark {
        self.round.turn
    }

    /// Returns the derived outcome of the round.
    pub fn outcome(&self) -> Outcome {
        self.round.outcome
    }

    /// Returns the score tally.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the theme identifier.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the keyboard focus index (0-8).
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// True when there is a move to undo.
    pub fn can_undo(&self) -> bool {
        !self.round.history.is_empty()
    }

    /// Number of undoable moves in the round.
    pub fn history_len(&self) -> usize {
        self.round.history.len()
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
