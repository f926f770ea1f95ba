//! First-class invariants for the game state machine.
//!
//! Invariants are logical properties that must hold after every
//! mutation. They are testable independently and checked via
//! `debug_assert!` inside the machine.

use super::machine::RoundState;
use super::rules;
use super::types::Mark;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks whether the invariant holds.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together. Implemented for tuples.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X leads O by zero or one marks, and the turn agrees.
///
/// X moves first, so equal counts mean X is to move and a one-mark lead
/// means O is to move.
pub struct MarkBalance;

impl Invariant<RoundState> for MarkBalance {
    fn holds(round: &RoundState) -> bool {
        let x = round.board().count(Mark::X);
        let o = round.board().count(Mark::O);

        match x.checked_sub(o) {
            Some(0) => round.turn() == Mark::X,
            Some(1) => round.turn() == Mark::O,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "X count minus O count is 0 (X to move) or 1 (O to move)"
    }
}

/// Invariant: history snapshots grow by exactly one mark each, and the
/// newest snapshot is one mark behind the board.
pub struct HistoryCoherent;

impl HistoryCoherent {
    fn mark_count(board: &super::types::Board) -> usize {
        board.count(Mark::X) + board.count(Mark::O)
    }
}

impl Invariant<RoundState> for HistoryCoherent {
    fn holds(round: &RoundState) -> bool {
        let history = round.history();

        for window in history.windows(2) {
            if Self::mark_count(&window[1]) != Self::mark_count(&window[0]) + 1 {
                return false;
            }
        }

        match history.last() {
            Some(last) => {
                Self::mark_count(round.board()) == Self::mark_count(last) + 1
            }
            None => true,
        }
    }

    fn description() -> &'static str {
        "each snapshot adds one mark and the board is one ahead of the newest"
    }
}

/// Invariant: the stored outcome equals the outcome derived from the
/// board.
pub struct OutcomeDerived;

impl Invariant<RoundState> for OutcomeDerived {
    fn holds(round: &RoundState) -> bool {
        rules::derive_outcome(round.board()) == round.outcome()
    }

    fn description() -> &'static str {
        "outcome is exactly what derive_outcome reports for the board"
    }
}

/// All round invariants as a composable set.
pub type RoundInvariants = (MarkBalance, HistoryCoherent, OutcomeDerived);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::machine::GameMachine;
    use crate::store::MemoryStore;

    fn machine() -> GameMachine<MemoryStore> {
        GameMachine::load(MemoryStore::default())
    }

    #[test]
    fn fresh_round_satisfies_all_invariants() {
        use crate::game::machine::RoundState;
        use crate::game::rules::Outcome;
        use crate::game::types::Board;

        let round = RoundState {
            board: Board::new(),
            turn: Mark::X,
            history: Vec::new(),
            outcome: Outcome::InProgress,
        };
        assert!(RoundInvariants::check_all(&round).is_ok());
    }

    #[test]
    fn invariants_hold_through_a_game() {
        let mut machine = machine();
        for index in [4, 0, 8, 2] {
            machine.apply_move(index);
        }
        // apply_move debug-asserts RoundInvariants internally; reaching
        // here in a debug build means they held after every move.
        assert_eq!(machine.history_len(), 4);
    }

    #[test]
    fn mark_balance_rejects_double_marks() {
        use crate::game::machine::RoundState;
        use crate::game::rules::Outcome;
        use crate::game::types::{Board, Mark};

        let mut board = Board::new();
        board.set(0, Mark::X);
        board.set(1, Mark::X);
        let round = RoundState {
            board,
            turn: Mark::O,
            history: Vec::new(),
            outcome: Outcome::InProgress,
        };
        assert!(!MarkBalance::holds(&round));
        assert!(RoundInvariants::check_all(&round).is_err());
    }

    #[test]
    fn outcome_derived_rejects_stale_outcome() {
        use crate::game::machine::RoundState;
        use crate::game::rules::Outcome;
        use crate::game::types::{Board, Mark};

        let mut board = Board::new();
        board.set(4, Mark::X);
        let round = RoundState {
            board,
            turn: Mark::O,
            history: vec![Board::new()],
            outcome: Outcome::Draw,
        };
        assert!(!OutcomeDerived::holds(&round));
    }
}
