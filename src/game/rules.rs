//! Win and draw detection.
//!
//! All outcome computation lives in [`derive_outcome`]; mutators never
//! decide a round's fate themselves.

use super::types::{Board, Cell, Mark};

/// The eight winning triples, scanned in a fixed order:
/// three rows, three columns, two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The fate of a round, derived from the board alone.
///
/// The winning line lives inside `Won`, so a line cannot exist alongside
/// an in-progress or drawn board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Moves can still be made.
    InProgress,
    /// A mark completed one of the eight lines.
    Won {
        /// The mark that completed the line.
        winner: Mark,
        /// The completed triple, for highlighting.
        line: [usize; 3],
    },
    /// Board full, no line completed.
    Draw,
}

impl Outcome {
    /// Returns true while moves can still be made.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Outcome::InProgress)
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning triple, if any.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self {
            Outcome::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Derives the outcome of a board.
///
/// Scans [`LINES`] in order and returns the first completed triple.
/// The scan order only matters for reproducible line selection; the
/// alternation invariant means at most one mark can hold a completed
/// line at a time.
pub fn derive_outcome(board: &Board) -> Outcome {
    for line in LINES {
        let [a, b, c] = line;
        if let Some(Cell::Taken(mark)) = board.get(a)
            && board.get(b) == Some(Cell::Taken(mark))
            && board.get(c) == Some(Cell::Taken(mark))
        {
            return Outcome::Won { winner: mark, line };
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: [Option<Mark>; 9]) -> Board {
        let mut board = Board::new();
        for (index, mark) in marks.into_iter().enumerate() {
            if let Some(mark) = mark {
                board.set(index, mark);
            }
        }
        board
    }

    #[test]
    fn empty_board_is_in_progress() {
        assert_eq!(derive_outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn top_row_wins_for_x() {
        use Mark::{O, X};
        let board = board_from([
            Some(X),
            Some(X),
            Some(X),
            Some(O),
            Some(O),
            None,
            None,
            None,
            None,
        ]);
        assert_eq!(
            derive_outcome(&board),
            Outcome::Won {
                winner: X,
                line: [0, 1, 2]
            }
        );
    }

    #[test]
    fn diagonal_wins_for_o() {
        use Mark::{O, X};
        let board = board_from([
            Some(O),
            Some(X),
            Some(X),
            None,
            Some(O),
            Some(X),
            None,
            None,
            Some(O),
        ]);
        assert_eq!(
            derive_outcome(&board),
            Outcome::Won {
                winner: O,
                line: [0, 4, 8]
            }
        );
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        use Mark::{O, X};
        // X O X / X O O / O X X
        let board = board_from([
            Some(X),
            Some(O),
            Some(X),
            Some(X),
            Some(O),
            Some(O),
            Some(O),
            Some(X),
            Some(X),
        ]);
        assert_eq!(derive_outcome(&board), Outcome::Draw);
    }

    #[test]
    fn outcome_is_symmetric_under_mark_relabeling() {
        use Mark::{O, X};
        let board = board_from([
            Some(X),
            Some(X),
            Some(X),
            Some(O),
            Some(O),
            None,
            None,
            None,
            None,
        ]);
        let mut swapped = Board::new();
        for (index, cell) in board.cells().iter().enumerate() {
            if let Cell::Taken(mark) = cell {
                swapped.set(index, mark.opponent());
            }
        }

        match (derive_outcome(&board), derive_outcome(&swapped)) {
            (
                Outcome::Won {
                    winner: w1,
                    line: l1,
                },
                Outcome::Won {
                    winner: w2,
                    line: l2,
                },
            ) => {
                assert_eq!(w1.opponent(), w2);
                assert_eq!(l1, l2);
            }
            other => panic!("expected mirrored wins, got {other:?}"),
        }
    }

    #[test]
    fn first_matching_line_is_reported() {
        use Mark::X;
        // Row 0 and column 0 are both complete; the row scans first.
        let board = board_from([
            Some(X),
            Some(X),
            Some(X),
            Some(X),
            None,
            None,
            Some(X),
            None,
            None,
        ]);
        assert_eq!(derive_outcome(&board).winning_line(), Some([0, 1, 2]));
    }
}
