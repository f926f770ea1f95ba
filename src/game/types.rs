//! Core domain types: marks, cells, the board, and the score tally.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// X moves first in a fresh round.
    X,
    /// O moves second.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// One cell of the board.
///
/// Serializes as `null | "X" | "O"` so a stored board is a plain
/// 9-element array of nullable marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Mark>", into = "Option<Mark>")]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Occupied by a mark.
    Taken(Mark),
}

impl From<Option<Mark>> for Cell {
    fn from(value: Option<Mark>) -> Self {
        match value {
            None => Cell::Empty,
            Some(mark) => Cell::Taken(mark),
        }
    }
}

impl From<Cell> for Option<Mark> {
    fn from(value: Cell) -> Self {
        match value {
            Cell::Empty => None,
            Cell::Taken(mark) => Some(mark),
        }
    }
}

/// 3x3 board, indexed 0-8 in row-major order.
///
/// Rows are 0-2, 3-5, 6-8; columns are 0-3-6, 1-4-7, 2-5-8;
/// diagonals are 0-4-8 and 2-4-6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Returns the cell at the given index, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Places a mark at the given index. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, mark: Mark) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::Taken(mark);
        }
    }

    /// Checks whether the cell at the given index is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks whether every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the indices of all empty cells, in board order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Counts the cells holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Taken(mark))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Score tally across rounds.
///
/// Counters only ever grow; `reset_all` replaces the tally with
/// `Scores::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Scores {
    /// Rounds won by X.
    x: u32,
    /// Rounds won by O.
    o: u32,
    /// Rounds ending in a draw.
    ties: u32,
}

impl Scores {
    /// Credits a win to the given mark.
    pub fn record_win(&mut self, winner: Mark) {
        match winner {
            Mark::X => self.x += 1,
            Mark::O => self.o += 1,
        }
    }

    /// Records a drawn round.
    pub fn record_tie(&mut self) {
        self.ties += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_starts_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|c| *c == Cell::Empty));
        assert_eq!(board.empty_cells().len(), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn set_ignores_out_of_range() {
        let mut board = Board::new();
        board.set(9, Mark::X);
        assert!(board.cells().iter().all(|c| *c == Cell::Empty));
    }

    #[test]
    fn cell_serializes_as_nullable_mark() {
        let mut board = Board::new();
        board.set(4, Mark::X);
        board.set(0, Mark::O);
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(
            json,
            r#"["O",null,null,null,"X",null,null,null,null]"#
        );
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn scores_accumulate() {
        let mut scores = Scores::default();
        scores.record_win(Mark::X);
        scores.record_win(Mark::X);
        scores.record_win(Mark::O);
        scores.record_tie();
        assert_eq!(*scores.x(), 2);
        assert_eq!(*scores.o(), 1);
        assert_eq!(*scores.ties(), 1);
    }
}
