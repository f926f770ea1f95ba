//! Keyboard focus movement over the 3x3 grid.

use super::types::{Board, Cell};

/// A focus movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDir {
    /// One row up (-3).
    Up,
    /// One row down (+3).
    Down,
    /// One column left (-1), never across a row boundary.
    Left,
    /// One column right (+1), never across a row boundary.
    Right,
}

impl FocusDir {
    fn offset(self) -> i8 {
        match self {
            FocusDir::Up => -3,
            FocusDir::Down => 3,
            FocusDir::Left => -1,
            FocusDir::Right => 1,
        }
    }
}

/// Moves a focus index by one step, clamped to the grid.
///
/// Left from column 0 and right from column 2 stay put, as does any step
/// that would leave the 0-8 range.
pub fn shift(focus: usize, dir: FocusDir) -> usize {
    debug_assert!(focus < 9);

    match dir {
        FocusDir::Left if focus % 3 == 0 => return focus,
        FocusDir::Right if focus % 3 == 2 => return focus,
        _ => {}
    }

    let next = focus as i8 + dir.offset();
    if (0..9).contains(&next) {
        next as usize
    } else {
        focus
    }
}

/// Finds the cell an undo just emptied: empty in `restored`, taken in
/// `before`. Returns `None` when no such cell exists so the caller can
/// choose a fallback explicitly.
pub fn undo_focus_target(restored: &Board, before: &Board) -> Option<usize> {
    (0..9).find(|&index| {
        restored.is_empty(index) && matches!(before.get(index), Some(Cell::Taken(_)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Mark;

    #[test]
    fn moves_within_the_grid() {
        assert_eq!(shift(4, FocusDir::Up), 1);
        assert_eq!(shift(4, FocusDir::Down), 7);
        assert_eq!(shift(4, FocusDir::Left), 3);
        assert_eq!(shift(4, FocusDir::Right), 5);
    }

    #[test]
    fn vertical_moves_clamp_at_the_edges() {
        assert_eq!(shift(1, FocusDir::Up), 1);
        assert_eq!(shift(7, FocusDir::Down), 7);
        assert_eq!(shift(0, FocusDir::Up), 0);
        assert_eq!(shift(8, FocusDir::Down), 8);
    }

    #[test]
    fn horizontal_moves_never_wrap_rows() {
        // Column 0 cannot move left, even where index - 1 is a valid cell.
        assert_eq!(shift(3, FocusDir::Left), 3);
        assert_eq!(shift(6, FocusDir::Left), 6);
        // Column 2 cannot move right.
        assert_eq!(shift(2, FocusDir::Right), 2);
        assert_eq!(shift(5, FocusDir::Right), 5);
    }

    #[test]
    fn undo_target_is_the_cell_that_became_empty() {
        let mut before = Board::new();
        before.set(4, Mark::X);
        before.set(7, Mark::O);

        let mut restored = Board::new();
        restored.set(4, Mark::X);

        assert_eq!(undo_focus_target(&restored, &before), Some(7));
    }

    #[test]
    fn undo_target_at_index_zero_is_found() {
        // Regression guard: index 0 is a valid target, not "not found".
        let mut before = Board::new();
        before.set(0, Mark::X);

        let restored = Board::new();
        assert_eq!(undo_focus_target(&restored, &before), Some(0));
    }

    #[test]
    fn undo_target_absent_when_boards_match() {
        let board = Board::new();
        assert_eq!(undo_focus_target(&board, &board), None);
    }
}
