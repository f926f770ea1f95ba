//! Computer opponent: a uniformly random move among empty cells.
//!
//! Deliberately unweighted. No heuristic, no look-ahead, no difficulty
//! levels.

use super::types::Board;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Picks a uniformly random empty cell, or `None` on a full board.
pub fn pick_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    board.empty_cells().choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Mark;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn picks_only_empty_cells() {
        let mut board = Board::new();
        for index in [0, 1, 2, 3, 5, 6, 7] {
            board.set(index, Mark::X);
        }

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let pick = pick_move(&board, &mut rng).unwrap();
            assert!(pick == 4 || pick == 8);
        }
    }

    #[test]
    fn full_board_yields_no_move() {
        let mut board = Board::new();
        for index in 0..9 {
            board.set(index, Mark::O);
        }
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_move(&board, &mut rng), None);
    }

    #[test]
    fn every_empty_cell_is_reachable() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 9];
        for _ in 0..500 {
            seen[pick_move(&board, &mut rng).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
