//! Board storage with copy-on-write updates.

use super::position::Position;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// 3x3 board of marks in row-major order.
///
/// The board is a plain value: updates go through [`Board::with_mark`],
/// which returns a new board and leaves the receiver untouched. Callers
/// replace their held state wholesale rather than mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Mark; 9],
}

impl Board {
    /// Creates a new board with all nine cells empty.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; 9],
        }
    }

    /// Returns the mark at the given position.
    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.to_index()]
    }

    /// Checks whether the cell at the given position is still empty.
    pub fn is_open(&self, pos: Position) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Returns a new board with the given cell replaced by `mark`.
    pub fn with_mark(self, pos: Position, mark: Mark) -> Board {
        let mut cells = self.cells;
        cells[pos.to_index()] = mark;
        Board { cells }
    }

    /// Checks whether every cell is occupied.
    ///
    /// A full board with no winner is the caller-derived draw condition;
    /// the win evaluator itself never reports draws.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&mark| mark != Mark::Empty)
    }

    /// Returns all cells as a slice, row-major.
    pub fn cells(&self) -> &[Mark; 9] {
        &self.cells
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.cells[row * 3 + col] {
                    Mark::Empty => ".",
                    Mark::Nought => "O",
                    Mark::Cross => "X",
                };
                result.push_str(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Player;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|&mark| mark == Mark::Empty));
        assert!(!board.is_full());
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let updated = board.with_mark(Position::Center, Player::Nought.mark());

        assert_eq!(board.get(Position::Center), Mark::Empty);
        assert_eq!(updated.get(Position::Center), Mark::Nought);

        // Every other cell carries over unchanged.
        let changed = board
            .cells()
            .iter()
            .zip(updated.cells())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(changed, 1);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        use strum::IntoEnumIterator;
        for pos in Position::iter() {
            assert!(!board.is_full());
            board = board.with_mark(pos, Mark::Cross);
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_display_grid() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::Cross)
            .with_mark(Position::Center, Mark::Nought);
        assert_eq!(board.display(), "X|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|.");
    }
}
