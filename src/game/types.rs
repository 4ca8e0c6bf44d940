//! Core domain types for noughts and crosses.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Player {
    /// Player O (goes first).
    Nought,
    /// Player X (goes second).
    Cross,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Nought => Player::Cross,
            Player::Cross => Player::Nought,
        }
    }

    /// Returns the mark this player places on the board.
    pub fn mark(self) -> Mark {
        match self {
            Player::Nought => Mark::Nought,
            Player::Cross => Mark::Cross,
        }
    }
}

/// The value occupying a cell on the board.
///
/// `Empty` doubles as the "no winner" value in [`WinEvaluation`],
/// mirroring the three-state cell model of the board itself.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Mark {
    /// Unoccupied cell.
    Empty,
    /// An O.
    Nought,
    /// An X.
    Cross,
}

/// A cell location as `(col, row)`, each in `0..=2`.
///
/// Used to describe winning-line endpoints for rendering.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({col}, {row})")]
pub struct Coordinate {
    /// Column, 0 to 2 left to right.
    pub col: usize,
    /// Row, 0 to 2 top to bottom.
    pub row: usize,
}

impl Coordinate {
    /// Creates a coordinate from column and row.
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Endpoints of a completed three-in-a-row line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("{start}-{end}")]
pub struct LineCoordinates {
    /// First cell of the line.
    pub start: Coordinate,
    /// Last cell of the line.
    pub end: Coordinate,
}

impl LineCoordinates {
    /// Creates a line from its two endpoint coordinates.
    pub const fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    /// Returns the three cells the line passes through.
    ///
    /// The middle cell is the midpoint of the endpoints, which is exact
    /// for all eight rows, columns, and diagonals of the 3x3 grid.
    pub fn cells(&self) -> [Coordinate; 3] {
        let mid = Coordinate::new(
            (self.start.col + self.end.col) / 2,
            (self.start.row + self.end.row) / 2,
        );
        [self.start, mid, self.end]
    }
}

/// The result of checking a board for a winner.
///
/// `winning_line` is `Some` exactly when `winner` is not [`Mark::Empty`].
/// A full board with no three-in-a-row reports `winner == Mark::Empty`;
/// draw detection is left to callers (board full and no winner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinEvaluation {
    /// The winning mark, or `Mark::Empty` when nobody has won.
    pub winner: Mark,
    /// Endpoints of the winning line, when there is a winner.
    pub winning_line: Option<LineCoordinates>,
}

impl WinEvaluation {
    /// Returns true when a winner has been found.
    pub fn has_winner(&self) -> bool {
        self.winner != Mark::Empty
    }
}
