//! The turn cycle for a single round.

use super::board::Board;
use super::position::Position;
use super::types::Player;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Board state plus the turn flag, for one round of play.
///
/// A round is a value: [`Round::play`] returns a new round and never
/// mutates the receiver. Invalid moves (occupied cell, out-of-range
/// index) return the input unchanged rather than an error.
///
/// The round does not gate on an existing winner. Callers must check
/// [`evaluate`](super::rules::evaluate) before dispatching further
/// moves; without that check `play` will keep placing marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    board: Board,
    to_move: Player,
}

impl Round {
    /// Starts a fresh round: empty board, noughts to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::Nought,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player who moves next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Plays the current player's mark at the given position.
    ///
    /// Returns the resulting round with the turn flag flipped. If the
    /// cell is occupied the round comes back unchanged and the flag
    /// does not flip.
    pub fn play(self, pos: Position) -> Round {
        if !self.board.is_open(pos) {
            debug!(position = %pos, "Ignoring move on occupied cell");
            return self;
        }
        debug!(position = %pos, player = %self.to_move, "Placing mark");
        Round {
            board: self.board.with_mark(pos, self.to_move.mark()),
            to_move: self.to_move.opponent(),
        }
    }

    /// Plays at a raw board index (0-8, row-major).
    ///
    /// Out-of-range indices are ignored, like moves on occupied cells.
    pub fn play_index(self, index: usize) -> Round {
        match Position::from_index(index) {
            Some(pos) => self.play(pos),
            None => {
                debug!(index, "Ignoring move outside the board");
                self
            }
        }
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
