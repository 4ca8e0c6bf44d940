//! Noughts and crosses: a single-screen, two-player 3x3 board game.
//!
//! The crate splits into two layers:
//!
//! - **Game core** ([`Round`], [`Board`], [`evaluate`]): pure,
//!   deterministic state and rules. Moves produce new values instead of
//!   mutating in place; invalid moves are silently ignored; the win
//!   evaluator reports the winning mark and the line's endpoint
//!   coordinates. There is no draw detection in the core - a full board
//!   with no line simply has no winner.
//! - **Terminal frontend** ([`run_tui`]): rendering, input dispatch,
//!   and the timed auto-reset after a win. The frontend also enforces
//!   the caller-side contract of checking the evaluation before
//!   dispatching further moves.
//!
//! # Example
//!
//! ```
//! use noughts::{Mark, Position, Round, evaluate};
//!
//! let round = Round::new()
//!     .play(Position::TopLeft)
//!     .play(Position::Center)
//!     .play(Position::TopCenter)
//!     .play(Position::BottomLeft)
//!     .play(Position::TopRight);
//!
//! let evaluation = evaluate(round.board());
//! assert_eq!(evaluation.winner, Mark::Nought);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod game;
mod tui;

pub use cli::Cli;
pub use game::{
    Board, Coordinate, LineCoordinates, Mark, Player, Position, Round, WinEvaluation, evaluate,
    rules,
};
pub use tui::run_tui;
