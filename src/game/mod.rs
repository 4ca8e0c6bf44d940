mod board;
mod position;
mod round;
mod types;

pub mod rules;

pub use board::Board;
pub use position::Position;
pub use round::Round;
pub use rules::evaluate;
pub use types::{Coordinate, LineCoordinates, Mark, Player, WinEvaluation};
