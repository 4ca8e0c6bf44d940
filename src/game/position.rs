//! Cell positions on the 3x3 board.

use super::types::Coordinate;
use serde::{Deserialize, Serialize};

/// A cell on the board.
///
/// Positions map to indices 0-8 in row-major order
/// (index = row * 3 + col). The typed API makes out-of-range
/// cells unrepresentable; raw indices go through [`Position::from_index`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// Converts the position to its board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates a position from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Position::TopLeft),
            1 => Some(Position::TopCenter),
            2 => Some(Position::TopRight),
            3 => Some(Position::MiddleLeft),
            4 => Some(Position::Center),
            5 => Some(Position::MiddleRight),
            6 => Some(Position::BottomLeft),
            7 => Some(Position::BottomCenter),
            8 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// Returns the position's `(col, row)` coordinate.
    pub fn coordinate(self) -> Coordinate {
        let index = self.to_index();
        Coordinate::new(index % 3, index / 3)
    }

    /// Creates a position from a coordinate, if it is on the board.
    pub fn from_coordinate(coordinate: Coordinate) -> Option<Self> {
        if coordinate.col > 2 || coordinate.row > 2 {
            return None;
        }
        Self::from_index(coordinate.row * 3 + coordinate.col)
    }

    /// Human-readable label for this position.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trip() {
        for pos in Position::iter() {
            assert_eq!(Position::from_index(pos.to_index()), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_coordinate_is_row_major() {
        assert_eq!(Position::TopLeft.coordinate(), Coordinate::new(0, 0));
        assert_eq!(Position::TopRight.coordinate(), Coordinate::new(2, 0));
        assert_eq!(Position::Center.coordinate(), Coordinate::new(1, 1));
        assert_eq!(Position::BottomLeft.coordinate(), Coordinate::new(0, 2));
    }

    #[test]
    fn test_from_coordinate_bounds() {
        for pos in Position::iter() {
            assert_eq!(Position::from_coordinate(pos.coordinate()), Some(pos));
        }
        assert_eq!(Position::from_coordinate(Coordinate::new(3, 0)), None);
        assert_eq!(Position::from_coordinate(Coordinate::new(0, 3)), None);
    }
}
