//! Win detection for noughts and crosses.

use super::super::board::Board;
use super::super::types::{Coordinate, LineCoordinates, Mark, WinEvaluation};

/// Checks the board for a completed three-in-a-row.
///
/// Returns the winning mark and the endpoints of its line, or
/// `Mark::Empty` with no line when nothing has matched. The function is
/// total: any 9-cell board produces a defined result, including boards
/// unreachable through alternating play.
///
/// Checks run in a fixed order: for each band i in 0..3, column
/// {i, i+3, i+6} and, only if the column did not match, row
/// {3i, 3i+1, 3i+2}; then the two diagonals, main before anti. Later
/// matches overwrite earlier ones. On a board reached through legal
/// alternating play at most one line can exist, so the ordering only
/// shows on degenerate boards; it is kept fixed for determinism.
pub fn evaluate(board: &Board) -> WinEvaluation {
    let cells = board.cells();
    let mut winner = Mark::Empty;
    let mut winning_line = None;

    for i in 0..3 {
        if cells[i] == cells[i + 3] && cells[i + 3] == cells[i + 6] && cells[i] != Mark::Empty {
            winner = cells[i];
            winning_line = Some(LineCoordinates::new(
                Coordinate::new(i, 0),
                Coordinate::new(i, 2),
            ));
        } else if cells[i * 3] == cells[i * 3 + 1]
            && cells[i * 3 + 1] == cells[i * 3 + 2]
            && cells[i * 3] != Mark::Empty
        {
            winner = cells[i * 3];
            winning_line = Some(LineCoordinates::new(
                Coordinate::new(0, i),
                Coordinate::new(2, i),
            ));
        }
    }

    if cells[0] == cells[4] && cells[4] == cells[8] && cells[0] != Mark::Empty {
        winner = cells[0];
        winning_line = Some(LineCoordinates::new(
            Coordinate::new(0, 0),
            Coordinate::new(2, 2),
        ));
    } else if cells[2] == cells[4] && cells[4] == cells[6] && cells[2] != Mark::Empty {
        winner = cells[2];
        winning_line = Some(LineCoordinates::new(
            Coordinate::new(2, 0),
            Coordinate::new(0, 2),
        ));
    }

    WinEvaluation {
        winner,
        winning_line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::position::Position;

    fn board_with(marks: &[(Position, Mark)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, &(pos, mark)| board.with_mark(pos, mark))
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let evaluation = evaluate(&Board::new());
        assert_eq!(evaluation.winner, Mark::Empty);
        assert_eq!(evaluation.winning_line, None);
        assert!(!evaluation.has_winner());
    }

    #[test]
    fn test_top_row_win() {
        let board = board_with(&[
            (Position::TopLeft, Mark::Nought),
            (Position::TopCenter, Mark::Nought),
            (Position::TopRight, Mark::Nought),
        ]);
        let evaluation = evaluate(&board);
        assert_eq!(evaluation.winner, Mark::Nought);
        assert_eq!(
            evaluation.winning_line,
            Some(LineCoordinates::new(
                Coordinate::new(0, 0),
                Coordinate::new(2, 0)
            ))
        );
    }

    #[test]
    fn test_left_column_win() {
        let board = board_with(&[
            (Position::TopLeft, Mark::Cross),
            (Position::MiddleLeft, Mark::Cross),
            (Position::BottomLeft, Mark::Cross),
        ]);
        let evaluation = evaluate(&board);
        assert_eq!(evaluation.winner, Mark::Cross);
        assert_eq!(
            evaluation.winning_line,
            Some(LineCoordinates::new(
                Coordinate::new(0, 0),
                Coordinate::new(0, 2)
            ))
        );
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = board_with(&[
            (Position::TopLeft, Mark::Nought),
            (Position::Center, Mark::Nought),
            (Position::BottomRight, Mark::Nought),
        ]);
        let evaluation = evaluate(&board);
        assert_eq!(evaluation.winner, Mark::Nought);
        assert_eq!(
            evaluation.winning_line,
            Some(LineCoordinates::new(
                Coordinate::new(0, 0),
                Coordinate::new(2, 2)
            ))
        );
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_with(&[
            (Position::TopRight, Mark::Cross),
            (Position::Center, Mark::Cross),
            (Position::BottomLeft, Mark::Cross),
        ]);
        let evaluation = evaluate(&board);
        assert_eq!(evaluation.winner, Mark::Cross);
        assert_eq!(
            evaluation.winning_line,
            Some(LineCoordinates::new(
                Coordinate::new(2, 0),
                Coordinate::new(0, 2)
            ))
        );
    }

    #[test]
    fn test_incomplete_line_has_no_winner() {
        let board = board_with(&[
            (Position::TopLeft, Mark::Nought),
            (Position::TopCenter, Mark::Nought),
        ]);
        assert_eq!(evaluate(&board).winner, Mark::Empty);
    }

    #[test]
    fn test_full_board_without_line_reports_empty() {
        // O X O / X O X / X O X: every line is mixed.
        let board = board_with(&[
            (Position::TopLeft, Mark::Nought),
            (Position::TopCenter, Mark::Cross),
            (Position::TopRight, Mark::Nought),
            (Position::MiddleLeft, Mark::Cross),
            (Position::Center, Mark::Nought),
            (Position::MiddleRight, Mark::Cross),
            (Position::BottomLeft, Mark::Cross),
            (Position::BottomCenter, Mark::Nought),
            (Position::BottomRight, Mark::Cross),
        ]);
        assert!(board.is_full());
        let evaluation = evaluate(&board);
        assert_eq!(evaluation.winner, Mark::Empty);
        assert_eq!(evaluation.winning_line, None);
    }

    #[test]
    fn test_column_checked_before_row_in_same_band() {
        // Column 0 and row 0 are both complete for noughts. The column
        // check runs first and short-circuits the row check for that
        // band, so the reported line is the column.
        let board = board_with(&[
            (Position::TopLeft, Mark::Nought),
            (Position::TopCenter, Mark::Nought),
            (Position::TopRight, Mark::Nought),
            (Position::MiddleLeft, Mark::Nought),
            (Position::BottomLeft, Mark::Nought),
        ]);
        let evaluation = evaluate(&board);
        assert_eq!(evaluation.winner, Mark::Nought);
        assert_eq!(
            evaluation.winning_line,
            Some(LineCoordinates::new(
                Coordinate::new(0, 0),
                Coordinate::new(0, 2)
            ))
        );
    }

    #[test]
    fn test_later_match_overwrites_earlier_line() {
        // Row 0 matches in band 0, then column 2 matches in band 2 and
        // overwrites the recorded line.
        let board = board_with(&[
            (Position::TopLeft, Mark::Cross),
            (Position::TopCenter, Mark::Cross),
            (Position::TopRight, Mark::Cross),
            (Position::MiddleRight, Mark::Cross),
            (Position::BottomRight, Mark::Cross),
        ]);
        let evaluation = evaluate(&board);
        assert_eq!(evaluation.winner, Mark::Cross);
        assert_eq!(
            evaluation.winning_line,
            Some(LineCoordinates::new(
                Coordinate::new(2, 0),
                Coordinate::new(2, 2)
            ))
        );
    }

    #[test]
    fn test_main_diagonal_overwrites_and_shadows_anti() {
        // All nine cells the same mark: every line matches. The main
        // diagonal is checked last-but-one and shadows the anti-diagonal
        // through the else branch.
        use strum::IntoEnumIterator;
        let board = Position::iter()
            .fold(Board::new(), |board, pos| board.with_mark(pos, Mark::Nought));
        let evaluation = evaluate(&board);
        assert_eq!(evaluation.winner, Mark::Nought);
        assert_eq!(
            evaluation.winning_line,
            Some(LineCoordinates::new(
                Coordinate::new(0, 0),
                Coordinate::new(2, 2)
            ))
        );
    }

    #[test]
    fn test_line_present_exactly_when_winner_present() {
        let won = evaluate(&board_with(&[
            (Position::TopLeft, Mark::Cross),
            (Position::Center, Mark::Cross),
            (Position::BottomRight, Mark::Cross),
        ]));
        assert!(won.has_winner());
        assert!(won.winning_line.is_some());

        let open = evaluate(&board_with(&[(Position::Center, Mark::Cross)]));
        assert!(!open.has_winner());
        assert!(open.winning_line.is_none());
    }
}
