//! Stateless rendering for the board, winning line, and status bar.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::game::{Board, Coordinate, Mark, Position};

use super::app::App;

/// Renders one frame: title, board with cursor and winning-line
/// highlight, and the status bar.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Noughts & Crosses")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let evaluation = app.evaluation();
    let winning_cells = evaluation.winning_line.map(|line| line.cells());
    draw_board(
        frame,
        chunks[1],
        app.round().board(),
        app.cursor(),
        winning_cells,
    );

    let status = status_line(app);
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);
}

fn status_line(app: &App) -> String {
    let evaluation = app.evaluation();
    match evaluation.winner {
        Mark::Empty if app.round().board().is_full() => {
            "No moves left. Press 'r' for a new round, 'q' to quit.".to_string()
        }
        Mark::Empty => format!(
            "{} to move - arrows + Enter, or 1-9. 'r' restarts, 'q' quits.",
            app.round().to_move()
        ),
        winner => format!("{winner} wins! New round shortly ('r' restarts now)."),
    }
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    winning_cells: Option<[Coordinate; 3]>,
) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        if row > 0 {
            draw_separator(frame, rows[row * 2 - 1]);
        }
        draw_row(frame, rows[row * 2], board, cursor, winning_cells, row);
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    winning_cells: Option<[Coordinate; 3]>,
    row: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if col > 0 {
            draw_separator_vertical(frame, cols[col * 2 - 1]);
        }
        let coordinate = Coordinate::new(col, row);
        if let Some(pos) = Position::from_coordinate(coordinate) {
            let on_winning_line =
                winning_cells.is_some_and(|cells| cells.contains(&coordinate));
            draw_cell(frame, cols[col * 2], board, cursor, pos, on_winning_line);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    pos: Position,
    on_winning_line: bool,
) {
    let (symbol, base_style) = match board.get(pos) {
        Mark::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Mark::Nought => (
            " O ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Mark::Cross => (
            " X ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let style = if on_winning_line {
        base_style.bg(Color::Yellow).fg(Color::Black)
    } else if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
