//! Application state for the terminal frontend.

use crate::game::{Position, Round, WinEvaluation, evaluate};
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::input;

/// State held by the frontend: the current round, the cell cursor, and
/// the pending auto-reset deadline.
///
/// The round is replaced wholesale on every accepted move and on reset;
/// the app owns the caller-side policies the core leaves out, gating
/// moves once a winner exists and scheduling the delayed reset.
pub struct App {
    round: Round,
    cursor: Position,
    reset_delay: Duration,
    reset_at: Option<Instant>,
    should_quit: bool,
}

impl App {
    /// Creates the app with a fresh round.
    pub fn new(reset_delay: Duration) -> Self {
        Self {
            round: Round::new(),
            cursor: Position::Center,
            reset_delay,
            reset_at: None,
            should_quit: false,
        }
    }

    /// Returns the current round.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Evaluates the current board.
    pub fn evaluation(&self) -> WinEvaluation {
        evaluate(self.round.board())
    }

    /// True once the user has asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Advances timed behavior: arms the auto-reset when a winner first
    /// appears and replaces the round once the deadline passes.
    pub fn tick(&mut self, now: Instant) {
        let evaluation = self.evaluation();
        if !evaluation.has_winner() {
            return;
        }
        let deadline = match self.reset_at {
            Some(deadline) => deadline,
            None => {
                let deadline = now + self.reset_delay;
                if let Some(line) = evaluation.winning_line {
                    info!(winner = %evaluation.winner, line = %line, "Round won, arming auto-reset");
                }
                self.reset_at = Some(deadline);
                deadline
            }
        };
        if now >= deadline {
            self.restart();
        }
    }

    /// Handles a key press.
    pub fn on_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10)
                    && (1..=9).contains(&digit)
                    && let Some(pos) = Position::from_index(digit as usize - 1)
                {
                    self.play(pos);
                }
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    /// Starts a new round immediately.
    pub fn restart(&mut self) {
        info!("Starting new round");
        self.round = Round::new();
        self.reset_at = None;
    }

    fn play(&mut self, pos: Position) {
        if self.evaluation().has_winner() {
            debug!(position = %pos, "Ignoring move, round already won");
            return;
        }
        self.round = self.round.play(pos);
    }
}
