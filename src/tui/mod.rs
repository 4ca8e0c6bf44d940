//! Terminal frontend: event loop, input, and rendering.
//!
//! The frontend is the caller of the game core. It owns the policies
//! the core deliberately leaves out: gating moves once a winner exists
//! and scheduling the delayed round reset.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

use app::App;

/// Runs the game until the user quits.
///
/// `reset_delay` is how long a finished round stays on screen before
/// the board resets on its own.
pub fn run_tui(reset_delay: Duration) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, reset_delay);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    reset_delay: Duration,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut app = App::new(reset_delay);
    info!("Entering game loop");

    while !app.should_quit() {
        app.tick(Instant::now());
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Short poll so the auto-reset deadline fires without input.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.on_key(key.code);
        }
    }

    info!("Leaving game loop");
    Ok(())
}
