//! Terminal view layer.
//!
//! Draws whatever the engine reports and turns key presses into intents.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use input::{KeyAction, action_for, move_cursor, move_selection};

use crate::config::DisplayConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use tracing::{error, info, instrument, warn};

/// Raw mode and alternate screen, undone on drop.
///
/// Dropping covers every exit from [`run`], including a failed setup step
/// after raw mode was already enabled.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut impl Write) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = TerminalGuard;
        execute!(out, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal(&mut io::stdout());
    }
}

fn restore_terminal(out: &mut impl Write) {
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen, Show) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
}

/// Runs the interactive UI until the user quits.
#[instrument(skip_all)]
pub fn run(display: &DisplayConfig) -> Result<()> {
    info!("Starting terminal UI");

    let mut stdout = io::stdout();
    let guard = TerminalGuard::enter(&mut stdout)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let res = run_loop(&mut terminal, display);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "UI loop error");
    }
    info!("Terminal UI closed");
    res
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    display: &DisplayConfig,
) -> Result<()> {
    let mut app = App::new();

    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, &app, display))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }

    Ok(())
}
