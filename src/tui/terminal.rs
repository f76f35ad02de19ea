//! Terminal setup and teardown
//!
//! Initializes and restores the terminal, with a panic hook that restores it
//! on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::settings::Settings;
use crate::models::LedgerMonth;
use crate::storage::Storage;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
///
/// With `month` set the form reads and writes that month's ledger instead of
/// the current one.
pub fn run_tui(storage: &Storage, settings: &Settings, month: Option<LedgerMonth>) -> Result<()> {
    let mut terminal = init_terminal()?;

    let mut app = App::new(storage, settings);
    if let Some(month) = month {
        app = app.with_month(month);
    }

    tracing::info!(month = %app.active_month(), "TUI started");

    let result = event_loop(&mut terminal, &mut app);

    // Restore even when the loop failed, then report the first error
    let restored = restore_terminal();
    result?;
    restored?;

    tracing::info!("TUI closed");
    Ok(())
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let events = EventHandler::default();

    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        match events.next()? {
            Event::Key(key_event) => handle_event(app, Event::Key(key_event))?,
            Event::Resize(_, _) | Event::Tick => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
