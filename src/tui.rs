//! Terminal front end
//!
//! Renders session snapshots and turns key presses into session events.
//! Holds no session state of its own beyond view concerns (drawer, cursor).

mod app;
mod ui;

pub use app::{App, Command};

use crate::clipboard;
use crate::runtime::{RuntimeError, SessionHandle};
use crossterm::{
    event::{self, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Error)]
pub enum TuiError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the UI until the user quits
pub async fn run(handle: &SessionHandle) -> Result<(), TuiError> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, handle).await;
    restore_terminal()?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    handle: &SessionHandle,
) -> Result<(), TuiError> {
    let mut snapshots = handle.subscribe();
    let mut app = App::new(handle.snapshot());

    loop {
        if snapshots.has_changed().map_err(|_| RuntimeError::Stopped)? {
            app.apply_snapshot(snapshots.borrow_and_update().clone());
        }
        app.tick();
        terminal.draw(|frame| ui::render(frame, &app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let TermEvent::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.on_key(key) {
            Command::None => {}
            Command::SetInput(text) => handle.set_input(text).await?,
            Command::Submit(input) => handle.submit(input).await?,
            Command::Select(id) => handle.select_history(id).await?,
            Command::Copy(text) => {
                if clipboard::copy(&text) {
                    app.set_status("Copied to clipboard");
                }
            }
            Command::Quit => break,
        }
    }

    tracing::info!("UI closed");
    Ok(())
}
