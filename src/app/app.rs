//! Main application controller
//!
//! Connects the terminal to the [`Shell`]: draws the active screen, waits for
//! either a key or the next timer deadline, and dispatches whatever arrived.

use crate::{
    app::{
        event::AppEvent,
        shell::Shell,
        tui::{spawn_key_reader, Tui},
    },
    config::GameConfig,
    game::OutcomeSource,
    GamesError, Result,
};
use crossterm::event::KeyEvent;
use log::{error, info};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Active screen and pending timers
    shell: Shell,
}

impl App {
    /// Create a new application instance
    pub fn new(config: GameConfig, coin: Box<dyn OutcomeSource>) -> Result<Self> {
        let tui = Tui::new()
            .map_err(|e| GamesError::TuiError(format!("Failed to open terminal: {}", e)))?;
        Ok(Self {
            tui,
            shell: Shell::new(config, coin),
        })
    }

    /// Switch the terminal into raw mode and the alternate screen
    pub fn init(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| GamesError::TuiError(format!("Failed to initialize terminal: {}", e)))
    }

    /// Run the main application loop until a screen asks to quit
    pub async fn run(&mut self) -> Result<()> {
        info!("starting event loop");
        let (mut keys, reader) = spawn_key_reader();
        let tick_rate = self.tui.tick_rate();

        let result = drive(&mut self.shell, &mut keys, tick_rate, |shell, now| {
            self.tui.draw(|f| shell.render(f, now))
        })
        .await;

        // Dropping the receiver stops the reader
        drop(keys);
        let _ = reader.await;
        info!("event loop finished");
        result
    }

    /// Give the terminal back to the shell
    pub fn restore(&mut self) -> Result<()> {
        self.tui
            .restore()
            .map_err(|e| GamesError::TuiError(format!("Failed to restore terminal: {}", e)))
    }

    /// Run the loop, then always restore the terminal. A loop error wins
    /// over a restore error; the latter is still logged.
    pub async fn run_and_restore(&mut self) -> Result<()> {
        let result = self.run().await;
        let restored = self.restore();
        first_error(result, restored)
    }
}

fn first_error(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(e), Err(restore_err)) => {
            error!("{}", restore_err);
            Err(e)
        }
        (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(e),
        (Ok(()), Ok(())) => Ok(()),
    }
}

/// Event loop over a key channel.
///
/// Each cycle draws once, then waits for a key, the next timer deadline or
/// `tick_rate`, whichever comes first, and delivers everything that is due.
pub async fn drive<F>(
    shell: &mut Shell,
    keys: &mut mpsc::UnboundedReceiver<io::Result<KeyEvent>>,
    tick_rate: Duration,
    mut draw: F,
) -> Result<()>
where
    F: FnMut(&Shell, Instant) -> io::Result<()>,
{
    while !shell.should_quit() {
        let now = Instant::now();
        draw(shell, now)?;

        let redraw_at = now + tick_rate;
        let wake = shell
            .next_deadline()
            .map_or(redraw_at, |deadline| deadline.min(redraw_at));

        tokio::select! {
            key = keys.recv() => match key {
                Some(Ok(key)) => shell.dispatch(AppEvent::Key(key), Instant::now()),
                Some(Err(e)) => {
                    return Err(GamesError::TuiError(format!("Failed to read input: {}", e)));
                }
                None => return Err(GamesError::TuiError("Input stream closed".to_string())),
            },
            _ = sleep_until(wake) => {}
        }

        shell.fire_due(Instant::now());
    }
    Ok(())
}
