//! TUI screen components
//!
//! Every screen is a variant of [`Screen`]. A screen handles one event at a
//! time and answers with an [`Update`]: where to go next and which timers to
//! arm. Handlers never sleep and never read the clock themselves; the current
//! instant arrives through [`Context`].

pub mod coin_flip;
pub mod menu;

pub use coin_flip::{CoinFlipAction, CoinFlipScreen, FlipPhase, Tally, COIN_FRAMES};
pub use menu::{MainMenuScreen, MenuAction, MenuEntry};

use crate::app::event::AppEvent;
use crate::app::theme::Theme;
use crate::app::timer::{TimerKind, TimerRequest};
use crate::config::GameConfig;
use crate::game::OutcomeSource;
use ratatui::{text::Text, widgets::Paragraph, Frame};
use std::time::Duration;
use tokio::time::Instant;

/// Everything a handler may consult besides its own state
pub struct Context<'a> {
    /// Delivery time of the event being handled
    pub now: Instant,
    pub config: &'a GameConfig,
    pub coin: &'a mut dyn OutcomeSource,
}

/// What the shell should do after a handler ran
#[derive(Debug)]
pub enum Transition {
    /// Keep the current screen
    Stay,
    /// Replace the current screen
    Switch(Screen),
    /// Stop the event loop
    Quit,
}

/// Result of handling one event
#[derive(Debug)]
pub struct Update {
    pub transition: Transition,
    pub timers: Vec<TimerRequest>,
}

impl Update {
    /// Nothing happens
    pub fn none() -> Self {
        Self {
            transition: Transition::Stay,
            timers: Vec::new(),
        }
    }

    pub fn quit() -> Self {
        Self {
            transition: Transition::Quit,
            timers: Vec::new(),
        }
    }

    pub fn switch(screen: Screen) -> Self {
        Self {
            transition: Transition::Switch(screen),
            timers: Vec::new(),
        }
    }

    /// Stay on the current screen and arm one timer
    pub fn schedule(kind: TimerKind, delay: Duration) -> Self {
        Self {
            transition: Transition::Stay,
            timers: vec![TimerRequest::new(kind, delay)],
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self.transition, Transition::Quit)
    }

    pub fn is_stay(&self) -> bool {
        matches!(self.transition, Transition::Stay)
    }
}

/// The active screen
#[derive(Debug, Clone)]
pub enum Screen {
    MainMenu(MainMenuScreen),
    CoinFlip(CoinFlipScreen),
}

impl Default for Screen {
    fn default() -> Self {
        Screen::MainMenu(MainMenuScreen::new())
    }
}

impl Screen {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Screen::MainMenu(_) => "main-menu",
            Screen::CoinFlip(_) => "coin-flip",
        }
    }

    /// Forward an event to the variant's handler
    pub fn handle(&mut self, event: &AppEvent, ctx: &mut Context<'_>) -> Update {
        match self {
            Screen::MainMenu(screen) => screen.handle(event, ctx),
            Screen::CoinFlip(screen) => screen.handle(event, ctx),
        }
    }

    /// Full-frame text for the variant
    pub fn view(&self, theme: &Theme, now: Instant) -> Text<'static> {
        match self {
            Screen::MainMenu(screen) => screen.view(theme),
            Screen::CoinFlip(screen) => screen.view(theme, now),
        }
    }

    /// Draw the screen over the whole frame
    pub fn render(&self, f: &mut Frame, theme: &Theme, now: Instant) {
        let area = f.size();
        f.render_widget(Paragraph::new(self.view(theme, now)), area);
    }

    pub fn as_main_menu(&self) -> Option<&MainMenuScreen> {
        match self {
            Screen::MainMenu(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn as_coin_flip(&self) -> Option<&CoinFlipScreen> {
        match self {
            Screen::CoinFlip(screen) => Some(screen),
            _ => None,
        }
    }
}

/// Left-pad every line by the same amount so the widest one is centered
/// within `width` columns
pub(crate) fn center_block<S: AsRef<str>>(lines: &[S], width: usize) -> Vec<String> {
    let widest = lines
        .iter()
        .map(|l| l.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    let pad = " ".repeat(width.saturating_sub(widest) / 2);
    lines
        .iter()
        .map(|l| format!("{}{}", pad, l.as_ref()))
        .collect()
}

/// Concatenate the content of every span, one line per row
pub fn plain_text(text: &Text<'_>) -> String {
    text.lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
