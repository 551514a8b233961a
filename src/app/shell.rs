//! Application shell
//!
//! Owns the active screen and forwards every event to it. Screen swaps, quit
//! requests and timer arming happen here; what a timer means is entirely up
//! to the screen that asked for it. Swapping screens drops every pending
//! timer, since the screen that armed them is gone. The shell has no
//! terminal, so it can be driven directly with synthetic events and instants.

use crate::app::event::AppEvent;
use crate::app::screens::{Context, Screen, Transition};
use crate::app::theme::Theme;
use crate::app::timer::TimerQueue;
use crate::config::GameConfig;
use crate::game::OutcomeSource;
use log::{debug, info, trace};
use ratatui::{text::Text, Frame};
use tokio::time::Instant;

pub struct Shell {
    screen: Screen,
    timers: TimerQueue,
    coin: Box<dyn OutcomeSource>,
    config: GameConfig,
    theme: Theme,
    should_quit: bool,
}

impl Shell {
    /// Start on the main menu
    pub fn new(config: GameConfig, coin: Box<dyn OutcomeSource>) -> Self {
        Self {
            screen: Screen::default(),
            timers: TimerQueue::new(),
            coin,
            config,
            theme: Theme::default(),
            should_quit: false,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Number of armed timers not yet delivered
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Deadline of the next timer to fire
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Handle one event delivered at `now`
    pub fn dispatch(&mut self, event: AppEvent, now: Instant) {
        if self.should_quit {
            return;
        }

        let mut ctx = Context {
            now,
            config: &self.config,
            coin: self.coin.as_mut(),
        };
        let update = self.screen.handle(&event, &mut ctx);

        match update.transition {
            Transition::Stay => {}
            Transition::Switch(next) => {
                debug!(
                    "switching screen {} -> {}, dropping {} pending timers",
                    self.screen.name(),
                    next.name(),
                    self.timers.len()
                );
                self.timers.clear();
                self.screen = next;
            }
            Transition::Quit => {
                info!("quit requested on {}", self.screen.name());
                self.should_quit = true;
            }
        }

        for request in update.timers {
            trace!("arming {:?} in {:?}", request.kind, request.delay);
            self.timers.arm(request, now);
        }
    }

    /// Deliver every timer due at `now`, earliest first.
    /// Returns how many were delivered.
    pub fn fire_due(&mut self, now: Instant) -> usize {
        let mut delivered = 0;
        while !self.should_quit {
            let Some(kind) = self.timers.pop_due(now) else {
                break;
            };
            trace!("timer {:?} fired on {}", kind, self.screen.name());
            self.dispatch(AppEvent::Timer(kind), now);
            delivered += 1;
        }
        delivered
    }

    /// Full-frame text of the active screen
    pub fn view(&self, now: Instant) -> Text<'static> {
        self.screen.view(&self.theme, now)
    }

    /// Draw the active screen
    pub fn render(&self, f: &mut Frame, now: Instant) {
        self.screen.render(f, &self.theme, now);
    }
}
