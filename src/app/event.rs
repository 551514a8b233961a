//! Events delivered to the active screen

use crate::app::timer::TimerKind;
use crossterm::event::KeyEvent;

/// A single external event: a key press or a fired timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Key pressed by the user
    Key(KeyEvent),
    /// Timer previously requested by a screen has fired
    Timer(TimerKind),
}

impl From<KeyEvent> for AppEvent {
    fn from(key: KeyEvent) -> Self {
        AppEvent::Key(key)
    }
}

impl From<TimerKind> for AppEvent {
    fn from(kind: TimerKind) -> Self {
        AppEvent::Timer(kind)
    }
}
