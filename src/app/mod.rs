//! TUI application module
//!
//! Contains the terminal user interface, the screens, and the shell that
//! moves events between them.

pub mod app;
pub mod event;
pub mod screens;
pub mod shell;
pub mod theme;
pub mod timer;
pub mod tui;

pub use app::{drive, App};
pub use event::AppEvent;
pub use screens::{CoinFlipScreen, MainMenuScreen, Screen, Transition, Update};
pub use shell::Shell;
pub use theme::{Theme, DEFAULT_THEME};
pub use timer::{TimerKind, TimerQueue, TimerRequest};
pub use tui::Tui;
