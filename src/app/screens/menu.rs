//! Main menu screen
//!
//! Lists the games with a cursor and opens the selected one. Entries whose
//! game does not exist yet stay on the menu and show a short notice.

use crate::app::event::AppEvent;
use crate::app::screens::{CoinFlipScreen, Context, Screen, Update};
use crate::app::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, trace};
use ratatui::text::{Line, Span, Text};

/// What selecting a menu entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    OpenCoinFlip,
    /// Not implemented yet
    OpenDiceRoll,
    /// Not implemented yet
    OpenBlackjack,
    Quit,
}

impl MenuAction {
    /// Whether selecting the action does something beyond showing a notice
    pub fn is_available(&self) -> bool {
        matches!(self, MenuAction::OpenCoinFlip | MenuAction::Quit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub action: MenuAction,
}

impl MenuEntry {
    pub const fn new(label: &'static str, action: MenuAction) -> Self {
        Self { label, action }
    }
}

/// Entries in display and navigation order
pub const DEFAULT_ENTRIES: [MenuEntry; 4] = [
    MenuEntry::new("Coin Flip", MenuAction::OpenCoinFlip),
    MenuEntry::new("Dice Roll", MenuAction::OpenDiceRoll),
    MenuEntry::new("Blackjack", MenuAction::OpenBlackjack),
    MenuEntry::new("Quit", MenuAction::Quit),
];

/// Logical keys understood by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Select,
    Quit,
}

/// Main menu state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainMenuScreen {
    entries: Vec<MenuEntry>,
    cursor: usize,
    selected: Option<usize>,
    notice: Option<String>,
}

impl MainMenuScreen {
    /// Create the menu with the default entries, cursor on the first one
    pub fn new() -> Self {
        Self {
            entries: DEFAULT_ENTRIES.to_vec(),
            cursor: 0,
            selected: None,
            notice: None,
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the last entry confirmed with Select
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Message shown after selecting an unavailable game
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Move the cursor up, stopping at the first entry
    pub fn select_previous(&mut self) {
        self.notice = None;
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move the cursor down, stopping at the last entry
    pub fn select_next(&mut self) {
        self.notice = None;
        if self.cursor < self.entries.len() - 1 {
            self.cursor += 1;
        }
    }

    /// Convert a key press into a menu key
    pub fn key_to_action(key: KeyEvent) -> Option<MenuKey> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(MenuKey::Quit)
            }
            KeyCode::Char('q') => Some(MenuKey::Quit),
            KeyCode::Up | KeyCode::Char('k') => Some(MenuKey::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(MenuKey::Down),
            KeyCode::Enter | KeyCode::Char(' ') => Some(MenuKey::Select),
            _ => None,
        }
    }

    pub fn handle(&mut self, event: &AppEvent, ctx: &mut Context<'_>) -> Update {
        match event {
            AppEvent::Timer(kind) => {
                trace!("main menu ignoring stale {:?}", kind);
                Update::none()
            }
            AppEvent::Key(key) => match Self::key_to_action(*key) {
                Some(MenuKey::Quit) => Update::quit(),
                Some(MenuKey::Up) => {
                    self.select_previous();
                    Update::none()
                }
                Some(MenuKey::Down) => {
                    self.select_next();
                    Update::none()
                }
                Some(MenuKey::Select) => self.select(ctx),
                None => Update::none(),
            },
        }
    }

    fn select(&mut self, ctx: &mut Context<'_>) -> Update {
        self.selected = Some(self.cursor);
        let entry = &self.entries[self.cursor];
        debug!("main menu selected {:?}", entry.action);

        if !entry.action.is_available() {
            self.notice = Some(format!("{} is not available yet", entry.label));
            return Update::none();
        }
        match entry.action {
            MenuAction::OpenCoinFlip => {
                Update::switch(Screen::CoinFlip(CoinFlipScreen::new(ctx.config)))
            }
            MenuAction::Quit => Update::quit(),
            MenuAction::OpenDiceRoll | MenuAction::OpenBlackjack => Update::none(),
        }
    }

    /// Render the menu as plain styled text
    pub fn view(&self, theme: &Theme) -> Text<'static> {
        let mut lines = vec![
            Line::from(Span::styled(" CLI GAMES ", theme.title_style())),
            Line::default(),
        ];

        for (i, entry) in self.entries.iter().enumerate() {
            let line = if i == self.cursor {
                Line::from(vec![
                    Span::styled(theme.selected_marker, theme.selected_style()),
                    Span::styled(entry.label, theme.selected_style()),
                ])
            } else {
                Line::from(vec![
                    Span::raw(theme.unselected_marker),
                    Span::raw(entry.label),
                ])
            };
            lines.push(line);
        }

        lines.push(Line::default());
        if let Some(notice) = &self.notice {
            lines.push(Line::from(Span::styled(
                format!("    {}", notice),
                theme.muted_style(),
            )));
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            "    Press q to quit, up/k and down/j to navigate, enter to select",
            theme.help_style(),
        )));

        Text::from(lines)
    }
}

impl Default for MainMenuScreen {
    fn default() -> Self {
        Self::new()
    }
}
