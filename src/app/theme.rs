//! Rendering configuration
//!
//! Colors and layout constants shared by every screen. A theme is passed by
//! reference into each render call, so tests can render with any theme.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub title_fg: Color,
    pub title_bg: Color,
    pub accent: Color,   // Purple, cursor marker
    pub coin: Color,     // Gold
    pub result_bg: Color,
    pub muted: Color,    // Countdown and status
    pub help: Color,
    /// Column width coin art and result lines are centered in
    pub width: usize,
    pub selected_marker: &'static str,
    pub unselected_marker: &'static str,
}

pub const DEFAULT_THEME: Theme = Theme {
    title_fg: Color::Rgb(250, 250, 250),
    title_bg: Color::Rgb(125, 86, 244),
    accent: Color::Rgb(125, 86, 244),
    coin: Color::Rgb(255, 215, 0),
    result_bg: Color::Rgb(51, 51, 51),
    muted: Color::Rgb(136, 136, 136),
    help: Color::Rgb(98, 98, 98),
    width: 40,
    selected_marker: "  ▸ ",
    unselected_marker: "    ",
};

impl Theme {
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title_fg)
            .bg(self.title_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn coin_style(&self) -> Style {
        Style::default().fg(self.coin)
    }

    pub fn result_style(&self) -> Style {
        Style::default()
            .fg(self.coin)
            .bg(self.result_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn help_style(&self) -> Style {
        Style::default().fg(self.help)
    }

    pub fn selected_style(&self) -> Style {
        Style::default().fg(self.accent)
    }
}

impl Default for Theme {
    fn default() -> Self {
        DEFAULT_THEME
    }
}
