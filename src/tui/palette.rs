//! Theme colors.
//!
//! A `Palette` is built from the current `Theme` once per frame and passed to
//! every component as a prop. Components never read the theme themselves.

use ratatui::style::{Color, Modifier, Style};

use crate::core::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub muted: Color,
    /// Timer screen background once the countdown has finished.
    pub finished_background: Color,
    pub finished_foreground: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(0xFF, 0xFB, 0xFE),
        foreground: Color::Rgb(0x1C, 0x1B, 0x1F),
        accent: Color::Rgb(0x67, 0x50, 0xA4),
        muted: Color::Rgb(0x79, 0x74, 0x7E),
        finished_background: Color::Red,
        finished_foreground: Color::White,
    };

    pub const DARK: Palette = Palette {
        background: Color::Rgb(0x1C, 0x1B, 0x1F),
        foreground: Color::Rgb(0xE6, 0xE1, 0xE5),
        accent: Color::Rgb(0xD0, 0xBC, 0xFF),
        muted: Color::Rgb(0x93, 0x8F, 0x99),
        finished_background: Color::Red,
        finished_foreground: Color::White,
    };

    pub fn for_theme(theme: Theme) -> Self {
        if theme.is_dark() { Self::DARK } else { Self::LIGHT }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }
}
