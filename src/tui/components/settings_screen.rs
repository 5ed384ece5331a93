//! # Settings Screen
//!
//! Shows the light/dark toggle. The toggle itself is an `Action`; this
//! component only draws the current choice.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::theme::Theme;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub struct SettingsScreen {
    pub theme: Theme,
    pub palette: Palette,
}

impl SettingsScreen {
    pub fn new(theme: Theme, palette: Palette) -> Self {
        Self { theme, palette }
    }
}

impl Component for SettingsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [label_area, _, toggle_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        frame.render_widget(
            Paragraph::new(Span::styled("Theme", self.palette.base())).alignment(Alignment::Center),
            label_area,
        );

        let option = |theme: Theme| {
            let label = format!(" {} ", theme.label());
            if theme == self.theme {
                Span::styled(label, self.palette.highlight())
            } else {
                Span::styled(label, self.palette.dim())
            }
        };
        let toggle = Line::from(vec![option(Theme::Light), Span::raw("  "), option(Theme::Dark)]);
        frame.render_widget(
            Paragraph::new(toggle).alignment(Alignment::Center),
            toggle_area,
        );
    }
}
