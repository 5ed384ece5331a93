//! # StatusBar Component
//!
//! Bottom line: the latest status message on the left, key hints for the
//! active screen on the right.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::Screen;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub struct StatusBar {
    pub status_message: String,
    pub screen: Screen,
    pub palette: Palette,
}

impl StatusBar {
    pub fn new(status_message: String, screen: Screen, palette: Palette) -> Self {
        Self {
            status_message,
            screen,
            palette,
        }
    }
}

/// Key hints shown for each screen.
pub fn key_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Stopwatch => "space start/stop · r reset · ←/→ screens · esc quit",
        Screen::Timer => "tab/↑↓ field · enter start · ^S stop · ←/→ screens · esc quit",
        Screen::Settings => "space toggle theme · ←/→ screens · esc quit",
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let status = Paragraph::new(Span::styled(self.status_message.as_str(), self.palette.base()));
        let hints = key_hints(self.screen);

        // The status message wins; hints only get what is left over
        let needed = self.status_message.width() + 1 + hints.width();
        if needed > usize::from(area.width) {
            frame.render_widget(status, area);
            return;
        }

        let [status_area, hints_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hints.width() as u16)])
                .areas(area);
        frame.render_widget(status, status_area);
        frame.render_widget(
            Paragraph::new(Span::styled(hints, self.palette.dim())).alignment(Alignment::Right),
            hints_area,
        );
    }
}
