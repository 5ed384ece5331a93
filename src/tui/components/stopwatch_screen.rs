//! # Stopwatch Screen
//!
//! One `HH:MM:SS` readout and a single Start/Stop button whose label follows
//! the running state. Stateless: everything arrives as props.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::stopwatch::StopwatchEngine;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub struct StopwatchScreen {
    pub display: String,
    pub running: bool,
    pub palette: Palette,
}

impl StopwatchScreen {
    pub fn new(stopwatch: &StopwatchEngine, palette: Palette) -> Self {
        Self {
            display: stopwatch.format(),
            running: stopwatch.is_running(),
            palette,
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.running { "Stop" } else { "Start" }
    }
}

impl Component for StopwatchScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [display_area, _, button_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1), // Spacer
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        let display = Paragraph::new(Line::from(Span::styled(
            self.display.as_str(),
            self.palette.base().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(display, display_area);

        let button = Paragraph::new(Line::from(Span::styled(
            format!("[ {} ]", self.button_label()),
            self.palette.highlight(),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(button, button_area);
    }
}
