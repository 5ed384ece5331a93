//! # Timer Screen
//!
//! Three free-text fields (Hours, Minutes, Seconds), a "Start Timer" button
//! and the `HH:MM:SS` readout of the remaining time. The whole screen turns
//! red once the countdown has finished.
//!
//! ## State Management
//!
//! `TimerForm` owns the field buffers and the focus; it is the stateful part
//! and emits `TimerFormEvent::Start` with the raw text. Parsing the text is
//! the core's job, so anything can be typed here.
//!
//! `TimerScreen` is the stateless renderer. It borrows the form and takes the
//! countdown readout and palette as props.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::countdown::CountdownEngine;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

/// Which control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Hours,
    Minutes,
    Seconds,
    StartButton,
}

impl FormFocus {
    const ORDER: [FormFocus; 4] = [
        FormFocus::Hours,
        FormFocus::Minutes,
        FormFocus::Seconds,
        FormFocus::StartButton,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// High-level events emitted by the `TimerForm`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerFormEvent {
    /// "Start Timer" pressed with the current field contents.
    Start {
        hours: String,
        minutes: String,
        seconds: String,
    },
    /// User asked to stop the running countdown (Ctrl+S)
    Stop,
}

pub struct TimerForm {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub focus: FormFocus,
}

impl TimerForm {
    pub fn new(hours: String, minutes: String, seconds: String) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            focus: FormFocus::Hours,
        }
    }

    fn focused_field(&mut self) -> Option<&mut String> {
        match self.focus {
            FormFocus::Hours => Some(&mut self.hours),
            FormFocus::Minutes => Some(&mut self.minutes),
            FormFocus::Seconds => Some(&mut self.seconds),
            FormFocus::StartButton => None,
        }
    }

    fn start_event(&self) -> TimerFormEvent {
        TimerFormEvent::Start {
            hours: self.hours.clone(),
            minutes: self.minutes.clone(),
            seconds: self.seconds.clone(),
        }
    }
}

impl EventHandler for TimerForm {
    type Event = TimerFormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<TimerFormEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                if let Some(field) = self.focused_field() {
                    field.push(*c);
                } else if *c == ' ' {
                    // Space presses the focused button
                    return Some(self.start_event());
                }
                None
            }
            TuiEvent::Backspace => {
                if let Some(field) = self.focused_field() {
                    field.pop();
                }
                None
            }
            TuiEvent::FocusNext => {
                self.focus = self.focus.next();
                None
            }
            TuiEvent::FocusPrev => {
                self.focus = self.focus.prev();
                None
            }
            // Enter starts from any field, like submitting a form
            TuiEvent::Submit => Some(self.start_event()),
            TuiEvent::StopTimer => Some(TimerFormEvent::Stop),
            _ => None,
        }
    }
}

/// Renders the timer screen.
///
/// # Props
///
/// - `form`: field contents and focus
/// - `display`: remaining time as `HH:MM:SS`
/// - `finished`: countdown reached zero (red background)
/// - `palette`: theme colors
pub struct TimerScreen<'a> {
    pub form: &'a TimerForm,
    pub display: String,
    pub running: bool,
    pub finished: bool,
    pub palette: Palette,
}

impl<'a> TimerScreen<'a> {
    pub fn new(form: &'a TimerForm, countdown: &CountdownEngine, palette: Palette) -> Self {
        Self {
            form,
            display: countdown.format(),
            running: countdown.is_running(),
            finished: countdown.is_finished(),
            palette,
        }
    }

    fn base_style(&self) -> Style {
        if self.finished {
            Style::default()
                .fg(self.palette.finished_foreground)
                .bg(self.palette.finished_background)
        } else {
            self.palette.base()
        }
    }

    fn render_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        value: &str,
        focus: FormFocus,
    ) {
        let focused = self.form.focus == focus;
        let border_style = if focused {
            Style::default().fg(self.palette.accent)
        } else {
            self.palette.dim()
        };

        let content = if value.is_empty() {
            // Placeholder
            Span::styled(title.to_string(), self.palette.dim().add_modifier(Modifier::ITALIC))
        } else {
            Span::raw(value.to_string())
        };

        let field = Paragraph::new(content)
            .style(self.base_style())
            .block(Block::bordered().title(title.to_string()).border_style(border_style));
        frame.render_widget(field, area);

        if focused {
            // Fields are unbounded text; keep the cursor inside the box
            let max_x = area.x.saturating_add(area.width.saturating_sub(2));
            let x = (usize::from(area.x) + 1 + value.width()).min(usize::from(max_x)) as u16;
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl Component for TimerScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Block::default().style(self.base_style()), area);

        let [fields_area, button_area, _, display_area, state_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1), // Spacer
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        let [hours_area, minutes_area, seconds_area] = Layout::horizontal([
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(fields_area);

        self.render_field(frame, hours_area, "Hours", &self.form.hours, FormFocus::Hours);
        self.render_field(frame, minutes_area, "Minutes", &self.form.minutes, FormFocus::Minutes);
        self.render_field(frame, seconds_area, "Seconds", &self.form.seconds, FormFocus::Seconds);

        let button_style = if self.form.focus == FormFocus::StartButton {
            self.palette.highlight()
        } else {
            self.base_style().add_modifier(Modifier::BOLD)
        };
        frame.render_widget(
            Paragraph::new(Span::styled("[ Start Timer ]", button_style))
                .alignment(Alignment::Center),
            button_area,
        );

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                self.display.as_str(),
                self.base_style().add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            display_area,
        );

        let state = if self.finished {
            "Time's up!"
        } else if self.running {
            "running"
        } else {
            ""
        };
        frame.render_widget(
            Paragraph::new(Span::styled(state, self.base_style())).alignment(Alignment::Center),
            state_area,
        );
    }
}
