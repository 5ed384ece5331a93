//! # Application State
//!
//! Core state for Tempo. This module contains domain state only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── stopwatch: StopwatchEngine    // elapsed seconds + running
//! ├── countdown: CountdownEngine    // remaining seconds + running + finished
//! ├── theme: Theme                  // light/dark, set via set_theme()
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use log::info;

use crate::core::config::ResolvedConfig;
use crate::core::countdown::CountdownEngine;
use crate::core::stopwatch::StopwatchEngine;
use crate::core::theme::Theme;

pub struct App {
    pub stopwatch: StopwatchEngine,
    pub countdown: CountdownEngine,
    pub status_message: String,
    theme: Theme,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            stopwatch: StopwatchEngine::new(),
            countdown: CountdownEngine::new(),
            status_message: String::from("Welcome to Tempo!"),
            theme,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.theme)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The only way the theme changes after startup.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            info!("Theme changed to {}", theme.label());
        }
        self.theme = theme;
    }
}
