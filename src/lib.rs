//! Tempo library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod tui;

/// The navigable screens of the app, in tab order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Stopwatch,
    Timer,
    Settings,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Stopwatch, Screen::Timer, Screen::Settings];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Stopwatch => "Stopwatch",
            Screen::Timer => "Timer",
            Screen::Settings => "Settings",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Screen::Stopwatch => 0,
            Screen::Timer => 1,
            Screen::Settings => 2,
        }
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
