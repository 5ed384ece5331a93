//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TabBar`: Screen tabs with the active one highlighted
//! - `StatusBar`: Status message and key hints
//! - `StopwatchScreen`: Elapsed time and the Start/Stop button
//! - `TimerScreen`: Countdown fields, button and remaining time
//! - `SettingsScreen`: Theme toggle
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `TimerForm`: Field buffers and focus for the Timer screen
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", never by reaching into
//! global state. The theme is the main example: `ui::draw_ui` builds one
//! `Palette` from `App::theme()` and hands it to every component.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! StopwatchScreen::new(&app.stopwatch, palette).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! StopwatchScreen::render(frame, area); // reads the theme from somewhere
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs               (this file)
//! ├── tab_bar.rs           (Top navigation)
//! ├── status_bar.rs        (Bottom line)
//! ├── stopwatch_screen.rs
//! ├── timer_screen.rs      (TimerScreen + TimerForm)
//! └── settings_screen.rs
//! ```

pub mod settings_screen;
pub mod status_bar;
pub mod stopwatch_screen;
pub mod tab_bar;
pub mod timer_screen;

pub use settings_screen::SettingsScreen;
pub use status_bar::StatusBar;
pub use stopwatch_screen::StopwatchScreen;
pub use tab_bar::TabBar;
pub use timer_screen::{TimerForm, TimerFormEvent, TimerScreen};
