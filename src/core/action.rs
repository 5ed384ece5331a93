//! # Actions
//!
//! Everything that can happen in Tempo becomes an `Action`.
//! User presses Space on the stopwatch? That's `Action::ToggleStopwatch`.
//! A second passes? That's `Action::Tick { .. }`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state and returns an `Effect` for the event loop to carry out.
//! Spawning and cancelling tick tasks happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::countdown::TickOutcome;
use crate::core::state::App;
use crate::core::theme::Theme;
use crate::core::ticker::TickSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleStopwatch,
    StartStopwatch,
    StopStopwatch,
    ResetStopwatch,
    /// Configure the countdown from the three free-text fields and start it.
    StartCountdown {
        hours: String,
        minutes: String,
        seconds: String,
    },
    StopCountdown,
    /// One second passed for `source`. `generation` identifies the tick task.
    Tick { source: TickSource, generation: u64 },
    ToggleTheme,
    SetTheme(Theme),
    Quit,
}

/// Side effect requested by `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    StartTicker(TickSource),
    StopTicker(TickSource),
}

/// Status line and ticker effect after the stopwatch switched to `running`.
fn stopwatch_changed(app: &mut App, running: bool) -> Effect {
    if running {
        app.status_message = String::from("Stopwatch running");
        Effect::StartTicker(TickSource::Stopwatch)
    } else {
        app.status_message = format!("Stopwatch stopped at {}", app.stopwatch.format());
        Effect::StopTicker(TickSource::Stopwatch)
    }
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::ToggleStopwatch => {
            let running = app.stopwatch.toggle();
            stopwatch_changed(app, running)
        }
        Action::StartStopwatch => {
            if app.stopwatch.start() {
                stopwatch_changed(app, true)
            } else {
                Effect::None
            }
        }
        Action::StopStopwatch => {
            if app.stopwatch.stop() {
                stopwatch_changed(app, false)
            } else {
                Effect::None
            }
        }
        Action::ResetStopwatch => {
            let was_running = app.stopwatch.is_running();
            app.stopwatch.reset();
            app.status_message = String::from("Stopwatch reset");
            if was_running {
                Effect::StopTicker(TickSource::Stopwatch)
            } else {
                Effect::None
            }
        }
        Action::StartCountdown {
            hours,
            minutes,
            seconds,
        } => {
            app.countdown.configure_from_text(&hours, &minutes, &seconds);
            app.countdown.start();
            if app.countdown.settle() {
                // Zero-length run: done before the first tick
                app.status_message = String::from("Time's up!");
                Effect::StopTicker(TickSource::Countdown)
            } else {
                app.status_message = format!("Timer running from {}", app.countdown.format());
                Effect::StartTicker(TickSource::Countdown)
            }
        }
        Action::StopCountdown => {
            if app.countdown.stop() {
                app.status_message = format!("Timer stopped at {}", app.countdown.format());
                Effect::StopTicker(TickSource::Countdown)
            } else {
                Effect::None
            }
        }
        Action::Tick {
            source: TickSource::Stopwatch,
            ..
        } => {
            if !app.stopwatch.tick() {
                debug!("Ignoring stopwatch tick while stopped");
            }
            Effect::None
        }
        Action::Tick {
            source: TickSource::Countdown,
            ..
        } => match app.countdown.tick() {
            TickOutcome::Finished => {
                app.status_message = String::from("Time's up!");
                Effect::StopTicker(TickSource::Countdown)
            }
            TickOutcome::Advanced => Effect::None,
            TickOutcome::Ignored => {
                debug!("Ignoring countdown tick while not running");
                Effect::None
            }
        },
        Action::ToggleTheme => {
            let theme = app.theme().toggled();
            update(app, Action::SetTheme(theme))
        }
        Action::SetTheme(theme) => {
            app.set_theme(theme);
            app.status_message = format!("Theme: {}", theme.label());
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(source: TickSource) -> Action {
        Action::Tick {
            source,
            generation: 1,
        }
    }

    fn start_countdown(h: &str, m: &str, s: &str) -> Action {
        Action::StartCountdown {
            hours: h.to_string(),
            minutes: m.to_string(),
            seconds: s.to_string(),
        }
    }

    #[test]
    fn test_toggle_stopwatch_starts_and_stops_ticker() {
        let mut app = App::new(Theme::Light);
        assert_eq!(
            update(&mut app, Action::ToggleStopwatch),
            Effect::StartTicker(TickSource::Stopwatch)
        );
        assert!(app.stopwatch.is_running());
        assert_eq!(app.status_message, "Stopwatch running");
        assert_eq!(
            update(&mut app, Action::ToggleStopwatch),
            Effect::StopTicker(TickSource::Stopwatch)
        );
        assert!(!app.stopwatch.is_running());
        assert_eq!(app.status_message, "Stopwatch stopped at 00:00:00");
    }

    #[test]
    fn test_repeated_start_and_stop_request_nothing() {
        let mut app = App::new(Theme::Light);
        update(&mut app, Action::StartStopwatch);
        assert_eq!(update(&mut app, Action::StartStopwatch), Effect::None);
        update(&mut app, Action::StopStopwatch);
        assert_eq!(update(&mut app, Action::StopStopwatch), Effect::None);
    }

    #[test]
    fn test_stopwatch_ticks_only_while_running() {
        let mut app = App::new(Theme::Light);
        update(&mut app, Action::StartStopwatch);
        for _ in 0..5 {
            update(&mut app, tick(TickSource::Stopwatch));
        }
        assert_eq!(app.stopwatch.elapsed_seconds(), 5);

        update(&mut app, Action::StopStopwatch);
        update(&mut app, tick(TickSource::Stopwatch));
        assert_eq!(app.stopwatch.elapsed_seconds(), 5);
        assert_eq!(app.status_message, "Stopwatch stopped at 00:00:05");
    }

    #[test]
    fn test_reset_running_stopwatch_stops_ticker() {
        let mut app = App::new(Theme::Light);
        update(&mut app, Action::StartStopwatch);
        update(&mut app, tick(TickSource::Stopwatch));
        assert_eq!(
            update(&mut app, Action::ResetStopwatch),
            Effect::StopTicker(TickSource::Stopwatch)
        );
        assert_eq!(app.stopwatch.elapsed_seconds(), 0);
        assert_eq!(update(&mut app, Action::ResetStopwatch), Effect::None);
    }

    #[test]
    fn test_countdown_run_to_completion() {
        let mut app = App::new(Theme::Light);
        assert_eq!(
            update(&mut app, start_countdown("0", "0", "3")),
            Effect::StartTicker(TickSource::Countdown)
        );
        assert_eq!(update(&mut app, tick(TickSource::Countdown)), Effect::None);
        assert_eq!(update(&mut app, tick(TickSource::Countdown)), Effect::None);
        assert_eq!(
            update(&mut app, tick(TickSource::Countdown)),
            Effect::StopTicker(TickSource::Countdown)
        );
        assert!(app.countdown.is_finished());
        assert_eq!(app.status_message, "Time's up!");

        // A straggling tick changes nothing
        assert_eq!(update(&mut app, tick(TickSource::Countdown)), Effect::None);
        assert_eq!(app.countdown.remaining_seconds(), 0);
    }

    #[test]
    fn test_zero_countdown_finishes_without_ticker() {
        let mut app = App::new(Theme::Light);
        assert_eq!(
            update(&mut app, start_countdown("0", "0", "0")),
            Effect::StopTicker(TickSource::Countdown)
        );
        assert!(app.countdown.is_finished());
        assert!(!app.countdown.is_running());
    }

    #[test]
    fn test_garbage_fields_count_as_zero() {
        let mut app = App::new(Theme::Light);
        update(&mut app, start_countdown("x", "1", ""));
        assert_eq!(app.countdown.remaining_seconds(), 60);
        assert_eq!(app.status_message, "Timer running from 00:01:00");
    }

    #[test]
    fn test_stop_countdown() {
        let mut app = App::new(Theme::Light);
        update(&mut app, start_countdown("0", "0", "10"));
        update(&mut app, tick(TickSource::Countdown));
        assert_eq!(
            update(&mut app, Action::StopCountdown),
            Effect::StopTicker(TickSource::Countdown)
        );
        assert!(!app.countdown.is_finished());
        assert_eq!(app.countdown.remaining_seconds(), 9);
        assert_eq!(update(&mut app, Action::StopCountdown), Effect::None);
    }

    #[test]
    fn test_engines_are_independent() {
        let mut app = App::new(Theme::Light);
        update(&mut app, Action::StartStopwatch);
        update(&mut app, start_countdown("0", "0", "5"));
        update(&mut app, tick(TickSource::Stopwatch));
        assert_eq!(app.stopwatch.elapsed_seconds(), 1);
        assert_eq!(app.countdown.remaining_seconds(), 5);
    }

    #[test]
    fn test_toggle_theme() {
        let mut app = App::new(Theme::Light);
        update(&mut app, Action::ToggleTheme);
        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(app.status_message, "Theme: dark");
        update(&mut app, Action::SetTheme(Theme::Light));
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Theme::Light);
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
