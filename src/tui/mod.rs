//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//!   keyboard ──poll──▶ route_event() ──Action──┐
//!                                               ▼
//!   Tickers ──mpsc──▶ accepts()? ──Action──▶ update(&mut App) ──Effect──▶ apply_effect()
//!      ▲                                                                      │
//!      └──────────────────── start / stop tick sources ◀──────────────────────┘
//! ```
//!
//! Redraws happen only when an input event or tick arrived. Input is polled
//! with a 100ms timeout so ticks are picked up promptly.
//!
//! Every exit path (quit, I/O error) cancels all tick sources and restores
//! the terminal before returning.

mod component;
pub mod components;
pub mod event;
pub mod palette;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::execute;

use crate::Screen;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::ticker::{TICK_PERIOD, Tickers};
use crate::tui::component::EventHandler;
use crate::tui::components::{TimerForm, TimerFormEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// TUI-specific presentation state (not part of core state)
pub struct TuiState {
    pub screen: Screen,
    pub timer_form: TimerForm,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            screen: config.start_screen,
            timer_form: TimerForm::new(
                config.timer_hours.clone(),
                config.timer_minutes.clone(),
                config.timer_seconds.clone(),
            ),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Non-blinking: avoids blink timer reset from continuous redraws
        execute!(stdout(), SetCursorStyle::SteadyBlock)?;
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), SetCursorStyle::DefaultUserShape);
    }
}

/// Translate a terminal event into a core action, updating TUI-only state
/// (active screen, form buffers) along the way.
pub fn route_event(tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit => return Some(Action::Quit),
        TuiEvent::ToggleTheme => return Some(Action::ToggleTheme),
        TuiEvent::NextScreen => {
            tui.screen = tui.screen.next();
            return None;
        }
        TuiEvent::PrevScreen => {
            tui.screen = tui.screen.prev();
            return None;
        }
        TuiEvent::Resize => return None,
        _ => {}
    }

    match tui.screen {
        Screen::Stopwatch => match event {
            TuiEvent::InputChar(' ') | TuiEvent::Submit => Some(Action::ToggleStopwatch),
            TuiEvent::InputChar('r') | TuiEvent::InputChar('R') => Some(Action::ResetStopwatch),
            _ => None,
        },
        Screen::Timer => match tui.timer_form.handle_event(&event)? {
            TimerFormEvent::Start {
                hours,
                minutes,
                seconds,
            } => Some(Action::StartCountdown {
                hours,
                minutes,
                seconds,
            }),
            TimerFormEvent::Stop => Some(Action::StopCountdown),
        },
        Screen::Settings => match event {
            TuiEvent::InputChar(' ') | TuiEvent::Submit => Some(Action::ToggleTheme),
            _ => None,
        },
    }
}

/// Carry out an effect. Returns `true` when the app should quit.
fn apply_effect(effect: Effect, tickers: &mut Tickers) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::StartTicker(source) => {
            tickers.start(source);
            false
        }
        Effect::StopTicker(source) => {
            tickers.stop(source);
            false
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&config);

    // Channel for tick actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut tickers = Tickers::new(TICK_PERIOD, tx);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| {
        event_loop(&mut terminal, &mut app, &mut tui, &mut tickers, &rx)
    });

    tickers.shutdown();
    ratatui::restore();
    info!("Tempo exiting");
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    tickers: &mut Tickers,
    rx: &mpsc::Receiver<Action>,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(POLL_TIMEOUT);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(tui, event) {
                debug!("Input action: {:?}", action);
                if apply_effect(update(app, action), tickers) {
                    return Ok(());
                }
            }
        }

        // Handle tick actions from the tickers
        while let Ok(action) = rx.try_recv() {
            if let Action::Tick { source, generation } = action
                && !tickers.accepts(source, generation)
            {
                debug!("Dropping stale {:?} tick #{}", source, generation);
                continue;
            }
            needs_redraw = true;
            if apply_effect(update(app, action), tickers) {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::Theme;
    use crate::core::ticker::TickSource;

    fn tui_on(screen: Screen) -> TuiState {
        let mut tui = TuiState::new(&ResolvedConfig::default());
        tui.screen = screen;
        tui
    }

    #[test]
    fn test_tui_state_from_config() {
        let config = ResolvedConfig {
            theme: Theme::Dark,
            start_screen: Screen::Timer,
            timer_hours: "1".to_string(),
            timer_minutes: "2".to_string(),
            timer_seconds: "3".to_string(),
        };
        let tui = TuiState::new(&config);
        assert_eq!(tui.screen, Screen::Timer);
        assert_eq!(tui.timer_form.hours, "1");
        assert_eq!(tui.timer_form.seconds, "3");
    }

    #[test]
    fn test_global_events() {
        let mut tui = tui_on(Screen::Stopwatch);
        assert_eq!(route_event(&mut tui, TuiEvent::Quit), Some(Action::Quit));
        assert_eq!(route_event(&mut tui, TuiEvent::ToggleTheme), Some(Action::ToggleTheme));
        assert_eq!(route_event(&mut tui, TuiEvent::NextScreen), None);
        assert_eq!(tui.screen, Screen::Timer);
        route_event(&mut tui, TuiEvent::PrevScreen);
        route_event(&mut tui, TuiEvent::PrevScreen);
        assert_eq!(tui.screen, Screen::Settings);
    }

    #[test]
    fn test_stopwatch_screen_keys() {
        let mut tui = tui_on(Screen::Stopwatch);
        assert_eq!(
            route_event(&mut tui, TuiEvent::InputChar(' ')),
            Some(Action::ToggleStopwatch)
        );
        assert_eq!(route_event(&mut tui, TuiEvent::Submit), Some(Action::ToggleStopwatch));
        assert_eq!(
            route_event(&mut tui, TuiEvent::InputChar('r')),
            Some(Action::ResetStopwatch)
        );
        assert_eq!(route_event(&mut tui, TuiEvent::InputChar('x')), None);
    }

    #[test]
    fn test_timer_screen_routes_through_form() {
        let mut tui = tui_on(Screen::Timer);
        route_event(&mut tui, TuiEvent::Backspace);
        route_event(&mut tui, TuiEvent::InputChar('2'));
        assert_eq!(
            route_event(&mut tui, TuiEvent::Submit),
            Some(Action::StartCountdown {
                hours: "2".to_string(),
                minutes: "0".to_string(),
                seconds: "0".to_string(),
            })
        );
        assert_eq!(route_event(&mut tui, TuiEvent::StopTimer), Some(Action::StopCountdown));
    }

    #[test]
    fn test_typing_r_on_timer_screen_is_text() {
        let mut tui = tui_on(Screen::Timer);
        assert_eq!(route_event(&mut tui, TuiEvent::InputChar('r')), None);
        assert_eq!(tui.timer_form.hours, "0r");
    }

    #[test]
    fn test_settings_screen_toggles_theme() {
        let mut tui = tui_on(Screen::Settings);
        assert_eq!(
            route_event(&mut tui, TuiEvent::InputChar(' ')),
            Some(Action::ToggleTheme)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_apply_effect_drives_tickers() {
        let (tx, _rx) = mpsc::channel();
        let mut tickers = Tickers::new(TICK_PERIOD, tx);

        assert!(!apply_effect(Effect::StartTicker(TickSource::Stopwatch), &mut tickers));
        assert!(tickers.is_ticking(TickSource::Stopwatch));
        assert!(!apply_effect(Effect::StopTicker(TickSource::Stopwatch), &mut tickers));
        assert!(!tickers.is_ticking(TickSource::Stopwatch));
        assert!(!apply_effect(Effect::None, &mut tickers));
        assert!(apply_effect(Effect::Quit, &mut tickers));
    }
}
