use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Block;

use crate::Screen;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{SettingsScreen, StatusBar, StopwatchScreen, TabBar, TimerScreen};
use crate::tui::palette::Palette;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(3), Min(0), Length(1)]);
    let [tab_area, main_area, status_area] = layout.areas(frame.area());

    // One palette per frame, passed down explicitly
    let palette = Palette::for_theme(app.theme());
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    TabBar::new(tui.screen, palette).render(frame, tab_area);

    match tui.screen {
        Screen::Stopwatch => {
            StopwatchScreen::new(&app.stopwatch, palette).render(frame, main_area);
        }
        Screen::Timer => {
            TimerScreen::new(&tui.timer_form, &app.countdown, palette).render(frame, main_area);
        }
        Screen::Settings => {
            SettingsScreen::new(app.theme(), palette).render(frame, main_area);
        }
    }

    StatusBar::new(app.status_message.clone(), tui.screen, palette).render(frame, status_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ResolvedConfig;
    use crate::core::theme::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &TuiState) -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                draw_ui(f, app, tui);
            })
            .unwrap();
        terminal
    }

    fn text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_each_screen() {
        let app = App::new(Theme::Light);
        let mut tui = TuiState::new(&ResolvedConfig::default());

        tui.screen = Screen::Stopwatch;
        assert!(text(&render(&app, &tui)).contains("[ Start ]"));

        tui.screen = Screen::Timer;
        assert!(text(&render(&app, &tui)).contains("[ Start Timer ]"));

        tui.screen = Screen::Settings;
        assert!(text(&render(&app, &tui)).contains("Theme"));
    }

    #[test]
    fn test_theme_reaches_every_screen() {
        let app = App::new(Theme::Dark);
        let tui = TuiState::new(&ResolvedConfig::default());
        let terminal = render(&app, &tui);
        let buffer = terminal.backend().buffer();
        // Bottom-left corner belongs to the status bar, middle to the screen
        assert_eq!(buffer[(0, 23)].bg, Palette::DARK.background);
        assert_eq!(buffer[(1, 12)].bg, Palette::DARK.background);
    }

    #[test]
    fn test_status_message_is_shown() {
        let mut app = App::new(Theme::Light);
        app.status_message = "Stopwatch running".to_string();
        let tui = TuiState::new(&ResolvedConfig::default());
        assert!(text(&render(&app, &tui)).contains("Stopwatch running"));
    }
}
