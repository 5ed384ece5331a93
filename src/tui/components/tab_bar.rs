//! # TabBar Component
//!
//! Top navigation bar listing every screen, with the active one highlighted.
//!
//! Stateless: it receives the active screen and the palette as props.
//! Switching screens is handled by the event loop (`←`/`→`), not here.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Tabs};

use crate::Screen;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub struct TabBar {
    pub active: Screen,
    pub palette: Palette,
}

impl TabBar {
    pub fn new(active: Screen, palette: Palette) -> Self {
        Self { active, palette }
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles = Screen::ALL.iter().map(|s| s.title());
        let tabs = Tabs::new(titles)
            .block(
                Block::bordered()
                    .title(" Tempo ")
                    .border_style(self.palette.dim()),
            )
            .style(self.palette.base())
            .highlight_style(self.palette.highlight())
            .select(self.active.index());

        frame.render_widget(tabs, area);
    }
}
