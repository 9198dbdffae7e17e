//! Bottom status bar with keybinding hints for the current screen

use gitguide_app::{AppState, UiMode};
use gitguide_core::GuideTab;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Theme};

pub struct StatusBar<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.state.ui_mode {
            UiMode::Search => vec![("↑↓", "select"), ("Enter", "copy"), ("Esc", "close")],
            UiMode::Settings => vec![
                ("↑↓", "item"),
                ("←→", "change"),
                ("t", "theme"),
                ("Esc", "close"),
            ],
            UiMode::Progress => vec![
                ("↑↓", "item"),
                ("Space", "toggle"),
                ("r", "reset"),
                ("Esc", "close"),
            ],
            UiMode::ConfirmDialog => vec![("y", "yes"), ("n", "no")],
            UiMode::Normal => self.normal_hints(),
        }
    }

    fn normal_hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = vec![("Tab", "section"), ("^K", "search")];
        match self.state.guide.tab {
            GuideTab::Faq => hints.push(("Enter", "expand")),
            GuideTab::AdvancedViz => {
                hints.push(("[ ]", "diagram"));
                hints.push(("Enter", "select"));
            }
            GuideTab::Introduction => hints.push(("↑↓", "scroll")),
            _ => {
                hints.push(("↑↓", "card"));
                hints.push(("e", "examples"));
            }
        }
        if self.state.guide.timeline.is_some() {
            hints.push(("m", "mode"));
        }
        hints.extend([("p", "progress"), ("s", "settings"), ("q", "quit")]);
        hints
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let p = &self.theme.palette;

        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled(key, styles::keybinding(p)));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted(p)));
        }
        if !self.state.store.is_available() {
            spans.push(Span::styled("not saving", styles::warning(p)));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
