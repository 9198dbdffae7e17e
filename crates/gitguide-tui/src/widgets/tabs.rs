//! Guide tab bar

use gitguide_core::GuideTab;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Theme};

use super::text;

/// Labels used when the full names don't fit
fn short_label(tab: &GuideTab) -> &'static str {
    match tab {
        GuideTab::Introduction => "Intro",
        GuideTab::Basic => "Basic",
        GuideTab::Branching => "Branch",
        GuideTab::Remote => "Remote",
        GuideTab::Advanced => "Adv",
        GuideTab::Faq => "FAQ",
        GuideTab::AdvancedViz => "Viz",
    }
}

pub struct GuideTabs<'a> {
    selected: GuideTab,
    theme: &'a Theme,
}

impl<'a> GuideTabs<'a> {
    pub fn new(selected: GuideTab, theme: &'a Theme) -> Self {
        Self { selected, theme }
    }

    fn spans(&self, label: fn(&GuideTab) -> &'static str) -> Vec<Span<'static>> {
        let p = &self.theme.palette;
        let mut spans = vec![Span::raw(" ")];
        for (i, tab) in GuideTab::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" \u{2502} ", styles::border_inactive(p)));
            }
            spans.push(Span::styled(format!("{} ", i + 1), styles::keybinding(p)));
            let style = if *tab == self.selected {
                styles::focused_selected(p)
            } else {
                styles::text_secondary(p)
            };
            spans.push(Span::styled(format!(" {} ", label(tab)), style));
        }
        spans
    }
}

impl Widget for GuideTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let full = self.spans(GuideTab::label);
        let full_width: usize = full.iter().map(|s| text::width(&s.content)).sum();
        let spans = if full_width <= area.width as usize {
            full
        } else {
            self.spans(short_label)
        };
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_narrow_terminal_uses_short_labels() {
        let theme = Theme::default();
        let mut term = TestTerminal::new();
        term.render_widget(GuideTabs::new(GuideTab::Basic, &theme), Rect::new(0, 0, 80, 1));

        assert!(term.line_contains(0, "Intro"));
        assert!(term.line_contains(0, "Viz"));
        assert!(!term.line_contains(0, "Basic Commands"));
    }

    #[test]
    fn test_wide_terminal_uses_full_labels() {
        let theme = Theme::default();
        let mut term = TestTerminal::wide();
        term.render_widget(GuideTabs::new(GuideTab::Faq, &theme), Rect::new(0, 0, 120, 1));

        assert!(term.line_contains(0, "Basic Commands"));
        assert!(term.line_contains(0, "Advanced Viz"));
    }
}
