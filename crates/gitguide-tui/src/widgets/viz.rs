//! Advanced visualization tab: preset selector, interactive node graph,
//! node details and the related commands

use gitguide_app::diagram_state::DiagramState;
use gitguide_core::{DiagramPreset, GuideTab};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{styles, Theme};

use super::diagram::{graph_size, NodeGraph};

pub struct VizPage<'a> {
    diagram: &'a DiagramState,
    scroll: u16,
    theme: &'a Theme,
}

impl<'a> VizPage<'a> {
    pub fn new(diagram: &'a DiagramState, scroll: u16, theme: &'a Theme) -> Self {
        Self {
            diagram,
            scroll,
            theme,
        }
    }

    fn preset_selector(&self) -> Line<'static> {
        let p = &self.theme.palette;
        let mut spans = vec![Span::styled("[ ", styles::keybinding(p))];
        for (i, preset) in DiagramPreset::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if *preset == self.diagram.preset {
                styles::focused_selected(p)
            } else {
                styles::text_secondary(p)
            };
            spans.push(Span::styled(format!(" {} ", preset.title()), style));
        }
        spans.push(Span::styled(" ]", styles::keybinding(p)));
        Line::from(spans)
    }

    fn details(&self) -> Vec<Line<'static>> {
        let p = &self.theme.palette;
        let mut lines = Vec::new();

        match self.diagram.active_node() {
            Some(node) => lines.push(Line::from(vec![
                Span::styled(format!("{}: ", node.label), styles::accent_bold(p)),
                Span::styled(node.info, styles::text_primary(p)),
            ])),
            None => lines.push(Line::styled(
                "Move with \u{2190}/\u{2192} and press Enter to learn about a node.",
                styles::text_muted(p),
            )),
        }

        lines.push(Line::default());
        lines.push(Line::styled("Commands", styles::accent_bold(p)));
        for (command, effect) in self.diagram.preset.commands() {
            let command_style = if *command == "Warning" {
                styles::danger(p)
            } else {
                styles::command(p)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<22}", command), command_style),
                Span::styled(*effect, styles::text_secondary(p)),
            ]));
        }
        lines
    }
}

impl Widget for VizPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = &self.theme.palette;
        let block = styles::glass_block(p, true).title(Span::styled(
            format!(" {} ", GuideTab::AdvancedViz.heading()),
            styles::heading(p),
        ));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let (_, graph_height) = graph_size(self.diagram.preset);
        let [selector, intro, graph, details] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(graph_height + 1),
            Constraint::Min(1),
        ])
        .areas(inner);

        Paragraph::new(self.preset_selector()).render(selector, buf);
        Paragraph::new(vec![
            Line::default(),
            Line::styled(self.diagram.preset.intro(), styles::text_secondary(p)),
        ])
        .wrap(Wrap { trim: true })
        .render(intro, buf);
        NodeGraph::new(self.diagram, self.theme).render(graph, buf);
        Paragraph::new(self.details())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(details, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_viz_page_lists_presets_and_hint() {
        let theme = Theme::default();
        let diagram = DiagramState::default();
        let mut term = TestTerminal::new();
        term.render_widget(VizPage::new(&diagram, 0, &theme), Rect::new(0, 0, 80, 19));

        assert!(term.buffer_contains("Git Workflow"));
        assert!(term.buffer_contains("Rebasing"));
        assert!(term.buffer_contains("press Enter to learn"));
        assert!(term.buffer_contains("Working → Staging"));
    }

    #[test]
    fn test_selected_node_shows_info() {
        let theme = Theme::default();
        let mut diagram = DiagramState::default();
        diagram.toggle_selected();
        let mut term = TestTerminal::new();
        term.render_widget(VizPage::new(&diagram, 0, &theme), Rect::new(0, 0, 80, 19));

        assert!(term.buffer_contains("Working Directory: where you edit"));
    }
}
