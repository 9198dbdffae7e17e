//! Command palette overlay

use std::time::Instant;

use gitguide_app::command_search::CommandSearchState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::theme::{styles, Theme};

use super::{modal_overlay, text};

pub struct SearchOverlay<'a> {
    search: &'a CommandSearchState,
    now: Instant,
    theme: &'a Theme,
}

impl<'a> SearchOverlay<'a> {
    pub fn new(search: &'a CommandSearchState, now: Instant, theme: &'a Theme) -> Self {
        Self { search, now, theme }
    }

    fn input_line(&self) -> Line<'static> {
        let p = &self.theme.palette;
        let mut spans = vec![Span::styled(
            format!(" {} ", self.theme.icons.search()),
            styles::accent(p),
        )];
        if self.search.query.is_empty() {
            spans.push(Span::styled("\u{258f}", styles::accent(p)));
            spans.push(Span::styled("Search commands...", styles::text_muted(p)));
        } else {
            spans.push(Span::styled(self.search.query.clone(), styles::text_primary(p)));
            spans.push(Span::styled("\u{258f}", styles::accent(p)));
        }
        if self.search.is_filter_pending() {
            spans.push(Span::styled("  \u{2026}", styles::text_muted(p)));
        }
        Line::from(spans)
    }

    fn footer(&self) -> Line<'static> {
        let p = &self.theme.palette;
        if let Some(command) = self.search.copied_command(self.now) {
            return Line::from(vec![
                Span::styled(" Copied! ", styles::success(p)),
                Span::styled(command, styles::command(p)),
            ]);
        }
        Line::from(vec![
            Span::styled(" \u{2191}\u{2193}", styles::keybinding(p)),
            Span::styled(" select  ", styles::text_muted(p)),
            Span::styled("Enter", styles::keybinding(p)),
            Span::styled(" copy  ", styles::text_muted(p)),
            Span::styled("Esc", styles::keybinding(p)),
            Span::styled(" close", styles::text_muted(p)),
        ])
    }
}

impl Widget for SearchOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = &self.theme.palette;
        let modal = modal_overlay::centered_rect_percent(80, 80, area);
        modal_overlay::render_shadow(buf, modal, p);
        modal_overlay::clear_area(buf, modal);

        let block = styles::modal_block(p, " Command Search ");
        let inner = block.inner(modal);
        block.render(modal, buf);
        if inner.height < 4 {
            return;
        }

        let [input, divider, results, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.input_line()).render(input, buf);
        Paragraph::new(Line::styled(
            "\u{2500}".repeat(divider.width as usize),
            styles::border_inactive(p),
        ))
        .render(divider, buf);

        if self.search.results().is_empty() {
            Paragraph::new(vec![
                Line::default(),
                Line::styled("  No commands found", styles::text_muted(p)),
            ])
            .render(results, buf);
        } else {
            let width = results.width as usize;
            let items: Vec<ListItem> = self
                .search
                .results()
                .iter()
                .map(|command| {
                    let badge = format!("[{}]", command.category.as_str());
                    let name_width = width.saturating_sub(text::width(&badge) + 3);
                    ListItem::new(vec![
                        Line::from(vec![
                            Span::styled(
                                format!(" {:<w$}", text::truncate(command.name, name_width), w = name_width),
                                styles::heading(p),
                            ),
                            Span::styled(badge, styles::accent_alt(p)),
                        ]),
                        Line::styled(
                            format!("   {}", text::truncate(command.description, width.saturating_sub(3))),
                            styles::text_secondary(p),
                        ),
                        Line::styled(format!("   $ {}", command.command), styles::command(p)),
                    ])
                })
                .collect();

            let list = List::new(items).highlight_style(styles::focused_selected(p));
            let mut list_state = ListState::default().with_selected(Some(self.search.selected()));
            StatefulWidget::render(list, results, buf, &mut list_state);
        }

        Paragraph::new(self.footer()).render(footer, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use std::time::Duration;

    fn search() -> CommandSearchState {
        let mut search = CommandSearchState::new(Duration::from_millis(300), Duration::from_secs(2));
        search.open();
        search
    }

    #[test]
    fn test_lists_all_commands_initially() {
        let theme = Theme::default();
        let search = search();
        let mut term = TestTerminal::wide();
        term.render_widget(SearchOverlay::new(&search, Instant::now(), &theme), term.area());

        assert!(term.buffer_contains("Command Search"));
        assert!(term.buffer_contains("Initialize Repository"));
        assert!(term.buffer_contains("$ git init"));
    }

    #[test]
    fn test_no_results_message() {
        let theme = Theme::default();
        let mut search = search();
        let now = Instant::now();
        search.set_query("zzzz-not-a-command", now);
        let later = now + Duration::from_millis(300);
        search.tick(later);

        let mut term = TestTerminal::new();
        term.render_widget(SearchOverlay::new(&search, later, &theme), term.area());

        assert!(term.buffer_contains("No commands found"));
    }

    #[test]
    fn test_copied_feedback_expires() {
        let theme = Theme::default();
        let mut search = search();
        let now = Instant::now();
        search.mark_copied("git init", now);

        let mut term = TestTerminal::new();
        term.render_widget(SearchOverlay::new(&search, now, &theme), term.area());
        assert!(term.buffer_contains("Copied!"));

        let mut term = TestTerminal::new();
        let later = now + Duration::from_secs(3);
        term.render_widget(SearchOverlay::new(&search, later, &theme), term.area());
        assert!(!term.buffer_contains("Copied!"));
    }
}
