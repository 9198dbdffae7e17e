//! FAQ accordion: one answer open at a time

use gitguide_core::FaqEntry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Theme};

use super::text;

pub struct FaqList<'a> {
    entries: &'static [FaqEntry],
    cursor: usize,
    open: Option<usize>,
    theme: &'a Theme,
}

impl<'a> FaqList<'a> {
    pub fn new(entries: &'static [FaqEntry], cursor: usize, open: Option<usize>, theme: &'a Theme) -> Self {
        Self {
            entries,
            cursor,
            open,
            theme,
        }
    }

    /// Pre-wrapped lines plus the index of the cursor's question line
    fn lines(&self, width: usize) -> (Vec<Line<'static>>, usize) {
        let p = &self.theme.palette;
        let icons = &self.theme.icons;
        let mut lines = Vec::new();
        let mut cursor_line = 0;

        for (i, entry) in self.entries.iter().enumerate() {
            let is_open = self.open == Some(i);
            let marker = if is_open { icons.expanded() } else { icons.collapsed() };
            let style = if i == self.cursor {
                cursor_line = lines.len();
                styles::focused_selected(p)
            } else {
                styles::heading(p)
            };
            let question = format!(" {} {}", marker, entry.question);
            for part in text::wrap(&question, width) {
                lines.push(Line::styled(part, style));
            }

            if is_open {
                for paragraph in entry.answer {
                    if let Some(command) = paragraph.strip_prefix("$ ") {
                        lines.push(Line::from(vec![
                            Span::styled("     $ ", styles::text_muted(p)),
                            Span::styled(command.to_string(), styles::command(p)),
                        ]));
                    } else {
                        for part in text::wrap(paragraph, width.saturating_sub(4)) {
                            lines.push(Line::styled(format!("    {}", part), styles::text_secondary(p)));
                        }
                    }
                }
            }
            lines.push(Line::default());
        }
        (lines, cursor_line)
    }
}

impl Widget for FaqList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = &self.theme.palette;
        let block = styles::glass_block(p, true).title(Span::styled(
            " Frequently Asked Questions ",
            styles::heading(p),
        ));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let (lines, cursor_line) = self.lines(inner.width as usize);
        // Keep the focused question on screen with some context above it
        let height = inner.height as usize;
        let scroll = if cursor_line + 1 > height {
            cursor_line.saturating_sub(height / 3)
        } else {
            0
        };
        Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use gitguide_core::FAQ;

    #[test]
    fn test_collapsed_faq_hides_answers() {
        let theme = Theme::default();
        let mut term = TestTerminal::new();
        term.render_widget(FaqList::new(FAQ, 0, None, &theme), Rect::new(0, 0, 80, 20));

        assert!(term.buffer_contains("What's the difference between Git and GitHub?"));
        assert!(!term.buffer_contains("git reset --soft"));
    }

    #[test]
    fn test_open_item_shows_commands() {
        let theme = Theme::default();
        let mut term = TestTerminal::new();
        term.render_widget(FaqList::new(FAQ, 1, Some(1), &theme), Rect::new(0, 0, 80, 20));

        assert!(term.buffer_contains("$ git reset --soft HEAD~1"));
    }

    #[test]
    fn test_cursor_far_down_stays_visible() {
        let theme = Theme::default();
        let mut term = TestTerminal::new();
        let last = FAQ.len() - 1;
        term.render_widget(
            FaqList::new(FAQ, last, Some(2), &theme),
            Rect::new(0, 0, 80, 8),
        );

        assert!(term.buffer_contains("merge and rebase"));
    }
}
