//! Introduction tab: what Git and GitHub are, key concepts, quick reference
//! and the workflow diagram

use gitguide_core::content::{INTRO_PARAGRAPHS, KEY_CONCEPTS, PRO_TIP, QUICK_REFERENCE, WELCOME, WHY_GIT};
use gitguide_core::diagram::WORKFLOW_AREAS;
use gitguide_core::{DiagramKind, GuideTab};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{styles, Theme};

use super::diagram;

pub struct IntroPage<'a> {
    scroll: u16,
    theme: &'a Theme,
}

impl<'a> IntroPage<'a> {
    pub fn new(scroll: u16, theme: &'a Theme) -> Self {
        Self { scroll, theme }
    }

    fn section(&self, lines: &mut Vec<Line<'static>>, title: &'static str) {
        lines.push(Line::default());
        lines.push(Line::styled(title, styles::accent_bold(&self.theme.palette)));
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let p = &self.theme.palette;
        let mut lines = vec![
            Line::styled(GuideTab::Introduction.description(), styles::text_muted(p)),
            Line::default(),
            Line::styled(WELCOME, styles::text_primary(p)),
        ];

        for (heading, body) in INTRO_PARAGRAPHS {
            self.section(&mut lines, heading);
            lines.push(Line::styled(*body, styles::text_primary(p)));
        }

        self.section(&mut lines, "Key Concepts");
        for (term, definition) in KEY_CONCEPTS {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}: ", term), styles::heading(p)),
                Span::styled(*definition, styles::text_secondary(p)),
            ]));
        }

        self.section(&mut lines, "Why use Git?");
        for (term, definition) in WHY_GIT {
            lines.push(Line::from(vec![
                Span::styled("  \u{2022} ", styles::accent_alt(p)),
                Span::styled(format!("{}: ", term), styles::heading(p)),
                Span::styled(*definition, styles::text_secondary(p)),
            ]));
        }

        self.section(&mut lines, "Pro Tip");
        lines.push(Line::styled(PRO_TIP, styles::warning(p)));

        self.section(&mut lines, "Quick Reference");
        for (group, commands) in QUICK_REFERENCE {
            lines.push(Line::styled(format!("  {}", group), styles::heading(p)));
            for (command, meaning) in *commands {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {:<24}", command), styles::command(p)),
                    Span::styled(*meaning, styles::text_secondary(p)),
                ]));
            }
        }

        self.section(&mut lines, "The Git Workflow");
        lines.extend(diagram::sketch_lines(DiagramKind::Workflow, self.theme));
        for (area, description, commands) in WORKFLOW_AREAS {
            lines.push(Line::default());
            lines.push(Line::styled(format!("  {}", area), styles::heading(p)));
            lines.push(Line::styled(format!("  {}", description), styles::text_secondary(p)));
            lines.push(Line::from(vec![
                Span::styled("  Commands: ", styles::text_muted(p)),
                Span::styled(*commands, styles::command(p)),
            ]));
        }
        lines
    }
}

impl Widget for IntroPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = &self.theme.palette;
        let block = styles::glass_block(p, true).title(Span::styled(
            format!(" {} ", GuideTab::Introduction.heading()),
            styles::heading(p),
        ));
        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_intro_starts_with_heading() {
        let theme = Theme::default();
        let mut term = TestTerminal::new();
        term.render_widget(IntroPage::new(0, &theme), Rect::new(0, 0, 80, 20));

        assert!(term.buffer_contains("Introduction to Git & GitHub"));
        assert!(term.buffer_contains("What is Git?"));
    }

    #[test]
    fn test_scrolling_moves_content() {
        let theme = Theme::default();
        let mut term = TestTerminal::new();
        term.render_widget(IntroPage::new(10, &theme), Rect::new(0, 0, 80, 20));

        assert!(!term.buffer_contains("What is Git?"));
    }
}
