//! Dismissible compatibility notice

use gitguide_app::notice::CompatibilityNotice;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::theme::{styles, Theme};

use super::text;

pub struct NoticeBanner<'a> {
    notice: &'a CompatibilityNotice,
    theme: &'a Theme,
}

impl<'a> NoticeBanner<'a> {
    pub fn new(notice: &'a CompatibilityNotice, theme: &'a Theme) -> Self {
        Self { notice, theme }
    }
}

impl Widget for NoticeBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = &self.theme.palette;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::warning(p))
            .title(Span::styled(" Compatibility ", styles::warning(p)));
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(first) = self.notice.issues.first() else {
            return;
        };

        let more = self.notice.issues.len() - 1;
        let suffix = if more > 0 {
            format!(" (+{} more)", more)
        } else {
            String::new()
        };
        let dismiss = "  x dismiss";
        let available = (inner.width as usize)
            .saturating_sub(text::width(&suffix) + text::width(dismiss) + 3);

        let line = Line::from(vec![
            Span::styled(format!(" {} ", self.theme.icons.warning()), styles::warning(p)),
            Span::styled(text::truncate(first, available), styles::text_primary(p)),
            Span::styled(suffix, styles::text_muted(p)),
            Span::styled(dismiss, styles::keybinding(p)),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_notice_shows_first_issue_and_count() {
        let theme = Theme::default();
        let notice = CompatibilityNotice::new(
            vec![
                "Your system doesn't support saving progress".to_string(),
                "Another issue".to_string(),
            ],
            false,
        );
        let mut term = TestTerminal::new();
        term.render_widget(NoticeBanner::new(&notice, &theme), Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains("saving progress"));
        assert!(term.buffer_contains("(+1 more)"));
        assert!(term.buffer_contains("x dismiss"));
    }
}
