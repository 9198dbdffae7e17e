//! Header bar: app title, active theme and overall progress

use gitguide_core::content::{APP_SUBTITLE, APP_TITLE};
use gitguide_core::{ResolvedTheme, ThemeMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Theme};

use super::text;

const BAR_WIDTH: usize = 10;

pub struct MainHeader<'a> {
    percentage: u8,
    theme_mode: ThemeMode,
    resolved: ResolvedTheme,
    theme: &'a Theme,
}

impl<'a> MainHeader<'a> {
    pub fn new(percentage: u8, theme_mode: ThemeMode, resolved: ResolvedTheme, theme: &'a Theme) -> Self {
        Self {
            percentage,
            theme_mode,
            resolved,
            theme,
        }
    }

    fn theme_label(&self) -> String {
        match self.theme_mode {
            ThemeMode::System => format!("System ({})", self.resolved.as_str()),
            mode => mode.label().to_string(),
        }
    }

    fn progress_bar(&self) -> String {
        let filled = (self.percentage as usize * BAR_WIDTH + 50) / 100;
        let (full, empty) = if self.theme.icons.is_ascii() {
            ("#", "-")
        } else {
            ("\u{2588}", "\u{2591}")
        };
        format!("{}{}", full.repeat(filled), empty.repeat(BAR_WIDTH - filled))
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = &self.theme.palette;
        let block = styles::glass_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let right = vec![
            Span::styled("Theme ", styles::text_muted(p)),
            Span::styled(self.theme_label(), styles::text_secondary(p)),
            Span::raw("  "),
            Span::styled(self.progress_bar(), styles::success(p)),
            Span::styled(format!(" {}%", self.percentage), styles::accent_bold(p)),
            Span::raw(" "),
        ];
        let right_width: usize = right.iter().map(|s| text::width(&s.content)).sum();

        let mut left = vec![
            Span::raw(" "),
            Span::styled(self.theme.icons.logo(), styles::accent_alt(p)),
            Span::raw(" "),
            Span::styled(APP_TITLE, styles::heading(p)),
        ];
        let subtitle = format!("  {}", APP_SUBTITLE);
        let used = 3 + text::width(APP_TITLE) + right_width;
        if used + text::width(&subtitle) <= inner.width as usize {
            left.push(Span::styled(subtitle, styles::text_muted(p)));
        }

        let left_width: usize = left.iter().map(|s| text::width(&s.content)).sum();
        let gap = (inner.width as usize).saturating_sub(left_width + right_width);

        let mut spans = left;
        spans.push(Span::raw(" ".repeat(gap)));
        spans.extend(right);

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_title_and_percentage() {
        let theme = Theme::default();
        let mut term = TestTerminal::new();
        let header = MainHeader::new(45, ThemeMode::Dark, ResolvedTheme::Dark, &theme);
        term.render_widget(header, Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains("Git & GitHub"));
        assert!(term.buffer_contains("45%"));
        assert!(term.buffer_contains("Theme Dark"));
    }

    #[test]
    fn test_header_system_theme_shows_resolution() {
        let theme = Theme::default();
        let mut term = TestTerminal::wide();
        let header = MainHeader::new(0, ThemeMode::System, ResolvedTheme::Light, &theme);
        term.render_widget(header, Rect::new(0, 0, 120, 3));

        assert!(term.buffer_contains("System (light)"));
        assert!(term.buffer_contains("A Visual Guide for Beginners"));
    }

    #[test]
    fn test_progress_bar_rounds_to_cells() {
        let theme = Theme::default();
        let header = MainHeader::new(45, ThemeMode::Dark, ResolvedTheme::Dark, &theme);
        assert_eq!(header.progress_bar().chars().filter(|c| *c == '\u{2588}').count(), 5);

        let full = MainHeader::new(100, ThemeMode::Dark, ResolvedTheme::Dark, &theme);
        assert_eq!(full.progress_bar(), "\u{2588}".repeat(BAR_WIDTH));
    }
}
