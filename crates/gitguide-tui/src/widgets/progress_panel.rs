//! Progress checklist overlay

use gitguide_app::progress::ProgressTracker;
use gitguide_core::{total_subsections, GUIDE_SECTIONS};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Gauge, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::theme::{styles, Theme};

use super::modal_overlay;

pub struct ProgressPanel<'a> {
    progress: &'a ProgressTracker,
    cursor: usize,
    theme: &'a Theme,
}

impl<'a> ProgressPanel<'a> {
    pub fn new(progress: &'a ProgressTracker, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            progress,
            cursor,
            theme,
        }
    }

    /// Checklist rows and the row index of the cursor
    fn items(&self) -> (Vec<ListItem<'static>>, usize) {
        let p = &self.theme.palette;
        let icons = &self.theme.icons;
        let mut items = Vec::new();
        let mut selected_row = 0;
        let mut position = 0;

        for section in GUIDE_SECTIONS {
            let done = self.progress.section_completed(section);
            let total = section.subsections.len();
            let count_style = if done == total {
                styles::success(p)
            } else {
                styles::text_muted(p)
            };
            items.push(ListItem::new(Line::from(vec![
                Span::styled(format!(" {}", section.title), styles::accent_bold(p)),
                Span::styled(format!("  {}/{}", done, total), count_style),
            ])));

            for (index, subsection) in section.subsections.iter().enumerate() {
                if position == self.cursor {
                    selected_row = items.len();
                }
                let completed = self.progress.is_completed(section.id, index);
                let (mark, style) = if completed {
                    (icons.checked(), styles::success(p))
                } else {
                    (icons.unchecked(), styles::text_primary(p))
                };
                items.push(ListItem::new(Line::from(vec![
                    Span::styled(format!("   {} ", mark), style),
                    Span::styled(*subsection, style),
                ])));
                position += 1;
            }
        }
        (items, selected_row)
    }
}

impl Widget for ProgressPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = &self.theme.palette;
        let modal = modal_overlay::centered_rect_percent(70, 90, area);
        modal_overlay::render_shadow(buf, modal, p);
        modal_overlay::clear_area(buf, modal);

        let block = styles::modal_block(p, " Your Progress ");
        let inner = block.inner(modal);
        block.render(modal, buf);
        if inner.height < 4 {
            return;
        }

        let [summary, gauge, list_area, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let percentage = self.progress.percentage();
        Paragraph::new(Line::from(vec![
            Span::styled(format!(" {}% complete", percentage), styles::heading(p)),
            Span::styled(
                format!(
                    "  ({} of {} topics)",
                    self.progress.completed_count(),
                    total_subsections()
                ),
                styles::text_muted(p),
            ),
        ]))
        .render(summary, buf);

        Gauge::default()
            .percent(u16::from(percentage))
            .label("")
            .gauge_style(styles::success(p))
            .render(gauge, buf);

        let (items, selected_row) = self.items();
        let list = List::new(items).highlight_style(styles::focused_selected(p));
        let mut list_state = ListState::default().with_selected(Some(selected_row));
        StatefulWidget::render(list, list_area, buf, &mut list_state);

        Paragraph::new(Line::from(vec![
            Span::styled(" Space", styles::keybinding(p)),
            Span::styled(" toggle  ", styles::text_muted(p)),
            Span::styled("r", styles::keybinding(p)),
            Span::styled(" reset  ", styles::text_muted(p)),
            Span::styled("Esc", styles::keybinding(p)),
            Span::styled(" close", styles::text_muted(p)),
        ]))
        .render(footer, buf);
    }
}
