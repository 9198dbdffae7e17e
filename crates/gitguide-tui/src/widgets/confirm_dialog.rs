//! Confirmation dialog widget (reset progress)

use gitguide_app::confirm_dialog::ConfirmDialogState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{styles, Theme};

use super::modal_overlay;

const MODAL_WIDTH: u16 = 50;
const MODAL_HEIGHT: u16 = 9;

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
    theme: &'a Theme,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn buttons(&self) -> Line<'static> {
        let p = &self.theme.palette;
        let mut spans = Vec::new();
        for (i, (label, _)) in self.state.options.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            let style = if i == self.state.selected {
                styles::focused_selected(p)
            } else {
                styles::text_secondary(p)
            };
            spans.push(Span::styled(format!(" {} ", label), style));
        }
        Line::from(spans)
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = &self.theme.palette;
        let modal_area = modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        modal_overlay::render_shadow(buf, modal_area, p);
        modal_overlay::clear_area(buf, modal_area);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(p, &title)
            .title_alignment(Alignment::Center)
            .border_style(styles::danger(p));
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let [_, message, _, buttons, hint] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(styles::warning(p))
            .render(message, buf);

        Paragraph::new(self.buttons())
            .alignment(Alignment::Center)
            .render(buttons, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("y", styles::keybinding(p)),
            Span::styled(" yes  ", styles::text_muted(p)),
            Span::styled("n", styles::keybinding(p)),
            Span::styled(" no", styles::text_muted(p)),
        ]))
        .alignment(Alignment::Center)
        .render(hint, buf);
    }
}
