//! Command cards: the list of cards on a tab and the focused card's details

use gitguide_core::CommandCard;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::theme::{styles, Theme};

use super::{diagram, text};

pub struct CardList<'a> {
    cards: &'static [CommandCard],
    focused: usize,
    theme: &'a Theme,
}

impl<'a> CardList<'a> {
    pub fn new(cards: &'static [CommandCard], focused: usize, theme: &'a Theme) -> Self {
        Self {
            cards,
            focused,
            theme,
        }
    }
}

impl Widget for CardList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = &self.theme.palette;
        let block = styles::glass_block(p, false)
            .title(Span::styled(" Topics ", styles::text_secondary(p)));
        let inner_width = block.inner(area).width as usize;

        let items: Vec<ListItem> = self
            .cards
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let label = format!(" {}. {}", i + 1, card.title);
                let mut spans = vec![Span::raw(text::truncate(&label, inner_width.saturating_sub(2)))];
                if card.animation.is_some() {
                    spans.push(Span::styled(" \u{25b6}", styles::accent_alt(p)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .style(styles::text_primary(p))
            .highlight_style(styles::focused_selected(p));

        let mut list_state = ListState::default().with_selected(Some(self.focused));
        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}

pub struct CardDetail<'a> {
    card: &'static CommandCard,
    examples_open: bool,
    scroll: u16,
    theme: &'a Theme,
}

impl<'a> CardDetail<'a> {
    pub fn new(card: &'static CommandCard, examples_open: bool, scroll: u16, theme: &'a Theme) -> Self {
        Self {
            card,
            examples_open,
            scroll,
            theme,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let p = &self.theme.palette;
        let icons = &self.theme.icons;
        let card = self.card;

        let mut lines = vec![
            Line::styled(card.description, styles::text_secondary(p)),
            Line::default(),
            Line::styled("Command Sequence", styles::accent_bold(p)),
        ];
        for step in card.script {
            let line = if step.is_empty() {
                Line::default()
            } else if step.starts_with('#') {
                Line::styled(format!("  {}", step), styles::text_muted(p))
            } else {
                Line::from(vec![
                    Span::styled("  $ ", styles::text_muted(p)),
                    Span::styled(*step, styles::command(p)),
                ])
            };
            lines.push(line);
        }

        lines.push(Line::default());
        lines.push(Line::styled("What's happening", styles::accent_bold(p)));
        lines.push(Line::styled(card.explanation, styles::text_primary(p)));

        lines.push(Line::default());
        lines.push(Line::styled("Visual", styles::accent_bold(p)));
        lines.extend(diagram::sketch_lines(card.diagram, self.theme));

        if !card.examples.is_empty() {
            lines.push(Line::default());
            if self.examples_open {
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", icons.expanded()), styles::accent(p)),
                    Span::styled("Real-world examples", styles::accent_bold(p)),
                ]));
                for example in card.examples {
                    lines.push(Line::from(vec![
                        Span::styled("  \u{2022} ", styles::accent_alt(p)),
                        Span::styled(*example, styles::text_secondary(p)),
                    ]));
                }
            } else {
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", icons.collapsed()), styles::accent(p)),
                    Span::styled("Real-world examples ", styles::accent_bold(p)),
                    Span::styled("(e to expand)", styles::text_muted(p)),
                ]));
            }
        }
        lines
    }
}

impl Widget for CardDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = &self.theme.palette;
        let block = styles::glass_block(p, true)
            .title(Span::styled(format!(" {} ", self.card.title), styles::heading(p)));

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
