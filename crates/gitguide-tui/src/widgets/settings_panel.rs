//! Animation settings overlay
//!
//! Enable toggle, speed and complexity radios. While the system asks for
//! reduced motion the toggle is locked and a banner explains why.

use gitguide_app::state::SettingsItem;
use gitguide_app::AppState;
use gitguide_core::{AnimationComplexity, AnimationSpeed};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{styles, Theme};

use super::modal_overlay;

const PANEL_WIDTH: u16 = 64;
const PANEL_HEIGHT: u16 = 16;

pub struct SettingsPanel<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> SettingsPanel<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn radio<T: PartialEq + Copy>(&self, options: &[T], current: T, label: fn(&T) -> &'static str) -> Vec<Span<'static>> {
        let p = &self.theme.palette;
        let mut spans = Vec::new();
        for option in options {
            let selected = *option == current;
            let (mark, style) = if selected {
                ("(\u{2022})", styles::accent_bold(p))
            } else {
                ("( )", styles::text_secondary(p))
            };
            spans.push(Span::styled(format!(" {} {} ", mark, label(option)), style));
        }
        spans
    }

    fn row(&self, item: SettingsItem) -> Line<'static> {
        let p = &self.theme.palette;
        let icons = &self.theme.icons;
        let focused = self.state.selected_settings_item() == item;
        let label_style = if focused {
            styles::focused_selected(p)
        } else {
            styles::heading(p)
        };

        let mut spans = vec![Span::styled(format!(" {:<22}", item.label()), label_style)];
        match item {
            SettingsItem::Enabled => {
                let locked = self.state.environment.reduced_motion;
                let on = self.state.animations_enabled && !locked;
                let mark = if on { icons.checked() } else { icons.unchecked() };
                spans.push(Span::styled(format!(" {} ", mark), styles::accent(p)));
                spans.push(Span::styled(
                    if on { "On" } else { "Off" },
                    styles::text_primary(p),
                ));
                if locked {
                    spans.push(Span::styled("  (locked)", styles::text_muted(p)));
                }
            }
            SettingsItem::Speed => spans.extend(self.radio(
                &AnimationSpeed::ALL,
                self.state.animation_speed,
                AnimationSpeed::label,
            )),
            SettingsItem::Complexity => spans.extend(self.radio(
                &AnimationComplexity::ALL,
                self.state.animation_complexity,
                AnimationComplexity::label,
            )),
        }
        Line::from(spans)
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let p = &self.theme.palette;
        let mut lines = Vec::new();

        if self.state.environment.reduced_motion {
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", self.theme.icons.warning()), styles::warning(p)),
                Span::styled(
                    "Your system prefers reduced motion. Animations stay off until that preference changes.",
                    styles::warning(p),
                ),
            ]));
            lines.push(Line::default());
        }

        for item in SettingsItem::ALL {
            lines.push(self.row(item));
            lines.push(Line::default());
        }

        lines.push(Line::from(vec![
            Span::styled(" Theme ", styles::heading(p)),
            Span::styled(self.state.theme_mode.label(), styles::text_secondary(p)),
            Span::styled("  (t to change)", styles::text_muted(p)),
        ]));
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(" \u{2191}\u{2193}", styles::keybinding(p)),
            Span::styled(" choose  ", styles::text_muted(p)),
            Span::styled("\u{2190}\u{2192}", styles::keybinding(p)),
            Span::styled(" change  ", styles::text_muted(p)),
            Span::styled("Esc", styles::keybinding(p)),
            Span::styled(" close", styles::text_muted(p)),
        ]));
        lines
    }
}

impl Widget for SettingsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = &self.theme.palette;
        let modal = modal_overlay::centered_rect(PANEL_WIDTH, PANEL_HEIGHT, area);
        modal_overlay::render_shadow(buf, modal, p);
        modal_overlay::clear_area(buf, modal);

        let block = styles::modal_block(p, " Animation Settings ");
        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(modal, buf);
    }
}
