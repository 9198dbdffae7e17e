//! Semantic style builders.
//!
//! Every builder takes the active [`Palette`] so the same widget code
//! renders the dark, light and monochrome themes.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn heading(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_primary)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive(p: &Palette) -> Style {
    Style::default().fg(p.border_dim)
}

pub fn border_active(p: &Palette) -> Style {
    Style::default().fg(p.border_active)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

pub fn accent_alt(p: &Palette) -> Style {
    Style::default().fg(p.accent_alt)
}

// --- Status styles ---
pub fn success(p: &Palette) -> Style {
    Style::default().fg(p.green)
}

pub fn warning(p: &Palette) -> Style {
    Style::default().fg(p.yellow)
}

pub fn danger(p: &Palette) -> Style {
    Style::default().fg(p.red)
}

/// Shell commands in scripts and the palette
pub fn command(p: &Palette) -> Style {
    Style::default().fg(p.green)
}

// --- Keybinding hint style ---
pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.yellow).add_modifier(Modifier::BOLD)
}

// --- Selection styles ---

/// Focused+selected rows. Monochrome terminals get reverse video instead.
pub fn focused_selected(p: &Palette) -> Style {
    if p.is_monochrome() {
        return Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }
    Style::default()
        .fg(p.contrast_fg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active(p)
        } else {
            border_inactive(p)
        })
        .style(Style::default().bg(p.card_bg))
}

pub fn modal_block<'a>(p: &Palette, title: &'a str) -> Block<'a> {
    Block::default()
        .title(title)
        .title_style(accent_bold(p))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active(p))
        .style(Style::default().bg(p.popup_bg).fg(p.text_primary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_selected_uses_accent_background() {
        let p = Palette::dark();
        assert_eq!(focused_selected(&p).bg, Some(p.accent));
    }

    #[test]
    fn test_focused_selected_monochrome_reverses() {
        let style = focused_selected(&Palette::monochrome());
        assert!(style.add_modifier.contains(Modifier::REVERSED));
    }
}
