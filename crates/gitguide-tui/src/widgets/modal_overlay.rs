//! Shared modal overlay utilities.
//!
//! Centering rects, dimming the background and drawing shadows for the
//! search, settings, progress and confirmation overlays.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Clear, Widget};

use crate::theme::Palette;

/// Center a fixed-size rect within an area, clamped to the area.
///
/// ```
/// use ratatui::layout::Rect;
/// use gitguide_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Center a percentage-based rect within an area.
///
/// `width_percent` and `height_percent` should be 0-100.
pub fn centered_rect_percent(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .split(popup_layout[1])[1]
}

/// Dim all cells in the given area so the modal stands out.
pub fn dim_background(buf: &mut Buffer, area: Rect, palette: &Palette) {
    let dim_style = if palette.is_monochrome() {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(palette.text_muted).bg(palette.shadow)
    };

    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Render a 1-cell shadow offset to the right and bottom of a modal rect.
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect, palette: &Palette) {
    let shadow_style = Style::default().fg(palette.shadow).bg(palette.shadow);

    let right_x = modal_rect.x.saturating_add(modal_rect.width);
    let bottom_y = modal_rect.y.saturating_add(modal_rect.height);

    for y in modal_rect.y.saturating_add(1)..bottom_y.saturating_add(1) {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
    for x in modal_rect.x.saturating_add(1)..right_x.saturating_add(1) {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Clear a modal area so underlying content does not bleed through.
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        assert_eq!(centered_rect(50, 20, area), area);
    }

    #[test]
    fn test_centered_rect_percent_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = centered_rect_percent(80, 60, area);
        assert!(modal.width <= 80 && modal.width >= 78);
        assert!(modal.x >= 10);
        assert!(modal.bottom() <= area.bottom());
    }

    #[test]
    fn test_dim_background_sets_muted_foreground() {
        let palette = Palette::dark();
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        dim_background(&mut buf, area, &palette);
        assert_eq!(buf[(1, 1)].fg, palette.text_muted);
    }

    #[test]
    fn test_render_shadow_stays_inside_buffer() {
        let palette = Palette::dark();
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        // Modal touching the edges: shadow cells fall outside and are skipped
        render_shadow(&mut buf, Rect::new(0, 0, 10, 5), &palette);
        render_shadow(&mut buf, Rect::new(2, 1, 4, 2), &palette);
        assert_eq!(buf[(6, 2)].bg, palette.shadow);
        assert_eq!(buf[(3, 3)].bg, palette.shadow);
    }
}
