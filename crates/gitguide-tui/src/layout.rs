//! Screen layout definitions for the TUI
//!
//! Header, tab bar, optional compatibility notice, content and status bar
//! stacked vertically.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the notice banner (border + one line + border)
pub const NOTICE_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, progress and theme
    pub header: Rect,

    /// Guide tab bar
    pub tabs: Rect,

    /// Compatibility notice, when visible
    pub notice: Option<Rect>,

    /// Active tab content
    pub content: Rect,

    /// Keybinding hints and transient feedback
    pub status: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `show_notice` - Reserve rows for the compatibility notice
pub fn create(area: Rect, show_notice: bool) -> ScreenAreas {
    let notice_height = if show_notice { NOTICE_HEIGHT } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(3),             // Header (glass container)
        Constraint::Length(1),             // Tabs
        Constraint::Length(notice_height), // Notice
        Constraint::Min(3),                // Content
        Constraint::Length(1),             // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        tabs: chunks[1],
        notice: show_notice.then_some(chunks[2]),
        content: chunks[3],
        status: chunks[4],
    }
}

/// Split card content into the card list and the detail pane
pub fn split_cards(area: Rect) -> (Rect, Rect) {
    let list_width = if area.width >= 100 { 32 } else { 26 };
    let chunks = Layout::horizontal([Constraint::Length(list_width), Constraint::Min(20)]).split(area);
    (chunks[0], chunks[1])
}

/// Split a detail pane, giving the animation panel its fixed height at the bottom
pub fn split_animation(area: Rect, panel_height: u16) -> (Rect, Rect) {
    let chunks = Layout::vertical([Constraint::Min(4), Constraint::Length(panel_height)]).split(area);
    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_without_notice() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, false);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.tabs.y, 3);
        assert!(layout.notice.is_none());
        assert_eq!(layout.content.y, 4);
        assert_eq!(layout.content.height, 19); // 24 - 3 - 1 - 1
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_create_layout_with_notice() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, true);

        let notice = layout.notice.expect("notice area");
        assert_eq!(notice.y, 4);
        assert_eq!(notice.height, NOTICE_HEIGHT);
        assert_eq!(layout.content.y, 7);
        assert_eq!(layout.content.height, 16);
    }

    #[test]
    fn test_split_cards_widths() {
        let (list, detail) = split_cards(Rect::new(0, 0, 80, 20));
        assert_eq!(list.width, 26);
        assert_eq!(detail.width, 54);

        let (list, _) = split_cards(Rect::new(0, 0, 120, 20));
        assert_eq!(list.width, 32);
    }

    #[test]
    fn test_split_animation() {
        let (top, panel) = split_animation(Rect::new(0, 0, 60, 20), 9);
        assert_eq!(panel.height, 9);
        assert_eq!(top.height, 11);
        assert_eq!(panel.y, 11);
    }
}
