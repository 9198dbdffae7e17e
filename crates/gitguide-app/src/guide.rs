//! Tab, card and FAQ navigation
//!
//! Only the focused card owns a [`Timeline`]. Changing card or tab drops the
//! old timeline (and its timer) and the next sync creates the new one.

use std::time::Instant;

use gitguide_core::{AnimationKind, CommandCard, GuideTab, FAQ};

use crate::timeline::Timeline;
use crate::timing::AnimationTiming;

#[derive(Debug, Clone, Default)]
pub struct GuideState {
    pub tab: GuideTab,
    /// Focused card on the current tab
    pub card: usize,
    /// Real-world examples of the focused card are expanded
    pub examples_open: bool,
    pub faq_cursor: usize,
    /// At most one FAQ answer is expanded
    pub faq_open: Option<usize>,
    /// Vertical scroll of free-text tabs
    pub scroll: u16,
    pub timeline: Option<Timeline>,
}

impl GuideState {
    pub fn select_tab(&mut self, tab: GuideTab) {
        if tab == self.tab {
            return;
        }
        self.tab = tab;
        self.card = 0;
        self.examples_open = false;
        self.scroll = 0;
        self.timeline = None;
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.tab.next());
    }

    pub fn previous_tab(&mut self) {
        self.select_tab(self.tab.previous());
    }

    pub fn cards(&self) -> &'static [CommandCard] {
        self.tab.cards()
    }

    pub fn focused_card(&self) -> Option<&'static CommandCard> {
        self.cards().get(self.card)
    }

    pub fn next_card(&mut self) {
        if self.card + 1 < self.cards().len() {
            self.focus_card(self.card + 1);
        }
    }

    pub fn previous_card(&mut self) {
        if self.card > 0 {
            self.focus_card(self.card - 1);
        }
    }

    pub fn first_card(&mut self) {
        if self.card != 0 {
            self.focus_card(0);
        }
    }

    pub fn last_card(&mut self) {
        let last = self.cards().len().saturating_sub(1);
        if self.card != last {
            self.focus_card(last);
        }
    }

    fn focus_card(&mut self, index: usize) {
        self.card = index;
        self.examples_open = false;
        self.timeline = None;
    }

    pub fn toggle_examples(&mut self) {
        if self.focused_card().is_some_and(|c| !c.examples.is_empty()) {
            self.examples_open = !self.examples_open;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn faq_next(&mut self) {
        if self.faq_cursor + 1 < FAQ.len() {
            self.faq_cursor += 1;
        }
    }

    pub fn faq_previous(&mut self) {
        self.faq_cursor = self.faq_cursor.saturating_sub(1);
    }

    pub fn faq_first(&mut self) {
        self.faq_cursor = 0;
    }

    pub fn faq_last(&mut self) {
        self.faq_cursor = FAQ.len().saturating_sub(1);
    }

    /// Expand the FAQ item under the cursor, collapsing any other
    pub fn toggle_faq(&mut self) {
        self.faq_open = if self.faq_open == Some(self.faq_cursor) {
            None
        } else {
            Some(self.faq_cursor)
        };
    }

    /// Make the owned timeline match the animation that should be on screen.
    ///
    /// A matching timeline is kept as is; anything else is dropped.
    pub fn sync_timeline(
        &mut self,
        wanted: Option<AnimationKind>,
        timing: &AnimationTiming,
        now: Instant,
    ) {
        let current = self.timeline.as_ref().map(Timeline::kind);
        if current == wanted {
            return;
        }
        self.timeline = wanted.map(|kind| Timeline::new(kind, timing, now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_change_resets_card_and_timeline() {
        let now = Instant::now();
        let mut g = GuideState::default();
        g.select_tab(GuideTab::Basic);
        g.next_card();
        g.sync_timeline(Some(AnimationKind::Commit), &AnimationTiming::default(), now);
        assert!(g.timeline.is_some());

        g.next_tab();
        assert_eq!(g.tab, GuideTab::Branching);
        assert_eq!(g.card, 0);
        assert!(g.timeline.is_none());
    }

    #[test]
    fn test_card_focus_clamps_and_drops_timeline() {
        let now = Instant::now();
        let mut g = GuideState::default();
        g.select_tab(GuideTab::Basic);
        g.previous_card();
        assert_eq!(g.card, 0);
        for _ in 0..20 {
            g.next_card();
        }
        assert_eq!(g.card, GuideTab::Basic.cards().len() - 1);

        g.sync_timeline(Some(AnimationKind::Commit), &AnimationTiming::default(), now);
        g.previous_card();
        assert!(g.timeline.is_none());
    }

    #[test]
    fn test_sync_keeps_matching_timeline() {
        let now = Instant::now();
        let timing = AnimationTiming::default();
        let mut g = GuideState::default();
        g.sync_timeline(Some(AnimationKind::Merge), &timing, now);
        if let Some(t) = g.timeline.as_mut() {
            t.next_step();
        }
        g.sync_timeline(Some(AnimationKind::Merge), &timing, now);
        assert_eq!(g.timeline.as_ref().map(|t| t.current()), Some(1));

        g.sync_timeline(None, &timing, now);
        assert!(g.timeline.is_none());
    }

    #[test]
    fn test_faq_single_open_item() {
        let mut g = GuideState::default();
        g.toggle_faq();
        assert_eq!(g.faq_open, Some(0));
        g.faq_next();
        g.toggle_faq();
        assert_eq!(g.faq_open, Some(1));
        g.toggle_faq();
        assert_eq!(g.faq_open, None);
    }

    #[test]
    fn test_examples_collapse_on_card_change() {
        let mut g = GuideState::default();
        g.select_tab(GuideTab::Basic);
        g.toggle_examples();
        assert!(g.examples_open);
        g.next_card();
        assert!(!g.examples_open);
    }
}
