//! Command palette state
//!
//! Typing updates `query` immediately; the filter only runs once input has
//! been quiet for the debounce delay. A copied command is acknowledged for a
//! fixed window, after which the acknowledgement clears itself.

use std::time::{Duration, Instant};

use gitguide_core::{filter_commands, Command, COMMANDS};

use crate::debounce::Debouncer;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);
pub const DEFAULT_COPY_ACK: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct CommandSearchState {
    pub open: bool,
    /// What the user has typed
    pub query: String,
    /// Query the current results were computed from
    applied_query: String,
    results: Vec<&'static Command>,
    selected: usize,
    debouncer: Debouncer,
    copied: Option<(&'static str, Instant)>,
    copy_ack: Duration,
}

impl Default for CommandSearchState {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE, DEFAULT_COPY_ACK)
    }
}

impl CommandSearchState {
    pub fn new(debounce: Duration, copy_ack: Duration) -> Self {
        Self {
            open: false,
            query: String::new(),
            applied_query: String::new(),
            results: filter_commands("", COMMANDS),
            selected: 0,
            debouncer: Debouncer::new(debounce),
            copied: None,
            copy_ack,
        }
    }

    /// Open with an empty query showing the full catalog
    pub fn open(&mut self) {
        self.open = true;
        self.query.clear();
        self.apply_filter();
        self.selected = 0;
    }

    /// Close and drop any pending filter or acknowledgement timer
    pub fn close(&mut self) {
        self.open = false;
        self.debouncer.cancel();
        self.copied = None;
    }

    pub fn set_query(&mut self, text: impl Into<String>, now: Instant) {
        self.query = text.into();
        self.debouncer.schedule(now);
    }

    pub fn push_char(&mut self, c: char, now: Instant) {
        let mut query = std::mem::take(&mut self.query);
        query.push(c);
        self.set_query(query, now);
    }

    pub fn backspace(&mut self, now: Instant) {
        let mut query = std::mem::take(&mut self.query);
        query.pop();
        self.set_query(query, now);
    }

    pub fn is_filter_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Drive timers. Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if self.debouncer.fire(now) {
            let previous = self.results.len();
            self.apply_filter();
            if self.results.len() != previous {
                self.selected = 0;
            }
            changed = true;
        }

        if matches!(self.copied, Some((_, expires)) if now >= expires) {
            self.copied = None;
            changed = true;
        }

        changed
    }

    fn apply_filter(&mut self) {
        self.applied_query = self.query.clone();
        self.results = filter_commands(&self.applied_query, COMMANDS);
        if self.selected >= self.results.len() {
            self.selected = self.results.len().saturating_sub(1);
        }
    }

    pub fn applied_query(&self) -> &str {
        &self.applied_query
    }

    pub fn results(&self) -> &[&'static Command] {
        &self.results
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.results.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.results.len().saturating_sub(1);
    }

    pub fn selected_command(&self) -> Option<&'static Command> {
        self.results.get(self.selected).copied()
    }

    /// Record a successful copy; replaces any running acknowledgement
    pub fn mark_copied(&mut self, command: &'static str, now: Instant) {
        self.copied = Some((command, now + self.copy_ack));
    }

    /// Command currently acknowledged as copied
    pub fn copied_command(&self, now: Instant) -> Option<&'static str> {
        match self.copied {
            Some((command, expires)) if now < expires => Some(command),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(state: &CommandSearchState) -> Vec<&'static str> {
        state.results().iter().map(|c| c.name).collect()
    }

    #[test]
    fn test_open_shows_full_catalog() {
        let mut s = CommandSearchState::default();
        s.query = "leftover".into();
        s.open();
        assert!(s.open);
        assert!(s.query.is_empty());
        assert_eq!(s.results().len(), COMMANDS.len());
    }

    #[test]
    fn test_filter_waits_for_quiet_period() {
        let start = Instant::now();
        let mut s = CommandSearchState::default();
        s.open();

        s.set_query("p", start);
        s.set_query("pu", start + Duration::from_millis(100));
        s.set_query("push", start + Duration::from_millis(200));

        assert!(!s.tick(start + Duration::from_millis(400)));
        assert_eq!(s.results().len(), COMMANDS.len());

        assert!(s.tick(start + Duration::from_millis(500)));
        assert_eq!(names(&s), vec!["Push Changes"]);
        assert_eq!(s.applied_query(), "push");
    }

    #[test]
    fn test_selection_resets_when_result_count_changes() {
        let start = Instant::now();
        let mut s = CommandSearchState::default();
        s.open();
        s.select_next();
        s.select_next();
        assert_eq!(s.selected(), 2);

        s.set_query("remote", start);
        s.tick(start + DEFAULT_DEBOUNCE);
        assert_eq!(s.selected(), 0);
        assert_eq!(s.results().len(), 3);
    }

    #[test]
    fn test_selection_clamps() {
        let mut s = CommandSearchState::default();
        s.open();
        s.select_previous();
        assert_eq!(s.selected(), 0);
        for _ in 0..50 {
            s.select_next();
        }
        assert_eq!(s.selected(), COMMANDS.len() - 1);
    }

    #[test]
    fn test_no_matches_has_no_selection() {
        let start = Instant::now();
        let mut s = CommandSearchState::default();
        s.open();
        s.set_query("zzz", start);
        s.tick(start + DEFAULT_DEBOUNCE);
        assert!(s.results().is_empty());
        assert!(s.selected_command().is_none());
    }

    #[test]
    fn test_copy_acknowledgement_expires() {
        let start = Instant::now();
        let mut s = CommandSearchState::default();
        s.mark_copied("git push", start);
        assert_eq!(s.copied_command(start), Some("git push"));
        assert_eq!(s.copied_command(start + Duration::from_millis(1999)), Some("git push"));
        assert!(s.tick(start + DEFAULT_COPY_ACK));
        assert_eq!(s.copied_command(start + DEFAULT_COPY_ACK), None);
    }

    #[test]
    fn test_second_copy_replaces_first() {
        let start = Instant::now();
        let mut s = CommandSearchState::default();
        s.mark_copied("git push", start);
        s.mark_copied("git pull", start + Duration::from_secs(1));
        let later = start + Duration::from_millis(2500);
        assert_eq!(s.copied_command(later), Some("git pull"));
    }

    #[test]
    fn test_close_cancels_pending_filter() {
        let start = Instant::now();
        let mut s = CommandSearchState::default();
        s.open();
        s.set_query("push", start);
        s.close();
        assert!(!s.is_filter_pending());
        assert!(!s.tick(start + Duration::from_secs(1)));
    }
}
