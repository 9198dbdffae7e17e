//! Learning progress checklist
//!
//! Entries are keyed `"<sectionId>-<index>"`. Keys outside the catalog are
//! kept (and persisted) but never counted towards the percentage.

use std::collections::BTreeMap;

use gitguide_core::catalog::{progress_key, total_subsections, GuideSection, GUIDE_SECTIONS};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressTracker {
    entries: BTreeMap<String, bool>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: BTreeMap<String, bool>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &BTreeMap<String, bool> {
        &self.entries
    }

    /// Flip one item; returns the new value
    pub fn toggle(&mut self, section_id: &str, index: usize) -> bool {
        let entry = self
            .entries
            .entry(progress_key(section_id, index))
            .or_insert(false);
        *entry = !*entry;
        *entry
    }

    pub fn is_completed(&self, section_id: &str, index: usize) -> bool {
        self.entries
            .get(&progress_key(section_id, index))
            .copied()
            .unwrap_or(false)
    }

    /// Completed catalog items
    pub fn completed_count(&self) -> usize {
        GUIDE_SECTIONS
            .iter()
            .flat_map(|s| (0..s.subsections.len()).map(move |i| (s.id, i)))
            .filter(|(id, i)| self.is_completed(id, *i))
            .count()
    }

    /// Completed share of the catalog, rounded to the nearest whole percent
    pub fn percentage(&self) -> u8 {
        let total = total_subsections();
        if total == 0 {
            return 0;
        }
        let pct = (self.completed_count() as f64 / total as f64 * 100.0).round();
        pct.clamp(0.0, 100.0) as u8
    }

    pub fn section_completed(&self, section: &GuideSection) -> usize {
        (0..section.subsections.len())
            .filter(|i| self.is_completed(section.id, *i))
            .count()
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }
}

/// Checklist item at a flat position across all sections
pub fn item_at(position: usize) -> Option<(&'static GuideSection, usize)> {
    let mut remaining = position;
    for section in GUIDE_SECTIONS {
        if remaining < section.subsections.len() {
            return Some((section, remaining));
        }
        remaining -= section.subsections.len();
    }
    None
}
