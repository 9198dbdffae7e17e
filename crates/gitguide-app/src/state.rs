//! Application state (Model in TEA pattern)

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use gitguide_core::prelude::*;
use gitguide_core::{
    AnimationComplexity, AnimationKind, AnimationSpeed, DiagramPreset, GuideTab, ResolvedTheme,
    ThemeMode,
};

use crate::clock::{Clock, SystemClock};
use crate::command_search::CommandSearchState;
use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::diagram_state::DiagramState;
use crate::environment::Environment;
use crate::guide::GuideState;
use crate::notice::CompatibilityNotice;
use crate::progress::ProgressTracker;
use crate::storage::{keys, PreferenceStore};
use crate::theme::resolved_theme;
use crate::timing::AnimationTiming;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Guide content (tabs, cards, animations)
    #[default]
    Normal,

    /// Command palette is open
    Search,

    /// Animation settings panel
    Settings,

    /// Progress checklist
    Progress,

    /// Confirmation dialog over the progress checklist
    ConfirmDialog,
}

/// Rows of the animation settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsItem {
    Enabled,
    Speed,
    Complexity,
}

impl SettingsItem {
    pub const ALL: [SettingsItem; 3] = [Self::Enabled, Self::Speed, Self::Complexity];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsItem::Enabled => "Enable Animations",
            SettingsItem::Speed => "Animation Speed",
            SettingsItem::Complexity => "Animation Complexity",
        }
    }
}

/// Per-frame values every widget renders against
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    pub theme: ResolvedTheme,
    pub timing: AnimationTiming,
    pub now: Instant,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub ui_mode: UiMode,
    pub settings: Settings,
    pub store: PreferenceStore,
    pub clock: Arc<dyn Clock>,
    pub environment: Environment,

    // Preferences (mirrored in the store)
    pub theme_mode: ThemeMode,
    pub animation_speed: AnimationSpeed,
    pub animation_complexity: AnimationComplexity,
    pub animations_enabled: bool,

    pub guide: GuideState,
    pub diagram: DiagramState,
    pub search: CommandSearchState,
    /// Mode restored when the palette closes
    pub search_return_mode: UiMode,
    pub progress: ProgressTracker,
    /// Flat index into the checklist
    pub progress_cursor: usize,
    pub settings_cursor: usize,
    pub notice: CompatibilityNotice,
    pub confirm_dialog: Option<ConfirmDialogState>,

    /// Last known terminal size
    pub terminal_size: (u16, u16),
    pub should_quit: bool,
}

impl AppState {
    /// Build state from settings and stored preferences
    pub fn new(
        settings: Settings,
        store: PreferenceStore,
        environment: Environment,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let search = CommandSearchState::new(settings.search.debounce(), settings.ui.copy_feedback());

        let mut state = Self {
            ui_mode: UiMode::Normal,
            theme_mode: settings.ui.default_theme,
            animation_speed: settings.animation.default_speed,
            animation_complexity: settings.animation.default_complexity,
            animations_enabled: settings.animation.default_enabled,
            settings,
            store,
            clock,
            environment,
            guide: GuideState::default(),
            diagram: DiagramState::default(),
            search,
            search_return_mode: UiMode::Normal,
            progress: ProgressTracker::new(),
            progress_cursor: 0,
            settings_cursor: 0,
            notice: CompatibilityNotice::default(),
            confirm_dialog: None,
            terminal_size: (0, 0),
            should_quit: false,
        };
        state.load_preferences();
        state
    }

    /// Defaults everywhere, in-memory store, wall clock
    pub fn with_defaults() -> Self {
        Self::new(
            Settings::default(),
            PreferenceStore::in_memory(),
            Environment::default(),
            Arc::new(SystemClock),
        )
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Snapshot of the timing inputs, rebuilt on every call
    pub fn timing(&self) -> AnimationTiming {
        AnimationTiming {
            speed: self.animation_speed,
            complexity: self.animation_complexity,
            enabled: self.animations_enabled,
            reduced_motion: self.environment.reduced_motion,
        }
    }

    pub fn resolved_theme(&self) -> ResolvedTheme {
        resolved_theme(self.theme_mode, self.environment.system_prefers_dark)
    }

    pub fn view_context(&self) -> ViewContext {
        ViewContext {
            theme: self.resolved_theme(),
            timing: self.timing(),
            now: self.now(),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Preferences
    // ─────────────────────────────────────────────────────────

    /// Pull every preference out of the store, falling back to settings
    fn load_preferences(&mut self) {
        let animation = &self.settings.animation;
        self.theme_mode = self.store.get(keys::THEME, self.settings.ui.default_theme);
        self.animation_speed = self.store.get(keys::ANIMATION_SPEED, animation.default_speed);
        self.animation_complexity = self
            .store
            .get(keys::ANIMATION_COMPLEXITY, animation.default_complexity);
        self.animations_enabled = self
            .store
            .get(keys::ANIMATIONS_ENABLED, animation.default_enabled);
        self.progress =
            ProgressTracker::from_entries(self.store.get(keys::PROGRESS, BTreeMap::new()));
        self.notice.dismissed = self.store.get(keys::NOTICE_DISMISSED, false);
    }

    /// Re-read storage after another instance wrote to it.
    ///
    /// Returns true when any preference changed.
    pub fn reload_from_store(&mut self) -> bool {
        let changed = self.store.resync();
        if changed.is_empty() {
            return false;
        }
        info!("Preferences changed externally: {:?}", changed);
        self.load_preferences();
        self.reconfigure_timeline();
        true
    }

    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.theme_mode = mode;
        self.store.set(keys::THEME, &mode);
    }

    pub fn cycle_theme(&mut self) {
        self.set_theme_mode(self.theme_mode.next());
    }

    pub fn set_animation_speed(&mut self, speed: AnimationSpeed) {
        self.animation_speed = speed;
        self.store.set(keys::ANIMATION_SPEED, &speed);
        self.reconfigure_timeline();
    }

    pub fn set_animation_complexity(&mut self, complexity: AnimationComplexity) {
        self.animation_complexity = complexity;
        self.store.set(keys::ANIMATION_COMPLEXITY, &complexity);
    }

    /// Reduced motion locks the toggle; returns false when ignored
    pub fn toggle_animations_enabled(&mut self) -> bool {
        if self.environment.reduced_motion {
            debug!("Animation toggle ignored: reduced motion is active");
            return false;
        }
        self.animations_enabled = !self.animations_enabled;
        self.store
            .set(keys::ANIMATIONS_ENABLED, &self.animations_enabled);
        self.reconfigure_timeline();
        true
    }

    // ─────────────────────────────────────────────────────────
    // Progress
    // ─────────────────────────────────────────────────────────

    pub fn toggle_progress(&mut self, section_id: &str, index: usize) {
        self.progress.toggle(section_id, index);
        self.store.set(keys::PROGRESS, self.progress.entries());
    }

    pub fn reset_progress(&mut self) {
        self.progress.reset();
        self.store.set(keys::PROGRESS, self.progress.entries());
    }

    // ─────────────────────────────────────────────────────────
    // Compatibility notice
    // ─────────────────────────────────────────────────────────

    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.notice.issues = self
            .environment
            .compatibility_issues(self.store.is_available(), self.terminal_size);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice.dismiss();
        self.store.set(keys::NOTICE_DISMISSED, &true);
    }

    // ─────────────────────────────────────────────────────────
    // Timelines
    // ─────────────────────────────────────────────────────────

    /// Animation that belongs on screen right now
    pub fn wanted_animation(&self) -> Option<AnimationKind> {
        match self.guide.tab {
            GuideTab::AdvancedViz => {
                (self.diagram.preset == DiagramPreset::Rebasing).then_some(AnimationKind::Rebase)
            }
            _ => self.guide.focused_card().and_then(|card| card.animation),
        }
    }

    /// Create or drop the focused timeline to match what is on screen
    pub fn refresh_timeline(&mut self) {
        let wanted = self.wanted_animation();
        let timing = self.timing();
        let now = self.now();
        self.guide.sync_timeline(wanted, &timing, now);
    }

    /// Push the current timing into the live timeline
    pub fn reconfigure_timeline(&mut self) {
        let timing = self.timing();
        let now = self.now();
        if let Some(timeline) = self.guide.timeline.as_mut() {
            timeline.reconfigure(&timing, now);
        }
    }

    pub fn selected_settings_item(&self) -> SettingsItem {
        SettingsItem::ALL[self.settings_cursor.min(SettingsItem::ALL.len() - 1)]
    }
}
