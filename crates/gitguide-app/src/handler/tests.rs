//! Tests for the TEA update function and key dispatch

use std::sync::Arc;

use gitguide_core::{AnimationKind, AnimationSpeed, DiagramPreset, GuideTab, ThemeMode};

use super::*;
use crate::clock::ManualClock;
use crate::config::Settings;
use crate::environment::Environment;
use crate::input_key::InputKey;
use crate::state::{AppState, UiMode};
use crate::storage::{keys, MemoryBackend, PreferenceStore};

fn test_state_with(backend: MemoryBackend, environment: Environment) -> (AppState, ManualClock) {
    let clock = ManualClock::new();
    let state = AppState::new(
        Settings::default(),
        PreferenceStore::open(Box::new(backend)),
        environment,
        Arc::new(clock.clone()),
    );
    (state, clock)
}

fn test_state() -> (AppState, ManualClock) {
    test_state_with(MemoryBackend::new(), Environment::default())
}

/// Run a message and every follow-up message it produces.
/// Returns the last action requested, if any.
fn run(state: &mut AppState, message: Message) -> Option<UpdateAction> {
    let mut action = None;
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        if result.action.is_some() {
            action = result.action;
        }
        msg = result.message;
    }
    action
}

fn press(state: &mut AppState, key: InputKey) -> Option<UpdateAction> {
    run(state, Message::Key(key))
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, InputKey::Char(c));
    }
}

fn tick(state: &mut AppState, clock: &ManualClock, ms: u64) {
    clock.advance_ms(ms);
    run(state, Message::Tick);
}

// ─────────────────────────────────────────────────────────
// General
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_keys() {
    let (mut state, _) = test_state();
    press(&mut state, InputKey::Char('q'));
    assert!(state.should_quit);

    let (mut state, _) = test_state();
    press(&mut state, InputKey::CharCtrl('c'));
    assert!(state.should_quit);
}

#[test]
fn test_number_keys_select_tabs() {
    let (mut state, _) = test_state();
    press(&mut state, InputKey::Char('5'));
    assert_eq!(state.guide.tab, GuideTab::Advanced);
    press(&mut state, InputKey::Char('7'));
    assert_eq!(state.guide.tab, GuideTab::AdvancedViz);
    press(&mut state, InputKey::Tab);
    assert_eq!(state.guide.tab, GuideTab::Introduction);
    press(&mut state, InputKey::BackTab);
    assert_eq!(state.guide.tab, GuideTab::AdvancedViz);
}

// ─────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────

#[test]
fn test_theme_cycle_persists() {
    let backend = MemoryBackend::new();
    let (mut state, _) = test_state_with(backend.clone(), Environment::default());
    assert_eq!(state.theme_mode, ThemeMode::System);

    press(&mut state, InputKey::Char('t'));
    assert_eq!(state.theme_mode, ThemeMode::Dark);
    press(&mut state, InputKey::Char('t'));
    assert_eq!(state.theme_mode, ThemeMode::Light);

    let (reopened, _) = test_state_with(backend, Environment::default());
    assert_eq!(reopened.theme_mode, ThemeMode::Light);
}

// ─────────────────────────────────────────────────────────
// Timelines
// ─────────────────────────────────────────────────────────

fn focus_commit_card(state: &mut AppState) {
    // Basic tab: the "Committing Changes" card carries the commit animation
    press(state, InputKey::Char('2'));
    while state.guide.focused_card().and_then(|c| c.animation) != Some(AnimationKind::Commit) {
        let before = state.guide.card;
        press(state, InputKey::Down);
        assert_ne!(before, state.guide.card, "no commit card on Basic tab");
    }
}

#[test]
fn test_focused_card_owns_timeline() {
    let (mut state, _) = test_state();
    assert!(state.guide.timeline.is_none());

    focus_commit_card(&mut state);
    let timeline = state.guide.timeline.as_ref().unwrap();
    assert_eq!(timeline.kind(), AnimationKind::Commit);
    assert!(timeline.has_timer());

    // Leaving the tab tears the timeline down
    press(&mut state, InputKey::Char('1'));
    assert!(state.guide.timeline.is_none());
}

#[test]
fn test_autoplay_advances_on_tick() {
    let (mut state, clock) = test_state();
    run(&mut state, Message::SetAnimationSpeed(AnimationSpeed::Normal));
    focus_commit_card(&mut state);

    // 4 steps over 4s
    tick(&mut state, &clock, 999);
    assert_eq!(state.guide.timeline.as_ref().unwrap().current(), 0);
    tick(&mut state, &clock, 1);
    assert_eq!(state.guide.timeline.as_ref().unwrap().current(), 1);
}

#[test]
fn test_manual_mode_stops_autoplay() {
    let (mut state, clock) = test_state();
    focus_commit_card(&mut state);

    press(&mut state, InputKey::Char('m'));
    let timeline = state.guide.timeline.as_ref().unwrap();
    assert!(timeline.is_manual());
    assert!(!timeline.has_timer());

    for _ in 0..100 {
        tick(&mut state, &clock, 250);
    }
    assert_eq!(state.guide.timeline.as_ref().unwrap().current(), 0);

    press(&mut state, InputKey::Right);
    press(&mut state, InputKey::Char('n'));
    assert_eq!(state.guide.timeline.as_ref().unwrap().current(), 2);
    press(&mut state, InputKey::Char('R'));
    assert_eq!(state.guide.timeline.as_ref().unwrap().current(), 0);
}

#[test]
fn test_disabling_animations_shows_final_step() {
    let (mut state, _) = test_state();
    focus_commit_card(&mut state);

    run(&mut state, Message::ToggleAnimationsEnabled);
    let timeline = state.guide.timeline.as_ref().unwrap();
    assert!(timeline.is_static());
    assert!(!timeline.has_timer());
    assert_eq!(timeline.current(), timeline.step_count() - 1);
    assert_eq!(state.store.raw(keys::ANIMATIONS_ENABLED), Some("false"));
}

#[test]
fn test_reduced_motion_environment_is_static() {
    let env = Environment {
        reduced_motion: true,
        ..Environment::default()
    };
    let (mut state, _) = test_state_with(MemoryBackend::new(), env);
    focus_commit_card(&mut state);
    assert!(state.guide.timeline.as_ref().unwrap().is_static());

    // Toggle is locked while reduced motion is active
    run(&mut state, Message::ToggleAnimationsEnabled);
    assert!(state.animations_enabled);
}

#[test]
fn test_rebasing_preset_creates_manual_timeline() {
    let (mut state, _) = test_state();
    press(&mut state, InputKey::Char('7'));
    assert!(state.guide.timeline.is_none());

    press(&mut state, InputKey::Char('['));
    assert_eq!(state.diagram.preset, DiagramPreset::Rebasing);
    let timeline = state.guide.timeline.as_ref().unwrap();
    assert_eq!(timeline.kind(), AnimationKind::Rebase);
    assert!(timeline.is_manual());

    press(&mut state, InputKey::Char(']'));
    assert!(state.guide.timeline.is_none());
}

// ─────────────────────────────────────────────────────────
// Diagrams
// ─────────────────────────────────────────────────────────

#[test]
fn test_diagram_node_selection() {
    let (mut state, _) = test_state();
    press(&mut state, InputKey::Char('7'));
    press(&mut state, InputKey::Right);
    press(&mut state, InputKey::Enter);
    assert_eq!(state.diagram.active, Some("staging"));
    press(&mut state, InputKey::Enter);
    assert_eq!(state.diagram.active, None);
}

// ─────────────────────────────────────────────────────────
// Command Search
// ─────────────────────────────────────────────────────────

#[test]
fn test_ctrl_k_toggles_search() {
    let (mut state, _) = test_state();
    press(&mut state, InputKey::CharCtrl('k'));
    assert_eq!(state.ui_mode, UiMode::Search);
    assert!(state.search.open);
    press(&mut state, InputKey::CharCtrl('k'));
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(!state.search.open);
}

#[test]
fn test_search_returns_to_previous_mode() {
    let (mut state, _) = test_state();
    press(&mut state, InputKey::Char('p'));
    press(&mut state, InputKey::CharCtrl('k'));
    assert_eq!(state.ui_mode, UiMode::Search);
    press(&mut state, InputKey::Esc);
    assert_eq!(state.ui_mode, UiMode::Progress);
}

#[test]
fn test_search_is_debounced() {
    let (mut state, clock) = test_state();
    press(&mut state, InputKey::CharCtrl('k'));
    type_text(&mut state, "push");
    assert_eq!(state.search.query, "push");

    tick(&mut state, &clock, 299);
    assert_eq!(state.search.results().len(), 12);

    tick(&mut state, &clock, 1);
    let names: Vec<_> = state.search.results().iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Push Changes"]);
}

#[test]
fn test_search_editing_keys() {
    let (mut state, _) = test_state();
    press(&mut state, InputKey::CharCtrl('k'));
    type_text(&mut state, "git");
    press(&mut state, InputKey::Backspace);
    assert_eq!(state.search.query, "gi");
    press(&mut state, InputKey::CharCtrl('u'));
    assert_eq!(state.search.query, "");
    // Letters go to the query rather than triggering shortcuts
    press(&mut state, InputKey::Char('q'));
    assert!(!state.should_quit);
}

#[test]
fn test_enter_requests_copy_and_ack_expires() {
    let (mut state, clock) = test_state();
    press(&mut state, InputKey::CharCtrl('k'));
    type_text(&mut state, "push");
    tick(&mut state, &clock, 300);

    let action = press(&mut state, InputKey::Enter);
    assert_eq!(
        action,
        Some(UpdateAction::CopyToClipboard {
            command: "git push <remote> <branch>"
        })
    );
    let command = "git push <remote> <branch>";

    run(&mut state, Message::CommandCopied { command });
    assert_eq!(state.search.copied_command(state.now()), Some(command));

    tick(&mut state, &clock, 1999);
    assert!(state.search.copied_command(state.now()).is_some());
    tick(&mut state, &clock, 1);
    assert!(state.search.copied_command(state.now()).is_none());
}

#[test]
fn test_copy_failure_shows_nothing() {
    let (mut state, _) = test_state();
    press(&mut state, InputKey::CharCtrl('k'));
    run(
        &mut state,
        Message::CopyFailed {
            reason: "no clipboard".into(),
        },
    );
    assert!(state.search.copied_command(state.now()).is_none());
}

#[test]
fn test_search_navigation_clamps() {
    let (mut state, _) = test_state();
    press(&mut state, InputKey::CharCtrl('k'));
    press(&mut state, InputKey::Up);
    assert_eq!(state.search.selected(), 0);
    for _ in 0..20 {
        press(&mut state, InputKey::Down);
    }
    assert_eq!(state.search.selected(), 11);
}

#[test]
fn test_search_home_end_jump() {
    let (mut state, _) = test_state();
    press(&mut state, InputKey::CharCtrl('k'));
    press(&mut state, InputKey::End);
    assert_eq!(state.search.selected(), 11);
    press(&mut state, InputKey::Home);
    assert_eq!(state.search.selected(), 0);
}

#[test]
fn test_home_end_jump_cards_and_faq() {
    let (mut state, _) = test_state();
    run(&mut state, Message::SelectTab(GuideTab::Basic));
    let last = state.guide.cards().len() - 1;

    press(&mut state, InputKey::End);
    assert_eq!(state.guide.card, last);
    press(&mut state, InputKey::Home);
    assert_eq!(state.guide.card, 0);

    run(&mut state, Message::SelectTab(GuideTab::Faq));
    press(&mut state, InputKey::End);
    assert_eq!(state.guide.faq_cursor, gitguide_core::FAQ.len() - 1);
    press(&mut state, InputKey::Home);
    assert_eq!(state.guide.faq_cursor, 0);
}

#[test]
fn test_home_scrolls_intro_to_top() {
    let (mut state, _) = test_state();
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Down);
    assert_eq!(state.guide.scroll, 2);
    press(&mut state, InputKey::Home);
    assert_eq!(state.guide.scroll, 0);
}

// ─────────────────────────────────────────────────────────
// Progress
// ─────────────────────────────────────────────────────────

#[test]
fn test_progress_toggle_persists() {
    let backend = MemoryBackend::new();
    let (mut state, _) = test_state_with(backend.clone(), Environment::default());
    press(&mut state, InputKey::Char('p'));
    assert_eq!(state.ui_mode, UiMode::Progress);

    press(&mut state, InputKey::Char(' '));
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);
    assert_eq!(state.progress.completed_count(), 2);

    let (reopened, _) = test_state_with(backend, Environment::default());
    assert!(reopened.progress.is_completed("introduction", 0));
    assert!(reopened.progress.is_completed("introduction", 1));
}

#[test]
fn test_reset_requires_confirmation() {
    let (mut state, _) = test_state();
    run(
        &mut state,
        Message::ToggleProgressItem {
            section_id: "basic",
            index: 0,
        },
    );
    press(&mut state, InputKey::Char('p'));
    press(&mut state, InputKey::Char('r'));
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);
    assert!(state.confirm_dialog.is_some());

    // Ctrl+K is blocked while the dialog is pending
    press(&mut state, InputKey::CharCtrl('k'));
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);

    press(&mut state, InputKey::Char('n'));
    assert_eq!(state.ui_mode, UiMode::Progress);
    assert_eq!(state.progress.completed_count(), 1);

    press(&mut state, InputKey::Char('r'));
    press(&mut state, InputKey::Enter);
    assert_eq!(state.ui_mode, UiMode::Progress);
    assert!(state.confirm_dialog.is_none());
    assert_eq!(state.progress.percentage(), 0);
    assert_eq!(state.store.raw(keys::PROGRESS), Some("{}"));
}

#[test]
fn test_dialog_no_button_via_enter() {
    let (mut state, _) = test_state();
    run(
        &mut state,
        Message::ToggleProgressItem {
            section_id: "remote",
            index: 1,
        },
    );
    run(&mut state, Message::OpenProgress);
    run(&mut state, Message::RequestResetProgress);
    press(&mut state, InputKey::Right);
    press(&mut state, InputKey::Enter);
    assert_eq!(state.progress.completed_count(), 1);
    assert_eq!(state.ui_mode, UiMode::Progress);
}

// ─────────────────────────────────────────────────────────
// Settings panel
// ─────────────────────────────────────────────────────────

#[test]
fn test_settings_panel_adjusts_preferences() {
    let (mut state, _) = test_state();
    press(&mut state, InputKey::Char('s'));
    assert_eq!(state.ui_mode, UiMode::Settings);

    // Enabled row
    press(&mut state, InputKey::Enter);
    assert!(!state.animations_enabled);

    // Speed row: slow -> normal -> fast, clamped
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Right);
    press(&mut state, InputKey::Right);
    press(&mut state, InputKey::Right);
    assert_eq!(state.animation_speed, AnimationSpeed::Fast);
    assert_eq!(state.store.raw(keys::ANIMATION_SPEED), Some("fast"));

    press(&mut state, InputKey::Esc);
    assert_eq!(state.ui_mode, UiMode::Normal);
}

// ─────────────────────────────────────────────────────────
// Cross-instance sync
// ─────────────────────────────────────────────────────────

#[test]
fn test_storage_change_from_other_instance() {
    let backend = MemoryBackend::new();
    let (mut first, _) = test_state_with(backend.clone(), Environment::default());
    let (mut second, _) = test_state_with(backend, Environment::default());

    run(&mut first, Message::SetAnimationSpeed(AnimationSpeed::Fast));
    run(&mut first, Message::CycleTheme);

    run(&mut second, Message::StorageChanged);
    assert_eq!(second.animation_speed, AnimationSpeed::Fast);
    assert_eq!(second.theme_mode, ThemeMode::Dark);
}

#[test]
fn test_external_change_reconfigures_timeline() {
    let backend = MemoryBackend::new();
    let (mut first, _) = test_state_with(backend.clone(), Environment::default());
    let (mut second, _) = test_state_with(backend, Environment::default());
    focus_commit_card(&mut second);

    run(&mut first, Message::ToggleAnimationsEnabled);
    run(&mut second, Message::StorageChanged);

    assert!(!second.animations_enabled);
    assert!(second.guide.timeline.as_ref().unwrap().is_static());
}

// ─────────────────────────────────────────────────────────
// Notice
// ─────────────────────────────────────────────────────────

#[test]
fn test_notice_dismissal_persists() {
    let backend = MemoryBackend::new();
    let (mut state, _) = test_state_with(backend.clone(), Environment::default());
    run(
        &mut state,
        Message::Resize {
            width: 60,
            height: 20,
        },
    );
    assert!(state.notice.visible());
    press(&mut state, InputKey::Char('x'));
    assert!(!state.notice.visible());

    let (mut reopened, _) = test_state_with(backend, Environment::default());
    run(
        &mut reopened,
        Message::Resize {
            width: 60,
            height: 20,
        },
    );
    assert!(!reopened.notice.visible());
}

#[test]
fn test_tick_without_timers_is_harmless() {
    let (mut state, clock) = test_state();
    for _ in 0..10 {
        tick(&mut state, &clock, 50);
    }
    assert!(state.guide.timeline.is_none());
    assert_eq!(state.ui_mode, UiMode::Normal);
}
