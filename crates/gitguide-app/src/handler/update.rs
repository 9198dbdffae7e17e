//! Main update function - handles state transitions (TEA pattern)

use gitguide_core::prelude::*;
use gitguide_core::GuideTab;

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, playback, progress, search, settings, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            let now = state.now();
            state.search.tick(now);
            if let Some(timeline) = state.guide.timeline.as_mut() {
                timeline.tick(now);
            }
            UpdateResult::none()
        }

        Message::Resize { width, height } => {
            state.update_terminal_size(width, height);
            UpdateResult::none()
        }

        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Guide Navigation
        // ─────────────────────────────────────────────────────────
        Message::NextTab => {
            state.guide.next_tab();
            state.refresh_timeline();
            UpdateResult::none()
        }
        Message::PreviousTab => {
            state.guide.previous_tab();
            state.refresh_timeline();
            UpdateResult::none()
        }
        Message::SelectTab(tab) => {
            state.guide.select_tab(tab);
            state.refresh_timeline();
            UpdateResult::none()
        }
        Message::NextCard => {
            state.guide.next_card();
            state.refresh_timeline();
            UpdateResult::none()
        }
        Message::PreviousCard => {
            state.guide.previous_card();
            state.refresh_timeline();
            UpdateResult::none()
        }
        Message::FirstCard => {
            state.guide.first_card();
            state.refresh_timeline();
            UpdateResult::none()
        }
        Message::LastCard => {
            state.guide.last_card();
            state.refresh_timeline();
            UpdateResult::none()
        }
        Message::ToggleExamples => {
            state.guide.toggle_examples();
            UpdateResult::none()
        }
        Message::ScrollUp => {
            state.guide.scroll_up();
            UpdateResult::none()
        }
        Message::ScrollDown => {
            state.guide.scroll_down();
            UpdateResult::none()
        }
        Message::ScrollToTop => {
            state.guide.scroll_to_top();
            UpdateResult::none()
        }
        Message::FaqNext => {
            state.guide.faq_next();
            UpdateResult::none()
        }
        Message::FaqPrevious => {
            state.guide.faq_previous();
            UpdateResult::none()
        }
        Message::FaqFirst => {
            state.guide.faq_first();
            UpdateResult::none()
        }
        Message::FaqLast => {
            state.guide.faq_last();
            UpdateResult::none()
        }
        Message::ToggleFaq => {
            state.guide.toggle_faq();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Animation Playback
        // ─────────────────────────────────────────────────────────
        Message::ToggleAnimationMode => playback::handle_toggle_mode(state),
        Message::StepForward => playback::handle_step_forward(state),
        Message::StepBackward => playback::handle_step_backward(state),
        Message::ResetAnimation => playback::handle_reset(state),
        Message::TogglePlayback => playback::handle_toggle_playback(state),

        // ─────────────────────────────────────────────────────────
        // Interactive Diagrams
        // ─────────────────────────────────────────────────────────
        Message::NextDiagramPreset => {
            if state.guide.tab == GuideTab::AdvancedViz {
                state.diagram.next_preset();
                state.refresh_timeline();
            }
            UpdateResult::none()
        }
        Message::PreviousDiagramPreset => {
            if state.guide.tab == GuideTab::AdvancedViz {
                state.diagram.previous_preset();
                state.refresh_timeline();
            }
            UpdateResult::none()
        }
        Message::DiagramCursorLeft => {
            state.diagram.cursor_left();
            UpdateResult::none()
        }
        Message::DiagramCursorRight => {
            state.diagram.cursor_right();
            UpdateResult::none()
        }
        Message::SelectDiagramNode => {
            state.diagram.toggle_selected();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Preferences
        // ─────────────────────────────────────────────────────────
        Message::CycleTheme => {
            state.cycle_theme();
            debug!(
                "Theme mode {} resolves to {}",
                state.theme_mode.as_str(),
                state.resolved_theme().as_str()
            );
            UpdateResult::none()
        }
        Message::OpenSettings => settings::handle_open(state),
        Message::CloseSettings => settings::handle_close(state),
        Message::SettingsNextItem => settings::handle_next_item(state),
        Message::SettingsPreviousItem => settings::handle_previous_item(state),
        Message::SettingsAdjust { forward } => settings::handle_adjust(state, forward),
        Message::ToggleAnimationsEnabled => {
            state.toggle_animations_enabled();
            UpdateResult::none()
        }
        Message::SetAnimationSpeed(speed) => {
            state.set_animation_speed(speed);
            UpdateResult::none()
        }
        Message::SetAnimationComplexity(complexity) => {
            state.set_animation_complexity(complexity);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Command Search
        // ─────────────────────────────────────────────────────────
        Message::ToggleSearch => search::handle_toggle(state),
        Message::CloseSearch => search::handle_close(state),
        Message::SearchInput { text } => search::handle_input(state, text),
        Message::SearchSelectNext => {
            state.search.select_next();
            UpdateResult::none()
        }
        Message::SearchSelectPrevious => {
            state.search.select_previous();
            UpdateResult::none()
        }
        Message::SearchSelectFirst => {
            state.search.select_first();
            UpdateResult::none()
        }
        Message::SearchSelectLast => {
            state.search.select_last();
            UpdateResult::none()
        }
        Message::CopySelectedCommand => search::handle_copy_selected(state),
        Message::CommandCopied { command } => search::handle_copied(state, command),
        Message::CopyFailed { reason } => {
            warn!("Failed to copy command to clipboard: {}", reason);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Progress
        // ─────────────────────────────────────────────────────────
        Message::OpenProgress => progress::handle_open(state),
        Message::CloseProgress => progress::handle_close(state),
        Message::ProgressNext => progress::handle_next(state),
        Message::ProgressPrevious => progress::handle_previous(state),
        Message::ToggleProgressAtCursor => progress::handle_toggle_at_cursor(state),
        Message::ToggleProgressItem { section_id, index } => {
            state.toggle_progress(section_id, index);
            UpdateResult::none()
        }
        Message::RequestResetProgress => progress::handle_request_reset(state),
        Message::ConfirmResetProgress => progress::handle_confirm_reset(state),
        Message::CancelResetProgress => progress::handle_cancel_reset(state),
        Message::ConfirmDialogNext => {
            if let Some(dialog) = state.confirm_dialog.as_mut() {
                dialog.select_next();
            }
            UpdateResult::none()
        }
        Message::ConfirmDialogPrevious => {
            if let Some(dialog) = state.confirm_dialog.as_mut() {
                dialog.select_previous();
            }
            UpdateResult::none()
        }
        Message::ConfirmDialogSubmit => match state
            .confirm_dialog
            .as_ref()
            .and_then(|d| d.selected_message())
        {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Environment
        // ─────────────────────────────────────────────────────────
        Message::DismissNotice => {
            if state.notice.visible() {
                state.dismiss_notice();
            }
            UpdateResult::none()
        }
        Message::StorageChanged => {
            state.reload_from_store();
            UpdateResult::none()
        }
        Message::WatcherError { message } => {
            warn!("Storage watcher error: {}", message);
            UpdateResult::none()
        }
    }
}
