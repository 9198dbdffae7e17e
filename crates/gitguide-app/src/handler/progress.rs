//! Progress checklist and reset confirmation handlers

use gitguide_core::prelude::*;
use gitguide_core::total_subsections;

use crate::confirm_dialog::ConfirmDialogState;
use crate::progress::item_at;
use crate::state::{AppState, UiMode};

use super::UpdateResult;

pub fn handle_open(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Progress;
    UpdateResult::none()
}

pub fn handle_close(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::Progress {
        state.ui_mode = UiMode::Normal;
    }
    UpdateResult::none()
}

pub fn handle_next(state: &mut AppState) -> UpdateResult {
    if state.progress_cursor + 1 < total_subsections() {
        state.progress_cursor += 1;
    }
    UpdateResult::none()
}

pub fn handle_previous(state: &mut AppState) -> UpdateResult {
    state.progress_cursor = state.progress_cursor.saturating_sub(1);
    UpdateResult::none()
}

pub fn handle_toggle_at_cursor(state: &mut AppState) -> UpdateResult {
    if let Some((section, index)) = item_at(state.progress_cursor) {
        state.toggle_progress(section.id, index);
    }
    UpdateResult::none()
}

pub fn handle_request_reset(state: &mut AppState) -> UpdateResult {
    state.confirm_dialog = Some(ConfirmDialogState::reset_progress());
    state.ui_mode = UiMode::ConfirmDialog;
    UpdateResult::none()
}

pub fn handle_confirm_reset(state: &mut AppState) -> UpdateResult {
    if state.confirm_dialog.take().is_none() {
        return UpdateResult::none();
    }
    info!("Resetting learning progress");
    state.reset_progress();
    state.ui_mode = UiMode::Progress;
    UpdateResult::none()
}

pub fn handle_cancel_reset(state: &mut AppState) -> UpdateResult {
    state.confirm_dialog = None;
    if state.ui_mode == UiMode::ConfirmDialog {
        state.ui_mode = UiMode::Progress;
    }
    UpdateResult::none()
}
