//! Command palette handlers

use gitguide_core::prelude::*;

use crate::state::{AppState, UiMode};

use super::{UpdateAction, UpdateResult};

/// Ctrl+K: open from anywhere except a pending confirmation, or close
pub fn handle_toggle(state: &mut AppState) -> UpdateResult {
    match state.ui_mode {
        UiMode::ConfirmDialog => UpdateResult::none(),
        UiMode::Search => handle_close(state),
        mode => {
            state.search_return_mode = mode;
            state.search.open();
            state.ui_mode = UiMode::Search;
            UpdateResult::none()
        }
    }
}

pub fn handle_close(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::Search {
        state.search.close();
        state.ui_mode = state.search_return_mode;
        state.search_return_mode = UiMode::Normal;
    }
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, text: String) -> UpdateResult {
    let now = state.now();
    state.search.set_query(text, now);
    UpdateResult::none()
}

pub fn handle_copy_selected(state: &mut AppState) -> UpdateResult {
    match state.search.selected_command() {
        Some(command) => {
            debug!("Copying '{}'", command.command);
            UpdateResult::action(UpdateAction::CopyToClipboard {
                command: command.command,
            })
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_copied(state: &mut AppState, command: &'static str) -> UpdateResult {
    let now = state.now();
    state.search.mark_copied(command, now);
    UpdateResult::none()
}
