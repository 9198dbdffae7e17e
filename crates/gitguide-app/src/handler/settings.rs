//! Animation settings panel handlers

use gitguide_core::{AnimationComplexity, AnimationSpeed};

use crate::state::{AppState, SettingsItem, UiMode};

use super::UpdateResult;

pub fn handle_open(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Settings;
    UpdateResult::none()
}

pub fn handle_close(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::Settings {
        state.ui_mode = UiMode::Normal;
    }
    UpdateResult::none()
}

pub fn handle_next_item(state: &mut AppState) -> UpdateResult {
    if state.settings_cursor + 1 < SettingsItem::ALL.len() {
        state.settings_cursor += 1;
    }
    UpdateResult::none()
}

pub fn handle_previous_item(state: &mut AppState) -> UpdateResult {
    state.settings_cursor = state.settings_cursor.saturating_sub(1);
    UpdateResult::none()
}

/// Change the selected row: toggle, or step through the radio options
pub fn handle_adjust(state: &mut AppState, forward: bool) -> UpdateResult {
    match state.selected_settings_item() {
        SettingsItem::Enabled => {
            state.toggle_animations_enabled();
        }
        SettingsItem::Speed => {
            let speed = step(&AnimationSpeed::ALL, state.animation_speed, forward);
            state.set_animation_speed(speed);
        }
        SettingsItem::Complexity => {
            let complexity = step(
                &AnimationComplexity::ALL,
                state.animation_complexity,
                forward,
            );
            state.set_animation_complexity(complexity);
        }
    }
    UpdateResult::none()
}

/// Neighbouring option, clamped at both ends
fn step<T: Copy + PartialEq>(options: &[T], current: T, forward: bool) -> T {
    let index = options.iter().position(|o| *o == current).unwrap_or(0);
    let next = if forward {
        (index + 1).min(options.len() - 1)
    } else {
        index.saturating_sub(1)
    };
    options[next]
}
