//! Timeline controls for the focused animation
//!
//! Every handler is a no-op when nothing animated is on screen.

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_toggle_mode(state: &mut AppState) -> UpdateResult {
    let now = state.now();
    if let Some(timeline) = state.guide.timeline.as_mut() {
        timeline.toggle_mode(now);
    }
    UpdateResult::none()
}

pub fn handle_step_forward(state: &mut AppState) -> UpdateResult {
    if let Some(timeline) = state.guide.timeline.as_mut() {
        timeline.next_step();
    }
    UpdateResult::none()
}

pub fn handle_step_backward(state: &mut AppState) -> UpdateResult {
    if let Some(timeline) = state.guide.timeline.as_mut() {
        timeline.previous_step();
    }
    UpdateResult::none()
}

pub fn handle_reset(state: &mut AppState) -> UpdateResult {
    let now = state.now();
    if let Some(timeline) = state.guide.timeline.as_mut() {
        timeline.reset(now);
    }
    UpdateResult::none()
}

pub fn handle_toggle_playback(state: &mut AppState) -> UpdateResult {
    let now = state.now();
    if let Some(timeline) = state.guide.timeline.as_mut() {
        timeline.toggle_playing(now);
    }
    UpdateResult::none()
}
