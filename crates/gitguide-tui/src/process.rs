//! Message processing: runs update and performs the resulting actions

use std::collections::VecDeque;

use gitguide_app::handler;
use gitguide_app::{AppState, Message, UpdateAction};
use gitguide_core::prelude::*;

use crate::clipboard::Clipboard;

/// Process a message through the TEA update function.
///
/// Follow-up messages and action results are queued and processed in order
/// until the chain settles.
pub fn process_message(state: &mut AppState, message: Message, clipboard: &mut dyn Clipboard) {
    let mut queue = VecDeque::from([message]);
    while let Some(msg) = queue.pop_front() {
        let result = handler::update(state, msg);

        if let Some(action) = result.action {
            queue.push_back(handle_action(action, clipboard));
        }

        if let Some(next) = result.message {
            queue.push_back(next);
        }
    }
}

/// Perform a side effect and report its outcome as a message
fn handle_action(action: UpdateAction, clipboard: &mut dyn Clipboard) -> Message {
    match action {
        UpdateAction::CopyToClipboard { command } => match clipboard.copy(command) {
            Ok(()) => Message::CommandCopied { command },
            Err(e) => {
                error!("Clipboard write failed: {}", e);
                Message::CopyFailed {
                    reason: e.to_string(),
                }
            }
        },
    }
}
