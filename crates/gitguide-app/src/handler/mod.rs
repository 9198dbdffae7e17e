//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `playback`: Timeline controls for the focused animation
//! - `search`: Command palette handlers
//! - `progress`: Checklist and reset dialog handlers
//! - `settings`: Animation settings panel handlers

pub(crate) mod keys;
pub(crate) mod playback;
pub(crate) mod progress;
pub(crate) mod search;
pub(crate) mod settings;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Put text on the system clipboard; the loop reports back with
    /// `Message::CommandCopied` or `Message::CopyFailed`
    CopyToClipboard { command: &'static str },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
