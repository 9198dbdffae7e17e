//! gitguide-app - Application state and orchestration for git-guide
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management:
//! preferences and their storage, animation timelines, the command palette, the
//! progress checklist, configuration loading, signal handling and the storage
//! file watcher. It has no terminal dependencies; keys arrive as [`InputKey`].

pub mod clock;
pub mod command_search;
pub mod config;
pub mod confirm_dialog;
pub mod debounce;
pub mod diagram_state;
pub mod environment;
pub mod guide;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notice;
pub mod progress;
pub mod signals;
pub mod state;
pub mod storage;
pub mod theme;
pub mod timeline;
pub mod timing;
pub mod watcher;

// Re-export primary types
pub use clock::{Clock, ManualClock, SystemClock};
pub use environment::Environment;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, UiMode, ViewContext};
pub use storage::PreferenceStore;
pub use timeline::{PlaybackMode, Timeline};
pub use timing::AnimationTiming;
pub use watcher::StorageWatcher;
