//! Preference persistence
//!
//! - `backend`: the raw key-value repository trait and an in-memory backend
//! - `file`: JSON file backend used by the binary
//! - `value`: typed encoding of stored values
//! - `store`: cached, failure-absorbing [`PreferenceStore`]

pub mod backend;
pub mod file;
pub mod store;
pub mod value;

pub use backend::{MemoryBackend, StorageBackend};
pub use file::FileBackend;
pub use store::PreferenceStore;
pub use value::StoredValue;

/// Storage keys. Values are optional; absence means "use the default".
pub mod keys {
    pub const THEME: &str = "theme";
    pub const ANIMATION_SPEED: &str = "animationSpeed";
    pub const ANIMATION_COMPLEXITY: &str = "animationComplexity";
    pub const ANIMATIONS_ENABLED: &str = "animationsEnabled";
    pub const PROGRESS: &str = "git-guide-progress";
    pub const NOTICE_DISMISSED: &str = "compatibility-notice-dismissed";
}
