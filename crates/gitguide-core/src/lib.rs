//! # gitguide-core - Core Domain Types
//!
//! Foundation crate for git-guide. Provides preference value types, the
//! static command and progress catalogs, tutorial content, diagram data,
//! animation definitions, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Preference Types (`types`)
//! - [`AnimationSpeed`], [`AnimationComplexity`] - Animation preferences
//! - [`ThemeMode`], [`ResolvedTheme`] - Theme preference and its resolved value
//!
//! ### Catalogs (`catalog`, `search`)
//! - [`COMMANDS`] - The searchable command reference
//! - [`GUIDE_SECTIONS`] - Progress-tracked sections and their subsections
//! - [`filter_commands()`] - Stable, case-insensitive command filter
//!
//! ### Content (`content`, `diagram`, `animations`)
//! - [`GuideTab`], [`CommandCard`], [`FaqEntry`] - Tutorial text
//! - [`DiagramPreset`], [`DiagramNode`], [`DiagramConnection`] - Node graphs
//! - [`AnimationKind`], [`AnimationStep`] - Named animation phases
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum organized by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use gitguide_core::prelude::*;
//! ```

pub mod animations;
pub mod catalog;
pub mod content;
pub mod diagram;
pub mod error;
pub mod logging;
pub mod search;
pub mod types;

/// Prelude for common imports used throughout all git-guide crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use animations::{AnimationKind, AnimationStep};
pub use catalog::{
    progress_key, total_subsections, Command, CommandCategory, GuideSection, COMMANDS,
    GUIDE_SECTIONS,
};
pub use content::{CommandCard, FaqEntry, GuideTab, FAQ};
pub use diagram::{
    connection_is_active, ConnectionKind, DiagramConnection, DiagramKind, DiagramNode,
    DiagramPreset, NodeKind,
};
pub use error::{Error, Result, ResultExt};
pub use search::filter_commands;
pub use types::{AnimationComplexity, AnimationSpeed, ResolvedTheme, ThemeMode};
