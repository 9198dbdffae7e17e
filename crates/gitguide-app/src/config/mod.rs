//! Configuration file parsing for git-guide
//!
//! Supports:
//! - `<config_dir>/git-guide/config.toml` - startup defaults and timings

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, parse_settings, CONFIG_FILENAME};
pub use types::*;
