//! gitguide-tui - Terminal UI for git-guide
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! rendering of the guide tabs and overlays, the OSC 52 clipboard and the
//! main event loop driving `gitguide-app`.

pub mod clipboard;
pub mod event;
pub mod layout;
pub mod process;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
