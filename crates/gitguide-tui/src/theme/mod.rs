//! Centralized theme system for the git-guide TUI.
//!
//! This module provides:
//! - `palette`: Colour sets for the dark and light themes
//! - `styles`: Semantic style builder functions
//! - `icons`: Glyphs with ASCII fallbacks for limited terminals

pub mod icons;
pub mod palette;
pub mod styles;

use gitguide_app::ViewContext;

pub use icons::IconSet;
pub use palette::Palette;

/// Everything a widget needs to pick colours and glyphs
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub palette: Palette,
    pub icons: IconSet,
}

impl Theme {
    pub fn new(palette: Palette, icons: IconSet) -> Self {
        Self { palette, icons }
    }

    /// Resolve the theme for the current frame
    pub fn from_context(ctx: &ViewContext, no_color: bool, ascii: bool) -> Self {
        let palette = if no_color {
            Palette::monochrome()
        } else {
            Palette::for_theme(ctx.theme)
        };
        Self::new(palette, IconSet::new(ascii))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Palette::dark(), IconSet::new(false))
    }
}
