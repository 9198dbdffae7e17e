//! Colour palettes.
//!
//! The dark palette follows the Dracula colours the guide has always used;
//! the light palette keeps the same hues at higher contrast on a pale
//! background. `monochrome` resets every colour for `NO_COLOR` terminals
//! and leaves emphasis to text modifiers.

use gitguide_core::ResolvedTheme;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub card_bg: Color,
    pub popup_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    pub accent_alt: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub contrast_fg: Color,

    // --- Status ---
    pub green: Color,
    pub cyan: Color,
    pub yellow: Color,
    pub red: Color,
    pub orange: Color,

    pub shadow: Color,
}

impl Palette {
    pub fn for_theme(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Dark => Self::dark(),
            ResolvedTheme::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(40, 42, 54),   // #282a36
            card_bg: Color::Rgb(37, 38, 48),      // #252630
            popup_bg: Color::Rgb(52, 55, 70),     // #343746
            border_dim: Color::Rgb(68, 71, 90),   // #44475a
            border_active: Color::Rgb(189, 147, 249),
            accent: Color::Rgb(189, 147, 249),    // #bd93f9
            accent_alt: Color::Rgb(255, 121, 198), // #ff79c6
            text_primary: Color::Rgb(248, 248, 242), // #f8f8f2
            text_secondary: Color::Rgb(191, 191, 191),
            text_muted: Color::Rgb(98, 114, 164), // #6272a4
            contrast_fg: Color::Rgb(40, 42, 54),
            green: Color::Rgb(80, 250, 123),      // #50fa7b
            cyan: Color::Rgb(139, 233, 253),      // #8be9fd
            yellow: Color::Rgb(241, 250, 140),    // #f1fa8c
            red: Color::Rgb(255, 85, 85),         // #ff5555
            orange: Color::Rgb(255, 184, 108),    // #ffb86c
            shadow: Color::Rgb(25, 26, 33),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(248, 248, 242),
            card_bg: Color::Rgb(255, 255, 255),
            popup_bg: Color::Rgb(236, 236, 230),
            border_dim: Color::Rgb(200, 200, 210),
            border_active: Color::Rgb(124, 77, 204),
            accent: Color::Rgb(124, 77, 204),
            accent_alt: Color::Rgb(196, 40, 128),
            text_primary: Color::Rgb(40, 42, 54),
            text_secondary: Color::Rgb(68, 71, 90),
            text_muted: Color::Rgb(110, 117, 140),
            contrast_fg: Color::Rgb(255, 255, 255),
            green: Color::Rgb(22, 140, 60),
            cyan: Color::Rgb(0, 120, 150),
            yellow: Color::Rgb(150, 120, 0),
            red: Color::Rgb(200, 40, 40),
            orange: Color::Rgb(190, 100, 20),
            shadow: Color::Rgb(210, 210, 205),
        }
    }

    pub fn monochrome() -> Self {
        Self {
            background: Color::Reset,
            card_bg: Color::Reset,
            popup_bg: Color::Reset,
            border_dim: Color::Reset,
            border_active: Color::Reset,
            accent: Color::Reset,
            accent_alt: Color::Reset,
            text_primary: Color::Reset,
            text_secondary: Color::Reset,
            text_muted: Color::Reset,
            contrast_fg: Color::Reset,
            green: Color::Reset,
            cyan: Color::Reset,
            yellow: Color::Reset,
            red: Color::Reset,
            orange: Color::Reset,
            shadow: Color::Reset,
        }
    }

    pub fn is_monochrome(&self) -> bool {
        self.accent == Color::Reset
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}
