//! Theme resolution

use gitguide_core::{ResolvedTheme, ThemeMode};

/// Resolve the theme preference against the system colour scheme.
///
/// `system` defers to the system signal; `dark` and `light` ignore it.
pub fn resolved_theme(mode: ThemeMode, system_prefers_dark: bool) -> ResolvedTheme {
    match mode {
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::System if system_prefers_dark => ResolvedTheme::Dark,
        ThemeMode::System => ResolvedTheme::Light,
    }
}
