//! Configuration types for git-guide
//!
//! `Settings` only supplies startup defaults. Values the user changes in the
//! app are stored as preferences and take precedence.

use std::time::Duration;

use gitguide_core::{AnimationComplexity, AnimationSpeed, ThemeMode};
use serde::{Deserialize, Serialize};

/// Global application settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub search: SearchSettings,

    #[serde(default)]
    pub animation: AnimationSettings,
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Event poll interval; also the timer resolution
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// How long "Copied!" stays visible
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,

    /// Theme used when no preference has been stored
    #[serde(default)]
    pub default_theme: ThemeMode,
}

impl UiSettings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            copy_feedback_ms: default_copy_feedback_ms(),
            default_theme: ThemeMode::default(),
        }
    }
}

/// Command palette settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchSettings {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl SearchSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Animation defaults used before any preference is stored
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnimationSettings {
    #[serde(default)]
    pub default_speed: AnimationSpeed,

    #[serde(default)]
    pub default_complexity: AnimationComplexity,

    #[serde(default = "default_true")]
    pub default_enabled: bool,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            default_speed: AnimationSpeed::default(),
            default_complexity: AnimationComplexity::default(),
            default_enabled: true,
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_copy_feedback_ms() -> u64 {
    2000
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.ui.tick_rate_ms, 50);
        assert_eq!(settings.ui.copy_feedback(), Duration::from_secs(2));
        assert_eq!(settings.search.debounce(), Duration::from_millis(300));
        assert_eq!(settings.animation.default_speed, AnimationSpeed::Slow);
        assert_eq!(
            settings.animation.default_complexity,
            AnimationComplexity::Complex
        );
        assert!(settings.animation.default_enabled);
        assert_eq!(settings.ui.default_theme, ThemeMode::System);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[animation]
default_speed = "fast"
"#,
        )
        .unwrap();
        assert_eq!(settings.animation.default_speed, AnimationSpeed::Fast);
        assert!(settings.animation.default_enabled);
        assert_eq!(settings.search.debounce_ms, 300);
    }

    #[test]
    fn test_tick_rate_never_zero() {
        let ui = UiSettings {
            tick_rate_ms: 0,
            ..Default::default()
        };
        assert_eq!(ui.tick_rate(), Duration::from_millis(1));
    }
}
