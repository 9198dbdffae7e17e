//! Preference value types shared by every crate
//!
//! Each enum has a lowercase string form which doubles as its persisted
//! representation and its TOML spelling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ─────────────────────────────────────────────────────────────────
// Animation speed
// ─────────────────────────────────────────────────────────────────

/// User-selected playback speed for every animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    #[default]
    Slow,
    Normal,
    Fast,
}

impl AnimationSpeed {
    pub const ALL: [AnimationSpeed; 3] = [Self::Slow, Self::Normal, Self::Fast];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Normal => "normal",
            AnimationSpeed::Fast => "fast",
        }
    }

    /// Factor applied to a base duration
    pub fn multiplier(&self) -> f64 {
        match self {
            AnimationSpeed::Slow => 1.5,
            AnimationSpeed::Normal => 1.0,
            AnimationSpeed::Fast => 0.6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "Slow",
            AnimationSpeed::Normal => "Normal",
            AnimationSpeed::Fast => "Fast",
        }
    }
}

impl fmt::Display for AnimationSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimationSpeed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slow" => Ok(AnimationSpeed::Slow),
            "normal" => Ok(AnimationSpeed::Normal),
            "fast" => Ok(AnimationSpeed::Fast),
            other => Err(Error::malformed_value(
                "animationSpeed",
                format!("unknown speed '{}'", other),
            )),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Animation complexity
// ─────────────────────────────────────────────────────────────────

/// Visual density of animations; never affects timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationComplexity {
    Simple,
    Normal,
    #[default]
    Complex,
}

impl AnimationComplexity {
    pub const ALL: [AnimationComplexity; 3] = [Self::Simple, Self::Normal, Self::Complex];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationComplexity::Simple => "simple",
            AnimationComplexity::Normal => "normal",
            AnimationComplexity::Complex => "complex",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnimationComplexity::Simple => "Simple",
            AnimationComplexity::Normal => "Normal",
            AnimationComplexity::Complex => "Complex",
        }
    }
}

impl fmt::Display for AnimationComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimationComplexity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(AnimationComplexity::Simple),
            "normal" => Ok(AnimationComplexity::Normal),
            "complex" => Ok(AnimationComplexity::Complex),
            other => Err(Error::malformed_value(
                "animationComplexity",
                format!("unknown complexity '{}'", other),
            )),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────

/// Persisted tri-state theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
    #[default]
    System,
}

impl ThemeMode {
    /// Cycle order: dark -> light -> system -> dark
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::System,
            ThemeMode::System => ThemeMode::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
            ThemeMode::System => "system",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
            ThemeMode::System => "System",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            "system" => Ok(ThemeMode::System),
            other => Err(Error::malformed_value(
                "theme",
                format!("unknown theme '{}'", other),
            )),
        }
    }
}

/// Concrete theme used for rendering. Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedTheme {
    Dark,
    Light,
}

impl ResolvedTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolvedTheme::Dark => "dark",
            ResolvedTheme::Light => "light",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ResolvedTheme::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_cycle_returns_to_start() {
        let start = ThemeMode::Dark;
        let cycled = start.next().next().next();
        assert_eq!(cycled, ThemeMode::Dark);
        assert_eq!(start.next(), ThemeMode::Light);
        assert_eq!(start.next().next(), ThemeMode::System);
    }

    #[test]
    fn test_defaults_match_first_run() {
        assert_eq!(AnimationSpeed::default(), AnimationSpeed::Slow);
        assert_eq!(AnimationComplexity::default(), AnimationComplexity::Complex);
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }

    #[test]
    fn test_string_forms_parse_back() {
        for speed in AnimationSpeed::ALL {
            assert_eq!(speed.as_str().parse::<AnimationSpeed>().unwrap(), speed);
        }
        for complexity in AnimationComplexity::ALL {
            assert_eq!(
                complexity.as_str().parse::<AnimationComplexity>().unwrap(),
                complexity
            );
        }
        assert_eq!("system".parse::<ThemeMode>().unwrap(), ThemeMode::System);
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        assert!("turbo".parse::<AnimationSpeed>().is_err());
        assert!("Dark".parse::<ThemeMode>().is_err());
        assert!("".parse::<AnimationComplexity>().is_err());
    }

    #[test]
    fn test_speed_multipliers() {
        assert_eq!(AnimationSpeed::Slow.multiplier(), 1.5);
        assert_eq!(AnimationSpeed::Normal.multiplier(), 1.0);
        assert_eq!(AnimationSpeed::Fast.multiplier(), 0.6);
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&AnimationSpeed::Fast).unwrap();
        assert_eq!(json, "\"fast\"");
        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }
}
