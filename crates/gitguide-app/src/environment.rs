//! Environment signals: reduced motion, colour scheme, terminal capabilities
//!
//! Everything here is advisory. Missing capabilities produce notices, they
//! never switch features off.

/// Set to a truthy value to request minimal motion
pub const REDUCED_MOTION_VAR: &str = "GITGUIDE_REDUCED_MOTION";

/// `dark` or `light`; overrides the COLORFGBG heuristic
pub const COLOR_SCHEME_VAR: &str = "GITGUIDE_COLOR_SCHEME";

/// Smallest terminal the layout is designed for
pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub reduced_motion: bool,
    pub system_prefers_dark: bool,
    pub no_color: bool,
    pub dumb_terminal: bool,
    pub term_program: Option<String>,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            system_prefers_dark: true,
            no_color: false,
            dumb_terminal: false,
            term_program: None,
        }
    }
}

impl Environment {
    /// Read the process environment
    pub fn detect() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let reduced_motion = lookup(REDUCED_MOTION_VAR)
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        let system_prefers_dark = match lookup(COLOR_SCHEME_VAR).as_deref() {
            Some("light") => false,
            Some("dark") => true,
            _ => lookup("COLORFGBG")
                .and_then(|v| background_is_dark(&v))
                .unwrap_or(true),
        };

        let no_color = lookup("NO_COLOR").is_some_and(|v| !v.is_empty());
        let dumb_terminal = lookup("TERM").is_some_and(|t| t == "dumb");
        let term_program = lookup("TERM_PROGRAM").filter(|v| !v.is_empty());

        Self {
            reduced_motion,
            system_prefers_dark,
            no_color,
            dumb_terminal,
            term_program,
        }
    }

    /// Terminals known not to honour OSC 52 clipboard writes
    pub fn clipboard_unsupported(&self) -> bool {
        matches!(self.term_program.as_deref(), Some("Apple_Terminal"))
    }

    /// Human readable list of potential problems
    pub fn compatibility_issues(&self, storage_available: bool, size: (u16, u16)) -> Vec<String> {
        let mut issues = Vec::new();

        if self.dumb_terminal {
            issues.push("Your terminal doesn't support smooth animations".to_string());
        }
        if self.no_color {
            issues.push("Colours are disabled (NO_COLOR), diagrams may be harder to read".to_string());
        }
        if !storage_available {
            issues.push("Your system doesn't support saving progress".to_string());
        }
        let (width, height) = size;
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            issues.push(format!(
                "Your terminal is smaller than {}x{} and may have display issues",
                MIN_WIDTH, MIN_HEIGHT
            ));
        }
        if self.clipboard_unsupported() {
            issues.push("Your terminal may not support copying commands to the clipboard".to_string());
        }

        issues
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "reduce"
    )
}

/// COLORFGBG is `"fg;bg"` (sometimes `"fg;default;bg"`); ANSI 0-6 and 8 are dark
fn background_is_dark(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}
