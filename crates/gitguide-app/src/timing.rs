//! Animation timing controller
//!
//! [`AnimationTiming`] is a snapshot of the preferences and motion signal
//! that affect animations. It is rebuilt from state whenever it is needed
//! so a preference change takes effect on the very next update.

use std::time::Duration;

use gitguide_core::{AnimationComplexity, AnimationSpeed};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    pub speed: AnimationSpeed,
    pub complexity: AnimationComplexity,
    pub enabled: bool,
    pub reduced_motion: bool,
}

impl AnimationTiming {
    /// Cycle length for an animation with the given base duration.
    ///
    /// Zero means "skip the animation and show its end state".
    pub fn effective_duration(&self, base: Duration) -> Duration {
        if self.reduced_motion || !self.enabled {
            return Duration::ZERO;
        }
        let millis = (base.as_millis() as f64 * self.speed.multiplier()).round();
        Duration::from_millis(millis as u64)
    }

    /// True when animations render statically
    pub fn is_static(&self) -> bool {
        self.reduced_motion || !self.enabled
    }

    /// Explanatory callouts appear from `normal` complexity upwards
    pub fn shows_callouts(&self) -> bool {
        self.complexity != AnimationComplexity::Simple
    }

    /// Decorative particles only at `complex`
    pub fn shows_particles(&self) -> bool {
        self.complexity == AnimationComplexity::Complex
    }
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            speed: AnimationSpeed::default(),
            complexity: AnimationComplexity::default(),
            enabled: true,
            reduced_motion: false,
        }
    }
}
