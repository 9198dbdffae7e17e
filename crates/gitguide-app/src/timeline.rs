//! Step timeline for a single animation
//!
//! A [`Timeline`] walks the named phases of an [`AnimationKind`]. In
//! autoplay it owns an [`AutoplayTimer`] that advances the step modulo the
//! step count; in manual mode there is no timer at all and only explicit
//! next/previous calls move the index. Dropping the timeline drops the timer.

use std::time::{Duration, Instant};

use gitguide_core::{AnimationKind, AnimationStep};

use crate::timing::AnimationTiming;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    Autoplay,
    Manual,
}

/// Fixed-interval timer. `poll` reports how many intervals elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayTimer {
    interval: Duration,
    next_due: Instant,
}

impl AutoplayTimer {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Count elapsed intervals and schedule the next one
    pub fn poll(&mut self, now: Instant) -> u32 {
        if now < self.next_due || self.interval.is_zero() {
            return 0;
        }
        let overdue = now - self.next_due;
        let extra = (overdue.as_nanos() / self.interval.as_nanos()) as u32;
        let fired = extra + 1;
        self.next_due += self.interval * fired;
        fired
    }

    /// Fraction of the current interval already elapsed, 0.0..=1.0
    pub fn elapsed_fraction(&self, now: Instant) -> f64 {
        let remaining = self.next_due.saturating_duration_since(now);
        let remaining = remaining.as_secs_f64() / self.interval.as_secs_f64();
        (1.0 - remaining).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone)]
pub struct Timeline {
    kind: AnimationKind,
    mode: PlaybackMode,
    playing: bool,
    current: usize,
    cycle: Duration,
    timer: Option<AutoplayTimer>,
}

impl Timeline {
    pub fn new(kind: AnimationKind, timing: &AnimationTiming, now: Instant) -> Self {
        let mode = if kind.starts_in_manual() {
            PlaybackMode::Manual
        } else {
            PlaybackMode::Autoplay
        };
        let cycle = timing.effective_duration(kind.base_duration());
        let mut timeline = Self {
            kind,
            mode,
            playing: true,
            current: 0,
            cycle,
            timer: None,
        };
        if timeline.is_static() && mode == PlaybackMode::Autoplay {
            timeline.current = timeline.last_index();
        }
        timeline.arm(now);
        timeline
    }

    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn is_manual(&self) -> bool {
        self.mode == PlaybackMode::Manual
    }

    pub fn is_playing(&self) -> bool {
        self.mode == PlaybackMode::Autoplay && self.playing && !self.is_static()
    }

    /// Zero-length cycle: the end state is shown without motion
    pub fn is_static(&self) -> bool {
        self.cycle.is_zero()
    }

    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    pub fn cycle(&self) -> Duration {
        self.cycle
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn step_count(&self) -> usize {
        self.kind.step_count()
    }

    pub fn step(&self) -> &'static AnimationStep {
        &self.kind.steps()[self.current]
    }

    fn last_index(&self) -> usize {
        self.step_count().saturating_sub(1)
    }

    /// Start a timer when autoplay should be running, otherwise clear it
    fn arm(&mut self, now: Instant) {
        self.timer = if self.is_playing() {
            let interval = self.cycle / self.step_count().max(1) as u32;
            Some(AutoplayTimer::new(interval, now))
        } else {
            None
        };
    }

    /// Advance autoplay. Returns true if the visible step changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        let fired = timer.poll(now) as usize;
        if fired == 0 {
            return false;
        }
        let before = self.current;
        self.current = (self.current + fired) % self.step_count();
        before != self.current
    }

    /// Switch between autoplay and manual stepping.
    ///
    /// Entering manual mode drops the timer so nothing else advances the
    /// step. Returning to autoplay resumes playback from the current step.
    pub fn toggle_mode(&mut self, now: Instant) {
        match self.mode {
            PlaybackMode::Autoplay => {
                self.mode = PlaybackMode::Manual;
                self.timer = None;
            }
            PlaybackMode::Manual => {
                self.mode = PlaybackMode::Autoplay;
                self.playing = true;
                if self.is_static() {
                    self.current = self.last_index();
                }
                self.arm(now);
            }
        }
    }

    /// Pause or resume autoplay; no effect in manual mode
    pub fn toggle_playing(&mut self, now: Instant) {
        if self.mode != PlaybackMode::Autoplay {
            return;
        }
        self.playing = !self.playing;
        self.arm(now);
    }

    /// Manual step forward, clamped at the last step.
    ///
    /// Called during autoplay it first switches to manual mode.
    pub fn next_step(&mut self) {
        self.enter_manual();
        self.current = (self.current + 1).min(self.last_index());
    }

    /// Manual step back, clamped at the first step
    pub fn previous_step(&mut self) {
        self.enter_manual();
        self.current = self.current.saturating_sub(1);
    }

    fn enter_manual(&mut self) {
        if self.mode == PlaybackMode::Autoplay {
            self.mode = PlaybackMode::Manual;
            self.timer = None;
        }
    }

    /// Back to the first step; a running autoplay restarts its cycle
    pub fn reset(&mut self, now: Instant) {
        if self.mode == PlaybackMode::Autoplay && self.is_static() {
            self.current = self.last_index();
            return;
        }
        self.current = 0;
        self.arm(now);
    }

    /// Apply new timing preferences
    pub fn reconfigure(&mut self, timing: &AnimationTiming, now: Instant) {
        let cycle = timing.effective_duration(self.kind.base_duration());
        if cycle == self.cycle {
            return;
        }
        let was_static = self.is_static();
        self.cycle = cycle;

        if self.mode == PlaybackMode::Autoplay {
            if self.is_static() {
                self.current = self.last_index();
            } else if was_static {
                self.current = 0;
            }
        }
        self.arm(now);
    }

    /// Overall progress through the step sequence, 0.0..=1.0
    pub fn cycle_fraction(&self, now: Instant) -> f64 {
        let last = self.last_index();
        if last == 0 || (self.is_static() && !self.is_manual()) {
            return 1.0;
        }
        let value = match &self.timer {
            Some(timer) => {
                (self.current as f64 + timer.elapsed_fraction(now)) / self.step_count() as f64
            }
            None => self.current as f64 / last as f64,
        };
        value.clamp(0.0, 1.0)
    }
}
