//! Explicit surface context and time sources.
//!
//! Editors and viewers receive their surface size and clock through these
//! types instead of reaching for process-wide state.

use std::time::{Duration, Instant};

use crate::input::ScreenSize;

/// Everything a surface owner needs to know about where it draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceContext {
    pub size: ScreenSize,
}

impl SurfaceContext {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: ScreenSize::new(width, height),
        }
    }
}

/// Source of per-tick wall-clock deltas.
pub trait TimeSource {
    /// Time elapsed since the previous call (or since creation).
    fn delta(&mut self) -> Duration;
}

/// Monotonic wall clock.
#[derive(Debug)]
pub struct SystemClock {
    last: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn delta(&mut self) -> Duration {
        let now = Instant::now();
        let delta = now.duration_since(self.last);
        self.last = now;
        delta
    }
}

/// Clock that always reports the same delta. Used for headless replay.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    step: Duration,
}

impl FixedClock {
    pub fn new(step: Duration) -> Self {
        Self { step }
    }

    /// Clock ticking at `fps` frames per second, or `None` when `fps` does
    /// not give a representable frame time.
    pub fn from_fps(fps: f64) -> Option<Self> {
        if !(fps > 0.0) {
            return None;
        }
        Duration::try_from_secs_f64(1.0 / fps).ok().map(Self::new)
    }

    pub fn step(&self) -> Duration {
        self.step
    }
}

impl TimeSource for FixedClock {
    fn delta(&mut self) -> Duration {
        self.step
    }
}
