//! Playback controller.
//!
//! Maps a virtual timer and a fixed step duration to an index into a
//! simulation trace. The timer advances with wall-clock time in realtime
//! mode and only through explicit steps while paused.

use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

use cutpath_core::constants::{
    COARSE_SKIP_STEP, DEFAULT_LAG_THRESHOLD_SECS, INDEX_EPSILON, MAX_STEP_SKIP, MIN_STEP_SKIP,
};

/// Whether the timer follows the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    #[default]
    Paused,
    Realtime,
}

impl PlaybackMode {
    /// Returns the name of the mode.
    pub fn name(&self) -> &'static str {
        match self {
            PlaybackMode::Paused => "Paused",
            PlaybackMode::Realtime => "Realtime",
        }
    }
}

/// Viewer playback actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    /// Switch between paused and realtime.
    TogglePlayback,
    /// Rewind to the first state.
    Restart,
    /// Move back by `step_skip` states.
    StepBackward,
    /// Move forward by `step_skip` states.
    StepForward,
    /// Lower the step skip by 1, or by 10 when coarse.
    DecreaseSkip { coarse: bool },
    /// Raise the step skip by 1, or by 10 when coarse.
    IncreaseSkip { coarse: bool },
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer advanced (or stayed put while paused).
    Updated,
    /// The wall delta was too large; nothing changed.
    Dropped,
    /// The timer ran past the last state and playback paused.
    Exhausted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackController {
    timer: f64,
    step: f64,
    len: usize,
    step_skip: u32,
    mode: PlaybackMode,
    lag_threshold: f64,
}

impl PlaybackController {
    /// Creates a paused controller for `len` states of `step` each.
    pub fn new(step: Duration, len: usize) -> Self {
        Self {
            timer: 0.0,
            step: step.as_secs_f64(),
            len,
            step_skip: MIN_STEP_SKIP,
            mode: PlaybackMode::Paused,
            lag_threshold: DEFAULT_LAG_THRESHOLD_SECS,
        }
    }

    /// Sets the wall-clock delta above which a tick is dropped.
    pub fn with_lag_threshold(mut self, secs: f64) -> Self {
        if secs > 0.0 {
            self.lag_threshold = secs;
        }
        self
    }

    pub fn with_mode(mut self, mode: PlaybackMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn timer(&self) -> f64 {
        self.timer
    }

    /// Sets the virtual timer. Negative values clamp to zero; non-finite
    /// values are ignored.
    pub fn set_timer(&mut self, timer: f64) {
        if timer.is_finite() {
            self.timer = timer.max(0.0);
        }
    }

    pub fn step_secs(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn is_paused(&self) -> bool {
        self.mode == PlaybackMode::Paused
    }

    pub fn step_skip(&self) -> u32 {
        self.step_skip
    }

    /// Index implied by the timer, before range checks.
    fn raw_index(&self) -> usize {
        if self.step <= 0.0 {
            return 0;
        }
        (self.timer / self.step + INDEX_EPSILON).floor() as usize
    }

    /// Index of the displayed state. Always a valid index when the trace is
    /// not empty; 0 when it is.
    pub fn index(&self) -> usize {
        self.raw_index().min(self.len.saturating_sub(1))
    }

    /// Advances the timer by one wall-clock delta.
    pub fn tick(&mut self, wall_delta: Duration) -> TickOutcome {
        let dt = wall_delta.as_secs_f64();
        if dt > self.lag_threshold {
            warn!("Too much lag ({:.3}s), skipping frame", dt);
            return TickOutcome::Dropped;
        }

        if self.mode == PlaybackMode::Realtime {
            self.timer += dt;
        }

        if self.clamp_to_end() {
            TickOutcome::Exhausted
        } else {
            TickOutcome::Updated
        }
    }

    /// Applies a playback command.
    pub fn apply(&mut self, command: PlaybackCommand) {
        match command {
            PlaybackCommand::TogglePlayback => {
                self.mode = match self.mode {
                    PlaybackMode::Paused => PlaybackMode::Realtime,
                    PlaybackMode::Realtime => PlaybackMode::Paused,
                };
            }
            PlaybackCommand::Restart => self.timer = 0.0,
            PlaybackCommand::StepBackward => {
                self.set_timer(self.timer - self.step * self.step_skip as f64);
            }
            PlaybackCommand::StepForward => {
                self.timer += self.step * self.step_skip as f64;
                self.clamp_to_end();
            }
            PlaybackCommand::DecreaseSkip { coarse } => {
                let delta = if coarse { COARSE_SKIP_STEP } else { 1 };
                self.step_skip = self.step_skip.saturating_sub(delta).max(MIN_STEP_SKIP);
            }
            PlaybackCommand::IncreaseSkip { coarse } => {
                let delta = if coarse { COARSE_SKIP_STEP } else { 1 };
                self.step_skip = (self.step_skip + delta).min(MAX_STEP_SKIP);
            }
        }
        debug!(
            "Playback {:?}: timer {:.3}, skip {}, {}",
            command,
            self.timer,
            self.step_skip,
            self.mode.name()
        );
    }

    /// Pauses and pulls the timer back onto the last state once it has run
    /// past the end. Returns whether it did.
    fn clamp_to_end(&mut self) -> bool {
        if self.len == 0 {
            self.mode = PlaybackMode::Paused;
            self.timer = 0.0;
            return true;
        }
        if self.raw_index() < self.len {
            return false;
        }
        self.mode = PlaybackMode::Paused;
        self.timer = (self.len - 1) as f64 * self.step;
        debug!("Trace exhausted, paused at state {}", self.len - 1);
        true
    }
}

impl fmt::Display for PlaybackController {
    /// `frame skip N` while paused, `realtime` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            PlaybackMode::Paused => write!(f, "frame skip {}", self.step_skip),
            PlaybackMode::Realtime => write!(f, "realtime"),
        }
    }
}
