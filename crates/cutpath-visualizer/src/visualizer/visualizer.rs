use std::time::Duration;
use tracing::trace;

use cutpath_core::constants::{
    DEFAULT_LAG_THRESHOLD_SECS, DEFAULT_PAN_SPEED, DEFAULT_VIEWER_MAX_SCALE,
    DEFAULT_VIEWER_MIN_SCALE, DEFAULT_VIEWER_SCALE, DEFAULT_ZOOM_RATE,
};
use cutpath_core::{Canvas, InputEvent, Point2, SurfaceContext, TimeSource};

use super::camera::{Camera, CameraCommand};
use super::frame_renderer::render_frame;
use crate::playback::{PlaybackCommand, PlaybackController, PlaybackMode, TickOutcome};
use crate::trace::{SimState, SimulationTrace};

/// Viewer tuning knobs, usually filled from the viewer settings section.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerOptions {
    /// Initial zoom in pixels per meter.
    pub scale: f64,
    pub lag_threshold_secs: f64,
    pub start_paused: bool,
    pub pan_speed: f64,
    pub zoom_rate: f64,
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_VIEWER_SCALE,
            lag_threshold_secs: DEFAULT_LAG_THRESHOLD_SECS,
            start_paused: true,
            pan_speed: DEFAULT_PAN_SPEED,
            zoom_rate: DEFAULT_ZOOM_RATE,
            min_scale: DEFAULT_VIEWER_MIN_SCALE,
            max_scale: DEFAULT_VIEWER_MAX_SCALE,
        }
    }
}

/// Trace playback viewer.
///
/// Owns the loaded trace, the playback clock and the camera. One call to
/// [`Visualizer::tick`] per display refresh, followed by
/// [`Visualizer::render`].
#[derive(Debug, Clone)]
pub struct Visualizer {
    trace: SimulationTrace,
    playback: PlaybackController,
    camera: Camera,
}

impl Visualizer {
    pub fn new(trace: SimulationTrace, context: &SurfaceContext) -> Self {
        Self::with_options(trace, context, &ViewerOptions::default())
    }

    pub fn with_options(
        trace: SimulationTrace,
        context: &SurfaceContext,
        options: &ViewerOptions,
    ) -> Self {
        let mode = if options.start_paused {
            PlaybackMode::Paused
        } else {
            PlaybackMode::Realtime
        };
        let playback = PlaybackController::new(trace.step_duration(), trace.len())
            .with_lag_threshold(options.lag_threshold_secs)
            .with_mode(mode);

        let mut camera = Camera::new(context.size, options.scale);
        camera
            .viewport_mut()
            .set_scale_limits(options.min_scale, options.max_scale);
        camera.pan_speed = options.pan_speed;
        camera.zoom_rate = options.zoom_rate;

        Self {
            trace,
            playback,
            camera,
        }
    }

    pub fn trace(&self) -> &SimulationTrace {
        &self.trace
    }

    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut PlaybackController {
        &mut self.playback
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Advances playback by the clock's delta since the previous tick.
    pub fn tick(&mut self, clock: &mut dyn TimeSource) -> TickOutcome {
        self.advance(clock.delta())
    }

    /// Advances playback by an explicit wall-clock delta.
    pub fn advance(&mut self, wall_delta: Duration) -> TickOutcome {
        let outcome = self.playback.tick(wall_delta);
        trace!(
            "Tick {:?}: index {}, timer {:.3}",
            outcome,
            self.playback.index(),
            self.playback.timer()
        );
        outcome
    }

    pub fn apply(&mut self, command: PlaybackCommand) {
        self.playback.apply(command);
    }

    pub fn apply_camera(&mut self, command: CameraCommand, dt: Duration) {
        self.camera.apply(command, dt);
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        self.camera.handle_event(event)
    }

    /// Index of the displayed state.
    pub fn current_index(&self) -> usize {
        self.playback.index()
    }

    /// The displayed state, `None` for an empty trace.
    pub fn current_state(&self) -> Option<&SimState> {
        self.trace.get(self.current_index())
    }

    /// Positions of the accumulated cut marks: every state up to and
    /// including the displayed one that was recorded with the blade on.
    pub fn cut_marks(&self) -> Vec<Point2> {
        if self.trace.is_empty() {
            return Vec::new();
        }
        self.trace.states()[..=self.current_index()]
            .iter()
            .filter(|state| state.blade_on)
            .map(|state| state.pose.position())
            .collect()
    }

    /// Overlay lines, top to bottom: elapsed time, frame and playback mode,
    /// then the displayed state's own messages.
    pub fn overlay_messages(&self) -> Vec<String> {
        let mut messages = vec![
            format!("Time: {:.3}", self.playback.timer()),
            format!(
                "Frame {}/{} ({})",
                self.current_index(),
                self.trace.len(),
                self.playback
            ),
        ];
        if let Some(state) = self.current_state() {
            messages.extend(state.debug.messages.iter().cloned());
        }
        messages
    }

    /// Draws the displayed frame.
    pub fn render(&self, target: &mut dyn Canvas) {
        render_frame(target, self);
    }
}
