//! # Cutpath Visualizer
//!
//! Replays simulation traces produced by the external engine: decodes the
//! trace and its per-state debug annotations, drives a virtual playback
//! clock, and composes each displayed frame against an abstract canvas.

pub mod debug;
pub mod playback;
pub mod trace;
pub mod visualizer;

pub use debug::{parse_descriptor, parse_renderable, DebugFrame, Renderable};
pub use playback::{PlaybackCommand, PlaybackController, PlaybackMode, TickOutcome};
pub use trace::{Pose, SimState, SimulationTrace};
pub use visualizer::{
    render_frame, Camera, CameraCommand, ViewerOptions, Visualizer,
};
