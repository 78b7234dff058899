//! Trace playback viewer
//!
//! This module provides:
//! - Frame composition (visualizer)
//! - Viewer draw pass (frame_renderer)
//! - Pan/zoom camera controls (camera)

pub mod camera;
pub mod frame_renderer;
pub mod visualizer;

pub use camera::{Camera, CameraCommand};
pub use frame_renderer::render_frame;
pub use visualizer::{ViewerOptions, Visualizer};
