//! # Cutpath Core
//!
//! Core types for Cutpath: geometry, the instruction model, the abstract
//! canvas, input events, the robot profile and the unified error type.
//! The other crates build the editor, the playback viewer and settings on
//! top of these.

pub mod constants;
pub mod context;
pub mod error;
pub mod geometry;
pub mod input;
pub mod instruction;
pub mod render;
pub mod robot;

pub use context::{FixedClock, SurfaceContext, SystemClock, TimeSource};
pub use error::{DecodeError, Error, Result};
pub use geometry::{sample, CubicBezier, LineSegment, Point2};
pub use input::{InputEvent, PointerButton, ScreenPoint, ScreenSize};
pub use instruction::{BladeState, Instruction, InstructionSequence};
pub use render::{palette, Canvas, Color, DrawCommand, DrawList};
pub use robot::{DurationRepr, RobotProfile};
