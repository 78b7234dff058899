//! # Cutpath
//!
//! Tool-path authoring and simulation playback for a blade-carrying mobile
//! robot:
//! - Build and edit a sequence of line, curve and blade instructions
//! - Export it as the simulation engine's input file and import it back
//! - Replay the engine's output trace with scrubbing, frame stepping and
//!   debug overlays
//!
//! ## Architecture
//!
//! Cutpath is organized as a workspace with multiple crates:
//!
//! 1. **cutpath-core** - Geometry, instruction model, canvas abstraction, errors
//! 2. **cutpath-designer** - Viewport, edit state machine, editor rendering, file schema
//! 3. **cutpath-visualizer** - Trace decoding, debug protocol, playback, viewer frames
//! 4. **cutpath-settings** - Persistent configuration
//! 5. **cutpath** - CLI binary, SVG backend and logging setup

pub mod app;
pub mod svg;

pub use cutpath_core::{
    Canvas, Color, DecodeError, DrawCommand, DrawList, Error, FixedClock, InputEvent,
    Instruction, InstructionSequence, Point2, Result, RobotProfile, ScreenPoint, ScreenSize,
    SurfaceContext, SystemClock, TimeSource,
};
pub use cutpath_designer::{
    render_editor, DesignerCommand, DesignerState, EditCanvas, EditorStyle, FilePicker,
    InstructionFile, PathPicker, Viewport,
};
pub use cutpath_settings::{Config, ConfigSource, EditorSettings, SettingsError, ViewerSettings};
pub use cutpath_visualizer::{
    PlaybackCommand, PlaybackController, SimulationTrace, ViewerOptions, Visualizer,
};

pub use app::{editor_style, remember_recent, replay_clock, viewer_options, FileSummary};
pub use svg::SvgCanvas;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so command results on stdout stay clean
/// - RUST_LOG environment variable support (default level `info`)
/// - Targets, thread ids and line numbers
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
