//! Shared constants.

/// Per-axis offset of a newly appended line's end from its start (meters).
pub const LINE_DEFAULT_OFFSET: f64 = 0.5;

/// Per-axis unit offset used to shape a newly appended curve (meters).
pub const CURVE_DEFAULT_OFFSET: f64 = 0.25;

/// Editor zoom in pixels per meter.
pub const DEFAULT_EDITOR_SCALE: f64 = 100.0;

/// Hard zoom bounds for any viewport in pixels per meter. Configured zoom
/// levels and limits must fall inside them.
pub const MIN_SCALE: f64 = 1.0;
pub const MAX_SCALE: f64 = 10_000.0;

/// Viewer zoom in pixels per meter (window height / 10).
pub const DEFAULT_VIEWER_SCALE: f64 = 96.0;

/// Segments used when drawing a cubic curve.
pub const DEFAULT_BEZIER_STEPS: usize = 50;

/// Blade circles drawn along a move in the cut preview (plus one).
pub const DEFAULT_CUT_SAMPLES: usize = 100;

/// Wall-clock delta above which a playback tick is dropped (seconds).
pub const DEFAULT_LAG_THRESHOLD_SECS: f64 = 1.0;

/// Bounds for playback step skip.
pub const MIN_STEP_SKIP: u32 = 1;
pub const MAX_STEP_SKIP: u32 = 100;

/// Step skip change for a coarse adjustment.
pub const COARSE_SKIP_STEP: u32 = 10;

/// Slack added before flooring `timer / step` into a frame index.
pub const INDEX_EPSILON: f64 = 1e-9;

/// Maximum number of entries kept in the recent-files list.
pub const MAX_RECENT_FILES: usize = 10;

/// Viewer camera pan speed in viewport widths per second.
pub const DEFAULT_PAN_SPEED: f64 = 0.5;

/// Viewer zoom factor per second of held zoom.
pub const DEFAULT_ZOOM_RATE: f64 = 2.0;

/// Viewer zoom limits in pixels per meter.
pub const DEFAULT_VIEWER_MIN_SCALE: f64 = 8.0;
pub const DEFAULT_VIEWER_MAX_SCALE: f64 = 2000.0;
