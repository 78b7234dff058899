//! Viewport and coordinate transformation for editor and viewer surfaces.
//!
//! Handles conversion between pixel coordinates (screen space) and world
//! coordinates (meters). The camera position is the world point shown at the
//! center of the surface.

use std::fmt;
use tracing::warn;

use cutpath_core::constants::{DEFAULT_EDITOR_SCALE, MAX_SCALE, MIN_SCALE};
use cutpath_core::{Point2, ScreenPoint, ScreenSize};

/// Camera position, zoom and surface size.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    camera: Point2,
    scale: f64,
    size: ScreenSize,
    min_scale: f64,
    max_scale: f64,
}

impl Viewport {
    /// Creates a viewport centered on the world origin.
    pub fn new(size: ScreenSize, scale: f64) -> Self {
        let mut viewport = Self {
            camera: Point2::ORIGIN,
            scale: DEFAULT_EDITOR_SCALE,
            size,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
        };
        viewport.set_scale(scale);
        if viewport.scale != scale {
            warn!(
                "Viewport scale {} outside {}..={}, using {}",
                scale, MIN_SCALE, MAX_SCALE, viewport.scale
            );
        }
        viewport
    }

    /// Gets the world point at the center of the surface.
    pub fn camera(&self) -> Point2 {
        self.camera
    }

    pub fn set_camera(&mut self, camera: Point2) {
        self.camera = camera;
    }

    /// Gets the zoom in pixels per meter.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the zoom. Non-positive or non-finite values are ignored; others
    /// are clamped to the zoom limits.
    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() && scale > 0.0 {
            self.scale = scale.clamp(self.min_scale, self.max_scale);
        }
    }

    /// Sets the zoom limits and re-clamps the current zoom.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        if min_scale > 0.0 && min_scale <= max_scale {
            self.min_scale = min_scale;
            self.max_scale = max_scale;
            self.scale = self.scale.clamp(min_scale, max_scale);
        }
    }

    pub fn scale_limits(&self) -> (f64, f64) {
        (self.min_scale, self.max_scale)
    }

    /// Multiplies the zoom by `factor`, keeping the camera fixed.
    pub fn zoom_by(&mut self, factor: f64) {
        self.set_scale(self.scale * factor);
    }

    pub fn size(&self) -> ScreenSize {
        self.size
    }

    /// Sets the surface size (typically called when the window resizes).
    /// Only the center terms of the transform change; zoom is kept.
    pub fn set_size(&mut self, size: ScreenSize) {
        self.size = size;
    }

    /// Moves the camera by a world-space offset.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.camera = self.camera + Point2::new(dx, dy);
    }

    /// Moves the camera so that the world point under `pointer` is `anchor`.
    pub fn pan_to_anchor(&mut self, anchor: Point2, pointer: ScreenPoint) {
        let center = self.size.center();
        self.camera = Point2::new(
            anchor.x - (pointer.x - center.x) / self.scale,
            anchor.y - (pointer.y - center.y) / -self.scale,
        );
    }

    /// Converts world coordinates to pixel coordinates.
    ///
    /// ```text
    /// sx = (x - cam.x) * scale + width / 2
    /// sy = -(y - cam.y) * scale + height / 2
    /// ```
    pub fn world_to_screen(&self, p: Point2) -> ScreenPoint {
        let center = self.size.center();
        ScreenPoint::new(
            (p.x - self.camera.x) * self.scale + center.x,
            -(p.y - self.camera.y) * self.scale + center.y,
        )
    }

    /// Converts pixel coordinates to world coordinates. Exact inverse of
    /// [`Viewport::world_to_screen`] up to rounding.
    pub fn screen_to_world(&self, p: ScreenPoint) -> Point2 {
        let center = self.size.center();
        Point2::new(
            (p.x - center.x) / self.scale + self.camera.x,
            (p.y - center.y) / -self.scale + self.camera.y,
        )
    }

    /// Converts a world-space length to pixels.
    pub fn to_pixels(&self, meters: f64) -> f64 {
        meters * self.scale
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ScreenSize::new(1280.0, 800.0), DEFAULT_EDITOR_SCALE)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Viewport(camera: {}, scale: {:.1}px/m, size: {})",
            self.camera, self.scale, self.size
        )
    }
}
