use std::time::Duration;

use cutpath_core::constants::{DEFAULT_PAN_SPEED, DEFAULT_ZOOM_RATE};
use cutpath_core::{InputEvent, Point2, PointerButton, ScreenSize};
use cutpath_designer::Viewport;

/// Held-key camera movement, applied once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Pan by a fraction of the viewport width per second. `dx`/`dy` are
    /// direction factors in screen orientation (+x right, +y down).
    Pan { dx: f64, dy: f64 },
    /// Zoom in (`direction > 0`) or out (`direction < 0`).
    Zoom { direction: f64 },
}

/// 2D viewer camera: a viewport plus keyboard and pointer-drag controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    viewport: Viewport,
    drag_anchor: Option<Point2>,
    pub pan_speed: f64,
    pub zoom_rate: f64,
}

impl Camera {
    pub fn new(size: ScreenSize, scale: f64) -> Self {
        Self {
            viewport: Viewport::new(size, scale),
            drag_anchor: None,
            pan_speed: DEFAULT_PAN_SPEED,
            zoom_rate: DEFAULT_ZOOM_RATE,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Applies a held-key command for `dt` of wall time.
    pub fn apply(&mut self, command: CameraCommand, dt: Duration) {
        let dt = dt.as_secs_f64();
        match command {
            CameraCommand::Pan { dx, dy } => {
                // Both axes move by a fraction of the viewport width.
                let distance = self.viewport.size().width * self.pan_speed * dt
                    / self.viewport.scale();
                self.viewport.pan_by(dx * distance, -dy * distance);
            }
            CameraCommand::Zoom { direction } => {
                self.viewport.zoom_by(self.zoom_rate.powf(direction * dt));
            }
        }
    }

    /// Drag-to-pan with the primary button; keeps the grabbed world point
    /// under the pointer. Returns whether the camera or surface changed.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown {
                pos,
                button: PointerButton::Primary,
            } => {
                self.drag_anchor = Some(self.viewport.screen_to_world(pos));
                false
            }
            InputEvent::PointerMove { pos } => match self.drag_anchor {
                Some(anchor) => {
                    self.viewport.pan_to_anchor(anchor, pos);
                    true
                }
                None => false,
            },
            InputEvent::PointerUp {
                button: PointerButton::Primary,
                ..
            } => {
                self.drag_anchor = None;
                false
            }
            InputEvent::Resize { size } => {
                self.viewport.set_size(size);
                true
            }
            _ => false,
        }
    }
}
