//! Viewer draw pass.
//!
//! Layer order: background, accumulated cut marks, robot sprite, the
//! displayed state's debug renderables, then the text overlay.

use cutpath_core::{Canvas, Color, ScreenPoint};

use super::visualizer::Visualizer;
use crate::debug::Renderable;

pub const BACKGROUND: Color = Color::rgb(0, 0, 0);
pub const CUT_MARK: Color = Color::rgb(48, 49, 31);
pub const OVERLAY_TEXT: Color = Color::rgb(0, 0, 0);
pub const OVERLAY_BACKGROUND: Color = Color::rgb(255, 255, 255);

/// Gap around and between overlay lines, in pixels.
pub const OVERLAY_PADDING: f64 = 5.0;

/// Draws one viewer frame.
pub fn render_frame(target: &mut dyn Canvas, visualizer: &Visualizer) {
    let viewport = visualizer.camera().viewport();
    let robot = visualizer.trace().robot();

    target.fill_rect(ScreenPoint::default(), viewport.size(), BACKGROUND);

    let blade_px = viewport.to_pixels(robot.blade_radius);
    for mark in visualizer.cut_marks() {
        target.circle(viewport.world_to_screen(mark), blade_px, CUT_MARK);
    }

    if let Some(state) = visualizer.current_state() {
        let size = viewport.to_pixels(robot.wheel_distance);
        // World headings are counter-clockwise; screen Y points down.
        target.sprite(
            viewport.world_to_screen(state.pose.position()),
            -state.pose.theta,
            size,
            size,
        );

        for renderable in &state.debug.renderables {
            match renderable {
                Renderable::Circle {
                    center,
                    radius,
                    color,
                } => target.circle(
                    viewport.world_to_screen(*center),
                    viewport.to_pixels(*radius),
                    *color,
                ),
                Renderable::Segment {
                    p1,
                    p2,
                    width,
                    color,
                } => target.segment(
                    viewport.world_to_screen(*p1),
                    viewport.world_to_screen(*p2),
                    viewport.to_pixels(*width),
                    *color,
                ),
            }
        }
    }

    let line_height = (viewport.size().height / 40.0).floor();
    let mut y = OVERLAY_PADDING;
    for line in visualizer.overlay_messages() {
        target.text(
            ScreenPoint::new(OVERLAY_PADDING, y),
            &line,
            OVERLAY_TEXT,
            Some(OVERLAY_BACKGROUND),
        );
        y += line_height + OVERLAY_PADDING;
    }
}
