//! Editor draw pass.
//!
//! Produces one frame of the path editor as draw commands. Output is layered
//! back to front: background, cut preview, path nodes, text.

use cutpath_core::geometry::{sample, CubicBezier, LineSegment};
use cutpath_core::render::palette;
use cutpath_core::{
    BladeState, Canvas, Color, DrawList, Instruction, InstructionSequence, Point2, ScreenPoint,
};

use crate::canvas::{EditCanvas, EditorStyle};
use crate::viewport::Viewport;

/// Vertical offset of the distance readout below the blade status line.
const DIST_TEXT_Y: f64 = 30.0;
/// World offset of the "Origin" label from the origin handle.
const ORIGIN_LABEL_OFFSET: Point2 = Point2::new(0.15, -0.15);

/// Renders the editor view of `sequence` onto `target`.
///
/// `blade_radius` is the cut radius in meters used for the cut preview.
pub fn render_editor(
    target: &mut dyn Canvas,
    edit: &EditCanvas,
    sequence: &InstructionSequence,
    blade_radius: f64,
) {
    let viewport = edit.viewport();
    let style = edit.style();
    let mut layers = Layers::default();

    let selected_index = sequence.selected_index();
    let mut blade = BladeState::Off;

    for (index, instruction) in sequence.iter().enumerate() {
        let is_selected = Some(index) == selected_index;
        if blade.is_on() && style.show_cut_preview {
            draw_cut_preview(&mut layers.cut, viewport, style, instruction, blade_radius);
        }

        if is_selected {
            draw_selected(&mut layers, viewport, style, sequence, instruction);
        } else {
            let color = if blade.is_on() {
                palette::BLADE_ON
            } else {
                palette::BLADE_OFF
            };
            draw_instruction(&mut layers.nodes, viewport, style, instruction, color);
        }

        if let Some(state) = instruction.blade_state() {
            blade = state;
        }
    }

    if sequence.is_empty() {
        layers.nodes.circle(
            viewport.world_to_screen(Point2::ORIGIN),
            style.selected_radius,
            palette::SELECTED,
        );
        layers.text.text(
            viewport.world_to_screen(ORIGIN_LABEL_OFFSET),
            "Origin",
            palette::FOREGROUND,
            None,
        );
    }

    layers
        .text
        .text(ScreenPoint::new(0.0, 0.0), &blade.to_string(), palette::FOREGROUND, None);

    let size = viewport.size();
    target.fill_rect(ScreenPoint::default(), size, palette::BACKGROUND);
    layers.cut.replay(target);
    layers.nodes.replay(target);
    layers.text.replay(target);
}

#[derive(Default)]
struct Layers {
    cut: DrawList,
    nodes: DrawList,
    text: DrawList,
}

fn draw_cut_preview(
    layer: &mut DrawList,
    viewport: &Viewport,
    style: &EditorStyle,
    instruction: &Instruction,
    blade_radius: f64,
) {
    let radius = viewport.to_pixels(blade_radius);
    match *instruction {
        Instruction::MoveLine { start, end } => {
            let line = LineSegment::new(start, end);
            stamp_cut(layer, viewport, sample(style.cut_samples, |t| line.point_on(t)), radius);
        }
        Instruction::MoveCurve { p0, p1, p2, p3 } => {
            let curve = CubicBezier::new(p0, p1, p2, p3);
            stamp_cut(layer, viewport, sample(style.cut_samples, |t| curve.point_on(t)), radius);
        }
        Instruction::BladeOn | Instruction::BladeOff => {}
    }
}

fn stamp_cut(
    layer: &mut DrawList,
    viewport: &Viewport,
    points: impl Iterator<Item = Point2>,
    radius: f64,
) {
    for p in points {
        layer.circle(viewport.world_to_screen(p), radius, palette::CUT);
    }
}

fn draw_polyline(
    layer: &mut DrawList,
    viewport: &Viewport,
    points: impl Iterator<Item = Point2>,
    width: f64,
    color: Color,
) {
    let mut previous: Option<ScreenPoint> = None;
    for p in points {
        let current = viewport.world_to_screen(p);
        if let Some(prev) = previous {
            layer.segment(prev, current, width, color);
        }
        previous = Some(current);
    }
}

fn draw_instruction(
    layer: &mut DrawList,
    viewport: &Viewport,
    style: &EditorStyle,
    instruction: &Instruction,
    color: Color,
) {
    match instruction {
        Instruction::MoveLine { start, end } => {
            layer.segment(
                viewport.world_to_screen(*end),
                viewport.world_to_screen(*start),
                style.line_width,
                color,
            );
            for p in [start, end] {
                layer.circle(viewport.world_to_screen(*p), style.point_radius, color);
            }
        }
        Instruction::MoveCurve { p0, p1, p2, p3 } => {
            let curve = CubicBezier::new(*p0, *p1, *p2, *p3);
            let points = sample(style.bezier_steps, |t| curve.point_on(t));
            draw_polyline(layer, viewport, points, style.line_width, color);
            layer.circle(viewport.world_to_screen(*p3), style.point_radius, color);
        }
        Instruction::BladeOn | Instruction::BladeOff => {}
    }
}

fn draw_selected(
    layers: &mut Layers,
    viewport: &Viewport,
    style: &EditorStyle,
    sequence: &InstructionSequence,
    instruction: &Instruction,
) {
    let color = palette::SELECTED;
    match instruction {
        Instruction::MoveLine { start, end } => {
            layers.nodes.segment(
                viewport.world_to_screen(*end),
                viewport.world_to_screen(*start),
                style.line_width,
                color,
            );
            layers
                .nodes
                .circle(viewport.world_to_screen(*start), style.point_radius, color);
            layers
                .nodes
                .circle(viewport.world_to_screen(*end), style.selected_radius, color);
        }
        Instruction::MoveCurve { p0, p1, p2, p3 } => {
            let curve = CubicBezier::new(*p0, *p1, *p2, *p3);
            let points = sample(style.bezier_steps, |t| curve.point_on(t));
            draw_polyline(&mut layers.nodes, viewport, points, style.line_width, color);
            let handle_width = (style.line_width / 2.0).round();
            for (a, b) in [(p0, p1), (p2, p3)] {
                layers.nodes.segment(
                    viewport.world_to_screen(*a),
                    viewport.world_to_screen(*b),
                    handle_width,
                    color,
                );
            }
            for p in [p1, p2, p3] {
                layers
                    .nodes
                    .circle(viewport.world_to_screen(*p), style.selected_radius, color);
            }
        }
        Instruction::BladeOn | Instruction::BladeOff => {
            layers.nodes.circle(
                viewport.world_to_screen(sequence.effective_end_point()),
                style.selected_radius,
                color,
            );
        }
    }

    if let Some(distance) = instruction.chord_length() {
        layers.text.text(
            ScreenPoint::new(0.0, DIST_TEXT_Y),
            &format_distance(distance),
            palette::FOREGROUND,
            None,
        );
    }
}

/// `Dist: d` with `d` rounded to millimeters.
pub fn format_distance(distance: f64) -> String {
    format!("Dist: {}", (distance * 1000.0).round() / 1000.0)
}
