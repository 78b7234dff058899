//! Canvas type definitions: DragState, EditOutcome, EditorStyle.

use cutpath_core::constants::{DEFAULT_BEZIER_STEPS, DEFAULT_CUT_SAMPLES, DEFAULT_EDITOR_SCALE};
use cutpath_core::Point2;

/// What the pointer is doing between a press and a release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Panning; `anchor` is the world point that stays under the pointer.
    DraggingBackground { anchor: Point2 },
    /// Moving one vertex of the selected instruction.
    DraggingVertex(usize),
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }
}

/// Effect of one input event on the editor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditOutcome {
    /// Nothing changed.
    Ignored,
    /// A drag started.
    DragStarted(DragState),
    /// The camera moved.
    CameraMoved { camera: Point2 },
    /// A vertex of the selected instruction moved.
    VertexMoved { index: usize, pos: Point2 },
    /// The drag ended.
    Released,
    /// The surface was resized.
    Resized,
}

/// Pixel sizes and sampling counts for the editor draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorStyle {
    pub line_width: f64,
    pub point_radius: f64,
    pub selected_radius: f64,
    /// Screen-space radius within which a press grabs a vertex.
    pub pick_radius: f64,
    pub bezier_steps: usize,
    pub cut_samples: usize,
    pub show_cut_preview: bool,
}

impl EditorStyle {
    /// Sizes derived from the zoom, rounded to whole pixels.
    pub fn for_scale(scale: f64) -> Self {
        let point_radius = (scale / 15.0).round();
        Self {
            line_width: (scale / 18.0).round(),
            point_radius,
            selected_radius: (scale / 8.0).round(),
            pick_radius: point_radius,
            bezier_steps: DEFAULT_BEZIER_STEPS,
            cut_samples: DEFAULT_CUT_SAMPLES,
            show_cut_preview: true,
        }
    }
}

impl Default for EditorStyle {
    fn default() -> Self {
        Self::for_scale(DEFAULT_EDITOR_SCALE)
    }
}
