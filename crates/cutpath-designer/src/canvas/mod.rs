//! Edit surface: turns pointer events into camera pans and vertex drags.
//!
//! Only the selected (last) instruction can be grabbed. For a line only the
//! end point is draggable; for a curve p1, p2 and p3 are, tested in that
//! order. A press that misses every vertex starts a background pan.

mod types;

pub use types::{DragState, EditOutcome, EditorStyle};

use cutpath_core::{
    InputEvent, Instruction, InstructionSequence, Point2, ScreenPoint, SurfaceContext,
};
use tracing::trace;

use crate::viewport::Viewport;

/// Editor canvas state: viewport, current drag and pixel style.
#[derive(Debug, Clone)]
pub struct EditCanvas {
    viewport: Viewport,
    drag: DragState,
    style: EditorStyle,
}

impl EditCanvas {
    /// Creates an edit canvas for a surface at the given zoom.
    pub fn new(context: &SurfaceContext, scale: f64) -> Self {
        Self::with_style(context, scale, EditorStyle::for_scale(scale))
    }

    pub fn with_style(context: &SurfaceContext, scale: f64, style: EditorStyle) -> Self {
        Self {
            viewport: Viewport::new(context.size, scale),
            drag: DragState::Idle,
            style,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn style(&self) -> &EditorStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: EditorStyle) {
        self.style = style;
    }

    /// Returns the index of the selected instruction's vertex under `pos`.
    pub fn hit_test(&self, sequence: &InstructionSequence, pos: ScreenPoint) -> Option<usize> {
        let selected = sequence.selected()?;
        let pick_sq = self.style.pick_radius * self.style.pick_radius;

        let candidates: &[usize] = match selected {
            Instruction::MoveLine { .. } => &[1],
            Instruction::MoveCurve { .. } => &[1, 2, 3],
            Instruction::BladeOn | Instruction::BladeOff => &[],
        };

        candidates.iter().copied().find(|&index| {
            selected
                .vertex(index)
                .map(|v| self.viewport.world_to_screen(v).distance_squared(&pos) < pick_sq)
                .unwrap_or(false)
        })
    }

    /// Applies one input event, mutating the sequence for vertex drags.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        sequence: &mut InstructionSequence,
    ) -> EditOutcome {
        match *event {
            InputEvent::PointerDown { pos, .. } => {
                self.drag = match self.hit_test(sequence, pos) {
                    Some(index) => DragState::DraggingVertex(index),
                    None => DragState::DraggingBackground {
                        anchor: self.viewport.screen_to_world(pos),
                    },
                };
                trace!("Drag started: {:?}", self.drag);
                EditOutcome::DragStarted(self.drag)
            }
            InputEvent::PointerUp { .. } => {
                let was_dragging = !self.drag.is_idle();
                self.drag = DragState::Idle;
                if was_dragging {
                    EditOutcome::Released
                } else {
                    EditOutcome::Ignored
                }
            }
            InputEvent::PointerMove { pos } => match self.drag {
                DragState::Idle => EditOutcome::Ignored,
                DragState::DraggingBackground { anchor } => {
                    self.viewport.pan_to_anchor(anchor, pos);
                    EditOutcome::CameraMoved {
                        camera: self.viewport.camera(),
                    }
                }
                DragState::DraggingVertex(index) => {
                    let world = self.viewport.screen_to_world(pos);
                    if sequence.update_point(index, world) {
                        EditOutcome::VertexMoved { index, pos: world }
                    } else {
                        EditOutcome::Ignored
                    }
                }
            },
            InputEvent::Resize { size } => {
                self.viewport.set_size(size);
                EditOutcome::Resized
            }
        }
    }

    /// World position under a screen point.
    pub fn world_at(&self, pos: ScreenPoint) -> Point2 {
        self.viewport.screen_to_world(pos)
    }
}

impl Default for EditCanvas {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            drag: DragState::Idle,
            style: EditorStyle::default(),
        }
    }
}
