//! Designer state manager.
//!
//! Owns the instruction sequence, the edit canvas and the robot profile, and
//! dispatches [`DesignerCommand`]s. File access goes through an injected
//! [`FilePicker`], so the state itself does no I/O of its own choosing.
//!
//! - `file_io`: import, export and the picker implementations

mod file_io;

pub use file_io::{FilePicker, PathPicker};

#[cfg(feature = "dialogs")]
pub use file_io::DialogPicker;

use cutpath_core::{Canvas, InputEvent, InstructionSequence, RobotProfile, SurfaceContext};
use tracing::debug;

use crate::canvas::{EditCanvas, EditOutcome, EditorStyle};
use crate::commands::DesignerCommand;
use crate::renderer::render_editor;

/// Result of executing a designer command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The sequence changed.
    Applied,
    /// The command had nothing to act on.
    NoChange,
    /// A file dialog was dismissed.
    Cancelled,
}

/// Designer state for UI integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub sequence: InstructionSequence,
    pub canvas: EditCanvas,
    pub robot: RobotProfile,
    pub is_modified: bool,
}

impl DesignerState {
    /// Creates an empty designer for a surface.
    pub fn new(context: &SurfaceContext, scale: f64) -> Self {
        Self {
            sequence: InstructionSequence::new(),
            canvas: EditCanvas::new(context, scale),
            robot: RobotProfile::default(),
            is_modified: false,
        }
    }

    pub fn with_style(context: &SurfaceContext, scale: f64, style: EditorStyle) -> Self {
        Self {
            canvas: EditCanvas::with_style(context, scale, style),
            ..Self::new(context, scale)
        }
    }

    pub fn with_robot(mut self, robot: RobotProfile) -> Self {
        self.robot = robot;
        self
    }

    /// Executes a command. Only `Import` and `Export` can fail.
    pub fn execute(
        &mut self,
        command: DesignerCommand,
        picker: &mut dyn FilePicker,
    ) -> anyhow::Result<CommandOutcome> {
        debug!("Designer command: {}", command);
        let outcome = match command {
            DesignerCommand::AddLine => {
                self.sequence.append_line();
                CommandOutcome::Applied
            }
            DesignerCommand::AddCurve => {
                self.sequence.append_curve();
                CommandOutcome::Applied
            }
            DesignerCommand::BladeOn => {
                self.sequence.append_blade_on();
                CommandOutcome::Applied
            }
            DesignerCommand::BladeOff => {
                self.sequence.append_blade_off();
                CommandOutcome::Applied
            }
            DesignerCommand::PopInstruction => match self.sequence.remove_last() {
                Some(_) => CommandOutcome::Applied,
                None => CommandOutcome::NoChange,
            },
            DesignerCommand::Import => return self.import(picker),
            DesignerCommand::Export => return self.export(picker),
        };

        if outcome == CommandOutcome::Applied {
            self.mark_modified();
        }
        Ok(outcome)
    }

    /// Forwards a pointer or resize event to the edit canvas.
    pub fn handle_event(&mut self, event: &InputEvent) -> EditOutcome {
        let outcome = self.canvas.handle_event(event, &mut self.sequence);
        if matches!(outcome, EditOutcome::VertexMoved { .. }) {
            self.mark_modified();
        }
        outcome
    }

    /// Draws the current editor frame.
    pub fn render(&self, target: &mut dyn Canvas) {
        render_editor(target, &self.canvas, &self.sequence, self.robot.blade_radius);
    }

    /// Mark design as modified.
    pub fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    /// Clears the sequence.
    pub fn new_path(&mut self) {
        self.sequence = InstructionSequence::new();
        self.is_modified = false;
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self {
            sequence: InstructionSequence::new(),
            canvas: EditCanvas::default(),
            robot: RobotProfile::default(),
            is_modified: false,
        }
    }
}
