//! # Cutpath Designer
//!
//! Interactive editor for robot tool paths. An operator appends lines,
//! curves and blade toggles, drags the control points of the newest
//! instruction, and exports the result as the simulation engine's input
//! file.
//!
//! ## Architecture
//!
//! ```text
//! DesignerState
//!   ├── InstructionSequence (model, from cutpath-core)
//!   ├── EditCanvas (drag state machine)
//!   │     └── Viewport (world <-> screen transform)
//!   ├── renderer (editor draw pass)
//!   └── FilePicker (injected import/export I/O)
//!         └── serialization (engine input schema)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cutpath_designer::{DesignerCommand, DesignerState, PathPicker};
//!
//! let mut state = DesignerState::default();
//! state.execute(DesignerCommand::AddLine, &mut PathPicker::cancelled())?;
//! state.save_to_file("path.json")?;
//! ```

pub mod canvas;
pub mod commands;
pub mod designer_state;
pub mod renderer;
pub mod serialization;
pub mod viewport;

pub use canvas::{DragState, EditCanvas, EditOutcome, EditorStyle};
pub use commands::DesignerCommand;
pub use designer_state::{CommandOutcome, DesignerState, FilePicker, PathPicker};
pub use renderer::render_editor;
pub use serialization::{InstructionData, InstructionFile, SimLength};
pub use viewport::Viewport;

#[cfg(feature = "dialogs")]
pub use designer_state::DialogPicker;
