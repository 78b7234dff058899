use cutpath_core::{
    BladeState, InputEvent, Instruction, PointerButton, ScreenPoint, SurfaceContext,
};
use cutpath_designer::commands::DesignerCommand;
use cutpath_designer::designer_state::{CommandOutcome, DesignerState, PathPicker};

#[test]
fn test_designer_state_creation() {
    let state = DesignerState::new(&SurfaceContext::new(1280.0, 800.0), 100.0);
    assert!(state.sequence.is_empty());
    assert!(!state.is_modified);
    assert_eq!(state.canvas.viewport().scale(), 100.0);
}

#[test]
fn test_execute_edit_commands() {
    let mut state = DesignerState::default();
    let mut picker = PathPicker::cancelled();

    for command in [
        DesignerCommand::BladeOn,
        DesignerCommand::AddCurve,
        DesignerCommand::BladeOff,
        DesignerCommand::AddLine,
    ] {
        assert_eq!(
            state.execute(command, &mut picker).unwrap(),
            CommandOutcome::Applied
        );
    }

    assert_eq!(state.sequence.len(), 4);
    assert!(state.is_modified);
    assert_eq!(state.sequence.get(0), Some(&Instruction::BladeOn));
    assert_eq!(state.sequence.blade_state(), BladeState::Off);
    assert_eq!(state.sequence.blade_state_before(2), BladeState::On);
}

#[test]
fn test_pop_on_empty_is_no_change() {
    let mut state = DesignerState::default();
    let outcome = state
        .execute(DesignerCommand::PopInstruction, &mut PathPicker::cancelled())
        .unwrap();
    assert_eq!(outcome, CommandOutcome::NoChange);
    assert!(!state.is_modified);
}

#[test]
fn test_cancelled_file_commands() {
    let mut state = DesignerState::default();
    state
        .execute(DesignerCommand::AddLine, &mut PathPicker::cancelled())
        .unwrap();
    let before = state.sequence.clone();

    let mut picker = PathPicker::cancelled();
    assert_eq!(
        state.execute(DesignerCommand::Import, &mut picker).unwrap(),
        CommandOutcome::Cancelled
    );
    assert_eq!(
        state.execute(DesignerCommand::Export, &mut picker).unwrap(),
        CommandOutcome::Cancelled
    );
    assert_eq!(state.sequence, before);
}

#[test]
fn test_vertex_drag_marks_modified() {
    let mut state = DesignerState::new(&SurfaceContext::new(800.0, 600.0), 100.0);
    state.sequence.append_line();
    assert!(!state.is_modified);

    state.handle_event(&InputEvent::PointerDown {
        pos: ScreenPoint::new(450.0, 250.0),
        button: PointerButton::Primary,
    });
    state.handle_event(&InputEvent::PointerMove {
        pos: ScreenPoint::new(460.0, 260.0),
    });
    assert!(state.is_modified);
}

#[test]
fn test_new_path_clears() {
    let mut state = DesignerState::default();
    state.sequence.append_line();
    state.mark_modified();
    state.new_path();
    assert!(state.sequence.is_empty());
    assert!(!state.is_modified);
}
