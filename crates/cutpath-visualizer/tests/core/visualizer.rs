use cutpath_core::{
    Color, DrawCommand, DrawList, FixedClock, InputEvent, Point2, PointerButton, RobotProfile,
    ScreenPoint, ScreenSize, SurfaceContext,
};
use cutpath_visualizer::visualizer::frame_renderer::{CUT_MARK, OVERLAY_BACKGROUND};
use cutpath_visualizer::{
    CameraCommand, DebugFrame, PlaybackCommand, Pose, Renderable, SimState, SimulationTrace,
    TickOutcome, ViewerOptions, Visualizer,
};
use std::time::Duration;

fn state(x: f64, blade_on: bool) -> SimState {
    SimState {
        pose: Pose {
            x,
            y: 0.0,
            theta: 0.0,
        },
        blade_on,
        debug: DebugFrame::default(),
    }
}

fn robot() -> RobotProfile {
    RobotProfile {
        delta_time: Duration::from_millis(100),
        ..RobotProfile::default()
    }
}

fn viewer(states: Vec<SimState>) -> Visualizer {
    Visualizer::new(
        SimulationTrace::new(states, robot()),
        &SurfaceContext::new(1280.0, 960.0),
    )
}

fn blade_fold_viewer() -> Visualizer {
    viewer(vec![
        state(0.0, false),
        state(1.0, true),
        state(2.0, true),
        state(3.0, false),
    ])
}

#[test]
fn test_blade_fold_cut_marks() {
    let mut viewer = blade_fold_viewer();
    viewer.playback_mut().set_timer(0.3);
    assert_eq!(viewer.current_index(), 3);
    assert_eq!(
        viewer.cut_marks(),
        vec![Point2::new(1.0, 0.0), Point2::new(2.0, 0.0)]
    );
}

#[test]
fn test_cut_marks_include_displayed_state() {
    let mut viewer = blade_fold_viewer();
    viewer.playback_mut().set_timer(0.1);
    assert_eq!(viewer.cut_marks(), vec![Point2::new(1.0, 0.0)]);
    viewer.playback_mut().set_timer(0.0);
    assert!(viewer.cut_marks().is_empty());
}

#[test]
fn test_overlay_messages() {
    let mut states = vec![state(0.0, false), state(1.0, false)];
    states[1].debug.messages = vec!["target reached".to_string()];
    let mut viewer = viewer(states);

    assert_eq!(
        viewer.overlay_messages(),
        vec!["Time: 0.000".to_string(), "Frame 0/2 (frame skip 1)".to_string()]
    );

    viewer.apply(PlaybackCommand::StepForward);
    viewer.apply(PlaybackCommand::TogglePlayback);
    assert_eq!(
        viewer.overlay_messages(),
        vec![
            "Time: 0.100".to_string(),
            "Frame 1/2 (realtime)".to_string(),
            "target reached".to_string(),
        ]
    );
}

#[test]
fn test_tick_uses_time_source() {
    let mut viewer = viewer((0..10).map(|i| state(i as f64, false)).collect());
    viewer.apply(PlaybackCommand::TogglePlayback);
    let mut clock = FixedClock::new(Duration::from_millis(100));
    for _ in 0..3 {
        assert_eq!(viewer.tick(&mut clock), TickOutcome::Updated);
    }
    assert_eq!(viewer.current_index(), 3);
}

#[test]
fn test_empty_trace_renders_overlay_only() {
    let mut viewer = viewer(Vec::new());
    viewer.apply(PlaybackCommand::TogglePlayback);
    viewer.advance(Duration::from_millis(16));
    assert!(viewer.playback().is_paused());
    assert!(viewer.current_state().is_none());

    let mut list = DrawList::new();
    viewer.render(&mut list);
    assert!(!list
        .commands()
        .iter()
        .any(|c| matches!(c, DrawCommand::Sprite { .. } | DrawCommand::Circle { .. })));
    assert_eq!(list.texts().next(), Some("Time: 0.000"));
}

#[test]
fn test_render_layer_order() {
    let mut states = vec![state(0.0, true), state(0.5, true)];
    states[1].debug.renderables = vec![Renderable::Segment {
        p1: Point2::new(0.0, 0.0),
        p2: Point2::new(1.0, 0.0),
        width: 0.05,
        color: Color::rgb(255, 0, 0),
    }];
    let mut viewer = viewer(states);
    viewer.apply(PlaybackCommand::StepForward);

    let mut list = DrawList::new();
    viewer.render(&mut list);
    let commands = list.commands();

    assert!(matches!(commands[0], DrawCommand::FillRect { .. }));
    let cut_marks: Vec<_> = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Circle { color, .. } if *color == CUT_MARK))
        .collect();
    assert_eq!(cut_marks.len(), 2);
    match cut_marks[0] {
        // 0.15 m blade at 96 px/m.
        DrawCommand::Circle { radius, .. } => assert!((radius - 14.4).abs() < 0.01),
        _ => unreachable!(),
    }

    let sprite_at = commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Sprite { .. }))
        .unwrap();
    let segment_at = commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Segment { .. }))
        .unwrap();
    let text_at = commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Text { .. }))
        .unwrap();
    assert!(sprite_at > 2 && sprite_at < segment_at && segment_at < text_at);

    match &commands[sprite_at] {
        DrawCommand::Sprite {
            center,
            length,
            width,
            ..
        } => {
            assert!((center.x - 688.0).abs() < 0.01);
            assert!((center.y - 480.0).abs() < 0.01);
            assert!((length - 48.0).abs() < 0.01);
            assert!((width - 48.0).abs() < 0.01);
        }
        _ => unreachable!(),
    }
    match &commands[segment_at] {
        DrawCommand::Segment { width, .. } => assert!((width - 4.8).abs() < 0.01),
        _ => unreachable!(),
    }
}

#[test]
fn test_overlay_text_style() {
    let viewer = viewer(vec![state(0.0, false)]);
    let mut list = DrawList::new();
    viewer.render(&mut list);
    let texts: Vec<_> = list
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text {
                pos, background, ..
            } => Some((*pos, *background)),
            _ => None,
        })
        .collect();
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0].0, ScreenPoint::new(5.0, 5.0));
    // 960 / 40 = 24 px lines plus padding.
    assert_eq!(texts[1].0, ScreenPoint::new(5.0, 34.0));
    assert_eq!(texts[0].1, Some(OVERLAY_BACKGROUND));
}

#[test]
fn test_camera_drag_pans() {
    let mut viewer = viewer(vec![state(0.0, false)]);
    viewer.handle_event(&InputEvent::PointerDown {
        pos: ScreenPoint::new(640.0, 480.0),
        button: PointerButton::Primary,
    });
    assert!(viewer.handle_event(&InputEvent::PointerMove {
        pos: ScreenPoint::new(736.0, 480.0),
    }));
    viewer.handle_event(&InputEvent::PointerUp {
        pos: ScreenPoint::new(736.0, 480.0),
        button: PointerButton::Primary,
    });
    let camera = viewer.camera().viewport().camera();
    assert!((camera.x + 1.0).abs() < 1e-9);
    assert!(camera.y.abs() < 1e-9);
    assert!(!viewer.camera().is_dragging());
}

#[test]
fn test_zoom_respects_viewer_limits() {
    let mut viewer = Visualizer::with_options(
        SimulationTrace::new(vec![state(0.0, false)], robot()),
        &SurfaceContext::new(1280.0, 960.0),
        &ViewerOptions::default(),
    );
    for _ in 0..20 {
        viewer.apply_camera(CameraCommand::Zoom { direction: 1.0 }, Duration::from_secs(1));
    }
    assert_eq!(viewer.camera().viewport().scale(), 2000.0);
    for _ in 0..40 {
        viewer.apply_camera(CameraCommand::Zoom { direction: -1.0 }, Duration::from_secs(1));
    }
    assert_eq!(viewer.camera().viewport().scale(), 8.0);
}

#[test]
fn test_resize_keeps_scale() {
    let mut viewer = viewer(vec![state(0.0, false)]);
    viewer.handle_event(&InputEvent::Resize {
        size: ScreenSize::new(640.0, 480.0),
    });
    assert_eq!(viewer.camera().viewport().size(), ScreenSize::new(640.0, 480.0));
    assert_eq!(viewer.camera().viewport().scale(), 96.0);
}
