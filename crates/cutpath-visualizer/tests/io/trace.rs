use cutpath_core::Error;
use cutpath_visualizer::SimulationTrace;
use std::io::Write;
use std::time::Duration;

const TRACE: &str = r#"{
    "wheel_distance": 0.6,
    "wheel_radius": 0.25,
    "max_motor_speed": 30.0,
    "blade_radius": 0.1,
    "delta_time": { "secs": 0, "nanos": 50000000 },
    "states": [
        { "robot_x": 0.0, "robot_y": 0.0, "robot_theta": 0.0, "blade_on": false,
          "debug": { "renderables": [], "messages": [] } },
        { "robot_x": 0.1, "robot_y": 0.0, "robot_theta": 0.5, "blade_on": true,
          "debug": {
            "renderables": ["Circle((1.0, 2.0), 0.3, (255, 0, 0))", "Polygon((0, 0))"],
            "messages": ["hello", 42]
          } }
    ]
}"#;

#[test]
fn test_decode_trace() {
    let trace = SimulationTrace::from_json(TRACE).unwrap();
    assert_eq!(trace.len(), 2);
    assert_eq!(trace.step_duration(), Duration::from_millis(50));
    assert_eq!(trace.duration(), Duration::from_millis(100));
    assert_eq!(trace.robot().wheel_distance, 0.6);
    assert_eq!(trace.robot().blade_radius, 0.1);
    assert_eq!(trace.blade_on_count(), 1);

    let second = trace.get(1).unwrap();
    assert_eq!(second.pose.theta, 0.5);
    assert!(second.blade_on);
}

#[test]
fn test_duration_saturates_on_huge_step() {
    let json = r#"{
        "delta_time": { "secs": 9000000000000000000, "nanos": 0 },
        "states": [
            { "robot_x": 0.0, "robot_y": 0.0, "robot_theta": 0.0 },
            { "robot_x": 0.0, "robot_y": 0.0, "robot_theta": 0.0 },
            { "robot_x": 0.0, "robot_y": 0.0, "robot_theta": 0.0 }
        ]
    }"#;
    let trace = SimulationTrace::from_json(json).unwrap();
    assert_eq!(trace.len(), 3);
    assert_eq!(trace.duration(), Duration::MAX);
}

#[test]
fn test_unknown_renderable_skipped() {
    let trace = SimulationTrace::from_json(TRACE).unwrap();
    let debug = &trace.get(1).unwrap().debug;
    assert_eq!(debug.renderables.len(), 1);
    assert_eq!(debug.messages, vec!["hello".to_string(), "42".to_string()]);
}

#[test]
fn test_steps_alias_and_missing_blade_on() {
    let json = r#"{
        "delta_time": { "secs": 0, "nanos": 10000000 },
        "steps": [ { "robot_x": 1.0, "robot_y": 2.0, "robot_theta": 0.0, "debug": null } ]
    }"#;
    let trace = SimulationTrace::from_json(json).unwrap();
    assert_eq!(trace.len(), 1);
    let state = trace.get(0).unwrap();
    assert!(!state.blade_on);
    assert!(state.debug.is_empty());
    assert_eq!(trace.robot().wheel_distance, 0.5);
}

#[test]
fn test_missing_states_rejected() {
    let err = SimulationTrace::from_json(r#"{ "delta_time": { "secs": 1, "nanos": 0 } }"#)
        .unwrap_err();
    assert!(err.is_decode_error());
    assert!(err.to_string().contains("states"));
}

#[test]
fn test_zero_step_rejected() {
    let json = r#"{ "delta_time": { "secs": 0, "nanos": 0 }, "states": [] }"#;
    let err = SimulationTrace::from_json(json).unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[test]
fn test_malformed_json_rejected() {
    assert!(SimulationTrace::from_json("{ not json").is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(TRACE.as_bytes()).unwrap();
    let trace = SimulationTrace::load_from_file(file.path()).unwrap();
    assert_eq!(trace.len(), 2);

    let missing = SimulationTrace::load_from_file(file.path().with_extension("missing"));
    assert!(missing.unwrap_err().is_io_error());
}
