use cutpath_core::{DecodeError, Error, InstructionSequence, Point2, RobotProfile};
use cutpath_designer::serialization::{decode, encode, InstructionFile, SimLength};
use std::time::Duration;
use tempfile::TempDir;

fn round_trip(seq: &InstructionSequence) -> InstructionSequence {
    let json = encode(seq, &RobotProfile::default()).unwrap();
    let (back, robot) = decode(&json).unwrap();
    assert_eq!(robot, RobotProfile::default());
    back
}

#[test]
fn test_round_trip_empty() {
    let seq = InstructionSequence::new();
    assert_eq!(round_trip(&seq), seq);
}

#[test]
fn test_round_trip_single_line() {
    let mut seq = InstructionSequence::new();
    seq.append_line();
    assert_eq!(round_trip(&seq), seq);
}

#[test]
fn test_round_trip_mixed() {
    let mut seq = InstructionSequence::new();
    seq.append_blade_on();
    seq.append_curve();
    seq.append_blade_off();
    seq.append_line();
    seq.update_point(1, Point2::new(-2.125, 3.5));
    assert_eq!(round_trip(&seq), seq);
}

#[test]
fn test_export_schema() {
    let mut seq = InstructionSequence::new();
    seq.append_blade_on();
    seq.append_line();
    let json = encode(&seq, &RobotProfile::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["sim_length"], "Indefinite");
    assert_eq!(value["delta_time"]["secs"], 0);
    assert_eq!(value["delta_time"]["nanos"], 10_000_000);
    assert_eq!(value["instructions"][0], "BladeOn");
    assert_eq!(value["instructions"][1]["Line"]["end"][0], 0.5);
    assert_eq!(value["wheel_distance"], 0.5);
    assert_eq!(value["blade_radius"], 0.15);
}

#[test]
fn test_decode_engine_input() {
    let json = r#"{
        "instructions": [
            "BladeOn",
            {"CubicBezier": {"p3": [1.0, 0.0], "p0": [0.0, 0.0], "p1": [0.3, 0.3], "p2": [0.6, -0.3]}},
            "BladeOff"
        ],
        "sim_length": {"Timed": {"secs": 30, "nanos": 0}},
        "delta_time": {"secs": 0, "nanos": 20000000},
        "wheel_distance": 0.4,
        "wheel_radius": 0.1,
        "max_motor_speed": 20.0,
        "blade_radius": 0.2
    }"#;
    let file = InstructionFile::from_json(json).unwrap();
    assert_eq!(file.instructions.len(), 3);
    assert!(matches!(file.sim_length, SimLength::Timed(d) if d.secs == 30));

    let robot = file.robot_profile().unwrap();
    assert_eq!(robot.delta_time, Duration::from_millis(20));
    assert!((robot.wheel_distance - 0.4).abs() < 0.01);
}

#[test]
fn test_decode_missing_profile_uses_defaults() {
    let (seq, robot) = decode(r#"{"instructions": ["BladeOff"]}"#).unwrap();
    assert_eq!(seq.len(), 1);
    assert_eq!(robot, RobotProfile::default());
}

#[test]
fn test_decode_rejects_unknown_instruction() {
    let json = r#"{"instructions": ["BladeOn", {"GotoPoint": {"target": [1, 1]}}]}"#;
    match decode(json) {
        Err(Error::Decode(DecodeError::UnknownInstruction { index, tag })) => {
            assert_eq!(index, 1);
            assert_eq!(tag, "GotoPoint");
        }
        other => panic!("expected unknown instruction error, got {:?}", other),
    }
}

#[test]
fn test_decode_rejects_zero_step() {
    let json = r#"{"instructions": [], "delta_time": {"secs": 0, "nanos": 0}}"#;
    assert!(matches!(
        decode(json),
        Err(Error::Decode(DecodeError::InvalidDuration { .. }))
    ));
}

#[test]
fn test_decode_rejects_bad_json() {
    let err = decode("{not json").unwrap_err();
    assert!(err.is_decode_error());
}

#[test]
fn test_save_and_load_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("path.json");

    let mut seq = InstructionSequence::new();
    seq.append_curve();
    seq.append_blade_on();
    let file = InstructionFile::new(&seq, &RobotProfile::default());
    file.save_to_file(&path).unwrap();

    let loaded = InstructionFile::load_from_file(&path).unwrap();
    assert_eq!(loaded, file);
    assert_eq!(loaded.to_sequence(), seq);
}
