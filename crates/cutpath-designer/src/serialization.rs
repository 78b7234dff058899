//! Serialization and deserialization for instruction files.
//!
//! An instruction file is the simulation engine's input record: the robot
//! profile, a run length and the instruction list. Each instruction is the
//! bare tag `"BladeOn"` / `"BladeOff"` or a single-key object
//! `{"Line": {...}}` / `{"CubicBezier": {...}}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use cutpath_core::{
    DecodeError, DurationRepr, Instruction, InstructionSequence, Point2, Result, RobotProfile,
};

const TAG_LINE: &str = "Line";
const TAG_CURVE: &str = "CubicBezier";
const TAG_BLADE_ON: &str = "BladeOn";
const TAG_BLADE_OFF: &str = "BladeOff";

/// Serialized instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InstructionData {
    Line {
        start: Point2,
        end: Point2,
    },
    CubicBezier {
        p0: Point2,
        p1: Point2,
        p2: Point2,
        p3: Point2,
    },
    BladeOn,
    BladeOff,
}

impl From<&Instruction> for InstructionData {
    fn from(instruction: &Instruction) -> Self {
        match *instruction {
            Instruction::MoveLine { start, end } => InstructionData::Line { start, end },
            Instruction::MoveCurve { p0, p1, p2, p3 } => {
                InstructionData::CubicBezier { p0, p1, p2, p3 }
            }
            Instruction::BladeOn => InstructionData::BladeOn,
            Instruction::BladeOff => InstructionData::BladeOff,
        }
    }
}

impl From<InstructionData> for Instruction {
    fn from(data: InstructionData) -> Self {
        match data {
            InstructionData::Line { start, end } => Instruction::MoveLine { start, end },
            InstructionData::CubicBezier { p0, p1, p2, p3 } => {
                Instruction::MoveCurve { p0, p1, p2, p3 }
            }
            InstructionData::BladeOn => Instruction::BladeOn,
            InstructionData::BladeOff => Instruction::BladeOff,
        }
    }
}

impl InstructionData {
    /// Decodes one instruction, keyed on its tag rather than field order.
    pub fn decode(index: usize, value: &Value) -> std::result::Result<Self, DecodeError> {
        let (tag, payload) = match value {
            Value::String(tag) => (tag.as_str(), None),
            Value::Object(map) if map.len() == 1 => match map.iter().next() {
                Some((tag, payload)) => (tag.as_str(), Some(payload)),
                None => return Err(malformed(index, "empty object")),
            },
            Value::Object(map) => {
                return Err(malformed(
                    index,
                    format!("expected a single tag, found {} keys", map.len()),
                ))
            }
            other => return Err(malformed(index, format!("unexpected value {}", other))),
        };

        match (tag, payload) {
            (TAG_BLADE_ON, _) => Ok(InstructionData::BladeOn),
            (TAG_BLADE_OFF, _) => Ok(InstructionData::BladeOff),
            (TAG_LINE, Some(payload)) => {
                let line: LinePayload = serde_json::from_value(payload.clone())
                    .map_err(|e| malformed(index, e.to_string()))?;
                Ok(InstructionData::Line {
                    start: line.start,
                    end: line.end,
                })
            }
            (TAG_CURVE, Some(payload)) => {
                let curve: CurvePayload = serde_json::from_value(payload.clone())
                    .map_err(|e| malformed(index, e.to_string()))?;
                Ok(InstructionData::CubicBezier {
                    p0: curve.p0,
                    p1: curve.p1,
                    p2: curve.p2,
                    p3: curve.p3,
                })
            }
            (TAG_LINE | TAG_CURVE, None) => Err(malformed(index, format!("{} has no payload", tag))),
            (unknown, _) => Err(DecodeError::UnknownInstruction {
                index,
                tag: unknown.to_string(),
            }),
        }
    }
}

#[derive(Deserialize)]
struct LinePayload {
    start: Point2,
    end: Point2,
}

#[derive(Deserialize)]
struct CurvePayload {
    p0: Point2,
    p1: Point2,
    p2: Point2,
    p3: Point2,
}

fn malformed(index: usize, reason: impl Into<String>) -> DecodeError {
    DecodeError::MalformedInstruction {
        index,
        reason: reason.into(),
    }
}

/// How long the engine should simulate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum SimLength {
    /// Until the instructions run out.
    #[default]
    Indefinite,
    Timed(DurationRepr),
    Steps(usize),
}

/// Complete instruction file structure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstructionFile {
    pub instructions: Vec<InstructionData>,
    pub sim_length: SimLength,
    pub delta_time: DurationRepr,
    pub wheel_distance: f64,
    pub wheel_radius: f64,
    pub max_motor_speed: f64,
    pub blade_radius: f64,
}

/// On-disk shape before instructions are decoded one by one.
#[derive(Deserialize)]
struct RawInstructionFile {
    #[serde(default)]
    instructions: Vec<Value>,
    #[serde(default)]
    sim_length: SimLength,
    #[serde(default = "default_delta_time")]
    delta_time: DurationRepr,
    #[serde(default = "default_wheel_distance")]
    wheel_distance: f64,
    #[serde(default = "default_wheel_radius")]
    wheel_radius: f64,
    #[serde(default = "default_max_motor_speed")]
    max_motor_speed: f64,
    #[serde(default = "default_blade_radius")]
    blade_radius: f64,
}

fn default_delta_time() -> DurationRepr {
    RobotProfile::default().delta_time.into()
}
fn default_wheel_distance() -> f64 {
    RobotProfile::default().wheel_distance
}
fn default_wheel_radius() -> f64 {
    RobotProfile::default().wheel_radius
}
fn default_max_motor_speed() -> f64 {
    RobotProfile::default().max_motor_speed
}
fn default_blade_radius() -> f64 {
    RobotProfile::default().blade_radius
}

impl InstructionFile {
    /// Builds the file for a sequence and robot profile.
    pub fn new(sequence: &InstructionSequence, robot: &RobotProfile) -> Self {
        Self {
            instructions: sequence.iter().map(InstructionData::from).collect(),
            sim_length: SimLength::Indefinite,
            delta_time: robot.delta_time.into(),
            wheel_distance: robot.wheel_distance,
            wheel_radius: robot.wheel_radius,
            max_motor_speed: robot.max_motor_speed,
            blade_radius: robot.blade_radius,
        }
    }

    /// Parses a file from JSON. Any unknown or malformed instruction rejects
    /// the whole file.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawInstructionFile = serde_json::from_str(json)?;
        let instructions = raw
            .instructions
            .iter()
            .enumerate()
            .map(|(index, value)| InstructionData::decode(index, value))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        // Validate up front so a bad step never reaches the model.
        raw.delta_time.to_step()?;

        Ok(Self {
            instructions,
            sim_length: raw.sim_length,
            delta_time: raw.delta_time,
            wheel_distance: raw.wheel_distance,
            wheel_radius: raw.wheel_radius,
            max_motor_speed: raw.max_motor_speed,
            blade_radius: raw.blade_radius,
        })
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            cutpath_core::Error::Decode(DecodeError::MalformedInstruction {
                index: 0,
                reason: format!("file is not UTF-8: {}", e),
            })
        })?;
        Self::from_json(text)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The instruction list as a model sequence.
    pub fn to_sequence(&self) -> InstructionSequence {
        self.instructions
            .iter()
            .cloned()
            .map(Instruction::from)
            .collect()
    }

    /// The robot profile carried by the file.
    pub fn robot_profile(&self) -> Result<RobotProfile> {
        Ok(RobotProfile {
            wheel_distance: self.wheel_distance,
            wheel_radius: self.wheel_radius,
            max_motor_speed: self.max_motor_speed,
            blade_radius: self.blade_radius,
            delta_time: self.delta_time.to_step()?,
        })
    }

    /// Save to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path.as_ref(), json)?;
        debug!(
            "Wrote {} instructions to {}",
            self.instructions.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Load from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }
}

/// Encodes a sequence with a robot profile to JSON.
pub fn encode(sequence: &InstructionSequence, robot: &RobotProfile) -> Result<String> {
    InstructionFile::new(sequence, robot).to_json()
}

/// Decodes JSON into a sequence and robot profile.
pub fn decode(json: &str) -> Result<(InstructionSequence, RobotProfile)> {
    let file = InstructionFile::from_json(json)?;
    let robot = file.robot_profile()?;
    Ok((file.to_sequence(), robot))
}
