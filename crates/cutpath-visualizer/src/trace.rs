//! Simulation trace decoding.
//!
//! A trace is the engine's output record: per-step robot poses with debug
//! annotations, a fixed step duration and the robot's physical constants.
//! Traces are loaded once and never mutated.

use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use cutpath_core::{DecodeError, DurationRepr, Point2, Result, RobotProfile};

use crate::debug::DebugFrame;

/// Robot position and heading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    /// Radians, counter-clockwise from +X.
    pub theta: f64,
}

impl Pose {
    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// One recorded simulation step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimState {
    pub pose: Pose,
    pub blade_on: bool,
    pub debug: DebugFrame,
}

#[derive(Deserialize)]
struct RawState {
    robot_x: f64,
    robot_y: f64,
    robot_theta: f64,
    #[serde(default)]
    blade_on: bool,
    #[serde(default)]
    debug: Value,
}

impl From<RawState> for SimState {
    fn from(raw: RawState) -> Self {
        Self {
            pose: Pose {
                x: raw.robot_x,
                y: raw.robot_y,
                theta: raw.robot_theta,
            },
            blade_on: raw.blade_on,
            debug: DebugFrame::decode(&raw.debug),
        }
    }
}

#[derive(Deserialize)]
struct RawTrace {
    #[serde(alias = "steps")]
    states: Option<Vec<RawState>>,
    delta_time: Option<DurationRepr>,
    #[serde(default)]
    wheel_distance: Option<f64>,
    #[serde(default)]
    wheel_radius: Option<f64>,
    #[serde(default)]
    max_motor_speed: Option<f64>,
    #[serde(default)]
    blade_radius: Option<f64>,
}

/// A decoded simulation trace.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationTrace {
    states: Vec<SimState>,
    robot: RobotProfile,
}

impl SimulationTrace {
    /// Builds a trace from already-decoded states.
    pub fn new(states: Vec<SimState>, robot: RobotProfile) -> Self {
        Self { states, robot }
    }

    /// Parses a trace from JSON.
    ///
    /// `states` and `delta_time` are required (`steps` is accepted for
    /// `states`). Missing robot constants fall back to the default profile.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawTrace = serde_json::from_str(json)?;

        let states = raw.states.ok_or_else(|| DecodeError::MissingField {
            field: "states".to_string(),
        })?;
        let step = raw
            .delta_time
            .ok_or_else(|| DecodeError::MissingField {
                field: "delta_time".to_string(),
            })?
            .to_step()?;

        let defaults = RobotProfile::default();
        let robot = RobotProfile {
            wheel_distance: raw.wheel_distance.unwrap_or(defaults.wheel_distance),
            wheel_radius: raw.wheel_radius.unwrap_or(defaults.wheel_radius),
            max_motor_speed: raw.max_motor_speed.unwrap_or(defaults.max_motor_speed),
            blade_radius: raw.blade_radius.unwrap_or(defaults.blade_radius),
            delta_time: step,
        };

        let states: Vec<SimState> = states.into_iter().map(SimState::from).collect();
        debug!(
            "Decoded trace: {} states, step {:?}",
            states.len(),
            robot.delta_time
        );
        Ok(Self { states, robot })
    }

    /// Load from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let trace = Self::from_json(&content)?;
        info!(
            "Loaded trace {} ({} states)",
            path.as_ref().display(),
            trace.len()
        );
        Ok(trace)
    }

    pub fn states(&self) -> &[SimState] {
        &self.states
    }

    pub fn get(&self, index: usize) -> Option<&SimState> {
        self.states.get(index)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn robot(&self) -> &RobotProfile {
        &self.robot
    }

    pub fn step_duration(&self) -> Duration {
        self.robot.delta_time
    }

    /// Simulated time covered by the trace, saturating at `Duration::MAX`.
    pub fn duration(&self) -> Duration {
        u32::try_from(self.states.len())
            .ok()
            .and_then(|count| self.robot.delta_time.checked_mul(count))
            .unwrap_or(Duration::MAX)
    }

    /// Number of states recorded with the blade on.
    pub fn blade_on_count(&self) -> usize {
        self.states.iter().filter(|s| s.blade_on).count()
    }
}
