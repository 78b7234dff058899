//! Robot physical profile shared by the instruction file and the trace file.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::DecodeError;

/// Duration as written by the simulation engine: `{ "secs": u64, "nanos": u32 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DurationRepr {
    pub secs: u64,
    pub nanos: u32,
}

impl DurationRepr {
    /// Converts to a non-zero step duration.
    pub fn to_step(self) -> Result<Duration, DecodeError> {
        if self.nanos >= 1_000_000_000 || (self.secs == 0 && self.nanos == 0) {
            return Err(DecodeError::InvalidDuration {
                secs: self.secs,
                nanos: self.nanos,
            });
        }
        Ok(Duration::new(self.secs, self.nanos))
    }
}

impl From<Duration> for DurationRepr {
    fn from(d: Duration) -> Self {
        Self {
            secs: d.as_secs(),
            nanos: d.subsec_nanos(),
        }
    }
}

/// Physical constants of the differential-drive robot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotProfile {
    /// Distance between the two drive wheels (meters).
    pub wheel_distance: f64,
    pub wheel_radius: f64,
    /// Radians per second.
    pub max_motor_speed: f64,
    /// Radius of the cut made by the blade (meters).
    pub blade_radius: f64,
    /// Simulated time between consecutive states.
    #[serde(with = "duration_serde")]
    pub delta_time: Duration,
}

impl Default for RobotProfile {
    fn default() -> Self {
        Self {
            wheel_distance: 0.5,
            wheel_radius: 0.2,
            max_motor_speed: 5.0 * std::f64::consts::TAU,
            blade_radius: 0.15,
            delta_time: Duration::from_millis(10),
        }
    }
}

impl RobotProfile {
    /// Step duration in seconds.
    pub fn step_secs(&self) -> f64 {
        self.delta_time.as_secs_f64()
    }
}

/// `{secs, nanos}` encoding for [`Duration`] fields.
pub mod duration_serde {
    use super::DurationRepr;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        DurationRepr::from(*d).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let repr = DurationRepr::deserialize(deserializer)?;
        repr.to_step().map_err(serde::de::Error::custom)
    }
}
