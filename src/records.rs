//! Field-named records for handing poses and trajectory states to front ends.
//!
//! Angles in the records are in radians.

use serde::{Deserialize, Serialize};

use crate::{
    geometry::{Pose2d, Rotation2d},
    trajectory::State,
};

#[cfg(test)]
#[path = "records_tests.rs"]
mod records_tests;

/// A pose as a flat record.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct PoseRecord {
    /// The x coordinate in meters.
    pub x: f64,

    /// The y coordinate in meters.
    pub y: f64,

    /// The heading in radians.
    pub rotation: f64,
}

impl From<&Pose2d> for PoseRecord {
    fn from(pose: &Pose2d) -> Self {
        Self {
            x: pose.x(),
            y: pose.y(),
            rotation: pose.rotation().radians(),
        }
    }
}

impl From<&PoseRecord> for Pose2d {
    fn from(record: &PoseRecord) -> Self {
        Pose2d::from_coordinates(record.x, record.y, Rotation2d::new(record.rotation))
    }
}

/// A sampled trajectory state as a flat record.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TrajectoryStateRecord {
    /// The time since the start of the trajectory in seconds.
    pub time: f64,

    /// The velocity in meters per second.
    pub velocity: f64,

    /// The acceleration in meters per second squared.
    pub acceleration: f64,

    /// The pose of the robot.
    pub pose: PoseRecord,
}

impl From<&State> for TrajectoryStateRecord {
    fn from(state: &State) -> Self {
        Self {
            time: state.time,
            velocity: state.velocity,
            acceleration: state.acceleration,
            pose: PoseRecord::from(&state.pose),
        }
    }
}
