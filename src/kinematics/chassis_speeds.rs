use serde::{Deserialize, Serialize};

use crate::geometry::{Rotation2d, Translation2d};

#[cfg(test)]
#[path = "chassis_speeds_tests.rs"]
mod chassis_speeds_tests;

/// Defines the velocity of a robot chassis, expressed in the frame of the robot.
///
/// The x axis points forward, the y axis points to the left. A differential drive can not move
/// sideways so for those robots `vy` is always zero.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ChassisSpeeds {
    /// The forward velocity in meters per second.
    pub vx: f64,

    /// The sideways velocity in meters per second.
    pub vy: f64,

    /// The angular velocity in radians per second, counter clockwise positive.
    pub omega: f64,
}

impl ChassisSpeeds {
    /// Converts a velocity that is expressed relative to the field into a velocity relative to
    /// the robot.
    ///
    /// ## Parameters
    ///
    /// * `vx` - The velocity along the field x axis in meters per second.
    /// * `vy` - The velocity along the field y axis in meters per second.
    /// * `omega` - The angular velocity in radians per second.
    /// * `robot_angle` - The heading of the robot relative to the field.
    pub fn from_field_relative_speeds(
        vx: f64,
        vy: f64,
        omega: f64,
        robot_angle: &Rotation2d,
    ) -> Self {
        let robot_relative = Translation2d::new(vx, vy).rotate_by(&robot_angle.inverse());
        Self::new(robot_relative.x(), robot_relative.y(), omega)
    }

    /// Creates a new set of chassis speeds.
    pub fn new(vx: f64, vy: f64, omega: f64) -> Self {
        Self { vx, vy, omega }
    }
}
