use crate::{
    geometry::Pose2d,
    kinematics::{ChassisSpeeds, DifferentialDriveKinematics},
    Error,
};

use super::{MinMax, TrajectoryConstraint};

#[cfg(test)]
#[path = "differential_drive_kinematics_constraint_tests.rs"]
mod differential_drive_kinematics_constraint_tests;

/// Limits the chassis velocity so that neither side of a differential drive exceeds a maximum
/// wheel speed.
///
/// In a turn the outer wheels travel faster than the chassis, so the chassis velocity must be
/// reduced to keep the outer wheels below the limit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifferentialDriveKinematicsConstraint {
    kinematics: DifferentialDriveKinematics,
    max_speed: f64,
}

impl DifferentialDriveKinematicsConstraint {
    /// Creates a new constraint.
    ///
    /// ## Parameters
    ///
    /// * `kinematics` - The kinematics of the drive.
    /// * `max_speed` - The maximum speed of each side of the drive in meters per second.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if the maximum speed is not a positive number.
    pub fn new(kinematics: DifferentialDriveKinematics, max_speed: f64) -> Result<Self, Error> {
        if !(max_speed > 0.0) {
            return Err(Error::InvalidParameter {
                name: "max_speed",
                value: max_speed,
            });
        }

        Ok(Self {
            kinematics,
            max_speed,
        })
    }
}

impl TrajectoryConstraint for DifferentialDriveKinematicsConstraint {
    fn max_velocity(&self, _pose: &Pose2d, curvature: f64, velocity: f64) -> f64 {
        let mut wheel_speeds = self
            .kinematics
            .to_wheel_speeds(&ChassisSpeeds::new(velocity, 0.0, velocity * curvature));
        wheel_speeds.desaturate(self.max_speed);

        self.kinematics.to_chassis_speeds(&wheel_speeds).vx
    }

    fn min_max_acceleration(&self, _pose: &Pose2d, _curvature: f64, _speed: f64) -> MinMax {
        MinMax::default()
    }
}
