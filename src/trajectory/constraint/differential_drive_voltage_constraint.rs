use crate::{
    controller::SimpleMotorFeedforward,
    geometry::Pose2d,
    kinematics::{ChassisSpeeds, DifferentialDriveKinematics},
    Error,
};

use super::{MinMax, TrajectoryConstraint};

#[cfg(test)]
#[path = "differential_drive_voltage_constraint_tests.rs"]
mod differential_drive_voltage_constraint_tests;

/// Limits the acceleration of a differential drive so that the feedforward voltage of each side
/// never exceeds the available voltage.
///
/// The feedforward model describes the voltage needed by one side of the drive, including the
/// back EMF that grows with the wheel speed. At higher speeds less voltage is left for
/// accelerating, so the acceleration limits shrink as the robot speeds up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifferentialDriveVoltageConstraint {
    feedforward: SimpleMotorFeedforward,
    kinematics: DifferentialDriveKinematics,
    max_voltage: f64,
}

impl DifferentialDriveVoltageConstraint {
    /// Creates a new constraint.
    ///
    /// ## Parameters
    ///
    /// * `feedforward` - The feedforward model of one side of the drive.
    /// * `kinematics` - The kinematics of the drive.
    /// * `max_voltage` - The maximum voltage available to each side, e.g. 10 volts to leave room
    ///   for the feedback controllers.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if the maximum voltage is not a positive number or if
    /// the feedforward has no acceleration gain.
    pub fn new(
        feedforward: SimpleMotorFeedforward,
        kinematics: DifferentialDriveKinematics,
        max_voltage: f64,
    ) -> Result<Self, Error> {
        if !(max_voltage > 0.0) {
            return Err(Error::InvalidParameter {
                name: "max_voltage",
                value: max_voltage,
            });
        }

        if !(feedforward.ka() > 0.0) {
            return Err(Error::InvalidParameter {
                name: "ka",
                value: feedforward.ka(),
            });
        }

        Ok(Self {
            feedforward,
            kinematics,
            max_voltage,
        })
    }
}

impl TrajectoryConstraint for DifferentialDriveVoltageConstraint {
    fn max_velocity(&self, _pose: &Pose2d, _curvature: f64, _velocity: f64) -> f64 {
        f64::INFINITY
    }

    fn min_max_acceleration(&self, _pose: &Pose2d, curvature: f64, speed: f64) -> MinMax {
        let wheel_speeds = self
            .kinematics
            .to_wheel_speeds(&ChassisSpeeds::new(speed, 0.0, speed * curvature));

        let max_wheel_speed = wheel_speeds.left.max(wheel_speeds.right);
        let min_wheel_speed = wheel_speeds.left.min(wheel_speeds.right);

        let max_wheel_acceleration = self
            .feedforward
            .max_achievable_acceleration(self.max_voltage, max_wheel_speed);
        let min_wheel_acceleration = self
            .feedforward
            .min_achievable_acceleration(self.max_voltage, min_wheel_speed);

        // The chassis turns on a radius of 1 / |k|. The wheel on the outside of the turn runs on
        // radius + T / 2 and the inner wheel on radius - T / 2, which gives
        // a_chassis = a_wheel / (1 +- |k| * T / 2).
        let half_track_curvature = self.kinematics.track_width() * curvature.abs() / 2.0;

        let (mut max_chassis_acceleration, mut min_chassis_acceleration) = if speed == 0.0 {
            // The wheels are not moving so neither wheel is on the outside of the turn. Both
            // limits are reduced in magnitude.
            (
                max_wheel_acceleration / (1.0 + half_track_curvature),
                min_wheel_acceleration / (1.0 + half_track_curvature),
            )
        } else {
            // Driving forward the maximum acceleration is limited by the outer wheel, driving
            // backward by the inner wheel.
            let direction = speed.signum();
            (
                max_wheel_acceleration / (1.0 + half_track_curvature * direction),
                min_wheel_acceleration / (1.0 - half_track_curvature * direction),
            )
        };

        // When turning around a point between the wheels the inner wheel runs backward and the
        // sign of its limit flips.
        if self.kinematics.track_width() / 2.0 > 1.0 / curvature.abs() {
            if speed > 0.0 {
                min_chassis_acceleration = -min_chassis_acceleration;
            } else if speed < 0.0 {
                max_chassis_acceleration = -max_chassis_acceleration;
            }
        }

        MinMax::new(min_chassis_acceleration, max_chassis_acceleration)
    }
}
