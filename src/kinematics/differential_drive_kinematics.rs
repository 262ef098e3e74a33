use crate::{geometry::Twist2d, Error};

use super::{ChassisSpeeds, DifferentialDriveWheelSpeeds};

#[cfg(test)]
#[path = "differential_drive_kinematics_tests.rs"]
mod differential_drive_kinematics_tests;

/// Converts between the velocity of a differential drive chassis and the velocities of its
/// left and right wheels.
///
/// A differential drive has two sets of wheels, one on each side of the robot, and steers by
/// driving the sides at different speeds. The only parameter that matters for the conversion is
/// the track width, i.e. the distance between the left and right wheels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifferentialDriveKinematics {
    /// The distance between the left and right wheels in meters.
    track_width: f64,
}

impl DifferentialDriveKinematics {
    /// Creates a new kinematics model.
    ///
    /// ## Parameters
    ///
    /// * `track_width` - The distance between the left and right wheels in meters.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if the track width is not a positive, finite number.
    pub fn new(track_width: f64) -> Result<Self, Error> {
        if !(track_width.is_finite() && track_width > 0.0) {
            return Err(Error::InvalidParameter {
                name: "track_width",
                value: track_width,
            });
        }

        Ok(Self { track_width })
    }

    /// Returns the chassis velocity for the given wheel velocities.
    ///
    /// ## Example
    ///
    /// ```
    /// use robot_motion::kinematics::{DifferentialDriveKinematics, DifferentialDriveWheelSpeeds};
    ///
    /// let kinematics = DifferentialDriveKinematics::new(0.5).unwrap();
    /// let chassis = kinematics.to_chassis_speeds(&DifferentialDriveWheelSpeeds::new(1.0, 2.0));
    /// assert_eq!(chassis.vx, 1.5);
    /// assert_eq!(chassis.vy, 0.0);
    /// assert_eq!(chassis.omega, 2.0);
    /// ```
    pub fn to_chassis_speeds(&self, wheel_speeds: &DifferentialDriveWheelSpeeds) -> ChassisSpeeds {
        ChassisSpeeds::new(
            (wheel_speeds.left + wheel_speeds.right) / 2.0,
            0.0,
            (wheel_speeds.right - wheel_speeds.left) / self.track_width,
        )
    }

    /// Returns the twist of the chassis for the given changes in wheel distance.
    ///
    /// ## Parameters
    ///
    /// * `left_distance` - The distance travelled by the left wheels in meters.
    /// * `right_distance` - The distance travelled by the right wheels in meters.
    pub fn to_twist2d(&self, left_distance: f64, right_distance: f64) -> Twist2d {
        Twist2d::new(
            (left_distance + right_distance) / 2.0,
            0.0,
            (right_distance - left_distance) / self.track_width,
        )
    }

    /// Returns the wheel velocities for the given chassis velocity.
    ///
    /// The sideways velocity of the chassis is ignored since a differential drive can not move
    /// sideways.
    pub fn to_wheel_speeds(&self, chassis_speeds: &ChassisSpeeds) -> DifferentialDriveWheelSpeeds {
        let half_track = self.track_width / 2.0;
        DifferentialDriveWheelSpeeds::new(
            chassis_speeds.vx - half_track * chassis_speeds.omega,
            chassis_speeds.vx + half_track * chassis_speeds.omega,
        )
    }

    /// Returns the distance between the left and right wheels in meters.
    pub fn track_width(&self) -> f64 {
        self.track_width
    }
}
