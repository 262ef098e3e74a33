use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "differential_drive_wheel_speeds_tests.rs"]
mod differential_drive_wheel_speeds_tests;

/// Defines the linear velocities of the left and right side of a differential drive.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DifferentialDriveWheelSpeeds {
    /// The velocity of the left wheels in meters per second.
    pub left: f64,

    /// The velocity of the right wheels in meters per second.
    pub right: f64,
}

impl DifferentialDriveWheelSpeeds {
    /// Scales both wheel speeds down by the same factor so that neither exceeds
    /// `attainable_max_speed`.
    ///
    /// Scaling both wheels by the same factor keeps the ratio between the wheel speeds, and
    /// thus the curvature of the motion, intact.
    ///
    /// ## Example
    ///
    /// ```
    /// use robot_motion::kinematics::DifferentialDriveWheelSpeeds;
    ///
    /// let mut speeds = DifferentialDriveWheelSpeeds::new(2.0, 4.0);
    /// speeds.desaturate(2.0);
    /// assert_eq!(speeds, DifferentialDriveWheelSpeeds::new(1.0, 2.0));
    /// ```
    pub fn desaturate(&mut self, attainable_max_speed: f64) {
        let real_max_speed = self.left.abs().max(self.right.abs());
        if real_max_speed > attainable_max_speed {
            self.left = self.left / real_max_speed * attainable_max_speed;
            self.right = self.right / real_max_speed * attainable_max_speed;
        }
    }

    /// Creates a new set of wheel speeds.
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }
}
