use log::trace;

use crate::geometry::{Pose2d, Rotation2d, Twist2d};

#[cfg(test)]
#[path = "differential_drive_odometry_tests.rs"]
mod differential_drive_odometry_tests;

/// Tracks the pose of a differential drive from the gyro heading and the distances travelled by
/// the left and right wheels.
///
/// The heading is taken from the gyro, which is far more accurate than the heading derived from
/// the wheel distances. The gyro does not have to read zero at the start, the offset between the
/// gyro angle and the robot heading is stored when the odometry is created or reset.
#[derive(Clone, Debug)]
pub struct DifferentialDriveOdometry {
    pose: Pose2d,
    gyro_offset: Rotation2d,
    previous_angle: Rotation2d,
    previous_left_distance: f64,
    previous_right_distance: f64,
}

impl DifferentialDriveOdometry {
    /// Creates a new odometry tracker.
    ///
    /// ## Parameters
    ///
    /// * `gyro_angle` - The current gyro reading.
    /// * `left_distance` - The current distance reading of the left encoder in meters.
    /// * `right_distance` - The current distance reading of the right encoder in meters.
    /// * `initial_pose` - The pose of the robot at the time of creation.
    pub fn new(
        gyro_angle: Rotation2d,
        left_distance: f64,
        right_distance: f64,
        initial_pose: Pose2d,
    ) -> Self {
        Self {
            pose: initial_pose,
            gyro_offset: initial_pose.rotation() - gyro_angle,
            previous_angle: initial_pose.rotation(),
            previous_left_distance: left_distance,
            previous_right_distance: right_distance,
        }
    }

    /// Returns the current estimated pose.
    pub fn pose(&self) -> Pose2d {
        self.pose
    }

    /// Resets the tracked pose.
    ///
    /// The gyro and encoders do not need to be reset, their current readings become the new
    /// reference.
    pub fn reset_position(
        &mut self,
        gyro_angle: Rotation2d,
        left_distance: f64,
        right_distance: f64,
        pose: Pose2d,
    ) {
        *self = Self::new(gyro_angle, left_distance, right_distance, pose);
    }

    /// Updates the pose from the latest sensor readings and returns the new pose.
    ///
    /// The motion between two updates is assumed to follow an arc of constant curvature.
    ///
    /// ## Parameters
    ///
    /// * `gyro_angle` - The current gyro reading.
    /// * `left_distance` - The total distance reading of the left encoder in meters.
    /// * `right_distance` - The total distance reading of the right encoder in meters.
    pub fn update(&mut self, gyro_angle: Rotation2d, left_distance: f64, right_distance: f64) -> Pose2d {
        let delta_left = left_distance - self.previous_left_distance;
        let delta_right = right_distance - self.previous_right_distance;

        self.previous_left_distance = left_distance;
        self.previous_right_distance = right_distance;

        let angle = gyro_angle + self.gyro_offset;
        let twist = Twist2d::new(
            (delta_left + delta_right) / 2.0,
            0.0,
            (angle - self.previous_angle).radians(),
        );

        let new_pose = self.pose.exp(&twist);
        self.previous_angle = angle;
        self.pose = Pose2d::new(new_pose.translation(), angle);

        trace!(
            "Odometry update. Twist: {:?}, pose: ({}, {}, {})",
            twist,
            self.pose.x(),
            self.pose.y(),
            self.pose.rotation().radians()
        );

        self.pose
    }
}
