use std::fmt::Debug;

use crate::geometry::Pose2d;

/// Defines the limit on the lateral acceleration in turns.
pub mod centripetal_acceleration_constraint;

/// Defines the limit on the wheel speeds of a differential drive.
pub mod differential_drive_kinematics_constraint;

/// Defines the limit on the acceleration of a differential drive due to the available voltage.
pub mod differential_drive_voltage_constraint;

pub use centripetal_acceleration_constraint::CentripetalAccelerationConstraint;
pub use differential_drive_kinematics_constraint::DifferentialDriveKinematicsConstraint;
pub use differential_drive_voltage_constraint::DifferentialDriveVoltageConstraint;

/// Defines the range of accelerations that is allowed at a point on a trajectory.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMax {
    /// The minimum acceleration in meters per second squared.
    pub min_acceleration: f64,

    /// The maximum acceleration in meters per second squared.
    pub max_acceleration: f64,
}

impl MinMax {
    /// Creates a new acceleration range.
    pub fn new(min_acceleration: f64, max_acceleration: f64) -> Self {
        Self {
            min_acceleration,
            max_acceleration,
        }
    }
}

impl Default for MinMax {
    /// Returns the unbounded acceleration range.
    fn default() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }
}

/// Defines the interface for limits that are applied while generating a trajectory.
///
/// Constraints are evaluated at every point along the path. The velocity profile at each point
/// is the most restrictive combination of the global limits of the
/// [TrajectoryConfig](super::TrajectoryConfig) and all the constraints.
pub trait TrajectoryConstraint: Debug {
    /// Returns the maximum velocity, in meters per second, at the given point of the path.
    ///
    /// ## Parameters
    ///
    /// * `pose` - The pose at the current point.
    /// * `curvature` - The curvature of the path at the current point.
    /// * `velocity` - The velocity that is allowed by the other limits.
    fn max_velocity(&self, pose: &Pose2d, curvature: f64, velocity: f64) -> f64;

    /// Returns the range of accelerations, in meters per second squared, at the given point of
    /// the path.
    ///
    /// ## Parameters
    ///
    /// * `pose` - The pose at the current point.
    /// * `curvature` - The curvature of the path at the current point.
    /// * `speed` - The signed speed at the current point. Negative for reversed trajectories.
    fn min_max_acceleration(&self, pose: &Pose2d, curvature: f64, speed: f64) -> MinMax;
}
