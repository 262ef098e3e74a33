use crate::{geometry::Pose2d, Error};

use super::{MinMax, TrajectoryConstraint};

#[cfg(test)]
#[path = "centripetal_acceleration_constraint_tests.rs"]
mod centripetal_acceleration_constraint_tests;

/// Limits the velocity in turns so that the centripetal acceleration stays below a maximum.
///
/// The centripetal acceleration of a robot following a path with curvature `k` at velocity `v`
/// is `v^2 * k`. Limiting it keeps the robot from tipping over or sliding in tight turns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CentripetalAccelerationConstraint {
    max_centripetal_acceleration: f64,
}

impl CentripetalAccelerationConstraint {
    /// Creates a new constraint.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if the maximum acceleration is not a positive number.
    pub fn new(max_centripetal_acceleration: f64) -> Result<Self, Error> {
        if !(max_centripetal_acceleration > 0.0) {
            return Err(Error::InvalidParameter {
                name: "max_centripetal_acceleration",
                value: max_centripetal_acceleration,
            });
        }

        Ok(Self {
            max_centripetal_acceleration,
        })
    }
}

impl TrajectoryConstraint for CentripetalAccelerationConstraint {
    fn max_velocity(&self, _pose: &Pose2d, curvature: f64, _velocity: f64) -> f64 {
        // a = v^2 * k  =>  v = sqrt(a / k)
        (self.max_centripetal_acceleration / curvature.abs()).sqrt()
    }

    fn min_max_acceleration(&self, _pose: &Pose2d, _curvature: f64, _speed: f64) -> MinMax {
        MinMax::default()
    }
}
