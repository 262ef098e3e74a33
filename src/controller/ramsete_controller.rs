use crate::{
    geometry::{Pose2d, Transform2d},
    kinematics::ChassisSpeeds,
    trajectory::State,
    Error,
};

#[cfg(test)]
#[path = "ramsete_controller_tests.rs"]
mod ramsete_controller_tests;

/// The default convergence gain.
pub const DEFAULT_B: f64 = 2.0;

/// The default damping ratio.
pub const DEFAULT_ZETA: f64 = 0.7;

/// Defines a nonlinear path tracking controller for nonholonomic robots, e.g. differential
/// drives.
///
/// The controller adds a correction to the reference velocities that drives the robot back
/// onto the reference pose. The gain `b` controls how aggressively the error is corrected, the
/// damping ratio `zeta` how much the correction is damped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RamseteController {
    b: f64,
    zeta: f64,
    pose_error: Transform2d,
    pose_tolerance: Pose2d,
    enabled: bool,
}

impl RamseteController {
    /// Returns a value indicating whether the last pose error was within the tolerance.
    pub fn at_reference(&self) -> bool {
        let translation_tolerance = self.pose_tolerance.translation();
        let rotation_error = self.pose_error.rotation().radians();
        let rotation_tolerance = self.pose_tolerance.rotation().radians();

        self.pose_error.x().abs() < translation_tolerance.x().abs()
            && self.pose_error.y().abs() < translation_tolerance.y().abs()
            && rotation_error.abs() < rotation_tolerance.abs()
    }

    /// Returns the chassis velocity that moves the robot from the current pose toward the
    /// reference pose.
    ///
    /// ## Parameters
    ///
    /// * `current_pose` - The current pose of the robot.
    /// * `pose_ref` - The pose the robot should be at.
    /// * `linear_velocity_ref` - The reference linear velocity in meters per second.
    /// * `angular_velocity_ref` - The reference angular velocity in radians per second.
    pub fn calculate(
        &mut self,
        current_pose: &Pose2d,
        pose_ref: &Pose2d,
        linear_velocity_ref: f64,
        angular_velocity_ref: f64,
    ) -> ChassisSpeeds {
        if !self.enabled {
            return ChassisSpeeds::new(linear_velocity_ref, 0.0, angular_velocity_ref);
        }

        self.pose_error = pose_ref.relative_to(current_pose);

        let e_x = self.pose_error.x();
        let e_y = self.pose_error.y();
        let e_theta = self.pose_error.rotation().radians();
        let v_ref = linear_velocity_ref;
        let omega_ref = angular_velocity_ref;

        let k = 2.0 * self.zeta * (omega_ref * omega_ref + self.b * v_ref * v_ref).sqrt();

        ChassisSpeeds::new(
            v_ref * e_theta.cos() + k * e_x,
            0.0,
            omega_ref + k * e_theta + self.b * v_ref * sinc(e_theta) * e_y,
        )
    }

    /// Returns the chassis velocity that moves the robot toward the given trajectory state.
    ///
    /// The reference angular velocity is the product of the velocity and the curvature of the
    /// state.
    pub fn calculate_for_state(&mut self, current_pose: &Pose2d, desired_state: &State) -> ChassisSpeeds {
        self.calculate(
            current_pose,
            &desired_state.pose,
            desired_state.velocity,
            desired_state.velocity * desired_state.curvature,
        )
    }

    /// Creates a new controller.
    ///
    /// ## Parameters
    ///
    /// * `b` - The convergence gain, larger values correct errors faster. Must be positive.
    /// * `zeta` - The damping ratio, must be between 0 and 1.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if `b` is not positive or `zeta` is not inside (0, 1).
    pub fn new(b: f64, zeta: f64) -> Result<Self, Error> {
        if !(b > 0.0 && b.is_finite()) {
            return Err(Error::InvalidParameter { name: "b", value: b });
        }

        if !(zeta > 0.0 && zeta < 1.0) {
            return Err(Error::InvalidParameter {
                name: "zeta",
                value: zeta,
            });
        }

        Ok(Self {
            b,
            zeta,
            pose_error: Transform2d::default(),
            pose_tolerance: Pose2d::default(),
            enabled: true,
        })
    }

    /// Enables or disables the controller. A disabled controller passes the reference
    /// velocities through unchanged.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Sets the tolerance used by [RamseteController::at_reference()].
    pub fn set_tolerance(&mut self, pose_tolerance: Pose2d) {
        self.pose_tolerance = pose_tolerance;
    }
}

impl Default for RamseteController {
    fn default() -> Self {
        Self {
            b: DEFAULT_B,
            zeta: DEFAULT_ZETA,
            pose_error: Transform2d::default(),
            pose_tolerance: Pose2d::default(),
            enabled: true,
        }
    }
}

/// Returns sin(x) / x, with the limit of 1 at zero.
fn sinc(x: f64) -> f64 {
    if x.abs() < 1e-9 {
        1.0 - x * x / 6.0
    } else {
        x.sin() / x
    }
}
