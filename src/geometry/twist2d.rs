use std::ops::Mul;

/// Defines a change in pose along an arc, expressed in the frame of the starting pose.
///
/// A twist describes how far a robot travelled forward (`dx`), sideways (`dy`) and how far it
/// turned (`dtheta`) while following an arc of constant curvature. It is used by
/// [Pose2d::exp()](super::Pose2d::exp) and [Pose2d::log()](super::Pose2d::log).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Twist2d {
    /// The linear change along the x axis in meters.
    pub dx: f64,

    /// The linear change along the y axis in meters.
    pub dy: f64,

    /// The angular change in radians.
    pub dtheta: f64,
}

impl Twist2d {
    /// Creates a new twist.
    pub fn new(dx: f64, dy: f64, dtheta: f64) -> Self {
        Self { dx, dy, dtheta }
    }
}

impl Mul<f64> for Twist2d {
    type Output = Twist2d;

    fn mul(self, rhs: f64) -> Self::Output {
        Twist2d::new(self.dx * rhs, self.dy * rhs, self.dtheta * rhs)
    }
}
