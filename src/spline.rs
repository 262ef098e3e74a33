use crate::geometry::Pose2d;

/// Defines the cubic Hermite spline.
pub mod cubic_hermite_spline;

/// Provides the fitting of splines through a set of waypoints.
pub mod spline_helper;

/// Provides the conversion of a spline into a list of closely spaced points.
pub mod spline_parameterizer;

pub use cubic_hermite_spline::{ControlVector, CubicHermiteSpline};

/// Defines a point on a path together with the curvature of the path at that point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PoseWithCurvature {
    /// The position and heading along the path.
    pub pose: Pose2d,

    /// The curvature of the path in radians per meter.
    pub curvature: f64,
}

impl PoseWithCurvature {
    /// Creates a new pose with curvature.
    pub fn new(pose: Pose2d, curvature: f64) -> Self {
        Self { pose, curvature }
    }
}
