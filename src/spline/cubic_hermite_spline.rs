extern crate nalgebra as na;

use na::{Matrix4, Vector4};

use crate::geometry::{Pose2d, Rotation2d};

use super::PoseWithCurvature;

#[cfg(test)]
#[path = "cubic_hermite_spline_tests.rs"]
mod cubic_hermite_spline_tests;

/// Defines the value and the first derivative of both coordinates at one end of a spline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControlVector {
    /// The x coordinate and its derivative with respect to the spline parameter.
    pub x: [f64; 2],

    /// The y coordinate and its derivative with respect to the spline parameter.
    pub y: [f64; 2],
}

impl ControlVector {
    /// Creates a new control vector.
    pub fn new(x: [f64; 2], y: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// Defines a planar curve where both coordinates are third order polynomials of the spline
/// parameter `t` in [0, 1].
///
/// The polynomials are defined by the position and the first derivative at both ends of the
/// curve, which means that consecutive splines sharing a control vector join with a continuous
/// heading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicHermiteSpline {
    /// The polynomial coefficients of x, ordered from the third order term to the constant.
    x_coefficients: Vector4<f64>,

    /// The polynomial coefficients of y, ordered from the third order term to the constant.
    y_coefficients: Vector4<f64>,
}

impl CubicHermiteSpline {
    /// Returns the polynomial coefficients for the given end point values and derivatives.
    fn coefficients(initial: [f64; 2], last: [f64; 2]) -> Vector4<f64> {
        Self::hermite_basis() * Vector4::new(initial[0], initial[1], last[0], last[1])
    }

    /// Returns the point on the curve for the spline parameter `t`.
    ///
    /// ## Parameters
    ///
    /// * `t` - The spline parameter, 0.0 is the start of the curve and 1.0 the end.
    pub fn get_point(&self, t: f64) -> PoseWithCurvature {
        let x = &self.x_coefficients;
        let y = &self.y_coefficients;

        let position_x = ((x[0] * t + x[1]) * t + x[2]) * t + x[3];
        let position_y = ((y[0] * t + y[1]) * t + y[2]) * t + y[3];

        let dx = (3.0 * x[0] * t + 2.0 * x[1]) * t + x[2];
        let dy = (3.0 * y[0] * t + 2.0 * y[1]) * t + y[2];

        let ddx = 6.0 * x[0] * t + 2.0 * x[1];
        let ddy = 6.0 * y[0] * t + 2.0 * y[1];

        let speed_squared = dx * dx + dy * dy;
        let curvature = if speed_squared > 0.0 {
            (dx * ddy - ddx * dy) / (speed_squared * speed_squared.sqrt())
        } else {
            0.0
        };

        PoseWithCurvature::new(
            Pose2d::from_coordinates(position_x, position_y, Rotation2d::from_components(dx, dy)),
            curvature,
        )
    }

    /// Returns the matrix that maps [p0, p0', p1, p1'] onto the polynomial coefficients.
    fn hermite_basis() -> Matrix4<f64> {
        Matrix4::new(
            2.0, 1.0, -2.0, 1.0, //
            -3.0, -2.0, 3.0, -1.0, //
            0.0, 1.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, 0.0,
        )
    }

    /// Creates a new spline from the control vectors at the start and the end of the curve.
    pub fn new(initial: &ControlVector, last: &ControlVector) -> Self {
        Self {
            x_coefficients: Self::coefficients(initial.x, last.x),
            y_coefficients: Self::coefficients(initial.y, last.y),
        }
    }
}
