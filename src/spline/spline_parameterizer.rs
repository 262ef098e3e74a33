//! Converts a spline into a list of points that are close enough together that the path between
//! two consecutive points is well approximated by a constant curvature arc.

use crate::Error;

use super::{CubicHermiteSpline, PoseWithCurvature};

#[cfg(test)]
#[path = "spline_parameterizer_tests.rs"]
mod spline_parameterizer_tests;

/// The maximum distance along the heading between two consecutive points, in meters.
const MAX_DX: f64 = 0.127;

/// The maximum sideways distance between two consecutive points, in meters.
const MAX_DY: f64 = 0.00127;

/// The maximum change in heading between two consecutive points, in radians.
const MAX_DTHETA: f64 = 0.0872;

/// The number of subdivisions after which a spline is considered malformed. Splines with
/// cusps or very sharp turns never satisfy the limits.
const MAX_ITERATIONS: usize = 5000;

/// Returns the points along the spline between the spline parameters `t0` and `t1`.
///
/// Intervals are bisected until the twist between the end points of each interval is within
/// the limits. The first point is the point at `t0`, the last point is the point at `t1`.
///
/// ## Errors
///
/// Returns [Error::MalformedSpline] if the limits could not be satisfied within the maximum
/// number of iterations.
pub fn parameterize(
    spline: &CubicHermiteSpline,
    t0: f64,
    t1: f64,
) -> Result<Vec<PoseWithCurvature>, Error> {
    let mut points = vec![spline.get_point(t0)];

    // Intervals are pushed in reverse order so that they are processed from the start of the
    // spline to the end.
    let mut stack = vec![(t0, t1)];
    let mut iterations = 0;

    while let Some((start_t, end_t)) = stack.pop() {
        let start = spline.get_point(start_t);
        let end = spline.get_point(end_t);

        let twist = start.pose.log(&end.pose);
        if twist.dy.abs() > MAX_DY || twist.dx.abs() > MAX_DX || twist.dtheta.abs() > MAX_DTHETA {
            let middle_t = (start_t + end_t) / 2.0;
            stack.push((middle_t, end_t));
            stack.push((start_t, middle_t));
        } else {
            points.push(end);
        }

        iterations += 1;
        if iterations >= MAX_ITERATIONS {
            return Err(Error::MalformedSpline { iterations });
        }
    }

    Ok(points)
}

/// Returns the points along the whole spline.
///
/// ## Errors
///
/// Returns [Error::MalformedSpline] if the limits could not be satisfied within the maximum
/// number of iterations.
pub fn parameterize_full(spline: &CubicHermiteSpline) -> Result<Vec<PoseWithCurvature>, Error> {
    parameterize(spline, 0.0, 1.0)
}

/// Returns the points along a list of consecutive splines.
///
/// The first point of each spline after the first is the last point of the previous spline,
/// it is only included once.
///
/// ## Errors
///
/// Returns [Error::MalformedSpline] if any of the splines is malformed.
pub fn parameterize_all(splines: &[CubicHermiteSpline]) -> Result<Vec<PoseWithCurvature>, Error> {
    let mut points = Vec::new();
    if let Some(first) = splines.first() {
        points.push(first.get_point(0.0));
    }

    for spline in splines {
        let spline_points = parameterize_full(spline)?;
        points.extend(spline_points.into_iter().skip(1));
    }

    Ok(points)
}
