//! Fits clamped cubic splines through a start pose, a list of interior waypoints and an end
//! pose.
//!
//! The headings at the start and the end are fixed by the poses. The headings at the interior
//! waypoints are chosen such that the second derivative of the path is continuous, which
//! requires solving a tridiagonal system of equations.

use crate::geometry::{Pose2d, Translation2d};

use super::{ControlVector, CubicHermiteSpline};

#[cfg(test)]
#[path = "spline_helper_tests.rs"]
mod spline_helper_tests;

/// The ratio between the magnitude of the end tangents and the distance to the neighbouring
/// waypoint.
const TANGENT_SCALE: f64 = 1.2;

/// Returns the control vectors for the start and the end of a clamped cubic path.
///
/// The magnitude of the tangent at each end is 1.2 times the distance to the neighbouring
/// waypoint, or to the other end if there are no interior waypoints.
///
/// ## Parameters
///
/// * `start` - The pose at the start of the path.
/// * `interior_waypoints` - The positions the path passes through.
/// * `end` - The pose at the end of the path.
pub fn cubic_control_vectors_from_waypoints(
    start: &Pose2d,
    interior_waypoints: &[Translation2d],
    end: &Pose2d,
) -> (ControlVector, ControlVector) {
    let (start_scalar, end_scalar) = match (interior_waypoints.first(), interior_waypoints.last()) {
        (Some(first), Some(last)) => (
            TANGENT_SCALE * start.translation().distance(first),
            TANGENT_SCALE * end.translation().distance(last),
        ),
        _ => {
            let scalar = TANGENT_SCALE * start.translation().distance(&end.translation());
            (scalar, scalar)
        }
    };

    (
        control_vector(start, start_scalar),
        control_vector(end, end_scalar),
    )
}

/// Returns the cubic splines that pass through all the waypoints.
///
/// With no interior waypoints a single spline is returned. With one interior waypoint the
/// derivative at that waypoint follows directly from the end conditions. With more waypoints
/// the derivatives at the interior waypoints are found by solving a tridiagonal system.
///
/// ## Parameters
///
/// * `start` - The control vector at the start of the path.
/// * `interior_waypoints` - The positions the path passes through.
/// * `end` - The control vector at the end of the path.
pub fn cubic_splines_from_control_vectors(
    start: &ControlVector,
    interior_waypoints: &[Translation2d],
    end: &ControlVector,
) -> Vec<CubicHermiteSpline> {
    match interior_waypoints.len() {
        0 => vec![CubicHermiteSpline::new(start, end)],
        1 => {
            let waypoint = interior_waypoints[0];
            let x_derivative = (3.0 * (end.x[0] - start.x[0]) - end.x[1] - start.x[1]) / 4.0;
            let y_derivative = (3.0 * (end.y[0] - start.y[0]) - end.y[1] - start.y[1]) / 4.0;

            let middle = ControlVector::new(
                [waypoint.x(), x_derivative],
                [waypoint.y(), y_derivative],
            );

            vec![
                CubicHermiteSpline::new(start, &middle),
                CubicHermiteSpline::new(&middle, end),
            ]
        }
        _ => splines_through_multiple_waypoints(start, interior_waypoints, end),
    }
}

fn control_vector(pose: &Pose2d, scalar: f64) -> ControlVector {
    ControlVector::new(
        [pose.x(), scalar * pose.rotation().cos()],
        [pose.y(), scalar * pose.rotation().sin()],
    )
}

fn splines_through_multiple_waypoints(
    start: &ControlVector,
    interior_waypoints: &[Translation2d],
    end: &ControlVector,
) -> Vec<CubicHermiteSpline> {
    let mut xs = Vec::with_capacity(interior_waypoints.len() + 2);
    let mut ys = Vec::with_capacity(interior_waypoints.len() + 2);
    xs.push(start.x[0]);
    ys.push(start.y[0]);
    for waypoint in interior_waypoints {
        xs.push(waypoint.x());
        ys.push(waypoint.y());
    }
    xs.push(end.x[0]);
    ys.push(end.y[0]);

    let x_derivatives = interior_derivatives(&xs, start.x[1], end.x[1]);
    let y_derivatives = interior_derivatives(&ys, start.y[1], end.y[1]);

    (0..xs.len() - 1)
        .map(|i| {
            CubicHermiteSpline::new(
                &ControlVector::new([xs[i], x_derivatives[i]], [ys[i], y_derivatives[i]]),
                &ControlVector::new(
                    [xs[i + 1], x_derivatives[i + 1]],
                    [ys[i + 1], y_derivatives[i + 1]],
                ),
            )
        })
        .collect()
}

/// Returns the derivatives at all points, including the given derivatives at both ends.
///
/// `values` must contain at least four points.
fn interior_derivatives(values: &[f64], initial_derivative: f64, final_derivative: f64) -> Vec<f64> {
    let n = values.len();
    let unknowns = n - 2;

    let mut lower = vec![1.0; unknowns];
    lower[0] = 0.0;
    let diagonal = vec![4.0; unknowns];
    let mut upper = vec![1.0; unknowns];
    upper[unknowns - 1] = 0.0;

    let mut rhs = Vec::with_capacity(unknowns);
    rhs.push(3.0 * (values[2] - values[0]) - initial_derivative);
    for i in 1..unknowns - 1 {
        rhs.push(3.0 * (values[i + 2] - values[i]));
    }
    rhs.push(3.0 * (values[n - 1] - values[n - 3]) - final_derivative);

    let solution = solve_tridiagonal(&lower, &diagonal, &upper, &rhs);

    let mut derivatives = Vec::with_capacity(n);
    derivatives.push(initial_derivative);
    derivatives.extend(solution);
    derivatives.push(final_derivative);
    derivatives
}

/// Solves a tridiagonal system of equations with the Thomas algorithm.
///
/// ## Parameters
///
/// * `lower` - The sub diagonal, the first element is ignored.
/// * `diagonal` - The main diagonal.
/// * `upper` - The super diagonal, the last element is ignored.
/// * `rhs` - The right hand side of the system.
pub(crate) fn solve_tridiagonal(lower: &[f64], diagonal: &[f64], upper: &[f64], rhs: &[f64]) -> Vec<f64> {
    let n = rhs.len();
    if n == 0 {
        return Vec::new();
    }

    let mut c_star = vec![0.0; n];
    let mut d_star = vec![0.0; n];

    c_star[0] = upper[0] / diagonal[0];
    d_star[0] = rhs[0] / diagonal[0];

    for i in 1..n {
        let m = 1.0 / (diagonal[i] - lower[i] * c_star[i - 1]);
        c_star[i] = upper[i] * m;
        d_star[i] = (rhs[i] - lower[i] * d_star[i - 1]) * m;
    }

    let mut solution = vec![0.0; n];
    solution[n - 1] = d_star[n - 1];
    for i in (1..n).rev() {
        solution[i - 1] = d_star[i - 1] - c_star[i - 1] * solution[i];
    }

    solution
}
