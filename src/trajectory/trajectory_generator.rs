//! Generates trajectories through a list of waypoints.

use std::f64::consts::PI;

use log::debug;

use crate::{
    geometry::{Pose2d, Rotation2d, Transform2d, Translation2d},
    spline::{spline_helper, spline_parameterizer, ControlVector, PoseWithCurvature},
    Error,
};

use super::{
    trajectory_parameterizer::{time_parameterize, ProfileLimits},
    Trajectory, TrajectoryConfig,
};

#[cfg(test)]
#[path = "trajectory_generator_tests.rs"]
mod trajectory_generator_tests;

/// Returns the trajectory that starts at `start`, passes through the interior waypoints and ends
/// at `end`.
///
/// The path consists of clamped cubic splines, the headings at the start and the end are the
/// headings of the given poses. When the configuration is reversed the robot drives the path
/// backwards, the headings of the poses are then the headings of the back of the robot.
///
/// ## Parameters
///
/// * `start` - The pose at the start of the trajectory.
/// * `interior_waypoints` - The positions the path passes through. May be empty.
/// * `end` - The pose at the end of the trajectory.
/// * `config` - The limits of the trajectory.
///
/// ## Errors
///
/// Returns [Error::MalformedSpline] if the waypoints produce a path with a cusp, or
/// [Error::InfeasibleTrajectory] if the constraints can not be satisfied.
///
/// ## Example
///
/// ```
/// use robot_motion::geometry::{Pose2d, Rotation2d};
/// use robot_motion::trajectory::{trajectory_generator, TrajectoryConfig};
///
/// let config = TrajectoryConfig::new(2.0, 1.0).unwrap();
/// let trajectory = trajectory_generator::generate(
///     &Pose2d::default(),
///     &[],
///     &Pose2d::from_coordinates(4.0, 0.0, Rotation2d::identity()),
///     &config,
/// )
/// .unwrap();
///
/// let end = trajectory.sample(trajectory.total_time());
/// assert!((end.pose.x() - 4.0).abs() < 1e-9);
/// ```
pub fn generate(
    start: &Pose2d,
    interior_waypoints: &[Translation2d],
    end: &Pose2d,
    config: &TrajectoryConfig,
) -> Result<Trajectory, Error> {
    let (start, end) = if config.is_reversed() {
        (*start + flip(), *end + flip())
    } else {
        (*start, *end)
    };

    let (initial, last) =
        spline_helper::cubic_control_vectors_from_waypoints(&start, interior_waypoints, &end);

    generate_from_control_vectors_internal(&initial, interior_waypoints, &last, config)
}

/// Returns the trajectory defined by the control vectors at the start and the end and the
/// interior waypoints.
///
/// The derivatives of the control vectors describe the direction of travel of the front of the
/// robot. For reversed configurations they are negated before the splines are fitted.
///
/// ## Errors
///
/// Returns [Error::MalformedSpline] if the waypoints produce a path with a cusp, or
/// [Error::InfeasibleTrajectory] if the constraints can not be satisfied.
pub fn generate_from_control_vectors(
    initial: &ControlVector,
    interior_waypoints: &[Translation2d],
    last: &ControlVector,
    config: &TrajectoryConfig,
) -> Result<Trajectory, Error> {
    let (initial, last) = if config.is_reversed() {
        (reverse_control_vector(initial), reverse_control_vector(last))
    } else {
        (*initial, *last)
    };

    generate_from_control_vectors_internal(&initial, interior_waypoints, &last, config)
}

fn generate_from_control_vectors_internal(
    initial: &ControlVector,
    interior_waypoints: &[Translation2d],
    last: &ControlVector,
    config: &TrajectoryConfig,
) -> Result<Trajectory, Error> {
    let splines =
        spline_helper::cubic_splines_from_control_vectors(initial, interior_waypoints, last);
    let mut points = spline_parameterizer::parameterize_all(&splines)?;

    // The splines of a reversed path were generated for the back of the robot. Flip the
    // headings back to the front of the robot, which also flips the sign of the curvature.
    if config.is_reversed() {
        points = points
            .into_iter()
            .map(|point| PoseWithCurvature::new(point.pose + flip(), -point.curvature))
            .collect();
    }

    let trajectory = time_parameterize(
        &points,
        config.constraints(),
        &ProfileLimits {
            start_velocity: config.start_velocity(),
            end_velocity: config.end_velocity(),
            max_velocity: config.max_velocity(),
            max_acceleration: config.max_acceleration(),
            reversed: config.is_reversed(),
        },
    )?;

    debug!(
        "Generated trajectory through {} splines. Points: {}, duration: {} s, reversed: {}",
        splines.len(),
        trajectory.states().len(),
        trajectory.total_time(),
        config.is_reversed()
    );

    Ok(trajectory)
}

fn flip() -> Transform2d {
    Transform2d::new(Translation2d::default(), Rotation2d::new(PI))
}

fn reverse_control_vector(vector: &ControlVector) -> ControlVector {
    ControlVector::new([vector.x[0], -vector.x[1]], [vector.y[0], -vector.y[1]])
}
