use super::*;
use crate::geometry::{Pose2d, Rotation2d};
use crate::trajectory::MinMax;
use float_cmp::{ApproxEq, F64Margin};

#[derive(Debug)]
struct MaxVelocityConstraint {
    max_velocity: f64,
}

impl TrajectoryConstraint for MaxVelocityConstraint {
    fn max_velocity(&self, _pose: &Pose2d, _curvature: f64, _velocity: f64) -> f64 {
        self.max_velocity
    }

    fn min_max_acceleration(&self, _pose: &Pose2d, _curvature: f64, _speed: f64) -> MinMax {
        MinMax::default()
    }
}

#[derive(Debug)]
struct InfeasibleConstraint;

impl TrajectoryConstraint for InfeasibleConstraint {
    fn max_velocity(&self, _pose: &Pose2d, _curvature: f64, _velocity: f64) -> f64 {
        f64::INFINITY
    }

    fn min_max_acceleration(&self, _pose: &Pose2d, _curvature: f64, _speed: f64) -> MinMax {
        MinMax::new(1.0, -1.0)
    }
}

fn straight_line(length: f64, spacing: f64) -> Vec<PoseWithCurvature> {
    let count = (length / spacing).round() as usize;
    (0..=count)
        .map(|i| {
            PoseWithCurvature::new(
                Pose2d::from_coordinates(i as f64 * spacing, 0.0, Rotation2d::identity()),
                0.0,
            )
        })
        .collect()
}

fn limits() -> ProfileLimits {
    ProfileLimits {
        start_velocity: 0.0,
        end_velocity: 0.0,
        max_velocity: 2.0,
        max_acceleration: 1.0,
        reversed: false,
    }
}

fn margin() -> F64Margin {
    F64Margin {
        ulps: 2,
        epsilon: 1e-3,
    }
}

#[test]
fn when_path_is_long_should_produce_trapezoidal_profile() {
    let trajectory = time_parameterize(&straight_line(10.0, 0.1), &[], &limits()).unwrap();

    // 2 s to accelerate over 2 m, 3 s at 2 m/s over 6 m and 2 s to stop over 2 m
    assert!(trajectory.total_time().approx_eq(7.0, margin()));

    let states = trajectory.states();
    assert_eq!(states[0].velocity, 0.0);
    assert!(states[states.len() - 1].velocity.approx_eq(0.0, margin()));

    for state in states {
        assert!(state.velocity <= 2.0 + 1e-9);
        assert!(state.velocity >= 0.0);
        assert!(state.acceleration.abs() <= 1.0 + 1e-6);
    }

    assert!(trajectory.sample(3.5).velocity.approx_eq(2.0, margin()));
    assert!(trajectory.sample(1.0).velocity.approx_eq(1.0, margin()));
}

#[test]
fn when_path_is_short_should_produce_triangular_profile() {
    let trajectory = time_parameterize(&straight_line(2.0, 0.1), &[], &limits()).unwrap();

    // Accelerate over 1 m to sqrt(2) m/s and decelerate over 1 m
    let peak = trajectory
        .states()
        .iter()
        .map(|state| state.velocity)
        .fold(0.0, f64::max);
    assert!(peak.approx_eq(2.0_f64.sqrt(), margin()));
    assert!(trajectory
        .total_time()
        .approx_eq(2.0 * 2.0_f64.sqrt(), margin()));
}

#[test]
fn when_end_velocity_is_set_should_end_at_that_velocity() {
    let limits = ProfileLimits {
        end_velocity: 1.0,
        start_velocity: 0.5,
        ..limits()
    };
    let trajectory = time_parameterize(&straight_line(10.0, 0.1), &[], &limits).unwrap();

    let states = trajectory.states();
    assert_eq!(states[0].velocity, 0.5);
    assert!(states[states.len() - 1].velocity.approx_eq(1.0, margin()));
}

#[test]
fn when_reversed_should_have_negative_velocities() {
    let limits = ProfileLimits {
        reversed: true,
        ..limits()
    };
    let trajectory = time_parameterize(&straight_line(10.0, 0.1), &[], &limits).unwrap();

    for state in trajectory.states() {
        assert!(state.velocity <= 0.0);
    }

    assert!(trajectory.sample(3.5).velocity.approx_eq(-2.0, margin()));
    assert!(trajectory.sample(0.5).acceleration.approx_eq(-1.0, margin()));
}

#[test]
fn when_constraint_limits_velocity_should_respect_limit() {
    let constraints: Vec<Box<dyn TrajectoryConstraint>> =
        vec![Box::new(MaxVelocityConstraint { max_velocity: 1.0 })];

    let trajectory =
        time_parameterize(&straight_line(10.0, 0.1), &constraints, &limits()).unwrap();

    for state in trajectory.states() {
        assert!(state.velocity <= 1.0 + 1e-9);
    }

    // 1 s to accelerate over 0.5 m, 9 s at 1 m/s and 1 s to stop over 0.5 m
    assert!(trajectory.total_time().approx_eq(11.0, margin()));
}

#[test]
fn when_constraint_is_infeasible_should_fail() {
    let constraints: Vec<Box<dyn TrajectoryConstraint>> = vec![Box::new(InfeasibleConstraint)];

    let result = time_parameterize(&straight_line(1.0, 0.1), &constraints, &limits());

    assert!(matches!(result, Err(Error::InfeasibleTrajectory { .. })));
}

#[test]
fn when_there_are_no_points_should_fail() {
    let result = time_parameterize(&[], &[], &limits());
    assert!(matches!(result, Err(Error::InfeasibleTrajectory { .. })));
}

#[test]
fn when_points_coincide_should_take_no_time() {
    let point = PoseWithCurvature::new(Pose2d::default(), 0.0);

    let trajectory = time_parameterize(&[point, point], &[], &limits()).unwrap();

    assert_eq!(trajectory.total_time(), 0.0);
    assert_eq!(trajectory.states().len(), 2);
}
