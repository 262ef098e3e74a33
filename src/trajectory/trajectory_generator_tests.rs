use super::*;
use crate::controller::SimpleMotorFeedforward;
use crate::kinematics::{ChassisSpeeds, DifferentialDriveKinematics};
use crate::trajectory::constraint::{
    CentripetalAccelerationConstraint, DifferentialDriveVoltageConstraint,
};
use float_cmp::{ApproxEq, F64Margin};

fn margin() -> F64Margin {
    F64Margin {
        ulps: 2,
        epsilon: 1e-6,
    }
}

fn curvy_waypoints() -> (Pose2d, Vec<Translation2d>, Pose2d) {
    (
        Pose2d::default(),
        vec![Translation2d::new(1.0, 1.0), Translation2d::new(2.0, -1.0)],
        Pose2d::from_coordinates(3.0, 0.0, Rotation2d::identity()),
    )
}

#[test]
fn when_no_interior_waypoints_should_reach_end_pose() {
    let config = TrajectoryConfig::new(2.0, 1.0).unwrap();
    let end = Pose2d::from_coordinates(4.0, 0.0, Rotation2d::identity());

    let trajectory = generate(&Pose2d::default(), &[], &end, &config).unwrap();

    assert_eq!(trajectory.initial_pose(), Pose2d::default());
    let last = trajectory.sample(trajectory.total_time());
    assert_eq!(last.pose, end);
    assert!(last.velocity.approx_eq(0.0, margin()));

    // 2 s to accelerate over 2 m and 2 s to stop
    assert!((trajectory.total_time() - 4.0).abs() < 0.05);
}

#[test]
fn when_passing_waypoints_should_respect_global_limits() {
    let config = TrajectoryConfig::new(2.0, 1.5).unwrap();
    let (start, interior, end) = curvy_waypoints();

    let trajectory = generate(&start, &interior, &end, &config).unwrap();

    let mut previous_time = 0.0;
    for state in trajectory.states() {
        assert!(state.time >= previous_time);
        assert!(state.velocity <= 2.0 + 1e-9);
        assert!(state.velocity >= 0.0);
        assert!(state.acceleration.abs() <= 1.5 + 1e-6);
        previous_time = state.time;
    }

    assert_eq!(trajectory.initial_pose(), start);
    assert_eq!(trajectory.sample(trajectory.total_time()).pose, end);
}

#[test]
fn when_passing_waypoints_should_visit_each_waypoint() {
    let config = TrajectoryConfig::new(2.0, 1.5).unwrap();
    let (start, interior, end) = curvy_waypoints();

    let trajectory = generate(&start, &interior, &end, &config).unwrap();

    for waypoint in &interior {
        let closest = trajectory
            .states()
            .iter()
            .map(|state| state.pose.translation().distance(waypoint))
            .fold(f64::INFINITY, f64::min);
        assert!(closest < 1e-9);
    }
}

#[test]
fn when_sampling_should_move_continuously() {
    let config = TrajectoryConfig::new(2.0, 1.5).unwrap();
    let (start, interior, end) = curvy_waypoints();
    let trajectory = generate(&start, &interior, &end, &config).unwrap();

    let dt = 0.02;
    let mut previous = trajectory.sample(0.0);
    let mut time = dt;
    while time <= trajectory.total_time() {
        let current = trajectory.sample(time);
        assert!(current.time >= previous.time);
        assert!(current.pose.distance_to(&previous.pose) <= 2.0 * dt * 1.01);
        previous = current;
        time += dt;
    }
}

#[test]
fn when_end_velocity_is_set_should_end_at_that_velocity() {
    let config = TrajectoryConfig::new(2.0, 1.0)
        .unwrap()
        .with_end_velocity(1.0);
    let end = Pose2d::from_coordinates(6.0, 0.0, Rotation2d::identity());

    let trajectory = generate(&Pose2d::default(), &[], &end, &config).unwrap();

    let states = trajectory.states();
    assert!(states[states.len() - 1].velocity.approx_eq(1.0, margin()));
}

#[test]
fn when_reversed_should_drive_backwards() {
    let config = TrajectoryConfig::new(2.0, 1.0).unwrap().with_reversed(true);
    let end = Pose2d::from_coordinates(-4.0, 0.0, Rotation2d::identity());

    let trajectory = generate(&Pose2d::default(), &[], &end, &config).unwrap();

    for state in trajectory.states() {
        assert!(state.velocity <= 0.0);
        assert_eq!(state.pose.rotation(), Rotation2d::identity());
    }

    let last = trajectory.sample(trajectory.total_time());
    assert_eq!(last.pose, end);
    assert!(trajectory
        .sample(trajectory.total_time() / 2.0)
        .velocity
        .approx_eq(-2.0, F64Margin {
            ulps: 2,
            epsilon: 0.1
        }));
}

#[test]
fn when_reversed_control_vectors_should_drive_backwards() {
    let config = TrajectoryConfig::new(2.0, 1.0).unwrap().with_reversed(true);
    let initial = ControlVector::new([0.0, 4.8], [0.0, 0.0]);
    let last = ControlVector::new([-4.0, 4.8], [0.0, 0.0]);

    let trajectory = generate_from_control_vectors(&initial, &[], &last, &config).unwrap();

    assert_eq!(trajectory.initial_pose(), Pose2d::default());
    let last_state = trajectory.sample(trajectory.total_time());
    assert_eq!(
        last_state.pose,
        Pose2d::from_coordinates(-4.0, 0.0, Rotation2d::identity())
    );
}

#[test]
fn when_centripetal_constraint_is_set_should_limit_turn_speed() {
    let max_centripetal_acceleration = 0.5;
    let config = TrajectoryConfig::new(3.0, 2.0)
        .unwrap()
        .add_constraint(CentripetalAccelerationConstraint::new(max_centripetal_acceleration).unwrap());
    let (start, interior, end) = curvy_waypoints();

    let trajectory = generate(&start, &interior, &end, &config).unwrap();

    for state in trajectory.states() {
        let centripetal = state.velocity * state.velocity * state.curvature.abs();
        assert!(centripetal <= max_centripetal_acceleration + 1e-6);
    }
}

#[test]
fn when_kinematics_constraint_is_set_should_limit_wheel_speeds() {
    let kinematics = DifferentialDriveKinematics::new(0.7).unwrap();
    let config = TrajectoryConfig::new(2.0, 2.0)
        .unwrap()
        .with_kinematics(kinematics)
        .unwrap();
    let (start, interior, end) = curvy_waypoints();

    let trajectory = generate(&start, &interior, &end, &config).unwrap();

    for state in trajectory.states() {
        let wheels = kinematics.to_wheel_speeds(&ChassisSpeeds::new(
            state.velocity,
            0.0,
            state.velocity * state.curvature,
        ));
        assert!(wheels.left.abs() <= 2.0 + 1e-6);
        assert!(wheels.right.abs() <= 2.0 + 1e-6);
    }
}

#[test]
fn when_voltage_constraint_is_set_should_limit_voltage() {
    let feedforward = SimpleMotorFeedforward::new(1.0, 1.0, 3.0).unwrap();
    let kinematics = DifferentialDriveKinematics::new(0.5).unwrap();
    let max_voltage = 10.0;
    let config = TrajectoryConfig::new(3.6, 3.6)
        .unwrap()
        .add_constraint(
            DifferentialDriveVoltageConstraint::new(feedforward, kinematics, max_voltage).unwrap(),
        );
    let end = Pose2d::from_coordinates(8.0, 0.0, Rotation2d::identity());

    let trajectory = generate(&Pose2d::default(), &[], &end, &config).unwrap();

    // The acceleration of a state applies until the next state, so the last state has no
    // acceleration of its own
    let states = trajectory.states();
    for state in &states[..states.len() - 1] {
        let voltage = feedforward.calculate_with_acceleration(state.velocity, state.acceleration);
        assert!(voltage <= max_voltage + 0.05);
        assert!(voltage >= -max_voltage - 0.05);
    }
}

#[test]
fn when_limits_decrease_should_not_shorten_total_time() {
    let (start, interior, end) = curvy_waypoints();
    let total_time = |max_velocity: f64, max_acceleration: f64| {
        let config = TrajectoryConfig::new(max_velocity, max_acceleration).unwrap();
        generate(&start, &interior, &end, &config)
            .unwrap()
            .total_time()
    };

    let mut previous = 0.0;
    for max_velocity in [3.0, 2.0, 1.0, 0.5] {
        let time = total_time(max_velocity, 1.5);
        assert!(time >= previous - 1e-9);
        previous = time;
    }

    let mut previous = 0.0;
    for max_acceleration in [3.0, 2.0, 1.0, 0.5] {
        let time = total_time(2.0, max_acceleration);
        assert!(time >= previous - 1e-9);
        previous = time;
    }
}
