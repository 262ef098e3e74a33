use super::*;
use float_cmp::{ApproxEq, F64Margin};
use std::f64::consts::PI;

fn margin() -> F64Margin {
    F64Margin {
        ulps: 2,
        epsilon: 1e-9,
    }
}

#[test]
fn when_transforming_pose_should_apply_transform_in_pose_frame() {
    let initial = Pose2d::from_coordinates(1.0, 2.0, Rotation2d::from_degrees(45.0));
    let transform = Transform2d::new(Translation2d::new(5.0, 0.0), Rotation2d::from_degrees(5.0));

    let transformed = initial + transform;

    assert!(transformed
        .x()
        .approx_eq(1.0 + 5.0 / 2.0_f64.sqrt(), margin()));
    assert!(transformed
        .y()
        .approx_eq(2.0 + 5.0 / 2.0_f64.sqrt(), margin()));
    assert!(transformed.rotation().degrees().approx_eq(50.0, margin()));
}

#[test]
fn when_transforming_should_be_associative() {
    let pose = Pose2d::from_coordinates(0.3, -1.2, Rotation2d::new(0.7));
    let a = Transform2d::new(Translation2d::new(1.0, 0.5), Rotation2d::new(-0.3));
    let b = Transform2d::new(Translation2d::new(-2.0, 4.0), Rotation2d::new(1.9));

    let left = (pose + a) + b;
    let right = pose + (a + b);

    assert_eq!(left, right);
}

#[test]
fn when_transforming_by_inverse_should_return_to_origin_pose() {
    let pose = Pose2d::from_coordinates(3.0, 4.0, Rotation2d::from_degrees(-120.0));
    let transform = Transform2d::new(Translation2d::new(-1.5, 2.5), Rotation2d::from_degrees(33.0));

    let there_and_back = pose + transform + transform.inverse();
    assert_eq!(there_and_back, pose);

    let identity = Pose2d::default() + transform + transform.inverse();
    assert_eq!(identity, Pose2d::default());
}

#[test]
fn when_computing_relative_pose_should_express_in_other_frame() {
    let initial = Pose2d::from_coordinates(0.0, 0.0, Rotation2d::from_degrees(45.0));
    let last = Pose2d::from_coordinates(1.0, 1.0, Rotation2d::from_degrees(45.0));

    let relative = last.relative_to(&initial);

    assert!(relative.x().approx_eq(2.0_f64.sqrt(), margin()));
    assert!(relative.y().approx_eq(0.0, margin()));
    assert!(relative.rotation().degrees().approx_eq(0.0, margin()));

    let difference = last - initial;
    assert_eq!(difference, relative);
    assert_eq!(Transform2d::between(&initial, &last), relative);
}

#[test]
fn when_composing_relative_pose_should_recover_pose() {
    let base = Pose2d::from_coordinates(-2.0, 7.0, Rotation2d::new(2.5));
    let pose = Pose2d::from_coordinates(4.0, 1.0, Rotation2d::new(-0.4));

    assert_eq!(base + pose.relative_to(&base), pose);
}

#[test]
fn when_comparing_poses_should_use_tolerance() {
    let one = Pose2d::from_coordinates(0.0, 5.0, Rotation2d::from_degrees(43.0));
    let two = Pose2d::from_coordinates(0.0, 5.0, Rotation2d::from_degrees(43.0 + 1e-12));
    let three = Pose2d::from_coordinates(0.0, 1.524, Rotation2d::from_degrees(43.0));

    assert_eq!(one, two);
    assert_ne!(one, three);
}

#[test]
fn test_distance_to() {
    let one = Pose2d::from_coordinates(1.0, 1.0, Rotation2d::identity());
    let two = Pose2d::from_coordinates(4.0, 5.0, Rotation2d::from_degrees(90.0));

    assert!(one.distance_to(&two).approx_eq(5.0, margin()));
}

#[test]
fn when_applying_straight_twist_should_move_forward() {
    let pose = Pose2d::default().exp(&Twist2d::new(1.0, 0.0, 0.0));

    assert_eq!(pose, Pose2d::from_coordinates(1.0, 0.0, Rotation2d::identity()));
}

#[test]
fn when_applying_arc_twist_should_follow_arc() {
    let pose = Pose2d::default().exp(&Twist2d::new(PI / 2.0, 0.0, PI / 2.0));

    assert!(pose.x().approx_eq(1.0, margin()));
    assert!(pose.y().approx_eq(1.0, margin()));
    assert!(pose.rotation().degrees().approx_eq(90.0, margin()));
}

#[test]
fn when_taking_log_should_invert_exp() {
    let start = Pose2d::from_coordinates(1.0, -3.0, Rotation2d::new(0.9));
    let twists = [
        Twist2d::new(2.0, 0.0, 0.0),
        Twist2d::new(1.0, 0.3, -0.5),
        Twist2d::new(-0.5, 0.0, 2.0),
        Twist2d::new(0.1, 0.0, 1e-12),
    ];

    for twist in twists {
        let end = start.exp(&twist);
        let recovered = start.log(&end);

        assert!(recovered.dx.approx_eq(twist.dx, margin()));
        assert!(recovered.dy.approx_eq(twist.dy, margin()));
        assert!(recovered.dtheta.approx_eq(twist.dtheta, margin()));
    }
}

#[test]
fn test_log_of_quarter_circle() {
    let start = Pose2d::default();
    let end = Pose2d::from_coordinates(5.0, 5.0, Rotation2d::from_degrees(90.0));

    let twist = start.log(&end);

    assert!(twist.dx.approx_eq(5.0 / 2.0 * PI, margin()));
    assert!(twist.dy.approx_eq(0.0, margin()));
    assert!(twist.dtheta.approx_eq(PI / 2.0, margin()));
}

#[test]
fn when_interpolating_should_stay_on_arc() {
    let start = Pose2d::default();
    let end = Pose2d::from_coordinates(1.0, 1.0, Rotation2d::from_degrees(90.0));

    assert_eq!(start.interpolate(&end, -1.0), start);
    assert_eq!(start.interpolate(&end, 1.0), end);

    let halfway = start.interpolate(&end, 0.5);
    let expected = 1.0 / 2.0_f64.sqrt();
    assert!(halfway.x().approx_eq(expected, margin()));
    assert!(halfway.y().approx_eq(1.0 - expected, margin()));
    assert!(halfway.rotation().degrees().approx_eq(45.0, margin()));
}

#[test]
fn test_isometry_conversion() {
    let pose = Pose2d::from_coordinates(2.0, -1.0, Rotation2d::new(1.1));
    assert_eq!(Pose2d::from(pose.to_isometry()), pose);
}
