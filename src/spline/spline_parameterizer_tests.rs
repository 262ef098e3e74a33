use super::*;
use crate::geometry::{Pose2d, Rotation2d};
use crate::spline::{spline_helper, ControlVector};

fn s_curve() -> Vec<CubicHermiteSpline> {
    let start = Pose2d::default();
    let end = Pose2d::from_coordinates(4.0, 2.0, Rotation2d::identity());
    let (initial, last) = spline_helper::cubic_control_vectors_from_waypoints(&start, &[], &end);
    spline_helper::cubic_splines_from_control_vectors(&initial, &[], &last)
}

#[test]
fn when_parameterizing_should_include_both_ends() {
    let splines = s_curve();
    let points = parameterize_full(&splines[0]).unwrap();

    assert!(points.len() > 2);
    assert_eq!(points[0], splines[0].get_point(0.0));
    assert_eq!(points[points.len() - 1], splines[0].get_point(1.0));
}

#[test]
fn when_parameterizing_should_keep_consecutive_points_within_limits() {
    let splines = s_curve();
    let points = parameterize_full(&splines[0]).unwrap();

    for pair in points.windows(2) {
        let twist = pair[0].pose.log(&pair[1].pose);
        assert!(twist.dx.abs() <= MAX_DX);
        assert!(twist.dy.abs() <= MAX_DY);
        assert!(twist.dtheta.abs() <= MAX_DTHETA);
    }
}

#[test]
fn when_parameterizing_should_progress_along_spline() {
    let splines = s_curve();
    let points = parameterize_full(&splines[0]).unwrap();

    for pair in points.windows(2) {
        assert!(pair[1].pose.x() > pair[0].pose.x());
    }
}

#[test]
fn when_parameterizing_multiple_splines_should_not_duplicate_joints() {
    let start = Pose2d::default();
    let end = Pose2d::from_coordinates(4.0, 0.0, Rotation2d::identity());
    let interior = [crate::geometry::Translation2d::new(2.0, 0.5)];
    let (initial, last) =
        spline_helper::cubic_control_vectors_from_waypoints(&start, &interior, &end);
    let splines = spline_helper::cubic_splines_from_control_vectors(&initial, &interior, &last);

    let first = parameterize_full(&splines[0]).unwrap();
    let second = parameterize_full(&splines[1]).unwrap();
    let all = parameterize_all(&splines).unwrap();

    assert_eq!(all.len(), first.len() + second.len() - 1);
    for pair in all.windows(2) {
        assert!(pair[0].pose.distance_to(&pair[1].pose) > 0.0);
    }
}

#[test]
fn when_spline_has_cusp_should_fail() {
    // x(t) = t - t^2 reverses direction at t = 0.5
    let initial = ControlVector::new([0.0, 1.0], [0.0, 0.0]);
    let last = ControlVector::new([0.0, -1.0], [0.0, 0.0]);
    let spline = CubicHermiteSpline::new(&initial, &last);

    let result = parameterize_full(&spline);

    assert_eq!(
        result,
        Err(Error::MalformedSpline {
            iterations: MAX_ITERATIONS
        })
    );
}

#[test]
fn when_no_splines_should_return_no_points() {
    assert!(parameterize_all(&[]).unwrap().is_empty());
}
