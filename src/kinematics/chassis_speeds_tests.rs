use super::*;
use float_cmp::{ApproxEq, F64Margin};

fn margin() -> F64Margin {
    F64Margin {
        ulps: 2,
        epsilon: 1e-9,
    }
}

#[test]
fn when_converting_field_relative_speeds_should_rotate_into_robot_frame() {
    let speeds =
        ChassisSpeeds::from_field_relative_speeds(1.0, 0.0, 0.5, &Rotation2d::from_degrees(90.0));

    assert!(speeds.vx.approx_eq(0.0, margin()));
    assert!(speeds.vy.approx_eq(-1.0, margin()));
    assert!(speeds.omega.approx_eq(0.5, margin()));
}

#[test]
fn when_serializing_should_use_field_names() {
    let speeds = ChassisSpeeds::new(1.0, 0.0, -0.25);
    let json = serde_json::to_value(speeds).unwrap();

    assert_eq!(json["vx"], 1.0);
    assert_eq!(json["vy"], 0.0);
    assert_eq!(json["omega"], -0.25);
}
