use super::*;

#[test]
fn when_below_limit_desaturate_should_not_change_speeds() {
    let mut speeds = DifferentialDriveWheelSpeeds::new(1.0, -1.5);
    speeds.desaturate(2.0);

    assert_eq!(speeds, DifferentialDriveWheelSpeeds::new(1.0, -1.5));
}

#[test]
fn when_above_limit_desaturate_should_keep_ratio() {
    let mut speeds = DifferentialDriveWheelSpeeds::new(-6.0, 3.0);
    speeds.desaturate(4.0);

    assert_eq!(speeds.left, -4.0);
    assert_eq!(speeds.right, 2.0);
}

#[test]
fn when_serializing_should_use_field_names() {
    let speeds = DifferentialDriveWheelSpeeds::new(0.5, 1.5);
    let json = serde_json::to_string(&speeds).unwrap();

    assert_eq!(json, r#"{"left":0.5,"right":1.5}"#);
}
