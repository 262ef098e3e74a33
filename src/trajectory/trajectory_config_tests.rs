use super::*;

#[test]
fn when_creating_should_use_zero_boundary_velocities() {
    let config = TrajectoryConfig::new(3.0, 2.0).unwrap();

    assert_eq!(config.max_velocity(), 3.0);
    assert_eq!(config.max_acceleration(), 2.0);
    assert_eq!(config.start_velocity(), 0.0);
    assert_eq!(config.end_velocity(), 0.0);
    assert!(!config.is_reversed());
    assert!(config.constraints().is_empty());
}

#[test]
fn when_limits_are_not_positive_should_fail() {
    assert_eq!(
        TrajectoryConfig::new(0.0, 2.0).unwrap_err(),
        Error::InvalidParameter {
            name: "max_velocity",
            value: 0.0
        }
    );
    assert_eq!(
        TrajectoryConfig::new(3.0, -1.0).unwrap_err(),
        Error::InvalidParameter {
            name: "max_acceleration",
            value: -1.0
        }
    );
    assert!(TrajectoryConfig::new(f64::INFINITY, 1.0).is_err());
}

#[test]
fn when_building_should_apply_settings() {
    let config = TrajectoryConfig::new(3.0, 2.0)
        .unwrap()
        .with_start_velocity(1.0)
        .with_end_velocity(0.5)
        .with_reversed(true)
        .with_kinematics(DifferentialDriveKinematics::new(0.7).unwrap())
        .unwrap();

    assert_eq!(config.start_velocity(), 1.0);
    assert_eq!(config.end_velocity(), 0.5);
    assert!(config.is_reversed());
    assert_eq!(config.constraints().len(), 1);
}

#[test]
fn when_loading_from_params_should_add_constraints() {
    let params: TrajectoryConfigParams = toml::from_str(
        r#"
            max_velocity = 2.5
            max_acceleration = 1.5
            end_velocity = 0.25
            track_width = 0.6
            max_centripetal_acceleration = 1.0
        "#,
    )
    .unwrap();

    let config = TrajectoryConfig::from_params(&params).unwrap();

    assert_eq!(config.max_velocity(), 2.5);
    assert_eq!(config.start_velocity(), 0.0);
    assert_eq!(config.end_velocity(), 0.25);
    assert!(!config.is_reversed());
    assert_eq!(config.constraints().len(), 2);
}

#[test]
fn when_params_have_invalid_track_width_should_fail() {
    let params = TrajectoryConfigParams {
        max_velocity: 1.0,
        max_acceleration: 1.0,
        start_velocity: 0.0,
        end_velocity: 0.0,
        reversed: false,
        track_width: Some(0.0),
        max_centripetal_acceleration: None,
    };

    assert!(matches!(
        TrajectoryConfig::from_params(&params),
        Err(Error::InvalidParameter {
            name: "track_width",
            ..
        })
    ));
}
