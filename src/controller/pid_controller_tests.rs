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
fn when_only_proportional_gain_should_scale_error() {
    let mut controller = PidController::new(1.0, 0.0, 0.0).unwrap();
    assert_eq!(controller.calculate(0.0, 5.0), 5.0);

    let mut controller = PidController::new(2.0, 0.0, 0.0).unwrap();
    assert_eq!(controller.calculate(1.0, -1.0), -4.0);
}

#[test]
fn when_creating_with_invalid_parameters_should_fail() {
    assert_eq!(
        PidController::new(-1.0, 0.0, 0.0).unwrap_err(),
        Error::InvalidParameter {
            name: "kp",
            value: -1.0
        }
    );
    assert!(matches!(
        PidController::new(0.0, 0.0, f64::NAN),
        Err(Error::InvalidParameter { name: "kd", .. })
    ));
    assert_eq!(
        PidController::with_period(1.0, 0.0, 0.0, 0.0).unwrap_err(),
        Error::InvalidParameter {
            name: "period",
            value: 0.0
        }
    );
}

#[test]
fn when_first_called_should_have_no_derivative_kick() {
    let mut controller = PidController::new(0.0, 0.0, 1.0).unwrap();

    assert_eq!(controller.calculate(0.0, 10.0), 0.0);
    assert_eq!(controller.velocity_error(), 0.0);

    // The error drops from 10 to 9 over one period
    let output = controller.calculate(1.0, 10.0);
    assert!(output.approx_eq(-1.0 / 0.02, margin()));
}

#[test]
fn when_reset_should_have_no_derivative_kick() {
    let mut controller = PidController::new(0.0, 0.0, 1.0).unwrap();
    controller.calculate(0.0, 1.0);
    controller.calculate(0.5, 1.0);

    controller.reset();

    assert_eq!(controller.calculate(0.0, 20.0), 0.0);
}

#[test]
fn when_integrating_should_accumulate_error_times_period() {
    let mut controller = PidController::new(0.0, 1.0, 0.0).unwrap();
    controller.set_integrator_range(-100.0, 100.0).unwrap();

    let mut output = 0.0;
    for _ in 0..5 {
        output = controller.calculate(0.0, 2.0);
    }

    assert!(output.approx_eq(5.0 * 2.0 * 0.02, margin()));
}

#[test]
fn when_integral_exceeds_range_should_clamp() {
    let mut controller = PidController::new(0.0, 2.0, 0.0).unwrap();
    controller.set_integrator_range(-0.5, 0.5).unwrap();

    let mut output = 0.0;
    for _ in 0..1000 {
        output = controller.calculate(0.0, 1000.0);
    }

    assert!(output.approx_eq(0.5, margin()));
}

#[test]
fn when_error_outside_i_zone_should_discard_integral() {
    let mut controller = PidController::new(0.0, 1.0, 0.0).unwrap();
    controller.set_i_zone(1.0).unwrap();

    let output = controller.calculate(0.0, 0.5);
    assert!(output.approx_eq(0.5 * 0.02, margin()));

    let output = controller.calculate(0.0, 2.0);
    assert_eq!(output, 0.0);

    assert!(controller.set_i_zone(-1.0).is_err());
}

#[test]
fn when_resetting_should_clear_integral() {
    let mut controller = PidController::new(0.0, 1.0, 0.0).unwrap();
    controller.calculate(0.0, 1.0);
    controller.calculate(0.0, 1.0);

    controller.reset();

    let output = controller.calculate(0.0, 1.0);
    assert!(output.approx_eq(0.02, margin()));
}

#[test]
fn when_input_is_continuous_should_take_shortest_route() {
    let mut controller = PidController::new(1.0, 0.0, 0.0).unwrap();
    controller.enable_continuous_input(-PI, PI).unwrap();
    assert!(controller.is_continuous_input_enabled());

    // From 170 degrees to -170 degrees is a 20 degree turn in the positive direction
    let output = controller.calculate(170.0_f64.to_radians(), (-170.0_f64).to_radians());
    assert!(output.approx_eq(20.0_f64.to_radians(), margin()));

    controller.disable_continuous_input();
    let output = controller.calculate(170.0_f64.to_radians(), (-170.0_f64).to_radians());
    assert!(output.approx_eq((-340.0_f64).to_radians(), margin()));
}

#[test]
fn when_error_is_within_tolerance_should_be_at_setpoint() {
    let mut controller = PidController::new(1.0, 0.0, 0.0).unwrap();
    controller.set_tolerance(0.1, f64::INFINITY);

    assert!(!controller.at_setpoint());

    controller.calculate(0.0, 1.0);
    assert!(!controller.at_setpoint());

    controller.calculate(0.95, 1.0);
    assert!(controller.at_setpoint());
    assert!(controller.position_error().approx_eq(0.05, margin()));

    controller.reset();
    assert!(!controller.at_setpoint());
}

#[test]
fn when_error_changes_fast_should_not_be_at_setpoint() {
    let mut controller = PidController::new(1.0, 0.0, 0.0).unwrap();
    controller.set_tolerance(0.1, 1.0);

    controller.calculate(0.0, 1.0);
    controller.calculate(0.95, 1.0);

    // The error changed by 0.95 in 20 ms
    assert!(!controller.at_setpoint());
    assert!(controller.velocity_error().approx_eq(-0.95 / 0.02, margin()));
}

#[test]
fn when_setting_gains_should_update_gains() {
    let mut controller = PidController::new(1.0, 0.0, 0.0).unwrap();

    controller.set_pid(2.0, 0.5, 0.1).unwrap();
    assert_eq!((controller.p(), controller.i(), controller.d()), (2.0, 0.5, 0.1));

    assert!(controller.set_pid(-2.0, 0.5, 0.1).is_err());
    assert_eq!(controller.p(), 2.0);
}

#[test]
fn when_loading_gains_should_use_default_period() {
    let gains: PidGains = toml::from_str("kp = 1.5\nkd = 0.25").unwrap();
    let controller = PidController::from_gains(&gains).unwrap();

    assert_eq!(controller.p(), 1.5);
    assert_eq!(controller.i(), 0.0);
    assert_eq!(controller.d(), 0.25);
    assert_eq!(controller.period(), 0.02);
}

#[test]
fn when_integrator_range_is_inverted_should_fail() {
    let mut controller = PidController::new(1.0, 1.0, 0.0).unwrap();

    assert_eq!(
        controller.set_integrator_range(1.0, -1.0),
        Err(Error::InvalidParameter {
            name: "maximum_integral",
            value: -1.0
        })
    );
    assert!(matches!(
        controller.set_integrator_range(f64::NAN, 1.0),
        Err(Error::InvalidParameter {
            name: "minimum_integral",
            ..
        })
    ));
    assert!(matches!(
        controller.set_integrator_range(-1.0, f64::NAN),
        Err(Error::InvalidParameter {
            name: "maximum_integral",
            ..
        })
    ));

    // The default range of [-1, 1] is kept, so the integral is still clamped.
    let output = controller.calculate(0.0, 0.5);
    assert!(output.approx_eq(0.5 + 0.5 * 0.02, margin()));
}

#[test]
fn when_continuous_range_is_empty_should_fail() {
    let mut controller = PidController::new(1.0, 0.0, 0.0).unwrap();

    assert_eq!(
        controller.enable_continuous_input(PI, -PI),
        Err(Error::InvalidParameter {
            name: "maximum_input",
            value: -PI
        })
    );
    assert!(matches!(
        controller.enable_continuous_input(1.0, 1.0),
        Err(Error::InvalidParameter {
            name: "maximum_input",
            ..
        })
    ));
    assert!(matches!(
        controller.enable_continuous_input(f64::NEG_INFINITY, 1.0),
        Err(Error::InvalidParameter {
            name: "minimum_input",
            ..
        })
    ));
    assert!(!controller.is_continuous_input_enabled());

    let output = controller.calculate(170.0_f64.to_radians(), (-170.0_f64).to_radians());
    assert!(output.approx_eq((-340.0_f64).to_radians(), margin()));
}
