use super::*;
use float_cmp::{ApproxEq, F64Margin};

fn margin() -> F64Margin {
    F64Margin {
        ulps: 2,
        epsilon: 1e-9,
    }
}

#[test]
fn test_calculate() {
    let feedforward = SimpleMotorFeedforward::new(0.5, 3.0, 0.6).unwrap();

    assert!(feedforward.calculate(2.0).approx_eq(6.5, margin()));
    assert!(feedforward.calculate(-2.0).approx_eq(-6.5, margin()));
    assert_eq!(feedforward.calculate(0.0), 0.0);
    assert!(feedforward
        .calculate_with_acceleration(2.0, 1.0)
        .approx_eq(7.1, margin()));
}

#[test]
fn when_applying_next_velocity_voltage_should_reach_next_velocity() {
    let feedforward = SimpleMotorFeedforward::new(0.0, 3.0, 0.6).unwrap();
    let current = 2.0;
    let next = 3.0;

    let voltage = feedforward.calculate_with_next_velocity(current, next);

    // Integrate dv/dt = (u - kv * v) / ka with small Euler steps over one period
    let steps = 100_000;
    let h = 0.02 / steps as f64;
    let mut velocity = current;
    for _ in 0..steps {
        velocity += h * (voltage - 3.0 * velocity) / 0.6;
    }

    assert!((velocity - next).abs() < 1e-3);
}

#[test]
fn when_velocity_gain_is_zero_should_use_constant_acceleration() {
    let feedforward = SimpleMotorFeedforward::new(0.0, 0.0, 2.0).unwrap();

    let voltage = feedforward.calculate_with_next_velocity(1.0, 1.1);

    assert!(voltage.approx_eq(2.0 * 0.1 / 0.02, margin()));
}

#[test]
fn when_acceleration_gain_is_zero_should_use_velocity_only() {
    let feedforward = SimpleMotorFeedforward::new(1.0, 2.0, 0.0).unwrap();

    assert!(feedforward
        .calculate_with_next_velocity(0.0, 3.0)
        .approx_eq(7.0, margin()));
}

#[test]
fn test_achievable_limits() {
    let feedforward = SimpleMotorFeedforward::new(1.0, 2.0, 4.0).unwrap();

    assert!(feedforward
        .max_achievable_acceleration(12.0, 2.0)
        .approx_eq(1.75, margin()));
    assert!(feedforward
        .min_achievable_acceleration(12.0, 2.0)
        .approx_eq(-4.25, margin()));
    assert!(feedforward
        .max_achievable_velocity(12.0, 1.0)
        .approx_eq(3.5, margin()));
    assert!(feedforward
        .min_achievable_velocity(12.0, 1.0)
        .approx_eq(-7.5, margin()));
}

#[test]
fn when_gains_are_invalid_should_fail() {
    assert!(matches!(
        SimpleMotorFeedforward::new(0.0, -1.0, 0.0),
        Err(Error::InvalidParameter { name: "kv", .. })
    ));
    assert!(matches!(
        SimpleMotorFeedforward::new(0.0, 1.0, -0.1),
        Err(Error::InvalidParameter { name: "ka", .. })
    ));
    assert!(matches!(
        SimpleMotorFeedforward::with_period(0.0, 1.0, 0.1, 0.0),
        Err(Error::InvalidParameter { name: "dt", .. })
    ));
}

#[test]
fn when_gain_is_zero_should_report_unbounded_limits() {
    let no_inertia = SimpleMotorFeedforward::new(1.0, 2.0, 0.0).unwrap();
    assert_eq!(no_inertia.max_achievable_acceleration(12.0, 2.0), f64::INFINITY);
    assert_eq!(no_inertia.min_achievable_acceleration(12.0, 2.0), f64::NEG_INFINITY);
    assert!(no_inertia
        .max_achievable_velocity(12.0, 1.0)
        .approx_eq(5.5, margin()));

    let no_back_emf = SimpleMotorFeedforward::new(1.0, 0.0, 0.5).unwrap();
    assert_eq!(no_back_emf.max_achievable_velocity(12.0, 1.0), f64::INFINITY);
    assert_eq!(no_back_emf.min_achievable_velocity(12.0, 1.0), f64::NEG_INFINITY);
    assert!(no_back_emf
        .max_achievable_acceleration(12.0, 2.0)
        .approx_eq(22.0, margin()));

    // Zero voltage headroom must not produce NaN
    let idle = SimpleMotorFeedforward::new(12.0, 0.0, 0.0).unwrap();
    assert!(!idle.max_achievable_acceleration(12.0, 1.0).is_nan());
    assert!(!idle.max_achievable_velocity(12.0, 0.0).is_nan());
}
