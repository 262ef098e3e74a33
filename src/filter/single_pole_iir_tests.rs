use super::*;
use float_cmp::{ApproxEq, F64Margin};

fn margin() -> F64Margin {
    F64Margin {
        ulps: 2,
        epsilon: 1e-9,
    }
}

#[test]
fn when_stepping_should_follow_exponential_decay() {
    let mut filter = SinglePoleIirFilter::new(0.1, 0.02).unwrap();
    let gain = (-0.2_f64).exp();

    let first = filter.calculate(1.0);
    let second = filter.calculate(1.0);

    assert!(first.approx_eq(1.0 - gain, margin()));
    assert!(second.approx_eq(1.0 - gain * gain, margin()));
    assert!(filter.gain().approx_eq(gain, margin()));
}

#[test]
fn when_input_is_held_should_converge_to_input() {
    let mut filter = SinglePoleIirFilter::new(0.05, 0.02).unwrap();

    for _ in 0..200 {
        filter.calculate(3.0);
    }

    assert!(filter.last_value().approx_eq(3.0, margin()));
}

#[test]
fn when_reset_should_clear_output() {
    let mut filter = SinglePoleIirFilter::new(0.1, 0.02).unwrap();
    filter.calculate(5.0);

    filter.reset();

    assert_eq!(filter.last_value(), 0.0);
}

#[test]
fn when_parameters_are_invalid_should_fail() {
    assert!(matches!(
        SinglePoleIirFilter::new(0.0, 0.02),
        Err(Error::InvalidParameter {
            name: "time_constant",
            ..
        })
    ));
    assert!(matches!(
        SinglePoleIirFilter::new(0.1, -0.02),
        Err(Error::InvalidParameter { name: "period", .. })
    ));
}
