use super::*;

#[test]
fn when_dispatching_moving_average_should_average() {
    let mut filter = LinearFilter::moving_average(3).unwrap();

    filter.calculate(1.0);
    filter.calculate(2.0);
    filter.calculate(3.0);

    assert_eq!(filter.calculate(4.0), 3.0);
    assert_eq!(filter.last_value(), 3.0);

    filter.reset();
    assert_eq!(filter.last_value(), 0.0);
}

#[test]
fn when_dispatching_single_pole_iir_should_smooth() {
    let mut filter = LinearFilter::single_pole_iir(0.1, 0.02).unwrap();

    let value = filter.calculate(1.0);

    assert!(value > 0.0 && value < 1.0);
    assert_eq!(filter.last_value(), value);
    assert!(matches!(filter, LinearFilter::SinglePoleIir(_)));
}

#[test]
fn when_factory_arguments_are_invalid_should_fail() {
    assert!(LinearFilter::moving_average(0).is_err());
    assert!(LinearFilter::single_pole_iir(0.1, 0.0).is_err());
}
