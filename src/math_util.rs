//! Defines helper functions for scalar values, most notably the wrapping of values that live in a
//! periodic number space.
//!
//! A linear number space has boundaries at +infinity and -infinity and does not wrap around. A
//! periodic number space on the other hand has lower and upper boundaries at specific values and
//! wraps around, i.e. in order to go from the lower boundary to the upper boundary you can pass
//! through all the numbers between the boundaries, or you can go backwards from the lower boundary
//! and end up directly at the upper boundary. Angles are the typical example of this kind of space.
//!
//! The [input_modulus()] function maps a value into an arbitrary periodic space. The
//! [angle_modulus()] function maps an angle in radians into the space [-PI, PI].

use std::f64::consts::PI;

#[cfg(test)]
#[path = "math_util_tests.rs"]
mod math_util_tests;

/// Returns the value in the periodic space [minimum_input, maximum_input] that is equivalent to
/// the given input.
///
/// ## Parameters
///
/// * `input` - The value that should be wrapped.
/// * `minimum_input` - The lower boundary of the periodic space.
/// * `maximum_input` - The upper boundary of the periodic space.
///
/// ## Example
///
/// ```
/// use robot_motion::math_util::input_modulus;
///
/// assert_eq!(input_modulus(370.0, 0.0, 360.0), 10.0);
/// assert_eq!(input_modulus(-10.0, 0.0, 360.0), 350.0);
/// ```
pub fn input_modulus(input: f64, minimum_input: f64, maximum_input: f64) -> f64 {
    let modulus = maximum_input - minimum_input;

    // Wrap input if it's above the maximum input
    let number_of_max = ((input - minimum_input) / modulus).trunc();
    let mut result = input - number_of_max * modulus;

    // Wrap input if it's below the minimum input
    let number_of_min = ((result - maximum_input) / modulus).trunc();
    result -= number_of_min * modulus;

    result
}

/// Returns the angle in the range [-PI, PI] that is equivalent to the given angle.
///
/// ## Parameters
///
/// * `angle_in_radians` - The angle that should be wrapped.
///
/// ## Example
///
/// ```
/// use core::f64::consts::PI;
/// use robot_motion::math_util::angle_modulus;
///
/// assert!((angle_modulus(1.5 * PI) - (-0.5 * PI)).abs() < 1e-12);
/// ```
pub fn angle_modulus(angle_in_radians: f64) -> f64 {
    input_modulus(angle_in_radians, -PI, PI)
}

/// Returns zero if the value is within the deadband, otherwise the value is rescaled so that the
/// output is continuous at the edge of the deadband and reaches `maximum_magnitude` at
/// `maximum_magnitude`.
///
/// ## Parameters
///
/// * `value` - The input value.
/// * `deadband` - The half width of the band around zero that maps to zero.
/// * `maximum_magnitude` - The largest magnitude the input can take.
pub fn apply_deadband(value: f64, deadband: f64, maximum_magnitude: f64) -> f64 {
    let magnitude = value.abs();
    if magnitude <= deadband {
        return 0.0;
    }

    if maximum_magnitude.is_infinite() {
        return value - deadband * value.signum();
    }

    value.signum() * maximum_magnitude * (magnitude - deadband) / (maximum_magnitude - deadband)
}

/// Linearly interpolates between `start` and `end`.
///
/// A fraction of 0.0 returns `start`, a fraction of 1.0 returns `end`. The fraction is clamped
/// to [0.0, 1.0].
pub fn lerp(start: f64, end: f64, fraction: f64) -> f64 {
    start + (end - start) * fraction.clamp(0.0, 1.0)
}

/// Returns the sign of the value, with zero (positive or negative) mapping to 0.0.
///
/// This differs from [f64::signum()] which returns 1.0 for +0.0.
pub fn sgn(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
