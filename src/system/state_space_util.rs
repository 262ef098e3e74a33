extern crate nalgebra as na;

use na::{DMatrix, SMatrix, SVector};

use crate::Error;

#[cfg(test)]
#[path = "state_space_util_tests.rs"]
mod state_space_util_tests;

/// Discretizes the continuous-time system `dx/dt = A x + B u` with a zero-order hold on the
/// input.
///
/// The discrete matrices are taken from the matrix exponential of the block matrix
/// `[[A, B], [0, 0]] * dt`, which is exact for any time step as long as the input is constant
/// over the step.
///
/// ## Parameters
///
/// * `a` - The continuous system matrix.
/// * `b` - The continuous input matrix.
/// * `dt` - The time step in seconds.
///
/// ## Errors
///
/// Returns [Error::NumericalInstability] if the time step is negative or not finite, or if the
/// discretized matrices contain non-finite values.
pub fn discretize_ab<const S: usize, const I: usize>(
    a: &SMatrix<f64, S, S>,
    b: &SMatrix<f64, S, I>,
    dt: f64,
) -> Result<(SMatrix<f64, S, S>, SMatrix<f64, S, I>), Error> {
    validate_time_step(dt)?;

    let size = S + I;
    let block = DMatrix::<f64>::from_fn(size, size, |row, column| {
        if row >= S {
            0.0
        } else if column < S {
            a[(row, column)] * dt
        } else {
            b[(row, column - S)] * dt
        }
    });

    let phi = block.exp();

    let a_d = SMatrix::<f64, S, S>::from_fn(|row, column| phi[(row, column)]);
    let b_d = SMatrix::<f64, S, I>::from_fn(|row, column| phi[(row, column + S)]);

    if a_d.iter().chain(b_d.iter()).any(|v| !v.is_finite()) {
        return Err(Error::NumericalInstability { dt });
    }

    Ok((a_d, b_d))
}

/// Scales the input vector so that no element exceeds `max_magnitude`.
///
/// All elements are scaled by the same factor, so the direction of the input is preserved. An
/// input that is already within the limit is returned unchanged. The magnitude must not be
/// negative.
///
/// ## Example
///
/// ```
/// use nalgebra::Vector2;
/// use robot_motion::system::state_space_util::desaturate_input_vector;
///
/// let u = desaturate_input_vector(&Vector2::new(24.0, -6.0), 12.0);
/// assert_eq!(u, Vector2::new(12.0, -3.0));
/// ```
pub fn desaturate_input_vector<const I: usize>(
    input: &SVector<f64, I>,
    max_magnitude: f64,
) -> SVector<f64, I> {
    let largest = input.amax();
    if largest > max_magnitude {
        input * (max_magnitude / largest)
    } else {
        *input
    }
}

/// Checks that the time step can be used to advance a plant.
pub(crate) fn validate_time_step(dt: f64) -> Result<(), Error> {
    if dt.is_finite() && dt >= 0.0 {
        Ok(())
    } else {
        Err(Error::NumericalInstability { dt })
    }
}
