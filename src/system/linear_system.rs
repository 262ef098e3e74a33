extern crate nalgebra as na;

use na::{SMatrix, SVector};

use crate::Error;

use super::state_space_util::discretize_ab;

#[cfg(test)]
#[path = "linear_system_tests.rs"]
mod linear_system_tests;

/// Defines a continuous-time linear plant of the form
///
/// ```text
/// dx/dt = A x + B u
///     y = C x + D u
/// ```
///
/// with `S` states, `I` inputs and `O` outputs. The dimensions are fixed when the plant is
/// created so a plant can never be combined with vectors of the wrong size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearSystem<const S: usize, const I: usize, const O: usize> {
    a: SMatrix<f64, S, S>,
    b: SMatrix<f64, S, I>,
    c: SMatrix<f64, O, S>,
    d: SMatrix<f64, O, I>,
}

impl<const S: usize, const I: usize, const O: usize> LinearSystem<S, I, O> {
    /// Returns the system matrix.
    pub fn a(&self) -> &SMatrix<f64, S, S> {
        &self.a
    }

    /// Returns the input matrix.
    pub fn b(&self) -> &SMatrix<f64, S, I> {
        &self.b
    }

    /// Returns the output matrix.
    pub fn c(&self) -> &SMatrix<f64, O, S> {
        &self.c
    }

    /// Returns the state that follows `x` after applying the input `u` for `dt` seconds.
    ///
    /// The input is held constant over the time step.
    ///
    /// ## Errors
    ///
    /// Returns [Error::NumericalInstability] if the time step is negative or not finite, or if
    /// the resulting state is not finite.
    pub fn calculate_x(
        &self,
        x: &SVector<f64, S>,
        u: &SVector<f64, I>,
        dt: f64,
    ) -> Result<SVector<f64, S>, Error> {
        let (a_d, b_d) = discretize_ab(&self.a, &self.b, dt)?;
        let next = a_d * x + b_d * u;
        if next.iter().any(|v| !v.is_finite()) {
            return Err(Error::NumericalInstability { dt });
        }

        Ok(next)
    }

    /// Returns the output for the state `x` and the input `u`.
    pub fn calculate_y(&self, x: &SVector<f64, S>, u: &SVector<f64, I>) -> SVector<f64, O> {
        self.c * x + self.d * u
    }

    /// Returns the feedthrough matrix.
    pub fn d(&self) -> &SMatrix<f64, O, I> {
        &self.d
    }

    /// Creates a plant from matrices given as row-major slices.
    ///
    /// ## Errors
    ///
    /// Returns [Error::DimensionMismatch] if the length of a slice does not match the size of
    /// the matrix it describes, or [Error::InvalidParameter] if a value is not finite.
    ///
    /// ## Example
    ///
    /// ```
    /// use robot_motion::system::LinearSystem;
    ///
    /// let plant = LinearSystem::<2, 1, 1>::from_slices(
    ///     &[0.0, 1.0, 0.0, -2.0],
    ///     &[0.0, 3.0],
    ///     &[1.0, 0.0],
    ///     &[0.0],
    /// )
    /// .unwrap();
    /// assert_eq!(plant.a()[(1, 1)], -2.0);
    /// ```
    pub fn from_slices(a: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> Result<Self, Error> {
        check_length(a, S * S)?;
        check_length(b, S * I)?;
        check_length(c, O * S)?;
        check_length(d, O * I)?;

        Self::new(
            SMatrix::from_row_slice(a),
            SMatrix::from_row_slice(b),
            SMatrix::from_row_slice(c),
            SMatrix::from_row_slice(d),
        )
    }

    /// Creates a plant from its matrices.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if one of the matrices contains a value that is not
    /// finite.
    pub fn new(
        a: SMatrix<f64, S, S>,
        b: SMatrix<f64, S, I>,
        c: SMatrix<f64, O, S>,
        d: SMatrix<f64, O, I>,
    ) -> Result<Self, Error> {
        check_finite("a", a.iter())?;
        check_finite("b", b.iter())?;
        check_finite("c", c.iter())?;
        check_finite("d", d.iter())?;

        Ok(Self { a, b, c, d })
    }
}

fn check_finite<'a>(name: &'static str, mut values: impl Iterator<Item = &'a f64>) -> Result<(), Error> {
    match values.find(|v| !v.is_finite()) {
        Some(value) => Err(Error::InvalidParameter { name, value: *value }),
        None => Ok(()),
    }
}

fn check_length(values: &[f64], expected: usize) -> Result<(), Error> {
    if values.len() == expected {
        Ok(())
    } else {
        Err(Error::DimensionMismatch {
            expected,
            actual: values.len(),
        })
    }
}
