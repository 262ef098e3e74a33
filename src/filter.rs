/// Defines the moving average filter.
pub mod moving_average;

/// Defines the single-pole infinite impulse response filter.
pub mod single_pole_iir;

use crate::Error;

pub use moving_average::MovingAverageFilter;
pub use single_pole_iir::SinglePoleIirFilter;

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;

/// A scalar filter that is selected when it is created.
///
/// ## Example
///
/// ```
/// use robot_motion::filter::LinearFilter;
///
/// let mut filter = LinearFilter::moving_average(2).unwrap();
/// filter.calculate(1.0);
/// assert_eq!(filter.calculate(3.0), 2.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum LinearFilter {
    /// Averages the last samples.
    MovingAverage(MovingAverageFilter),

    /// Smooths the samples with an exponential decay.
    SinglePoleIir(SinglePoleIirFilter),
}

impl LinearFilter {
    /// Adds a sample to the filter and returns the filtered value.
    pub fn calculate(&mut self, input: f64) -> f64 {
        match self {
            LinearFilter::MovingAverage(filter) => filter.calculate(input),
            LinearFilter::SinglePoleIir(filter) => filter.calculate(input),
        }
    }

    /// Returns the last filtered value, or zero if no sample has been added.
    pub fn last_value(&self) -> f64 {
        match self {
            LinearFilter::MovingAverage(filter) => filter.last_value(),
            LinearFilter::SinglePoleIir(filter) => filter.last_value(),
        }
    }

    /// Creates a filter that averages the last `taps` samples.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if `taps` is zero.
    pub fn moving_average(taps: usize) -> Result<Self, Error> {
        Ok(LinearFilter::MovingAverage(MovingAverageFilter::new(taps)?))
    }

    /// Clears the history of the filter.
    pub fn reset(&mut self) {
        match self {
            LinearFilter::MovingAverage(filter) => filter.reset(),
            LinearFilter::SinglePoleIir(filter) => filter.reset(),
        }
    }

    /// Creates a low-pass filter with the given time constant.
    ///
    /// ## Parameters
    ///
    /// * `time_constant` - The time constant of the filter in seconds.
    /// * `period` - The time between samples in seconds.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if the time constant or the period is not positive.
    pub fn single_pole_iir(time_constant: f64, period: f64) -> Result<Self, Error> {
        Ok(LinearFilter::SinglePoleIir(SinglePoleIirFilter::new(
            time_constant,
            period,
        )?))
    }
}
