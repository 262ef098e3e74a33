use crate::Error;

#[cfg(test)]
#[path = "single_pole_iir_tests.rs"]
mod single_pole_iir_tests;

/// A first order low-pass filter, `y = a * y_prev + (1 - a) * x` with
/// `a = exp(-period / time_constant)`.
#[derive(Clone, Debug, PartialEq)]
pub struct SinglePoleIirFilter {
    gain: f64,
    last_value: f64,
}

impl SinglePoleIirFilter {
    /// Adds a sample and returns the filtered value.
    pub fn calculate(&mut self, input: f64) -> f64 {
        self.last_value = self.gain * self.last_value + (1.0 - self.gain) * input;
        self.last_value
    }

    /// Returns the weight of the previous output.
    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// Returns the last filtered value, or zero if no sample has been added.
    pub fn last_value(&self) -> f64 {
        self.last_value
    }

    /// Creates a new filter.
    ///
    /// ## Parameters
    ///
    /// * `time_constant` - The time constant of the filter in seconds.
    /// * `period` - The time between samples in seconds.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if the time constant or the period is not positive.
    pub fn new(time_constant: f64, period: f64) -> Result<Self, Error> {
        if !(time_constant.is_finite() && time_constant > 0.0) {
            return Err(Error::InvalidParameter {
                name: "time_constant",
                value: time_constant,
            });
        }

        if !(period.is_finite() && period > 0.0) {
            return Err(Error::InvalidParameter {
                name: "period",
                value: period,
            });
        }

        Ok(Self {
            gain: (-period / time_constant).exp(),
            last_value: 0.0,
        })
    }

    /// Clears the retained output.
    pub fn reset(&mut self) {
        self.last_value = 0.0;
    }
}
