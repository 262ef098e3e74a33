use crate::Error;

#[cfg(test)]
#[path = "moving_average_tests.rs"]
mod moving_average_tests;

/// Averages the most recent samples of a signal.
///
/// Until the filter has received as many samples as it has taps, the average is taken over the
/// samples received so far.
#[derive(Clone, Debug, PartialEq)]
pub struct MovingAverageFilter {
    samples: Vec<f64>,
    next: usize,
    count: usize,
    last_value: f64,
}

impl MovingAverageFilter {
    /// Adds a sample and returns the average of the most recent samples.
    pub fn calculate(&mut self, input: f64) -> f64 {
        let taps = self.samples.len();
        self.samples[self.next] = input;
        self.next = (self.next + 1) % taps;
        self.count = (self.count + 1).min(taps);

        let sum: f64 = if self.count == taps {
            self.samples.iter().sum()
        } else {
            self.samples[..self.count].iter().sum()
        };

        self.last_value = sum / self.count as f64;
        self.last_value
    }

    /// Returns the last average, or zero if no sample has been added.
    pub fn last_value(&self) -> f64 {
        self.last_value
    }

    /// Creates a filter that averages the last `taps` samples.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if `taps` is zero.
    pub fn new(taps: usize) -> Result<Self, Error> {
        if taps == 0 {
            return Err(Error::InvalidParameter {
                name: "taps",
                value: 0.0,
            });
        }

        Ok(Self {
            samples: vec![0.0; taps],
            next: 0,
            count: 0,
            last_value: 0.0,
        })
    }

    /// Clears the samples.
    pub fn reset(&mut self) {
        self.samples.iter_mut().for_each(|v| *v = 0.0);
        self.next = 0;
        self.count = 0;
        self.last_value = 0.0;
    }

    /// Returns the number of samples that are averaged.
    pub fn taps(&self) -> usize {
        self.samples.len()
    }
}
