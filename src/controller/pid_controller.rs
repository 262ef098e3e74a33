use serde::Deserialize;

use crate::{math_util::input_modulus, Error};

use super::DEFAULT_PERIOD;

#[cfg(test)]
#[path = "pid_controller_tests.rs"]
mod pid_controller_tests;

/// Defines the gains of a PID controller as they are stored in a parameter file.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct PidGains {
    /// The proportional gain.
    pub kp: f64,

    /// The integral gain.
    #[serde(default)]
    pub ki: f64,

    /// The derivative gain.
    #[serde(default)]
    pub kd: f64,

    /// The loop period in seconds.
    #[serde(default = "default_period")]
    pub period: f64,
}

fn default_period() -> f64 {
    DEFAULT_PERIOD
}

/// Defines a PID feedback controller that runs at a fixed period.
///
/// The controller computes `kp * e + ki * integral(e) + kd * de/dt` where `e` is the difference
/// between the setpoint and the measurement. The integral is accumulated with a rectangular
/// rule and the derivative is the difference between consecutive errors divided by the period.
///
/// The first call to [PidController::calculate()] after creation or [PidController::reset()]
/// has no previous error to compare against, so the derivative term is zero for that call.
#[derive(Clone, Debug, PartialEq)]
pub struct PidController {
    kp: f64,
    ki: f64,
    kd: f64,

    /// The error magnitude above which the integral is discarded.
    i_zone: f64,

    /// The loop period in seconds.
    period: f64,

    maximum_integral: f64,
    minimum_integral: f64,

    maximum_input: f64,
    minimum_input: f64,
    continuous: bool,

    position_error: f64,
    velocity_error: f64,
    previous_error: f64,
    total_error: f64,

    position_tolerance: f64,
    velocity_tolerance: f64,

    setpoint: f64,
    measurement: f64,
    have_measurement: bool,
    have_setpoint: bool,
}

impl PidController {
    /// Returns a value indicating whether the error is within the tolerances.
    ///
    /// Always false before the first call to [PidController::calculate()] or after a reset.
    pub fn at_setpoint(&self) -> bool {
        self.have_measurement
            && self.have_setpoint
            && self.position_error.abs() < self.position_tolerance
            && self.velocity_error.abs() < self.velocity_tolerance
    }

    /// Returns the output of the controller for the given measurement and setpoint.
    ///
    /// ## Parameters
    ///
    /// * `measurement` - The current value of the process variable.
    /// * `setpoint` - The desired value of the process variable.
    ///
    /// ## Example
    ///
    /// ```
    /// use robot_motion::controller::PidController;
    ///
    /// let mut controller = PidController::new(1.0, 0.0, 0.0).unwrap();
    /// assert_eq!(controller.calculate(0.0, 5.0), 5.0);
    /// ```
    pub fn calculate(&mut self, measurement: f64, setpoint: f64) -> f64 {
        self.setpoint = setpoint;
        self.have_setpoint = true;
        self.measurement = measurement;
        self.previous_error = self.position_error;

        self.position_error = if self.continuous {
            let error_bound = (self.maximum_input - self.minimum_input) / 2.0;
            input_modulus(setpoint - measurement, -error_bound, error_bound)
        } else {
            setpoint - measurement
        };

        self.velocity_error = if self.have_measurement {
            (self.position_error - self.previous_error) / self.period
        } else {
            0.0
        };
        self.have_measurement = true;

        if self.position_error.abs() > self.i_zone {
            self.total_error = 0.0;
        } else if self.ki != 0.0 {
            self.total_error = (self.total_error + self.position_error * self.period).clamp(
                self.minimum_integral / self.ki,
                self.maximum_integral / self.ki,
            );
        }

        self.kp * self.position_error + self.ki * self.total_error + self.kd * self.velocity_error
    }

    /// Returns the derivative gain.
    pub fn d(&self) -> f64 {
        self.kd
    }

    /// Disables the wrapping of the error.
    pub fn disable_continuous_input(&mut self) {
        self.continuous = false;
    }

    /// Enables the wrapping of the error for inputs that are periodic, e.g. angles.
    ///
    /// With continuous input the controller takes the shortest route to the setpoint. For an
    /// angle in radians the range would be [-PI, PI].
    ///
    /// ## Parameters
    ///
    /// * `minimum_input` - The smallest value of the input range.
    /// * `maximum_input` - The largest value of the input range.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if the range is empty or not finite. The controller is
    /// not changed in that case.
    pub fn enable_continuous_input(
        &mut self,
        minimum_input: f64,
        maximum_input: f64,
    ) -> Result<(), Error> {
        if !minimum_input.is_finite() {
            return Err(Error::InvalidParameter {
                name: "minimum_input",
                value: minimum_input,
            });
        }

        if !(maximum_input.is_finite() && maximum_input > minimum_input) {
            return Err(Error::InvalidParameter {
                name: "maximum_input",
                value: maximum_input,
            });
        }

        self.continuous = true;
        self.minimum_input = minimum_input;
        self.maximum_input = maximum_input;
        Ok(())
    }

    /// Creates a controller from the deserialized gains.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if any of the gains is negative or the period is not
    /// positive.
    pub fn from_gains(gains: &PidGains) -> Result<Self, Error> {
        Self::with_period(gains.kp, gains.ki, gains.kd, gains.period)
    }

    /// Returns the integral gain.
    pub fn i(&self) -> f64 {
        self.ki
    }

    /// Returns the error magnitude above which the integral is discarded.
    pub fn i_zone(&self) -> f64 {
        self.i_zone
    }

    /// Returns a value indicating whether the error is wrapped.
    pub fn is_continuous_input_enabled(&self) -> bool {
        self.continuous
    }

    /// Creates a new controller with the default period of 20 ms.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if any of the gains is negative.
    pub fn new(kp: f64, ki: f64, kd: f64) -> Result<Self, Error> {
        Self::with_period(kp, ki, kd, DEFAULT_PERIOD)
    }

    /// Returns the proportional gain.
    pub fn p(&self) -> f64 {
        self.kp
    }

    /// Returns the loop period in seconds.
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Returns the error of the last call to [PidController::calculate()].
    pub fn position_error(&self) -> f64 {
        self.position_error
    }

    /// Clears the integral and the error memory.
    pub fn reset(&mut self) {
        self.position_error = 0.0;
        self.previous_error = 0.0;
        self.total_error = 0.0;
        self.velocity_error = 0.0;
        self.have_measurement = false;
    }

    /// Sets the error magnitude above which the integral is discarded.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if the zone is negative.
    pub fn set_i_zone(&mut self, i_zone: f64) -> Result<(), Error> {
        if i_zone < 0.0 || i_zone.is_nan() {
            return Err(Error::InvalidParameter {
                name: "i_zone",
                value: i_zone,
            });
        }

        self.i_zone = i_zone;
        Ok(())
    }

    /// Sets the range of the integral term, i.e. of `ki * integral(e)`.
    ///
    /// The default range is [-1.0, 1.0].
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if a bound is NaN or if the minimum is larger than the
    /// maximum. The range is not changed in that case.
    pub fn set_integrator_range(
        &mut self,
        minimum_integral: f64,
        maximum_integral: f64,
    ) -> Result<(), Error> {
        if minimum_integral.is_nan() {
            return Err(Error::InvalidParameter {
                name: "minimum_integral",
                value: minimum_integral,
            });
        }

        if !(maximum_integral >= minimum_integral) {
            return Err(Error::InvalidParameter {
                name: "maximum_integral",
                value: maximum_integral,
            });
        }

        self.minimum_integral = minimum_integral;
        self.maximum_integral = maximum_integral;
        Ok(())
    }

    /// Sets all three gains.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if any of the gains is negative. The gains are not
    /// changed in that case.
    pub fn set_pid(&mut self, kp: f64, ki: f64, kd: f64) -> Result<(), Error> {
        validate_gains(kp, ki, kd)?;

        self.kp = kp;
        self.ki = ki;
        self.kd = kd;
        Ok(())
    }

    /// Sets the setpoint used by [PidController::at_setpoint()].
    pub fn set_setpoint(&mut self, setpoint: f64) {
        self.setpoint = setpoint;
        self.have_setpoint = true;

        if !self.have_measurement {
            return;
        }

        self.position_error = if self.continuous {
            let error_bound = (self.maximum_input - self.minimum_input) / 2.0;
            input_modulus(setpoint - self.measurement, -error_bound, error_bound)
        } else {
            setpoint - self.measurement
        };
        self.velocity_error = (self.position_error - self.previous_error) / self.period;
    }

    /// Sets the tolerances used by [PidController::at_setpoint()].
    ///
    /// ## Parameters
    ///
    /// * `position_tolerance` - The allowed error. Defaults to 0.05.
    /// * `velocity_tolerance` - The allowed rate of change of the error. Defaults to infinity.
    pub fn set_tolerance(&mut self, position_tolerance: f64, velocity_tolerance: f64) {
        self.position_tolerance = position_tolerance;
        self.velocity_tolerance = velocity_tolerance;
    }

    /// Returns the current setpoint.
    pub fn setpoint(&self) -> f64 {
        self.setpoint
    }

    /// Returns the rate of change of the error of the last call to
    /// [PidController::calculate()].
    pub fn velocity_error(&self) -> f64 {
        self.velocity_error
    }

    /// Creates a new controller.
    ///
    /// ## Parameters
    ///
    /// * `kp` - The proportional gain.
    /// * `ki` - The integral gain.
    /// * `kd` - The derivative gain.
    /// * `period` - The time between calls to [PidController::calculate()] in seconds.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if any of the gains is negative or the period is not
    /// positive.
    pub fn with_period(kp: f64, ki: f64, kd: f64, period: f64) -> Result<Self, Error> {
        validate_gains(kp, ki, kd)?;

        if !(period.is_finite() && period > 0.0) {
            return Err(Error::InvalidParameter {
                name: "period",
                value: period,
            });
        }

        Ok(Self {
            kp,
            ki,
            kd,
            i_zone: f64::INFINITY,
            period,
            maximum_integral: 1.0,
            minimum_integral: -1.0,
            maximum_input: 0.0,
            minimum_input: 0.0,
            continuous: false,
            position_error: 0.0,
            velocity_error: 0.0,
            previous_error: 0.0,
            total_error: 0.0,
            position_tolerance: 0.05,
            velocity_tolerance: f64::INFINITY,
            setpoint: 0.0,
            measurement: 0.0,
            have_measurement: false,
            have_setpoint: false,
        })
    }
}

fn validate_gains(kp: f64, ki: f64, kd: f64) -> Result<(), Error> {
    for (name, value) in [("kp", kp), ("ki", ki), ("kd", kd)] {
        if !(value.is_finite() && value >= 0.0) {
            return Err(Error::InvalidParameter { name, value });
        }
    }

    Ok(())
}
