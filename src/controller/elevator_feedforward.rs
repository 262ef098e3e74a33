use crate::{math_util::sgn, Error};

use super::{
    simple_motor_feedforward::{discretize_velocity_model, validate_gains},
    DEFAULT_PERIOD,
};

#[cfg(test)]
#[path = "elevator_feedforward_tests.rs"]
mod elevator_feedforward_tests;

/// Computes the voltage needed by an elevator to reach a velocity and an acceleration.
///
/// The model is `V = ks * sgn(v) + kg + kv * v + ka * a`, where `kg` is the voltage that holds
/// the carriage against gravity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElevatorFeedforward {
    ks: f64,
    kg: f64,
    kv: f64,
    ka: f64,
    dt: f64,
}

impl ElevatorFeedforward {
    /// Returns the voltage for the given velocity, ignoring acceleration.
    ///
    /// ## Example
    ///
    /// ```
    /// use robot_motion::controller::ElevatorFeedforward;
    ///
    /// let feedforward = ElevatorFeedforward::new(0.0, 0.0, 2.0, 0.0).unwrap();
    /// assert_eq!(feedforward.calculate(3.0), 6.0);
    /// ```
    pub fn calculate(&self, velocity: f64) -> f64 {
        self.calculate_with_acceleration(velocity, 0.0)
    }

    /// Returns the voltage for the given velocity and acceleration.
    pub fn calculate_with_acceleration(&self, velocity: f64, acceleration: f64) -> f64 {
        self.ks * sgn(velocity) + self.kg + self.kv * velocity + self.ka * acceleration
    }

    /// Returns the voltage that changes the velocity from `current_velocity` to
    /// `next_velocity` over one period.
    pub fn calculate_with_next_velocity(&self, current_velocity: f64, next_velocity: f64) -> f64 {
        if self.ka == 0.0 {
            return self.ks * sgn(next_velocity) + self.kg + self.kv * next_velocity;
        }

        let (a_d, b_d) = discretize_velocity_model(self.kv, self.ka, self.dt);
        self.kg + self.ks * sgn(current_velocity) + (next_velocity - a_d * current_velocity) / b_d
    }

    /// Returns the gravity gain.
    pub fn kg(&self) -> f64 {
        self.kg
    }

    /// Returns the largest acceleration that can be reached at the given velocity.
    ///
    /// Returns positive infinity when `ka` is zero.
    pub fn max_achievable_acceleration(&self, max_voltage: f64, velocity: f64) -> f64 {
        if self.ka == 0.0 {
            return f64::INFINITY;
        }

        (max_voltage - self.ks * sgn(velocity) - self.kg - velocity * self.kv) / self.ka
    }

    /// Returns the largest velocity that can be held while accelerating at `acceleration`.
    ///
    /// Returns positive infinity when `kv` is zero.
    pub fn max_achievable_velocity(&self, max_voltage: f64, acceleration: f64) -> f64 {
        if self.kv == 0.0 {
            return f64::INFINITY;
        }

        (max_voltage - self.ks - self.kg - acceleration * self.ka) / self.kv
    }

    /// Returns the smallest (most negative) acceleration that can be reached at the given
    /// velocity.
    ///
    /// Returns negative infinity when `ka` is zero.
    pub fn min_achievable_acceleration(&self, max_voltage: f64, velocity: f64) -> f64 {
        if self.ka == 0.0 {
            return f64::NEG_INFINITY;
        }

        self.max_achievable_acceleration(-max_voltage, velocity)
    }

    /// Returns the smallest (most negative) velocity that can be held while accelerating at
    /// `acceleration`.
    ///
    /// Returns negative infinity when `kv` is zero.
    pub fn min_achievable_velocity(&self, max_voltage: f64, acceleration: f64) -> f64 {
        if self.kv == 0.0 {
            return f64::NEG_INFINITY;
        }

        (-max_voltage + self.ks - self.kg - acceleration * self.ka) / self.kv
    }

    /// Creates a new feedforward with the default period of 20 ms.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if `kv` or `ka` is negative.
    pub fn new(ks: f64, kg: f64, kv: f64, ka: f64) -> Result<Self, Error> {
        Self::with_period(ks, kg, kv, ka, DEFAULT_PERIOD)
    }

    /// Creates a new feedforward.
    ///
    /// ## Parameters
    ///
    /// * `ks` - The static friction gain in volts.
    /// * `kg` - The gravity gain in volts.
    /// * `kv` - The velocity gain in volts per meter per second.
    /// * `ka` - The acceleration gain in volts per meter per second squared.
    /// * `dt` - The period in seconds used by
    ///   [ElevatorFeedforward::calculate_with_next_velocity()].
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if `kv` or `ka` is negative or if the period is not
    /// positive.
    pub fn with_period(ks: f64, kg: f64, kv: f64, ka: f64, dt: f64) -> Result<Self, Error> {
        validate_gains(kv, ka, dt)?;
        Ok(Self { ks, kg, kv, ka, dt })
    }
}
