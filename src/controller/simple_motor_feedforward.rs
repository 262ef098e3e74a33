use crate::{math_util::sgn, Error};

use super::DEFAULT_PERIOD;

#[cfg(test)]
#[path = "simple_motor_feedforward_tests.rs"]
mod simple_motor_feedforward_tests;

/// Computes the voltage needed by a permanent magnet DC motor to reach a velocity and an
/// acceleration.
///
/// The model is `V = ks * sgn(v) + kv * v + ka * a`, where `ks` is the voltage needed to overcome
/// static friction, `kv` the voltage per unit of velocity and `ka` the voltage per unit of
/// acceleration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimpleMotorFeedforward {
    ks: f64,
    kv: f64,
    ka: f64,
    dt: f64,
}

impl SimpleMotorFeedforward {
    /// Returns the voltage for the given velocity, ignoring acceleration.
    pub fn calculate(&self, velocity: f64) -> f64 {
        self.calculate_with_acceleration(velocity, 0.0)
    }

    /// Returns the voltage for the given velocity and acceleration.
    pub fn calculate_with_acceleration(&self, velocity: f64, acceleration: f64) -> f64 {
        self.ks * sgn(velocity) + self.kv * velocity + self.ka * acceleration
    }

    /// Returns the voltage that changes the velocity from `current_velocity` to
    /// `next_velocity` over one period.
    ///
    /// The voltage is found by inverting the discretized motor model, which is exact for a
    /// voltage that is held constant over the period.
    pub fn calculate_with_next_velocity(&self, current_velocity: f64, next_velocity: f64) -> f64 {
        if self.ka == 0.0 {
            return self.ks * sgn(next_velocity) + self.kv * next_velocity;
        }

        let (a_d, b_d) = discretize_velocity_model(self.kv, self.ka, self.dt);
        self.ks * sgn(current_velocity) + (next_velocity - a_d * current_velocity) / b_d
    }

    /// Returns the acceleration gain.
    pub fn ka(&self) -> f64 {
        self.ka
    }

    /// Returns the static friction gain.
    pub fn ks(&self) -> f64 {
        self.ks
    }

    /// Returns the velocity gain.
    pub fn kv(&self) -> f64 {
        self.kv
    }

    /// Returns the largest acceleration that can be reached at the given velocity.
    ///
    /// ## Parameters
    ///
    /// * `max_voltage` - The available voltage.
    /// * `velocity` - The current velocity.
    ///
    /// Returns positive infinity when `ka` is zero, since acceleration then costs no voltage.
    pub fn max_achievable_acceleration(&self, max_voltage: f64, velocity: f64) -> f64 {
        if self.ka == 0.0 {
            return f64::INFINITY;
        }

        (max_voltage - self.ks * sgn(velocity) - velocity * self.kv) / self.ka
    }

    /// Returns the largest velocity that can be held while accelerating at `acceleration`.
    ///
    /// Returns positive infinity when `kv` is zero.
    pub fn max_achievable_velocity(&self, max_voltage: f64, acceleration: f64) -> f64 {
        if self.kv == 0.0 {
            return f64::INFINITY;
        }

        // Assume the velocity is positive so static friction opposes the voltage
        (max_voltage - self.ks - acceleration * self.ka) / self.kv
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

        // Assume the velocity is negative so static friction aids the voltage
        (-max_voltage + self.ks - acceleration * self.ka) / self.kv
    }

    /// Creates a new feedforward with the default period of 20 ms.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if `kv` or `ka` is negative.
    pub fn new(ks: f64, kv: f64, ka: f64) -> Result<Self, Error> {
        Self::with_period(ks, kv, ka, DEFAULT_PERIOD)
    }

    /// Creates a new feedforward.
    ///
    /// ## Parameters
    ///
    /// * `ks` - The static friction gain in volts.
    /// * `kv` - The velocity gain in volts per unit of velocity.
    /// * `ka` - The acceleration gain in volts per unit of acceleration.
    /// * `dt` - The period in seconds used by
    ///   [SimpleMotorFeedforward::calculate_with_next_velocity()].
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if `kv` or `ka` is negative or if the period is not
    /// positive.
    pub fn with_period(ks: f64, kv: f64, ka: f64, dt: f64) -> Result<Self, Error> {
        validate_gains(kv, ka, dt)?;
        Ok(Self { ks, kv, ka, dt })
    }
}

/// Returns the discrete A and B of the first order model `dv/dt = -kv/ka * v + 1/ka * u`.
pub(crate) fn discretize_velocity_model(kv: f64, ka: f64, dt: f64) -> (f64, f64) {
    let a = -kv / ka;
    let b = 1.0 / ka;
    let a_d = (a * dt).exp();
    let b_d = if a.abs() < 1e-9 {
        b * dt
    } else {
        (a_d - 1.0) / a * b
    };

    (a_d, b_d)
}

/// Checks the gains shared by the feedforward models.
pub(crate) fn validate_gains(kv: f64, ka: f64, dt: f64) -> Result<(), Error> {
    if !(kv >= 0.0) {
        return Err(Error::InvalidParameter {
            name: "kv",
            value: kv,
        });
    }

    if !(ka >= 0.0) {
        return Err(Error::InvalidParameter {
            name: "ka",
            value: ka,
        });
    }

    if !(dt.is_finite() && dt > 0.0) {
        return Err(Error::InvalidParameter {
            name: "dt",
            value: dt,
        });
    }

    Ok(())
}
