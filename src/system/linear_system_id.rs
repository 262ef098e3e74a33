//! Factories for the plants of common mechanisms.
//!
//! The plants are derived from the [DcMotor] model, or identified from the feedforward gains of
//! a mechanism, i.e. `V = kv * v + ka * a`.

extern crate nalgebra as na;

use log::debug;
use na::{Matrix1, Matrix1x2, Matrix2, Vector2};

use crate::Error;

use super::{DcMotor, LinearSystem};

#[cfg(test)]
#[path = "linear_system_id_tests.rs"]
mod linear_system_id_tests;

/// Returns the plant of a DC motor driving a load, with the angular position and velocity as
/// states and as outputs.
///
/// ## Parameters
///
/// * `motor` - The motor, or motors, that drive the load.
/// * `moment_of_inertia` - The moment of inertia of the load in kg m^2.
/// * `gearing` - The reduction between the motor and the load.
///
/// ## Errors
///
/// Returns [Error::InvalidParameter] if the moment of inertia or the gearing is not positive.
pub fn dc_motor_system(
    motor: DcMotor,
    moment_of_inertia: f64,
    gearing: f64,
) -> Result<LinearSystem<2, 1, 2>, Error> {
    check_positive("moment_of_inertia", moment_of_inertia)?;
    check_positive("gearing", gearing)?;

    let (a, b) = rotational_dynamics(&motor, moment_of_inertia, gearing);
    debug!("Created DC motor plant with a = {}, b = {}", a, b);

    LinearSystem::new(
        Matrix2::new(0.0, 1.0, 0.0, a),
        Vector2::new(0.0, b),
        Matrix2::identity(),
        Vector2::zeros(),
    )
}

/// Returns the plant of an elevator, with the carriage position and velocity as states and the
/// position as output.
///
/// ## Parameters
///
/// * `motor` - The motor, or motors, that drive the elevator.
/// * `mass` - The mass of the carriage in kilograms.
/// * `drum_radius` - The radius of the drum that winds the cable, in meters.
/// * `gearing` - The reduction between the motor and the drum.
///
/// ## Errors
///
/// Returns [Error::InvalidParameter] if the mass, the drum radius or the gearing is not
/// positive.
pub fn elevator(
    motor: DcMotor,
    mass: f64,
    drum_radius: f64,
    gearing: f64,
) -> Result<LinearSystem<2, 1, 1>, Error> {
    check_positive("mass", mass)?;
    check_positive("drum_radius", drum_radius)?;
    check_positive("gearing", gearing)?;

    let a = -gearing * gearing * motor.kt()
        / (motor.r() * drum_radius * drum_radius * mass * motor.kv());
    let b = gearing * motor.kt() / (motor.r() * drum_radius * mass);
    debug!("Created elevator plant with a = {}, b = {}", a, b);

    LinearSystem::new(
        Matrix2::new(0.0, 1.0, 0.0, a),
        Vector2::new(0.0, b),
        Matrix1x2::new(1.0, 0.0),
        Matrix1::new(0.0),
    )
}

/// Returns the plant of a flywheel, with the angular velocity as state and output.
///
/// ## Errors
///
/// Returns [Error::InvalidParameter] if the moment of inertia or the gearing is not positive.
pub fn flywheel(
    motor: DcMotor,
    moment_of_inertia: f64,
    gearing: f64,
) -> Result<LinearSystem<1, 1, 1>, Error> {
    check_positive("moment_of_inertia", moment_of_inertia)?;
    check_positive("gearing", gearing)?;

    let (a, b) = rotational_dynamics(&motor, moment_of_inertia, gearing);
    debug!("Created flywheel plant with a = {}, b = {}", a, b);

    LinearSystem::new(
        Matrix1::new(a),
        Matrix1::new(b),
        Matrix1::new(1.0),
        Matrix1::new(0.0),
    )
}

/// Returns the plant of a mechanism that is controlled by position, identified from its
/// velocity and acceleration gains.
///
/// ## Parameters
///
/// * `kv` - The velocity gain in volts per unit of velocity.
/// * `ka` - The acceleration gain in volts per unit of acceleration.
///
/// ## Errors
///
/// Returns [Error::InvalidParameter] if `kv` is negative or `ka` is not positive.
pub fn identify_position_system(kv: f64, ka: f64) -> Result<LinearSystem<2, 1, 1>, Error> {
    check_identification_gains(kv, ka)?;

    LinearSystem::new(
        Matrix2::new(0.0, 1.0, 0.0, -kv / ka),
        Vector2::new(0.0, 1.0 / ka),
        Matrix1x2::new(1.0, 0.0),
        Matrix1::new(0.0),
    )
}

/// Returns the plant of a mechanism that is controlled by velocity, identified from its
/// velocity and acceleration gains.
///
/// ## Errors
///
/// Returns [Error::InvalidParameter] if `kv` is negative or `ka` is not positive.
pub fn identify_velocity_system(kv: f64, ka: f64) -> Result<LinearSystem<1, 1, 1>, Error> {
    check_identification_gains(kv, ka)?;

    LinearSystem::new(
        Matrix1::new(-kv / ka),
        Matrix1::new(1.0 / ka),
        Matrix1::new(1.0),
        Matrix1::new(0.0),
    )
}

/// Returns the plant of an arm that rotates around a single joint, with the angle and the
/// angular velocity as states and the angle as output.
///
/// Gravity is not part of the plant.
///
/// ## Errors
///
/// Returns [Error::InvalidParameter] if the moment of inertia or the gearing is not positive.
pub fn single_jointed_arm(
    motor: DcMotor,
    moment_of_inertia: f64,
    gearing: f64,
) -> Result<LinearSystem<2, 1, 1>, Error> {
    check_positive("moment_of_inertia", moment_of_inertia)?;
    check_positive("gearing", gearing)?;

    let (a, b) = rotational_dynamics(&motor, moment_of_inertia, gearing);
    debug!("Created single jointed arm plant with a = {}, b = {}", a, b);

    LinearSystem::new(
        Matrix2::new(0.0, 1.0, 0.0, a),
        Vector2::new(0.0, b),
        Matrix1x2::new(1.0, 0.0),
        Matrix1::new(0.0),
    )
}

fn check_identification_gains(kv: f64, ka: f64) -> Result<(), Error> {
    if !(kv.is_finite() && kv >= 0.0) {
        return Err(Error::InvalidParameter {
            name: "kv",
            value: kv,
        });
    }

    check_positive("ka", ka)
}

fn check_positive(name: &'static str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter { name, value })
    }
}

/// Returns the velocity and input coefficients of a motor that turns an inertia.
fn rotational_dynamics(motor: &DcMotor, moment_of_inertia: f64, gearing: f64) -> (f64, f64) {
    let a = -gearing * gearing * motor.kt() / (motor.kv() * motor.r() * moment_of_inertia);
    let b = gearing * motor.kt() / (motor.r() * moment_of_inertia);
    (a, b)
}
