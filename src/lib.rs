#![warn(missing_docs)]

//! Planar motion model for wheeled robots and actuated mechanisms.
//!
//! Provides the 2-D geometry, differential drive kinematics, trajectory generation and sampling,
//! feedback and feedforward controllers, and discrete-time plant simulation needed by robot
//! control code and by simulation front ends.
//!
//! All angles are in radians, all distances in meters, time in seconds, voltages in volts and
//! masses in kilograms.

use thiserror::Error;

/// Defines the controllers, i.e. PID, feedforward and path tracking controllers.
pub mod controller;

/// Defines the scalar signal filters used to condition sensor inputs.
pub mod filter;

/// Defines the 2-D geometric primitives.
pub mod geometry;

/// Defines the kinematics and odometry of a differential drive.
pub mod kinematics;

/// Provides scalar helper functions, e.g. wrapping of periodic values.
pub mod math_util;

/// Provides the loading of parameter files.
pub mod params;

/// Defines the field-named records that are handed to front ends.
pub mod records;

/// Defines the simulations of linear plants and mechanisms.
pub mod simulation;

/// Defines the splines that are used to build paths through waypoints.
pub mod spline;

/// Defines the state-space plant models and motor models.
pub mod system;

/// Defines trajectory generation, constraints and sampling.
pub mod trajectory;

/// Defines the different errors for the robot motion crate.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Returned when a parameter is outside of the range of valid values.
    #[error("The value {value} is not valid for the parameter '{name}'")]
    InvalidParameter {
        /// The name of the parameter.
        name: &'static str,
        /// The value that was rejected.
        value: f64,
    },

    /// Returned when the size of a vector or matrix does not match the size of the plant.
    #[error("Expected {expected} elements but got {actual}")]
    DimensionMismatch {
        /// The expected number of elements.
        expected: usize,
        /// The number of elements that were provided.
        actual: usize,
    },

    /// Returned when a row index is larger than the size of a vector.
    #[error("The index {index} is out of range for a vector with {size} elements")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The size of the vector.
        size: usize,
    },

    /// Returned when a plant update can not produce a finite state for the given time step.
    #[error("The plant update for a time step of {dt} seconds is not numerically stable")]
    NumericalInstability {
        /// The time step in seconds.
        dt: f64,
    },

    /// Returned when a spline could not be turned into a set of path points.
    #[error("Could not parameterize a malformed spline after {iterations} iterations")]
    MalformedSpline {
        /// The number of iterations that were executed.
        iterations: usize,
    },

    /// Returned when the constraints of a trajectory can not be satisfied.
    #[error("The trajectory can not be generated: {reason}")]
    InfeasibleTrajectory {
        /// The reason why the trajectory is infeasible.
        reason: String,
    },

    /// Returned when a parameter file could not be read or parsed.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// The description of the failure.
        message: String,
    },
}
