use serde::Deserialize;

use crate::{kinematics::DifferentialDriveKinematics, Error};

use super::constraint::{
    CentripetalAccelerationConstraint, DifferentialDriveKinematicsConstraint,
    TrajectoryConstraint,
};

#[cfg(test)]
#[path = "trajectory_config_tests.rs"]
mod trajectory_config_tests;

/// Defines the limits and boundary conditions that are used when generating a trajectory.
///
/// The maximum velocity and acceleration apply to the whole trajectory. Additional limits that
/// depend on the position on the path are added as [TrajectoryConstraint]s.
#[derive(Debug)]
pub struct TrajectoryConfig {
    max_velocity: f64,
    max_acceleration: f64,
    start_velocity: f64,
    end_velocity: f64,
    reversed: bool,
    constraints: Vec<Box<dyn TrajectoryConstraint>>,
}

impl TrajectoryConfig {
    /// Adds a constraint to the configuration.
    pub fn add_constraint<C: TrajectoryConstraint + 'static>(mut self, constraint: C) -> Self {
        self.constraints.push(Box::new(constraint));
        self
    }

    /// Returns the constraints of the configuration.
    pub fn constraints(&self) -> &[Box<dyn TrajectoryConstraint>] {
        &self.constraints
    }

    /// Returns the velocity at the end of the trajectory in meters per second.
    pub fn end_velocity(&self) -> f64 {
        self.end_velocity
    }

    /// Creates a configuration from the deserialized parameters.
    ///
    /// When the parameters contain a track width a [DifferentialDriveKinematicsConstraint] is
    /// added, when they contain a maximum centripetal acceleration a
    /// [CentripetalAccelerationConstraint] is added.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if any of the parameters is out of range.
    pub fn from_params(params: &TrajectoryConfigParams) -> Result<Self, Error> {
        let mut config = Self::new(params.max_velocity, params.max_acceleration)?
            .with_start_velocity(params.start_velocity)
            .with_end_velocity(params.end_velocity)
            .with_reversed(params.reversed);

        if let Some(track_width) = params.track_width {
            config = config.with_kinematics(DifferentialDriveKinematics::new(track_width)?)?;
        }

        if let Some(max_centripetal_acceleration) = params.max_centripetal_acceleration {
            config = config.add_constraint(CentripetalAccelerationConstraint::new(
                max_centripetal_acceleration,
            )?);
        }

        Ok(config)
    }

    /// Returns a value indicating whether the robot drives the trajectory backwards.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Returns the maximum acceleration in meters per second squared.
    pub fn max_acceleration(&self) -> f64 {
        self.max_acceleration
    }

    /// Returns the maximum velocity in meters per second.
    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    /// Creates a new configuration with a start and end velocity of zero.
    ///
    /// ## Parameters
    ///
    /// * `max_velocity` - The maximum velocity in meters per second.
    /// * `max_acceleration` - The maximum acceleration in meters per second squared.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if the maximum velocity or the maximum acceleration is
    /// not a positive, finite number.
    pub fn new(max_velocity: f64, max_acceleration: f64) -> Result<Self, Error> {
        if !(max_velocity.is_finite() && max_velocity > 0.0) {
            return Err(Error::InvalidParameter {
                name: "max_velocity",
                value: max_velocity,
            });
        }

        if !(max_acceleration.is_finite() && max_acceleration > 0.0) {
            return Err(Error::InvalidParameter {
                name: "max_acceleration",
                value: max_acceleration,
            });
        }

        Ok(Self {
            max_velocity,
            max_acceleration,
            start_velocity: 0.0,
            end_velocity: 0.0,
            reversed: false,
            constraints: Vec::new(),
        })
    }

    /// Returns the velocity at the start of the trajectory in meters per second.
    pub fn start_velocity(&self) -> f64 {
        self.start_velocity
    }

    /// Sets the velocity at the end of the trajectory.
    pub fn with_end_velocity(mut self, end_velocity: f64) -> Self {
        self.end_velocity = end_velocity;
        self
    }

    /// Adds a constraint that keeps the wheel speeds of a differential drive below the maximum
    /// velocity of the configuration.
    ///
    /// ## Errors
    ///
    /// Returns an error if the constraint can not be created.
    pub fn with_kinematics(self, kinematics: DifferentialDriveKinematics) -> Result<Self, Error> {
        let constraint = DifferentialDriveKinematicsConstraint::new(kinematics, self.max_velocity)?;
        Ok(self.add_constraint(constraint))
    }

    /// Sets whether the robot drives the trajectory backwards.
    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    /// Sets the velocity at the start of the trajectory.
    pub fn with_start_velocity(mut self, start_velocity: f64) -> Self {
        self.start_velocity = start_velocity;
        self
    }
}

/// Defines the trajectory configuration as it is stored in a parameter file.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TrajectoryConfigParams {
    /// The maximum velocity in meters per second.
    pub max_velocity: f64,

    /// The maximum acceleration in meters per second squared.
    pub max_acceleration: f64,

    /// The velocity at the start of the trajectory in meters per second.
    #[serde(default)]
    pub start_velocity: f64,

    /// The velocity at the end of the trajectory in meters per second.
    #[serde(default)]
    pub end_velocity: f64,

    /// Indicates if the robot drives the trajectory backwards.
    #[serde(default)]
    pub reversed: bool,

    /// The track width of a differential drive in meters, if the wheel speeds should be limited.
    #[serde(default)]
    pub track_width: Option<f64>,

    /// The maximum centripetal acceleration in meters per second squared, if limited.
    #[serde(default)]
    pub max_centripetal_acceleration: Option<f64>,
}
