//! Defines the [ElevatorSim], a simulated elevator driven by DC motors through a gearbox and a
//! cable drum.

extern crate nalgebra as na;

use log::{debug, warn};
use na::{SVector, Vector1, Vector2};
use serde::Deserialize;

use crate::{
    math_util::sgn,
    system::{linear_system_id, state_space_util::desaturate_input_vector, DcMotor, LinearSystem},
    Error,
};

use super::{LinearSystemSim, StateTransition};

#[cfg(test)]
#[path = "elevator_sim_tests.rs"]
mod elevator_sim_tests;

/// The gravitational acceleration in meters per second squared.
const GRAVITY: f64 = 9.8;

/// The supply voltage used until another one is set.
const DEFAULT_SUPPLY_VOLTAGE: f64 = 12.0;

/// The physical description of an elevator.
///
/// ```toml
/// gearing = 10.0
/// carriage_mass = 4.0
/// drum_radius = 0.0254
/// min_height = 0.0
/// max_height = 1.25
/// ```
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct ElevatorSimParams {
    /// The reduction between the motors and the drum.
    pub gearing: f64,

    /// The mass of the carriage in kilograms.
    pub carriage_mass: f64,

    /// The radius of the drum in meters.
    pub drum_radius: f64,

    /// The lowest position of the carriage in meters.
    pub min_height: f64,

    /// The highest position of the carriage in meters.
    pub max_height: f64,

    /// Indicates if gravity pulls on the carriage.
    #[serde(default = "default_simulate_gravity")]
    pub simulate_gravity: bool,

    /// The position of the carriage at the start of the simulation.
    #[serde(default)]
    pub starting_height: f64,

    /// The standard deviation of the noise on the measured position.
    #[serde(default)]
    pub measurement_std_dev: f64,
}

/// Advances the elevator state and keeps the carriage between its hard stops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElevatorTransition {
    min_height: f64,
    max_height: f64,
    simulate_gravity: bool,
}

impl StateTransition<2, 1, 1> for ElevatorTransition {
    fn next_state(
        &self,
        plant: &LinearSystem<2, 1, 1>,
        x: &SVector<f64, 2>,
        u: &SVector<f64, 1>,
        dt: f64,
    ) -> Result<SVector<f64, 2>, Error> {
        // Gravity enters as the voltage that produces an acceleration of -g so the update stays
        // exact.
        let mut input = *u;
        if self.simulate_gravity {
            input[0] -= GRAVITY / plant.b()[1];
        }

        let mut next = plant.calculate_x(x, &input, dt)?;

        if next[0] <= self.min_height {
            next[0] = self.min_height;
            next[1] = next[1].max(0.0);
        }

        if next[0] >= self.max_height {
            next[0] = self.max_height;
            next[1] = next[1].min(0.0);
        }

        Ok(next)
    }
}

/// Simulates an elevator with a carriage that is lifted by a cable wound on a drum.
///
/// The state is the position and the velocity of the carriage, the input is the voltage applied
/// to the motors and the output is the measured position. The carriage stops at the lower and
/// upper limits of travel.
#[derive(Clone, Debug)]
pub struct ElevatorSim {
    sim: LinearSystemSim<2, 1, 1, ElevatorTransition>,
    gearbox: DcMotor,
    gearing: f64,
    drum_radius: f64,
    supply_voltage: f64,
}

impl ElevatorSim {
    /// Returns the current drawn by the motors in amperes.
    ///
    /// The current is derived from the velocity of the carriage and the applied voltage. It is
    /// positive while the motors drive in the direction of the applied voltage.
    pub fn current_draw(&self) -> f64 {
        let motor_speed = self.velocity() / self.drum_radius * self.gearing;
        let voltage = self.input_voltage();
        self.gearbox.current(motor_speed, voltage) * sgn(voltage)
    }

    /// Returns a value indicating whether the carriage is at, or below, the lower limit.
    pub fn has_hit_lower_limit(&self) -> bool {
        self.would_hit_lower_limit(self.sim.state()[0])
    }

    /// Returns a value indicating whether the carriage is at, or above, the upper limit.
    pub fn has_hit_upper_limit(&self) -> bool {
        self.would_hit_upper_limit(self.sim.state()[0])
    }

    /// Returns the voltage applied to the motors.
    pub fn input_voltage(&self) -> f64 {
        self.sim.input()[0]
    }

    /// Returns the highest position of the carriage in meters.
    pub fn max_height(&self) -> f64 {
        self.sim.transition().max_height
    }

    /// Returns the lowest position of the carriage in meters.
    pub fn min_height(&self) -> f64 {
        self.sim.transition().min_height
    }

    /// Creates an elevator simulation with a randomly seeded noise generator.
    ///
    /// ## Parameters
    ///
    /// * `gearbox` - The motors that drive the drum.
    /// * `params` - The description of the elevator.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if a parameter is out of range or if the limits of
    /// travel are not ordered.
    #[cfg_attr(test, mutants::skip)] // The seed is random so the noise can not be checked.
    pub fn new(gearbox: DcMotor, params: &ElevatorSimParams) -> Result<Self, Error> {
        Self::with_seed(gearbox, params, rand::random())
    }

    /// Returns the measured position of the carriage in meters.
    pub fn position(&self) -> f64 {
        self.sim.output()[0]
    }

    /// Sets the voltage applied to the motors.
    ///
    /// The voltage is limited to the supply voltage.
    pub fn set_input_voltage(&mut self, voltage: f64) {
        let input = desaturate_input_vector(&Vector1::new(voltage), self.supply_voltage);
        self.sim.set_input(input);
    }

    /// Sets the state of the carriage. The position is limited to the range of travel.
    pub fn set_state(&mut self, position: f64, velocity: f64) {
        let position = position.clamp(self.min_height(), self.max_height());
        self.sim.set_state(Vector2::new(position, velocity));
    }

    /// Sets the voltage that is available to the motors.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if the voltage is negative or not finite.
    pub fn set_supply_voltage(&mut self, voltage: f64) -> Result<(), Error> {
        if !(voltage.is_finite() && voltage >= 0.0) {
            return Err(Error::InvalidParameter {
                name: "supply_voltage",
                value: voltage,
            });
        }

        self.supply_voltage = voltage;
        self.set_input_voltage(self.input_voltage());
        Ok(())
    }

    /// Returns the voltage that is available to the motors.
    pub fn supply_voltage(&self) -> f64 {
        self.supply_voltage
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// ## Errors
    ///
    /// Returns [Error::NumericalInstability] if the time step is negative or not finite.
    pub fn update(&mut self, dt: f64) -> Result<(), Error> {
        let was_at_lower_limit = self.has_hit_lower_limit();
        let was_at_upper_limit = self.has_hit_upper_limit();

        self.sim.update(dt)?;

        if !was_at_lower_limit && self.has_hit_lower_limit() {
            warn!("Elevator carriage hit the lower limit at {} m", self.min_height());
        }

        if !was_at_upper_limit && self.has_hit_upper_limit() {
            warn!("Elevator carriage hit the upper limit at {} m", self.max_height());
        }

        Ok(())
    }

    /// Returns the velocity of the carriage in meters per second.
    pub fn velocity(&self) -> f64 {
        self.sim.state()[1]
    }

    /// Creates an elevator simulation with a noise generator that is seeded with `seed`.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if a parameter is out of range or if the limits of
    /// travel are not ordered.
    pub fn with_seed(gearbox: DcMotor, params: &ElevatorSimParams, seed: u64) -> Result<Self, Error> {
        if !(params.min_height.is_finite() && params.max_height.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "min_height",
                value: params.min_height,
            });
        }

        if params.max_height <= params.min_height {
            return Err(Error::InvalidParameter {
                name: "max_height",
                value: params.max_height,
            });
        }

        let plant = linear_system_id::elevator(
            gearbox,
            params.carriage_mass,
            params.drum_radius,
            params.gearing,
        )?;

        let transition = ElevatorTransition {
            min_height: params.min_height,
            max_height: params.max_height,
            simulate_gravity: params.simulate_gravity,
        };

        let sim = LinearSystemSim::with_transition(
            plant,
            transition,
            [params.measurement_std_dev],
            seed,
        )?;

        let mut result = Self {
            sim,
            gearbox,
            gearing: params.gearing,
            drum_radius: params.drum_radius,
            supply_voltage: DEFAULT_SUPPLY_VOLTAGE,
        };
        result.set_state(params.starting_height, 0.0);

        debug!(
            "Created elevator simulation with travel [{}, {}] m and gravity {}",
            params.min_height, params.max_height, params.simulate_gravity
        );

        Ok(result)
    }

    /// Returns a value indicating whether the given position is at, or below, the lower limit.
    pub fn would_hit_lower_limit(&self, position: f64) -> bool {
        position <= self.min_height()
    }

    /// Returns a value indicating whether the given position is at, or above, the upper limit.
    pub fn would_hit_upper_limit(&self, position: f64) -> bool {
        position >= self.max_height()
    }
}

fn default_simulate_gravity() -> bool {
    true
}
