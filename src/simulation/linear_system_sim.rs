//! Defines the [LinearSystemSim] which steps a [LinearSystem] through time.

extern crate nalgebra as na;

use log::trace;
use na::SVector;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use crate::{
    system::{
        state_space_util::{desaturate_input_vector, validate_time_step},
        LinearSystem,
    },
    Error,
};

#[cfg(test)]
#[path = "linear_system_sim_tests.rs"]
mod linear_system_sim_tests;

/// Computes the state of a plant after one time step.
///
/// Simulations of mechanisms with behaviour that is not part of the linear plant, e.g. gravity
/// or hard stops, provide their own implementation.
pub trait StateTransition<const S: usize, const I: usize, const O: usize> {
    /// Returns the state that follows `x` after applying the input `u` for `dt` seconds.
    ///
    /// ## Errors
    ///
    /// Returns [Error::NumericalInstability] if the time step is not valid or if the next state
    /// is not finite.
    fn next_state(
        &self,
        plant: &LinearSystem<S, I, O>,
        x: &SVector<f64, S>,
        u: &SVector<f64, I>,
        dt: f64,
    ) -> Result<SVector<f64, S>, Error>;
}

/// Advances the plant with its exact zero-order hold discretization.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LinearStateTransition;

impl<const S: usize, const I: usize, const O: usize> StateTransition<S, I, O>
    for LinearStateTransition
{
    fn next_state(
        &self,
        plant: &LinearSystem<S, I, O>,
        x: &SVector<f64, S>,
        u: &SVector<f64, I>,
        dt: f64,
    ) -> Result<SVector<f64, S>, Error> {
        plant.calculate_x(x, u, dt)
    }
}

/// Advances a plant whose A and B matrices are already discrete, i.e. `x' = A x + B u`.
///
/// The time step is checked but not otherwise used, the plant must have been discretized for
/// the period at which the simulation is updated.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DiscreteStateTransition;

impl<const S: usize, const I: usize, const O: usize> StateTransition<S, I, O>
    for DiscreteStateTransition
{
    fn next_state(
        &self,
        plant: &LinearSystem<S, I, O>,
        x: &SVector<f64, S>,
        u: &SVector<f64, I>,
        dt: f64,
    ) -> Result<SVector<f64, S>, Error> {
        validate_time_step(dt)?;

        let next = plant.a() * x + plant.b() * u;
        if next.iter().any(|v| !v.is_finite()) {
            return Err(Error::NumericalInstability { dt });
        }

        Ok(next)
    }
}

/// Simulates a linear plant with `S` states, `I` inputs and `O` outputs.
///
/// Every update advances the state by one time step, recomputes the output from the state and
/// the input and adds zero-mean Gaussian noise to each output. The noise is drawn from a seeded
/// random number generator so that simulations can be reproduced.
#[derive(Clone, Debug)]
pub struct LinearSystemSim<const S: usize, const I: usize, const O: usize, T = LinearStateTransition>
where
    T: StateTransition<S, I, O>,
{
    plant: LinearSystem<S, I, O>,
    transition: T,
    x: SVector<f64, S>,
    u: SVector<f64, I>,
    y: SVector<f64, O>,
    measurement_std_devs: [f64; O],
    input_limit: Option<f64>,
    rng: ChaCha8Rng,
}

impl<const S: usize, const I: usize, const O: usize> LinearSystemSim<S, I, O, LinearStateTransition> {
    /// Creates a simulation with a randomly seeded noise generator.
    ///
    /// ## Parameters
    ///
    /// * `plant` - The plant to simulate.
    /// * `measurement_std_devs` - The standard deviation of the noise on each output. Use zero
    ///   for a noise free output.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if a standard deviation is negative or not finite.
    #[cfg_attr(test, mutants::skip)] // The seed is random so the noise can not be checked.
    pub fn new(plant: LinearSystem<S, I, O>, measurement_std_devs: [f64; O]) -> Result<Self, Error> {
        Self::with_seed(plant, measurement_std_devs, rand::random())
    }

    /// Creates a simulation with a noise generator that is seeded with `seed`.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if a standard deviation is negative or not finite.
    pub fn with_seed(
        plant: LinearSystem<S, I, O>,
        measurement_std_devs: [f64; O],
        seed: u64,
    ) -> Result<Self, Error> {
        Self::with_transition(plant, LinearStateTransition, measurement_std_devs, seed)
    }
}

impl<const S: usize, const I: usize, const O: usize, T> LinearSystemSim<S, I, O, T>
where
    T: StateTransition<S, I, O>,
{
    /// Scales the current input so that no element exceeds `max_magnitude`.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if the magnitude is not positive. The input is not
    /// changed in that case.
    pub fn clamp_input(&mut self, max_magnitude: f64) -> Result<(), Error> {
        check_input_limit(max_magnitude)?;

        self.u = desaturate_input_vector(&self.u, max_magnitude);
        Ok(())
    }

    /// Returns the current input.
    pub fn input(&self) -> SVector<f64, I> {
        self.u
    }

    /// Returns one element of the current input.
    ///
    /// ## Errors
    ///
    /// Returns [Error::IndexOutOfRange] if `index` is not smaller than the number of inputs.
    pub fn input_element(&self, index: usize) -> Result<f64, Error> {
        element(&self.u, index)
    }

    /// Returns the input limit, if one is set.
    pub fn input_limit(&self) -> Option<f64> {
        self.input_limit
    }

    /// Returns the last measured output.
    pub fn output(&self) -> SVector<f64, O> {
        self.y
    }

    /// Returns one element of the last measured output.
    ///
    /// ## Errors
    ///
    /// Returns [Error::IndexOutOfRange] if `index` is not smaller than the number of outputs.
    pub fn output_element(&self, index: usize) -> Result<f64, Error> {
        element(&self.y, index)
    }

    /// Returns the simulated plant.
    pub fn plant(&self) -> &LinearSystem<S, I, O> {
        &self.plant
    }

    /// Sets the input that is applied during the following updates.
    ///
    /// If an input limit is set the input is scaled down to the limit, keeping its direction.
    pub fn set_input(&mut self, u: SVector<f64, I>) {
        self.u = match self.input_limit {
            Some(limit) => desaturate_input_vector(&u, limit),
            None => u,
        };
    }

    /// Sets one element of the input.
    ///
    /// ## Errors
    ///
    /// Returns [Error::IndexOutOfRange] if `index` is not smaller than the number of inputs.
    pub fn set_input_element(&mut self, index: usize, value: f64) -> Result<(), Error> {
        if index >= I {
            return Err(Error::IndexOutOfRange { index, size: I });
        }

        let mut u = self.u;
        u[index] = value;
        self.set_input(u);
        Ok(())
    }

    /// Sets the input from a slice.
    ///
    /// ## Errors
    ///
    /// Returns [Error::DimensionMismatch] if the slice length differs from the number of inputs.
    pub fn set_input_from_slice(&mut self, values: &[f64]) -> Result<(), Error> {
        self.set_input(vector_from_slice(values)?);
        Ok(())
    }

    /// Sets, or clears, the largest magnitude of any input element.
    ///
    /// The current input is scaled down immediately if it exceeds the new limit.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if the limit is not positive.
    pub fn set_input_limit(&mut self, limit: Option<f64>) -> Result<(), Error> {
        if let Some(value) = limit {
            check_input_limit(value)?;
        }

        self.input_limit = limit;
        self.set_input(self.u);
        Ok(())
    }

    /// Sets the state of the plant.
    ///
    /// The output is recomputed immediately, without noise.
    pub fn set_state(&mut self, x: SVector<f64, S>) {
        self.x = x;
        self.y = self.plant.calculate_y(&self.x, &self.u);
    }

    /// Sets the state of the plant from a slice.
    ///
    /// ## Errors
    ///
    /// Returns [Error::DimensionMismatch] if the slice length differs from the number of states.
    pub fn set_state_from_slice(&mut self, values: &[f64]) -> Result<(), Error> {
        self.set_state(vector_from_slice(values)?);
        Ok(())
    }

    /// Returns the current state.
    pub fn state(&self) -> SVector<f64, S> {
        self.x
    }

    /// Returns the strategy that advances the state.
    pub fn transition(&self) -> &T {
        &self.transition
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Time steps of different lengths may be mixed.
    ///
    /// ## Errors
    ///
    /// Returns [Error::NumericalInstability] if the time step is negative or not finite, or if
    /// the plant can not produce a finite state. The state is unchanged in that case.
    pub fn update(&mut self, dt: f64) -> Result<(), Error> {
        self.x = self.transition.next_state(&self.plant, &self.x, &self.u, dt)?;
        self.y = self.plant.calculate_y(&self.x, &self.u);
        self.add_noise()?;

        trace!(
            "Simulated {} s, state {:?}, input {:?}, output {:?}",
            dt,
            self.x.as_slice(),
            self.u.as_slice(),
            self.y.as_slice()
        );

        Ok(())
    }

    /// Creates a simulation that advances the plant with the given transition.
    ///
    /// ## Parameters
    ///
    /// * `plant` - The plant to simulate.
    /// * `transition` - The strategy that computes the next state.
    /// * `measurement_std_devs` - The standard deviation of the noise on each output.
    /// * `seed` - The seed of the noise generator.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if a standard deviation is negative or not finite.
    pub fn with_transition(
        plant: LinearSystem<S, I, O>,
        transition: T,
        measurement_std_devs: [f64; O],
        seed: u64,
    ) -> Result<Self, Error> {
        if let Some(value) = measurement_std_devs
            .iter()
            .find(|v| !(v.is_finite() && **v >= 0.0))
        {
            return Err(Error::InvalidParameter {
                name: "measurement_std_dev",
                value: *value,
            });
        }

        Ok(Self {
            plant,
            transition,
            x: SVector::zeros(),
            u: SVector::zeros(),
            y: SVector::zeros(),
            measurement_std_devs,
            input_limit: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    fn add_noise(&mut self) -> Result<(), Error> {
        for (index, std_dev) in self.measurement_std_devs.iter().enumerate() {
            if *std_dev == 0.0 {
                continue;
            }

            let distribution = Normal::new(0.0, *std_dev).map_err(|_| Error::InvalidParameter {
                name: "measurement_std_dev",
                value: *std_dev,
            })?;
            self.y[index] += distribution.sample(&mut self.rng);
        }

        Ok(())
    }
}

fn check_input_limit(value: f64) -> Result<(), Error> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name: "input_limit",
            value,
        })
    }
}

fn element<const N: usize>(vector: &SVector<f64, N>, index: usize) -> Result<f64, Error> {
    vector
        .get(index)
        .copied()
        .ok_or(Error::IndexOutOfRange { index, size: N })
}

fn vector_from_slice<const N: usize>(values: &[f64]) -> Result<SVector<f64, N>, Error> {
    if values.len() != N {
        return Err(Error::DimensionMismatch {
            expected: N,
            actual: values.len(),
        });
    }

    Ok(SVector::from_column_slice(values))
}
