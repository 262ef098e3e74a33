/// Provides the voltage sag of a battery under load.
pub mod battery_sim;

/// Defines the simulation of an elevator driven by DC motors.
pub mod elevator_sim;

/// Defines the generic simulation of a linear plant with measurement noise.
pub mod linear_system_sim;

pub use elevator_sim::{ElevatorSim, ElevatorSimParams};
pub use linear_system_sim::{
    DiscreteStateTransition, LinearStateTransition, LinearSystemSim, StateTransition,
};
