/// Defines the DC motor model and the motor presets.
pub mod dc_motor;

/// Defines the continuous-time linear state-space plant.
pub mod linear_system;

/// Provides factories for the plants of common mechanisms.
pub mod linear_system_id;

/// Provides the discretization and input limiting helpers for state-space plants.
pub mod state_space_util;

pub use dc_motor::{DcMotor, DcMotorPreset, MotorParams};
pub use linear_system::LinearSystem;
