/// Defines the feedforward model of an elevator.
pub mod elevator_feedforward;

/// Defines the PID feedback controller.
pub mod pid_controller;

/// Defines the Ramsete path tracking controller.
pub mod ramsete_controller;

/// Defines the feedforward model of a DC motor without gravity.
pub mod simple_motor_feedforward;

pub use elevator_feedforward::ElevatorFeedforward;
pub use pid_controller::{PidController, PidGains};
pub use ramsete_controller::RamseteController;
pub use simple_motor_feedforward::SimpleMotorFeedforward;

/// The default loop period of a controller in seconds.
pub const DEFAULT_PERIOD: f64 = 0.020;
