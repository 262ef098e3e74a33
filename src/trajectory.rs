/// Defines the constraints that limit the velocity and acceleration along a trajectory.
pub mod constraint;

/// Defines a time parameterized path and the sampling of that path.
pub mod timed_trajectory;

/// Defines the configuration used when generating a trajectory.
pub mod trajectory_config;

/// Provides the generation of trajectories from waypoints.
pub mod trajectory_generator;

/// Provides the velocity profile along a list of path points.
pub mod trajectory_parameterizer;

pub use constraint::{MinMax, TrajectoryConstraint};
pub use timed_trajectory::{State, Trajectory};
pub use trajectory_config::{TrajectoryConfig, TrajectoryConfigParams};
