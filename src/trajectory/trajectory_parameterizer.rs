//! Computes the velocity profile along a list of path points.
//!
//! The profile is found in two passes. The forward pass limits the velocity at each point to
//! what can be reached from the previous point with the allowed acceleration, the backward pass
//! limits it to what allows the robot to slow down in time for the next point. The velocity at
//! each point is the minimum of both passes. Finally the profile is integrated to find the time
//! at each point.

use crate::{spline::PoseWithCurvature, Error};

use super::{State, Trajectory, TrajectoryConstraint};

#[cfg(test)]
#[path = "trajectory_parameterizer_tests.rs"]
mod trajectory_parameterizer_tests;

const EPSILON: f64 = 1e-6;

#[derive(Clone, Copy, Debug)]
struct ConstrainedState {
    point: PoseWithCurvature,
    distance: f64,
    max_velocity: f64,
    min_acceleration: f64,
    max_acceleration: f64,
}

/// Defines the global limits of the velocity profile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileLimits {
    /// The velocity at the first point in meters per second.
    pub start_velocity: f64,

    /// The velocity at the last point in meters per second.
    pub end_velocity: f64,

    /// The maximum velocity in meters per second.
    pub max_velocity: f64,

    /// The maximum acceleration in meters per second squared.
    pub max_acceleration: f64,

    /// Indicates if the robot drives backwards along the path.
    pub reversed: bool,
}

fn enforce_acceleration_limits(
    reversed: bool,
    constraints: &[Box<dyn TrajectoryConstraint>],
    state: &mut ConstrainedState,
) -> Result<(), Error> {
    let factor = if reversed { -1.0 } else { 1.0 };

    for constraint in constraints {
        let limits = constraint.min_max_acceleration(
            &state.point.pose,
            state.point.curvature,
            state.max_velocity * factor,
        );

        if limits.min_acceleration > limits.max_acceleration {
            return Err(Error::InfeasibleTrajectory {
                reason: format!(
                    "the constraint {:?} allows a minimum acceleration of {} which is larger than the maximum acceleration of {}",
                    constraint, limits.min_acceleration, limits.max_acceleration
                ),
            });
        }

        state.min_acceleration = state.min_acceleration.max(if reversed {
            -limits.max_acceleration
        } else {
            limits.min_acceleration
        });
        state.max_acceleration = state.max_acceleration.min(if reversed {
            -limits.min_acceleration
        } else {
            limits.max_acceleration
        });
    }

    Ok(())
}

/// Returns the trajectory that follows the given points with the fastest velocity profile that
/// satisfies the limits and constraints.
///
/// ## Parameters
///
/// * `points` - The path points, normally produced by the spline parameterizer.
/// * `constraints` - The position dependent limits.
/// * `limits` - The global limits.
///
/// ## Errors
///
/// Returns [Error::InfeasibleTrajectory] if there are no points, if a constraint is infeasible or
/// if the profile can not be integrated in time.
pub fn time_parameterize(
    points: &[PoseWithCurvature],
    constraints: &[Box<dyn TrajectoryConstraint>],
    limits: &ProfileLimits,
) -> Result<Trajectory, Error> {
    let first_point = match points.first() {
        Some(point) => *point,
        None => {
            return Err(Error::InfeasibleTrajectory {
                reason: "there are no points to parameterize".to_string(),
            })
        }
    };

    let mut constrained_states = Vec::with_capacity(points.len());

    let mut predecessor = ConstrainedState {
        point: first_point,
        distance: 0.0,
        max_velocity: limits.start_velocity,
        min_acceleration: -limits.max_acceleration,
        max_acceleration: limits.max_acceleration,
    };

    // Forward pass
    for point in points {
        let ds = point
            .pose
            .translation()
            .distance(&predecessor.point.pose.translation());
        let mut state = ConstrainedState {
            point: *point,
            distance: predecessor.distance + ds,
            ..predecessor
        };

        // The acceleration limits may depend on the velocity, so iterate until the velocity and
        // the acceleration of the predecessor agree.
        loop {
            // v_f = sqrt(v_i^2 + 2 * a * d)
            state.max_velocity = limits.max_velocity.min(
                (predecessor.max_velocity * predecessor.max_velocity
                    + predecessor.max_acceleration * ds * 2.0)
                    .sqrt(),
            );
            state.min_acceleration = -limits.max_acceleration;
            state.max_acceleration = limits.max_acceleration;

            for constraint in constraints {
                state.max_velocity = state.max_velocity.min(constraint.max_velocity(
                    &state.point.pose,
                    state.point.curvature,
                    state.max_velocity,
                ));
            }

            enforce_acceleration_limits(limits.reversed, constraints, &mut state)?;

            if ds < EPSILON {
                break;
            }

            let actual_acceleration = (state.max_velocity * state.max_velocity
                - predecessor.max_velocity * predecessor.max_velocity)
                / (ds * 2.0);

            if state.max_acceleration < actual_acceleration - EPSILON {
                predecessor.max_acceleration = state.max_acceleration;
            } else {
                if actual_acceleration > predecessor.min_acceleration + EPSILON {
                    predecessor.max_acceleration = actual_acceleration;
                }

                // A deceleration that is too large is repaired in the backward pass
                break;
            }
        }

        constrained_states.push(state);
        predecessor = state;
    }

    let last = constrained_states[constrained_states.len() - 1];
    let mut successor = ConstrainedState {
        point: last.point,
        distance: last.distance,
        max_velocity: limits.end_velocity,
        min_acceleration: -limits.max_acceleration,
        max_acceleration: limits.max_acceleration,
    };

    // Backward pass
    for state in constrained_states.iter_mut().rev() {
        let ds = state.distance - successor.distance;

        loop {
            // v_f = sqrt(v_i^2 + 2 * a * d), with d negative
            let new_max_velocity = (successor.max_velocity * successor.max_velocity
                + successor.min_acceleration * ds * 2.0)
                .sqrt();

            if new_max_velocity >= state.max_velocity {
                break;
            }

            state.max_velocity = new_max_velocity;

            enforce_acceleration_limits(limits.reversed, constraints, state)?;

            if ds > -EPSILON {
                break;
            }

            let actual_acceleration = (state.max_velocity * state.max_velocity
                - successor.max_velocity * successor.max_velocity)
                / (ds * 2.0);

            if state.min_acceleration > actual_acceleration + EPSILON {
                successor.min_acceleration = state.min_acceleration;
            } else {
                successor.min_acceleration = actual_acceleration;
                break;
            }
        }

        successor = *state;
    }

    integrate(&constrained_states, limits.reversed)
}

/// Integrates the velocity profile in time.
fn integrate(constrained_states: &[ConstrainedState], reversed: bool) -> Result<Trajectory, Error> {
    let direction = if reversed { -1.0 } else { 1.0 };

    let mut states: Vec<State> = Vec::with_capacity(constrained_states.len());
    let mut time = 0.0;
    let mut distance = 0.0;
    let mut velocity = 0.0;

    for (i, constrained) in constrained_states.iter().enumerate() {
        let ds = constrained.distance - distance;

        let mut acceleration = 0.0;
        let mut dt = 0.0;
        // Coinciding points take no time to traverse
        if i > 0 && ds > EPSILON {
            acceleration = (constrained.max_velocity * constrained.max_velocity
                - velocity * velocity)
                / (ds * 2.0);

            if acceleration.abs() > EPSILON {
                // v_f = v_0 + a * t
                dt = (constrained.max_velocity - velocity) / acceleration;
            } else if velocity.abs() > EPSILON {
                // d = v * t
                dt = ds / velocity;
            } else {
                return Err(Error::InfeasibleTrajectory {
                    reason: format!(
                        "the robot does not move between path point {} and {}",
                        i - 1,
                        i
                    ),
                });
            }

            states[i - 1].acceleration = acceleration * direction;
        }

        velocity = constrained.max_velocity;
        distance = constrained.distance;
        time += dt;

        states.push(State {
            time,
            velocity: velocity * direction,
            acceleration: acceleration * direction,
            pose: constrained.point.pose,
            curvature: constrained.point.curvature,
        });
    }

    Trajectory::new(states)
}
