use std::ops::Add;

use crate::{
    geometry::{Pose2d, Transform2d},
    math_util::lerp,
    Error,
};

#[cfg(test)]
#[path = "timed_trajectory_tests.rs"]
mod timed_trajectory_tests;

/// Defines the state of the robot at a single point in time along a trajectory.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct State {
    /// The time since the start of the trajectory in seconds.
    pub time: f64,

    /// The velocity along the path in meters per second. Negative when driving backwards.
    pub velocity: f64,

    /// The acceleration along the path in meters per second squared.
    pub acceleration: f64,

    /// The pose of the robot.
    pub pose: Pose2d,

    /// The curvature of the path in radians per meter.
    pub curvature: f64,
}

impl State {
    /// Linearly interpolates between the current state and `end`.
    ///
    /// All scalar fields are interpolated by the same fraction. The position is interpolated
    /// along the straight line between the two poses, the heading along the shortest arc.
    ///
    /// ## Parameters
    ///
    /// * `end` - The state at a fraction of 1.0.
    /// * `fraction` - The fraction, clamped to [0.0, 1.0].
    pub fn interpolate(&self, end: &State, fraction: f64) -> State {
        let fraction = fraction.clamp(0.0, 1.0);
        State {
            time: lerp(self.time, end.time, fraction),
            velocity: lerp(self.velocity, end.velocity, fraction),
            acceleration: lerp(self.acceleration, end.acceleration, fraction),
            pose: Pose2d::new(
                self.pose
                    .translation()
                    .interpolate(&end.pose.translation(), fraction),
                self.pose.rotation().interpolate(&end.pose.rotation(), fraction),
            ),
            curvature: lerp(self.curvature, end.curvature, fraction),
        }
    }
}

/// Defines a path with a velocity profile, stored as a list of states ordered by time.
///
/// Trajectories are created once, normally by the
/// [trajectory generator](super::trajectory_generator), and are immutable afterwards. Controllers
/// query the trajectory by calling [Trajectory::sample()] with the elapsed time.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    states: Vec<State>,
}

impl Trajectory {
    /// Returns a new trajectory that is the current trajectory followed by `other`.
    ///
    /// The times of the states of `other` are shifted by the total time of the current
    /// trajectory. The first state of `other` is dropped since it is expected to coincide with
    /// the last state of the current trajectory.
    pub fn concatenate(&self, other: &Trajectory) -> Trajectory {
        let offset = self.total_time();
        let mut states = self.states.clone();
        states.extend(other.states.iter().skip(1).map(|state| State {
            time: state.time + offset,
            ..*state
        }));

        Trajectory { states }
    }

    /// Returns the pose at the start of the trajectory.
    pub fn initial_pose(&self) -> Pose2d {
        self.states[0].pose
    }

    /// Creates a new trajectory from a list of states.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InfeasibleTrajectory] if there are no states or if the times of the
    /// states are decreasing.
    pub fn new(states: Vec<State>) -> Result<Self, Error> {
        if states.is_empty() {
            return Err(Error::InfeasibleTrajectory {
                reason: "a trajectory needs at least one state".to_string(),
            });
        }

        if states.windows(2).any(|pair| !(pair[1].time >= pair[0].time)) {
            return Err(Error::InfeasibleTrajectory {
                reason: "the times of the trajectory states must be nondecreasing".to_string(),
            });
        }

        Ok(Self { states })
    }

    /// Returns a copy of the trajectory with every pose expressed relative to `pose`.
    pub fn relative_to(&self, pose: &Pose2d) -> Trajectory {
        let states = self
            .states
            .iter()
            .map(|state| {
                let relative = state.pose.relative_to(pose);
                State {
                    pose: Pose2d::new(relative.translation(), relative.rotation()),
                    ..*state
                }
            })
            .collect();

        Trajectory { states }
    }

    /// Returns the state of the trajectory at the given time.
    ///
    /// Times before the start return the first state, times after the end return the last
    /// state. Other times are linearly interpolated between the two states that bracket the
    /// time.
    ///
    /// ## Parameters
    ///
    /// * `time` - The time since the start of the trajectory in seconds.
    ///
    /// ## Example
    ///
    /// ```
    /// use robot_motion::geometry::Pose2d;
    /// use robot_motion::trajectory::{State, Trajectory};
    ///
    /// let trajectory = Trajectory::new(vec![
    ///     State { time: 0.0, velocity: 0.0, ..State::default() },
    ///     State { time: 2.0, velocity: 4.0, ..State::default() },
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(trajectory.sample(1.0).velocity, 2.0);
    /// assert_eq!(trajectory.sample(5.0).velocity, 4.0);
    /// ```
    pub fn sample(&self, time: f64) -> State {
        let first = &self.states[0];
        if time <= first.time {
            return *first;
        }

        let last = &self.states[self.states.len() - 1];
        if time >= last.time {
            return *last;
        }

        // The first state at or after the requested time. The checks above guarantee that it
        // is neither the first nor past the last state.
        let high = self.states.partition_point(|state| state.time < time);
        let low = high - 1;

        let high_state = &self.states[high];
        let low_state = &self.states[low];

        let span = high_state.time - low_state.time;
        if span.abs() < 1e-9 {
            return *high_state;
        }

        low_state.interpolate(high_state, (time - low_state.time) / span)
    }

    /// Returns the states of the trajectory.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Returns the duration of the trajectory in seconds.
    pub fn total_time(&self) -> f64 {
        self.states[self.states.len() - 1].time
    }

    /// Returns a copy of the trajectory that starts at `initial pose + transform`.
    ///
    /// The shape of the trajectory is unchanged, every state keeps its pose relative to the
    /// first state.
    pub fn transform_by(&self, transform: &Transform2d) -> Trajectory {
        let first_pose = self.initial_pose();
        let new_first_pose = first_pose + *transform;

        let states = self
            .states
            .iter()
            .map(|state| State {
                pose: new_first_pose + (state.pose - first_pose),
                ..*state
            })
            .collect();

        Trajectory { states }
    }
}

impl Add for Trajectory {
    type Output = Trajectory;

    fn add(self, rhs: Self) -> Self::Output {
        self.concatenate(&rhs)
    }
}
