//! Defines the [Pose2d] type.

extern crate nalgebra as na;

use std::ops::{Add, Sub};

use na::{Isometry2, Translation2};

use super::{Rotation2d, Transform2d, Translation2d, Twist2d, GEOMETRY_EPSILON};

#[cfg(test)]
#[path = "pose2d_tests.rs"]
mod pose2d_tests;

/// Defines the position and heading of a robot on the field.
///
/// A pose consists of a [Translation2d], in meters, and a [Rotation2d]. Poses can be
/// transformed by a [Transform2d] and expressed relative to other poses. Composition follows
/// the rules of rigid body transforms in the plane, i.e. it is associative and a pose
/// transformed by the inverse of a transform returns to the original pose.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose2d {
    /// The position of the pose.
    translation: Translation2d,

    /// The heading of the pose.
    rotation: Rotation2d,
}

impl Pose2d {
    /// Returns the euclidean distance between the positions of the current pose and `other`.
    pub fn distance_to(&self, other: &Pose2d) -> f64 {
        self.translation.distance(&other.translation)
    }

    /// Returns the pose that is reached when moving along the arc described by `twist`.
    ///
    /// The twist is expressed in the frame of the current pose.
    ///
    /// ## Example
    ///
    /// ```
    /// use core::f64::consts::PI;
    /// use robot_motion::geometry::{Pose2d, Twist2d};
    ///
    /// // Drive a quarter circle with a radius of 1 meter.
    /// let end = Pose2d::default().exp(&Twist2d::new(PI / 2.0, 0.0, PI / 2.0));
    /// assert!((end.x() - 1.0).abs() < 1e-9);
    /// assert!((end.y() - 1.0).abs() < 1e-9);
    /// assert!((end.rotation().degrees() - 90.0).abs() < 1e-9);
    /// ```
    pub fn exp(&self, twist: &Twist2d) -> Pose2d {
        let dx = twist.dx;
        let dy = twist.dy;
        let dtheta = twist.dtheta;

        let sin_theta = dtheta.sin();
        let cos_theta = dtheta.cos();

        let (s, c) = if dtheta.abs() < GEOMETRY_EPSILON {
            (1.0 - dtheta * dtheta / 6.0, 0.5 * dtheta)
        } else {
            (sin_theta / dtheta, (1.0 - cos_theta) / dtheta)
        };

        let transform = Transform2d::new(
            Translation2d::new(dx * s - dy * c, dx * c + dy * s),
            Rotation2d::from_components(cos_theta, sin_theta),
        );

        *self + transform
    }

    /// Creates a new pose from x and y coordinates and a heading.
    pub fn from_coordinates(x: f64, y: f64, rotation: Rotation2d) -> Self {
        Self::new(Translation2d::new(x, y), rotation)
    }

    /// Interpolates between the current pose and `end` along a constant curvature arc.
    ///
    /// ## Parameters
    ///
    /// * `end` - The pose at a fraction of 1.0.
    /// * `fraction` - The fraction. Values below 0.0 return the current pose, values of 1.0 or
    ///   more return `end`.
    pub fn interpolate(&self, end: &Pose2d, fraction: f64) -> Pose2d {
        if fraction <= 0.0 {
            *self
        } else if fraction >= 1.0 {
            *end
        } else {
            let twist = self.log(end);
            self.exp(&(twist * fraction))
        }
    }

    /// Returns the twist that moves the current pose onto `end` along a constant curvature arc.
    ///
    /// This is the inverse of [Pose2d::exp()].
    pub fn log(&self, end: &Pose2d) -> Twist2d {
        let transform = end.relative_to(self);
        let dtheta = transform.rotation().radians();
        let half_dtheta = dtheta / 2.0;

        let cos_minus_one = transform.rotation().cos() - 1.0;
        let half_theta_by_tan_of_half_dtheta = if cos_minus_one.abs() < GEOMETRY_EPSILON {
            1.0 - dtheta * dtheta / 12.0
        } else {
            -(half_dtheta * transform.rotation().sin()) / cos_minus_one
        };

        let translation_part = transform.translation().rotate_by(&Rotation2d::from_components(
            half_theta_by_tan_of_half_dtheta,
            -half_dtheta,
        )) * half_theta_by_tan_of_half_dtheta.hypot(half_dtheta);

        Twist2d::new(translation_part.x(), translation_part.y(), dtheta)
    }

    /// Creates a new pose.
    pub fn new(translation: Translation2d, rotation: Rotation2d) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Returns the current pose expressed in the frame of the `other` pose.
    ///
    /// The result is the transform that maps `other` onto the current pose.
    pub fn relative_to(&self, other: &Pose2d) -> Transform2d {
        Transform2d::from(other.to_isometry().inverse() * self.to_isometry())
    }

    /// Returns the heading of the pose.
    pub fn rotation(&self) -> Rotation2d {
        self.rotation
    }

    /// Returns the pose as a nalgebra isometry.
    pub fn to_isometry(&self) -> Isometry2<f64> {
        Isometry2::from_parts(
            Translation2::new(self.translation.x(), self.translation.y()),
            self.rotation.to_unit_complex(),
        )
    }

    /// Returns the pose obtained by applying `transform` in the frame of the current pose.
    pub fn transform_by(&self, transform: &Transform2d) -> Pose2d {
        Pose2d::from(self.to_isometry() * transform.to_isometry())
    }

    /// Returns the position of the pose.
    pub fn translation(&self) -> Translation2d {
        self.translation
    }

    /// Returns the x coordinate in meters.
    pub fn x(&self) -> f64 {
        self.translation.x()
    }

    /// Returns the y coordinate in meters.
    pub fn y(&self) -> f64 {
        self.translation.y()
    }
}

impl From<Isometry2<f64>> for Pose2d {
    fn from(isometry: Isometry2<f64>) -> Self {
        Self {
            translation: Translation2d::from(isometry.translation.vector),
            rotation: Rotation2d::from(isometry.rotation),
        }
    }
}

impl Add<Transform2d> for Pose2d {
    type Output = Pose2d;

    fn add(self, rhs: Transform2d) -> Self::Output {
        self.transform_by(&rhs)
    }
}

impl Sub for Pose2d {
    type Output = Transform2d;

    /// Returns the transform that maps the right hand side onto the left hand side.
    fn sub(self, rhs: Self) -> Self::Output {
        self.relative_to(&rhs)
    }
}
