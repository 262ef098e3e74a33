//! Defines the [Translation2d] type.

extern crate nalgebra as na;

use std::ops::{Add, Div, Mul, Neg, Sub};

use float_cmp::approx_eq;
use na::Vector2;

use super::{Rotation2d, GEOMETRY_EPSILON};

#[cfg(test)]
#[path = "translation2d_tests.rs"]
mod translation2d_tests;

/// Defines a position in the plane, in meters.
///
/// When the translation is used to describe the position of a robot relative to the origin of a
/// field the x axis points forward along the field and the y axis points to the left.
#[derive(Clone, Copy, Debug, Default)]
pub struct Translation2d {
    /// The x and y components of the translation.
    vector: Vector2<f64>,
}

impl Translation2d {
    /// Returns the angle of the vector from the origin to this translation.
    pub fn angle(&self) -> Rotation2d {
        Rotation2d::from_components(self.x(), self.y())
    }

    /// Returns the euclidean distance between this translation and `other`.
    pub fn distance(&self, other: &Translation2d) -> f64 {
        (other.vector - self.vector).norm()
    }

    /// Creates a translation from a distance and a direction.
    ///
    /// ## Parameters
    ///
    /// * `distance` - The distance from the origin.
    /// * `angle` - The direction of the translation.
    pub fn from_polar(distance: f64, angle: &Rotation2d) -> Self {
        Self::new(distance * angle.cos(), distance * angle.sin())
    }

    /// Linearly interpolates between this translation and `end`.
    ///
    /// The fraction is clamped to [0.0, 1.0].
    pub fn interpolate(&self, end: &Translation2d, fraction: f64) -> Self {
        Self {
            vector: self.vector.lerp(&end.vector, fraction.clamp(0.0, 1.0)),
        }
    }

    /// Creates a new translation with the given x and y components.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            vector: Vector2::new(x, y),
        }
    }

    /// Returns the euclidean norm of the translation, i.e. the distance to the origin.
    pub fn norm(&self) -> f64 {
        self.vector.norm()
    }

    /// Rotates the translation around the origin.
    ///
    /// ## Example
    ///
    /// ```
    /// use robot_motion::geometry::{Rotation2d, Translation2d};
    ///
    /// let rotated = Translation2d::new(2.0, 0.0).rotate_by(&Rotation2d::from_degrees(90.0));
    /// assert!(rotated.x().abs() < 1e-12);
    /// assert!((rotated.y() - 2.0).abs() < 1e-12);
    /// ```
    pub fn rotate_by(&self, rotation: &Rotation2d) -> Self {
        Self {
            vector: rotation.to_unit_complex() * self.vector,
        }
    }

    /// Returns the translation as a nalgebra vector.
    pub fn to_vector(&self) -> Vector2<f64> {
        self.vector
    }

    /// Returns the x component in meters.
    pub fn x(&self) -> f64 {
        self.vector.x
    }

    /// Returns the y component in meters.
    pub fn y(&self) -> f64 {
        self.vector.y
    }
}

impl From<Vector2<f64>> for Translation2d {
    fn from(vector: Vector2<f64>) -> Self {
        Self { vector }
    }
}

impl PartialEq for Translation2d {
    fn eq(&self, other: &Self) -> bool {
        approx_eq!(f64, self.x(), other.x(), epsilon = GEOMETRY_EPSILON)
            && approx_eq!(f64, self.y(), other.y(), epsilon = GEOMETRY_EPSILON)
    }
}

impl Add for Translation2d {
    type Output = Translation2d;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            vector: self.vector + rhs.vector,
        }
    }
}

impl Sub for Translation2d {
    type Output = Translation2d;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            vector: self.vector - rhs.vector,
        }
    }
}

impl Neg for Translation2d {
    type Output = Translation2d;

    fn neg(self) -> Self::Output {
        Self {
            vector: -self.vector,
        }
    }
}

impl Mul<f64> for Translation2d {
    type Output = Translation2d;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            vector: self.vector * rhs,
        }
    }
}

impl Div<f64> for Translation2d {
    type Output = Translation2d;

    fn div(self, rhs: f64) -> Self::Output {
        Self {
            vector: self.vector / rhs,
        }
    }
}
