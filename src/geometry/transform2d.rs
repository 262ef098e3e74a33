//! Defines the [Transform2d] type.

extern crate nalgebra as na;

use std::ops::{Add, Mul};

use na::{Isometry2, Translation2};

use super::{Pose2d, Rotation2d, Translation2d};

#[cfg(test)]
#[path = "transform2d_tests.rs"]
mod transform2d_tests;

/// Defines the rigid transform that moves a [Pose2d] to another [Pose2d].
///
/// The translation of the transform is expressed in the frame of the starting pose.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform2d {
    /// The translation component of the transform.
    translation: Translation2d,

    /// The rotation component of the transform.
    rotation: Rotation2d,
}

impl Transform2d {
    /// Creates the transform that maps the `initial` pose onto the `last` pose.
    ///
    /// ## Parameters
    ///
    /// * `initial` - The starting pose.
    /// * `last` - The pose that is reached after applying the transform to `initial`.
    pub fn between(initial: &Pose2d, last: &Pose2d) -> Self {
        last.relative_to(initial)
    }

    /// Returns the transform that undoes the current transform.
    pub fn inverse(&self) -> Self {
        Self::from(self.to_isometry().inverse())
    }

    /// Creates a new transform from a translation and a rotation.
    pub fn new(translation: Translation2d, rotation: Rotation2d) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Returns the rotation component.
    pub fn rotation(&self) -> Rotation2d {
        self.rotation
    }

    /// Returns the transform as a nalgebra isometry.
    pub fn to_isometry(&self) -> Isometry2<f64> {
        Isometry2::from_parts(
            Translation2::new(self.translation.x(), self.translation.y()),
            self.rotation.to_unit_complex(),
        )
    }

    /// Returns the translation component.
    pub fn translation(&self) -> Translation2d {
        self.translation
    }

    /// Returns the x component of the translation in meters.
    pub fn x(&self) -> f64 {
        self.translation.x()
    }

    /// Returns the y component of the translation in meters.
    pub fn y(&self) -> f64 {
        self.translation.y()
    }
}

impl From<Isometry2<f64>> for Transform2d {
    fn from(isometry: Isometry2<f64>) -> Self {
        Self {
            translation: Translation2d::from(isometry.translation.vector),
            rotation: Rotation2d::from(isometry.rotation),
        }
    }
}

impl Add for Transform2d {
    type Output = Transform2d;

    /// Composes two transforms, the right hand side is applied after the left hand side.
    fn add(self, rhs: Self) -> Self::Output {
        Self::from(self.to_isometry() * rhs.to_isometry())
    }
}

impl Mul<f64> for Transform2d {
    type Output = Transform2d;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.translation * rhs, self.rotation * rhs)
    }
}
