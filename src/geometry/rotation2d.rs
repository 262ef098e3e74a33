//! Defines the [Rotation2d] type.

extern crate nalgebra as na;

use std::{
    f64::consts::PI,
    ops::{Add, Mul, Neg, Sub},
};

use float_cmp::approx_eq;
use log::warn;
use na::{Complex, UnitComplex};

use super::GEOMETRY_EPSILON;

#[cfg(test)]
#[path = "rotation2d_tests.rs"]
mod rotation2d_tests;

/// Defines a rotation in the plane.
///
/// The rotation is stored as a normalized (cosine, sine) pair. The angle reported by
/// [Rotation2d::radians()] is always in the range (-PI, PI]. Two rotations are equal when their
/// angles are equal modulo 2 PI.
#[derive(Clone, Copy, Debug)]
pub struct Rotation2d {
    /// The unit complex number that describes the rotation.
    value: UnitComplex<f64>,
}

impl Rotation2d {
    /// Returns the cosine of the rotation angle.
    pub fn cos(&self) -> f64 {
        self.value.cos_angle()
    }

    /// Returns the rotation angle in degrees, in the range (-180, 180].
    ///
    /// Degrees are only used at the boundary of the crate. Internally all angles are in radians.
    pub fn degrees(&self) -> f64 {
        self.radians().to_degrees()
    }

    /// Creates a new rotation from the x and y components of a vector pointing in the
    /// direction of the rotation.
    ///
    /// The vector does not need to be normalized. A vector with (nearly) zero length has no
    /// direction, in that case the identity rotation is returned.
    ///
    /// ## Parameters
    ///
    /// * `x` - The x component of the direction vector.
    /// * `y` - The y component of the direction vector.
    pub fn from_components(x: f64, y: f64) -> Self {
        let magnitude = x.hypot(y);
        if magnitude > 1e-6 {
            Self {
                value: UnitComplex::from_cos_sin_unchecked(x / magnitude, y / magnitude),
            }
        } else {
            warn!(
                "x and y components of Rotation2d are zero (x: {}, y: {}). Using the identity rotation",
                x, y
            );
            Self::identity()
        }
    }

    /// Creates a new rotation from an angle in degrees.
    ///
    /// ## Example
    ///
    /// ```
    /// use core::f64::consts::PI;
    /// use robot_motion::geometry::Rotation2d;
    ///
    /// let rotation = Rotation2d::from_degrees(90.0);
    /// assert!((rotation.radians() - 0.5 * PI).abs() < 1e-12);
    /// ```
    pub fn from_degrees(angle_in_degrees: f64) -> Self {
        Self::new(angle_in_degrees.to_radians())
    }

    /// Returns the rotation with an angle of zero.
    pub fn identity() -> Self {
        Self {
            value: UnitComplex::identity(),
        }
    }

    /// Returns the rotation that undoes the current rotation.
    pub fn inverse(&self) -> Self {
        Self {
            value: self.value.inverse(),
        }
    }

    /// Interpolates between the current rotation and the `end` rotation along the shortest arc.
    ///
    /// ## Parameters
    ///
    /// * `end` - The rotation at a fraction of 1.0.
    /// * `fraction` - The fraction, clamped to [0.0, 1.0].
    pub fn interpolate(&self, end: &Rotation2d, fraction: f64) -> Self {
        let delta = (*end - *self).radians();
        *self + Rotation2d::new(delta * fraction.clamp(0.0, 1.0))
    }

    /// Creates a new rotation from an angle in radians.
    ///
    /// ## Parameters
    ///
    /// * `angle_in_radians` - The angle of the rotation. Any value is accepted, the angle is
    ///   stored modulo 2 PI.
    pub fn new(angle_in_radians: f64) -> Self {
        Self {
            value: UnitComplex::new(angle_in_radians),
        }
    }

    /// Returns the rotation angle in radians, in the range (-PI, PI].
    pub fn radians(&self) -> f64 {
        let angle = self.value.angle();
        if angle <= -PI {
            PI
        } else {
            angle
        }
    }

    /// Returns the rotation obtained by applying `other` after the current rotation.
    pub fn rotate_by(&self, other: &Rotation2d) -> Self {
        Self {
            value: self.value * other.value,
        }
    }

    /// Returns the sine of the rotation angle.
    pub fn sin(&self) -> f64 {
        self.value.sin_angle()
    }

    /// Returns the tangent of the rotation angle.
    pub fn tan(&self) -> f64 {
        self.sin() / self.cos()
    }

    /// Returns the rotation as a nalgebra unit complex number.
    pub fn to_unit_complex(&self) -> UnitComplex<f64> {
        self.value
    }
}

impl Default for Rotation2d {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<UnitComplex<f64>> for Rotation2d {
    fn from(value: UnitComplex<f64>) -> Self {
        Self { value }
    }
}

impl PartialEq for Rotation2d {
    fn eq(&self, other: &Self) -> bool {
        let difference: Complex<f64> = self.value.into_inner() - other.value.into_inner();
        approx_eq!(f64, difference.norm(), 0.0, epsilon = GEOMETRY_EPSILON)
    }
}

impl Add for Rotation2d {
    type Output = Rotation2d;

    fn add(self, rhs: Self) -> Self::Output {
        self.rotate_by(&rhs)
    }
}

impl Sub for Rotation2d {
    type Output = Rotation2d;

    fn sub(self, rhs: Self) -> Self::Output {
        self.rotate_by(&rhs.inverse())
    }
}

impl Neg for Rotation2d {
    type Output = Rotation2d;

    fn neg(self) -> Self::Output {
        self.inverse()
    }
}

impl Mul<f64> for Rotation2d {
    type Output = Rotation2d;

    fn mul(self, rhs: f64) -> Self::Output {
        Rotation2d::new(self.radians() * rhs)
    }
}
