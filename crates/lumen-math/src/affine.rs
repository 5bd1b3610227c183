//! Affine transform type.
//!
//! [`Affine3`] composes a 3x3 linear part with a translation. Points
//! pick up the translation, vectors (directions) do not.

use std::ops::Mul;

use num_traits::Float;

use crate::mat3::Mat3;
use crate::scalar::Scalar;
use crate::vec3::Vec3;

/// An affine transform: `p -> linear * p + translation`.
///
/// Composition follows function application order: `(a * b)` applies
/// `b` first, then `a`.
///
/// # Example
///
/// ```rust
/// use lumen_math::{Affine3, Vec3};
///
/// let t = Affine3::from_translation(Vec3::new(1.0, 0.0, 0.0));
/// let s = Affine3::from_scale(2.0);
/// let p = Vec3::new(1.0, 1.0, 1.0);
///
/// // Scale first, then translate.
/// assert_eq!((t * s).transform_point(p), Vec3::new(3.0, 2.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Affine3<T: Scalar> {
    /// The 3x3 linear part (rotation/scale/shear).
    pub linear: Mat3<T>,
    /// The translation applied after the linear part.
    pub translation: Vec3<T>,
}

impl<T: Scalar> Affine3<T> {
    /// Creates a transform from its linear part and translation.
    #[inline]
    pub const fn new(linear: Mat3<T>, translation: Vec3<T>) -> Self {
        Self {
            linear,
            translation,
        }
    }

    /// The identity transform.
    #[inline]
    pub fn identity() -> Self {
        Self::new(Mat3::identity(), Vec3::zero())
    }

    /// A pure translation.
    #[inline]
    pub fn from_translation(translation: Vec3<T>) -> Self {
        Self::new(Mat3::identity(), translation)
    }

    /// A uniform scale about the origin.
    #[inline]
    pub fn from_scale(s: T) -> Self {
        Self::new(Mat3::scale(s), Vec3::zero())
    }

    /// Transforms a point: `linear * p + translation`.
    #[inline]
    pub fn transform_point(&self, p: Vec3<T>) -> Vec3<T> {
        self.linear.transform(p) + self.translation
    }

    /// Transforms a direction vector: `linear * v`, no translation.
    #[inline]
    pub fn transform_vector(&self, v: Vec3<T>) -> Vec3<T> {
        self.linear.transform(v)
    }
}

impl<T: Scalar + Float> Affine3<T> {
    /// Computes the inverse transform.
    ///
    /// Returns `None` if the linear part is singular.
    pub fn inverse(&self) -> Option<Self> {
        let inv = self.linear.inverse()?;
        let t = inv.transform(self.translation);
        Some(Self::new(inv, -t))
    }
}

impl<T: Scalar> Default for Affine3<T> {
    fn default() -> Self {
        Self::identity()
    }
}

// Affine3 * Affine3: apply rhs first, then self.
impl<T: Scalar> Mul for Affine3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.linear.mul_mat(&rhs.linear),
            self.linear.transform(rhs.translation) + self.translation,
        )
    }
}
