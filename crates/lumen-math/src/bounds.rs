//! Axis-aligned bounding box.
//!
//! [`Bounds`] is a min/max pair of [`Vec3`] corners with derived
//! geometric queries. Degenerate boxes (min > max on some axis) are a
//! representable state: union-accumulation loops start from one and grow
//! it point by point. Queries such as [`Bounds::offset`] and
//! [`Bounds::contains`] are only meaningful for well-formed boxes
//! (min ≤ max on every axis).
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{Bounds, Vec3};
//!
//! let b = Bounds::new(Vec3::zero(), Vec3::splat(1.0));
//! assert!(b.contains(Vec3::splat(0.5)));
//! assert!(!b.contains(Vec3::new(0.0, 0.5, 0.5))); // faces are excluded
//! ```

use num_traits::Float;

use crate::scalar::Scalar;
use crate::vec3::Vec3;

/// An axis-aligned box defined by its minimum and maximum corners.
///
/// # Degenerate boxes
///
/// Nothing enforces `min <= max`. A degenerate box is legal and its
/// queries return mathematically consistent values (e.g. a negative
/// [`Bounds::surface_area`]) rather than erroring.
///
/// # Example
///
/// ```rust
/// use lumen_math::{Bounds, Vec3};
///
/// let b = Bounds::new(Vec3::zero(), Vec3::new(2.0, 3.0, 4.0));
/// assert_eq!(b.surface_area(), 52.0);
/// assert_eq!(b.max_length(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Bounds<T: Scalar> {
    /// Minimum corner.
    pub min: Vec3<T>,
    /// Maximum corner.
    pub max: Vec3<T>,
}

impl<T: Scalar> Bounds<T> {
    /// Creates a box from its two corners.
    #[inline]
    pub const fn new(min: Vec3<T>, max: Vec3<T>) -> Self {
        Self { min, max }
    }

    /// Creates a zero-extent box enclosing a single point.
    #[inline]
    pub const fn from_point(p: Vec3<T>) -> Self {
        Self { min: p, max: p }
    }

    /// Extent of the box, `max - min`.
    #[inline]
    pub fn diagonal(self) -> Vec3<T> {
        self.max - self.min
    }

    /// Total area of all six faces.
    ///
    /// A degenerate box returns a consistent (possibly negative) value.
    #[inline]
    pub fn surface_area(self) -> T {
        let s = self.diagonal();
        let two = T::one() + T::one();
        (s.x * s.y + s.y * s.z + s.x * s.z) * two
    }

    /// Largest single-axis extent.
    #[inline]
    pub fn max_length(self) -> T {
        self.diagonal().max_element()
    }

    /// Strict interior test: a point exactly on a face is NOT contained.
    ///
    /// The exclusive boundary is deliberate; do not relax it to an
    /// inclusive test.
    #[inline]
    pub fn contains(self, p: Vec3<T>) -> bool {
        p.x > self.min.x
            && p.x < self.max.x
            && p.y > self.min.y
            && p.y < self.max.y
            && p.z > self.min.z
            && p.z < self.max.z
    }

    /// Smallest box containing both `self` and `other`.
    ///
    /// Pure: returns a new box. Accumulating over a point set starts
    /// naturally from [`Bounds::from_point`] of the first element.
    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Smallest box containing `self` and the point `p`.
    #[inline]
    pub fn union_point(self, p: Vec3<T>) -> Self {
        Self::new(self.min.min(p), self.max.max(p))
    }

    /// Euclidean length of the extent vector.
    ///
    /// Integer element types truncate, per [`Vec3::length`].
    #[inline]
    pub fn diagonal_length(self) -> T {
        self.diagonal().length()
    }
}

impl<T: Scalar + Float> Bounds<T> {
    /// Midpoint of the two corners.
    #[inline]
    pub fn center(self) -> Vec3<T> {
        let half = T::one() / (T::one() + T::one());
        self.min + self.diagonal() * half
    }

    /// Maps a point into normalized box-relative coordinates.
    ///
    /// The min corner maps to (0,0,0) and the max corner to (1,1,1).
    /// A zero-extent axis divides by zero and yields infinity/NaN per
    /// float semantics; this is accepted, not an error.
    #[inline]
    pub fn offset(self, p: Vec3<T>) -> Vec3<T> {
        (p - self.min) / self.diagonal()
    }
}
