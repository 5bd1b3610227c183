//! SIMD fast path for the default real type.
//!
//! [`Vec3A`] is the 4-lane twin of [`Vec3<Real>`](crate::Vec3): the same
//! public contract, stored in a 16-byte-aligned 4-float layout so every
//! binary operator is a single `wide::f32x4` instruction over both
//! operands. The fourth lane is padding.
//!
//! The padding lane is untrusted after every operation: component-wise
//! division puts `0/0 = NaN` in it, scalar multiplication may leave
//! anything there. Nothing in the public API ever reads it back —
//! equality, `Debug`, indexing, [`Vec3A::dot`] and [`Vec3A::length`] all
//! restrict themselves to the first three lanes explicitly.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::Vec3A;
//!
//! let a = Vec3A::new(1.0, 2.0, 3.0);
//! let b = Vec3A::splat(2.0);
//! assert_eq!(a * b, Vec3A::new(2.0, 4.0, 6.0));
//! ```

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use wide::f32x4;

use crate::vec3::Vec3;

/// A 3-component `f32` vector padded to four 16-byte-aligned lanes.
///
/// Behaviorally equivalent to `Vec3<f32>` for every public operation;
/// results may differ from the generic path only by floating-point
/// reordering within the same arithmetic.
///
/// # Example
///
/// ```rust
/// use lumen_math::Vec3A;
///
/// let v = Vec3A::new(1.0, 2.0, 2.0);
/// assert_eq!(v.length(), 3.0);
/// assert_eq!(v[1], 2.0);
/// ```
#[derive(Clone, Copy)]
#[repr(C, align(16))]
pub struct Vec3A {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
    // Padding lane. Carried through arithmetic, never observable.
    w: f32,
}

impl Vec3A {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector. The padding lane starts at zero.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, w: 0.0 }
    }

    /// Creates a vector with all three components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Creates from the first three elements of a slice.
    ///
    /// Reads exactly three elements and never past them.
    ///
    /// # Panics
    ///
    /// Panics if `s` has fewer than three elements.
    #[inline]
    pub fn from_slice(s: &[f32]) -> Self {
        Self::new(s[0], s[1], s[2])
    }

    /// Converts to a 3-element array. The padding lane is dropped.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    // Lane path for chaining one SIMD result into the next without a
    // scalar round trip. Not public: the fourth lane of `lanes` may be
    // anything, and callers must never see it.
    #[inline]
    fn from_lanes(lanes: f32x4) -> Self {
        let a = lanes.to_array();
        Self {
            x: a[0],
            y: a[1],
            z: a[2],
            w: a[3],
        }
    }

    #[inline]
    fn to_lanes(self) -> f32x4 {
        f32x4::from([self.x, self.y, self.z, self.w])
    }

    /// Dot product with another vector.
    ///
    /// Sums only the first three lanes; the padding lane is excluded
    /// explicitly rather than assumed zero.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        let p = (self.to_lanes() * other.to_lanes()).to_array();
        p[0] + p[1] + p[2]
    }

    /// Cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Length (Euclidean norm) of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared length (avoids the square root).
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (other - self).length_squared()
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Divides the vector by its own length.
    ///
    /// No zero check is performed: normalizing the zero vector divides
    /// by zero and yields infinity/NaN components.
    #[inline]
    pub fn normalized(self) -> Self {
        self / self.length()
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::from_lanes(self.to_lanes().min(other.to_lanes()))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::from_lanes(self.to_lanes().max(other.to_lanes()))
    }

    /// Returns the smallest component.
    #[inline]
    pub fn min_element(self) -> f32 {
        self.x.min(self.y).min(self.z)
    }

    /// Returns the largest component.
    #[inline]
    pub fn max_element(self) -> f32 {
        self.x.max(self.y).max(self.z)
    }

    /// Component-wise floor.
    #[inline]
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor(), self.z.floor())
    }

    /// Component-wise fractional part, `v - v.floor()`.
    #[inline]
    pub fn fract(self) -> Self {
        self - self.floor()
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Returns true if all components are finite (not NaN or infinite).
    ///
    /// The padding lane does not participate.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Converts to glam Vec3A.
    #[inline]
    pub fn to_glam(self) -> glam::Vec3A {
        glam::Vec3A::new(self.x, self.y, self.z)
    }

    /// Creates from glam Vec3A.
    #[inline]
    pub fn from_glam(v: glam::Vec3A) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

// Equality never observes the padding lane.
impl PartialEq for Vec3A {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl fmt::Debug for Vec3A {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vec3A")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

impl Default for Vec3A {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl Index<usize> for Vec3A {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3A index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec3A {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3A index out of bounds: {}", i),
        }
    }
}

// Vec3A + Vec3A
impl Add for Vec3A {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_lanes(self.to_lanes() + rhs.to_lanes())
    }
}

// Vec3A - Vec3A
impl Sub for Vec3A {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_lanes(self.to_lanes() - rhs.to_lanes())
    }
}

// Vec3A * Vec3A (component-wise)
impl Mul for Vec3A {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_lanes(self.to_lanes() * rhs.to_lanes())
    }
}

// Vec3A * f32
impl Mul<f32> for Vec3A {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_lanes(self.to_lanes() * f32x4::splat(rhs))
    }
}

// f32 * Vec3A
impl Mul<Vec3A> for f32 {
    type Output = Vec3A;

    #[inline]
    fn mul(self, rhs: Vec3A) -> Vec3A {
        rhs * self
    }
}

// Vec3A / Vec3A (component-wise). Puts 0/0 = NaN in the padding lane,
// which is why the lane is never observable.
impl Div for Vec3A {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::from_lanes(self.to_lanes() / rhs.to_lanes())
    }
}

// Vec3A / f32: one division, four lane multiplications.
impl Div<f32> for Vec3A {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::from_lanes(self.to_lanes() * f32x4::splat(1.0 / rhs))
    }
}

// Negation is multiplication by -1.
impl Neg for Vec3A {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self * -1.0
    }
}

impl AddAssign for Vec3A {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3A {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vec3A {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Vec3A {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign for Vec3A {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl DivAssign<f32> for Vec3A {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl From<[f32; 3]> for Vec3A {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3A> for [f32; 3] {
    #[inline]
    fn from(v: Vec3A) -> [f32; 3] {
        v.to_array()
    }
}

impl From<Vec3<f32>> for Vec3A {
    #[inline]
    fn from(v: Vec3<f32>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3A> for Vec3<f32> {
    #[inline]
    fn from(v: Vec3A) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<glam::Vec3A> for Vec3A {
    #[inline]
    fn from(v: glam::Vec3A) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3A> for glam::Vec3A {
    #[inline]
    fn from(v: Vec3A) -> glam::Vec3A {
        v.to_glam()
    }
}
