//! Generic 2D vector type.
//!
//! The 2D analogue of [`crate::Vec3`]: the same operator and
//! compound-assignment contract over any [`Scalar`] element type.
//! There is no SIMD fast path for 2D.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use num_traits::Float;

use crate::scalar::Scalar;

/// A 2-component arithmetic vector.
///
/// # Example
///
/// ```rust
/// use lumen_math::Vec2;
///
/// let uv = Vec2::new(0.25, 0.75);
/// assert_eq!(uv * 2.0, Vec2::new(0.5, 1.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec2<T: Scalar> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
}

impl<T: Scalar> Vec2<T> {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to the same value.
    #[inline]
    pub const fn splat(v: T) -> Self {
        Self::new(v, v)
    }

    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// The all-ones vector.
    #[inline]
    pub fn one() -> Self {
        Self::splat(T::one())
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [T; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Squared length (avoids the square root).
    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            if other.x < self.x { other.x } else { self.x },
            if other.y < self.y { other.y } else { self.y },
        )
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            if other.x > self.x { other.x } else { self.x },
            if other.y > self.y { other.y } else { self.y },
        )
    }

    /// Length (Euclidean norm) of the vector.
    ///
    /// The root is taken through `f64` and converted back to `T`, so
    /// integer element types truncate, same as [`crate::Vec3::length`].
    #[inline]
    pub fn length(self) -> T {
        let sq = self.length_squared().to_f64().unwrap_or(f64::NAN);
        T::from(sq.sqrt()).unwrap_or_else(T::zero)
    }
}

impl<T: Scalar + Float> Vec2<T> {
    /// Divides the vector by its own length.
    ///
    /// No zero check: normalizing the zero vector yields infinity/NaN.
    #[inline]
    pub fn normalized(self) -> Self {
        self / self.length()
    }

    /// Component-wise fractional part, `v - v.floor()`.
    #[inline]
    pub fn fract(self) -> Self {
        Self::new(self.x - self.x.floor(), self.y - self.y.floor())
    }
}

impl<T: Scalar> Index<usize> for Vec2<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of bounds: {}", i),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Vec2<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2 index out of bounds: {}", i),
        }
    }
}

impl<T: Scalar> Add for Vec2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Sub for Vec2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> Mul for Vec2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl<T: Scalar> Mul<T> for Vec2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Scalar> Div for Vec2<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

// One division, two multiplications; rounding may differ from two
// independent divisions.
impl<T: Scalar> Div<T> for Vec2<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        let inv = T::one() / rhs;
        Self::new(self.x * inv, self.y * inv)
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for Vec2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self * -T::one()
    }
}

impl<T: Scalar> AddAssign for Vec2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vec2<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign for Vec2<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Vec2<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> DivAssign for Vec2<T> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Vec2<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<T: Scalar> From<[T; 2]> for Vec2<T> {
    #[inline]
    fn from(a: [T; 2]) -> Self {
        Self::from_array(a)
    }
}

impl<T: Scalar> From<Vec2<T>> for [T; 2] {
    #[inline]
    fn from(v: Vec2<T>) -> [T; 2] {
        v.to_array()
    }
}

impl Vec2<f32> {
    /// Converts to glam Vec2.
    #[inline]
    pub fn to_glam(self) -> glam::Vec2 {
        glam::Vec2::new(self.x, self.y)
    }

    /// Creates from glam Vec2.
    #[inline]
    pub fn from_glam(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vec2_ops() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);

        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(b - a, Vec2::new(2.0, 2.0));
        assert_eq!(a * b, Vec2::new(3.0, 8.0));
        assert_eq!(b / a, Vec2::new(3.0, 2.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn test_vec2_compound_assign() {
        let mut v = Vec2::new(1.0, 2.0);
        v += Vec2::splat(1.0);
        v *= 2.0;
        assert_eq!(v, Vec2::new(4.0, 6.0));
        v /= Vec2::new(4.0, 6.0);
        assert_eq!(v, Vec2::one());
    }

    #[test]
    fn test_vec2_dot_length() {
        let v = Vec2::new(3.0_f32, 4.0);
        assert_eq!(v.dot(v), 25.0);
        assert_eq!(v.length(), 5.0);
        let n = v.normalized();
        assert_relative_eq!(n.length(), 1.0, max_relative = 1e-6);
    }

    #[test]
    fn test_vec2_integer_length_truncates() {
        assert_eq!(Vec2::new(3_i32, 4).length(), 5);
        assert_eq!(Vec2::new(1_i32, 1).length(), 1);
    }

    #[test]
    fn test_vec2_index() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_vec2_index_out_of_bounds() {
        let v = Vec2::new(1.0, 2.0);
        let _ = v[2];
    }

    #[test]
    fn test_vec2_fract() {
        let v = Vec2::new(1.25_f32, -0.75).fract();
        assert_relative_eq!(v.x, 0.25, max_relative = 1e-6);
        assert_relative_eq!(v.y, 0.25, max_relative = 1e-6);
    }
}
