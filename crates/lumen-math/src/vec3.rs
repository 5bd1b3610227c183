//! Generic 3D vector type.
//!
//! [`Vec3`] is the arithmetic core of the library: a component-wise
//! 3-vector over any [`Scalar`] element type. The default-real
//! instantiation has a SIMD twin, [`crate::Vec3A`], with an identical
//! public contract (see the `simd` module).
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::Vec3;
//!
//! let a: Vec3<f64> = Vec3::new(1.0, 2.0, 3.0);
//! let b = Vec3::splat(2.0);
//! let n = (a * b).normalized();
//! assert!((n.length() - 1.0).abs() < 1e-6);
//! ```

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use num_traits::Float;

use crate::scalar::Scalar;

/// A 3-component arithmetic vector.
///
/// Components are stored contiguously. Equality is exact component-wise
/// comparison with no epsilon; callers needing approximate equality
/// compare externally.
///
/// # Numeric edge cases
///
/// Division by zero (including [`Vec3::normalized`] on the zero vector)
/// follows the element type's own semantics: infinity/NaN for floats.
/// These are accepted outcomes, not errors.
///
/// # Example
///
/// ```rust
/// use lumen_math::Vec3;
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(v.x, 1.0);
/// assert_eq!(v[2], 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3<T: Scalar> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
    /// Z component.
    pub z: T,
}

impl<T: Scalar> Vec3<T> {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lumen_math::Vec3;
    ///
    /// assert_eq!(Vec3::splat(2.0), Vec3::new(2.0, 2.0, 2.0));
    /// ```
    #[inline]
    pub const fn splat(v: T) -> Self {
        Self::new(v, v, v)
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

    /// Unit vector along X.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    /// Unit vector along Y.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    /// Unit vector along Z.
    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [T; 3]) -> Self {
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
    pub fn from_slice(s: &[T]) -> Self {
        Self::new(s[0], s[1], s[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product with another vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lumen_math::Vec3;
    ///
    /// let a = Vec3::new(1.0, 2.0, 3.0);
    /// let b = Vec3::new(4.0, 5.0, 6.0);
    /// assert_eq!(a.dot(b), 32.0);
    /// ```
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
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

    /// Squared length (avoids the square root).
    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> T {
        (other - self).length_squared()
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            if other.x < self.x { other.x } else { self.x },
            if other.y < self.y { other.y } else { self.y },
            if other.z < self.z { other.z } else { self.z },
        )
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            if other.x > self.x { other.x } else { self.x },
            if other.y > self.y { other.y } else { self.y },
            if other.z > self.z { other.z } else { self.z },
        )
    }

    /// Returns the smallest component.
    #[inline]
    pub fn min_element(self) -> T {
        let m = if self.y < self.x { self.y } else { self.x };
        if self.z < m { self.z } else { m }
    }

    /// Returns the largest component.
    #[inline]
    pub fn max_element(self) -> T {
        let m = if self.y > self.x { self.y } else { self.x };
        if self.z > m { self.z } else { m }
    }

    /// Length (Euclidean norm) of the vector.
    ///
    /// The square-sum is accumulated in `T`, the root taken through
    /// `f64`, and the result converted back to `T`. Integer element
    /// types therefore truncate: `Vec3::new(1, 1, 1).length() == 1`.
    /// For float element types the round trip through `f64` is exact.
    #[inline]
    pub fn length(self) -> T {
        // A square-sum that cannot round-trip through f64 (e.g. a
        // wrapped-negative integer sum) collapses to zero.
        let sq = self.length_squared().to_f64().unwrap_or(f64::NAN);
        T::from(sq.sqrt()).unwrap_or_else(T::zero)
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> T {
        (other - self).length()
    }
}

impl<T: Scalar + Float> Vec3<T> {
    /// Divides the vector by its own length.
    ///
    /// No zero check is performed: normalizing the zero vector divides
    /// by zero and yields infinity/NaN components.
    #[inline]
    pub fn normalized(self) -> Self {
        self / self.length()
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
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

// Indexing: 0/1/2 map to x/y/z, anything else is out of bounds.
impl<T: Scalar> Index<usize> for Vec3<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Vec3<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

// Vec3 + Vec3
impl<T: Scalar> Add for Vec3<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

// Vec3 - Vec3
impl<T: Scalar> Sub for Vec3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Vec3 * Vec3 (component-wise)
impl<T: Scalar> Mul for Vec3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

// Vec3 * scalar
impl<T: Scalar> Mul<T> for Vec3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// f32 * Vec3. A generic scalar-left impl is not coherent, so the two
// float instantiations get it concretely, matching the fast path.
impl Mul<Vec3<f32>> for f32 {
    type Output = Vec3<f32>;

    #[inline]
    fn mul(self, rhs: Vec3<f32>) -> Vec3<f32> {
        rhs * self
    }
}

// f64 * Vec3
impl Mul<Vec3<f64>> for f64 {
    type Output = Vec3<f64>;

    #[inline]
    fn mul(self, rhs: Vec3<f64>) -> Vec3<f64> {
        rhs * self
    }
}

// Vec3 / Vec3 (component-wise)
impl<T: Scalar> Div for Vec3<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

// Vec3 / scalar: one division, three multiplications. The rounding may
// differ from three independent divisions.
impl<T: Scalar> Div<T> for Vec3<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        let inv = T::one() / rhs;
        Self::new(self.x * inv, self.y * inv, self.z * inv)
    }
}

// Negation is multiplication by -1.
impl<T: Scalar + Neg<Output = T>> Neg for Vec3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self * -T::one()
    }
}

impl<T: Scalar> AddAssign for Vec3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vec3<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign for Vec3<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Vec3<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> DivAssign for Vec3<T> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Vec3<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<T: Scalar> From<[T; 3]> for Vec3<T> {
    #[inline]
    fn from(a: [T; 3]) -> Self {
        Self::from_array(a)
    }
}

impl<T: Scalar> From<Vec3<T>> for [T; 3] {
    #[inline]
    fn from(v: Vec3<T>) -> [T; 3] {
        v.to_array()
    }
}

impl Vec3<f32> {
    /// Converts to glam Vec3.
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam Vec3.
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<glam::Vec3> for Vec3<f32> {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3<f32>> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3<f32>) -> glam::Vec3 {
        v.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vec3_new() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_from_slice_reads_three() {
        let data = [1.0, 2.0, 3.0, 99.0];
        let v = Vec3::from_slice(&data);
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_vec3_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(b / a, Vec3::new(4.0, 2.5, 2.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_vec3_scalar_div_uses_reciprocal() {
        let v = Vec3::new(2.0_f32, 4.0, 6.0);
        let d = v / 2.0;
        assert_relative_eq!(d.x, 1.0, max_relative = 1e-6);
        assert_relative_eq!(d.y, 2.0, max_relative = 1e-6);
        assert_relative_eq!(d.z, 3.0, max_relative = 1e-6);
    }

    #[test]
    fn test_vec3_compound_assign() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v += Vec3::splat(1.0);
        assert_eq!(v, Vec3::new(2.0, 3.0, 4.0));
        v -= Vec3::splat(1.0);
        v *= 2.0;
        assert_eq!(v, Vec3::new(2.0, 4.0, 6.0));
        v /= 2.0;
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        v *= Vec3::new(2.0, 3.0, 4.0);
        assert_eq!(v, Vec3::new(2.0, 6.0, 12.0));
        v /= Vec3::new(2.0, 3.0, 4.0);
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_vec3_index() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);
        v[1] = 5.0;
        assert_eq!(v.y, 5.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_vec3_index_out_of_bounds() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let _ = v[3];
    }

    #[test]
    fn test_vec3_dot_cross() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(a.cross(b), Vec3::new(-3.0, 6.0, -3.0));
        assert_eq!(
            Vec3::unit_x().cross(Vec3::unit_y()),
            Vec3::<f32>::unit_z()
        );
    }

    #[test]
    fn test_vec3_length() {
        assert_eq!(Vec3::new(1.0_f32, 0.0, 0.0).length(), 1.0);
        assert_eq!(Vec3::<f32>::zero().length(), 0.0);
        assert_relative_eq!(
            Vec3::new(2.0_f32, 3.0, 6.0).length(),
            7.0,
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_vec3_normalized_zero_is_nan() {
        let n = Vec3::<f32>::zero().normalized();
        assert!(n.x.is_nan());
    }

    #[test]
    fn test_vec3_integer_elements() {
        let a = Vec3::new(1_i32, 2, 3);
        let b = Vec3::new(2_i32, 2, 2);
        assert_eq!(a + b, Vec3::new(3, 4, 5));
        assert_eq!(a.dot(b), 12);
        assert_eq!(a.length_squared(), 14);
    }

    #[test]
    fn test_vec3_integer_length_truncates() {
        // 2-3-6-7 is a Pythagorean quadruple, so the norm is exact.
        assert_eq!(Vec3::new(2_i32, 3, 6).length(), 7);
        // sqrt(3) = 1.73.. truncates toward zero.
        assert_eq!(Vec3::new(1_i32, 1, 1).length(), 1);
        assert_eq!(Vec3::new(3_i32, 4, 0).distance(Vec3::zero()), 5);
    }

    #[test]
    fn test_vec3_scalar_left_mul() {
        let v = Vec3::new(1.0_f32, 2.0, 3.0);
        assert_eq!(2.0 * v, v * 2.0);
        let d = Vec3::new(1.0_f64, 2.0, 3.0);
        assert_eq!(0.5 * d, Vec3::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn test_vec3_min_max() {
        let a = Vec3::new(1.0, 5.0, 3.0);
        let b = Vec3::new(4.0, 2.0, 6.0);
        assert_eq!(a.min(b), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(a.max(b), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(a.min_element(), 1.0);
        assert_eq!(a.max_element(), 5.0);
    }

    #[test]
    fn test_vec3_fract() {
        let v = Vec3::new(1.75_f32, -0.25, 2.0).fract();
        assert_relative_eq!(v.x, 0.75, max_relative = 1e-6);
        assert_relative_eq!(v.y, 0.75, max_relative = 1e-6);
        assert_relative_eq!(v.z, 0.0, max_relative = 1e-6);
    }

    #[test]
    fn test_vec3_glam_roundtrip() {
        let v = Vec3::new(1.0_f32, 2.0, 3.0);
        assert_eq!(Vec3::from_glam(v.to_glam()), v);
    }
}
