//! Interpolation and lookup utilities.
//!
//! Pure, stateless free functions generic over the value type:
//! [`lerp`] and [`barycentric`] accept anything that supports affine
//! combinations (scalars, [`crate::Vec2`], [`crate::Vec3`], the SIMD
//! vector), [`clamp`] anything ordered, and [`find_interval`] performs
//! the standard "find enclosing interval in a sorted table" binary
//! search used for piecewise lookups.

use std::ops::{Add, Mul, Sub};

use num_traits::Float;

/// Linear interpolation between two values.
///
/// Returns `a` at `t = 0` and `b` at `t = 1`; values outside [0, 1]
/// extrapolate.
///
/// # Example
///
/// ```rust
/// use lumen_math::{lerp, Vec3};
///
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(
///     lerp(Vec3::zero(), Vec3::splat(2.0), 0.5),
///     Vec3::splat(1.0)
/// );
/// ```
#[inline]
pub fn lerp<T, S>(a: T, b: T, t: S) -> T
where
    T: Add<Output = T> + Sub<Output = T> + Mul<S, Output = T> + Copy,
    S: Copy,
{
    a + (b - a) * t
}

/// Clamps a value to `[min, max]`.
///
/// Evaluated as `max(min(value, max), min)`: a reversed range resolves
/// to `min` instead of panicking.
///
/// # Example
///
/// ```rust
/// use lumen_math::clamp;
///
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// ```
#[inline]
pub fn clamp<T: PartialOrd + Copy>(value: T, min: T, max: T) -> T {
    let v = if max < value { max } else { value };
    if v < min { min } else { v }
}

/// Interpolates over a triangle by barycentric coordinates.
///
/// `u` and `v` weight the edges from `t0` toward `t1` and `t2`;
/// `(u, v) = (0, 0)` returns `t0`.
#[inline]
pub fn barycentric<T, S>(t0: T, t1: T, t2: T, u: S, v: S) -> T
where
    T: Add<Output = T> + Sub<Output = T> + Mul<S, Output = T> + Copy,
    S: Copy,
{
    t0 + (t1 - t0) * u + (t2 - t0) * v
}

/// Fractional part of a value, `x - x.floor()`.
///
/// Always in [0, 1): `fract(-0.25) == 0.75`.
#[inline]
pub fn fract<T: Float>(x: T) -> T {
    x - x.floor()
}

/// Binary search for the interval enclosing a lookup position.
///
/// `pred(i)` must be monotonic over `0..size`: true for every index
/// below some crossing point and false from there on. Returns the
/// largest index for which `pred` is false at all indices at or below
/// it, clamped to `[0, size - 2]` so the result always names a valid
/// interval `[i, i + 1]` in a table of `size` entries.
///
/// # Example
///
/// ```rust
/// use lumen_math::find_interval;
///
/// let cdf = [0.0_f32, 0.25, 0.5, 0.75, 1.0];
/// let x = 0.6;
/// let i = find_interval(cdf.len(), |i| cdf[i] <= x);
/// assert_eq!(i, 2);
/// assert!(cdf[i] <= x && x < cdf[i + 1]);
/// ```
#[inline]
pub fn find_interval<F>(size: usize, pred: F) -> usize
where
    F: Fn(usize) -> bool,
{
    let mut first: usize = 0;
    let mut len = size;
    while len > 0 {
        let half = len >> 1;
        let middle = first + half;
        if pred(middle) {
            first = middle + 1;
            len -= half + 1;
        } else {
            len = half;
        }
    }
    // clamp(first - 1, 0, size - 2), min applied before max so that
    // size < 2 degrades to 0.
    let v = (first as isize - 1).min(size as isize - 2);
    v.max(0) as usize
}
