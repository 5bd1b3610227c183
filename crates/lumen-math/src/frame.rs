//! Spherical coordinates and shading-frame helpers.
//!
//! Conventions: Y is up (the frame normal). `theta` is the polar angle
//! measured from +Y, `phi` the azimuth in [0, 2π) measured from +X
//! toward +Z.

use num_traits::{Float, FloatConst};

use crate::interp::clamp;
use crate::scalar::Scalar;
use crate::vec3::Vec3;

/// Builds a unit direction from spherical coordinates.
///
/// Takes `sin(theta)` and `cos(theta)` directly so callers sampling a
/// distribution can avoid recomputing them.
///
/// # Example
///
/// ```rust
/// use lumen_math::frame::spherical_direction;
///
/// // theta = 0 points along +Y.
/// let d = spherical_direction(0.0_f32, 1.0, 0.0);
/// assert!((d.y - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn spherical_direction<T: Scalar + Float>(sin_theta: T, cos_theta: T, phi: T) -> Vec3<T> {
    Vec3::new(sin_theta * phi.cos(), cos_theta, sin_theta * phi.sin())
}

/// Polar angle of a unit direction, in [0, π].
///
/// The Y component is clamped to [-1, 1] so that directions that are
/// only approximately unit-length never produce NaN from `acos`.
#[inline]
pub fn spherical_theta<T: Scalar + Float>(v: Vec3<T>) -> T {
    clamp(v.y, -T::one(), T::one()).acos()
}

/// Azimuthal angle of a direction, remapped to [0, 2π).
#[inline]
pub fn spherical_phi<T: Scalar + Float + FloatConst>(v: Vec3<T>) -> T {
    let p = v.z.atan2(v.x);
    if p < T::zero() { p + T::TAU() } else { p }
}

/// Expresses a world-space vector in a tangent/normal/bitangent frame.
///
/// Y is the normal in the local frame.
#[inline]
pub fn world_to_local<T: Scalar>(v: Vec3<T>, t: Vec3<T>, n: Vec3<T>, bt: Vec3<T>) -> Vec3<T> {
    Vec3::new(t.dot(v), n.dot(v), bt.dot(v))
}

/// Takes a local-frame vector back to world space.
///
/// Inverse of [`world_to_local`] for an orthonormal frame.
#[inline]
pub fn local_to_world<T: Scalar>(v: Vec3<T>, t: Vec3<T>, n: Vec3<T>, bt: Vec3<T>) -> Vec3<T> {
    t * v.x + n * v.y + bt * v.z
}

/// Rotates `v` about a unit `axis` by `theta` radians (Rodrigues).
///
/// The sine keeps its sign, so angles in (π, 2π) continue the rotation
/// in the same direction rather than reflecting back.
#[inline]
pub fn rotate<T: Scalar + Float>(v: Vec3<T>, axis: Vec3<T>, theta: T) -> Vec3<T> {
    let cos_theta = theta.cos();
    let sin_theta = theta.sin();
    v * cos_theta
        + axis.cross(v) * sin_theta
        + axis * axis.dot(v) * (T::one() - cos_theta)
}
