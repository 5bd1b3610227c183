//! # lumen-math
//!
//! Foundational 3D math primitives for rendering code.
//!
//! This crate provides the value types a renderer builds everything else
//! on top of:
//!
//! - [`Vec3`] - generic 3D vector over any arithmetic element type
//! - [`Vec3A`] - SIMD fast path for the default real type (feature `simd`)
//! - [`Vec2`] - generic 2D vector
//! - [`Bounds`] - axis-aligned bounding box
//! - [`Mat3`], [`Affine3`] - 3x3 linear and affine transforms
//! - Free functions: [`lerp`], [`clamp`], [`barycentric`], [`fract`],
//!   [`find_interval`], and the [`frame`] helpers
//!
//! # Design
//!
//! Everything is a plain `Copy` value with no owned resources; there are
//! no runtime error paths. Numeric edge cases (dividing by zero,
//! normalizing a zero vector, querying a degenerate box) resolve to the
//! element type's own semantics - infinity/NaN for floats - and are
//! accepted outcomes, documented per operation. The only enforced
//! constraint is the [`Scalar`] bound: non-arithmetic element types fail
//! to compile.
//!
//! The generic and SIMD implementations of the 3D vector share one
//! contract: for every public operation the first three result
//! components agree up to floating-point reordering. The differential
//! suite in the workspace's test crate holds them to it.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{Bounds, RVec3, Vec3};
//!
//! // RVec3 is the default-real vector: the SIMD type when the `simd`
//! // feature is on, the generic instantiation otherwise.
//! let v = RVec3::new(1.0, 2.0, 3.0);
//! let n = v.normalized();
//! assert!((n.length() - 1.0).abs() < 1e-6);
//!
//! // Other precisions instantiate the generic types directly.
//! let d = Vec3::new(1.0_f64, 2.0, 3.0);
//! let b = Bounds::from_point(d).union_point(Vec3::zero());
//! assert_eq!(b.max, d);
//! ```
//!
//! # Feature Flags
//!
//! - `simd` (default) - the 16-byte-aligned [`Vec3A`] fast path via the
//!   `wide` crate; [`RVec3`] points at it
//! - `common-types` - short-named aliases (`Vec3f`, `Vec3d`,
//!   `Boundsf`, ...); naming sugar only

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod affine;
mod bounds;
mod interp;
mod mat3;
mod scalar;
mod vec2;
mod vec3;

pub mod frame;
#[cfg(feature = "simd")]
mod simd;

pub use affine::Affine3;
pub use bounds::Bounds;
pub use interp::{barycentric, clamp, find_interval, fract, lerp};
pub use mat3::Mat3;
pub use scalar::{consts, Real, Scalar};
#[cfg(feature = "simd")]
pub use simd::Vec3A;
pub use vec2::Vec2;
pub use vec3::Vec3;

/// The default-real 3D vector.
///
/// Points at the SIMD fast path when the `simd` feature is enabled and
/// at the generic implementation otherwise; the two are behaviorally
/// equivalent.
#[cfg(feature = "simd")]
pub type RVec3 = Vec3A;

/// The default-real 3D vector (generic implementation; the `simd`
/// feature is disabled).
#[cfg(not(feature = "simd"))]
pub type RVec3 = Vec3<Real>;

/// The default-real 2D vector.
pub type RVec2 = Vec2<Real>;

/// The default-real bounding box.
pub type RBounds = Bounds<Real>;

/// The default-real 3x3 matrix.
pub type RMat3 = Mat3<Real>;

/// The default-real affine transform.
pub type RAffine3 = Affine3<Real>;

/// Short-named aliases for common instantiations.
#[cfg(feature = "common-types")]
mod common_types {
    use super::*;

    /// Single-precision 3D vector (generic layout).
    pub type Vec3f = Vec3<f32>;
    /// Double-precision 3D vector.
    pub type Vec3d = Vec3<f64>;
    /// Signed-integer 3D vector.
    pub type Vec3i = Vec3<i32>;
    /// Unsigned-integer 3D vector.
    pub type Vec3u = Vec3<u32>;

    /// Single-precision 2D vector.
    pub type Vec2f = Vec2<f32>;
    /// Double-precision 2D vector.
    pub type Vec2d = Vec2<f64>;
    /// Signed-integer 2D vector.
    pub type Vec2i = Vec2<i32>;
    /// Unsigned-integer 2D vector.
    pub type Vec2u = Vec2<u32>;

    /// Single-precision bounding box.
    pub type Boundsf = Bounds<f32>;
    /// Double-precision bounding box.
    pub type Boundsd = Bounds<f64>;
    /// Signed-integer bounding box.
    pub type Boundsi = Bounds<i32>;
    /// Unsigned-integer bounding box.
    pub type Boundsu = Bounds<u32>;

    /// Single-precision 3x3 matrix.
    pub type Mat3f = Mat3<f32>;
    /// Double-precision 3x3 matrix.
    pub type Mat3d = Mat3<f64>;

    /// Single-precision affine transform.
    pub type Affine3f = Affine3<f32>;
    /// Double-precision affine transform.
    pub type Affine3d = Affine3<f64>;
}

#[cfg(feature = "common-types")]
pub use common_types::*;
