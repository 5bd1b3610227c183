//! Element-type bound and the library's default real type.
//!
//! Every vector, box and matrix in this crate is generic over an
//! arithmetic element type. [`Scalar`] is the compile-time gate:
//! instantiating a math type with anything that is not a primitive
//! numeric type fails to compile, which is the only error surface this
//! library has.

use std::fmt::Debug;

use num_traits::{Num, NumCast};

/// Marker bound for arithmetic element types.
///
/// Blanket-implemented for every type that behaves like a primitive
/// number: all integer and floating-point primitives qualify, and
/// nothing else is expected to. The [`NumCast`] bound lets norms route
/// their square root through `f64` for any element type.
///
/// # Example
///
/// ```rust
/// use lumen_math::Vec3;
///
/// let f = Vec3::new(1.0_f32, 2.0, 3.0);
/// let i = Vec3::new(1_i32, 2, 3);
/// // Vec3::<String> does not compile.
/// ```
pub trait Scalar: Num + NumCast + PartialOrd + Copy + Debug + 'static {}

impl<T> Scalar for T where T: Num + NumCast + PartialOrd + Copy + Debug + 'static {}

/// The library's default real type.
///
/// A single global alias used throughout: the SIMD fast path exists only
/// for this type, and the `R`-prefixed aliases ([`crate::RVec3`] and
/// friends) are instantiated with it. Callers wanting a different
/// precision instantiate the generic types directly.
pub type Real = f32;

/// Common real-valued constants.
pub mod consts {
    use super::Real;

    /// Archimedes' constant.
    pub const PI: Real = std::f32::consts::PI;

    /// 2π, one full turn in radians.
    pub const TWO_PI: Real = 2.0 * PI;

    /// 1/π.
    pub const INV_PI: Real = 1.0 / PI;

    /// 1/(2π). Normalization factor for a full circle of solid angle.
    pub const INV_TWO_PI: Real = 1.0 / TWO_PI;

    /// 1/(4π). Normalization factor for the full sphere.
    pub const INV_FOUR_PI: Real = 1.0 / (4.0 * PI);

    /// Euler's number.
    pub const E: Real = std::f32::consts::E;
}
