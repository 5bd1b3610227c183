//! Generic 3x3 matrix type.
//!
//! [`Mat3`] is the linear part of an affine transform. Storage is
//! **row-major** with **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```

use std::ops::{Index, Mul};

use num_traits::Float;

use crate::scalar::Scalar;
use crate::vec3::Vec3;

/// A 3x3 matrix over an arithmetic element type.
///
/// # Example
///
/// ```rust
/// use lumen_math::{Mat3, Vec3};
///
/// let m = Mat3::scale(2.0);
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(m * v, Vec3::new(2.0, 4.0, 6.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3<T: Scalar> {
    /// Matrix elements in row-major order: [row0, row1, row2].
    pub m: [[T; 3]; 3],
}

impl<T: Scalar> Mat3<T> {
    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[T; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from column arrays.
    ///
    /// Transposes the input (columns become rows internally).
    #[inline]
    pub const fn from_cols(cols: [[T; 3]; 3]) -> Self {
        Self {
            m: [
                [cols[0][0], cols[1][0], cols[2][0]],
                [cols[0][1], cols[1][1], cols[2][1]],
                [cols[0][2], cols[1][2], cols[2][2]],
            ],
        }
    }

    /// Creates a matrix from Vec3 rows.
    #[inline]
    pub fn from_row_vecs(r0: Vec3<T>, r1: Vec3<T>, r2: Vec3<T>) -> Self {
        Self::from_rows([r0.to_array(), r1.to_array(), r2.to_array()])
    }

    /// The zero matrix.
    #[inline]
    pub fn zero() -> Self {
        Self::from_rows([[T::zero(); 3]; 3])
    }

    /// The identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::diagonal(T::one(), T::one(), T::one())
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub fn diagonal(d0: T, d1: T, d2: T) -> Self {
        let o = T::zero();
        Self::from_rows([[d0, o, o], [o, d1, o], [o, o, d2]])
    }

    /// Creates a uniform scale matrix.
    #[inline]
    pub fn scale(s: T) -> Self {
        Self::diagonal(s, s, s)
    }

    /// Returns a row as Vec3.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3<T> {
        Vec3::from_array(self.m[i])
    }

    /// Returns a column as Vec3.
    #[inline]
    pub fn col(&self, i: usize) -> Vec3<T> {
        Vec3::new(self.m[0][i], self.m[1][i], self.m[2][i])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.m)
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> T {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Transforms a Vec3 by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    #[inline]
    pub fn transform(&self, v: Vec3<T>) -> Vec3<T> {
        Vec3::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z,
            self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z,
            self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z,
        )
    }

    /// Multiplies two matrices.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        result
    }
}

impl<T: Scalar + Float> Mat3<T> {
    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < T::epsilon() {
            return None;
        }

        let m = &self.m;
        let inv_det = T::one() / det;

        // Cofactor matrix, transposed and scaled by 1/det.
        Some(Self::from_rows([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ]))
    }
}

impl<T: Scalar> Default for Mat3<T> {
    fn default() -> Self {
        Self::identity()
    }
}

// Mat3 * Vec3
impl<T: Scalar> Mul<Vec3<T>> for Mat3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn mul(self, rhs: Vec3<T>) -> Vec3<T> {
        self.transform(rhs)
    }
}

// Mat3 * Mat3
impl<T: Scalar> Mul for Mat3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// Mat3 * scalar
impl<T: Scalar> Mul<T> for Mat3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::from_row_vecs(
            self.row(0) * rhs,
            self.row(1) * rhs,
            self.row(2) * rhs,
        )
    }
}

impl<T: Scalar> Index<usize> for Mat3<T> {
    type Output = [T; 3];

    #[inline]
    fn index(&self, i: usize) -> &[T; 3] {
        &self.m[i]
    }
}

impl Mat3<f32> {
    /// Converts to glam Mat3 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat3 {
        glam::Mat3::from_cols_array_2d(&self.transpose().m)
    }

    /// Creates from glam Mat3.
    #[inline]
    pub fn from_glam(m: glam::Mat3) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}
