//! 3x3 matrix type.
//!
//! [`Mat3`] is used for 3D rotations, scaling and general linear transforms.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! # Usage
//!
//! ```rust
//! use bm_math::{rotate_z, Mat3, Vec3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let r: Mat3<f64> = rotate_z(FRAC_PI_2);
//! let v = r * Vec3::new(1.0, 0.0, 0.0);
//! assert!((v - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-12);
//! ```

use crate::{diff_of_products, scalar, Mat2, Numeric, Vec3};

/// A 3x3 matrix.
///
/// Stored in row-major order. Use [`Mat3::from_rows`] or [`Mat3::from_cols`]
/// to construct from component arrays.
///
/// # Example
///
/// ```rust
/// use bm_math::{Mat3, Vec3};
///
/// let identity = Mat3::identity();
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(identity * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat3<T> {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[T; 3]; 3],
}

impl<T: Numeric> Mat3<T> {
    /// Creates a matrix from Vec3 rows.
    #[inline]
    pub fn from_row_vecs(r0: Vec3<T>, r1: Vec3<T>, r2: Vec3<T>) -> Self {
        Self::from_rows([r0.to_array(), r1.to_array(), r2.to_array()])
    }

    /// Creates a matrix from Vec3 columns.
    #[inline]
    pub fn from_col_vecs(c0: Vec3<T>, c1: Vec3<T>, c2: Vec3<T>) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array(), c2.to_array()])
    }

    /// Computes the determinant by cofactor expansion along the first row.
    #[inline]
    pub fn determinant(&self) -> T {
        let m = &self.m;
        m[0][0]
            .mul_wrapping(diff_of_products(m[1][1], m[2][2], m[1][2], m[2][1]))
            .sub_wrapping(m[0][1].mul_wrapping(diff_of_products(m[1][0], m[2][2], m[1][2], m[2][0])))
            .add_wrapping(m[0][2].mul_wrapping(diff_of_products(m[1][0], m[2][1], m[1][1], m[2][0])))
    }

    /// Determinant of the 2x2 matrix left after deleting `row` and `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`.
    pub fn minor(&self, row: usize, col: usize) -> T {
        assert!(row < 3 && col < 3, "Mat3 minor index out of bounds: ({row}, {col})");
        let mut sub = [[T::zero(); 2]; 2];
        for (si, r) in (0..3).filter(|&r| r != row).enumerate() {
            for (sj, c) in (0..3).filter(|&c| c != col).enumerate() {
                sub[si][sj] = self.m[r][c];
            }
        }
        Mat2::from_rows(sub).determinant()
    }

    /// Minor with the checkerboard sign: negated when `row + col` is odd.
    #[inline]
    pub fn cofactor(&self, row: usize, col: usize) -> T {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 1 { minor.negate() } else { minor }
    }

    /// Adjugate (transposed cofactor matrix), in closed form.
    pub fn adjugate(&self) -> Self {
        let m = &self.m;
        Self::from_rows([
            [
                diff_of_products(m[1][1], m[2][2], m[1][2], m[2][1]),
                diff_of_products(m[0][2], m[2][1], m[0][1], m[2][2]),
                diff_of_products(m[0][1], m[1][2], m[0][2], m[1][1]),
            ],
            [
                diff_of_products(m[1][2], m[2][0], m[1][0], m[2][2]),
                diff_of_products(m[0][0], m[2][2], m[0][2], m[2][0]),
                diff_of_products(m[0][2], m[1][0], m[0][0], m[1][2]),
            ],
            [
                diff_of_products(m[1][0], m[2][1], m[1][1], m[2][0]),
                diff_of_products(m[0][1], m[2][0], m[0][0], m[2][1]),
                diff_of_products(m[0][0], m[1][1], m[0][1], m[1][0]),
            ],
        ])
    }

    /// Right-handed rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: T) -> Self {
        let (s, c) = (scalar::sin(angle), scalar::cos(angle));
        let (o, z) = (T::one(), T::zero());
        Self::from_rows([[o, z, z], [z, c, s.negate()], [z, s, c]])
    }

    /// Right-handed rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: T) -> Self {
        let (s, c) = (scalar::sin(angle), scalar::cos(angle));
        let (o, z) = (T::one(), T::zero());
        Self::from_rows([[c, z, s], [z, o, z], [s.negate(), z, c]])
    }

    /// Right-handed rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: T) -> Self {
        let (s, c) = (scalar::sin(angle), scalar::cos(angle));
        let (o, z) = (T::one(), T::zero());
        Self::from_rows([[c, s.negate(), z], [s, c, z], [z, z, o]])
    }

    /// Returns [`Mat3::rotation_x`]; the contents of `self` are discarded.
    #[inline]
    pub fn rotate_x(&self, angle: T) -> Self {
        Self::rotation_x(angle)
    }

    /// Returns [`Mat3::rotation_y`]; the contents of `self` are discarded.
    #[inline]
    pub fn rotate_y(&self, angle: T) -> Self {
        Self::rotation_y(angle)
    }

    /// Returns [`Mat3::rotation_z`]; the contents of `self` are discarded.
    #[inline]
    pub fn rotate_z(&self, angle: T) -> Self {
        Self::rotation_z(angle)
    }
}

impl_mat_common!(Mat3, Vec3, 3);

/// Rotation about the X axis. Same as [`Mat3::rotation_x`].
#[inline]
pub fn rotate_x<T: Numeric>(angle: T) -> Mat3<T> {
    Mat3::rotation_x(angle)
}

/// Rotation about the Y axis. Same as [`Mat3::rotation_y`].
#[inline]
pub fn rotate_y<T: Numeric>(angle: T) -> Mat3<T> {
    Mat3::rotation_y(angle)
}

/// Rotation about the Z axis. Same as [`Mat3::rotation_z`].
#[inline]
pub fn rotate_z<T: Numeric>(angle: T) -> Mat3<T> {
    Mat3::rotation_z(angle)
}

impl Mat3<f32> {
    /// Converts to glam Mat3 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat3 {
        // glam uses column-major, so we transpose
        glam::Mat3::from_cols_array_2d(&self.transpose().m)
    }

    /// Creates from glam Mat3.
    #[inline]
    pub fn from_glam(m: glam::Mat3) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl From<glam::Mat3> for Mat3<f32> {
    #[inline]
    fn from(m: glam::Mat3) -> Self {
        Self::from_glam(m)
    }
}

impl From<Mat3<f32>> for glam::Mat3 {
    #[inline]
    fn from(m: Mat3<f32>) -> glam::Mat3 {
        m.to_glam()
    }
}
