//! 4x4 matrix type.
//!
//! [`Mat4`] is the homogeneous-coordinate counterpart of [`Mat3`]. Its
//! determinant, minors and inverse reduce to [`Mat3`] determinants by
//! cofactor expansion, rather than a general N x N routine.

use crate::{Mat3, Numeric};

/// A 4x4 matrix.
///
/// # Example
///
/// ```rust
/// use bm_math::{Mat3, Mat4, Vec4};
///
/// let m = Mat4::from_mat3(Mat3::diagonal([2.0, 3.0, 4.0]));
/// assert_eq!(m.determinant(), 24.0);
/// assert_eq!(m * Vec4::new(1.0, 1.0, 1.0, 1.0), Vec4::new(2.0, 3.0, 4.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4<T> {
    /// Matrix elements in row-major order: [row0, row1, row2, row3]
    pub m: [[T; 4]; 4],
}

impl<T: Numeric> Mat4<T> {
    /// Embeds `m` in the upper-left 3x3 block; the last row and column are
    /// those of the identity.
    pub fn from_mat3(m: Mat3<T>) -> Self {
        let mut out = Self::identity();
        for i in 0..3 {
            out.m[i][..3].copy_from_slice(&m.m[i]);
        }
        out
    }

    /// Determinant of the 3x3 matrix left after deleting `row` and `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..4`.
    pub fn minor(&self, row: usize, col: usize) -> T {
        assert!(row < 4 && col < 4, "Mat4 minor index out of bounds: ({row}, {col})");
        let mut sub = [[T::zero(); 3]; 3];
        for (si, r) in (0..4).filter(|&r| r != row).enumerate() {
            for (sj, c) in (0..4).filter(|&c| c != col).enumerate() {
                sub[si][sj] = self.m[r][c];
            }
        }
        Mat3::from_rows(sub).determinant()
    }

    /// Minor with the checkerboard sign: negated when `row + col` is odd.
    #[inline]
    pub fn cofactor(&self, row: usize, col: usize) -> T {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 1 { minor.negate() } else { minor }
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> T {
        let mut det = T::zero();
        for j in 0..4 {
            det = det.add_wrapping(self.m[0][j].mul_wrapping(self.cofactor(0, j)));
        }
        det
    }

    /// Adjugate: `adj[j][i] = cofactor(i, j)`.
    pub fn adjugate(&self) -> Self {
        let mut out = Self::zero();
        for i in 0..4 {
            for j in 0..4 {
                out.m[j][i] = self.cofactor(i, j);
            }
        }
        out
    }

    /// Rotation about the X axis by `angle` radians.
    #[inline]
    pub fn rotation_x(angle: T) -> Self {
        Self::from_mat3(Mat3::rotation_x(angle))
    }

    /// Rotation about the Y axis by `angle` radians.
    #[inline]
    pub fn rotation_y(angle: T) -> Self {
        Self::from_mat3(Mat3::rotation_y(angle))
    }

    /// Rotation about the Z axis by `angle` radians.
    #[inline]
    pub fn rotation_z(angle: T) -> Self {
        Self::from_mat3(Mat3::rotation_z(angle))
    }

    /// Returns [`Mat4::rotation_x`]; the contents of `self` are discarded.
    #[inline]
    pub fn rotate_x(&self, angle: T) -> Self {
        Self::rotation_x(angle)
    }

    /// Returns [`Mat4::rotation_y`]; the contents of `self` are discarded.
    #[inline]
    pub fn rotate_y(&self, angle: T) -> Self {
        Self::rotation_y(angle)
    }

    /// Returns [`Mat4::rotation_z`]; the contents of `self` are discarded.
    #[inline]
    pub fn rotate_z(&self, angle: T) -> Self {
        Self::rotation_z(angle)
    }
}

impl_mat_common!(Mat4, Vec4, 4);

impl Mat4<f32> {
    /// Converts to glam Mat4 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols_array_2d(&self.transpose().m)
    }

    /// Creates from glam Mat4.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl From<glam::Mat4> for Mat4<f32> {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_glam(m)
    }
}

impl From<Mat4<f32>> for glam::Mat4 {
    #[inline]
    fn from(m: Mat4<f32>) -> glam::Mat4 {
        m.to_glam()
    }
}
