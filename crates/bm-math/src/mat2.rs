//! 2x2 matrix type.
//!
//! [`Mat2`] covers planar rotation and scaling. Same conventions as
//! [`Mat3`](crate::Mat3): row-major storage, column vectors.

use crate::{scalar, Numeric};

/// A 2x2 matrix.
///
/// # Example
///
/// ```rust
/// use bm_math::{Mat2, Vec2};
///
/// let m = Mat2::from_rows([[1, 2], [3, 4]]);
/// assert_eq!(m.determinant(), -2);
/// assert_eq!(m * Vec2::new(1, 1), Vec2::new(3, 7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat2<T> {
    /// Matrix elements in row-major order: [row0, row1]
    pub m: [[T; 2]; 2],
}

impl<T: Numeric> Mat2<T> {
    /// Determinant: `m00*m11 - m01*m10`.
    #[inline]
    pub fn determinant(&self) -> T {
        let m = &self.m;
        m[0][0].mul_wrapping(m[1][1]).sub_wrapping(m[0][1].mul_wrapping(m[1][0]))
    }

    /// Adjugate (transposed cofactor matrix): `[[m11, -m01], [-m10, m00]]`.
    #[inline]
    pub fn adjugate(&self) -> Self {
        let m = &self.m;
        Self::from_rows([[m[1][1], m[0][1].negate()], [m[1][0].negate(), m[0][0]]])
    }

    /// Element-wise division.
    ///
    /// Dividing by a zero element follows `T`'s own semantics (infinity or
    /// NaN for floats, a panic for integers).
    #[inline]
    pub fn div_elementwise(&self, other: &Self) -> Self {
        let mut out = *self;
        for i in 0..2 {
            for j in 0..2 {
                out.m[i][j] = self.m[i][j] / other.m[i][j];
            }
        }
        out
    }

    /// Counter-clockwise rotation by `angle` radians.
    ///
    /// ```text
    /// | cos -sin |
    /// | sin  cos |
    /// ```
    #[inline]
    pub fn rotation(angle: T) -> Self {
        let (s, c) = (scalar::sin(angle), scalar::cos(angle));
        Self::from_rows([[c, s.negate()], [s, c]])
    }

    /// Returns [`Mat2::rotation`] for `angle`.
    ///
    /// The current contents of `self` are discarded, not composed with.
    #[inline]
    pub fn rotate(&self, angle: T) -> Self {
        Self::rotation(angle)
    }
}

impl_mat_common!(Mat2, Vec2, 2);

impl Mat2<f32> {
    /// Converts to glam Mat2 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat2 {
        glam::Mat2::from_cols_array_2d(&self.transpose().m)
    }

    /// Creates from glam Mat2.
    #[inline]
    pub fn from_glam(m: glam::Mat2) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl From<glam::Mat2> for Mat2<f32> {
    #[inline]
    fn from(m: glam::Mat2) -> Self {
        Self::from_glam(m)
    }
}

impl From<Mat2<f32>> for glam::Mat2 {
    #[inline]
    fn from(m: Mat2<f32>) -> glam::Mat2 {
        m.to_glam()
    }
}
