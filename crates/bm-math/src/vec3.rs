//! 3-component vector.
//!
//! [`Vec3`] holds points, directions and normals in 3D space. It is generic
//! over any [`Numeric`] element type.
//!
//! # Usage
//!
//! ```rust
//! use bm_math::Vec3;
//!
//! let x = Vec3::new(1.0, 0.0, 0.0);
//! let y = Vec3::new(0.0, 1.0, 0.0);
//! assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
//! ```

use crate::{diff_of_products, Numeric};
use std::ops::{Index, IndexMut};

/// A 3D vector.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`.
///
/// # Example
///
/// ```rust
/// use bm_math::Vec3;
///
/// let v = Vec3::new(3.0, 4.0, 12.0);
/// assert_eq!(v.length(), 13.0);
/// assert_eq!(v[2], 12.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
    /// Z component
    pub z: T,
}

impl<T: Numeric> Vec3<T> {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates from an array.
    #[inline]
    pub fn from_array(a: [T; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Unit X vector (1, 0, 0).
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    /// Unit Y vector (0, 1, 0).
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    /// Unit Z vector (0, 0, 1).
    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// Right-handed cross product.
    ///
    /// `(y1*z2 - z1*y2, z1*x2 - x1*z2, x1*y2 - y1*x2)`
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            diff_of_products(self.y, other.z, self.z, other.y),
            diff_of_products(self.z, other.x, self.x, other.z),
            diff_of_products(self.x, other.y, self.y, other.x),
        )
    }
}

impl_vec_common!(Vec3, 3, { x, y, z });

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

impl<T> Index<usize> for Vec3<T> {
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

impl<T> IndexMut<usize> for Vec3<T> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_vec3_new() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_cross() {
        let x = Vec3::new(1, 0, 0);
        let y = Vec3::new(0, 1, 0);
        assert_eq!(x.cross(y), Vec3::new(0, 0, 1));
        assert_eq!(y.cross(x), Vec3::new(0, 0, -1));
        assert_eq!(Vec3::<f64>::unit_z().cross(Vec3::unit_x()), Vec3::unit_y());
    }

    #[test]
    fn test_vec3_unsigned_cross_wraps() {
        let x = Vec3::new(1_u32, 0, 0);
        let y = Vec3::new(0_u32, 1, 0);
        assert_eq!(x.cross(y), Vec3::new(0, 0, 1));
        assert_eq!(y.cross(x), Vec3::new(0, 0, u32::MAX));
    }

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
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
    fn test_vec3_normalize() {
        let n = Vec3::new(0.0, 3.0, 4.0).normalize();
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-12);
        assert_eq!(Vec3::<f64>::zero().normalize(), Vec3::zero());
    }

    #[test]
    fn test_vec3_angle() {
        let x = Vec3::new(2.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 5.0, 0.0);
        assert_abs_diff_eq!(x.angle(y), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(x.angle(-x), PI, epsilon = 1e-12);
        assert_eq!(x.angle(x), 0.0);
        assert_eq!(x.angle(Vec3::zero()), 0.0);
    }

    #[test]
    fn test_vec3_reflect() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let n = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(v.reflect(n), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_vec3_abs_clamp() {
        let v = Vec3::new(-0.5, 0.5, 1.5);
        assert_eq!(v.abs(), Vec3::new(0.5, 0.5, 1.5));
        assert_eq!(v.clamp(0.0, 1.0), Vec3::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_vec3_distance_lerp() {
        let a = Vec3::new(1.0, 1.0, 1.0);
        let b = Vec3::new(3.0, 3.0, 2.0);
        assert_eq!(a.distance(b), 3.0);
        assert_eq!(a.lerp(b, 0.5), Vec3::new(2.0, 2.0, 1.5));
        assert_eq!(a.lerp(b, 2.0), Vec3::new(5.0, 5.0, 3.0));
    }

    #[test]
    fn test_vec3_index() {
        let mut v = Vec3::new(1, 2, 3);
        assert_eq!(v[0], 1);
        assert_eq!(v[2], 3);
        v[1] = 7;
        assert_eq!(v.y, 7);
    }

    #[test]
    #[should_panic(expected = "Vec3 index out of bounds")]
    fn test_vec3_index_out_of_bounds() {
        let v = Vec3::new(1, 2, 3);
        let _ = v[3];
    }

    #[test]
    fn test_vec3_display() {
        assert_eq!(Vec3::new(1, -2, 3).to_string(), "(1, -2, 3)");
        assert_eq!(Vec3::new(0.5, 1.0, 2.0).to_string(), "(0.5, 1, 2)");
    }

    #[test]
    fn test_vec3_glam() {
        let v = Vec3::new(1.0_f32, 2.0, 3.0);
        let g: glam::Vec3 = v.into();
        assert_eq!(g, glam::Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec3::from(g), v);
    }
}
