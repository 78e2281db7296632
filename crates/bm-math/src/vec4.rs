//! 4-component vector.
//!
//! [`Vec4`] is used for homogeneous coordinates alongside [`Mat4`](crate::Mat4).

use crate::Numeric;
use std::ops::{Index, IndexMut};

/// A 4D vector.
///
/// Access via `.x`, `.y`, `.z`, `.w` or index `[0]`..`[3]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec4<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
    /// Z component
    pub z: T,
    /// W component
    pub w: T,
}

impl<T: Numeric> Vec4<T> {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Creates from an array.
    #[inline]
    pub fn from_array(a: [T; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub fn to_array(self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Homogeneous point `(x, y, z, 1)`.
    #[inline]
    pub fn from_point(p: crate::Vec3<T>) -> Self {
        Self::new(p.x, p.y, p.z, T::one())
    }

    /// Drops `w`.
    #[inline]
    pub fn truncate(self) -> crate::Vec3<T> {
        crate::Vec3::new(self.x, self.y, self.z)
    }
}

impl_vec_common!(Vec4, 4, { x, y, z, w });

impl Vec4<f32> {
    /// Converts to glam Vec4.
    #[inline]
    pub fn to_glam(self) -> glam::Vec4 {
        glam::Vec4::new(self.x, self.y, self.z, self.w)
    }

    /// Creates from glam Vec4.
    #[inline]
    pub fn from_glam(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<glam::Vec4> for Vec4<f32> {
    #[inline]
    fn from(v: glam::Vec4) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec4<f32>> for glam::Vec4 {
    #[inline]
    fn from(v: Vec4<f32>) -> glam::Vec4 {
        v.to_glam()
    }
}

impl<T> Index<usize> for Vec4<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

impl<T> IndexMut<usize> for Vec4<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_vec4_length_normalize() {
        let v = Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(v.length(), 2.0);
        assert_eq!(v.normalize(), Vec4::splat(0.5));
        assert_eq!(Vec4::<f32>::zero().normalize(), Vec4::zero());
    }

    #[test]
    fn test_vec4_dot_distance() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(2.0, 3.0, 4.0, 5.0);
        assert_eq!(a.dot(b), 40.0);
        assert_eq!(a.distance(b), 2.0);
    }

    #[test]
    fn test_vec4_angle_parallel() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_abs_diff_eq!(a.angle(a.scale(3.0)), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_vec4_homogeneous() {
        let p = Vec4::from_point(Vec3::new(1, 2, 3));
        assert_eq!(p, Vec4::new(1, 2, 3, 1));
        assert_eq!(p.truncate(), Vec3::new(1, 2, 3));
    }

    #[test]
    fn test_vec4_clamp_abs_neg() {
        let v = Vec4::new(-2, 5, 0, 9);
        assert_eq!(v.clamp(0, 4), Vec4::new(0, 4, 0, 4));
        assert_eq!(v.abs(), Vec4::new(2, 5, 0, 9));
        assert_eq!(-v, Vec4::new(2, -5, 0, -9));
    }

    #[test]
    fn test_vec4_display() {
        assert_eq!(Vec4::new(1, 2, 3, 4).to_string(), "(1, 2, 3, 4)");
    }

    #[test]
    fn test_vec4_glam() {
        let v = Vec4::new(1.0_f32, 2.0, 3.0, 4.0);
        assert_eq!(Vec4::from(glam::Vec4::from(v)), v);
    }
}
