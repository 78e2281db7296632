//! Algebraic properties of the vector and matrix types, checked with proptest.
//!
//! Integer matrices are used wherever the property is exact, so no tolerance
//! is needed; inversion uses diagonally dominant `f64` matrices to stay well
//! conditioned.

use bm_math::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};
use proptest::prelude::*;
use std::f64::consts::PI;

// ============================================================================
// Strategies
// ============================================================================

fn int_mat2() -> impl Strategy<Value = Mat2<i64>> {
    prop::array::uniform2(prop::array::uniform2(-50i64..50)).prop_map(Mat2::from_rows)
}

fn int_mat3() -> impl Strategy<Value = Mat3<i64>> {
    prop::array::uniform3(prop::array::uniform3(-50i64..50)).prop_map(Mat3::from_rows)
}

fn int_mat4() -> impl Strategy<Value = Mat4<i64>> {
    prop::array::uniform4(prop::array::uniform4(-50i64..50)).prop_map(Mat4::from_rows)
}

// Off-diagonal entries in [-1, 1), diagonal in [4, 6)
fn dominant_mat3() -> impl Strategy<Value = Mat3<f64>> {
    prop::array::uniform3(prop::array::uniform3(-1.0f64..1.0)).prop_map(|mut rows| {
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] += 4.0 + row[i].abs();
        }
        Mat3::from_rows(rows)
    })
}

fn dominant_mat4() -> impl Strategy<Value = Mat4<f64>> {
    prop::array::uniform4(prop::array::uniform4(-1.0f64..1.0)).prop_map(|mut rows| {
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] += 4.0 + row[i].abs();
        }
        Mat4::from_rows(rows)
    })
}

fn vec3() -> impl Strategy<Value = Vec3<f64>> {
    (-1e3f64..1e3, -1e3f64..1e3, -1e3f64..1e3).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn vec4() -> impl Strategy<Value = Vec4<f64>> {
    prop::array::uniform4(-1e3f64..1e3).prop_map(Vec4::from_array)
}

fn assert_near_identity<const N: usize>(m: [[f64; N]; N]) -> Result<(), TestCaseError> {
    for (i, row) in m.iter().enumerate() {
        for (j, v) in row.iter().enumerate() {
            let expected = if i == j { 1.0 } else { 0.0 };
            prop_assert!((v - expected).abs() < 1e-9, "m[{}][{}] = {}", i, j, v);
        }
    }
    Ok(())
}

// ============================================================================
// Matrices
// ============================================================================

proptest! {
    #[test]
    fn identity_is_neutral(a in int_mat2(), b in int_mat3(), c in int_mat4()) {
        prop_assert_eq!(a * Mat2::identity(), a);
        prop_assert_eq!(Mat2::identity() * a, a);
        prop_assert_eq!(b * Mat3::identity(), b);
        prop_assert_eq!(Mat3::identity() * b, b);
        prop_assert_eq!(c * Mat4::identity(), c);
        prop_assert_eq!(Mat4::identity() * c, c);
    }

    #[test]
    fn transpose_is_involution(a in int_mat2(), b in int_mat3(), c in int_mat4()) {
        prop_assert_eq!(a.transpose().transpose(), a);
        prop_assert_eq!(b.transpose().transpose(), b);
        prop_assert_eq!(c.transpose().transpose(), c);
    }

    #[test]
    fn row_swap_negates_determinant(
        a in int_mat2(),
        b in int_mat3(),
        c in int_mat4(),
        i in 0usize..4,
        j in 0usize..4,
    ) {
        prop_assume!(i != j);

        let mut a2 = a;
        a2.m.swap(0, 1);
        prop_assert_eq!(a2.determinant(), -a.determinant());

        let (i3, j3) = (i % 3, j % 3);
        if i3 != j3 {
            let mut b2 = b;
            b2.m.swap(i3, j3);
            prop_assert_eq!(b2.determinant(), -b.determinant());
        }

        let mut c2 = c;
        c2.m.swap(i, j);
        prop_assert_eq!(c2.determinant(), -c.determinant());
    }

    #[test]
    fn determinant_matches_transpose(b in int_mat3(), c in int_mat4()) {
        prop_assert_eq!(b.transpose().determinant(), b.determinant());
        prop_assert_eq!(c.transpose().determinant(), c.determinant());
    }

    #[test]
    fn inverse_times_self_is_identity(b in dominant_mat3(), c in dominant_mat4()) {
        let (inv3, ok3) = b.inverse_or_zero();
        prop_assert!(ok3);
        assert_near_identity((b * inv3).m)?;

        let (inv4, ok4) = c.inverse_or_zero();
        prop_assert!(ok4);
        assert_near_identity((c * inv4).m)?;
        assert_near_identity((inv4 * c).m)?;
    }

    #[test]
    fn zero_row_is_singular(b in dominant_mat3(), c in dominant_mat4(), row in 0usize..4) {
        let mut z = c;
        z.m[row] = [0.0; 4];
        prop_assert!(z.is_singular());
        prop_assert_eq!(z.inverse_or_zero(), (Mat4::zero(), false));

        let mut z3 = b;
        z3.m[row % 3] = [0.0; 3];
        prop_assert!(z3.inverse().is_none());
    }
}

// ============================================================================
// Vectors
// ============================================================================

proptest! {
    #[test]
    fn normalize_is_unit_or_zero(v in vec3(), w in vec4()) {
        let n = v.normalize();
        if v == Vec3::zero() {
            prop_assert_eq!(n, Vec3::zero());
        } else {
            prop_assert!((n.length() - 1.0).abs() < 1e-9, "|n| = {}", n.length());
        }

        let n4 = w.normalize();
        if w == Vec4::zero() {
            prop_assert_eq!(n4, Vec4::zero());
        } else {
            prop_assert!((n4.length() - 1.0).abs() < 1e-9, "|n| = {}", n4.length());
        }
    }

    #[test]
    fn angle_is_bounded(a in vec3(), b in vec3()) {
        let theta = a.angle(b);
        prop_assert!((0.0..=PI).contains(&theta), "angle = {}", theta);
    }

    #[test]
    fn angle_with_self_is_zero(v in vec3()) {
        prop_assert!(v.angle(v).abs() < 1e-6);
    }

    #[test]
    fn cross_is_orthogonal(a in vec3(), b in vec3()) {
        let c = a.cross(b);
        let scale = a.length() * b.length() * (a.length() + b.length()) + 1.0;
        prop_assert!(c.dot(a).abs() / scale < 1e-9);
        prop_assert!(c.dot(b).abs() / scale < 1e-9);
    }

    #[test]
    fn integer_vec2_ops_commute(x in -1000i32..1000, y in -1000i32..1000, s in -10i32..10) {
        let v = Vec2::new(x, y);
        prop_assert_eq!(v * s, v.scale(s));
        prop_assert_eq!(v + (-v), Vec2::zero());
        prop_assert_eq!(v.dot(Vec2::new(1, 0)), x);
    }
}
