//! Numeric element abstraction.
//!
//! [`Numeric`] is the bound every vector and matrix element satisfies. It
//! asks for ordering, the four arithmetic operators (through
//! [`num_traits::Num`]) and conversion to and from `f64`, which is how the
//! transcendental functions in [`crate::scalar`] avoid reimplementing series
//! expansions for every element type.
//!
//! # Supported Types
//!
//! | Type | Float | Negation |
//! |------|-------|----------|
//! | `i8`..`i64`, `isize` | no | wrapping at `MIN` |
//! | `u8`..`u64`, `usize` | no | wrapping |
//!
//! Integer addition, subtraction and multiplication through
//! [`Numeric::add_wrapping`] and friends wrap the same way, so vector and
//! matrix code never hits an overflow panic in debug builds.
//! | `f16` | yes | arithmetic |
//! | `f32`, `f64` | yes | arithmetic |
//!
//! The trait is not sealed; any `Copy` number type that implements
//! [`num_traits::Num`] and [`num_traits::NumCast`] can opt in.
//!
//! # Example
//!
//! ```
//! use bm_core::Numeric;
//!
//! assert_eq!(7_i32.to_float(), 7.0);
//! assert_eq!(i32::from_float(2.9), 2); // truncates
//! assert_eq!(u8::from_float(f64::NAN), 0); // unrepresentable -> zero
//! assert_eq!(3_u8.negate(), 253); // unsigned negation wraps
//! ```

use half::f16;
use num_traits::{Num, NumCast, ToPrimitive};
use std::fmt::{Debug, Display};

/// Scalar type usable as a vector or matrix element.
pub trait Numeric:
    Num + NumCast + Copy + Default + PartialOrd + Debug + Display + Send + Sync + 'static
{
    /// Whether this is a floating-point type.
    const IS_FLOAT: bool;

    /// Widens to `f64`.
    ///
    /// Values `f64` cannot hold exactly (large 64-bit integers) are rounded.
    #[inline]
    fn to_float(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(0.0)
    }

    /// Narrows from `f64`.
    ///
    /// Integer targets truncate toward zero. Values the target cannot
    /// represent (NaN, out of range) become zero.
    #[inline]
    fn from_float(v: f64) -> Self {
        <Self as NumCast>::from(v).unwrap_or_else(Self::zero)
    }

    /// Arithmetic negation. Unsigned types wrap.
    fn negate(self) -> Self;

    /// Addition. Integer types wrap on overflow.
    #[inline]
    fn add_wrapping(self, rhs: Self) -> Self {
        self + rhs
    }

    /// Subtraction. Integer types wrap on overflow.
    #[inline]
    fn sub_wrapping(self, rhs: Self) -> Self {
        self - rhs
    }

    /// Multiplication. Integer types wrap on overflow.
    #[inline]
    fn mul_wrapping(self, rhs: Self) -> Self {
        self * rhs
    }
}

// Integer arithmetic wraps: `i8::MIN` negates to itself, `1_u8` to `255`.
macro_rules! impl_numeric_int {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            const IS_FLOAT: bool = false;

            #[inline]
            fn negate(self) -> Self {
                self.wrapping_neg()
            }

            #[inline]
            fn add_wrapping(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn sub_wrapping(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline]
            fn mul_wrapping(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }
        }
    )*};
}

impl_numeric_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Numeric for f32 {
    const IS_FLOAT: bool = true;

    #[inline]
    fn to_float(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_float(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn negate(self) -> Self {
        -self
    }
}

impl Numeric for f64 {
    const IS_FLOAT: bool = true;

    #[inline]
    fn to_float(self) -> f64 {
        self
    }

    #[inline]
    fn from_float(v: f64) -> Self {
        v
    }

    #[inline]
    fn negate(self) -> Self {
        -self
    }
}

impl Numeric for f16 {
    const IS_FLOAT: bool = true;

    #[inline]
    fn to_float(self) -> f64 {
        self.to_f64()
    }

    #[inline]
    fn from_float(v: f64) -> Self {
        f16::from_f64(v)
    }

    #[inline]
    fn negate(self) -> Self {
        -self
    }
}
