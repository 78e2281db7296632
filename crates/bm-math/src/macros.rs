//! Code shared by the fixed-size vector and matrix types.
//!
//! Each type declares its struct, constructors and size-specific methods by
//! hand; everything that is a plain per-component fold or map is generated
//! here so the 2, 3 and 4 variants cannot drift apart.
//!
//! Element arithmetic goes through the `Numeric::*_wrapping` methods so
//! integer elements wrap instead of panicking on overflow.

macro_rules! impl_vec_common {
    ($name:ident, $n:literal, { $($f:ident),+ }) => {
        impl<T: $crate::Numeric> $name<T> {
            /// Vector with every component zero.
            #[inline]
            pub fn zero() -> Self {
                Self { $($f: T::zero()),+ }
            }

            /// Vector with every component set to `v`.
            #[inline]
            pub fn splat(v: T) -> Self {
                Self { $($f: v),+ }
            }

            /// Multiplies every component by `s`.
            #[inline]
            pub fn scale(self, s: T) -> Self {
                Self { $($f: self.$f.mul_wrapping(s)),+ }
            }

            /// Dot product.
            #[inline]
            pub fn dot(self, other: Self) -> T {
                let mut acc = T::zero();
                $(acc = acc.add_wrapping(self.$f.mul_wrapping(other.$f));)+
                acc
            }

            /// Squared length (avoids sqrt).
            #[inline]
            pub fn length_squared(self) -> T {
                self.dot(self)
            }

            /// Length (magnitude): square root of the sum of squared components.
            #[inline]
            pub fn length(self) -> T {
                $crate::scalar::sqrt(self.length_squared())
            }

            /// Normalizes the vector to unit length.
            ///
            /// Returns the zero vector if the length is exactly zero.
            #[inline]
            pub fn normalize(self) -> Self {
                let len = self.length();
                if len == T::zero() {
                    Self::zero()
                } else {
                    self / len
                }
            }

            /// Angle to `other` in radians, in `[0, π]`.
            ///
            /// The cosine is clamped to `[-1, 1]` before `acos` so rounding
            /// cannot push it out of domain. Returns 0 if either vector has
            /// zero length.
            #[inline]
            pub fn angle(self, other: Self) -> T {
                let denom = self.length().to_float() * other.length().to_float();
                if denom == 0.0 {
                    return T::zero();
                }
                let cos = (self.dot(other).to_float() / denom).clamp(-1.0, 1.0);
                T::from_float(cos.acos())
            }

            /// Component-wise absolute value.
            #[inline]
            pub fn abs(self) -> Self {
                Self { $($f: $crate::scalar::abs(self.$f)),+ }
            }

            /// Clamps each component to `[min, max]`.
            #[inline]
            pub fn clamp(self, min: T, max: T) -> Self {
                Self { $($f: $crate::scalar::clamp(self.$f, min, max)),+ }
            }

            /// Distance to `other`: length of the difference.
            #[inline]
            pub fn distance(self, other: Self) -> T {
                (self - other).length()
            }

            /// Component-wise linear interpolation, `t` unclamped.
            #[inline]
            pub fn lerp(self, other: Self, t: T) -> Self {
                Self { $($f: self.$f.add_wrapping(other.$f.sub_wrapping(self.$f).mul_wrapping(t))),+ }
            }

            /// Reflects across the plane (or line) with the given normal.
            ///
            /// `normal` is expected to be unit length; that is not checked.
            #[inline]
            pub fn reflect(self, normal: Self) -> Self {
                let two = T::one().add_wrapping(T::one());
                self - normal.scale(self.dot(normal).mul_wrapping(two))
            }

            /// Returns true if every component is finite.
            ///
            /// Always true for integer element types.
            #[inline]
            pub fn is_finite(self) -> bool {
                true $(&& self.$f.to_float().is_finite())+
            }
        }

        impl<T: $crate::Numeric> ::std::ops::Add for $name<T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f.add_wrapping(rhs.$f)),+ }
            }
        }

        impl<T: $crate::Numeric> ::std::ops::Sub for $name<T> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f.sub_wrapping(rhs.$f)),+ }
            }
        }

        // Component-wise
        impl<T: $crate::Numeric> ::std::ops::Mul for $name<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self { $($f: self.$f.mul_wrapping(rhs.$f)),+ }
            }
        }

        impl<T: $crate::Numeric> ::std::ops::Mul<T> for $name<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: T) -> Self {
                self.scale(rhs)
            }
        }

        // Component-wise
        impl<T: $crate::Numeric> ::std::ops::Div for $name<T> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self {
                Self { $($f: self.$f / rhs.$f),+ }
            }
        }

        impl<T: $crate::Numeric> ::std::ops::Div<T> for $name<T> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: T) -> Self {
                Self { $($f: self.$f / rhs),+ }
            }
        }

        impl<T: $crate::Numeric> ::std::ops::Neg for $name<T> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($f: self.$f.negate()),+ }
            }
        }

        impl<T: $crate::Numeric> From<[T; $n]> for $name<T> {
            #[inline]
            fn from(a: [T; $n]) -> Self {
                Self::from_array(a)
            }
        }

        impl<T: $crate::Numeric> From<$name<T>> for [T; $n] {
            #[inline]
            fn from(v: $name<T>) -> [T; $n] {
                v.to_array()
            }
        }

        impl<T: $crate::Numeric> ::std::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let parts = [$(self.$f),+];
                write!(f, "(")?;
                for (i, v) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, ")")
            }
        }
    };
}

// Matrices: $name holds `m: [[T; $n]; $n]` and provides `determinant` and
// `adjugate`; $vec is the matching column vector type.
macro_rules! impl_mat_common {
    ($name:ident, $vec:ident, $n:literal) => {
        impl<T: $crate::Numeric> $name<T> {
            /// Creates a matrix from row arrays.
            #[inline]
            pub const fn from_rows(rows: [[T; $n]; $n]) -> Self {
                Self { m: rows }
            }

            /// Creates a matrix from column arrays.
            ///
            /// Transposes the input (columns become rows internally).
            #[inline]
            pub fn from_cols(cols: [[T; $n]; $n]) -> Self {
                Self::from_rows(cols).transpose()
            }

            /// Matrix with every element zero.
            #[inline]
            pub fn zero() -> Self {
                Self { m: [[T::zero(); $n]; $n] }
            }

            /// Identity matrix: ones on the diagonal, zeros elsewhere.
            #[inline]
            pub fn identity() -> Self {
                let mut out = Self::zero();
                for i in 0..$n {
                    out.m[i][i] = T::one();
                }
                out
            }

            /// Diagonal matrix with `d` on the diagonal.
            #[inline]
            pub fn diagonal(d: [T; $n]) -> Self {
                let mut out = Self::zero();
                for i in 0..$n {
                    out.m[i][i] = d[i];
                }
                out
            }

            /// Returns row `i`.
            #[inline]
            pub fn row(&self, i: usize) -> $crate::$vec<T> {
                $crate::$vec::from_array(self.m[i])
            }

            /// Returns column `i`.
            #[inline]
            pub fn col(&self, i: usize) -> $crate::$vec<T> {
                let mut c = [T::zero(); $n];
                for r in 0..$n {
                    c[r] = self.m[r][i];
                }
                $crate::$vec::from_array(c)
            }

            /// Returns the transpose: `result[i][j] = m[j][i]`.
            #[inline]
            pub fn transpose(&self) -> Self {
                let mut out = Self::zero();
                for i in 0..$n {
                    for j in 0..$n {
                        out.m[i][j] = self.m[j][i];
                    }
                }
                out
            }

            /// Multiplies two matrices: `result[i][j] = sum_k m[i][k] * n[k][j]`.
            #[inline]
            pub fn mul_mat(&self, other: &Self) -> Self {
                let mut out = Self::zero();
                for i in 0..$n {
                    for j in 0..$n {
                        let mut acc = T::zero();
                        for k in 0..$n {
                            acc = acc.add_wrapping(self.m[i][k].mul_wrapping(other.m[k][j]));
                        }
                        out.m[i][j] = acc;
                    }
                }
                out
            }

            /// Multiplies every element by `s`.
            #[inline]
            pub fn scale(&self, s: T) -> Self {
                let mut out = *self;
                for row in out.m.iter_mut() {
                    for v in row.iter_mut() {
                        *v = v.mul_wrapping(s);
                    }
                }
                out
            }

            /// Transforms a column vector. Equivalent to `matrix * vector`.
            #[inline]
            pub fn transform(&self, v: $crate::$vec<T>) -> $crate::$vec<T> {
                let v = v.to_array();
                let mut out = [T::zero(); $n];
                for i in 0..$n {
                    let mut acc = T::zero();
                    for k in 0..$n {
                        acc = acc.add_wrapping(self.m[i][k].mul_wrapping(v[k]));
                    }
                    out[i] = acc;
                }
                $crate::$vec::from_array(out)
            }

            /// Frobenius norm: square root of the sum of squared elements.
            #[inline]
            pub fn norm(&self) -> T {
                let mut acc = T::zero();
                for v in self.m.iter().flatten() {
                    acc = acc.add_wrapping(v.mul_wrapping(*v));
                }
                $crate::scalar::sqrt(acc)
            }

            /// Returns true if the determinant is too small to invert.
            ///
            /// See [`SINGULAR_EPSILON`]($crate::SINGULAR_EPSILON).
            #[inline]
            pub fn is_singular(&self) -> bool {
                $crate::is_singular_det(self.determinant())
            }

            /// Computes the inverse: adjugate scaled by `1 / determinant`.
            ///
            /// Returns `None` if the matrix is singular. The scaling is done
            /// in `f64`, so integer matrices only invert exactly when the
            /// determinant is `1` or `-1`.
            pub fn inverse(&self) -> Option<Self> {
                let det = self.determinant();
                if $crate::is_singular_det(det) {
                    ::tracing::trace!(matrix = stringify!($name), determinant = %det, "singular matrix has no inverse");
                    return None;
                }

                let inv_det = 1.0 / det.to_float();
                let adj = self.adjugate();
                let mut out = Self::zero();
                for i in 0..$n {
                    for j in 0..$n {
                        out.m[i][j] = T::from_float(adj.m[i][j].to_float() * inv_det);
                    }
                }
                Some(out)
            }

            /// Like [`inverse`](Self::inverse), reporting the determinant on failure.
            ///
            /// # Errors
            ///
            /// [`Error::SingularMatrix`]($crate::Error::SingularMatrix) if the
            /// matrix is singular.
            pub fn try_inverse(&self) -> $crate::Result<Self> {
                self.inverse().ok_or_else(|| $crate::Error::SingularMatrix {
                    determinant: self.determinant().to_float(),
                })
            }

            /// Inverse with an explicit success flag.
            ///
            /// Returns `(inverse, true)`, or `(zero matrix, false)` if singular.
            pub fn inverse_or_zero(&self) -> (Self, bool) {
                match self.inverse() {
                    Some(inv) => (inv, true),
                    None => (Self::zero(), false),
                }
            }

            /// Returns true if every element is finite.
            #[inline]
            pub fn is_finite(&self) -> bool {
                self.m.iter().flatten().all(|v| v.to_float().is_finite())
            }
        }

        impl<T: $crate::Numeric> Default for $name<T> {
            fn default() -> Self {
                Self::identity()
            }
        }

        impl<T: $crate::Numeric> ::std::ops::Add for $name<T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                let mut out = self;
                for i in 0..$n {
                    for j in 0..$n {
                        out.m[i][j] = self.m[i][j].add_wrapping(rhs.m[i][j]);
                    }
                }
                out
            }
        }

        impl<T: $crate::Numeric> ::std::ops::Sub for $name<T> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                let mut out = self;
                for i in 0..$n {
                    for j in 0..$n {
                        out.m[i][j] = self.m[i][j].sub_wrapping(rhs.m[i][j]);
                    }
                }
                out
            }
        }

        impl<T: $crate::Numeric> ::std::ops::Neg for $name<T> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                let mut out = self;
                for v in out.m.iter_mut().flatten() {
                    *v = v.negate();
                }
                out
            }
        }

        // Matrix product
        impl<T: $crate::Numeric> ::std::ops::Mul for $name<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                self.mul_mat(&rhs)
            }
        }

        impl<T: $crate::Numeric> ::std::ops::Mul<T> for $name<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: T) -> Self {
                self.scale(rhs)
            }
        }

        impl<T: $crate::Numeric> ::std::ops::Mul<$crate::$vec<T>> for $name<T> {
            type Output = $crate::$vec<T>;

            #[inline]
            fn mul(self, rhs: $crate::$vec<T>) -> $crate::$vec<T> {
                self.transform(rhs)
            }
        }

        impl<T> ::std::ops::Index<usize> for $name<T> {
            type Output = [T; $n];

            #[inline]
            fn index(&self, i: usize) -> &[T; $n] {
                &self.m[i]
            }
        }

        impl<T> ::std::ops::IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut [T; $n] {
                &mut self.m[i]
            }
        }

        impl<T: $crate::Numeric> ::std::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "[")?;
                for (i, row) in self.m.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "[")?;
                    for (j, v) in row.iter().enumerate() {
                        if j > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{v}")?;
                    }
                    write!(f, "]")?;
                }
                write!(f, "]")
            }
        }
    };
}
