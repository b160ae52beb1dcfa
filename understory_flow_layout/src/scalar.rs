// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric abstraction for item extents and the content-area width.

use core::fmt::Debug;

/// Numeric type used for widths and heights.
///
/// Implemented for `f32`, `f64`, and the primitive integer types, so hosts can
/// keep extents in whatever unit their measuring pass produces (logical pixels
/// as floats, or device pixels as integers).
///
/// Operations are associated functions rather than methods so they never
/// shadow the inherent or `Ord` methods of the implementing types.
pub trait Scalar: Copy + Debug + PartialEq + PartialOrd {
    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// Add two scalar values. Saturates for integers.
    fn add(a: Self, b: Self) -> Self;

    /// Add two scalar values, returning `None` if an integer sum overflows.
    fn checked_add(a: Self, b: Self) -> Option<Self>;

    /// Max of the two scalar values.
    fn max(a: Self, b: Self) -> Self;

    /// Returns `true` if `v` is neither infinite nor NaN. Always `true` for integers.
    fn is_finite(v: Self) -> bool;

    /// Returns `true` if `v` is negative (including `-0.0` for floats).
    fn is_sign_negative(v: Self) -> bool;

    /// Clamps finite negative values to zero.
    #[inline]
    fn non_negative(v: Self) -> Self {
        if Self::is_sign_negative(v) {
            Self::zero()
        } else {
            v
        }
    }
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline(always)]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn add(a: Self, b: Self) -> Self {
                a + b
            }

            #[inline]
            fn checked_add(a: Self, b: Self) -> Option<Self> {
                Some(a + b)
            }

            #[inline]
            fn max(a: Self, b: Self) -> Self {
                Self::max(a, b)
            }

            #[inline]
            fn is_finite(v: Self) -> bool {
                Self::is_finite(v)
            }

            #[inline]
            fn is_sign_negative(v: Self) -> bool {
                Self::is_sign_negative(v)
            }
        }
    )*};
}

macro_rules! impl_scalar_int {
    (@negative signed $v:ident) => {
        $v.is_negative()
    };
    (@negative unsigned $v:ident) => {{
        let _ = $v;
        false
    }};
    ($($t:ty),* ; negative: $is_negative:ident) => {$(
        impl Scalar for $t {
            #[inline(always)]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn add(a: Self, b: Self) -> Self {
                a.saturating_add(b)
            }

            #[inline]
            fn checked_add(a: Self, b: Self) -> Option<Self> {
                a.checked_add(b)
            }

            #[inline]
            fn max(a: Self, b: Self) -> Self {
                core::cmp::max(a, b)
            }

            #[inline]
            fn is_finite(_v: Self) -> bool {
                true
            }

            #[inline]
            fn is_sign_negative(v: Self) -> bool {
                impl_scalar_int!(@negative $is_negative v)
            }
        }
    )*};
}

impl_scalar_float!(f32, f64);
impl_scalar_int!(i32, i64, isize; negative: signed);
impl_scalar_int!(u32, u64, usize; negative: unsigned);
