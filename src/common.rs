// Copyright 2026 the Spiro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float functions shared by the numeric modules.
//!
//! With the `std` feature these resolve to the inherent `f64` methods; without
//! it they are routed to [`libm`](https://docs.rs/libm).

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(
            #[inline]
            fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("spiro requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn atan2(self, other: Self) -> Self => atan2;
    fn exp(self) -> Self => exp;
    fn hypot(self, other: Self) -> Self => hypot;
    fn ln(self) -> Self => log;
    fn sin_cos(self) -> (Self, Self) => sincos;
}

/// The golden ratio, `(1 + √5) / 2`.
pub const GOLDEN_RATIO: f64 = 1.618033988749894848204586834365638118_f64;

#[cfg(test)]
mod tests {
    use super::GOLDEN_RATIO;

    #[test]
    fn golden_ratio_identity() {
        // φ² = φ + 1
        let lhs = GOLDEN_RATIO * GOLDEN_RATIO;
        assert!((lhs - (GOLDEN_RATIO + 1.0)).abs() < 1e-15);
        assert!((GOLDEN_RATIO - (1.0 + 5.0_f64.sqrt()) / 2.0).abs() < 1e-15);
    }
}
