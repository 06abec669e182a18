// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

use statrs::function::{erf, gamma};

use crate::{ErrorFunction, Exponential, Gamma, Hyperbolic, Real, Trigonometric, ValueWithError};

/// A double precision value with error under the default policy.
pub type ValueWithErrorF64 = ValueWithError<f64>;

/// A single precision value with error under the default policy.
pub type ValueWithErrorF32 = ValueWithError<f32>;

macro_rules! impl_float {
    ($t:ident) => {
        impl Real for $t {
            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn hypot(self, other: Self) -> Self {
                <$t>::hypot(self, other)
            }
        }

        impl Exponential for $t {
            #[inline]
            fn ln_2() -> Self {
                std::$t::consts::LN_2
            }

            #[inline]
            fn ln_10() -> Self {
                std::$t::consts::LN_10
            }

            #[inline]
            fn powf(self, exponent: Self) -> Self {
                <$t>::powf(self, exponent)
            }

            #[inline]
            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            #[inline]
            fn cbrt(self) -> Self {
                <$t>::cbrt(self)
            }

            #[inline]
            fn exp(self) -> Self {
                <$t>::exp(self)
            }

            #[inline]
            fn exp2(self) -> Self {
                <$t>::exp2(self)
            }

            #[inline]
            fn exp_m1(self) -> Self {
                <$t>::exp_m1(self)
            }

            #[inline]
            fn ln(self) -> Self {
                <$t>::ln(self)
            }

            #[inline]
            fn ln_1p(self) -> Self {
                <$t>::ln_1p(self)
            }

            #[inline]
            fn log2(self) -> Self {
                <$t>::log2(self)
            }

            #[inline]
            fn log10(self) -> Self {
                <$t>::log10(self)
            }
        }

        impl Trigonometric for $t {
            #[inline]
            fn sin(self) -> Self {
                <$t>::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                <$t>::cos(self)
            }

            #[inline]
            fn tan(self) -> Self {
                <$t>::tan(self)
            }

            #[inline]
            fn asin(self) -> Self {
                <$t>::asin(self)
            }

            #[inline]
            fn acos(self) -> Self {
                <$t>::acos(self)
            }

            #[inline]
            fn atan(self) -> Self {
                <$t>::atan(self)
            }

            #[inline]
            fn atan2(self, x: Self) -> Self {
                <$t>::atan2(self, x)
            }
        }

        impl Hyperbolic for $t {
            #[inline]
            fn sinh(self) -> Self {
                <$t>::sinh(self)
            }

            #[inline]
            fn cosh(self) -> Self {
                <$t>::cosh(self)
            }

            #[inline]
            fn tanh(self) -> Self {
                <$t>::tanh(self)
            }

            #[inline]
            fn asinh(self) -> Self {
                <$t>::asinh(self)
            }

            #[inline]
            fn acosh(self) -> Self {
                <$t>::acosh(self)
            }

            #[inline]
            fn atanh(self) -> Self {
                <$t>::atanh(self)
            }
        }

        // statrs only works in double precision
        #[allow(clippy::unnecessary_cast)]
        impl ErrorFunction for $t {
            #[inline]
            fn frac_2_sqrt_pi() -> Self {
                std::$t::consts::FRAC_2_SQRT_PI
            }

            fn erf(self) -> Self {
                erf::erf(f64::from(self)) as $t
            }

            fn erfc(self) -> Self {
                erf::erfc(f64::from(self)) as $t
            }
        }

        #[allow(clippy::unnecessary_cast)]
        impl Gamma for $t {
            fn gamma(self) -> Self {
                gamma::gamma(f64::from(self)) as $t
            }

            fn ln_gamma(self) -> Self {
                gamma::ln_gamma(f64::from(self)) as $t
            }

            fn digamma(self) -> Self {
                gamma::digamma(f64::from(self)) as $t
            }
        }
    };
}

impl_float!(f32);
impl_float!(f64);
