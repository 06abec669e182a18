// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

use std::{fmt::Debug, ops::Neg};

use num_traits::Num;

/// A numeric type that can carry a propagated error.
///
/// Implemented for `f32`, `f64` and `rust_decimal::Decimal`. Integers and
/// complex numbers do not implement it, so a `ValueWithError`
/// over them cannot be named. Neither do arrays or vectors: element-wise
/// work is done on a collection of `ValueWithError` scalars instead.
///
/// ```compile_fail
/// let _ = gaussprop::ValueWithError::<Vec<f64>>::new(vec![1.0], vec![2.0]);
/// ```
pub trait Real: Num + Copy + Neg<Output = Self> + PartialOrd + Debug {
    /// Returns the absolute value.
    fn abs(self) -> Self;

    /// Returns `sqrt(self² + other²)`, without overflow or underflow in the
    /// intermediate squares.
    fn hypot(self, other: Self) -> Self;
}

/// Roots, powers, exponentials and logarithms.
///
/// Each method behaves like the function of the same name on the
/// underlying type, including for arguments outside its domain.
pub trait Exponential: Real {
    /// ln(2)
    fn ln_2() -> Self;
    /// ln(10)
    fn ln_10() -> Self;

    fn sqrt(self) -> Self;
    fn cbrt(self) -> Self;
    fn powf(self, exponent: Self) -> Self;

    fn exp(self) -> Self;
    fn exp2(self) -> Self;
    fn exp_m1(self) -> Self;
    fn ln(self) -> Self;
    fn ln_1p(self) -> Self;
    fn log2(self) -> Self;
    fn log10(self) -> Self;
}

/// Circular functions and their inverses.
pub trait Trigonometric: Exponential {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    /// Four-quadrant arc tangent of `self / x`.
    fn atan2(self, x: Self) -> Self;
}

/// Hyperbolic functions and their inverses.
pub trait Hyperbolic: Exponential {
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn asinh(self) -> Self;
    fn acosh(self) -> Self;
    fn atanh(self) -> Self;
}

/// The Gauss error function and its complement.
pub trait ErrorFunction: Exponential {
    /// 2/√π
    fn frac_2_sqrt_pi() -> Self;

    fn erf(self) -> Self;
    fn erfc(self) -> Self;
}

pub trait Gamma: Real {
    fn gamma(self) -> Self;
    /// Natural logarithm of the absolute value of the gamma function.
    fn ln_gamma(self) -> Self;
    /// Logarithmic derivative of the gamma function.
    fn digamma(self) -> Self;
}

/// Every function the math overloads are defined for.
///
/// Implemented for any type providing all of them, i.e. `f32` and `f64`.
pub trait Transcendental: Trigonometric + Hyperbolic + ErrorFunction + Gamma {}

impl<T> Transcendental for T where T: Trigonometric + Hyperbolic + ErrorFunction + Gamma {}
