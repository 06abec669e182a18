// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

use std::cmp::Ordering;

use rust_decimal::{Decimal, MathematicalOps};

use crate::{ErrorFunction, Exponential, Hyperbolic, Real, Trigonometric, ValueWithError};

/// A 96-bit decimal value with error under the default policy.
///
/// Decimals support the arithmetic operators, comparisons, text I/O and all
/// math functions except the gamma family. `Decimal` has no NaN or infinity,
/// so where a float would return one of them the call panics instead, as
/// `rust_decimal`'s own functions do.
///
/// Decimals do not mix with floats: converting an `f64` into a `Decimal` can
/// fail, so no common type exists for the two.
///
/// ```compile_fail
/// use gaussprop::ValueWithErrorDecimal;
/// use rust_decimal::Decimal;
///
/// let _ = ValueWithErrorDecimal::new(Decimal::ONE, Decimal::ONE) + 1.0_f64;
/// ```
pub type ValueWithErrorDecimal = ValueWithError<Decimal>;

/// # Panics
///
/// Panics if `x` is negative.
fn root(x: Decimal) -> Decimal {
    match MathematicalOps::sqrt(&x) {
        Some(r) => r,
        None => panic!("Unable to calculate sqrt for negative numbers"),
    }
}

impl Real for Decimal {
    #[inline]
    fn abs(self) -> Self {
        Decimal::abs(&self)
    }

    // Scaled by the larger operand so that squaring can neither overflow nor
    // round away below the 28th decimal place.
    fn hypot(self, other: Self) -> Self {
        let (a, b) = (Decimal::abs(&self), Decimal::abs(&other));
        let m = a.max(b);
        if m.is_zero() {
            return Decimal::ZERO;
        }
        let (a, b) = (a / m, b / m);
        m * root(a * a + b * b)
    }
}

impl Exponential for Decimal {
    fn ln_2() -> Self {
        MathematicalOps::ln(&Decimal::TWO)
    }

    fn ln_10() -> Self {
        MathematicalOps::ln(&Decimal::TEN)
    }

    fn sqrt(self) -> Self {
        root(self)
    }

    fn cbrt(self) -> Self {
        let r = MathematicalOps::powd(&Decimal::abs(&self), Decimal::ONE / Decimal::from(3));
        if self.is_sign_negative() { -r } else { r }
    }

    fn powf(self, exponent: Self) -> Self {
        MathematicalOps::powd(&self, exponent)
    }

    fn exp(self) -> Self {
        MathematicalOps::exp(&self)
    }

    fn exp2(self) -> Self {
        MathematicalOps::powd(&Decimal::TWO, self)
    }

    fn exp_m1(self) -> Self {
        MathematicalOps::exp(&self) - Decimal::ONE
    }

    fn ln(self) -> Self {
        MathematicalOps::ln(&self)
    }

    fn ln_1p(self) -> Self {
        MathematicalOps::ln(&(Decimal::ONE + self))
    }

    fn log2(self) -> Self {
        MathematicalOps::ln(&self) / Self::ln_2()
    }

    fn log10(self) -> Self {
        MathematicalOps::log10(&self)
    }
}

impl Trigonometric for Decimal {
    fn sin(self) -> Self {
        MathematicalOps::sin(&self)
    }

    fn cos(self) -> Self {
        MathematicalOps::cos(&self)
    }

    fn tan(self) -> Self {
        MathematicalOps::tan(&self)
    }

    fn asin(self) -> Self {
        if Decimal::abs(&self) == Decimal::ONE {
            return Decimal::HALF_PI * self;
        }
        Trigonometric::atan(self / root(Decimal::ONE - self * self))
    }

    fn acos(self) -> Self {
        Decimal::HALF_PI - Trigonometric::asin(self)
    }

    fn atan(self) -> Self {
        if self.is_sign_negative() {
            return -Trigonometric::atan(-self);
        }
        if self > Decimal::ONE {
            return Decimal::HALF_PI - Trigonometric::atan(Decimal::ONE / self);
        }
        // atan(x) = 2·atan(x / (1 + √(1 + x²))) brings x below tan(π/32)
        let mut x = self;
        let mut scale = Decimal::ONE;
        for _ in 0..3 {
            x /= Decimal::ONE + root(Decimal::ONE + x * x);
            scale *= Decimal::TWO;
        }
        let x2 = x * x;
        let mut power = x;
        let mut sum = x;
        let mut n = 1u32;
        loop {
            power *= -x2;
            let term = power / Decimal::from(2 * n + 1);
            if term.is_zero() {
                break;
            }
            sum += term;
            n += 1;
        }
        scale * sum
    }

    fn atan2(self, x: Self) -> Self {
        let quotient = || Trigonometric::atan(self / x);
        match (x.cmp(&Decimal::ZERO), self.cmp(&Decimal::ZERO)) {
            (Ordering::Greater, _) => quotient(),
            (Ordering::Less, Ordering::Less) => quotient() - Decimal::PI,
            (Ordering::Less, _) => quotient() + Decimal::PI,
            (Ordering::Equal, Ordering::Greater) => Decimal::HALF_PI,
            (Ordering::Equal, Ordering::Less) => -Decimal::HALF_PI,
            (Ordering::Equal, Ordering::Equal) => Decimal::ZERO,
        }
    }
}

impl Hyperbolic for Decimal {
    fn sinh(self) -> Self {
        let e = MathematicalOps::exp(&self);
        (e - Decimal::ONE / e) / Decimal::TWO
    }

    fn cosh(self) -> Self {
        let e = MathematicalOps::exp(&self);
        (e + Decimal::ONE / e) / Decimal::TWO
    }

    fn tanh(self) -> Self {
        let e2 = MathematicalOps::exp(&(Decimal::TWO * self));
        (e2 - Decimal::ONE) / (e2 + Decimal::ONE)
    }

    fn asinh(self) -> Self {
        let a = Decimal::abs(&self);
        let r = MathematicalOps::ln(&(a + root(a * a + Decimal::ONE)));
        if self.is_sign_negative() { -r } else { r }
    }

    fn acosh(self) -> Self {
        MathematicalOps::ln(&(self + root(self * self - Decimal::ONE)))
    }

    fn atanh(self) -> Self {
        MathematicalOps::ln(&((Decimal::ONE + self) / (Decimal::ONE - self))) / Decimal::TWO
    }
}

impl ErrorFunction for Decimal {
    fn frac_2_sqrt_pi() -> Self {
        Decimal::TWO / root(Decimal::PI)
    }

    /// Approximated to about seven significant digits.
    fn erf(self) -> Self {
        MathematicalOps::erf(&self)
    }

    fn erfc(self) -> Self {
        Decimal::ONE - MathematicalOps::erf(&self)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use num_traits::Pow;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{Atan2, ExactPolicy, Hypot, IntervalPolicy};

    type VDec = ValueWithError<Decimal, ExactPolicy>;

    #[track_caller]
    fn assert_close(actual: Decimal, expected: Decimal) {
        assert_within(actual, expected, dec!(1e-15));
    }

    #[track_caller]
    fn assert_within(actual: Decimal, expected: Decimal, tolerance: Decimal) {
        assert!(
            (actual - expected).abs() < tolerance,
            "{actual} is not within {tolerance} of {expected}"
        );
    }

    #[test]
    fn new_takes_absolute_error() {
        let n = VDec::new(dec!(20), dec!(-2));
        assert_eq!(n.value(), dec!(20));
        assert_eq!(n.error(), dec!(2));
    }

    #[test]
    fn hypot() {
        assert_close(Real::hypot(dec!(3), dec!(4)), dec!(5));
        assert_close(Real::hypot(dec!(-3), dec!(4)), dec!(5));
        assert_eq!(Real::hypot(dec!(0), dec!(0)), dec!(0));
    }

    #[test]
    fn large_errors_combine_without_overflow() {
        let sum = VDec::new(dec!(1), dec!(1e15)) + VDec::new(dec!(1), dec!(1));
        assert_eq!(sum.value(), dec!(2));
        assert_within(sum.error(), dec!(1e15), dec!(1e-10));

        let product = VDec::new(dec!(1e14), dec!(1e14)) * VDec::new(dec!(1e14), dec!(1e14));
        assert_eq!(product.value(), dec!(1e28));
        assert_within(product.error() / dec!(1e28), root(dec!(2)), dec!(1e-20));
    }

    #[test]
    fn small_errors_are_not_rounded_away() {
        let sum = VDec::new(dec!(1), dec!(1e-15)) + VDec::new(dec!(1), dec!(1e-15));
        assert!(sum.error() > dec!(0), "error lost: {}", sum.error());
        assert_within(sum.error() / dec!(1e-15), root(dec!(2)), dec!(1e-12));

        let sum = VDec::new(dec!(1), dec!(1e-20)) - VDec::new(dec!(1), dec!(1e-20));
        assert!(sum.error() > dec!(0), "error lost: {}", sum.error());
    }

    #[test]
    fn add_with_uncertainty() {
        let n1 = VDec::new(dec!(1.5), dec!(0.3));
        let n2 = VDec::new(dec!(2.5), dec!(0.4));
        let result = n1 + n2;
        assert_eq!(result.value(), dec!(4.0));
        assert_close(result.error(), dec!(0.5));
    }

    #[test]
    fn sub_with_uncertainty() {
        let n1 = VDec::new(dec!(20), dec!(2));
        let n2 = VDec::new(dec!(30), dec!(5));
        let result = n1 - n2;
        assert_eq!(result.value(), dec!(-10));
        assert_eq!(
            result.error().round_dp(5),
            dec!(5.3851648071345).round_dp(5)
        );
    }

    #[test]
    fn mul_with_uncertainty() {
        let n1 = VDec::new(dec!(20), dec!(2));
        let n2 = VDec::new(dec!(30), dec!(5));
        let result = n1 * n2;
        assert_eq!(result.value(), dec!(600));
        assert_eq!(
            result.error().round_dp(5),
            dec!(116.619037896906).round_dp(5)
        );
    }

    #[test]
    fn div_with_uncertainty() {
        let n1 = VDec::new(dec!(20), dec!(2));
        let n2 = VDec::new(dec!(30), dec!(5));
        let result = n1 / n2;
        assert_eq!(result.value().round_dp(10), dec!(0.6666666667));
        assert_eq!(
            result.error().round_dp(5),
            dec!(0.129576708774340).round_dp(5)
        );
    }

    #[test]
    fn with_exact_scalar() {
        let n = VDec::new(dec!(0.3048), dec!(0.0001));
        let squared_ft = n * dec!(0.3048);
        assert_eq!(squared_ft.value(), dec!(0.09290304));
        assert_eq!(squared_ft.error(), dec!(0.00003048));
        let shifted = dec!(1) + n;
        assert_eq!(shifted.value(), dec!(1.3048));
        assert_eq!(shifted.error(), dec!(0.0001));
    }

    #[test]
    fn interval_comparison() {
        let a = ValueWithError::<Decimal, IntervalPolicy>::new(dec!(1.0), dec!(1.0));
        let b = ValueWithError::<Decimal, IntervalPolicy>::new(dec!(2.0), dec!(0.4));
        assert!(a == b);
        assert!(!(a > b));
        assert!(a >= b);
    }

    #[test]
    fn roots_and_powers() {
        let result = VDec::new(dec!(4), dec!(2)).sqrt();
        assert_close(result.value(), dec!(2));
        assert_close(result.error(), dec!(0.5));
        let result = VDec::new(dec!(8), dec!(3)).cbrt();
        assert_within(result.value(), dec!(2), dec!(1e-20));
        assert_within(result.error(), dec!(0.25), dec!(1e-20));
        let result = VDec::new(dec!(-8), dec!(3)).cbrt();
        assert_within(result.value(), dec!(-2), dec!(1e-20));

        let result = VDec::new(dec!(2), dec!(2)).pow(dec!(3));
        assert_eq!(result.value(), dec!(8));
        assert_eq!(result.error(), dec!(24));
        let result = VDec::new(dec!(2), dec!(1.5)).pow(VDec::new(dec!(3), dec!(2)));
        let ln_2 = MathematicalOps::ln(&dec!(2));
        assert_eq!(result.value(), dec!(8));
        assert_within(
            result.error(),
            Real::hypot(dec!(18), dec!(16) * ln_2),
            dec!(1e-12),
        );
    }

    #[test]
    fn exponentials_and_logarithms() {
        let result = VDec::new(dec!(0), dec!(2)).exp();
        assert_close(result.value(), dec!(1));
        assert_close(result.error(), dec!(2));
        let result = VDec::new(dec!(2), dec!(2)).ln();
        assert_within(result.value(), dec!(0.6931471805599453094172321215), dec!(1e-20));
        assert_close(result.error(), dec!(1));
        let result = VDec::new(dec!(10), dec!(2)).log10();
        assert_within(result.value(), dec!(1), dec!(1e-20));
        let result = VDec::new(dec!(1), dec!(1)).exp2();
        assert_eq!(result.value(), dec!(2));
        assert_within(result.error(), dec!(2) * <Decimal as Exponential>::ln_2(), dec!(1e-20));
    }

    #[test]
    fn trigonometric() {
        let result = VDec::new(dec!(0), dec!(1)).sin();
        assert_close(result.value(), dec!(0));
        assert_close(result.error(), dec!(1));
        let result = VDec::new(dec!(0), dec!(1)).cos();
        assert_close(result.value(), dec!(1));
        assert_close(result.error(), dec!(0));
        let result = VDec::new(dec!(0), dec!(2)).tan();
        assert_close(result.value(), dec!(0));
        assert_close(result.error(), dec!(2));

        let result = VDec::new(dec!(0), dec!(2)).asin();
        assert_close(result.value(), dec!(0));
        assert_close(result.error(), dec!(2));
        let result = VDec::new(dec!(0), dec!(2)).acos();
        assert_close(result.value(), Decimal::HALF_PI);
        assert_close(result.error(), dec!(2));
        let result = VDec::new(dec!(1), dec!(2)).atan();
        assert_within(result.value(), Decimal::QUARTER_PI, dec!(1e-24));
        assert_close(result.error(), dec!(1));

        let result = VDec::new(dec!(1), dec!(2)).atan2(VDec::new(dec!(1), dec!(4)));
        assert_within(result.value(), Decimal::QUARTER_PI, dec!(1e-24));
        assert_close(result.error(), root(dec!(5)));
        let result = VDec::new(dec!(1), dec!(2)).atan2(VDec::new(dec!(-1), dec!(4)));
        assert_within(result.value(), dec!(3) * Decimal::QUARTER_PI, dec!(1e-24));
        let result = VDec::new(dec!(-1), dec!(2)).atan2(VDec::new(dec!(-1), dec!(4)));
        assert_within(result.value(), dec!(-3) * Decimal::QUARTER_PI, dec!(1e-24));
    }

    #[test]
    fn inverse_trigonometric_agrees_with_floats() {
        for x in [dec!(-0.9), dec!(-0.5), dec!(0.1), dec!(0.75), dec!(0.99)] {
            let f = f64::try_from(x).unwrap();
            let to_f64 = |d: Decimal| f64::try_from(d).unwrap();
            assert!((to_f64(Trigonometric::asin(x)) - f.asin()).abs() < 1e-14);
            assert!((to_f64(Trigonometric::acos(x)) - f.acos()).abs() < 1e-14);
            assert!((to_f64(Trigonometric::atan(x * dec!(7))) - (f * 7.0).atan()).abs() < 1e-14);
        }
        assert_eq!(Trigonometric::asin(dec!(1)), Decimal::HALF_PI);
        assert_eq!(Trigonometric::atan2(dec!(0), dec!(0)), dec!(0));
    }

    #[test]
    fn hyperbolic() {
        let result = VDec::new(dec!(0), dec!(2)).sinh();
        assert_close(result.value(), dec!(0));
        assert_close(result.error(), dec!(2));
        let result = VDec::new(dec!(0), dec!(2)).cosh();
        assert_close(result.value(), dec!(1));
        assert_close(result.error(), dec!(0));
        let result = VDec::new(dec!(0), dec!(2)).tanh();
        assert_close(result.value(), dec!(0));
        assert_close(result.error(), dec!(2));

        let result = VDec::new(dec!(0), dec!(1)).asinh();
        assert_close(result.value(), dec!(0));
        assert_close(result.error(), dec!(1));
        let result = VDec::new(dec!(2), dec!(1)).acosh();
        assert_within(result.error(), dec!(1) / root(dec!(3)), dec!(1e-20));
        let result = VDec::new(dec!(0.5), dec!(1)).atanh();
        assert_within(result.error(), dec!(4) / dec!(3), dec!(1e-20));
    }

    #[test]
    fn error_function() {
        let result = VDec::new(dec!(0), dec!(1)).erf();
        assert_eq!(result.value(), dec!(0));
        assert_within(result.error(), dec!(1.1283791670955125738961589031), dec!(1e-20));
        let result = VDec::new(dec!(0), dec!(1)).erfc();
        assert_eq!(result.value(), dec!(1));
        assert_within(ErrorFunction::erf(dec!(1)), dec!(0.8427007929), dec!(1e-6));
    }

    #[test]
    fn hypot_of_values() {
        let result = VDec::new(dec!(3), dec!(1)).hypot(VDec::new(dec!(4), dec!(2)));
        assert_close(result.value(), dec!(5));
        assert_close(result.error(), root(dec!(73)) / dec!(25));
        let result = crate::math::hypot(dec!(4), VDec::new(dec!(3), dec!(1)));
        assert_close(result.value(), dec!(5));
        assert_close(result.error(), dec!(3) / dec!(25));
    }

    #[test]
    fn parse_and_display() {
        let n = VDec::from_str("(1.25 +- 0.05)").unwrap();
        assert_eq!(n.value(), dec!(1.25));
        assert_eq!(n.error(), dec!(0.05));
        assert_eq!(n.to_string(), "(1.25+-0.05)");
    }
}
