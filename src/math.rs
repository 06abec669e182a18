// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

//! Elementary and special functions of values with errors.
//!
//! Each function returns `f(v)` with the error `|f'(v)| · e`. Binary
//! functions accept any mix of uncertain and exact operands through the
//! [`Atan2`], [`Hypot`] and [`Pow`] traits, and are also available as free
//! functions here, which work when the left operand is a plain number.
//!
//! Each function needs only the capability it is built from, e.g.
//! [`Exponential`] for `sqrt` and `ln`, so `Decimal` values get every
//! function but the gamma family.
//!
//! Domain errors are not caught. Whatever the underlying function returns
//! for an argument outside its domain, NaN or infinity, flows into the value
//! and the error. `Decimal` has neither and panics instead.

use num_traits::Pow;
use rust_decimal::Decimal;

use crate::{
    ErrorFunction, Exponential, Gamma, Hyperbolic, Promote, Real, Trigonometric, ValueWithError,
    promote::Promoted,
};

#[inline]
fn two<T: Real>() -> T {
    T::one() + T::one()
}

impl<T: Real, P> ValueWithError<T, P> {
    /// Returns the absolute value, with the error unchanged.
    #[doc(alias = "fabs")]
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.value().abs(), self.error())
    }

    /// Builds the result of a function whose value at this point is `value`
    /// and whose derivative is `derivative`.
    #[inline]
    fn propagate(self, value: T, derivative: T) -> Self {
        Self::new(value, derivative * self.error())
    }
}

impl<T: Exponential, P> ValueWithError<T, P> {
    pub fn sqrt(self) -> Self {
        let root = self.value().sqrt();
        self.propagate(root, T::one() / (two::<T>() * root))
    }

    pub fn cbrt(self) -> Self {
        let v = self.value();
        let three = two::<T>() + T::one();
        self.propagate(v.cbrt(), T::one() / (three * (v * v).cbrt()))
    }

    pub fn exp(self) -> Self {
        let r = self.value().exp();
        self.propagate(r, r)
    }

    /// Returns 2 raised to this power.
    pub fn exp2(self) -> Self {
        let r = self.value().exp2();
        self.propagate(r, T::ln_2() * r)
    }

    /// Returns `e^v - 1`, accurate for small `v`.
    #[doc(alias = "expm1")]
    pub fn exp_m1(self) -> Self {
        let v = self.value();
        self.propagate(v.exp_m1(), v.exp())
    }

    /// Natural logarithm.
    #[doc(alias = "log")]
    pub fn ln(self) -> Self {
        let v = self.value();
        self.propagate(v.ln(), T::one() / v)
    }

    /// Returns `ln(1 + v)`, accurate for small `v`.
    #[doc(alias = "log1p")]
    pub fn ln_1p(self) -> Self {
        let v = self.value();
        self.propagate(v.ln_1p(), T::one() / (T::one() + v))
    }

    pub fn log2(self) -> Self {
        let v = self.value();
        self.propagate(v.log2(), T::one() / (v * T::ln_2()))
    }

    pub fn log10(self) -> Self {
        let v = self.value();
        self.propagate(v.log10(), T::one() / (v * T::ln_10()))
    }
}

impl<T: Trigonometric, P> ValueWithError<T, P> {
    pub fn sin(self) -> Self {
        let v = self.value();
        self.propagate(v.sin(), v.cos())
    }

    pub fn cos(self) -> Self {
        let v = self.value();
        self.propagate(v.cos(), v.sin())
    }

    pub fn tan(self) -> Self {
        let v = self.value();
        let c = v.cos();
        self.propagate(v.tan(), T::one() / (c * c))
    }

    pub fn asin(self) -> Self {
        let v = self.value();
        self.propagate(v.asin(), T::one() / (T::one() - v * v).sqrt())
    }

    pub fn acos(self) -> Self {
        let v = self.value();
        self.propagate(v.acos(), T::one() / (T::one() - v * v).sqrt())
    }

    pub fn atan(self) -> Self {
        let v = self.value();
        self.propagate(v.atan(), T::one() / (T::one() + v * v))
    }
}

impl<T: Hyperbolic, P> ValueWithError<T, P> {
    pub fn sinh(self) -> Self {
        let v = self.value();
        self.propagate(v.sinh(), v.cosh())
    }

    pub fn cosh(self) -> Self {
        let v = self.value();
        self.propagate(v.cosh(), v.sinh())
    }

    pub fn tanh(self) -> Self {
        let v = self.value();
        let c = v.cosh();
        self.propagate(v.tanh(), T::one() / (c * c))
    }

    pub fn asinh(self) -> Self {
        let v = self.value();
        self.propagate(v.asinh(), T::one() / (T::one() + v * v).sqrt())
    }

    pub fn acosh(self) -> Self {
        let v = self.value();
        self.propagate(v.acosh(), T::one() / (v * v - T::one()).sqrt())
    }

    pub fn atanh(self) -> Self {
        let v = self.value();
        self.propagate(v.atanh(), T::one() / (T::one() - v * v))
    }
}

impl<T: ErrorFunction, P> ValueWithError<T, P> {
    /// Gauss error function.
    pub fn erf(self) -> Self {
        let v = self.value();
        self.propagate(v.erf(), T::frac_2_sqrt_pi() * (-(v * v)).exp())
    }

    /// Complementary error function, `1 - erf(v)`.
    pub fn erfc(self) -> Self {
        let v = self.value();
        self.propagate(v.erfc(), T::frac_2_sqrt_pi() * (-(v * v)).exp())
    }
}

impl<T: Gamma, P> ValueWithError<T, P> {
    /// Gamma function.
    #[doc(alias = "tgamma")]
    pub fn gamma(self) -> Self {
        let v = self.value();
        let r = v.gamma();
        self.propagate(r, v.digamma() * r)
    }

    /// Natural logarithm of the absolute value of the gamma function.
    #[doc(alias = "lgamma")]
    pub fn ln_gamma(self) -> Self {
        let v = self.value();
        self.propagate(v.ln_gamma(), v.digamma())
    }
}

/// Four-quadrant arc tangent of `self / x`.
///
/// # Example
///
/// ```
/// # use gaussprop::{Atan2, ValueWithError};
/// #
/// let y = ValueWithError::<f64>::new(1.0, 2.0);
/// let x = ValueWithError::<f64>::new(1.0, 4.0);
/// let angle = y.atan2(x);
/// assert!((angle.value() - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
/// assert!((angle.error() - 5.0_f64.sqrt()).abs() < 1e-15);
/// ```
pub trait Atan2<Rhs = Self> {
    type Output;

    fn atan2(self, x: Rhs) -> Self::Output;
}

/// Length of the hypotenuse, `sqrt(self² + other²)`.
pub trait Hypot<Rhs = Self> {
    type Output;

    fn hypot(self, other: Rhs) -> Self::Output;
}

fn atan2_both<T: Trigonometric, P>(
    y: ValueWithError<T, P>,
    x: ValueWithError<T, P>,
) -> ValueWithError<T, P> {
    let (vy, ey) = y.into_parts();
    let (vx, ex) = x.into_parts();
    ValueWithError::new(
        Trigonometric::atan2(vy, vx),
        Real::hypot(vy * ex, vx * ey) / (vx * vx + vy * vy),
    )
}

fn atan2_exact_x<T: Trigonometric, P>(y: ValueWithError<T, P>, x: T) -> ValueWithError<T, P> {
    let (vy, ey) = y.into_parts();
    ValueWithError::new(Trigonometric::atan2(vy, x), x * ey / (vy * vy + x * x))
}

fn atan2_exact_y<T: Trigonometric, P>(y: T, x: ValueWithError<T, P>) -> ValueWithError<T, P> {
    let (vx, ex) = x.into_parts();
    ValueWithError::new(Trigonometric::atan2(y, vx), y * ex / (y * y + vx * vx))
}

// The quadrature sum is divided by the squared length, not the length.
fn hypot_both<T: Real, P>(
    x: ValueWithError<T, P>,
    y: ValueWithError<T, P>,
) -> ValueWithError<T, P> {
    let (vx, ex) = x.into_parts();
    let (vy, ey) = y.into_parts();
    ValueWithError::new(
        Real::hypot(vx, vy),
        Real::hypot(vx * ex, vy * ey) / (vx * vx + vy * vy),
    )
}

fn hypot_exact<T: Real, P>(x: ValueWithError<T, P>, y: T) -> ValueWithError<T, P> {
    let (vx, ex) = x.into_parts();
    ValueWithError::new(Real::hypot(vx, y), vx * ex / (vx * vx + y * y))
}

fn pow_both<T: Exponential, P>(
    base: ValueWithError<T, P>,
    exponent: ValueWithError<T, P>,
) -> ValueWithError<T, P> {
    let (b, eb) = base.into_parts();
    let (e, ee) = exponent.into_parts();
    let r = b.powf(e);
    ValueWithError::new(r, r * Real::hypot(e / b * eb, b.ln() * ee))
}

fn pow_exact_exponent<T: Exponential, P>(
    base: ValueWithError<T, P>,
    exponent: T,
) -> ValueWithError<T, P> {
    let b = base.value();
    base.propagate(b.powf(exponent), exponent * b.powf(exponent - T::one()))
}

fn pow_exact_base<T: Exponential, P>(
    base: T,
    exponent: ValueWithError<T, P>,
) -> ValueWithError<T, P> {
    let r = base.powf(exponent.value());
    exponent.propagate(r, base.ln() * r)
}

impl<U, V, P> Atan2<ValueWithError<V, P>> for ValueWithError<U, P>
where
    U: Promote<V>,
    V: Real,
    Promoted<U, V>: Trigonometric,
{
    type Output = ValueWithError<Promoted<U, V>, P>;

    fn atan2(self, x: ValueWithError<V, P>) -> Self::Output {
        atan2_both(self.convert(), x.convert())
    }
}

impl<U, V, P> Hypot<ValueWithError<V, P>> for ValueWithError<U, P>
where
    U: Promote<V>,
    V: Real,
{
    type Output = ValueWithError<Promoted<U, V>, P>;

    fn hypot(self, other: ValueWithError<V, P>) -> Self::Output {
        hypot_both(self.convert(), other.convert())
    }
}

impl<U, V, P> Pow<ValueWithError<V, P>> for ValueWithError<U, P>
where
    U: Promote<V>,
    V: Real,
    Promoted<U, V>: Exponential,
{
    type Output = ValueWithError<Promoted<U, V>, P>;

    /// [_b_ ± _eb_]^[_e_ ± _ee_] = [_b^e_ ± _b^e_ · hypot(_e/b · eb_, ln(_b_) · _ee_)]
    fn pow(self, exponent: ValueWithError<V, P>) -> Self::Output {
        pow_both(self.convert(), exponent.convert())
    }
}

macro_rules! impl_binary_scalar {
    ($s:ty) => {
        impl<U, P> Atan2<$s> for ValueWithError<U, P>
        where
            U: Promote<$s>,
            Promoted<U, $s>: Trigonometric,
        {
            type Output = ValueWithError<Promoted<U, $s>, P>;

            fn atan2(self, x: $s) -> Self::Output {
                atan2_exact_x(self.convert(), Promoted::<U, $s>::from(x))
            }
        }

        impl<V, P> Atan2<ValueWithError<V, P>> for $s
        where
            $s: Promote<V>,
            V: Real,
            Promoted<$s, V>: Trigonometric,
        {
            type Output = ValueWithError<Promoted<$s, V>, P>;

            fn atan2(self, x: ValueWithError<V, P>) -> Self::Output {
                atan2_exact_y(Promoted::<$s, V>::from(self), x.convert())
            }
        }

        impl<U, P> Hypot<$s> for ValueWithError<U, P>
        where
            U: Promote<$s>,
        {
            type Output = ValueWithError<Promoted<U, $s>, P>;

            fn hypot(self, other: $s) -> Self::Output {
                hypot_exact(self.convert(), Promoted::<U, $s>::from(other))
            }
        }

        impl<V, P> Hypot<ValueWithError<V, P>> for $s
        where
            $s: Promote<V>,
            V: Real,
        {
            type Output = ValueWithError<Promoted<$s, V>, P>;

            fn hypot(self, other: ValueWithError<V, P>) -> Self::Output {
                hypot_exact(other.convert(), Promoted::<$s, V>::from(self))
            }
        }

        impl<U, P> Pow<$s> for ValueWithError<U, P>
        where
            U: Promote<$s>,
            Promoted<U, $s>: Exponential,
        {
            type Output = ValueWithError<Promoted<U, $s>, P>;

            fn pow(self, exponent: $s) -> Self::Output {
                pow_exact_exponent(self.convert(), Promoted::<U, $s>::from(exponent))
            }
        }

        impl<V, P> Pow<ValueWithError<V, P>> for $s
        where
            $s: Promote<V>,
            V: Real,
            Promoted<$s, V>: Exponential,
        {
            type Output = ValueWithError<Promoted<$s, V>, P>;

            fn pow(self, exponent: ValueWithError<V, P>) -> Self::Output {
                pow_exact_base(Promoted::<$s, V>::from(self), exponent.convert())
            }
        }
    };
}

impl_binary_scalar!(f32);
impl_binary_scalar!(f64);
impl_binary_scalar!(Decimal);

/// Four-quadrant arc tangent of `y / x`, for any mix of uncertain and exact
/// operands.
///
/// # Example
///
/// ```
/// # use gaussprop::{math, ValueWithError};
/// #
/// let angle = math::atan2(1.0_f64, ValueWithError::<f64>::new(1.0, 2.0));
/// assert!((angle.error() - 1.0).abs() < 1e-15);
/// ```
#[inline]
pub fn atan2<Y: Atan2<X>, X>(y: Y, x: X) -> Y::Output {
    y.atan2(x)
}

/// Returns `sqrt(x² + y²)`, for any mix of uncertain and exact operands.
#[inline]
pub fn hypot<X: Hypot<Y>, Y>(x: X, y: Y) -> X::Output {
    x.hypot(y)
}

/// Raises `base` to `exponent`, for any mix of uncertain and exact operands.
#[inline]
pub fn pow<B: Pow<E>, E>(base: B, exponent: E) -> B::Output {
    base.pow(exponent)
}

/// Free-function form of [`ValueWithError::abs`].
#[doc(alias = "fabs")]
#[inline]
pub fn abs<T: Real, P>(x: ValueWithError<T, P>) -> ValueWithError<T, P> {
    x.abs()
}

macro_rules! free_unary {
    ($bound:ident => $($(#[$attr:meta])* $name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Free-function form of [`ValueWithError::", stringify!($name), "`].")]
            $(#[$attr])*
            #[inline]
            pub fn $name<T: $bound, P>(x: ValueWithError<T, P>) -> ValueWithError<T, P> {
                x.$name()
            }
        )*
    };
}

free_unary!(Exponential =>
    sqrt,
    cbrt,
    exp,
    exp2,
    #[doc(alias = "expm1")]
    exp_m1,
    #[doc(alias = "log")]
    ln,
    #[doc(alias = "log1p")]
    ln_1p,
    log2,
    log10,
);

free_unary!(Trigonometric => sin, cos, tan, asin, acos, atan);

free_unary!(Hyperbolic => sinh, cosh, tanh, asinh, acosh, atanh);

free_unary!(ErrorFunction => erf, erfc);

free_unary!(Gamma =>
    #[doc(alias = "tgamma")]
    gamma,
    #[doc(alias = "lgamma")]
    ln_gamma,
);
