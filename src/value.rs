// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

use std::{fmt, marker::PhantomData, mem};

use crate::{DefaultPolicy, Promote, Real, promote::Promoted};

/// A number with an associated uncertainty.
///
/// Represents a quantity of the form [_v_ ± _e_], where the error _e_ is one
/// standard deviation of the measurement and is never negative.
/// Arithmetic operators and the math functions return a new value whose error
/// follows first-order Gaussian error propagation, i.e. the errors of
/// independent inputs are scaled by the local derivative and combined in
/// quadrature.
///
/// `T` is the underlying numeric type (`f32`, `f64` or
/// `rust_decimal::Decimal`). `P` is the [`ComparisonPolicy`](crate::ComparisonPolicy)
/// deciding what `==`, `<` and friends mean; it is a type-level choice and
/// takes no space.
///
/// Integer underlying types are rejected at compile time:
///
/// ```compile_fail
/// let _ = gaussprop::ValueWithError::<i32>::new(1, 2);
/// ```
///
/// # Example
///
/// ```
/// # use gaussprop::ValueWithError;
/// #
/// let a = ValueWithError::<f64>::new(1.0, 3.0);
/// let b = ValueWithError::<f64>::new(1.0, 4.0);
/// let sum = a + b;
/// assert_eq!(sum.value(), 2.0);
/// assert_eq!(sum.error(), 5.0);
/// assert_eq!(sum.to_string(), "(2+-5)");
/// ```
pub struct ValueWithError<T: Real, P = DefaultPolicy> {
    value: T,
    error: T,
    policy: PhantomData<P>,
}

impl<T: Real, P> ValueWithError<T, P> {
    /// Creates a value with the given error.
    ///
    /// The sign of `error` is dropped.
    #[inline]
    pub fn new(value: T, error: T) -> Self {
        Self {
            value,
            error: error.abs(),
            policy: PhantomData,
        }
    }

    /// Creates a value that is known exactly, i.e. with zero error.
    #[inline]
    pub fn exact(value: T) -> Self {
        Self::new(value, T::zero())
    }

    /// Creates a value from a short list of numbers.
    ///
    /// The first element is the value and the second the error. Any further
    /// elements are ignored, and missing ones count as zero, so an empty
    /// slice gives the same as `Default::default()`.
    ///
    /// # Example
    ///
    /// ```
    /// # use gaussprop::ValueWithError;
    /// #
    /// let n = ValueWithError::<f64>::from_slice(&[3.0, -0.5, 99.0]);
    /// assert_eq!((n.value(), n.error()), (3.0, 0.5));
    /// ```
    pub fn from_slice(list: &[T]) -> Self {
        let value = list.first().copied().unwrap_or_else(T::zero);
        let error = list.get(1).copied().unwrap_or_else(T::zero);
        Self::new(value, error)
    }

    /// Returns the nominal value.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Returns the absolute error.
    ///
    /// The error is never negative.
    #[inline]
    pub fn error(&self) -> T {
        self.error
    }

    /// Returns `(value, error)`.
    #[inline]
    pub fn into_parts(self) -> (T, T) {
        (self.value, self.error)
    }

    /// Returns true if the error is zero.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.error.is_zero()
    }

    /// Returns the error relative to the magnitude of the value.
    ///
    /// Like any division, this is not finite for a value of zero.
    #[inline]
    pub fn relative_error(&self) -> T {
        self.error / self.value.abs()
    }

    /// Converts to another underlying type, copying value and error through
    /// its `From` conversion.
    ///
    /// # Example
    ///
    /// ```
    /// # use gaussprop::ValueWithError;
    /// #
    /// let single = ValueWithError::<f32>::new(1.5, 0.25);
    /// let double: ValueWithError<f64> = single.convert();
    /// assert_eq!(double.into_parts(), (1.5, 0.25));
    /// ```
    #[inline]
    pub fn convert<R>(self) -> ValueWithError<R, P>
    where
        R: Real + From<T>,
    {
        ValueWithError::new(R::from(self.value), R::from(self.error))
    }

    /// Overwrites both value and error with those of `other`.
    pub fn assign<U>(&mut self, other: ValueWithError<U, P>)
    where
        U: Real,
        T: From<U>,
    {
        *self = other.convert();
    }

    /// Sets the value and treats it as exact, discarding the current error.
    pub fn assign_value<U: Into<T>>(&mut self, value: U) {
        *self = Self::exact(value.into());
    }

    /// Overwrites value and error from a short list, as in
    /// [`from_slice`](Self::from_slice).
    pub fn assign_slice(&mut self, list: &[T]) {
        *self = Self::from_slice(list);
    }

    /// Exchanges value and error with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.value, &mut other.value);
        mem::swap(&mut self.error, &mut other.error);
    }
}

/// Exchanges the values and errors of `lhs` and `rhs`.
pub fn swap<T: Real, P>(lhs: &mut ValueWithError<T, P>, rhs: &mut ValueWithError<T, P>) {
    lhs.swap(rhs);
}

/// Creates a value with error under the default policy, choosing the wider of
/// the two argument types as the underlying type.
///
/// # Example
///
/// ```
/// # use gaussprop::{make_value, ValueWithError};
/// #
/// let n: ValueWithError<f64> = make_value(5.0_f32, 0.3_f64);
/// assert_eq!(n.value(), 5.0);
/// ```
#[inline]
pub fn make_value<T, U>(value: T, error: U) -> ValueWithError<Promoted<T, U>>
where
    T: Promote<U>,
    U: Real,
{
    make_value_with(value, error)
}

/// Like [`make_value`], but with an explicitly chosen comparison policy.
///
/// # Example
///
/// ```
/// # use gaussprop::{make_value_with, IntervalPolicy};
/// #
/// let a = make_value_with::<IntervalPolicy, _, _>(1.0_f64, 1.0_f64);
/// let b = make_value_with::<IntervalPolicy, _, _>(2.0_f64, 0.4_f64);
/// assert!(a == b);
/// ```
#[inline]
pub fn make_value_with<P, T, U>(value: T, error: U) -> ValueWithError<Promoted<T, U>, P>
where
    T: Promote<U>,
    U: Real,
{
    ValueWithError::new(value.into(), error.into())
}

impl<T: Real, P> Clone for ValueWithError<T, P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Real, P> Copy for ValueWithError<T, P> {}

impl<T: Real, P> Default for ValueWithError<T, P> {
    /// Returns [0 ± 0].
    #[inline]
    fn default() -> Self {
        Self::exact(T::zero())
    }
}

impl<T: Real, P> fmt::Debug for ValueWithError<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueWithError")
            .field("value", &self.value)
            .field("error", &self.error)
            .finish()
    }
}

impl<T: Real, P> From<T> for ValueWithError<T, P> {
    /// Creates an exact value.
    #[inline]
    fn from(value: T) -> Self {
        Self::exact(value)
    }
}

impl<T: Real, P> From<(T, T)> for ValueWithError<T, P> {
    /// Creates a value from a `(value, error)` pair.
    #[inline]
    fn from((value, error): (T, T)) -> Self {
        Self::new(value, error)
    }
}

impl<T: Real, P, const N: usize> From<[T; N]> for ValueWithError<T, P> {
    /// Creates a value from a short list, as in
    /// [`from_slice`](ValueWithError::from_slice).
    #[inline]
    fn from(list: [T; N]) -> Self {
        Self::from_slice(&list)
    }
}

impl<P> From<ValueWithError<f32, P>> for ValueWithError<f64, P> {
    #[inline]
    fn from(n: ValueWithError<f32, P>) -> Self {
        n.convert()
    }
}
