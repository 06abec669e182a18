// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

//! Strategies for comparing values with errors.
//!
//! A policy is selected purely at the type level, through the second type
//! parameter of [`ValueWithError`], and never holds state. The comparison
//! operators only ever call the three primitives `equal`, `greater_than` and
//! `greater_or_equal`; `!=`, `<` and `<=` are derived from them by negation
//! and by swapping operands.

use crate::{Real, ValueWithError};

/// A stateless strategy deciding equality and ordering of values with errors.
///
/// Only the three primitives on pairs of `ValueWithError` must be provided.
/// The shapes taking a plain value default to treating it as exact, i.e. as a
/// `ValueWithError` with zero error.
pub trait ComparisonPolicy: Sized {
    fn equal<T: Real>(lhs: &ValueWithError<T, Self>, rhs: &ValueWithError<T, Self>) -> bool;

    fn greater_than<T: Real>(lhs: &ValueWithError<T, Self>, rhs: &ValueWithError<T, Self>)
        -> bool;

    fn greater_or_equal<T: Real>(
        lhs: &ValueWithError<T, Self>,
        rhs: &ValueWithError<T, Self>,
    ) -> bool;

    fn equal_value<T: Real>(lhs: &ValueWithError<T, Self>, rhs: &T) -> bool {
        Self::equal(lhs, &ValueWithError::exact(*rhs))
    }

    fn value_equal<T: Real>(lhs: &T, rhs: &ValueWithError<T, Self>) -> bool {
        Self::equal(&ValueWithError::exact(*lhs), rhs)
    }

    fn greater_than_value<T: Real>(lhs: &ValueWithError<T, Self>, rhs: &T) -> bool {
        Self::greater_than(lhs, &ValueWithError::exact(*rhs))
    }

    fn value_greater_than<T: Real>(lhs: &T, rhs: &ValueWithError<T, Self>) -> bool {
        Self::greater_than(&ValueWithError::exact(*lhs), rhs)
    }

    fn greater_or_equal_value<T: Real>(lhs: &ValueWithError<T, Self>, rhs: &T) -> bool {
        Self::greater_or_equal(lhs, &ValueWithError::exact(*rhs))
    }

    fn value_greater_or_equal<T: Real>(lhs: &T, rhs: &ValueWithError<T, Self>) -> bool {
        Self::greater_or_equal(&ValueWithError::exact(*lhs), rhs)
    }
}

/// Compares the nominal values only, ignoring errors entirely.
#[derive(Debug)]
pub enum ExactPolicy {}

impl ComparisonPolicy for ExactPolicy {
    fn equal<T: Real>(lhs: &ValueWithError<T, Self>, rhs: &ValueWithError<T, Self>) -> bool {
        lhs.value() == rhs.value()
    }

    fn greater_than<T: Real>(
        lhs: &ValueWithError<T, Self>,
        rhs: &ValueWithError<T, Self>,
    ) -> bool {
        lhs.value() > rhs.value()
    }

    fn greater_or_equal<T: Real>(
        lhs: &ValueWithError<T, Self>,
        rhs: &ValueWithError<T, Self>,
    ) -> bool {
        lhs.value() >= rhs.value()
    }

    fn equal_value<T: Real>(lhs: &ValueWithError<T, Self>, rhs: &T) -> bool {
        lhs.value() == *rhs
    }

    fn value_equal<T: Real>(lhs: &T, rhs: &ValueWithError<T, Self>) -> bool {
        *lhs == rhs.value()
    }

    fn greater_than_value<T: Real>(lhs: &ValueWithError<T, Self>, rhs: &T) -> bool {
        lhs.value() > *rhs
    }

    fn value_greater_than<T: Real>(lhs: &T, rhs: &ValueWithError<T, Self>) -> bool {
        *lhs > rhs.value()
    }

    fn greater_or_equal_value<T: Real>(lhs: &ValueWithError<T, Self>, rhs: &T) -> bool {
        lhs.value() >= *rhs
    }

    fn value_greater_or_equal<T: Real>(lhs: &T, rhs: &ValueWithError<T, Self>) -> bool {
        *lhs >= rhs.value()
    }
}

/// Treats each value as the interval `[value - error, value + error]`.
///
/// Two values are equal when their nominal values differ by no more than the
/// larger of the two errors. A plain value counts as having no error.
#[derive(Debug)]
pub enum IntervalPolicy {}

/// `std::cmp::max` for partially ordered values: `a` unless `a < b`.
#[inline]
fn larger<T: Real>(a: T, b: T) -> T {
    if a < b { b } else { a }
}

impl ComparisonPolicy for IntervalPolicy {
    fn equal<T: Real>(lhs: &ValueWithError<T, Self>, rhs: &ValueWithError<T, Self>) -> bool {
        (lhs.value() - rhs.value()).abs() <= larger(lhs.error(), rhs.error())
    }

    fn greater_than<T: Real>(
        lhs: &ValueWithError<T, Self>,
        rhs: &ValueWithError<T, Self>,
    ) -> bool {
        lhs.value() - rhs.value() > larger(lhs.error(), rhs.error())
    }

    fn greater_or_equal<T: Real>(
        lhs: &ValueWithError<T, Self>,
        rhs: &ValueWithError<T, Self>,
    ) -> bool {
        lhs.value() - rhs.value() >= -larger(lhs.error(), rhs.error())
    }

    fn equal_value<T: Real>(lhs: &ValueWithError<T, Self>, rhs: &T) -> bool {
        (lhs.value() - *rhs).abs() <= lhs.error()
    }

    fn value_equal<T: Real>(lhs: &T, rhs: &ValueWithError<T, Self>) -> bool {
        (*lhs - rhs.value()).abs() <= rhs.error()
    }

    fn greater_than_value<T: Real>(lhs: &ValueWithError<T, Self>, rhs: &T) -> bool {
        lhs.value() - *rhs > lhs.error()
    }

    fn value_greater_than<T: Real>(lhs: &T, rhs: &ValueWithError<T, Self>) -> bool {
        *lhs - rhs.value() > rhs.error()
    }

    fn greater_or_equal_value<T: Real>(lhs: &ValueWithError<T, Self>, rhs: &T) -> bool {
        lhs.value() - *rhs >= -lhs.error()
    }

    fn value_greater_or_equal<T: Real>(lhs: &T, rhs: &ValueWithError<T, Self>) -> bool {
        *lhs - rhs.value() >= -rhs.error()
    }
}

/// The policy used wherever none is named explicitly.
///
/// This is fixed when the crate is built: it is [`ExactPolicy`] unless the
/// `interval-default-policy` feature is enabled, in which case it is
/// [`IntervalPolicy`]. To use another policy at a particular call site, name
/// it as the second type parameter, e.g. `ValueWithError<f64, IntervalPolicy>`
/// or `make_value_with::<IntervalPolicy, _, _>(1.0, 0.1)`.
#[cfg(not(feature = "interval-default-policy"))]
pub type DefaultPolicy = ExactPolicy;

#[cfg(feature = "interval-default-policy")]
pub type DefaultPolicy = IntervalPolicy;
