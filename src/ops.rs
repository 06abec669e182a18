// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

//! Arithmetic operators.
//!
//! Every binary operator exists in three shapes: both operands uncertain, the
//! right operand an exact scalar, and the left operand an exact scalar. The
//! result has the promoted underlying type of the two operands. An exact
//! scalar contributes no error of its own.
//!
//! `%`, the bitwise operators and increment/decrement have no natural
//! propagation rule and are not defined.

use std::{
    iter::{Product, Sum},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use rust_decimal::Decimal;

use crate::{Promote, Real, ValueWithError, promote::Promoted};

impl<U, V, P> Mul<ValueWithError<V, P>> for ValueWithError<U, P>
where
    U: Promote<V>,
    V: Real,
{
    type Output = ValueWithError<Promoted<U, V>, P>;

    /// [_x_ ± _ex_] × [_y_ ± _ey_] = [_xy_ ± hypot(_y·ex_, _x·ey_)]
    fn mul(self, rhs: ValueWithError<V, P>) -> Self::Output {
        let (x, ex) = self.convert::<Promoted<U, V>>().into_parts();
        let (y, ey) = rhs.convert::<Promoted<U, V>>().into_parts();
        ValueWithError::new(x * y, (y * ex).hypot(x * ey))
    }
}

impl<U, V, P> Div<ValueWithError<V, P>> for ValueWithError<U, P>
where
    U: Promote<V>,
    V: Real,
{
    type Output = ValueWithError<Promoted<U, V>, P>;

    /// [_x_ ± _ex_] / [_y_ ± _ey_] = [_x/y_ ± hypot(_ex_, _(x/y)·ey_) / _y_]
    fn div(self, rhs: ValueWithError<V, P>) -> Self::Output {
        let (x, ex) = self.convert::<Promoted<U, V>>().into_parts();
        let (y, ey) = rhs.convert::<Promoted<U, V>>().into_parts();
        let quotient = x / y;
        ValueWithError::new(quotient, ex.hypot(quotient * ey) / y)
    }
}

impl<U, V, P> Add<ValueWithError<V, P>> for ValueWithError<U, P>
where
    U: Promote<V>,
    V: Real,
{
    type Output = ValueWithError<Promoted<U, V>, P>;

    /// [_x_ ± _ex_] + [_y_ ± _ey_] = [_x + y_ ± hypot(_ex_, _ey_)]
    fn add(self, rhs: ValueWithError<V, P>) -> Self::Output {
        let (x, ex) = self.convert::<Promoted<U, V>>().into_parts();
        let (y, ey) = rhs.convert::<Promoted<U, V>>().into_parts();
        ValueWithError::new(x + y, ex.hypot(ey))
    }
}

impl<U, V, P> Sub<ValueWithError<V, P>> for ValueWithError<U, P>
where
    U: Promote<V>,
    V: Real,
{
    type Output = ValueWithError<Promoted<U, V>, P>;

    /// [_x_ ± _ex_] − [_y_ ± _ey_] = [_x − y_ ± hypot(_ex_, _ey_)]
    fn sub(self, rhs: ValueWithError<V, P>) -> Self::Output {
        let (x, ex) = self.convert::<Promoted<U, V>>().into_parts();
        let (y, ey) = rhs.convert::<Promoted<U, V>>().into_parts();
        ValueWithError::new(x - y, ex.hypot(ey))
    }
}

macro_rules! impl_arithmetic_scalar {
    ($s:ty) => {
        impl<U, P> Mul<$s> for ValueWithError<U, P>
        where
            U: Promote<$s>,
        {
            type Output = ValueWithError<Promoted<U, $s>, P>;

            fn mul(self, rhs: $s) -> Self::Output {
                let (x, ex) = self.convert::<Promoted<U, $s>>().into_parts();
                let s = Promoted::<U, $s>::from(rhs);
                ValueWithError::new(x * s, ex * s)
            }
        }

        impl<V, P> Mul<ValueWithError<V, P>> for $s
        where
            $s: Promote<V>,
            V: Real,
        {
            type Output = ValueWithError<Promoted<$s, V>, P>;

            fn mul(self, rhs: ValueWithError<V, P>) -> Self::Output {
                let s = Promoted::<$s, V>::from(self);
                let (y, ey) = rhs.convert::<Promoted<$s, V>>().into_parts();
                ValueWithError::new(s * y, s * ey)
            }
        }

        impl<U, P> Div<$s> for ValueWithError<U, P>
        where
            U: Promote<$s>,
        {
            type Output = ValueWithError<Promoted<U, $s>, P>;

            fn div(self, rhs: $s) -> Self::Output {
                let (x, ex) = self.convert::<Promoted<U, $s>>().into_parts();
                let s = Promoted::<U, $s>::from(rhs);
                ValueWithError::new(x / s, ex / s)
            }
        }

        impl<V, P> Div<ValueWithError<V, P>> for $s
        where
            $s: Promote<V>,
            V: Real,
        {
            type Output = ValueWithError<Promoted<$s, V>, P>;

            /// _s_ / [_y_ ± _ey_] = [_s/y_ ± _s·ey_ / _y²_]
            fn div(self, rhs: ValueWithError<V, P>) -> Self::Output {
                let s = Promoted::<$s, V>::from(self);
                let (y, ey) = rhs.convert::<Promoted<$s, V>>().into_parts();
                ValueWithError::new(s / y, (s * ey) / (y * y))
            }
        }

        impl<U, P> Add<$s> for ValueWithError<U, P>
        where
            U: Promote<$s>,
        {
            type Output = ValueWithError<Promoted<U, $s>, P>;

            fn add(self, rhs: $s) -> Self::Output {
                let (x, ex) = self.convert::<Promoted<U, $s>>().into_parts();
                ValueWithError::new(x + Promoted::<U, $s>::from(rhs), ex)
            }
        }

        impl<V, P> Add<ValueWithError<V, P>> for $s
        where
            $s: Promote<V>,
            V: Real,
        {
            type Output = ValueWithError<Promoted<$s, V>, P>;

            fn add(self, rhs: ValueWithError<V, P>) -> Self::Output {
                let (y, ey) = rhs.convert::<Promoted<$s, V>>().into_parts();
                ValueWithError::new(Promoted::<$s, V>::from(self) + y, ey)
            }
        }

        impl<U, P> Sub<$s> for ValueWithError<U, P>
        where
            U: Promote<$s>,
        {
            type Output = ValueWithError<Promoted<U, $s>, P>;

            fn sub(self, rhs: $s) -> Self::Output {
                let (x, ex) = self.convert::<Promoted<U, $s>>().into_parts();
                ValueWithError::new(x - Promoted::<U, $s>::from(rhs), ex)
            }
        }

        impl<V, P> Sub<ValueWithError<V, P>> for $s
        where
            $s: Promote<V>,
            V: Real,
        {
            type Output = ValueWithError<Promoted<$s, V>, P>;

            fn sub(self, rhs: ValueWithError<V, P>) -> Self::Output {
                let (y, ey) = rhs.convert::<Promoted<$s, V>>().into_parts();
                ValueWithError::new(Promoted::<$s, V>::from(self) - y, ey)
            }
        }
    };
}

impl_arithmetic_scalar!(f32);
impl_arithmetic_scalar!(f64);
impl_arithmetic_scalar!(Decimal);

// Compound assignment is the binary operator followed by assignment, for any
// right-hand side whose result keeps the type of `self`.
macro_rules! impl_assign_op {
    ($Assign:ident, $assign:ident, $Op:ident, $op:ident) => {
        impl<T, P, Rhs> $Assign<Rhs> for ValueWithError<T, P>
        where
            T: Real,
            ValueWithError<T, P>: $Op<Rhs, Output = ValueWithError<T, P>>,
        {
            #[inline]
            fn $assign(&mut self, rhs: Rhs) {
                *self = $Op::$op(*self, rhs);
            }
        }
    };
}

impl_assign_op!(MulAssign, mul_assign, Mul, mul);
impl_assign_op!(DivAssign, div_assign, Div, div);
impl_assign_op!(AddAssign, add_assign, Add, add);
impl_assign_op!(SubAssign, sub_assign, Sub, sub);

impl<T: Real, P> Neg for ValueWithError<T, P> {
    type Output = Self;

    /// −[_x_ ± _ex_] = [−_x_ ± _ex_]
    #[inline]
    fn neg(self) -> Self {
        let (x, ex) = self.into_parts();
        Self::new(-x, ex)
    }
}

impl<T, P> Sum for ValueWithError<T, P>
where
    T: Promote<T, Output = T>,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, n| acc + n)
    }
}

impl<T, P> Product for ValueWithError<T, P>
where
    T: Promote<T, Output = T>,
{
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::exact(T::one()), |acc, n| acc * n)
    }
}
