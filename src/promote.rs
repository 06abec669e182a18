// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

use rust_decimal::Decimal;

use crate::Real;

/// Chooses the underlying type of a result combining `Self` and `Rhs`.
///
/// The output is the wider of the two types, so that mixing `f32` with `f64`
/// yields `f64`. Both operands convert losslessly into it.
pub trait Promote<Rhs: Real>: Real {
    type Output: Real + From<Self> + From<Rhs>;
}

/// Shorthand for the promoted type of `U` and `V`.
pub type Promoted<U, V> = <U as Promote<V>>::Output;

macro_rules! impl_promote {
    ($lhs:ty, $rhs:ty => $out:ty) => {
        impl Promote<$rhs> for $lhs {
            type Output = $out;
        }
    };
}

impl_promote!(f32, f32 => f32);
impl_promote!(f32, f64 => f64);
impl_promote!(f64, f32 => f64);
impl_promote!(f64, f64 => f64);
impl_promote!(Decimal, Decimal => Decimal);
