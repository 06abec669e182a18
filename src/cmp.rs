// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

//! Comparison operators.
//!
//! All six operators delegate to the three primitives of the value's
//! [`ComparisonPolicy`]. `!=` negates `equal`; `<` and `<=` call
//! `greater_than` and `greater_or_equal` with the operands swapped.
//! Operands of different underlying types are promoted first.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::{ComparisonPolicy, Promote, Real, ValueWithError, promote::Promoted};

/// Builds an ordering from the operators, giving `None` when no primitive
/// holds.
fn ordering(equal: bool, greater: bool, less: bool) -> Option<Ordering> {
    if equal {
        Some(Ordering::Equal)
    } else if greater {
        Some(Ordering::Greater)
    } else if less {
        Some(Ordering::Less)
    } else {
        None
    }
}

impl<U, V, P> PartialEq<ValueWithError<V, P>> for ValueWithError<U, P>
where
    U: Promote<V>,
    V: Real,
    P: ComparisonPolicy,
{
    fn eq(&self, other: &ValueWithError<V, P>) -> bool {
        P::equal(
            &self.convert::<Promoted<U, V>>(),
            &other.convert::<Promoted<U, V>>(),
        )
    }
}

impl<U, V, P> PartialOrd<ValueWithError<V, P>> for ValueWithError<U, P>
where
    U: Promote<V>,
    V: Real,
    P: ComparisonPolicy,
{
    fn partial_cmp(&self, other: &ValueWithError<V, P>) -> Option<Ordering> {
        ordering(self == other, self > other, self < other)
    }

    fn gt(&self, other: &ValueWithError<V, P>) -> bool {
        P::greater_than(
            &self.convert::<Promoted<U, V>>(),
            &other.convert::<Promoted<U, V>>(),
        )
    }

    fn ge(&self, other: &ValueWithError<V, P>) -> bool {
        P::greater_or_equal(
            &self.convert::<Promoted<U, V>>(),
            &other.convert::<Promoted<U, V>>(),
        )
    }

    fn lt(&self, other: &ValueWithError<V, P>) -> bool {
        P::greater_than(
            &other.convert::<Promoted<U, V>>(),
            &self.convert::<Promoted<U, V>>(),
        )
    }

    fn le(&self, other: &ValueWithError<V, P>) -> bool {
        P::greater_or_equal(
            &other.convert::<Promoted<U, V>>(),
            &self.convert::<Promoted<U, V>>(),
        )
    }
}

macro_rules! impl_cmp_scalar {
    ($s:ty) => {
        impl<U, P> PartialEq<$s> for ValueWithError<U, P>
        where
            U: Promote<$s>,
            P: ComparisonPolicy,
        {
            fn eq(&self, other: &$s) -> bool {
                P::equal_value(
                    &self.convert::<Promoted<U, $s>>(),
                    &Promoted::<U, $s>::from(*other),
                )
            }
        }

        impl<V, P> PartialEq<ValueWithError<V, P>> for $s
        where
            $s: Promote<V>,
            V: Real,
            P: ComparisonPolicy,
        {
            fn eq(&self, other: &ValueWithError<V, P>) -> bool {
                P::value_equal(
                    &Promoted::<$s, V>::from(*self),
                    &other.convert::<Promoted<$s, V>>(),
                )
            }
        }

        impl<U, P> PartialOrd<$s> for ValueWithError<U, P>
        where
            U: Promote<$s>,
            P: ComparisonPolicy,
        {
            fn partial_cmp(&self, other: &$s) -> Option<Ordering> {
                ordering(self == other, self > other, self < other)
            }

            fn gt(&self, other: &$s) -> bool {
                P::greater_than_value(
                    &self.convert::<Promoted<U, $s>>(),
                    &Promoted::<U, $s>::from(*other),
                )
            }

            fn ge(&self, other: &$s) -> bool {
                P::greater_or_equal_value(
                    &self.convert::<Promoted<U, $s>>(),
                    &Promoted::<U, $s>::from(*other),
                )
            }

            fn lt(&self, other: &$s) -> bool {
                P::value_greater_than(
                    &Promoted::<U, $s>::from(*other),
                    &self.convert::<Promoted<U, $s>>(),
                )
            }

            fn le(&self, other: &$s) -> bool {
                P::value_greater_or_equal(
                    &Promoted::<U, $s>::from(*other),
                    &self.convert::<Promoted<U, $s>>(),
                )
            }
        }

        impl<V, P> PartialOrd<ValueWithError<V, P>> for $s
        where
            $s: Promote<V>,
            V: Real,
            P: ComparisonPolicy,
        {
            fn partial_cmp(&self, other: &ValueWithError<V, P>) -> Option<Ordering> {
                ordering(self == other, self > other, self < other)
            }

            fn gt(&self, other: &ValueWithError<V, P>) -> bool {
                P::value_greater_than(
                    &Promoted::<$s, V>::from(*self),
                    &other.convert::<Promoted<$s, V>>(),
                )
            }

            fn ge(&self, other: &ValueWithError<V, P>) -> bool {
                P::value_greater_or_equal(
                    &Promoted::<$s, V>::from(*self),
                    &other.convert::<Promoted<$s, V>>(),
                )
            }

            fn lt(&self, other: &ValueWithError<V, P>) -> bool {
                P::greater_than_value(
                    &other.convert::<Promoted<$s, V>>(),
                    &Promoted::<$s, V>::from(*self),
                )
            }

            fn le(&self, other: &ValueWithError<V, P>) -> bool {
                P::greater_or_equal_value(
                    &other.convert::<Promoted<$s, V>>(),
                    &Promoted::<$s, V>::from(*self),
                )
            }
        }
    };
}

impl_cmp_scalar!(f32);
impl_cmp_scalar!(f64);
impl_cmp_scalar!(Decimal);

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{ExactPolicy, IntervalPolicy};

    type VE = ValueWithError<f64, ExactPolicy>;
    type VI = ValueWithError<f64, IntervalPolicy>;

    thread_local! {
        static CALLS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    /// Compares nominal values and records every primitive it is asked for.
    enum Recording {}

    impl Recording {
        fn record<T: Real>(name: &str, lhs: &ValueWithError<T, Self>, rhs: &ValueWithError<T, Self>) {
            let call = format!("{name}({:?}, {:?})", lhs.value(), rhs.value());
            CALLS.with(|calls| calls.borrow_mut().push(call));
        }

        fn take() -> Vec<String> {
            CALLS.with(|calls| calls.take())
        }
    }

    impl ComparisonPolicy for Recording {
        fn equal<T: Real>(lhs: &ValueWithError<T, Self>, rhs: &ValueWithError<T, Self>) -> bool {
            Self::record("equal", lhs, rhs);
            lhs.value() == rhs.value()
        }

        fn greater_than<T: Real>(
            lhs: &ValueWithError<T, Self>,
            rhs: &ValueWithError<T, Self>,
        ) -> bool {
            Self::record("greater_than", lhs, rhs);
            lhs.value() > rhs.value()
        }

        fn greater_or_equal<T: Real>(
            lhs: &ValueWithError<T, Self>,
            rhs: &ValueWithError<T, Self>,
        ) -> bool {
            Self::record("greater_or_equal", lhs, rhs);
            lhs.value() >= rhs.value()
        }
    }

    type VR = ValueWithError<f64, Recording>;

    #[test]
    fn operators_call_policy_primitives() {
        let one = VR::new(1.0, 0.5);
        let two = VR::new(2.0, 0.5);
        Recording::take();

        assert!(!(one == two));
        assert_eq!(Recording::take(), ["equal(1.0, 2.0)"]);
        assert!(one != two);
        assert_eq!(Recording::take(), ["equal(1.0, 2.0)"]);
        assert!(!(one > two));
        assert_eq!(Recording::take(), ["greater_than(1.0, 2.0)"]);
        assert!(!(one >= two));
        assert_eq!(Recording::take(), ["greater_or_equal(1.0, 2.0)"]);
        assert!(one < two);
        assert_eq!(Recording::take(), ["greater_than(2.0, 1.0)"]);
        assert!(one <= two);
        assert_eq!(Recording::take(), ["greater_or_equal(2.0, 1.0)"]);
    }

    #[test]
    fn scalar_operators_call_policy_primitives() {
        let one = VR::new(1.0, 0.5);
        Recording::take();

        assert!(one < 2.0_f64);
        assert_eq!(Recording::take(), ["greater_than(2.0, 1.0)"]);
        assert!(2.0_f64 > one);
        assert_eq!(Recording::take(), ["greater_than(2.0, 1.0)"]);
        assert!(!(2.0_f64 <= one));
        assert_eq!(Recording::take(), ["greater_or_equal(1.0, 2.0)"]);
        assert!(one != 2.0_f64);
        assert_eq!(Recording::take(), ["equal(1.0, 2.0)"]);
        assert!(1.0_f64 == one);
        assert_eq!(Recording::take(), ["equal(1.0, 1.0)"]);
    }

    #[test]
    fn exact_policy() {
        let a = VE::new(1.0, 2.0);
        let b = VE::new(1.0, 0.1);
        let c = VE::new(3.0, 0.1);
        assert!(a == b);
        assert!(a != c);
        assert!(a < c);
        assert!(a <= b);
        assert!(c > a);
        assert!(c >= a);
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));
        assert_eq!(a.partial_cmp(&c), Some(Ordering::Less));
        assert_eq!(c.partial_cmp(&a), Some(Ordering::Greater));
    }

    #[test]
    fn exact_policy_with_scalars() {
        let a = VE::new(1.0, 2.0);
        assert!(a == 1.0_f64);
        assert!(1.0_f64 == a);
        assert!(a < 1.5_f64);
        assert!(0.5_f64 < a);
        assert!(a >= 1.0_f64);
        assert!(1.0_f64 >= a);
        assert_eq!(a.partial_cmp(&0.0_f64), Some(Ordering::Greater));
        assert_eq!(2.0_f64.partial_cmp(&a), Some(Ordering::Greater));
    }

    #[test]
    fn interval_policy() {
        let a = VI::new(1.0, 1.0);
        let b = VI::new(2.0, 0.4);
        let c = VI::new(3.0, 0.4);
        assert!(a == b);
        assert!(!(a < b));
        assert!(a <= b);
        assert!(b >= a);
        assert!(a < c);
        assert!(b < c);
        assert!(b != VI::new(3.0, 0.1));
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));
        assert_eq!(c.partial_cmp(&a), Some(Ordering::Greater));
    }

    #[test]
    fn interval_policy_with_scalars() {
        let a = VI::new(1.0, 0.4);
        assert!(a == 1.3_f64);
        assert!(1.3_f64 == a);
        assert!(a != 1.5_f64);
        assert!(a < 1.5_f64);
        assert!(a >= 1.3_f64);
        assert!(!(a > 0.8_f64));
        assert!(2.0_f64 > a);
    }

    #[test]
    fn mixed_underlying_types() {
        let single = ValueWithError::<f32, ExactPolicy>::new(1.0, 0.5);
        let double = VE::new(1.0, 0.25);
        assert!(single == double);
        assert!(double == single);
        assert!(single < 2.0_f64);
        assert!(2.0_f32 > double);
    }

    #[test]
    fn nan_is_unordered() {
        let nan = VE::new(f64::NAN, 0.0);
        let one = VE::exact(1.0);
        assert!(nan != one);
        assert_eq!(nan.partial_cmp(&one), None);
        assert_eq!(nan.partial_cmp(&1.0_f64), None);
    }

    #[test]
    fn sort_by_partial_order() {
        let mut values = [VE::new(3.0, 0.3), VE::new(1.0, 0.1), VE::new(2.0, 0.2)];
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        let sorted: Vec<f64> = values.iter().map(ValueWithError::value).collect();
        assert_eq!(sorted, [1.0, 2.0, 3.0]);
    }
}
