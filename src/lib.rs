// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

//! Numbers that carry a standard error through calculations.
//!
//! A [`ValueWithError`] pairs a nominal value with an absolute error. The
//! arithmetic operators and the functions in [`math`] propagate the error to
//! first order, assuming the inputs are independent, so that errors combine
//! in quadrature. An exact scalar can appear on either side of any operator.
//!
//! ```
//! use gaussprop::make_value;
//!
//! let length = make_value(5.0_f64, 0.3_f64);
//! let width = make_value(2.0_f64, 0.2_f64);
//! let area = length * width;
//! assert_eq!(area.value(), 10.0);
//! // hypot(2 · 0.3, 5 · 0.2)
//! assert!((area.error() - 1.36_f64.sqrt()).abs() < 1e-12);
//! assert_eq!(format!("{area:.2}"), "(10.00+-1.17)");
//! ```
//!
//! What `==` and `<` mean for uncertain numbers is decided by a
//! [`ComparisonPolicy`] chosen at the type level. [`ExactPolicy`] compares
//! nominal values only, [`IntervalPolicy`] treats values within each other's
//! error as equal.
//!
//! Values are written and read in the form `(value+-error)`, through
//! `Display` and `FromStr`, or through serde as that same string.

mod cmp;
mod decimal;
mod error;
mod float;
mod format;
pub mod math;
mod numeric;
mod ops;
mod policy;
mod promote;
mod value;

pub use decimal::ValueWithErrorDecimal;
pub use error::ParseError;
pub use float::{ValueWithErrorF32, ValueWithErrorF64};
pub use math::{Atan2, Hypot};
pub use numeric::{ErrorFunction, Exponential, Gamma, Hyperbolic, Real, Transcendental, Trigonometric};
pub use policy::{ComparisonPolicy, DefaultPolicy, ExactPolicy, IntervalPolicy};
pub use promote::{Promote, Promoted};
pub use value::{ValueWithError, make_value, make_value_with, swap};

pub use num_traits::Pow;
