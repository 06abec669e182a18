// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

//! Text input and output in the form `(value+-error)`.

use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{DeserializeAs, DisplayFromStr, SerializeAs};
use tracing::debug;

use crate::{ParseError, Real, ValueWithError};

/// Leading whitespace, then `(value+-error)` with optional whitespace around
/// each token. Only the prefix of the input is matched.
static VALUE_WITH_ERROR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\(\s*(\S+?)\s*\+\s*-\s*(\S+?)\s*\)").expect("pattern is valid")
});

impl<T, P> fmt::Display for ValueWithError<T, P>
where
    T: Real + fmt::Display,
{
    /// Writes `(value+-error)`.
    ///
    /// A precision and the `+` flag apply to both numbers. A width pads the
    /// whole token with the fill character, aligned to the right unless
    /// specified otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (v, e) = (self.value(), self.error());
        let token = match (f.precision(), f.sign_plus()) {
            (Some(p), true) => format!("({v:+.p$}+-{e:+.p$})"),
            (Some(p), false) => format!("({v:.p$}+-{e:.p$})"),
            (None, true) => format!("({v:+}+-{e:+})"),
            (None, false) => format!("({v}+-{e})"),
        };
        // Formatter::pad would cut the token short at the precision
        let padding = f
            .width()
            .map_or(0, |width| width.saturating_sub(token.chars().count()));
        let (before, after) = match f.align() {
            Some(fmt::Alignment::Left) => (0, padding),
            Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
            Some(fmt::Alignment::Right) | None => (padding, 0),
        };
        let fill = f.fill();
        for _ in 0..before {
            write!(f, "{fill}")?;
        }
        f.write_str(&token)?;
        for _ in 0..after {
            write!(f, "{fill}")?;
        }
        Ok(())
    }
}

impl<T, P> ValueWithError<T, P>
where
    T: Real + FromStr,
    T::Err: fmt::Display,
{
    /// Reads one value from the start of `input`, returning it together with
    /// the unread remainder.
    ///
    /// Whitespace is skipped before the opening parenthesis and around each
    /// token. A negative error is stored as its absolute value.
    ///
    /// # Example
    ///
    /// ```
    /// # use gaussprop::ValueWithError;
    /// #
    /// let (n, rest) = ValueWithError::<f64>::read_from(" ( 1 + - 2 ) (3+-4)").unwrap();
    /// assert_eq!(n.into_parts(), (1.0, 2.0));
    /// assert_eq!(rest, " (3+-4)");
    /// ```
    pub fn read_from(input: &str) -> Result<(Self, &str), ParseError> {
        let Some(caps) = VALUE_WITH_ERROR.captures(input) else {
            debug!(input, "no value with error found");
            return Err(ParseError::malformed(input));
        };
        let value = parse_token(&caps[1]).map_err(|reason| ParseError::Value {
            token: caps[1].into(),
            reason,
        })?;
        let error = parse_token(&caps[2]).map_err(|reason| ParseError::Error {
            token: caps[2].into(),
            reason,
        })?;
        let end = caps.get(0).map_or(0, |m| m.end());
        Ok((Self::new(value, error), &input[end..]))
    }

    /// Reads one value from the start of `input` into `self`, returning the
    /// unread remainder.
    ///
    /// `self` is only modified if the read succeeds.
    pub fn read_into<'a>(&mut self, input: &'a str) -> Result<&'a str, ParseError> {
        let (n, rest) = Self::read_from(input)?;
        *self = n;
        Ok(rest)
    }
}

fn parse_token<T>(token: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    token.parse().map_err(|e: T::Err| {
        debug!(token, error = %e, "rejected number");
        e.to_string()
    })
}

impl<T, P> FromStr for ValueWithError<T, P>
where
    T: Real + FromStr,
    T::Err: fmt::Display,
{
    type Err = ParseError;

    /// Parses a string of the form `(value+-error)`, which may be surrounded
    /// by whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (n, rest) = Self::read_from(s)?;
        if rest.trim().is_empty() {
            Ok(n)
        } else {
            Err(ParseError::TrailingInput { rest: rest.into() })
        }
    }
}

/// Serializes as the display string, e.g. `"(1.5+-0.25)"`.
impl<T, P> Serialize for ValueWithError<T, P>
where
    T: Real + fmt::Display,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        DisplayFromStr::serialize_as(self, serializer)
    }
}

impl<'de, T, P> Deserialize<'de> for ValueWithError<T, P>
where
    T: Real + FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        DisplayFromStr::deserialize_as(deserializer)
    }
}
