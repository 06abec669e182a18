// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Failure to read a `ValueWithError` from text.
///
/// The target of a failed read is never modified.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input does not follow `(value+-error)`.
    #[error("Failed to parse: {input:?} is not of the form (value+-error)")]
    Malformed { input: String },
    /// The nominal value was rejected by the underlying type's parser.
    #[error("Failed to parse value {token:?}: {reason}")]
    Value { token: String, reason: String },
    /// The error was rejected by the underlying type's parser.
    #[error("Failed to parse error {token:?}: {reason}")]
    Error { token: String, reason: String },
    /// Something other than whitespace follows the closing parenthesis.
    #[error("Unexpected input after value: {rest:?}")]
    TrailingInput { rest: String },
}

impl ParseError {
    pub(crate) fn malformed(input: &str) -> Self {
        ParseError::Malformed {
            input: input.into(),
        }
    }
}
