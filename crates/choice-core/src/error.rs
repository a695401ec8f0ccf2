// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Extraction Errors
//!
//! Every combinator in this crate is total. The only operations that can fail
//! are the accessors that demand a value (`Maybe::get_value`,
//! `Maybe::get_value_or`), and they report the failure with
//! [`AbsentValueError`] instead of panicking. Accessors that take a
//! caller-supplied error (`Maybe::get_or_fail`, `Either::get_right_or_fail`)
//! return that error unchanged.

use std::borrow::Cow;

/// The default message carried by [`AbsentValueError`].
pub const NO_VALUE_MESSAGE: &str = "no value present";

/// The error returned when a value is demanded from an absent container.
///
/// # Examples
///
/// ```rust
/// # use choice_core::{error::AbsentValueError, maybe::Maybe};
/// let m: Maybe<i32> = Maybe::empty();
/// let err = m.get_value().unwrap_err();
/// assert_eq!(err, AbsentValueError::default());
/// assert_eq!(err.to_string(), "no value present");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{message}")]
pub struct AbsentValueError {
    message: Cow<'static, str>,
}

impl AbsentValueError {
    /// Creates an error carrying a custom message.
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message describing the failed extraction.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for AbsentValueError {
    #[inline]
    fn default() -> Self {
        Self::new(NO_VALUE_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message() {
        let err = AbsentValueError::default();
        assert_eq!(err.message(), NO_VALUE_MESSAGE);
        assert_eq!(format!("{}", err), "no value present");
    }

    #[test]
    fn test_custom_message() {
        let err = AbsentValueError::new(format!("missing key {}", 7));
        assert_eq!(err.message(), "missing key 7");
        assert_eq!(err.to_string(), "missing key 7");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&AbsentValueError::default());

        let boxed: Box<dyn std::error::Error> = Box::new(AbsentValueError::new("boxed"));
        assert_eq!(boxed.to_string(), "boxed");
    }
}
