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

//! # Text Selection and Parsing
//!
//! `try_select_string` and `select_string` extract a string from a value and
//! treat blank results as absent. `try_parse_number` parses a base-10 number
//! into an `Either`, keeping the reason in the `Left` branch.
//!
//! ```rust
//! use choice_core::either::Either;
//! use choice_ext::text::try_parse_number;
//!
//! assert_eq!(try_parse_number::<i32>("5"), Either::right(5));
//! assert_eq!(
//!     try_parse_number::<i32>("5.6"),
//!     Either::left("Cannot parse string 5.6".to_string())
//! );
//! ```

use crate::macros::debug_event;
use choice_core::either::Either;
use choice_core::maybe::Maybe;
use num_traits::Num;

/// Selects a string from `candidate`, absent when it is empty or whitespace.
///
/// # Examples
///
/// ```rust
/// # use choice_core::maybe::Maybe;
/// # use choice_ext::text::try_select_string;
/// struct User {
///     name: String,
/// }
///
/// let named = User { name: "ada".into() };
/// assert_eq!(try_select_string(named, |u| u.name), Maybe::of("ada".to_string()));
///
/// let blank = User { name: "   ".into() };
/// assert!(try_select_string(blank, |u| u.name).is_absent());
/// ```
pub fn try_select_string<T, S, F>(candidate: T, selector: F) -> Maybe<String>
where
    F: FnOnce(T) -> S,
    S: Into<String>,
{
    Maybe::from_predicate(selector(candidate).into(), |s| !s.trim().is_empty())
}

/// Selects a non-blank string from the value in `maybe`.
///
/// `selector` is not invoked when `maybe` is absent.
#[inline]
pub fn select_string<T, S, F>(maybe: Maybe<T>, selector: F) -> Maybe<String>
where
    F: FnOnce(T) -> S,
    S: Into<String>,
{
    maybe.bind(|candidate| try_select_string(candidate, selector))
}

/// Parses `s` as a base-10 number of type `T`.
///
/// On failure the `Left` branch carries `"Cannot parse string {s}"`.
pub fn try_parse_number<T>(s: &str) -> Either<String, T>
where
    T: Num,
{
    match T::from_str_radix(s, 10) {
        Ok(n) => Either::right(n),
        Err(_) => {
            debug_event!(
                target: "choice_ext::text",
                input = s,
                ty = std::any::type_name::<T>(),
                "number parsing failed"
            );
            Either::left(format!("Cannot parse string {s}"))
        }
    }
}
