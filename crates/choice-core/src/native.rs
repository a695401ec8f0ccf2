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

//! # Native Option Adapter
//!
//! Conversions between [`Maybe<T>`] and the standard library's
//! `Option<T>`, plus the [`IntoMaybe`] trait that lets query builders and
//! `Maybe::bind_with` accept either kind of source.
//!
//! Every conversion from a native option collapses `None` to
//! `Maybe::Absent`, so a `Present` never wraps an absent payload.
//!
//! ```rust
//! use choice_core::{maybe::Maybe, native::OptionExt};
//!
//! let native: Option<i32> = Some(4);
//! let m = native.map_maybe(|x| x + 6).map(|x| x / 2);
//! assert_eq!(m, Maybe::of(5));
//!
//! let back: Option<i32> = m.into();
//! assert_eq!(back, Some(5));
//! ```

use crate::maybe::Maybe;

/// A source that can be turned into a [`Maybe`].
///
/// Implemented for `Maybe<T>` itself and for native `Option<T>`. The item
/// type is an associated type so a source always names exactly one payload.
pub trait IntoMaybe {
    /// The payload type of the resulting `Maybe`.
    type Item;

    /// Converts `self` into a `Maybe`.
    fn into_maybe(self) -> Maybe<Self::Item>;
}

impl<T> IntoMaybe for Maybe<T> {
    type Item = T;

    #[inline(always)]
    fn into_maybe(self) -> Maybe<T> {
        self
    }
}

impl<T> IntoMaybe for Option<T> {
    type Item = T;

    #[inline(always)]
    fn into_maybe(self) -> Maybe<T> {
        Maybe::from_native(self)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Maybe::from_native(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        value.into_native()
    }
}

/// `Maybe`-producing combinators on native `Option<T>`.
pub trait OptionExt<T>: Sized {
    /// Converts the option into a `Maybe`.
    fn to_maybe(self) -> Maybe<T>;

    /// Maps the value and returns the result as a `Maybe`.
    ///
    /// `f` is not invoked when the option is `None`.
    fn map_maybe<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U;

    /// Chains a `Maybe`-returning computation onto the option.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::{maybe::Maybe, native::OptionExt};
    /// let pos = |x: i32| Maybe::from_predicate(x, |v| *v > 0);
    /// assert_eq!(Some(3).bind_maybe(pos), Maybe::of(3));
    /// assert_eq!(Some(-3).bind_maybe(pos), Maybe::empty());
    /// assert_eq!(None::<i32>.bind_maybe(pos), Maybe::empty());
    /// ```
    fn bind_maybe<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>;

    /// Returns the value or `fallback`.
    fn get_or_else(self, fallback: T) -> T;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn to_maybe(self) -> Maybe<T> {
        Maybe::from_native(self)
    }

    #[inline]
    fn map_maybe<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.to_maybe().map(f)
    }

    #[inline]
    fn bind_maybe<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.to_maybe().bind(f)
    }

    #[inline]
    fn get_or_else(self, fallback: T) -> T {
        self.to_maybe().get_or_else(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_round_trip_preserves_presence() {
        assert_eq!(Option::from(Maybe::of(1)), Some(1));
        assert_eq!(Option::<i32>::from(Maybe::empty()), None);
        assert_eq!(Maybe::from(Some(1)).into_native(), Some(1));
    }

    #[test]
    fn test_native_none_collapses() {
        let nested: Option<Option<i32>> = Some(None);
        // Only the outer level collapses; the payload is a legitimate value.
        assert_eq!(nested.to_maybe(), Maybe::of(None));
        assert_eq!(nested.to_maybe().map_native(|inner| inner), Maybe::empty());
    }

    #[test]
    fn test_option_map_maybe() {
        assert_eq!(Some(4).map_maybe(|e| e + 6).map(|e| e / 2), Maybe::of(5));

        let calls = Cell::new(0);
        let m = None::<i32>.map_maybe(|e| {
            calls.set(calls.get() + 1);
            e
        });
        assert!(m.is_absent());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_option_get_or_else() {
        assert_eq!(OptionExt::get_or_else(Some(1), 2), 1);
        assert_eq!(OptionExt::get_or_else(None, 2), 2);
    }

    #[test]
    fn test_into_maybe_sources() {
        fn count<S: IntoMaybe>(sources: Vec<S>) -> usize {
            sources
                .into_iter()
                .map(IntoMaybe::into_maybe)
                .filter(Maybe::has_value)
                .count()
        }

        assert_eq!(count(vec![Some(1), None, Some(3)]), 2);
        assert_eq!(count(vec![Maybe::of(1), Maybe::empty()]), 1);
    }
}
