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

//! # Sequential-Binding Queries
//!
//! Builders that join several sources into one result through repeated
//! `bind` and `map`. Each step appends the new payload to a flat tuple, so the
//! final `select` receives every payload at once.
//!
//! - [`MaybeQuery`] joins `Maybe<T>` and native `Option<T>` sources and is
//!   absent as soon as one source is absent.
//! - [`EitherQuery`] joins `Either<L, T>` and `Result<T, L>` sources and stops
//!   at the first `Left`, carrying that `Left` as the result.
//!
//! Once a query has short-circuited, later `and_with` sources are not
//! computed and the combiner passed to `select` is never invoked.
//!
//! ```rust
//! use choice_core::maybe::Maybe;
//! use choice_core::query::MaybeQuery;
//!
//! let name = Maybe::of("name");
//! let address: Option<&str> = Some("address");
//! let number = Maybe::of(134);
//! let zip = Maybe::of(98101);
//!
//! let person = MaybeQuery::new(name)
//!     .and(address)
//!     .and(number)
//!     .and(zip)
//!     .select(|(n, a, an, z)| format!("{} {} {} {}", n, a, an, z));
//!
//! assert_eq!(person, Maybe::of("name address 134 98101".to_string()));
//! ```
//!
//! Up to eight sources can be joined.

use crate::either::{Either, IntoEither};
use crate::macros::trace_event;
use crate::maybe::Maybe;
use crate::native::IntoMaybe;

/// Appends one element to the end of a tuple.
pub trait Append<U> {
    /// The tuple with `U` appended.
    type Output;

    /// Returns a new tuple with `value` appended.
    fn append(self, value: U) -> Self::Output;
}

macro_rules! impl_append {
    ($($name:ident),+) => {
        impl<$($name,)+ U> Append<U> for ($($name,)+) {
            type Output = ($($name,)+ U,);

            #[inline(always)]
            #[allow(non_snake_case)]
            fn append(self, value: U) -> Self::Output {
                let ($($name,)+) = self;
                ($($name,)+ value,)
            }
        }
    };
}

impl_append!(A);
impl_append!(A, B);
impl_append!(A, B, C);
impl_append!(A, B, C, D);
impl_append!(A, B, C, D, E);
impl_append!(A, B, C, D, E, F);
impl_append!(A, B, C, D, E, F, G);

/// A query over `Maybe` sources. `T` is the tuple of payloads joined so far.
#[must_use = "a query does nothing until `select` is called"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaybeQuery<T> {
    acc: Maybe<T>,
}

impl<T> MaybeQuery<(T,)> {
    /// Starts a query with one source.
    #[inline]
    pub fn new<S>(source: S) -> Self
    where
        S: IntoMaybe<Item = T>,
    {
        Self {
            acc: source.into_maybe().map(|v| (v,)),
        }
    }
}

impl<T> MaybeQuery<T> {
    /// Joins an independent source.
    #[inline]
    pub fn and<S>(self, source: S) -> MaybeQuery<T::Output>
    where
        S: IntoMaybe,
        T: Append<S::Item>,
    {
        MaybeQuery {
            acc: self
                .acc
                .bind(|acc| source.into_maybe().map(|v| acc.append(v))),
        }
    }

    /// Joins a source computed from the payloads joined so far.
    ///
    /// `f` is not invoked once the query has short-circuited.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::{maybe::Maybe, query::MaybeQuery};
    /// let lookup = |id: &u32| if *id == 1 { Some("alice") } else { None };
    ///
    /// let found = MaybeQuery::new(Maybe::of(1_u32)).and_with(|(id,)| lookup(id)).select(|(_, n)| n);
    /// assert_eq!(found, Maybe::of("alice"));
    ///
    /// let missing = MaybeQuery::new(Maybe::of(2_u32)).and_with(|(id,)| lookup(id)).select(|(_, n)| n);
    /// assert!(missing.is_absent());
    /// ```
    #[inline]
    pub fn and_with<S, F>(self, f: F) -> MaybeQuery<T::Output>
    where
        S: IntoMaybe,
        F: FnOnce(&T) -> S,
        T: Append<S::Item>,
    {
        MaybeQuery {
            acc: self
                .acc
                .bind(|acc| f(&acc).into_maybe().map(|v| acc.append(v))),
        }
    }

    /// Keeps the joined payloads only if `predicate` holds.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self {
            acc: self.acc.filter(predicate),
        }
    }

    /// Combines the joined payloads. `combine` is not invoked if any source was absent.
    #[inline]
    pub fn select<R, F>(self, combine: F) -> Maybe<R>
    where
        F: FnOnce(T) -> R,
    {
        self.into_maybe().map(combine)
    }

    /// Combines the joined payloads with a function that may itself produce no value.
    #[inline]
    pub fn select_many<S, F>(self, combine: F) -> Maybe<S::Item>
    where
        S: IntoMaybe,
        F: FnOnce(T) -> S,
    {
        self.into_maybe().bind(|t| combine(t).into_maybe())
    }

    /// Returns the joined payloads as one tuple.
    #[inline]
    pub fn into_maybe(self) -> Maybe<T> {
        if self.acc.is_absent() {
            trace_event!(target: "choice_core::query", "maybe query short-circuited");
        }
        self.acc
    }
}

/// A query over `Either` sources. `T` is the tuple of `Right` payloads joined so far.
#[must_use = "a query does nothing until `select` is called"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EitherQuery<L, T> {
    acc: Either<L, T>,
}

impl<L, T> EitherQuery<L, (T,)> {
    /// Starts a query with one source.
    #[inline]
    pub fn new<S>(source: S) -> Self
    where
        S: IntoEither<L, Right = T>,
    {
        Self {
            acc: source.into_either().map(|v| (v,)),
        }
    }
}

impl<L, T> EitherQuery<L, T> {
    /// Joins an independent source.
    #[inline]
    pub fn and<S>(self, source: S) -> EitherQuery<L, T::Output>
    where
        S: IntoEither<L>,
        T: Append<S::Right>,
    {
        EitherQuery {
            acc: self
                .acc
                .bind(|acc| source.into_either().map(|v| acc.append(v))),
        }
    }

    /// Joins a source computed from the `Right` payloads joined so far.
    ///
    /// `f` is not invoked once the query holds a `Left`.
    #[inline]
    pub fn and_with<S, F>(self, f: F) -> EitherQuery<L, T::Output>
    where
        S: IntoEither<L>,
        F: FnOnce(&T) -> S,
        T: Append<S::Right>,
    {
        EitherQuery {
            acc: self
                .acc
                .bind(|acc| f(&acc).into_either().map(|v| acc.append(v))),
        }
    }

    /// Turns the joined payloads into `Left(reject(&payloads))` unless `predicate` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::{either::Either, query::EitherQuery};
    /// let q = EitherQuery::new(Either::<String, i32>::right(3))
    ///     .and(Either::right(4))
    ///     .ensure(|(a, b)| a < b, |_| "not ascending".to_string())
    ///     .select(|(a, b)| a + b);
    /// assert_eq!(q, Either::right(7));
    /// ```
    #[inline]
    pub fn ensure<P, R>(self, predicate: P, reject: R) -> Self
    where
        P: FnOnce(&T) -> bool,
        R: FnOnce(&T) -> L,
    {
        Self {
            acc: self.acc.bind(|t| {
                if predicate(&t) {
                    Either::right(t)
                } else {
                    Either::left(reject(&t))
                }
            }),
        }
    }

    /// Combines the joined payloads. `combine` is not invoked if any source was a `Left`.
    #[inline]
    pub fn select<R, F>(self, combine: F) -> Either<L, R>
    where
        F: FnOnce(T) -> R,
    {
        self.into_either().map(combine)
    }

    /// Combines the joined payloads with a function that may itself fail.
    #[inline]
    pub fn select_many<S, F>(self, combine: F) -> Either<L, S::Right>
    where
        S: IntoEither<L>,
        F: FnOnce(T) -> S,
    {
        self.into_either().bind(|t| combine(t).into_either())
    }

    /// Returns the joined payloads as one tuple, or the first `Left`.
    #[inline]
    pub fn into_either(self) -> Either<L, T> {
        if self.acc.has_left() {
            trace_event!(target: "choice_core::query", "either query short-circuited");
        }
        self.acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, PartialEq)]
    struct Person {
        name: &'static str,
        address: &'static str,
        number: u32,
        zip: u32,
    }

    #[test]
    fn test_append_flattens() {
        assert_eq!((1,).append("a"), (1, "a"));
        assert_eq!((1, 2, 3).append(4), (1, 2, 3, 4));
    }

    #[test]
    fn test_maybe_query_all_present() {
        let person = MaybeQuery::new(Maybe::of("name"))
            .and(Maybe::of("address"))
            .and(Maybe::of(134))
            .and(Maybe::of(98101))
            .select(|(name, address, number, zip)| Person {
                name,
                address,
                number,
                zip,
            });

        assert!(person.has_value());
        assert_eq!(person.as_ref().map(|p| p.name), Maybe::of("name"));
        assert_eq!(person.as_ref().map(|p| p.address), Maybe::of("address"));
        assert_eq!(person.as_ref().map(|p| p.number), Maybe::of(134));
        assert_eq!(person.as_ref().map(|p| p.zip), Maybe::of(98101));
    }

    #[test]
    fn test_maybe_query_third_absent_skips_combiner() {
        let calls = Cell::new(0);
        let person = MaybeQuery::new(Maybe::of("name"))
            .and(Maybe::of("address"))
            .and(Maybe::<u32>::empty())
            .and(Maybe::of(98101_u32))
            .select(|(name, address, number, zip)| {
                calls.set(calls.get() + 1);
                Person {
                    name,
                    address,
                    number,
                    zip,
                }
            });

        assert!(person.is_absent());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_maybe_query_lazy_sources_skipped() {
        let evaluated = Cell::new(0);
        let result = MaybeQuery::new(None::<i32>)
            .and_with(|_| {
                evaluated.set(evaluated.get() + 1);
                Some(1)
            })
            .select(|(a, b)| a + b);

        assert!(result.is_absent());
        assert_eq!(evaluated.get(), 0);
    }

    #[test]
    fn test_mixed_native_and_maybe_sources() {
        let some = MaybeQuery::new(Some('n'))
            .and(Maybe::of(7_u64))
            .and(Some(134))
            .and(Some(98101))
            .select(|t| t);
        assert_eq!(some, Maybe::of(('n', 7, 134, 98101)));

        let none = MaybeQuery::new(Some('n'))
            .and(Maybe::<u64>::empty())
            .and(Some(134))
            .select(|t| t);
        assert!(none.is_absent());

        let leading_null = MaybeQuery::new(None::<i32>).and(Some(1)).select(|t| t);
        assert!(leading_null.is_absent());
    }

    #[test]
    fn test_query_equals_nested_binds() {
        let (a, b, c) = (Maybe::of(1), Maybe::of(2), Maybe::of(3));
        let nested = a.bind(|x| b.bind(|y| c.map(|z| x + y + z)));
        let query = a.query().and(b).and(c).select(|(x, y, z)| x + y + z);
        assert_eq!(query, nested);
    }

    #[test]
    fn test_maybe_query_filter_and_select_many() {
        let even_sum = MaybeQuery::new(Maybe::of(2))
            .and(Maybe::of(4))
            .filter(|(a, b)| (a + b) % 2 == 0)
            .select_many(|(a, b)| Some(a + b));
        assert_eq!(even_sum, Maybe::of(6));

        let odd = MaybeQuery::new(Maybe::of(2))
            .and(Maybe::of(3))
            .filter(|(a, b)| (a + b) % 2 == 0)
            .into_maybe();
        assert!(odd.is_absent());
    }

    #[test]
    fn test_eight_sources() {
        let all = MaybeQuery::new(Maybe::of(1))
            .and(Some(2))
            .and(Some(3))
            .and(Some(4))
            .and(Some(5))
            .and(Some(6))
            .and(Some(7))
            .and(Some(8))
            .select(|(a, b, c, d, e, f, g, h)| a + b + c + d + e + f + g + h);
        assert_eq!(all, Maybe::of(36));
    }

    #[test]
    fn test_either_query_all_right() {
        let q = EitherQuery::new(Either::<&str, i32>::right(1))
            .and(Either::right("two"))
            .and(Ok::<f64, &str>(3.0))
            .select(|(a, b, c)| format!("{a}-{b}-{c}"));
        assert_eq!(q, Either::right("1-two-3".to_string()));
    }

    #[test]
    fn test_either_query_first_left_wins() {
        let calls = Cell::new(0);
        let q = EitherQuery::new(Either::<&str, i32>::right(1))
            .and(Either::<&str, i32>::left("first"))
            .and(Either::<&str, i32>::left("second"))
            .and_with(|_| {
                calls.set(calls.get() + 1);
                Either::<&str, i32>::right(4)
            })
            .select(|(a, b, c, d)| {
                calls.set(calls.get() + 1);
                a + b + c + d
            });

        assert_eq!(q, Either::left("first"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_either_query_ensure_rejects() {
        let q = EitherQuery::new(Either::<String, i32>::right(5))
            .and(Either::right(1))
            .ensure(|(a, b)| a < b, |(a, b)| format!("{a} >= {b}"))
            .select_many(|(a, b)| Either::<String, i32>::right(a - b));
        assert_eq!(q, Either::left("5 >= 1".to_string()));
    }
}
