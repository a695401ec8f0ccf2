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

//! # Binary Union
//!
//! `Either<L, R>` holds exactly one of two values. By convention `Right` is
//! the success channel and `Left` carries the failure, so `map` and `bind`
//! act on `Right` and let a `Left` pass through untouched.
//!
//! Construction is explicit (`Either::left`, `Either::right`, or the free
//! functions [`left`] and [`right`]), which keeps the branch unambiguous even
//! when `L` and `R` are the same type.
//!
//! ## Usage
//!
//! ```rust
//! use choice_core::either::Either;
//!
//! fn parse(candidate: &str) -> Either<String, i32> {
//!     match candidate.parse::<i32>() {
//!         Ok(v) => Either::right(v),
//!         Err(_) => Either::left(format!("Cannot parse string {}", candidate)),
//!     }
//! }
//!
//! let doubled = parse("21").map(|x| x * 2);
//! assert_eq!(doubled, Either::right(42));
//! assert_eq!(parse("x").map(|x| x * 2), Either::left("Cannot parse string x".to_string()));
//! ```
//!
//! Sequences of unions are combined with [`traverse`] and [`sequence`], which
//! stop at the first `Left`.

use crate::macros::debug_event;
use crate::maybe::Maybe;
use crate::query::EitherQuery;

/// A value that is either a `Left(L)` or a `Right(R)`.
///
/// Equality, ordering and hashing are structural: branch first, then payload.
///
/// # Examples
///
/// ```rust
/// # use choice_core::either::Either;
/// let e: Either<String, i32> = Either::right(3);
/// assert!(e.has_right());
/// assert!(!e.has_left());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The failure (or first) branch.
    Left(L),
    /// The success (or second) branch.
    Right(R),
}

/// Creates a `Left` value.
#[inline(always)]
pub const fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Creates a `Right` value.
#[inline(always)]
pub const fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

impl<L, R> Either<L, R> {
    /// Creates a `Left` value.
    #[inline(always)]
    pub const fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Creates a `Right` value.
    #[inline(always)]
    pub const fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// Returns `true` if this is a `Left`.
    #[inline]
    pub const fn has_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a `Right`.
    #[inline]
    pub const fn has_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Borrows the `Left` payload, or the `Right` payload as the error.
    ///
    /// Both outcomes carry the live payload, so the full state is available
    /// from a single call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::either::Either;
    /// let e: Either<&str, i32> = Either::left("bad");
    /// assert_eq!(e.try_get_left(), Ok(&"bad"));
    /// assert_eq!(e.try_get_right(), Err(&"bad"));
    /// ```
    #[inline]
    pub fn try_get_left(&self) -> Result<&L, &R> {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(r) => Err(r),
        }
    }

    /// Borrows the `Right` payload, or the `Left` payload as the error.
    #[inline]
    pub fn try_get_right(&self) -> Result<&R, &L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }

    /// Borrows the `Left` payload as a `Maybe`.
    #[inline]
    pub fn left_value(&self) -> Maybe<&L> {
        Maybe::from_native(self.try_get_left().ok())
    }

    /// Borrows the `Right` payload as a `Maybe`.
    #[inline]
    pub fn right_value(&self) -> Maybe<&R> {
        Maybe::from_native(self.try_get_right().ok())
    }

    /// Converts from `&Either<L, R>` to `Either<&L, &R>`.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Converts into a `Result` with `Right` as `Ok` and `Left` as `Err`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }

    /// Transforms the `Right` payload. A `Left` passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::either::Either;
    /// let e = Either::<String, i32>::right(3).map(|x| x + 5).map(|x| x / 2);
    /// assert_eq!(e.get_right_or_else(-1), 4);
    /// ```
    #[inline]
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Transforms the `Left` payload. A `Right` passes through unchanged.
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transforms whichever payload is live.
    #[inline]
    pub fn map_both<L2, R2, FL, FR>(self, on_left: FL, on_right: FR) -> Either<L2, R2>
    where
        FL: FnOnce(L) -> L2,
        FR: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(on_left(l)),
            Either::Right(r) => Either::Right(on_right(r)),
        }
    }

    /// Chains a computation on the `Right` payload.
    ///
    /// A `Left` short-circuits and `f` is not invoked.
    #[inline]
    pub fn bind<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    /// Chains a recovery computation on the `Left` payload.
    ///
    /// A `Right` short-circuits and `f` is not invoked.
    #[inline]
    pub fn bind_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Either<L2, R>,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Binds a second source derived from the `Right` payload and combines both.
    ///
    /// Equivalent to `self.bind(|x| f(&x).map(|y| combine(x, y)))`.
    #[inline]
    pub fn bind_with<S, R3, F, C>(self, f: F, combine: C) -> Either<L, R3>
    where
        S: IntoEither<L>,
        F: FnOnce(&R) -> S,
        C: FnOnce(R, S::Right) -> R3,
    {
        self.bind(|x| f(&x).into_either().map(|y| combine(x, y)))
    }

    /// Dispatches to exactly one of the two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::either::Either;
    /// let to_string = |e: Either<u32, u8>| e.match_with(|u| u.to_string(), |b| b.to_string());
    /// assert_eq!(to_string(Either::left(3)), "3");
    /// assert_eq!(to_string(Either::right(4)), "4");
    /// ```
    #[inline]
    pub fn match_with<T, FL, FR>(self, on_left: FL, on_right: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Runs `action` on the `Left` payload if present, then returns `self`.
    #[inline]
    pub fn if_left<F>(self, action: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Either::Left(l) = &self {
            action(l);
        }
        self
    }

    /// Runs `action` on the `Right` payload if present, then returns `self`.
    #[inline]
    pub fn if_right<F>(self, action: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Either::Right(r) = &self {
            action(r);
        }
        self
    }

    /// Returns the `Right` payload or `fallback`.
    #[inline]
    pub fn get_right_or_else(self, fallback: R) -> R {
        self.get_right_or_else_with(|_| fallback)
    }

    /// Returns the `Right` payload or computes one from the `Left` payload.
    #[inline]
    pub fn get_right_or_else_with<F>(self, fallback: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        self.match_with(fallback, std::convert::identity)
    }

    /// Returns the `Left` payload or `fallback`.
    #[inline]
    pub fn get_left_or_else(self, fallback: L) -> L {
        self.match_with(std::convert::identity, |_| fallback)
    }

    /// Returns the `Right` payload or the error built from the `Left` payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::either::Either;
    /// let e: Either<&str, i32> = Either::left("boom");
    /// assert_eq!(e.get_right_or_fail(|l| l.len()), Err(4));
    /// ```
    #[inline]
    pub fn get_right_or_fail<E, F>(self, left_to_error: F) -> Result<R, E>
    where
        F: FnOnce(L) -> E,
    {
        self.into_result().map_err(left_to_error)
    }

    /// Returns the `Left` payload or the error built from the `Right` payload.
    #[inline]
    pub fn get_left_or_fail<E, F>(self, right_to_error: F) -> Result<L, E>
    where
        F: FnOnce(R) -> E,
    {
        self.swap().into_result().map_err(right_to_error)
    }

    /// Drops the `Left` payload: `Right(r)` becomes `Present(r)`, `Left` becomes `Absent`.
    #[inline]
    pub fn to_maybe(self) -> Maybe<R> {
        Maybe::from_native(self.into_result().ok())
    }

    /// Drops the `Right` payload: `Left(l)` becomes `Present(l)`, `Right` becomes `Absent`.
    #[inline]
    pub fn left_to_maybe(self) -> Maybe<L> {
        self.swap().to_maybe()
    }

    /// Exchanges the branches.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// Starts a sequential-binding query with `self` as the first source.
    #[inline]
    pub fn query(self) -> EitherQuery<L, (R,)> {
        EitherQuery::new(self)
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Removes one level of nesting on the `Right` branch.
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        self.bind(std::convert::identity)
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(value: Result<R, L>) -> Self {
        match value {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(value: Either<L, R>) -> Self {
        value.into_result()
    }
}

/// A source that can be turned into an `Either` with left type `L`.
///
/// Implemented for `Either<L, R>` and `Result<R, L>`.
pub trait IntoEither<L> {
    /// The payload of the `Right` branch.
    type Right;

    /// Converts `self` into an `Either`.
    fn into_either(self) -> Either<L, Self::Right>;
}

impl<L, R> IntoEither<L> for Either<L, R> {
    type Right = R;

    #[inline(always)]
    fn into_either(self) -> Either<L, R> {
        self
    }
}

impl<L, R> IntoEither<L> for Result<R, L> {
    type Right = R;

    #[inline(always)]
    fn into_either(self) -> Either<L, R> {
        Either::from(self)
    }
}

/// Maps every element through `f` and collects the `Right` payloads.
///
/// Returns the first `Left` produced; elements after it are not visited and
/// `f` is not invoked for them. Errors are not accumulated.
///
/// # Examples
///
/// ```rust
/// # use choice_core::either::{self, Either};
/// let halves = either::traverse([2, 4, 6], |x| {
///     if x % 2 == 0 { Either::right(x / 2) } else { Either::left(x) }
/// });
/// assert_eq!(halves, Either::<i32, Vec<i32>>::right(vec![1, 2, 3]));
/// ```
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn traverse<I, L, R, F>(items: I, mut f: F) -> Either<L, Vec<R>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Either<L, R>,
{
    let iter = items.into_iter();
    let mut collected = Vec::with_capacity(iter.size_hint().0);
    for (index, item) in iter.enumerate() {
        match f(item) {
            Either::Right(r) => collected.push(r),
            Either::Left(l) => {
                debug_event!(
                    target: "choice_core::either",
                    index,
                    "traversal stopped at first left"
                );
                return Either::Left(l);
            }
        }
    }
    Either::Right(collected)
}

/// Collects a sequence of unions into `Right(Vec)` or the first `Left`.
///
/// Equivalent to `traverse(items, identity)`.
#[inline]
pub fn sequence<I, L, R>(items: I) -> Either<L, Vec<R>>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    traverse(items, std::convert::identity)
}

/// Collects into `Right(collection)` or the first `Left`.
impl<L, R, V> FromIterator<Either<L, R>> for Either<L, V>
where
    V: FromIterator<R>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Either<L, R>>,
    {
        iter.into_iter()
            .map(Either::into_result)
            .collect::<Result<V, L>>()
            .into()
    }
}
