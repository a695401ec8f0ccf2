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

//! # Optional Values
//!
//! `Maybe<T>` holds zero or one value of type `T`. It is a closed enum with
//! two variants, `Present(T)` and `Absent`, and is composed through `map`,
//! `bind`, `match_with` and friends instead of being inspected by hand.
//!
//! ## Collapsing Construction
//!
//! A `Present` never wraps a conceptually-absent payload. In Rust a bare `T`
//! cannot be null, so the only absent marker that can reach a constructor is
//! the native `Option::None`. Every entry point that accepts a native option
//! (`Maybe::from_native`, `From<Option<T>>`, `Maybe::map_native`, the
//! query builders) collapses `None` into `Absent`.
//!
//! ## Single Source of Truth
//!
//! [`Maybe::try_get`] and its owning twin [`Maybe::into_native`] are the only
//! places that look at the variant tag. Every other operation is expressed in
//! terms of those two and the constructors.
//!
//! ## Usage
//!
//! ```rust
//! use choice_core::maybe::Maybe;
//!
//! let m = Maybe::of(4).map(|x| x + 6).map(|x| x / 2);
//! assert_eq!(m.get_or_else(-1), 5);
//!
//! let none: Maybe<i32> = Maybe::from(None);
//! assert!(none.is_absent());
//! assert_eq!(none.map(|x| x * 2).get_or_else(-1), -1);
//! ```

mod iter;

pub use iter::{IntoIter, Iter};

use crate::error::AbsentValueError;
use crate::macros::trace_event;
use crate::native::IntoMaybe;
use crate::query::MaybeQuery;
use std::any::Any;
use std::borrow::Cow;

/// A value that may be absent.
///
/// Ordering places `Absent` before any `Present` value; two present values
/// compare by payload.
///
/// # Examples
///
/// ```rust
/// # use choice_core::maybe::Maybe;
/// assert_eq!(Maybe::of(5), Maybe::of(5));
/// assert_ne!(Maybe::of(5), Maybe::of(4));
/// assert_ne!(Maybe::of(5), Maybe::empty());
/// assert_eq!(Maybe::<i32>::empty(), Maybe::empty());
/// assert!(Maybe::empty() < Maybe::of(i32::MIN));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value.
    Absent,
    /// Exactly one value.
    Present(T),
}

impl<T> Maybe<T> {
    /// The absent value. Stateless, so one constant serves every use.
    pub const ABSENT: Self = Maybe::Absent;

    /// Wraps `value` as `Present`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::maybe::Maybe;
    /// let m = Maybe::of("name");
    /// assert!(m.has_value());
    /// ```
    #[inline(always)]
    pub const fn of(value: T) -> Self {
        Maybe::Present(value)
    }

    /// Returns the absent value.
    #[inline(always)]
    pub const fn empty() -> Self {
        Self::ABSENT
    }

    /// Builds a `Maybe` from a native option, collapsing `None` to `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::maybe::Maybe;
    /// assert_eq!(Maybe::from_native(Some(3)), Maybe::of(3));
    /// assert_eq!(Maybe::<i32>::from_native(None), Maybe::empty());
    /// ```
    #[inline]
    pub fn from_native(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::of(v),
            None => Self::empty(),
        }
    }

    /// Returns `Present(value)` if `predicate` holds for `value`, otherwise `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::maybe::Maybe;
    /// assert_eq!(Maybe::from_predicate(4, |x| x % 2 == 0), Maybe::of(4));
    /// assert_eq!(Maybe::from_predicate(5, |x| x % 2 == 0), Maybe::empty());
    /// ```
    #[inline]
    pub fn from_predicate<P>(value: T, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) {
            Self::of(value)
        } else {
            Self::empty()
        }
    }

    /// Returns `true` if a value is present.
    #[inline(always)]
    pub fn has_value(&self) -> bool {
        self.try_get().is_some()
    }

    /// Returns `true` if no value is present.
    #[inline(always)]
    pub fn is_absent(&self) -> bool {
        !self.has_value()
    }

    /// Borrows the contained value, if any.
    ///
    /// This is the canonical inspection primitive: every borrowing query on
    /// `Maybe` is built from it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::maybe::Maybe;
    /// assert_eq!(Maybe::of(7).try_get(), Some(&7));
    /// assert_eq!(Maybe::<i32>::empty().try_get(), None);
    /// ```
    #[inline]
    pub fn try_get(&self) -> Option<&T> {
        match self {
            Maybe::Present(v) => Some(v),
            Maybe::Absent => None,
        }
    }

    /// Moves the contained value out into a native option.
    ///
    /// The owning counterpart of [`Maybe::try_get`]; every consuming
    /// combinator goes through it.
    #[inline]
    pub fn into_native(self) -> Option<T> {
        match self {
            Maybe::Present(v) => Some(v),
            Maybe::Absent => None,
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        Maybe::from_native(self.try_get())
    }

    /// Applies `f` to the contained value and wraps the result.
    ///
    /// `f` is not invoked when the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::maybe::Maybe;
    /// assert_eq!(Maybe::of(2).map(|x| x.to_string()), Maybe::of("2".to_string()));
    /// assert_eq!(Maybe::<i32>::empty().map(|x| x + 1), Maybe::empty());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.into_native() {
            Some(v) => Maybe::of(f(v)),
            None => Maybe::empty(),
        }
    }

    /// Applies `f` and collapses a `None` result to `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::maybe::Maybe;
    /// let half = |x: i32| if x % 2 == 0 { Some(x / 2) } else { None };
    /// assert_eq!(Maybe::of(8).map_native(half), Maybe::of(4));
    /// assert_eq!(Maybe::of(7).map_native(half), Maybe::empty());
    /// ```
    #[inline]
    pub fn map_native<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.bind(|v| Maybe::from_native(f(v)))
    }

    /// Chains a computation that may itself produce no value.
    ///
    /// Returns `f(v)` unmodified when present. `f` is not invoked when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::maybe::Maybe;
    /// let parse = |s: &str| Maybe::from_native(s.parse::<i32>().ok());
    /// assert_eq!(Maybe::of("12").bind(parse), Maybe::of(12));
    /// assert_eq!(Maybe::of("x").bind(parse), Maybe::empty());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self.into_native() {
            Some(v) => f(v),
            None => Maybe::empty(),
        }
    }

    /// Binds a second source derived from the first and combines both payloads.
    ///
    /// Equivalent to `self.bind(|x| f(&x).map(|y| combine(x, y)))`. The second
    /// source may be a `Maybe` or a native `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::maybe::Maybe;
    /// let pair = Maybe::of(3).bind_with(|x| Some(x * 10), |x, y| (x, y));
    /// assert_eq!(pair, Maybe::of((3, 30)));
    /// ```
    #[inline]
    pub fn bind_with<S, R, F, C>(self, f: F, combine: C) -> Maybe<R>
    where
        S: IntoMaybe,
        F: FnOnce(&T) -> S,
        C: FnOnce(T, S::Item) -> R,
    {
        self.bind(|x| f(&x).into_maybe().map(|y| combine(x, y)))
    }

    /// Dispatches to exactly one of the two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::maybe::Maybe;
    /// let describe = |m: Maybe<i32>| m.match_with(|v| format!("got {}", v), || "nothing".into());
    /// assert_eq!(describe(Maybe::of(1)), "got 1");
    /// assert_eq!(describe(Maybe::empty()), "nothing");
    /// ```
    #[inline]
    pub fn match_with<R, P, A>(self, on_present: P, on_absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        match self.into_native() {
            Some(v) => on_present(v),
            None => on_absent(),
        }
    }

    /// Runs exactly one of the two side-effecting actions.
    #[inline]
    pub fn visit<P, A>(&self, on_present: P, on_absent: A)
    where
        P: FnOnce(&T),
        A: FnOnce(),
    {
        match self.try_get() {
            Some(v) => on_present(v),
            None => on_absent(),
        }
    }

    /// Runs `action` on the value if present, then returns `self` for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::maybe::Maybe;
    /// let mut seen = Vec::new();
    /// let m = Maybe::of(3).if_present(|v| seen.push(*v)).if_absent(|| seen.push(0));
    /// assert_eq!(m, Maybe::of(3));
    /// assert_eq!(seen, [3]);
    /// ```
    #[inline]
    pub fn if_present<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(v) = self.try_get() {
            action(v);
        }
        self
    }

    /// Runs `action` if no value is present, then returns `self` for chaining.
    #[inline]
    pub fn if_absent<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_absent() {
            action();
        }
        self
    }

    /// Returns the value or `fallback`.
    #[inline]
    pub fn get_or_else(self, fallback: T) -> T {
        self.into_native().unwrap_or(fallback)
    }

    /// Returns the value or the result of `fallback`. `fallback` only runs when absent.
    #[inline]
    pub fn get_or_else_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.into_native().unwrap_or_else(fallback)
    }

    /// Returns the value or the caller-supplied `error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::maybe::Maybe;
    /// assert_eq!(Maybe::of(1).get_or_fail("missing"), Ok(1));
    /// assert_eq!(Maybe::<i32>::empty().get_or_fail("missing"), Err("missing"));
    /// ```
    #[inline]
    pub fn get_or_fail<E>(self, error: E) -> Result<T, E> {
        self.get_or_fail_with(|| error)
    }

    /// Returns the value or the error produced by `error`. `error` only runs when absent.
    #[inline]
    pub fn get_or_fail_with<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self.into_native() {
            Some(v) => Ok(v),
            None => {
                trace_event!(
                    target: "choice_core::maybe",
                    payload = std::any::type_name::<T>(),
                    "required value is absent"
                );
                Err(error())
            }
        }
    }

    /// Returns the value or an [`AbsentValueError`] with the default message.
    #[inline]
    pub fn get_value(self) -> Result<T, AbsentValueError> {
        self.get_or_fail_with(AbsentValueError::default)
    }

    /// Returns the value or an [`AbsentValueError`] carrying `message`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::maybe::Maybe;
    /// let err = Maybe::<u8>::empty().get_value_or("port not configured").unwrap_err();
    /// assert_eq!(err.to_string(), "port not configured");
    /// ```
    #[inline]
    pub fn get_value_or<M>(self, message: M) -> Result<T, AbsentValueError>
    where
        M: Into<Cow<'static, str>>,
    {
        self.get_or_fail_with(|| AbsentValueError::new(message))
    }

    /// Keeps the value only if `predicate` holds for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::maybe::Maybe;
    /// assert_eq!(Maybe::of(4).filter(|x| *x > 3), Maybe::of(4));
    /// assert_eq!(Maybe::of(2).filter(|x| *x > 3), Maybe::empty());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.bind(|v| Maybe::from_predicate(v, predicate))
    }

    /// Returns `self` if present, otherwise evaluates `other`.
    ///
    /// `other` is not evaluated when a value is present.
    #[inline]
    pub fn or_else<F>(self, other: F) -> Self
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self.into_native() {
            Some(v) => Maybe::of(v),
            None => other(),
        }
    }

    /// Returns `self` if present, otherwise `other`.
    #[inline]
    pub fn or(self, other: Maybe<T>) -> Self {
        self.or_else(|| other)
    }

    /// Returns `true` if a value is present and equal to `item`.
    #[inline]
    pub fn equals_to(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.try_get().is_some_and(|v| v == item)
    }

    /// Pairs two present values. Absent if either side is absent.
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        self.bind(|x| other.map(|y| (x, y)))
    }

    /// Returns an iterator over the zero or one contained values.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.try_get())
    }

    /// Starts a sequential-binding query with `self` as the first source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::maybe::Maybe;
    /// let sum = Maybe::of(1).query().and(Some(2)).and(Maybe::of(3)).select(|(a, b, c)| a + b + c);
    /// assert_eq!(sum, Maybe::of(6));
    /// ```
    #[inline]
    pub fn query(self) -> MaybeQuery<(T,)> {
        MaybeQuery::new(self)
    }
}

impl<T> Maybe<T>
where
    T: Any,
{
    /// Keeps the value only if its concrete type is `U`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::maybe::Maybe;
    /// assert_eq!(Maybe::of(5_u32).of_type::<u32>(), Maybe::of(5_u32));
    /// assert_eq!(Maybe::of(5_u32).of_type::<i64>(), Maybe::empty());
    /// ```
    pub fn of_type<U>(self) -> Maybe<U>
    where
        U: Any,
    {
        self.bind(|v| {
            let mut slot = Some(v);
            match (&mut slot as &mut dyn Any).downcast_mut::<Option<U>>() {
                Some(matched) => Maybe::from_native(matched.take()),
                None => Maybe::empty(),
            }
        })
    }

    /// Builds a `Maybe<T>` from a type-erased value, present only if it is a `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::maybe::Maybe;
    /// # use std::any::Any;
    /// let erased: Box<dyn Any> = Box::new(String::from("text"));
    /// assert_eq!(Maybe::<String>::from_type_check(erased), Maybe::of("text".to_string()));
    ///
    /// let erased: Box<dyn Any> = Box::new(1.5_f64);
    /// assert!(Maybe::<String>::from_type_check(erased).is_absent());
    /// ```
    pub fn from_type_check(value: Box<dyn Any>) -> Self {
        Maybe::from_native(value.downcast::<T>().ok().map(|boxed| *boxed))
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting. Equivalent to `bind(identity)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::maybe::Maybe;
    /// assert_eq!(Maybe::of(Maybe::of(1)).flatten(), Maybe::of(1));
    /// assert_eq!(Maybe::of(Maybe::<i32>::empty()).flatten(), Maybe::empty());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.bind(std::convert::identity)
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> std::fmt::Display for Maybe<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.try_get() {
            Some(v) => write!(f, "{}", v),
            None => write!(f, "Absent"),
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.into_native())
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects into `Present(collection)` only if every element is present.
///
/// Stops consuming the source at the first absent element.
///
/// # Examples
///
/// ```rust
/// # use choice_core::maybe::Maybe;
/// let all: Maybe<Vec<i32>> = vec![Maybe::of(1), Maybe::of(2)].into_iter().collect();
/// assert_eq!(all, Maybe::of(vec![1, 2]));
///
/// let gap: Maybe<Vec<i32>> = vec![Maybe::of(1), Maybe::empty()].into_iter().collect();
/// assert!(gap.is_absent());
/// ```
impl<A, V> FromIterator<Maybe<A>> for Maybe<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Maybe<A>>,
    {
        Maybe::from_native(iter.into_iter().map(Maybe::into_native).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use std::cell::{Cell, RefCell};

    fn sample(rng: &mut StdRng) -> Maybe<i64> {
        if rng.random_bool(0.25) {
            Maybe::empty()
        } else {
            Maybe::of(rng.random_range(-1_000..1_000))
        }
    }

    fn halve(x: i64) -> Maybe<i64> {
        Maybe::from_predicate(x, |v| v % 2 == 0).map(|v| v / 2)
    }

    fn positive(x: i64) -> Maybe<i64> {
        Maybe::from_predicate(x, |v| *v > 0)
    }

    #[test]
    fn test_construction() {
        let present = Maybe::of(4);
        assert!(present.has_value());
        assert!(!present.is_absent());
        assert_eq!(present.get_or_else(-1), 4);

        let absent: Maybe<i32> = Maybe::empty();
        assert!(absent.is_absent());
        assert_eq!(absent, Maybe::ABSENT);
        assert_eq!(absent, Maybe::default());
    }

    #[test]
    fn test_collapsing_constructor() {
        let absent_marker = |_: i32| -> Option<i32> { None };

        assert_eq!(Maybe::from_native(absent_marker(3)), Maybe::empty());
        assert_eq!(Maybe::of(3).map_native(absent_marker), Maybe::empty());
        assert_eq!(Maybe::from(None::<i32>), Maybe::empty());
        assert_eq!(Maybe::from(Some(3)), Maybe::of(3));
    }

    #[test]
    fn test_left_identity() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let x: i64 = rng.random_range(-1_000..1_000);
            assert_eq!(Maybe::of(x).bind(halve), halve(x));
        }
    }

    #[test]
    fn test_right_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let m = sample(&mut rng);
            assert_eq!(m.bind(Maybe::of), m);
        }
    }

    #[test]
    fn test_associativity() {
        let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
        for _ in 0..500 {
            let m = sample(&mut rng);
            assert_eq!(m.bind(halve).bind(positive), m.bind(|x| halve(x).bind(positive)));
        }
    }

    #[test]
    fn test_map_via_bind() {
        let mut rng = StdRng::seed_from_u64(12345);
        let f = |x: i64| x * 3 - 1;
        for _ in 0..500 {
            let m = sample(&mut rng);
            assert_eq!(m.map(f), m.bind(|x| Maybe::of(f(x))));
        }
    }

    #[test]
    fn test_absent_bind_does_not_invoke() {
        let calls = Cell::new(0);
        let absent: Maybe<i32> = Maybe::empty();

        let result = absent.bind(|x| {
            calls.set(calls.get() + 1);
            Maybe::of(x)
        });
        let mapped = absent.map(|x| {
            calls.set(calls.get() + 1);
            x
        });

        assert!(result.is_absent());
        assert!(mapped.is_absent());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_bind_returns_result_unmodified() {
        assert_eq!(Maybe::of(3).bind(|_| Maybe::<i32>::empty()), Maybe::empty());
        assert_eq!(Maybe::of(3).bind(|x| Maybe::of(x * 2)), Maybe::of(6));
    }

    #[test]
    fn test_bind_with_mixed_sources() {
        let native = Maybe::of(2).bind_with(|x| Some(x + 1), |x, y| x * y);
        assert_eq!(native, Maybe::of(6));

        let absent = Maybe::of(2).bind_with(|_| Maybe::<i32>::empty(), |x, y| x * y);
        assert!(absent.is_absent());
    }

    #[test]
    fn test_match_with_runs_one_branch() {
        let present = Cell::new(0);
        let absent = Cell::new(0);

        let r = Maybe::of(10).match_with(
            |v| {
                present.set(present.get() + 1);
                v
            },
            || {
                absent.set(absent.get() + 1);
                0
            },
        );
        assert_eq!(r, 10);
        assert_eq!((present.get(), absent.get()), (1, 0));

        let r = Maybe::<i32>::empty().match_with(|v| v, || -1);
        assert_eq!(r, -1);
    }

    #[test]
    fn test_visit_and_if_present() {
        let log = RefCell::new(Vec::new());
        Maybe::of(1).visit(|v| log.borrow_mut().push(*v), || log.borrow_mut().push(-1));
        Maybe::<i32>::empty().visit(|v| log.borrow_mut().push(*v), || log.borrow_mut().push(-1));
        assert_eq!(*log.borrow(), [1, -1]);

        let hits = Cell::new(0);
        let m = Maybe::<i32>::empty()
            .if_present(|_| hits.set(hits.get() + 1))
            .if_absent(|| hits.set(hits.get() + 10));
        assert!(m.is_absent());
        assert_eq!(hits.get(), 10);
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(Maybe::of(1).get_or_else(2), 1);
        assert_eq!(Maybe::empty().get_or_else(2), 2);

        let called = Cell::new(false);
        assert_eq!(
            Maybe::of(1).get_or_else_with(|| {
                called.set(true);
                2
            }),
            1
        );
        assert!(!called.get());
        assert_eq!(Maybe::<i32>::empty().get_or_else_with(|| 9), 9);
    }

    #[test]
    fn test_get_or_fail() {
        #[derive(Debug, PartialEq)]
        struct Missing(&'static str);

        assert_eq!(Maybe::of(3).get_or_fail(Missing("x")), Ok(3));
        assert_eq!(
            Maybe::<i32>::empty().get_or_fail(Missing("x")),
            Err(Missing("x"))
        );
        assert_eq!(
            Maybe::<i32>::empty().get_or_fail_with(|| Missing("y")),
            Err(Missing("y"))
        );
    }

    #[test]
    fn test_get_value() {
        assert_eq!(Maybe::of("a").get_value(), Ok("a"));
        assert_eq!(
            Maybe::<&str>::empty().get_value(),
            Err(AbsentValueError::default())
        );
        let err = Maybe::<&str>::empty().get_value_or("no user").unwrap_err();
        assert_eq!(err.message(), "no user");
    }

    #[test]
    fn test_filter() {
        assert_eq!(Maybe::of(5).filter(|x| *x == 5), Maybe::of(5));
        assert_eq!(Maybe::of(5).filter(|x| *x == 4), Maybe::empty());
        assert_eq!(Maybe::<i32>::empty().filter(|_| true), Maybe::empty());
    }

    #[test]
    fn test_or_else_short_circuits() {
        let evaluated = Cell::new(false);
        let m = Maybe::of(1).or_else(|| {
            evaluated.set(true);
            Maybe::of(2)
        });
        assert_eq!(m, Maybe::of(1));
        assert!(!evaluated.get());

        assert_eq!(Maybe::empty().or_else(|| Maybe::of(2)), Maybe::of(2));
        assert_eq!(Maybe::<i32>::empty().or_else(Maybe::empty), Maybe::empty());
        assert_eq!(Maybe::empty().or(Maybe::of(3)), Maybe::of(3));
    }

    #[test]
    fn test_equality() {
        assert_eq!(Maybe::of(5), Maybe::of(5));
        assert_ne!(Maybe::of(5), Maybe::of(4));
        assert_ne!(Maybe::of(5), Maybe::empty());
        assert_eq!(Maybe::<i32>::empty(), Maybe::empty());

        assert!(Maybe::of(5).equals_to(&5));
        assert!(!Maybe::of(5).equals_to(&4));
        assert!(!Maybe::empty().equals_to(&5));
    }

    #[test]
    fn test_ordering() {
        let mut values = vec![Maybe::of(3), Maybe::empty(), Maybe::of(1)];
        values.sort();
        assert_eq!(values, [Maybe::empty(), Maybe::of(1), Maybe::of(3)]);
    }

    #[test]
    fn test_of_type() {
        assert_eq!(Maybe::of("s").of_type::<&str>(), Maybe::of("s"));
        assert_eq!(Maybe::of("s").of_type::<String>(), Maybe::empty());
        assert_eq!(Maybe::<u8>::empty().of_type::<u8>(), Maybe::empty());

        let erased: Box<dyn Any> = Box::new(7_i32);
        assert_eq!(Maybe::<i32>::from_type_check(erased), Maybe::of(7));
    }

    #[test]
    fn test_flatten_matches_bind_identity() {
        let nested = [
            Maybe::of(Maybe::of(1)),
            Maybe::of(Maybe::empty()),
            Maybe::empty(),
        ];
        for m in nested {
            assert_eq!(m.flatten(), m.bind(|inner| inner));
        }
    }

    #[test]
    fn test_zip() {
        assert_eq!(Maybe::of(1).zip(Maybe::of("a")), Maybe::of((1, "a")));
        assert!(Maybe::of(1).zip(Maybe::<u8>::empty()).is_absent());
    }

    #[test]
    fn test_collect() {
        let all: Maybe<Vec<i32>> = (1..=3).map(Maybe::of).collect();
        assert_eq!(all, Maybe::of(vec![1, 2, 3]));

        let pulled = Cell::new(0);
        let gap: Maybe<Vec<i32>> = [Maybe::of(1), Maybe::empty(), Maybe::of(3)]
            .into_iter()
            .inspect(|_| pulled.set(pulled.get() + 1))
            .collect();
        assert!(gap.is_absent());
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Maybe::of(5)), "5");
        assert_eq!(format!("{}", Maybe::<i32>::empty()), "Absent");
        assert_eq!(format!("{:?}", Maybe::of(5)), "Present(5)");
    }

    #[test]
    fn test_as_ref_keeps_original() {
        let m = Maybe::of(String::from("owned"));
        let len = m.as_ref().map(|s| s.len());
        assert_eq!(len, Maybe::of(5));
        assert_eq!(m, Maybe::of("owned".to_string()));
    }
}
