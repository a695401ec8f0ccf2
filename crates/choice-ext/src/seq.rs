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

//! # Sequence Utilities
//!
//! Turns "pick from a sequence" operations into `Maybe` results. None of
//! these functions panic on empty input; an empty sequence is simply absent.
//!
//! ```rust
//! use choice_core::maybe::Maybe;
//! use choice_ext::seq::{present_items, try_single};
//!
//! assert_eq!(try_single([7]), Maybe::of(7));
//! assert!(try_single([7, 8]).is_absent());
//!
//! let kept: Vec<i32> = present_items([Maybe::of(1), Maybe::empty(), Maybe::of(3)]).collect();
//! assert_eq!(kept, [1, 3]);
//! ```

use crate::macros::debug_event;
use choice_core::maybe::Maybe;
use choice_core::native::IntoMaybe;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Returns the only element of `items`.
///
/// Absent when the sequence is empty or holds more than one element. At most
/// two elements are pulled from the iterator.
pub fn try_single<I>(items: I) -> Maybe<I::Item>
where
    I: IntoIterator,
{
    let mut iter = items.into_iter();
    match (iter.next(), iter.next()) {
        (Some(only), None) => Maybe::of(only),
        (Some(_), Some(_)) => {
            debug_event!(
                target: "choice_ext::seq",
                "expected a single element, found more"
            );
            Maybe::empty()
        }
        _ => Maybe::empty(),
    }
}

/// Returns the first element of `items`, absent when the sequence is empty.
#[inline]
pub fn try_first<I>(items: I) -> Maybe<I::Item>
where
    I: IntoIterator,
{
    Maybe::from_native(items.into_iter().next())
}

/// Returns the first element of `items` for which `predicate` holds.
///
/// # Examples
///
/// ```rust
/// # use choice_core::maybe::Maybe;
/// # use choice_ext::seq::try_first_where;
/// assert_eq!(try_first_where([1, 4, 6], |x| x % 2 == 0), Maybe::of(4));
/// assert!(try_first_where([1, 3], |x| x % 2 == 0).is_absent());
/// ```
#[inline]
pub fn try_first_where<I, P>(items: I, mut predicate: P) -> Maybe<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    Maybe::from_native(items.into_iter().find(|item| predicate(item)))
}

/// Yields the payloads of the present sources, in order, skipping absent ones.
///
/// Accepts `Maybe` values and native `Option` values alike.
#[inline]
pub fn present_items<I>(items: I) -> impl Iterator<Item = <I::Item as IntoMaybe>::Item>
where
    I: IntoIterator,
    I::Item: IntoMaybe,
{
    items.into_iter().flat_map(IntoMaybe::into_maybe)
}

/// Selects a collection from `maybe`.
///
/// Returns `C::default()` when `maybe` is absent or the selected collection
/// is empty, so callers can iterate the result unconditionally.
///
/// # Examples
///
/// ```rust
/// # use choice_core::maybe::Maybe;
/// # use choice_ext::seq::select_all;
/// struct Order {
///     lines: Vec<&'static str>,
/// }
///
/// let order = Maybe::of(Order { lines: vec!["apple", "pear"] });
/// assert_eq!(select_all(order, |o| o.lines), ["apple", "pear"]);
///
/// let none: Maybe<Order> = Maybe::empty();
/// assert!(select_all(none, |o| o.lines).is_empty());
/// ```
pub fn select_all<T, C, F>(maybe: Maybe<T>, selector: F) -> C
where
    F: FnOnce(T) -> C,
    C: NullOrEmpty + Default,
{
    maybe
        .map(selector)
        .filter(|c| !c.null_or_empty())
        .get_or_else_with(C::default)
}

/// Reports whether a value holds nothing worth reading.
///
/// Collections and strings are null-or-empty when they have no elements.
/// `Option` and `Maybe` wrappers are null-or-empty when absent or when the
/// wrapped value is.
pub trait NullOrEmpty {
    /// Returns `true` if there is no value or the value has no elements.
    fn null_or_empty(&self) -> bool;
}

macro_rules! impl_null_or_empty_by_is_empty {
    ($([$($g:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($g)*> NullOrEmpty for $ty {
                #[inline(always)]
                fn null_or_empty(&self) -> bool {
                    self.is_empty()
                }
            }
        )+
    };
}

impl_null_or_empty_by_is_empty!(
    [] str,
    [] String,
    [T] [T],
    [T, const N: usize] [T; N],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [K, V, S] HashMap<K, V, S>,
    [T, S] HashSet<T, S>,
    [K, V] BTreeMap<K, V>,
    [T] BTreeSet<T>,
);

impl<T> NullOrEmpty for &T
where
    T: NullOrEmpty + ?Sized,
{
    #[inline(always)]
    fn null_or_empty(&self) -> bool {
        (**self).null_or_empty()
    }
}

impl<T> NullOrEmpty for Option<T>
where
    T: NullOrEmpty,
{
    #[inline]
    fn null_or_empty(&self) -> bool {
        self.as_ref().is_none_or(NullOrEmpty::null_or_empty)
    }
}

impl<T> NullOrEmpty for Maybe<T>
where
    T: NullOrEmpty,
{
    #[inline]
    fn null_or_empty(&self) -> bool {
        self.try_get().is_none_or(NullOrEmpty::null_or_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::cell::Cell;

    #[test]
    fn test_try_single() {
        assert_eq!(try_single(vec![1]), Maybe::of(1));
        assert!(try_single(Vec::<i32>::new()).is_absent());
        assert!(try_single(vec![1, 2]).is_absent());
    }

    #[test]
    fn test_try_single_pulls_at_most_two() {
        let pulled = Cell::new(0);
        let items = (0..100).inspect(|_| pulled.set(pulled.get() + 1));
        assert!(try_single(items).is_absent());
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_try_first() {
        assert_eq!(try_first(["a", "b"]), Maybe::of("a"));
        assert!(try_first(Vec::<&str>::new()).is_absent());

        let v = vec![String::from("x")];
        assert_eq!(try_first(&v), Maybe::of(&String::from("x")));
    }

    #[test]
    fn test_try_first_where_matches_find() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let len = rng.random_range(0..20);
            let items: Vec<i32> = (0..len).map(|_| rng.random_range(-50..50)).collect();
            let threshold = rng.random_range(-50..50);

            let expected = items.iter().find(|x| **x > threshold).copied();
            let actual = try_first_where(items.iter().copied(), |x| *x > threshold);
            assert_eq!(actual.into_native(), expected);
        }
    }

    #[test]
    fn test_present_items_mixed_sources() {
        let maybes: Vec<i32> = present_items(vec![Maybe::empty(), Maybe::of(2)]).collect();
        assert_eq!(maybes, [2]);

        let natives: Vec<&str> = present_items([Some("a"), None, Some("c")]).collect();
        assert_eq!(natives, ["a", "c"]);

        assert_eq!(present_items(Vec::<Option<u8>>::new()).count(), 0);
    }

    #[test]
    fn test_select_all_empty_collection() {
        let empty: Maybe<Vec<i32>> = Maybe::of(Vec::new());
        let out: Vec<i32> = select_all(empty, |v| v);
        assert!(out.is_empty());

        let full = Maybe::of(vec![1, 2, 3]);
        assert_eq!(select_all(full, |v| v), [1, 2, 3]);
    }

    #[test]
    fn test_select_all_selector_not_invoked_when_absent() {
        let calls = Cell::new(0);
        let out: String = select_all(Maybe::<&str>::empty(), |s| {
            calls.set(calls.get() + 1);
            s.to_string()
        });
        assert!(out.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_null_or_empty() {
        assert!("".null_or_empty());
        assert!(!"x".null_or_empty());
        assert!(Vec::<u8>::new().null_or_empty());
        assert!(HashMap::<u8, u8>::new().null_or_empty());
        assert!(!BTreeSet::from([1]).null_or_empty());
        assert!([0_u8; 0].null_or_empty());

        assert!(None::<String>.null_or_empty());
        assert!(Some(String::new()).null_or_empty());
        assert!(!Some(vec![1]).null_or_empty());

        assert!(Maybe::<Vec<u8>>::empty().null_or_empty());
        assert!(!Maybe::of("y").null_or_empty());
    }
}
