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

//! # Iterating a `Maybe`
//!
//! A `Maybe<T>` behaves as a collection of zero or one elements. `Iter`
//! borrows the payload and `IntoIter` moves it out; both report an exact
//! size, iterate from either end, and stay exhausted once drained.
//!
//! ```rust
//! use choice_core::maybe::Maybe;
//!
//! let present = Maybe::of(3);
//! let absent: Maybe<i32> = Maybe::empty();
//!
//! assert_eq!(present.iter().collect::<Vec<_>>(), vec![&3]);
//! assert_eq!(absent.into_iter().collect::<Vec<_>>(), Vec::<i32>::new());
//! ```

use std::iter::FusedIterator;

/// A borrowing iterator over the value of a [`Maybe`](super::Maybe).
///
/// Created by [`Maybe::iter`](super::Maybe::iter).
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(super) fn new(inner: Option<&'a T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the value of a [`Maybe`](super::Maybe).
///
/// Created by `Maybe::into_iter`.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> IntoIter<T> {
    #[inline]
    pub(super) fn new(inner: Option<T>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use crate::maybe::Maybe;
    use std::iter::FusedIterator;

    #[test]
    fn test_iter_with_present() {
        let m = Maybe::of(10);
        let mut iter = m.iter();

        assert_eq!(iter.next(), Some(&10));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_with_absent() {
        let m: Maybe<i32> = Maybe::empty();
        let mut iter = m.into_iter();

        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_size_hint() {
        // Case 1: Value present
        let iter = Maybe::of(1).into_iter();
        assert_eq!(iter.size_hint(), (1, Some(1)));

        // Case 2: Value absent
        let empty_iter = Maybe::<i32>::empty().into_iter();
        assert_eq!(empty_iter.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_exact_size_iterator() {
        let m = Maybe::of("x");
        let mut iter = m.iter();

        assert_eq!(iter.len(), 1);
        iter.next();
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_double_ended() {
        let mut iter = Maybe::of(5).into_iter();
        assert_eq!(iter.next_back(), Some(5));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_fused_iterator() {
        let mut iter = Maybe::of(1).into_iter();

        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);

        fn assert_fused<I: FusedIterator>(_: I) {}
        assert_fused(iter);
    }

    #[test]
    fn test_for_loop_over_reference() {
        let m = Maybe::of(vec![1, 2]);
        let mut total = 0;
        for v in &m {
            total += v.iter().sum::<i32>();
        }
        assert_eq!(total, 3);
        assert!(m.has_value());
    }

    #[test]
    fn test_composition() {
        // Chains with other iterators like an optional element.
        let items: Vec<i32> = Maybe::of(1)
            .into_iter()
            .chain(Maybe::empty())
            .chain(Maybe::of(3))
            .map(|x| x * 2)
            .collect();
        assert_eq!(items, [2, 6]);
    }
}
