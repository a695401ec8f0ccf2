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

//! # Ternary Union
//!
//! `OneOf<A, B, C>` holds exactly one value out of three possible types. The
//! enum tag is the discriminant, so a payload slot that is not selected cannot
//! be read, and a discriminant outside `0..=2` cannot be represented.
//!
//! Values are built with the positional constructors `OneOf::t0`,
//! `OneOf::t1` and `OneOf::t2`. Construction never guesses the branch from the
//! payload type, so `OneOf<i32, i32, String>` is as usable as any other
//! instantiation.
//!
//! ```rust
//! use choice_core::one_of::OneOf;
//!
//! let v: OneOf<i32, String, bool> = OneOf::t1("hello".to_string());
//! assert_eq!(v.index(), 1);
//!
//! let len = v.match_with(|n| n as usize, |s| s.len(), |b| usize::from(b));
//! assert_eq!(len, 5);
//! ```

use crate::maybe::Maybe;

/// A value of exactly one of the types `A`, `B` or `C`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OneOf<A, B, C> {
    /// Discriminant `0`.
    T0(A),
    /// Discriminant `1`.
    T1(B),
    /// Discriminant `2`.
    T2(C),
}

impl<A, B, C> OneOf<A, B, C> {
    /// Selects branch `0`.
    #[inline(always)]
    pub const fn t0(value: A) -> Self {
        OneOf::T0(value)
    }

    /// Selects branch `1`.
    #[inline(always)]
    pub const fn t1(value: B) -> Self {
        OneOf::T1(value)
    }

    /// Selects branch `2`.
    #[inline(always)]
    pub const fn t2(value: C) -> Self {
        OneOf::T2(value)
    }

    /// Returns the zero-based discriminant of the live branch.
    #[inline]
    pub const fn index(&self) -> usize {
        match self {
            OneOf::T0(_) => 0,
            OneOf::T1(_) => 1,
            OneOf::T2(_) => 2,
        }
    }

    #[inline]
    pub const fn has_t0(&self) -> bool {
        self.index() == 0
    }

    #[inline]
    pub const fn has_t1(&self) -> bool {
        self.index() == 1
    }

    #[inline]
    pub const fn has_t2(&self) -> bool {
        self.index() == 2
    }

    /// Borrows the branch `0` payload, absent if another branch is live.
    #[inline]
    pub fn try_get_t0(&self) -> Maybe<&A> {
        match self {
            OneOf::T0(a) => Maybe::of(a),
            _ => Maybe::empty(),
        }
    }

    /// Borrows the branch `1` payload, absent if another branch is live.
    #[inline]
    pub fn try_get_t1(&self) -> Maybe<&B> {
        match self {
            OneOf::T1(b) => Maybe::of(b),
            _ => Maybe::empty(),
        }
    }

    /// Borrows the branch `2` payload, absent if another branch is live.
    #[inline]
    pub fn try_get_t2(&self) -> Maybe<&C> {
        match self {
            OneOf::T2(c) => Maybe::of(c),
            _ => Maybe::empty(),
        }
    }

    #[inline]
    pub fn into_t0(self) -> Maybe<A> {
        self.match_with(Maybe::of, |_| Maybe::empty(), |_| Maybe::empty())
    }

    #[inline]
    pub fn into_t1(self) -> Maybe<B> {
        self.match_with(|_| Maybe::empty(), Maybe::of, |_| Maybe::empty())
    }

    #[inline]
    pub fn into_t2(self) -> Maybe<C> {
        self.match_with(|_| Maybe::empty(), |_| Maybe::empty(), Maybe::of)
    }

    /// Dispatches to exactly one of the three functions, keyed by the discriminant.
    #[inline]
    pub fn match_with<R, F0, F1, F2>(self, f0: F0, f1: F1, f2: F2) -> R
    where
        F0: FnOnce(A) -> R,
        F1: FnOnce(B) -> R,
        F2: FnOnce(C) -> R,
    {
        match self {
            OneOf::T0(a) => f0(a),
            OneOf::T1(b) => f1(b),
            OneOf::T2(c) => f2(c),
        }
    }

    /// Returns the branch `0` payload or `fallback`.
    #[inline]
    pub fn get_t0_or_else(self, fallback: A) -> A {
        self.into_t0().get_or_else(fallback)
    }

    /// Returns the branch `1` payload or `fallback`.
    #[inline]
    pub fn get_t1_or_else(self, fallback: B) -> B {
        self.into_t1().get_or_else(fallback)
    }

    /// Returns the branch `2` payload or `fallback`.
    #[inline]
    pub fn get_t2_or_else(self, fallback: C) -> C {
        self.into_t2().get_or_else(fallback)
    }

    /// Runs `action` if branch `0` is live, then returns `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use choice_core::one_of::OneOf;
    /// let mut seen = Vec::new();
    /// let v: OneOf<i32, &str, ()> = OneOf::t0(7);
    /// let v = v.if_t0(|n| seen.push(*n)).if_t1(|_| unreachable!()).if_t2(|_| unreachable!());
    /// assert_eq!(seen, [7]);
    /// assert!(v.has_t0());
    /// ```
    #[inline]
    pub fn if_t0<F>(self, action: F) -> Self
    where
        F: FnOnce(&A),
    {
        self.try_get_t0().if_present(|a| action(a));
        self
    }

    /// Runs `action` if branch `1` is live, then returns `self`.
    #[inline]
    pub fn if_t1<F>(self, action: F) -> Self
    where
        F: FnOnce(&B),
    {
        self.try_get_t1().if_present(|b| action(b));
        self
    }

    /// Runs `action` if branch `2` is live, then returns `self`.
    #[inline]
    pub fn if_t2<F>(self, action: F) -> Self
    where
        F: FnOnce(&C),
    {
        self.try_get_t2().if_present(|c| action(c));
        self
    }

    /// Transforms the branch `0` payload, leaving the other branches untouched.
    #[inline]
    pub fn map_t0<A2, F>(self, f: F) -> OneOf<A2, B, C>
    where
        F: FnOnce(A) -> A2,
    {
        self.match_with(|a| OneOf::T0(f(a)), OneOf::T1, OneOf::T2)
    }

    /// Transforms the branch `1` payload, leaving the other branches untouched.
    #[inline]
    pub fn map_t1<B2, F>(self, f: F) -> OneOf<A, B2, C>
    where
        F: FnOnce(B) -> B2,
    {
        self.match_with(OneOf::T0, |b| OneOf::T1(f(b)), OneOf::T2)
    }

    /// Transforms the branch `2` payload, leaving the other branches untouched.
    #[inline]
    pub fn map_t2<C2, F>(self, f: F) -> OneOf<A, B, C2>
    where
        F: FnOnce(C) -> C2,
    {
        self.match_with(OneOf::T0, OneOf::T1, |c| OneOf::T2(f(c)))
    }

    /// Converts from `&OneOf<A, B, C>` to `OneOf<&A, &B, &C>`.
    #[inline]
    pub fn as_ref(&self) -> OneOf<&A, &B, &C> {
        match self {
            OneOf::T0(a) => OneOf::T0(a),
            OneOf::T1(b) => OneOf::T1(b),
            OneOf::T2(c) => OneOf::T2(c),
        }
    }
}

impl<T> OneOf<T, T, T> {
    /// Returns the live payload when all three branches share a type.
    #[inline]
    pub fn into_inner(self) -> T {
        self.match_with(
            std::convert::identity,
            std::convert::identity,
            std::convert::identity,
        )
    }
}
