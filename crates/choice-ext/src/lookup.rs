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

//! # Keyed and Indexed Lookups
//!
//! `MapSelect` reads a key out of a `HashMap` or `BTreeMap` as a `Maybe`,
//! `MapSelectFlat` does the same for maps whose values are themselves
//! `Maybe`, and `SliceSelect` reads an index out of a slice (or anything that
//! derefs to one). Missing keys and out-of-range indices are absent, never a
//! panic.
//!
//! ```rust
//! use choice_core::maybe::Maybe;
//! use choice_ext::lookup::{MapSelect, SliceSelect};
//! use std::collections::BTreeMap;
//!
//! let ages = BTreeMap::from([("ada".to_string(), 36), ("alan".to_string(), 41)]);
//! assert_eq!(ages.select("ada"), Maybe::of(&36));
//! assert!(ages.select("grace").is_absent());
//!
//! let xs = vec![10, 20, 30];
//! assert_eq!(xs.select_at(2), Maybe::of(&30));
//! assert!(xs.select_at(3).is_absent());
//! ```

use choice_core::maybe::Maybe;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Keyed lookup that returns a `Maybe` instead of an `Option`.
pub trait MapSelect<Q: ?Sized, V> {
    /// Returns the value stored under `key`, absent if there is none.
    fn select(&self, key: &Q) -> Maybe<&V>;
}

impl<K, V, S, Q> MapSelect<Q, V> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    #[inline]
    fn select(&self, key: &Q) -> Maybe<&V> {
        Maybe::from_native(self.get(key))
    }
}

impl<K, V, Q> MapSelect<Q, V> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    #[inline]
    fn select(&self, key: &Q) -> Maybe<&V> {
        Maybe::from_native(self.get(key))
    }
}

/// Keyed lookup on maps whose values are `Maybe`.
///
/// A missing key and a key stored with an absent value both read as absent.
///
/// # Examples
///
/// ```rust
/// # use choice_core::maybe::Maybe;
/// # use choice_ext::lookup::MapSelectFlat;
/// # use std::collections::HashMap;
/// let nicknames = HashMap::from([("ada", Maybe::of("countess")), ("alan", Maybe::empty())]);
/// assert_eq!(nicknames.select_flat("ada"), Maybe::of(&"countess"));
/// assert!(nicknames.select_flat("alan").is_absent());
/// assert!(nicknames.select_flat("grace").is_absent());
/// ```
pub trait MapSelectFlat<Q: ?Sized, T> {
    /// Returns the present value stored under `key`.
    fn select_flat(&self, key: &Q) -> Maybe<&T>;
}

impl<M, Q, T> MapSelectFlat<Q, T> for M
where
    M: MapSelect<Q, Maybe<T>>,
    Q: ?Sized,
{
    #[inline]
    fn select_flat(&self, key: &Q) -> Maybe<&T> {
        self.select(key).bind(|stored| stored.as_ref())
    }
}

/// Indexed lookup that returns a `Maybe` instead of panicking.
pub trait SliceSelect<T> {
    /// Returns the element at `index`, absent if the index is out of range.
    fn select_at(&self, index: usize) -> Maybe<&T>;
}

impl<T> SliceSelect<T> for [T] {
    #[inline]
    fn select_at(&self, index: usize) -> Maybe<&T> {
        Maybe::from_native(self.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_hash_map_select() {
        let mut map = HashMap::new();
        map.insert("one".to_string(), 1);

        assert_eq!(map.select("one"), Maybe::of(&1));
        assert!(map.select("two").is_absent());
    }

    #[test]
    fn test_empty_map_select() {
        let map: BTreeMap<u32, &str> = BTreeMap::new();
        assert!(map.select(&0_u32).is_absent());
    }

    #[test]
    fn test_select_flat_collapses_stored_absent() {
        let mut map: BTreeMap<u8, Maybe<u8>> = BTreeMap::new();
        map.insert(1, Maybe::of(10));
        map.insert(2, Maybe::empty());

        assert_eq!(map.select_flat(&1_u8), Maybe::of(&10));
        assert!(map.select_flat(&2_u8).is_absent());
        assert!(map.select_flat(&3_u8).is_absent());
    }

    #[test]
    fn test_select_at_bounds() {
        let empty: [i32; 0] = [];
        assert!(empty.select_at(0).is_absent());

        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let len = rng.random_range(0..10_usize);
            let xs: Vec<usize> = (0..len).collect();
            let index = rng.random_range(0..12_usize);

            let got = xs.select_at(index);
            assert_eq!(got.has_value(), index < len);
            if index < len {
                assert_eq!(got, Maybe::of(&index));
            }
        }
    }
}
