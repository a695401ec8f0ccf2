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

//! # Choice Extensions
//!
//! Helpers that produce [`Maybe`](choice_core::maybe::Maybe) and
//! [`Either`](choice_core::either::Either) values from ordinary collections
//! and strings, so "first element", "value under a key" or "parsed number"
//! lookups compose with `bind` and queries instead of returning sentinels.
//!
//! ## Modules
//!
//! - `seq`: `try_single`, `try_first`, `try_first_where`, `present_items`,
//!   `select_all` and the `NullOrEmpty` emptiness check.
//! - `lookup`: keyed lookups on `HashMap`/`BTreeMap` and indexed lookups on
//!   slices.
//! - `text`: non-blank string selection and number parsing.
//!
//! ```rust
//! use choice_core::maybe::Maybe;
//! use choice_core::query::MaybeQuery;
//! use choice_ext::lookup::MapSelect;
//! use choice_ext::seq::try_first;
//! use std::collections::HashMap;
//!
//! let ports = HashMap::from([("http", 80_u16), ("https", 443)]);
//! let hosts = ["example.org", "example.net"];
//!
//! let url = MaybeQuery::new(try_first(hosts))
//!     .and(ports.select("https").map(|p| *p))
//!     .select(|(h, p)| format!("{h}:{p}"));
//!
//! assert_eq!(url, Maybe::of("example.org:443".to_string()));
//! ```

pub mod lookup;
pub mod seq;
pub mod text;

mod macros;
