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

//! # Choice Core
//!
//! Immutable value containers for absence and alternatives. This crate
//! provides three closed tagged unions that share one composition protocol
//! (construct, inspect, extract with fallback, map, bind, match, visit), so
//! calling code can express "maybe there is no value", "this either failed or
//! succeeded" and "this is one of three things" without sentinel values,
//! panics, or loose boolean flags.
//!
//! ## Modules
//!
//! - `maybe`: The optional-value container `Maybe<T>` (`Present` / `Absent`)
//!   with collapsing construction from native `Option<T>`, fallbacks,
//!   error-returning extraction, filtering, flattening and iteration.
//! - `either`: The two-branch union `Either<L, R>` whose `Right` branch is the
//!   success channel, with per-branch mapping, chaining, conversion to
//!   `Maybe` and fail-fast traversal of sequences.
//! - `one_of`: The three-case union `OneOf<A, B, C>` with discriminant-checked
//!   accessors.
//! - `query`: Sequential-binding builders that join several `Maybe` (or
//!   native `Option`) sources, or several `Either` sources, into one result
//!   and stop at the first absence or `Left`.
//! - `native`: Adapters between `Maybe<T>` and `std::option::Option<T>`.
//! - `marker`: Zero-sized `Success` and `Nothing` payload markers.
//! - `error`: Error types returned by extraction accessors.
//!
//! ## Laws
//!
//! `Maybe` and `Either` satisfy the monad laws under `bind`:
//!
//! ```rust
//! use choice_core::maybe::Maybe;
//!
//! let f = |x: i32| Maybe::of(x + 1);
//! let g = |x: i32| if x % 2 == 0 { Maybe::of(x / 2) } else { Maybe::empty() };
//!
//! let m = Maybe::of(3);
//! assert_eq!(Maybe::of(3).bind(f), f(3));
//! assert_eq!(m.bind(Maybe::of), m);
//! assert_eq!(m.bind(f).bind(g), m.bind(|x| f(x).bind(g)));
//! ```

pub mod either;
pub mod error;
pub mod marker;
pub mod maybe;
pub mod native;
pub mod one_of;
pub mod query;

mod macros;

pub use either::{Either, left, right};
pub use error::AbsentValueError;
pub use marker::{Nothing, Success};
pub use maybe::Maybe;
pub use native::{IntoMaybe, OptionExt};
pub use one_of::OneOf;
pub use query::{EitherQuery, MaybeQuery};
