// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # Ordinal: Pluggable Total Orderings and an Interval Algebra
//!
//! This crate provides intervals, and sets of intervals, over values of any type. What "smaller"
//! means is not fixed by the value type: it is decided by an [`Ordering`], a first-class value
//! that carries an equivalence and a strict "less than" predicate. The natural order of a type
//! implementing [`Ord`] is just one such ordering.
//!
//! ## Core Concepts
//!
//! - [`Ordering`]: a total order over some type `A`. Orderings are cheap to clone, and every
//!   constructed ordering is a distinct *instance*. Intervals remember the instance they were
//!   built from, and operations that combine intervals of different instances fail with
//!   [`Error::OrderingMismatch`].
//! - [`IntervalLimit`]: one end of an interval, either unbounded or bounded by a value that is
//!   included (closed) or excluded (open).
//! - [`Interval`]: a contiguous range of values between a lower and an upper limit, such as
//!   `[1, 2)` or `(-∞, 3]`. Intervals are closed under intersection.
//! - [`IntervalSet`]: a union of intervals, kept in a canonical form of sorted, disjoint and
//!   non-touching intervals. Sets are closed under union, intersection and complement.
//!
//! From every ordering, orderings over interval limits and over intervals are derived (see
//! [`Ordering::lower_limits`], [`Ordering::upper_limits`] and [`Ordering::intervals`]). These
//! define how intervals sort within a set.
//!
//! ## Example
//!
//! ```
//! use ordinal::{Comparator, Ordering};
//!
//! // strings, compared case-insensitively
//! let ord = Ordering::by_key(|s: &String| s.to_lowercase());
//! let a_to_m = ord.closed_open_interval("a".to_string(), "N".to_string());
//! let k_to_z = ord.closed_interval("K".to_string(), "z".to_string());
//!
//! let overlap = a_to_m.intersect(&k_to_z)?;
//! assert_eq!(overlap.to_string(), "[K, N)");
//! assert!(overlap.contains(&"lemon".to_string()));
//!
//! let both = ord.interval_set([a_to_m, k_to_z])?;
//! assert_eq!(both.to_string(), "{[a, z]}");
//! assert!(ord.less(&"apple".to_string(), &"Banana".to_string()));
//!
//! // intervals of a different ordering instance do not mix
//! let other = Ordering::by_key(|s: &String| s.to_lowercase());
//! assert!(both.union_interval(&other.unbounded_interval()).is_err());
//! # Ok::<(), ordinal::Error>(())
//! ```
//!
//! For types implementing [`Ord`], the [`natural`] module offers free functions building
//! intervals under the natural ordering, and the standard range types convert into such
//! intervals:
//!
//! ```
//! use ordinal::{Interval, natural};
//!
//! let set = natural::interval_set([Interval::from(1..3), Interval::from(5..)])?;
//! assert_eq!(set.to_string(), "{[1, 3), [5, ∞)}");
//! assert_eq!(set.complement().to_string(), "{(-∞, 1), [3, 5)}");
//! # Ok::<(), ordinal::Error>(())
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: `debug` when an operation is rejected, and `trace` when
//! intervals are merged into a set. Install any subscriber to see them.
//!
//! ## License
//!
//! This project is licensed under either of
//!
//! - Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or http://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or http://opensource.org/licenses/MIT)
//!
//! at your option.
//!
//! ## Features
//!
//! - `serde`: Provides `serde` support for limits, and serialization for intervals and sets.
//! - `arbitrary`: Implements `quickcheck::Arbitrary` for limits, intervals and sets, useful for
//!   property-based testing.
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod error;
pub use error::Error;
pub mod ordering;
pub use ordering::{Comparator, ComparatorExt, Ordering, OrderingId};
pub mod interval;
pub use interval::{Interval, IntervalLimit, IntervalSet};
pub mod natural;

#[cfg(any(test, feature = "arbitrary"))]
mod test_util;
