// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! Shorthands for intervals under the natural ordering of types implementing [`Ord`].
//!
//! Every function here is the same-named factory of [`Ordering::natural`], and since all natural
//! orderings of a type are the same instance, the results combine freely with each other:
//!
//! ```
//! use ordinal::natural::{closed_interval, interval_set, open_interval};
//!
//! let set = interval_set([closed_interval(1, 3), open_interval(3, 5)]).unwrap();
//! assert_eq!(set.to_string(), "{[1, 5)}");
//! ```
//!
//! The standard range types convert into natural intervals too, so `Interval::from(1..5)` is
//! `[1, 5)`.

use crate::{Error, Interval, IntervalLimit, IntervalSet, Ordering};
use std::ops::{Bound, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

pub fn interval<A: Ord + 'static>(lower: Bound<A>, upper: Bound<A>) -> Interval<A> {
    Ordering::natural().interval(lower, upper)
}

pub fn interval_from_limits<A: Ord + 'static>(
    lower: IntervalLimit<A>,
    upper: IntervalLimit<A>,
) -> Interval<A> {
    Ordering::natural().interval_from_limits(lower, upper)
}

pub fn empty_interval<A: Ord + 'static>() -> Interval<A> {
    Ordering::natural().empty_interval()
}

pub fn single_value_interval<A: Ord + Clone + 'static>(value: A) -> Interval<A> {
    Ordering::natural().single_value_interval(value)
}

pub fn open_interval<A: Ord + 'static>(lower: A, upper: A) -> Interval<A> {
    Ordering::natural().open_interval(lower, upper)
}

pub fn closed_open_interval<A: Ord + 'static>(lower: A, upper: A) -> Interval<A> {
    Ordering::natural().closed_open_interval(lower, upper)
}

pub fn open_closed_interval<A: Ord + 'static>(lower: A, upper: A) -> Interval<A> {
    Ordering::natural().open_closed_interval(lower, upper)
}

pub fn closed_interval<A: Ord + 'static>(lower: A, upper: A) -> Interval<A> {
    Ordering::natural().closed_interval(lower, upper)
}

pub fn open_unbounded_interval<A: Ord + 'static>(lower: A) -> Interval<A> {
    Ordering::natural().open_unbounded_interval(lower)
}

pub fn closed_unbounded_interval<A: Ord + 'static>(lower: A) -> Interval<A> {
    Ordering::natural().closed_unbounded_interval(lower)
}

pub fn unbounded_open_interval<A: Ord + 'static>(upper: A) -> Interval<A> {
    Ordering::natural().unbounded_open_interval(upper)
}

pub fn unbounded_closed_interval<A: Ord + 'static>(upper: A) -> Interval<A> {
    Ordering::natural().unbounded_closed_interval(upper)
}

pub fn unbounded_interval<A: Ord + 'static>() -> Interval<A> {
    Ordering::natural().unbounded_interval()
}

pub fn empty_interval_set<A: Ord + Clone + 'static>() -> IntervalSet<A> {
    IntervalSet::empty(Ordering::natural())
}

/// The set of all values in any of `intervals`.
///
/// # Errors
///
/// Returns [`Error::OrderingMismatch`] if any interval was built from a custom ordering.
pub fn interval_set<A: Ord + Clone + 'static>(
    intervals: impl IntoIterator<Item = Interval<A>>,
) -> Result<IntervalSet<A>, Error> {
    IntervalSet::new(Ordering::natural(), intervals)
}

impl<A: Ord + 'static> From<Range<A>> for Interval<A> {
    fn from(range: Range<A>) -> Self {
        closed_open_interval(range.start, range.end)
    }
}

impl<A: Ord + 'static> From<RangeInclusive<A>> for Interval<A> {
    fn from(range: RangeInclusive<A>) -> Self {
        let (start, end) = range.into_inner();
        closed_interval(start, end)
    }
}

impl<A: Ord + 'static> From<RangeFrom<A>> for Interval<A> {
    fn from(range: RangeFrom<A>) -> Self {
        closed_unbounded_interval(range.start)
    }
}

impl<A: Ord + 'static> From<RangeTo<A>> for Interval<A> {
    fn from(range: RangeTo<A>) -> Self {
        unbounded_open_interval(range.end)
    }
}

impl<A: Ord + 'static> From<RangeToInclusive<A>> for Interval<A> {
    fn from(range: RangeToInclusive<A>) -> Self {
        unbounded_closed_interval(range.end)
    }
}

impl<A: Ord + 'static> From<RangeFull> for Interval<A> {
    fn from(_: RangeFull) -> Self {
        unbounded_interval()
    }
}
