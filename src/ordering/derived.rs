// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! Orderings over interval limits and intervals, derived from an ordering over values.
//!
//! These are borrowed views over the base [`Ordering`], so obtaining one is free and nothing
//! needs to be cached per base ordering.

use super::{Comparator, ComparatorExt, Ordering};
use crate::{Interval, IntervalLimit};
use std::fmt;

/// Which end of an interval a limit sits on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    Lower,
    Upper,
}

/// Orders the limits of one side of an interval by restrictiveness.
///
/// A limit sorts before another if it admits more values on its side of an interval, so the
/// least restrictive limit is the minimum and the most restrictive one the maximum:
///
/// - an unbounded limit is less restrictive than any bounded one,
/// - for lower limits, a smaller bound is less restrictive; for upper limits, a larger one is,
/// - at equal bounds, a closed limit is less restrictive than an open one.
pub struct LimitOrdering<'o, A> {
    base: &'o Ordering<A>,
    side: Side,
}

impl<'o, A> LimitOrdering<'o, A> {
    pub(super) fn new(base: &'o Ordering<A>, side: Side) -> Self {
        Self { base, side }
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Whether bound `a` admits more values than bound `b`, ignoring openness.
    fn looser(&self, a: &A, b: &A) -> bool {
        match self.side {
            Side::Lower => self.base.less(a, b),
            Side::Upper => self.base.greater(a, b),
        }
    }
}

impl<A> Comparator<IntervalLimit<A>> for LimitOrdering<'_, A> {
    fn equal(&self, a: &IntervalLimit<A>, b: &IntervalLimit<A>) -> bool {
        match (a.bound(), b.bound()) {
            (None, None) => true,
            (Some(x), Some(y)) => a.is_open() == b.is_open() && self.base.equal(x, y),
            _ => false,
        }
    }

    fn less(&self, a: &IntervalLimit<A>, b: &IntervalLimit<A>) -> bool {
        match (a.bound(), b.bound()) {
            (None, Some(_)) => true,
            (Some(x), Some(y)) => {
                self.looser(x, y) || (self.base.equal(x, y) && a.is_closed() && b.is_open())
            }
            (None, None) | (Some(_), None) => false,
        }
    }
}

impl<A> Clone for LimitOrdering<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for LimitOrdering<'_, A> {}

impl<A> fmt::Debug for LimitOrdering<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LimitOrdering")
            .field("base", self.base)
            .field("side", &self.side)
            .finish()
    }
}

/// The canonical order of intervals.
///
/// Empty intervals are all equal and sort before every other interval. Non-empty intervals sort
/// by their lower limit, least restrictive first. Intervals with equal lower limits sort by their
/// upper limit, the interval that ends first sorting first.
pub struct IntervalOrdering<'o, A> {
    base: &'o Ordering<A>,
}

impl<'o, A> IntervalOrdering<'o, A> {
    pub(super) fn new(base: &'o Ordering<A>) -> Self {
        Self { base }
    }
}

impl<A> Comparator<Interval<A>> for IntervalOrdering<'_, A> {
    fn equal(&self, a: &Interval<A>, b: &Interval<A>) -> bool {
        match (a.limits(), b.limits()) {
            (None, None) => true,
            (Some((a_lower, a_upper)), Some((b_lower, b_upper))) => {
                self.base.lower_limits().equal(a_lower, b_lower)
                    && self.base.upper_limits().equal(a_upper, b_upper)
            }
            _ => false,
        }
    }

    fn less(&self, a: &Interval<A>, b: &Interval<A>) -> bool {
        match (a.limits(), b.limits()) {
            (None, None) | (Some(_), None) => false,
            (None, Some(_)) => true,
            (Some((a_lower, a_upper)), Some((b_lower, b_upper))) => {
                let lower = self.base.lower_limits();
                if lower.equal(a_lower, b_lower) {
                    self.base.upper_limits().greater(a_upper, b_upper)
                } else {
                    lower.less(a_lower, b_lower)
                }
            }
        }
    }
}

impl<A> Clone for IntervalOrdering<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for IntervalOrdering<'_, A> {}

impl<A> fmt::Debug for IntervalOrdering<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalOrdering")
            .field("base", self.base)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::natural;

    fn limits() -> Vec<IntervalLimit<i32>> {
        vec![
            IntervalLimit::unbounded(),
            IntervalLimit::closed(1),
            IntervalLimit::open(1),
            IntervalLimit::closed(2),
            IntervalLimit::open(2),
        ]
    }

    #[test]
    fn lower_restrictiveness() {
        let ord = Ordering::<i32>::natural();
        let lower = ord.lower_limits();
        let mut sorted = limits();
        sorted.reverse();
        sorted.sort_by(|a, b| lower.compare(a, b));
        assert_eq!(sorted, limits());

        assert!(lower.less(&IntervalLimit::closed(5), &IntervalLimit::open(5)));
        assert!(lower.less(&IntervalLimit::open(4), &IntervalLimit::closed(5)));
        assert!(lower.equal(&IntervalLimit::unbounded(), &IntervalLimit::unbounded()));
        assert!(!lower.equal(&IntervalLimit::open(5), &IntervalLimit::closed(5)));
        assert_eq!(lower.side(), Side::Lower);
    }

    #[test]
    fn upper_restrictiveness() {
        let ord = Ordering::<i32>::natural();
        let upper = ord.upper_limits();
        let mut sorted = limits();
        sorted.sort_by(|a, b| upper.compare(a, b));
        assert_eq!(
            sorted,
            [
                IntervalLimit::unbounded(),
                IntervalLimit::closed(2),
                IntervalLimit::open(2),
                IntervalLimit::closed(1),
                IntervalLimit::open(1),
            ]
        );
        assert!(upper.less(&IntervalLimit::closed(5), &IntervalLimit::open(5)));
        assert!(upper.less(&IntervalLimit::open(6), &IntervalLimit::closed(5)));
        assert_eq!(upper.side(), Side::Upper);
    }

    #[test]
    fn follows_the_base_ordering() {
        let ord = Ordering::<i32>::natural().reversed();
        let lower = ord.lower_limits();
        assert!(lower.less(&IntervalLimit::closed(5), &IntervalLimit::closed(4)));
        let upper = ord.upper_limits();
        assert!(upper.less(&IntervalLimit::closed(4), &IntervalLimit::closed(5)));
    }

    #[test]
    fn interval_order() {
        let ord = Ordering::<i32>::natural();
        let intervals = ord.intervals();
        let mut sorted = vec![
            natural::closed_interval(3, 4),
            natural::unbounded_open_interval(0),
            natural::closed_interval(1, 5),
            natural::open_interval(1, 2),
            natural::closed_interval(1, 2),
            natural::empty_interval(),
        ];
        sorted.sort_by(|a, b| intervals.compare(a, b));
        assert_eq!(
            sorted,
            [
                natural::empty_interval(),
                natural::unbounded_open_interval(0),
                natural::closed_interval(1, 2),
                natural::closed_interval(1, 5),
                natural::open_interval(1, 2),
                natural::closed_interval(3, 4),
            ]
        );

        assert!(intervals.equal(&natural::open_interval(2, 1), &natural::empty_interval()));
        assert!(!intervals.less(&natural::empty_interval(), &natural::open_interval(3, 3)));
        assert!(intervals.less(
            &natural::closed_open_interval(1, 2),
            &natural::closed_interval(1, 2)
        ));
    }
}
