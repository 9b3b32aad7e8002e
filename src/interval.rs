// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # Interval and IntervalSet
//!
//! This module provides the [`Interval`] and [`IntervalSet`] data structures over values of any
//! type, interpreted through an [`Ordering`].
//!
//! ## `Interval`
//!
//! An `Interval` is a contiguous range of values between a lower and an upper
//! [`IntervalLimit`]. Either limit may be unbounded, and bounded limits may be open or closed, so
//! `[1, 2)`, `(-∞, 3]` and `(-∞, ∞)` are all intervals. An interval whose limits leave no room
//! for any value is *empty*; all empty intervals of an ordering are the same interval.
//!
//! ## `IntervalSet`
//!
//! An `IntervalSet` is a collection of `Interval`s in canonical form: non-empty, pairwise
//! disjoint, not touching each other, and sorted. It is closed under union, intersection and
//! complement.
//!
//! ## String forms
//!
//! Intervals and sets render in a canonical notation (`Ø`, `[v]`, `[1, 2)`, `(-∞, ∞)`,
//! `{[1, 2], (3, ∞)}`, `{}`), through [`Display`](fmt::Display) if the value type implements it
//! and through [`Debug`](fmt::Debug) otherwise.

use crate::{
    Error,
    error::ensure_same,
    ordering::{Comparator, ComparatorExt, Ordering},
};
use std::{fmt, ops::Bound};

mod limit;
mod set;
pub use limit::IntervalLimit;
pub use set::IntervalSet;

#[derive(Clone)]
struct Span<A> {
    lower: IntervalLimit<A>,
    upper: IntervalLimit<A>,
}

/// A contiguous range of values of `A` under an [`Ordering`].
///
/// Intervals never change after construction; every operation returns a new interval.
///
/// Two intervals are equal if they share the ordering instance and have equivalent limits. All
/// empty intervals of an ordering are equal, whatever limits they were built from.
#[derive(Clone)]
pub struct Interval<A> {
    ordering: Ordering<A>,
    // `None` iff the interval is empty
    span: Option<Span<A>>,
}

impl<A> Interval<A> {
    /// Creates the interval between `lower` and `upper`.
    ///
    /// If the limits leave no room for any value (the upper bound is below the lower bound, or
    /// both bounds are equal and at least one of them is open), the result is the empty interval.
    pub fn new(ordering: Ordering<A>, lower: IntervalLimit<A>, upper: IntervalLimit<A>) -> Self {
        let is_empty = match (lower.bound(), upper.bound()) {
            (Some(lo), Some(hi)) => {
                ordering.less(hi, lo)
                    || (ordering.equal(hi, lo) && (lower.is_open() || upper.is_open()))
            }
            _ => false,
        };
        let span = (!is_empty).then_some(Span { lower, upper });
        Self { ordering, span }
    }

    /// The empty interval of `ordering`.
    #[must_use]
    pub fn empty(ordering: Ordering<A>) -> Self {
        Self {
            ordering,
            span: None,
        }
    }

    /// The interval of all values of `ordering`.
    #[must_use]
    pub fn unbounded(ordering: Ordering<A>) -> Self {
        Self::new(
            ordering,
            IntervalLimit::unbounded(),
            IntervalLimit::unbounded(),
        )
    }

    #[must_use]
    pub fn ordering(&self) -> &Ordering<A> {
        &self.ordering
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.span.is_none()
    }

    /// The lower limit, or `None` for the empty interval.
    #[must_use]
    pub fn lower(&self) -> Option<&IntervalLimit<A>> {
        self.span.as_ref().map(|span| &span.lower)
    }

    /// The upper limit, or `None` for the empty interval.
    #[must_use]
    pub fn upper(&self) -> Option<&IntervalLimit<A>> {
        self.span.as_ref().map(|span| &span.upper)
    }

    /// Both limits, or `None` for the empty interval.
    #[must_use]
    pub fn limits(&self) -> Option<(&IntervalLimit<A>, &IntervalLimit<A>)> {
        self.span.as_ref().map(|span| (&span.lower, &span.upper))
    }

    /// Returns whether the interval is finite on both ends.
    ///
    /// The empty interval counts as bounded.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.limits()
            .is_none_or(|(lower, upper)| lower.is_bounded() && upper.is_bounded())
    }

    /// Returns whether the interval holds exactly one value, like `[v, v]`.
    #[must_use]
    pub fn is_single_value(&self) -> bool {
        self.limits().is_some_and(|(lower, upper)| {
            match (lower.bound(), upper.bound()) {
                (Some(lo), Some(hi)) => self.ordering.equal(lo, hi),
                _ => false,
            }
        })
    }

    #[must_use]
    pub fn contains(&self, value: &A) -> bool {
        let Some((lower, upper)) = self.limits() else {
            return false;
        };
        let above_lower = lower.bound().is_none_or(|lo| {
            self.ordering.greater(value, lo) || (lower.is_closed() && self.ordering.equal(value, lo))
        });
        let below_upper = upper.bound().is_none_or(|hi| {
            self.ordering.less(value, hi) || (upper.is_closed() && self.ordering.equal(value, hi))
        });
        above_lower && below_upper
    }

    /// Returns whether every value of `other` is in `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrderingMismatch`] if `other` uses a different ordering instance.
    pub fn contains_interval(&self, other: &Self) -> Result<bool, Error>
    where
        A: Clone,
    {
        Ok(self.intersect(other)? == *other)
    }

    /// Returns whether `self` and `other` share at least one value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrderingMismatch`] if `other` uses a different ordering instance.
    pub fn intersects(&self, other: &Self) -> Result<bool, Error>
    where
        A: Clone,
    {
        Ok(!self.intersect(other)?.is_empty())
    }

    /// The interval of all values in both `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrderingMismatch`] if `other` uses a different ordering instance.
    pub fn intersect(&self, other: &Self) -> Result<Self, Error>
    where
        A: Clone,
    {
        ensure_same(self.ordering.id(), other.ordering.id())?;
        Ok(self.meet(other))
    }

    /// Intersection, for operands already known to share the ordering.
    pub(crate) fn meet(&self, other: &Self) -> Self
    where
        A: Clone,
    {
        match (self.limits(), other.limits()) {
            (Some((a_lower, a_upper)), Some((b_lower, b_upper))) => {
                let lower = self.ordering.lower_limits().max_of(a_lower, b_lower);
                let upper = self.ordering.upper_limits().max_of(a_upper, b_upper);
                Self::new(self.ordering.clone(), lower.clone(), upper.clone())
            }
            _ => Self::empty(self.ordering.clone()),
        }
    }

    /// The same interval with all its bounded limits closed.
    #[must_use]
    pub fn closure(&self) -> Self
    where
        A: Clone,
    {
        match self.limits() {
            Some((lower, upper)) => {
                Self::new(self.ordering.clone(), lower.to_closed(), upper.to_closed())
            }
            None => self.clone(),
        }
    }

    fn render(
        &self,
        f: &mut fmt::Formatter<'_>,
        value: impl Fn(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
    ) -> fmt::Result {
        let Some((lower, upper)) = self.limits() else {
            return f.write_str("Ø");
        };
        if self.is_single_value() {
            if let Some(v) = lower.bound() {
                f.write_str("[")?;
                value(v, f)?;
                return f.write_str("]");
            }
        }
        f.write_str(if lower.is_open() { "(" } else { "[" })?;
        match lower.bound() {
            Some(lo) => value(lo, f)?,
            None => f.write_str("-∞")?,
        }
        f.write_str(", ")?;
        match upper.bound() {
            Some(hi) => value(hi, f)?,
            None => f.write_str("∞")?,
        }
        f.write_str(if upper.is_open() { ")" } else { "]" })
    }
}

impl<A> PartialEq for Interval<A> {
    fn eq(&self, other: &Self) -> bool {
        self.ordering.is_same(&other.ordering) && self.ordering.intervals().equal(self, other)
    }
}

impl<A> Eq for Interval<A> {}

impl<A: fmt::Display> fmt::Display for Interval<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, |v, f| fmt::Display::fmt(v, f))
    }
}

impl<A: fmt::Debug> fmt::Debug for Interval<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, |v, f| fmt::Debug::fmt(v, f))
    }
}

#[cfg(feature = "serde")]
impl<A: ::serde::Serialize> ::serde::Serialize for Interval<A> {
    fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ::serde::Serialize::serialize(&self.limits(), serializer)
    }
}

/// Interval factories.
///
/// The intervals produced here are named after their limits: `open_closed_interval(1, 2)` is
/// `(1, 2]`, `closed_unbounded_interval(1)` is `[1, ∞)`, and so on.
impl<A> Ordering<A> {
    /// The interval between two optional bounds; [`Bound::Unbounded`] stands for no bound.
    pub fn interval(&self, lower: Bound<A>, upper: Bound<A>) -> Interval<A> {
        Interval::new(self.clone(), lower.into(), upper.into())
    }

    pub fn interval_from_limits(
        &self,
        lower: IntervalLimit<A>,
        upper: IntervalLimit<A>,
    ) -> Interval<A> {
        Interval::new(self.clone(), lower, upper)
    }

    pub fn empty_interval(&self) -> Interval<A> {
        Interval::empty(self.clone())
    }

    /// The degenerate interval `[value]`.
    pub fn single_value_interval(&self, value: A) -> Interval<A>
    where
        A: Clone,
    {
        self.closed_interval(value.clone(), value)
    }

    pub fn open_interval(&self, lower: A, upper: A) -> Interval<A> {
        self.interval(Bound::Excluded(lower), Bound::Excluded(upper))
    }

    pub fn closed_open_interval(&self, lower: A, upper: A) -> Interval<A> {
        self.interval(Bound::Included(lower), Bound::Excluded(upper))
    }

    pub fn open_closed_interval(&self, lower: A, upper: A) -> Interval<A> {
        self.interval(Bound::Excluded(lower), Bound::Included(upper))
    }

    pub fn closed_interval(&self, lower: A, upper: A) -> Interval<A> {
        self.interval(Bound::Included(lower), Bound::Included(upper))
    }

    pub fn open_unbounded_interval(&self, lower: A) -> Interval<A> {
        self.interval(Bound::Excluded(lower), Bound::Unbounded)
    }

    pub fn closed_unbounded_interval(&self, lower: A) -> Interval<A> {
        self.interval(Bound::Included(lower), Bound::Unbounded)
    }

    pub fn unbounded_open_interval(&self, upper: A) -> Interval<A> {
        self.interval(Bound::Unbounded, Bound::Excluded(upper))
    }

    pub fn unbounded_closed_interval(&self, upper: A) -> Interval<A> {
        self.interval(Bound::Unbounded, Bound::Included(upper))
    }

    pub fn unbounded_interval(&self) -> Interval<A> {
        Interval::unbounded(self.clone())
    }
}
