// (c) Copyright 2025 Helsing GmbH. All rights reserved.
use super::{Interval, IntervalLimit};
use crate::{
    Error,
    error::ensure_same,
    ordering::{ComparatorExt, Ordering},
};
use smallvec::SmallVec;
use std::fmt;

// Most sets in practice hold one interval, or two around a hole (as any complement of an
// interval does).
type Intervals<A> = SmallVec<[Interval<A>; 2]>;

/// A set of values of `A`, stored as a canonical sequence of intervals.
///
/// The intervals are non-empty, pairwise disjoint, sorted by [`Ordering::intervals`] and never
/// touch: `[1, 2)` and `[2, 3]` are always stored as `[1, 3]`. As a consequence, two sets hold
/// the same values iff they are equal.
#[derive(Clone)]
pub struct IntervalSet<A> {
    ordering: Ordering<A>,
    intervals: Intervals<A>,
}

impl<A> IntervalSet<A> {
    /// The set without any values.
    #[must_use]
    pub fn empty(ordering: Ordering<A>) -> Self {
        Self {
            ordering,
            intervals: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn ordering(&self) -> &Ordering<A> {
        &self.ordering
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// The number of intervals (not values) in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[must_use]
    pub fn intervals(&self) -> &[Interval<A>] {
        &self.intervals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval<A>> {
        self.intervals.iter()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Interval<A>> {
        self.intervals.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Interval<A>> {
        self.intervals.last()
    }

    #[must_use]
    pub fn contains(&self, value: &A) -> bool {
        self.intervals.iter().any(|ival| ival.contains(value))
    }

    /// Checks that neighbouring intervals do not intersect.
    fn validate(&self) -> Result<(), Error>
    where
        A: Clone,
    {
        for (index, pair) in self.intervals.windows(2).enumerate() {
            if !pair[0].meet(&pair[1]).is_empty() {
                tracing::debug!(index, "interval set members intersect");
                return Err(Error::DisjointnessViolation { index });
            }
        }
        Ok(())
    }

    fn render(
        &self,
        f: &mut fmt::Formatter<'_>,
        interval: impl Fn(&Interval<A>, &mut fmt::Formatter<'_>) -> fmt::Result,
    ) -> fmt::Result {
        f.write_str("{")?;
        for (i, ival) in self.intervals.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            interval(ival, f)?;
        }
        f.write_str("}")
    }
}

impl<A: Clone> IntervalSet<A> {
    /// Creates the set of all values in any of `intervals`.
    ///
    /// The intervals may be empty, overlap, touch, and come in any order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrderingMismatch`] if any interval is not of `ordering`, and
    /// [`Error::DisjointnessViolation`] if normalization failed to separate the intervals.
    pub fn new(
        ordering: Ordering<A>,
        intervals: impl IntoIterator<Item = Interval<A>>,
    ) -> Result<Self, Error> {
        let mut members = Intervals::new();
        for interval in intervals {
            ensure_same(ordering.id(), interval.ordering.id())?;
            if !interval.is_empty() {
                members = merge(&ordering, members, interval);
            }
        }
        let set = Self {
            ordering,
            intervals: members,
        };
        set.validate()?;
        Ok(set)
    }

    /// The set of all values not in `interval`.
    ///
    /// The complement of the empty interval is the whole line, and the complement of the whole
    /// line is the empty set.
    #[must_use]
    pub fn complement_of(interval: &Interval<A>) -> Self {
        let ordering = interval.ordering.clone();
        let Some((lower, upper)) = interval.limits() else {
            return Self::from(Interval::unbounded(ordering));
        };
        let mut intervals = Intervals::new();
        if lower.is_bounded() {
            intervals.push(Interval::new(
                ordering.clone(),
                IntervalLimit::unbounded(),
                lower.inverted(),
            ));
        }
        if upper.is_bounded() {
            intervals.push(Interval::new(
                ordering.clone(),
                upper.inverted(),
                IntervalLimit::unbounded(),
            ));
        }
        Self {
            ordering,
            intervals,
        }
    }

    /// The set of all values not in `self`.
    #[must_use]
    pub fn complement(&self) -> Self {
        // the complement of a union is the intersection of the complements
        self.intervals.iter().fold(
            Self::from(Interval::unbounded(self.ordering.clone())),
            |acc, ival| acc.meet(&Self::complement_of(ival)),
        )
    }

    /// The set of all values in `self` or in `interval`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrderingMismatch`] if `interval` uses a different ordering instance.
    pub fn union_interval(&self, interval: &Interval<A>) -> Result<Self, Error> {
        ensure_same(self.ordering.id(), interval.ordering.id())?;
        if interval.is_empty() {
            return Ok(self.clone());
        }
        let set = Self {
            ordering: self.ordering.clone(),
            intervals: merge(&self.ordering, self.intervals.clone(), interval.clone()),
        };
        set.validate()?;
        Ok(set)
    }

    /// The set of all values in `self` or in `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrderingMismatch`] if `other` uses a different ordering instance.
    pub fn union(&self, other: &Self) -> Result<Self, Error> {
        ensure_same(self.ordering.id(), other.ordering.id())?;
        let intervals = other
            .intervals
            .iter()
            .fold(self.intervals.clone(), |acc, ival| {
                merge(&self.ordering, acc, ival.clone())
            });
        let set = Self {
            ordering: self.ordering.clone(),
            intervals,
        };
        set.validate()?;
        Ok(set)
    }

    /// The set of all values in both `self` and `interval`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrderingMismatch`] if `interval` uses a different ordering instance.
    pub fn intersect_interval(&self, interval: &Interval<A>) -> Result<Self, Error> {
        ensure_same(self.ordering.id(), interval.ordering.id())?;
        // members are disjoint and sorted, and so are their intersections with one interval
        let intervals = self
            .intervals
            .iter()
            .map(|ival| ival.meet(interval))
            .filter(|ival| !ival.is_empty())
            .collect();
        let set = Self {
            ordering: self.ordering.clone(),
            intervals,
        };
        set.validate()?;
        Ok(set)
    }

    /// The set of all values in both `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrderingMismatch`] if `other` uses a different ordering instance.
    pub fn intersect(&self, other: &Self) -> Result<Self, Error> {
        ensure_same(self.ordering.id(), other.ordering.id())?;
        let set = self.meet(other);
        set.validate()?;
        Ok(set)
    }

    fn meet(&self, other: &Self) -> Self {
        let mut intervals: Intervals<A> = self
            .intervals
            .iter()
            .flat_map(|ours| other.intervals.iter().map(move |theirs| ours.meet(theirs)))
            .filter(|ival| !ival.is_empty())
            .collect();
        let order = self.ordering.intervals();
        intervals.sort_by(|a, b| order.compare(a, b));
        Self {
            ordering: self.ordering.clone(),
            intervals,
        }
    }

    /// Returns whether every value of `interval` is in `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrderingMismatch`] if `interval` uses a different ordering instance.
    pub fn contains_interval(&self, interval: &Interval<A>) -> Result<bool, Error> {
        Ok(self.intersect_interval(interval)? == Self::from(interval.clone()))
    }

    /// Returns whether every value of `other` is in `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrderingMismatch`] if `other` uses a different ordering instance.
    pub fn contains_set(&self, other: &Self) -> Result<bool, Error> {
        Ok(self.intersect(other)? == *other)
    }

    /// Returns whether `self` and `other` share at least one value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrderingMismatch`] if `other` uses a different ordering instance.
    pub fn intersects(&self, other: &Self) -> Result<bool, Error> {
        Ok(!self.intersect(other)?.is_empty())
    }
}

/// Merges a non-empty `interval` into the canonical `intervals`.
///
/// Every member that overlaps or touches `interval` is replaced, together with `interval`, by one
/// interval spanning all of them. Members touch if one intersects the closure of the other, like
/// `(0, 1)` and `[1, 2)` do.
fn merge<A: Clone>(
    ordering: &Ordering<A>,
    intervals: Intervals<A>,
    interval: Interval<A>,
) -> Intervals<A> {
    let closure = interval.closure();
    let (mergeable, mut untouched): (Intervals<A>, Intervals<A>) =
        intervals.into_iter().partition(|member| {
            !member.closure().meet(&interval).is_empty() || !member.meet(&closure).is_empty()
        });

    // members are sorted, so the mergeable ones are contiguous and the first one starts earliest
    // while the last one ends latest
    let spanning = match (
        interval.limits(),
        mergeable.first().and_then(Interval::lower),
        mergeable.last().and_then(Interval::upper),
    ) {
        (Some((lower, upper)), Some(first_lower), Some(last_upper)) => {
            tracing::trace!(merged = mergeable.len(), "merging touching intervals");
            let lower = ordering.lower_limits().min_of(lower, first_lower);
            let upper = ordering.upper_limits().min_of(upper, last_upper);
            Some(Interval::new(ordering.clone(), lower.clone(), upper.clone()))
        }
        _ => None,
    };
    untouched.push(spanning.unwrap_or(interval));

    let order = ordering.intervals();
    untouched.sort_by(|a, b| order.compare(a, b));
    untouched
}

impl<A: Clone> From<Interval<A>> for IntervalSet<A> {
    fn from(interval: Interval<A>) -> Self {
        let ordering = interval.ordering.clone();
        if interval.is_empty() {
            Self::empty(ordering)
        } else {
            let mut intervals = Intervals::new();
            intervals.push(interval);
            Self {
                ordering,
                intervals,
            }
        }
    }
}

impl<A> PartialEq for IntervalSet<A> {
    fn eq(&self, other: &Self) -> bool {
        self.ordering.is_same(&other.ordering) && self.intervals == other.intervals
    }
}

impl<A> Eq for IntervalSet<A> {}

impl<A> IntoIterator for IntervalSet<A> {
    type Item = Interval<A>;
    type IntoIter = smallvec::IntoIter<[Interval<A>; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a IntervalSet<A> {
    type Item = &'a Interval<A>;
    type IntoIter = std::slice::Iter<'a, Interval<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl<A: fmt::Display> fmt::Display for IntervalSet<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, |ival, f| fmt::Display::fmt(ival, f))
    }
}

impl<A: fmt::Debug> fmt::Debug for IntervalSet<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, |ival, f| fmt::Debug::fmt(ival, f))
    }
}

#[cfg(feature = "serde")]
impl<A: ::serde::Serialize> ::serde::Serialize for IntervalSet<A> {
    fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.intervals.iter())
    }
}

/// Interval set factories.
impl<A: Clone> Ordering<A> {
    pub fn empty_interval_set(&self) -> IntervalSet<A> {
        IntervalSet::empty(self.clone())
    }

    /// The set of all values in any of `intervals`; see [`IntervalSet::new`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrderingMismatch`] if any interval is not of this ordering.
    pub fn interval_set(
        &self,
        intervals: impl IntoIterator<Item = Interval<A>>,
    ) -> Result<IntervalSet<A>, Error> {
        IntervalSet::new(self.clone(), intervals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{natural::*, ordering::Comparator};
    use ahash::HashSet;
    use insta::assert_snapshot;

    impl<A: Clone> IntervalSet<A> {
        /// Asserts the set is in canonical form.
        fn assert_canonical(&self) {
            let order = self.ordering.intervals();
            for ival in &self.intervals {
                assert!(!ival.is_empty());
                assert!(ival.ordering().is_same(&self.ordering));
            }
            for pair in self.intervals.windows(2) {
                assert!(order.less(&pair[0], &pair[1]));
                assert!(pair[0].closure().meet(&pair[1]).is_empty());
                assert!(pair[0].meet(&pair[1].closure()).is_empty());
            }
        }
    }

    fn set(intervals: impl IntoIterator<Item = Interval<i32>>) -> IntervalSet<i32> {
        let set = interval_set(intervals).unwrap();
        set.assert_canonical();
        set
    }

    #[test]
    fn construction() {
        assert_snapshot!(set([]), @"{}");
        assert_snapshot!(set([empty_interval(), open_interval(3, 3)]), @"{}");
        assert_snapshot!(
            set([closed_interval(5, 6), closed_interval(1, 2)]),
            @"{[1, 2], [5, 6]}"
        );
        assert_snapshot!(
            set([open_interval(0, 1), closed_open_interval(1, 2)]),
            @"{(0, 2)}"
        );
        assert_snapshot!(
            set([open_interval(0, 1), open_interval(1, 2)]),
            @"{(0, 1), (1, 2)}"
        );
        assert_snapshot!(
            set([closed_interval(1, 10), closed_interval(2, 3), single_value_interval(10)]),
            @"{[1, 10]}"
        );
        assert_snapshot!(
            set([single_value_interval(1), single_value_interval(1)]),
            @"{[1]}"
        );
        assert_snapshot!(
            set([
                closed_interval(20, 30),
                unbounded_open_interval(0),
                open_closed_interval(0, 5),
                closed_unbounded_interval(40),
            ]),
            @"{(-∞, 0), (0, 5], [20, 30], [40, ∞)}"
        );
    }

    #[test]
    fn construction_rejects_foreign_orderings() {
        let ord = Ordering::<i32>::from_compare(|a, b| a.cmp(b));
        let err = IntervalSet::new(ord.clone(), [closed_interval(1, 2)]).unwrap_err();
        assert_eq!(
            err,
            Error::OrderingMismatch {
                expected: ord.id(),
                found: Ordering::<i32>::natural().id()
            }
        );
        // even empty intervals must be of the right ordering
        assert!(IntervalSet::new(ord, [empty_interval()]).is_err());
    }

    #[test]
    fn validation_catches_overlaps() {
        let broken = IntervalSet {
            ordering: Ordering::natural(),
            intervals: SmallVec::from_vec(vec![closed_interval(1, 3), closed_interval(2, 4)]),
        };
        assert_eq!(
            broken.validate(),
            Err(Error::DisjointnessViolation { index: 0 })
        );
        assert_eq!(set([closed_interval(1, 3)]).validate(), Ok(()));
    }

    #[test]
    fn union() {
        let left = set([closed_interval(1, 3), closed_interval(4, 6)]);
        let union = left.union_interval(&open_interval(2, 5)).unwrap();
        union.assert_canonical();
        assert_snapshot!(union, @"{[1, 6]}");

        let left = set([unbounded_open_interval(2), open_unbounded_interval(3)]);
        let union = left.union_interval(&closed_interval(2, 3)).unwrap();
        assert_snapshot!(union, @"{(-∞, ∞)}");

        let left = set([open_interval(1, 2), open_interval(5, 6)]);
        let union = left.union_interval(&open_interval(3, 4)).unwrap();
        assert_snapshot!(union, @"{(1, 2), (3, 4), (5, 6)}");
        let union = left.union_interval(&empty_interval()).unwrap();
        assert_eq!(union, left);

        let union = left
            .union(&set([closed_interval(2, 3), open_closed_interval(4, 5)]))
            .unwrap();
        union.assert_canonical();
        assert_snapshot!(union, @"{(1, 3], (4, 6)}");

        assert_eq!(left.union(&set([])).unwrap(), left);
        assert_eq!(set([]).union(&left).unwrap(), left);
    }

    #[test]
    fn intersect() {
        let left = set([open_closed_interval(1, 3)]);
        let right = set([open_closed_interval(2, 4)]);
        assert_snapshot!(left.intersect(&right).unwrap(), @"{(2, 3]}");

        let left = set([closed_interval(1, 5), closed_interval(10, 20), closed_interval(25, 30)]);
        let right = set([
            closed_interval(1, 2),
            single_value_interval(4),
            closed_interval(6, 10),
            closed_interval(12, 15),
            closed_interval(18, 40),
        ]);
        let common = left.intersect(&right).unwrap();
        common.assert_canonical();
        assert_snapshot!(common, @"{[1, 2], [4], [10], [12, 15], [18, 20], [25, 30]}");
        assert_eq!(right.intersect(&left).unwrap(), common);

        let common = left.intersect_interval(&open_interval(3, 12)).unwrap();
        assert_snapshot!(common, @"{(3, 5], [10, 12)}");
        assert!(left.intersect_interval(&empty_interval()).unwrap().is_empty());
        assert!(left.intersect(&set([])).unwrap().is_empty());
    }

    #[test]
    fn containment() {
        let ivals = set([closed_interval(1, 5), open_interval(10, 20)]);
        assert!(ivals.contains(&1));
        assert!(ivals.contains(&5));
        assert!(!ivals.contains(&7));
        assert!(!ivals.contains(&10));
        assert!(ivals.contains(&15));

        assert_eq!(ivals.contains_interval(&closed_interval(2, 3)), Ok(true));
        assert_eq!(ivals.contains_interval(&closed_interval(4, 11)), Ok(false));
        assert_eq!(ivals.contains_interval(&closed_interval(10, 11)), Ok(false));
        assert_eq!(ivals.contains_interval(&empty_interval()), Ok(true));

        assert_eq!(
            ivals.contains_set(&set([single_value_interval(1), closed_interval(11, 12)])),
            Ok(true)
        );
        assert_eq!(ivals.contains_set(&set([closed_interval(5, 10)])), Ok(false));
        assert_eq!(ivals.contains_set(&set([])), Ok(true));

        assert_eq!(ivals.intersects(&set([closed_interval(5, 10)])), Ok(true));
        assert_eq!(ivals.intersects(&set([open_interval(5, 10)])), Ok(false));
    }

    #[test]
    fn complement_of_interval() {
        assert_snapshot!(IntervalSet::complement_of(&closed_interval(1, 2)), @"{(-∞, 1), (2, ∞)}");
        assert_snapshot!(IntervalSet::complement_of(&open_interval(1, 2)), @"{(-∞, 1], [2, ∞)}");
        assert_snapshot!(IntervalSet::complement_of(&unbounded_open_interval(1)), @"{[1, ∞)}");
        assert_snapshot!(IntervalSet::complement_of(&closed_unbounded_interval(1)), @"{(-∞, 1)}");
        assert_snapshot!(IntervalSet::complement_of(&unbounded_interval::<i32>()), @"{}");
        assert_snapshot!(IntervalSet::complement_of(&empty_interval::<i32>()), @"{(-∞, ∞)}");
        assert_snapshot!(IntervalSet::complement_of(&single_value_interval(1)), @"{(-∞, 1), (1, ∞)}");
    }

    #[test]
    fn complement_of_set() {
        let ivals = set([closed_interval(1, 2), open_interval(5, 6)]);
        let complement = ivals.complement();
        complement.assert_canonical();
        assert_snapshot!(complement, @"{(-∞, 1), (2, 5], [6, ∞)}");
        assert_eq!(complement.complement(), ivals);
        assert_snapshot!(set([]).complement(), @"{(-∞, ∞)}");
    }

    #[test]
    fn rejects_foreign_orderings() {
        let ord = Ordering::<i32>::from_compare(|a, b| a.cmp(b));
        let ours = set([closed_interval(1, 2)]);
        let theirs = ord.interval_set([ord.closed_interval(1, 2)]).unwrap();
        assert!(ours.union(&theirs).is_err());
        assert!(ours.intersect(&theirs).is_err());
        assert!(ours.contains_set(&theirs).is_err());
        assert!(ours.intersects(&theirs).is_err());
        assert!(ours.union_interval(&ord.closed_interval(1, 2)).is_err());
        assert!(ours.intersect_interval(&ord.closed_interval(1, 2)).is_err());
        assert!(ours.contains_interval(&ord.closed_interval(1, 2)).is_err());
        assert_ne!(ours, theirs);
        assert_ne!(set([]), ord.empty_interval_set());
    }

    #[test]
    fn accessors() {
        let ivals = set([closed_interval(5, 6), closed_interval(1, 2)]);
        assert_eq!(ivals.len(), 2);
        assert!(!ivals.is_empty());
        assert_eq!(ivals.first(), Some(&closed_interval(1, 2)));
        assert_eq!(ivals.last(), Some(&closed_interval(5, 6)));
        assert_eq!(ivals.iter().count(), 2);
        assert_eq!((&ivals).into_iter().count(), 2);
        assert_eq!(
            ivals.clone().into_iter().collect::<Vec<_>>(),
            ivals.intervals()
        );
        assert_eq!(format!("{ivals:?}"), "{[1, 2], [5, 6]}");
        assert!(set([]).first().is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde() {
        let json = serde_json::to_string(&set([single_value_interval(1)])).unwrap();
        assert_eq!(json, r#"[[{"bound":1,"is_open":false},{"bound":1,"is_open":false}]]"#);
    }

    fn points(ivals: &IntervalSet<i8>) -> HashSet<i8> {
        (i8::MIN..=i8::MAX).filter(|v| ivals.contains(v)).collect()
    }

    #[quickcheck]
    fn qc_canonical(intervals: Vec<Interval<i8>>) {
        let ivals = interval_set(intervals.clone()).unwrap();
        ivals.assert_canonical();
        let expected: HashSet<i8> = (i8::MIN..=i8::MAX)
            .filter(|v| intervals.iter().any(|ival| ival.contains(v)))
            .collect();
        assert_eq!(points(&ivals), expected);
    }

    #[quickcheck]
    fn qc_order_independent(intervals: Vec<Interval<i8>>) -> bool {
        let mut reversed = intervals.clone();
        reversed.reverse();
        interval_set(intervals).unwrap() == interval_set(reversed).unwrap()
    }

    #[quickcheck]
    fn qc_union(left: IntervalSet<i8>, right: IntervalSet<i8>) {
        let union = left.union(&right).unwrap();
        union.assert_canonical();
        assert_eq!(union.contains_set(&left), Ok(true));
        assert_eq!(union.contains_set(&right), Ok(true));
        assert_eq!(
            points(&union),
            points(&left)
                .union(&points(&right))
                .copied()
                .collect::<HashSet<_>>()
        );
        assert_eq!(union, right.union(&left).unwrap());
    }

    #[quickcheck]
    fn qc_intersection(left: IntervalSet<i8>, right: IntervalSet<i8>) {
        let common = left.intersect(&right).unwrap();
        common.assert_canonical();
        assert_eq!(
            points(&common),
            points(&left)
                .intersection(&points(&right))
                .copied()
                .collect::<HashSet<_>>()
        );
        assert_eq!(left.contains_set(&common), Ok(true));
    }

    #[quickcheck]
    fn qc_complement(ivals: IntervalSet<i8>) {
        let complement = ivals.complement();
        complement.assert_canonical();
        for v in i8::MIN..=i8::MAX {
            assert_ne!(ivals.contains(&v), complement.contains(&v));
        }
        assert_eq!(complement.complement(), ivals);
        assert_eq!(
            ivals.union(&complement).unwrap(),
            IntervalSet::from(unbounded_interval())
        );
    }

    #[quickcheck]
    fn qc_complement_of_interval(interval: Interval<i8>) {
        let complement = IntervalSet::complement_of(&interval);
        complement.assert_canonical();
        assert!(!complement.intersects(&IntervalSet::from(interval.clone())).unwrap());
        assert_eq!(
            complement.union_interval(&interval).unwrap(),
            IntervalSet::from(unbounded_interval())
        );
    }
}
