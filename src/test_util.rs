// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! Implementation of the quickcheck::Arbitrary trait for limits, intervals and interval sets.
//!
//! Intervals and sets are generated under the natural ordering of their value type.

use crate::{Interval, IntervalLimit, IntervalSet, Ordering};
use quickcheck::{Arbitrary, Gen};

impl<A: Arbitrary> Arbitrary for IntervalLimit<A> {
    fn arbitrary(g: &mut Gen) -> Self {
        // unbounded limits are interesting, but should not dominate
        if u8::arbitrary(g) % 5 == 0 {
            Self::unbounded()
        } else {
            Self::new(A::arbitrary(g), bool::arbitrary(g))
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let is_open = self.is_open();
        match self.bound() {
            Some(value) => Box::new(
                std::iter::once(Self::unbounded())
                    .chain(value.shrink().map(move |value| Self::new(value, is_open))),
            ),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<A: Arbitrary + Ord> Arbitrary for Interval<A> {
    fn arbitrary(g: &mut Gen) -> Self {
        if u8::arbitrary(g) % 10 == 0 {
            return Ordering::natural().empty_interval();
        }
        let mut lower = IntervalLimit::<A>::arbitrary(g);
        let mut upper = IntervalLimit::<A>::arbitrary(g);
        // most generated intervals should not be empty, so put the bounds in order
        if matches!((lower.bound(), upper.bound()), (Some(lo), Some(hi)) if hi < lo) {
            std::mem::swap(&mut lower, &mut upper);
        }
        Ordering::natural().interval_from_limits(lower, upper)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let limits = self
            .limits()
            .map(|(lower, upper)| (lower.clone(), upper.clone()));
        Box::new(limits.shrink().map(|limits| match limits {
            Some((lower, upper)) => Ordering::natural().interval_from_limits(lower, upper),
            None => Ordering::natural().empty_interval(),
        }))
    }
}

impl<A: Arbitrary + Ord> Arbitrary for IntervalSet<A> {
    fn arbitrary(g: &mut Gen) -> Self {
        // keep the number of members small, the interesting cases are merges of a few intervals
        let mut g = Gen::new(g.size() / 10 + 1);
        let intervals = Vec::<Interval<A>>::arbitrary(&mut g);
        IntervalSet::new(Ordering::natural(), intervals)
            .expect("generated intervals share the natural ordering")
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.intervals().to_vec().shrink().map(|intervals| {
            IntervalSet::new(Ordering::natural(), intervals)
                .expect("shrunk intervals share the natural ordering")
        }))
    }
}
