// (c) Copyright 2025 Helsing GmbH. All rights reserved.
use std::{
    hash::{Hash, Hasher},
    ops::Bound,
};

/// One end of an interval.
///
/// A limit is either unbounded, or bounded by a value that the interval includes (closed) or
/// excludes (open). Unbounded limits always count as open.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
pub struct IntervalLimit<A> {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    bound: Option<A>,
    is_open: bool,
}

impl<A> IntervalLimit<A> {
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            bound: None,
            is_open: true,
        }
    }

    /// A limit at `value` that excludes `value`.
    #[must_use]
    pub fn open(value: A) -> Self {
        Self::new(value, true)
    }

    /// A limit at `value` that includes `value`.
    #[must_use]
    pub fn closed(value: A) -> Self {
        Self::new(value, false)
    }

    #[must_use]
    pub fn new(value: A, is_open: bool) -> Self {
        Self {
            bound: Some(value),
            is_open,
        }
    }

    #[must_use]
    pub fn bound(&self) -> Option<&A> {
        self.bound.as_ref()
    }

    #[must_use]
    pub fn into_bound(self) -> Option<A> {
        self.bound
    }

    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.bound.is_some()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open || self.bound.is_none()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        !self.is_open()
    }

    /// Maps the bound value, keeping the openness.
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> IntervalLimit<B> {
        IntervalLimit {
            is_open: self.is_open(),
            bound: self.bound.map(f),
        }
    }

    /// The same limit, but including its bound value.
    #[must_use]
    pub fn to_closed(&self) -> Self
    where
        A: Clone,
    {
        match &self.bound {
            Some(value) => Self::closed(value.clone()),
            None => Self::unbounded(),
        }
    }

    /// The limit on the other side of the bound value, as used by a complement.
    ///
    /// An open limit becomes closed and vice versa. Unbounded limits stay unbounded.
    #[must_use]
    pub fn inverted(&self) -> Self
    where
        A: Clone,
    {
        match &self.bound {
            Some(value) => Self::new(value.clone(), !self.is_open),
            None => Self::unbounded(),
        }
    }

    /// Views this limit as a [`std::ops::Bound`].
    pub fn as_bound(&self) -> Bound<&A> {
        match &self.bound {
            Some(value) if self.is_open => Bound::Excluded(value),
            Some(value) => Bound::Included(value),
            None => Bound::Unbounded,
        }
    }
}

impl<A> From<Bound<A>> for IntervalLimit<A> {
    fn from(bound: Bound<A>) -> Self {
        match bound {
            Bound::Included(value) => Self::closed(value),
            Bound::Excluded(value) => Self::open(value),
            Bound::Unbounded => Self::unbounded(),
        }
    }
}

impl<A> From<IntervalLimit<A>> for Bound<A> {
    fn from(limit: IntervalLimit<A>) -> Self {
        let is_open = limit.is_open();
        match limit.bound {
            Some(value) if is_open => Bound::Excluded(value),
            Some(value) => Bound::Included(value),
            None => Bound::Unbounded,
        }
    }
}

impl<A: PartialEq> PartialEq for IntervalLimit<A> {
    fn eq(&self, other: &Self) -> bool {
        self.bound == other.bound && self.is_open() == other.is_open()
    }
}

impl<A: Eq> Eq for IntervalLimit<A> {}

impl<A: Hash> Hash for IntervalLimit<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bound.hash(state);
        self.is_open().hash(state);
    }
}
