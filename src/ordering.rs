// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # Orderings
//!
//! This module provides the comparison capability that the whole interval algebra is built on.
//!
//! ## `Comparator`
//!
//! A [`Comparator`] is anything that can tell whether two values are equal, and whether one is
//! strictly less than the other. Those two predicates are the single source of truth for every
//! comparison: the derived relations (`greater`, `less_or_equal`, `min`, ...) live on
//! [`ComparatorExt`], which is implemented for every comparator and therefore cannot be
//! overridden by one.
//!
//! ## `Ordering`
//!
//! An [`Ordering`] is a cheaply clonable handle to a pair of comparison closures. Each
//! constructed ordering is a distinct *instance* with its own [`OrderingId`], and intervals only
//! ever combine with intervals of the same instance. Clones share the instance.
//!
//! The orderings over interval limits and over intervals themselves are derived from the base
//! ordering (see [`LimitOrdering`] and [`IntervalOrdering`]).

use crate::Error;
use std::{
    cmp, fmt,
    sync::{
        Arc,
        atomic::{self, AtomicU64},
    },
};

mod derived;
pub use derived::{IntervalOrdering, LimitOrdering, Side};

/// A strict total order over `T` together with the equivalence it is consistent with.
///
/// Implementations must make sure that for all `a` and `b` exactly one of `less(a, b)`,
/// `equal(a, b)` and `less(b, a)` holds, and that `less` is transitive.
pub trait Comparator<T: ?Sized> {
    /// Returns whether `a` and `b` are equivalent under this order.
    fn equal(&self, a: &T, b: &T) -> bool;

    /// Returns whether `a` sorts strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;
}

/// Relations derived from [`Comparator::equal`] and [`Comparator::less`].
///
/// This trait is implemented for every [`Comparator`] and cannot be implemented manually.
pub trait ComparatorExt<T: ?Sized>: Comparator<T> {
    fn greater(&self, a: &T, b: &T) -> bool {
        self.less(b, a)
    }

    fn less_or_equal(&self, a: &T, b: &T) -> bool {
        self.less(a, b) || self.equal(a, b)
    }

    fn greater_or_equal(&self, a: &T, b: &T) -> bool {
        self.greater(a, b) || self.equal(a, b)
    }

    /// Three-way comparison, for use with APIs such as [`slice::sort_by`].
    fn compare(&self, a: &T, b: &T) -> cmp::Ordering {
        if self.less(a, b) {
            cmp::Ordering::Less
        } else if self.equal(a, b) {
            cmp::Ordering::Equal
        } else {
            cmp::Ordering::Greater
        }
    }

    /// The smaller of two values, `a` if they are equal.
    fn min_of<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        if self.less(b, a) { b } else { a }
    }

    /// The larger of two values, `a` if they are equal.
    fn max_of<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        if self.less(a, b) { b } else { a }
    }

    /// Returns the smallest of `values`.
    ///
    /// Among several equal minima, the first one is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if `values` yields nothing.
    fn min<I>(&self, values: I) -> Result<T, Error>
    where
        T: Sized,
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .reduce(|min, value| if self.less(&value, &min) { value } else { min })
            .ok_or(Error::EmptyCollection)
    }

    /// Returns the largest of `values`.
    ///
    /// Among several equal maxima, the first one is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if `values` yields nothing.
    fn max<I>(&self, values: I) -> Result<T, Error>
    where
        T: Sized,
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .reduce(|max, value| if self.less(&max, &value) { value } else { max })
            .ok_or(Error::EmptyCollection)
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> ComparatorExt<T> for C {}

/// Identifies an [`Ordering`] instance.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderingId(u64);

impl OrderingId {
    /// Shared by every [`Ordering::natural`] of a given type.
    pub const NATURAL: Self = Self(0);

    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

impl fmt::Debug for OrderingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for OrderingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

type Predicate<A> = dyn Fn(&A, &A) -> bool + Send + Sync;

struct Inner<A> {
    id: OrderingId,
    equal: Box<Predicate<A>>,
    less: Box<Predicate<A>>,
}

/// A total order over `A`, given by an equivalence and a strict "less than" predicate.
///
/// Cloning an `Ordering` is cheap and yields the same instance (same [`OrderingId`]).
pub struct Ordering<A> {
    inner: Arc<Inner<A>>,
}

impl<A> Ordering<A> {
    /// Creates a new ordering instance from its two predicates.
    ///
    /// The caller is responsible for `less` being a strict total order consistent with `equal`.
    pub fn new<E, L>(equal: E, less: L) -> Self
    where
        E: Fn(&A, &A) -> bool + Send + Sync + 'static,
        L: Fn(&A, &A) -> bool + Send + Sync + 'static,
    {
        Self::with_id(OrderingId::next(), equal, less)
    }

    fn with_id<E, L>(id: OrderingId, equal: E, less: L) -> Self
    where
        E: Fn(&A, &A) -> bool + Send + Sync + 'static,
        L: Fn(&A, &A) -> bool + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                id,
                equal: Box::new(equal),
                less: Box::new(less),
            }),
        }
    }

    /// Creates a new ordering instance from a three-way comparison.
    ///
    /// `equal` holds where `compare` returns [`cmp::Ordering::Equal`], `less` where it returns
    /// [`cmp::Ordering::Less`].
    pub fn from_compare<F>(compare: F) -> Self
    where
        F: Fn(&A, &A) -> cmp::Ordering + Send + Sync + 'static,
    {
        let compare = Arc::new(compare);
        let compare_less = Arc::clone(&compare);
        Self::new(
            move |a, b| (*compare)(a, b).is_eq(),
            move |a, b| (*compare_less)(a, b).is_lt(),
        )
    }

    /// Creates a new ordering instance that compares values by the natural order of a key.
    pub fn by_key<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&A) -> K + Send + Sync + 'static,
    {
        Self::from_compare(move |a, b| key(a).cmp(&key(b)))
    }

    /// The ordering given by `A`'s [`Ord`] implementation.
    ///
    /// All natural orderings of a type are the same instance, so intervals built from separately
    /// obtained natural orderings can be combined.
    pub fn natural() -> Self
    where
        A: Ord + 'static,
    {
        Self::with_id(OrderingId::NATURAL, |a: &A, b: &A| a == b, |a: &A, b: &A| a < b)
    }

    /// A new ordering instance that sorts values in the opposite direction.
    pub fn reversed(&self) -> Self
    where
        A: 'static,
    {
        let equal = self.clone();
        let less = self.clone();
        Self::new(
            move |a, b| equal.equal(a, b),
            move |a, b| less.less(b, a),
        )
    }

    #[must_use]
    pub fn id(&self) -> OrderingId {
        self.inner.id
    }

    /// Returns whether `self` and `other` are the same instance.
    #[must_use]
    pub fn is_same(&self, other: &Self) -> bool {
        self.id() == other.id()
    }

    /// The restrictiveness order over lower interval limits.
    #[must_use]
    pub fn lower_limits(&self) -> LimitOrdering<'_, A> {
        LimitOrdering::new(self, Side::Lower)
    }

    /// The restrictiveness order over upper interval limits.
    #[must_use]
    pub fn upper_limits(&self) -> LimitOrdering<'_, A> {
        LimitOrdering::new(self, Side::Upper)
    }

    /// The canonical order of intervals within an interval set.
    #[must_use]
    pub fn intervals(&self) -> IntervalOrdering<'_, A> {
        IntervalOrdering::new(self)
    }
}

impl<A> Comparator<A> for Ordering<A> {
    fn equal(&self, a: &A, b: &A) -> bool {
        (self.inner.equal)(a, b)
    }

    fn less(&self, a: &A, b: &A) -> bool {
        (self.inner.less)(a, b)
    }
}

impl<A> Clone for Ordering<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: Ord + 'static> Default for Ordering<A> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<A> PartialEq for Ordering<A> {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl<A> Eq for Ordering<A> {}

impl<A> fmt::Debug for Ordering<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ordering").field(&self.id()).finish()
    }
}
