// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! Errors produced by the ordering and interval algebra.
//!
//! Every variant describes a misuse of the API rather than a condition that a caller is expected
//! to recover from. Operations that merely find "nothing" (an empty intersection, the complement
//! of the whole line, ...) return empty values instead.
use crate::ordering::OrderingId;
use std::fmt;

/// Error returned by fallible ordering and interval operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Two values built on different [`Ordering`](crate::Ordering) instances were combined.
    OrderingMismatch {
        /// The ordering of the receiver.
        expected: OrderingId,
        /// The ordering of the operand.
        found: OrderingId,
    },
    /// Two neighbouring members of an interval set intersect after normalization.
    DisjointnessViolation {
        /// Position of the first interval of the offending pair.
        index: usize,
    },
    /// `min` or `max` was asked for the extremum of no values.
    EmptyCollection,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OrderingMismatch { expected, found } => write!(
                f,
                "cannot combine values of ordering {found} with values of ordering {expected}"
            ),
            Error::DisjointnessViolation { index } => write!(
                f,
                "intervals at positions {index} and {} of an interval set intersect",
                index + 1
            ),
            Error::EmptyCollection => f.write_str("cannot take the extremum of an empty collection"),
        }
    }
}

impl std::error::Error for Error {}

/// Checks that `found` is the same ordering instance as `expected`.
pub(crate) fn ensure_same(expected: OrderingId, found: OrderingId) -> Result<(), Error> {
    if expected == found {
        Ok(())
    } else {
        tracing::debug!(%expected, %found, "ordering mismatch");
        Err(Error::OrderingMismatch { expected, found })
    }
}
