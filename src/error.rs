// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error type for [`BoundedList`](crate::BoundedList).
//!
//! Every variant describes a caller-side precondition that did not hold.
//! Operations that return one of these leave the list exactly as it was.

// External imports
use thiserror::Error;

/// Errors returned by fallible operations on [`BoundedList`](crate::BoundedList).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation would grow the list past its fixed capacity `N`.
    #[error("capacity exceeded")]
    CapacityExceeded,
    /// The operation needs at least one element, but the list is empty.
    #[error("list is empty")]
    Underflow,
    /// An index was outside the live range `[0, len)`.
    #[error("index out of range")]
    IndexOutOfRange,
    /// An input did not satisfy a documented precondition.
    ///
    /// Currently raised by [`BoundedList::intersect`](crate::BoundedList::intersect)
    /// when a duplicate element would end up in the result.
    #[error("precondition violated: duplicate element")]
    PreconditionViolated,
}
