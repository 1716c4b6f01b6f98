// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::BoundedList};

impl<T: Copy + PartialEq, const N: usize> BoundedList<T, N> {
    /// Returns `true` if `value` is among the live elements (linear search).
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }

    /// Appends `value` unless it is already present.
    ///
    /// Returns `Ok(true)` if `value` was added, `Ok(false)` if it was already
    /// there, and [`Error::CapacityExceeded`] if it is absent and the list is
    /// full.
    #[inline]
    pub fn include(&mut self, value: T) -> Result<bool, Error> {
        if self.contains(&value) {
            return Ok(false);
        }
        self.push_back(value)?;
        Ok(true)
    }

    /// Returns the elements of `self` that also appear in `other`, in the
    /// order they have in `self`.
    ///
    /// Neither list may contain duplicates. A duplicate in `self` that is also
    /// present in `other` would be emitted twice; that is reported as
    /// [`Error::PreconditionViolated`] rather than producing the result.
    ///
    /// `O(len * other.len())`.
    pub fn intersect<const M: usize>(&self, other: &BoundedList<T, M>) -> Result<Self, Error> {
        let mut out = *self;
        out.clear();
        for x in self.iter().filter(|x| other.contains(x)) {
            if out.contains(x) {
                tracing::debug!(
                    len = self.len,
                    capacity = N,
                    requested = out.len() + 1,
                    "intersect rejected: duplicate element"
                );
                return Err(Error::PreconditionViolated);
            }
            // out.len() <= self.len() <= N, so this never overflows.
            out.push_back(*x)?;
        }
        Ok(out)
    }

    /// Returns `true` if both lists have the same length and every element of
    /// `self` appears in `other`, regardless of order.
    ///
    /// `O(len * other.len())`.
    pub fn same_elements<const M: usize>(&self, other: &BoundedList<T, M>) -> bool {
        self.len == other.len() && self.iter().all(|x| other.contains(x))
    }
}
