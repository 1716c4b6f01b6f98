// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::BoundedList;

// Core imports
use core::cmp::Ordering;

impl<T: Copy, const N: usize> BoundedList<T, N> {
    /// Sorts the live elements in place in ascending order.
    ///
    /// Not stable; performs no allocation. Free slots are left untouched.
    #[inline]
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.as_mut_slice().sort_unstable();
    }

    /// Sorts the live elements in place with `compare`. Not stable.
    #[inline]
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_unstable_by(compare);
    }
}
