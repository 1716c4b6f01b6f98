// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::BoundedList;

impl<T: Copy, const N: usize> BoundedList<T, N> {
    /// Returns the live elements `[0, len)` as a slice.
    ///
    /// Every read-only view of the list goes through here, so free slots are
    /// never observable.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buf.split_at(self.len).0
    }

    /// Returns the live elements `[0, len)` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.split_at_mut(self.len).0
    }
}
