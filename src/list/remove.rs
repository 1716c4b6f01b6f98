// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::BoundedList;

impl<T: Copy + PartialEq, const N: usize> BoundedList<T, N> {
    /// Removes one occurrence of `value` in `O(1)` after the search, without
    /// preserving order.
    ///
    /// The search runs from the **last** element towards the first, since
    /// the most recently added element is usually the next one removed. The
    /// matching slot is overwritten with the last element and `len` shrinks by
    /// one.
    ///
    /// Returns `false` (and leaves the list unchanged) if `value` is absent.
    /// Use [`remove_first`](Self::remove_first) when order matters.
    #[inline]
    pub fn exclude(&mut self, value: &T) -> bool {
        match self.as_slice().iter().rposition(|x| x == value) {
            Some(index) => {
                self.len -= 1;
                self.buf[index] = self.buf[self.len];
                true
            }
            None => false,
        }
    }

    /// Removes the first occurrence of `value`, shifting the tail left so the
    /// remaining elements keep their relative order. `O(len)`.
    ///
    /// Returns `false` (and leaves the list unchanged) if `value` is absent.
    #[inline]
    pub fn remove_first(&mut self, value: &T) -> bool {
        match self.as_slice().iter().position(|x| x == value) {
            Some(index) => {
                self.buf.copy_within(index + 1..self.len, index);
                self.len -= 1;
                true
            }
            None => false,
        }
    }
}
