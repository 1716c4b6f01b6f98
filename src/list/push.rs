// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::BoundedList};

impl<T: Copy, const N: usize> BoundedList<T, N> {
    /// Appends `value` at index `len`.
    ///
    /// Returns [`Error::CapacityExceeded`] if the list is full, in which case
    /// the list is left unchanged.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<(), Error> {
        if self.len == N {
            tracing::debug!(
                len = self.len,
                capacity = N,
                requested = self.len + 1,
                "push_back rejected"
            );
            return Err(Error::CapacityExceeded);
        }
        self.buf[self.len] = value;
        self.len += 1;
        Ok(())
    }
}
