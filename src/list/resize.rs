// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::BoundedList};

impl<T: Copy, const N: usize> BoundedList<T, N> {
    /// Sets `len = 0` without altering the underlying values.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Shrinks to `new_len` if `new_len < len`; otherwise a no-op.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }

    /// Sets the logical length to `new_len`.
    ///
    /// Growing does **not** initialize the newly exposed slots
    /// `[old_len, new_len)`: they hold whatever was last stored there (or the
    /// construction fill value). Callers are expected to overwrite them before
    /// relying on their contents. This lets a list be grown to a known size and
    /// filled in a second pass, and lets pooled lists reuse stale contents.
    ///
    /// Returns [`Error::CapacityExceeded`] if `new_len > N`; the list is then
    /// left unchanged.
    #[inline]
    pub fn resize(&mut self, new_len: usize) -> Result<(), Error> {
        if new_len > N {
            tracing::debug!(
                len = self.len,
                capacity = N,
                requested = new_len,
                "resize rejected"
            );
            return Err(Error::CapacityExceeded);
        }
        self.len = new_len;
        Ok(())
    }

    /// Resets the list to hold exactly `value`.
    #[inline]
    pub fn set_to(&mut self, value: T) {
        // N > 0 is guaranteed by the constructors.
        self.buf[0] = value;
        self.len = 1;
    }

    /// Replaces the contents with a copy of `other`, whose capacity may differ.
    ///
    /// Returns [`Error::CapacityExceeded`] (list unchanged) if `other` holds more
    /// than `N` elements.
    #[inline]
    pub fn assign<const M: usize>(&mut self, other: &BoundedList<T, M>) -> Result<(), Error> {
        let src = other.as_slice();
        if src.len() > N {
            tracing::debug!(
                len = self.len,
                capacity = N,
                requested = src.len(),
                "assign rejected"
            );
            return Err(Error::CapacityExceeded);
        }
        self.buf[..src.len()].copy_from_slice(src);
        self.len = src.len();
        Ok(())
    }
}
