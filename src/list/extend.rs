// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::BoundedList};

impl<T: Copy, const N: usize> Extend<T> for BoundedList<T, N> {
    /// Appends items until the list is full.
    ///
    /// The source is never advanced once the list is full, so items past the
    /// capacity stay in the iterator.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut iter = iter.into_iter();
        while self.len < N {
            let Some(item) = iter.next() else { break };
            self.buf[self.len] = item;
            self.len += 1;
        }
    }
}

impl<T: Copy, const N: usize> BoundedList<T, N> {
    /// Appends all of `src` if it fits; otherwise no-op and returns
    /// [`Error::CapacityExceeded`].
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error> {
        let start = self.len;
        let end = start + src.len();
        if end > N {
            tracing::debug!(
                len = start,
                capacity = N,
                requested = end,
                "append rejected"
            );
            return Err(Error::CapacityExceeded);
        }
        self.buf[start..end].copy_from_slice(src);
        self.len = end;
        Ok(())
    }

    /// Appends every element of `other`, in order.
    ///
    /// `other` may have a different capacity. Fails with
    /// [`Error::CapacityExceeded`], leaving `self` unchanged, if
    /// `self.len() + other.len() > N`.
    #[inline]
    pub fn push_back_list<const M: usize>(&mut self, other: &BoundedList<T, M>) -> Result<(), Error> {
        self.extend_from_slice(other.as_slice())
    }
}
