// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::BoundedList};

impl<T: Copy, const N: usize> From<[T; N]> for BoundedList<T, N> {
    /// Adopts `array` as the backing buffer. The list starts full.
    fn from(array: [T; N]) -> Self {
        let () = Self::CAPACITY_CHECK;
        Self {
            len: array.len(),
            buf: array,
        }
    }
}

impl<T: Copy, const N: usize> From<&[T; N]> for BoundedList<T, N> {
    /// Copies `array`; see `From<[T; N]>`.
    fn from(array: &[T; N]) -> Self {
        Self::from(*array)
    }
}

impl<T: Copy + Default, const N: usize> TryFrom<&[T]> for BoundedList<T, N> {
    type Error = Error;

    /// Fails with [`Error::CapacityExceeded`] if `src` is longer than `N`.
    fn try_from(src: &[T]) -> Result<Self, Self::Error> {
        let mut list = Self::default();
        list.extend_from_slice(src)?;
        Ok(list)
    }
}

impl<T: Copy + Default, const N: usize> FromIterator<T> for BoundedList<T, N> {
    /// Collects at most `N` items; the rest are left in the iterator.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::default();
        list.extend(iter);
        list
    }
}

impl<T: Copy + Default, const N: usize> BoundedList<T, N> {
    /// Tries to construct from an iterator without truncation.
    ///
    /// - Elements are pushed in iterator order.
    /// - On the first element that would exceed capacity `N`, this returns
    ///   [`Error::CapacityExceeded`] and the partially filled list is dropped.
    /// - The source iterator is left partially consumed in that case.
    #[inline]
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut list = Self::default();
        for item in iter {
            list.push_back(item)?;
        }
        Ok(list)
    }
}
