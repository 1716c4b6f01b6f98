// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexed access for [`BoundedList`](crate::BoundedList).
//!
//! Every access is bounds-checked against the live length, never against the
//! capacity:
//! - `list[i]` and range indexing panic on out-of-range input, like slices;
//! - [`BoundedList::at`] / [`BoundedList::at_mut`] report
//!   [`Error::IndexOutOfRange`] instead;
//! - [`BoundedList::get`] / [`BoundedList::get_mut`] return `None`.

// Crate imports
use crate::{error::Error, list::BoundedList};

// Core imports
use core::ops::{
    Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

impl<T: Copy, const N: usize> BoundedList<T, N> {
    /// Returns the element at `i`, or [`Error::IndexOutOfRange`] if `i >= len`.
    #[inline]
    pub fn at(&self, i: usize) -> Result<&T, Error> {
        self.get(i).ok_or(Error::IndexOutOfRange)
    }

    /// Mutable counterpart of [`at`](Self::at).
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, Error> {
        self.get_mut(i).ok_or(Error::IndexOutOfRange)
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }
}

impl<T: Copy, const N: usize> Index<usize> for BoundedList<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.as_slice()[i]
    }
}
impl<T: Copy, const N: usize> IndexMut<usize> for BoundedList<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}

macro_rules! impl_range_index {
    ($($range:ty),* $(,)?) => {$(
        impl<T: Copy, const N: usize> Index<$range> for BoundedList<T, N> {
            type Output = [T];
            fn index(&self, r: $range) -> &Self::Output {
                &self.as_slice()[r]
            }
        }
        impl<T: Copy, const N: usize> IndexMut<$range> for BoundedList<T, N> {
            fn index_mut(&mut self, r: $range) -> &mut Self::Output {
                &mut self.as_mut_slice()[r]
            }
        }
    )*};
}

impl_range_index!(
    Range<usize>,
    RangeFrom<usize>,
    RangeTo<usize>,
    RangeInclusive<usize>,
    RangeToInclusive<usize>,
    RangeFull,
);

#[cfg(test)]
mod tests {
    // Imports
    use crate::{BoundedList, Error};

    #[test]
    fn test_index_and_ranges() {
        let mut v: BoundedList<i32, 6> = BoundedList::try_from(&[0, 1, 2, 3, 4][..]).unwrap();

        assert_eq!(v[0], 0);
        assert_eq!(&v[1..3], &[1, 2]);
        assert_eq!(&v[2..], &[2, 3, 4]);
        assert_eq!(&v[..3], &[0, 1, 2]);
        assert_eq!(&v[..=2], &[0, 1, 2]);
        assert_eq!(&v[1..=3], &[1, 2, 3]);
        assert_eq!(&v[..], &[0, 1, 2, 3, 4]);

        v[1..3].copy_from_slice(&[10, 20]);
        v[4] = 40;
        assert_eq!(v.as_slice(), &[0, 10, 20, 3, 40]);
    }

    #[test]
    #[should_panic]
    fn test_index_past_len_panics_even_below_capacity() {
        let v: BoundedList<i32, 4> = BoundedList::from_value(1);
        let _ = v[1];
    }

    #[test]
    #[should_panic]
    fn test_range_past_len_panics() {
        let v: BoundedList<i32, 4> = BoundedList::try_from(&[1, 2][..]).unwrap();
        let _ = &v[..=2];
    }

    #[test]
    fn test_at_reports_index_out_of_range() {
        let mut v: BoundedList<i32, 4> = BoundedList::try_from(&[7, 8, 9][..]).unwrap();
        assert_eq!(v.at(2), Ok(&9));
        assert_eq!(v.at(3), Err(Error::IndexOutOfRange));

        *v.at_mut(0).unwrap() = 70;
        assert_eq!(v.at_mut(5), Err(Error::IndexOutOfRange));
        assert_eq!(v.as_slice(), &[70, 8, 9]);
    }

    #[test]
    fn test_get_and_get_mut() {
        let mut v: BoundedList<i32, 4> = BoundedList::try_from(&[7, 8, 9][..]).unwrap();
        assert_eq!(v.get(1), Some(&8));
        assert_eq!(v.get(3), None);
        *v.get_mut(1).unwrap() = 80;
        assert_eq!(v.as_slice(), &[7, 80, 9]);
        v.truncate(1);
        assert_eq!(v.get(1), None);
    }
}
