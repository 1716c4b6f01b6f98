// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`BoundedList`](crate::BoundedList).
//!
//! - `&BoundedList` and `&mut BoundedList` iterate the live prefix as slices,
//!   and can be iterated again as often as needed.
//! - `IntoIter<T, N>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.

// Crate imports
use crate::list::BoundedList;

// Core imports
use core::iter::FusedIterator;

/// Owned iterator returned by `BoundedList::into_iter()`.
///
/// Holds a copy of the list and yields its live elements by value.
pub struct IntoIter<T: Copy, const N: usize> {
    list: BoundedList<T, N>,
    front: usize,
    back: usize, // exclusive
}

impl<T: Copy, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let item = self.list.buf[self.front];
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<T: Copy, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.list.buf[self.back])
    }
}

impl<T: Copy, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T: Copy, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T: Copy, const N: usize> IntoIterator for BoundedList<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    /// Consumes the list; free slots past `len` are never yielded.
    fn into_iter(self) -> IntoIter<T, N> {
        let back = self.len;
        IntoIter {
            list: self,
            front: 0,
            back,
        }
    }
}

// Borrowing forms walk the live prefix through the slice iterators.
impl<'a, T: Copy, const N: usize> IntoIterator for &'a BoundedList<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a mut BoundedList<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::BoundedList;

    #[test]
    fn test_double_ended_and_nth() {
        let v: BoundedList<i32, 6> = BoundedList::try_from(&[10, 20, 30, 40][..]).unwrap();
        let mut it = v.into_iter();
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.nth(1), Some(30));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_nth_past_end_drains() {
        let v: BoundedList<i32, 5> = BoundedList::try_from(&[1, 2, 3][..]).unwrap();
        let mut it = v.into_iter();
        assert_eq!(it.nth(3), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_size_hint_tracks_consumption() {
        let v: BoundedList<i32, 6> = BoundedList::try_from(&[10, 20, 30][..]).unwrap();
        let mut it = v.into_iter();
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.size_hint(), (2, Some(2)));
        it.next_back();
        assert_eq!(it.len(), 1);
    }

    #[test]
    fn test_into_iter_stops_at_len() {
        let mut v: BoundedList<i32, 4> = [1, 2, 3, 4].into();
        v.truncate(2);
        let collected: Vec<i32> = v.into_iter().collect();
        assert_eq!(collected, vec![1, 2]);
        let reversed: Vec<i32> = v.into_iter().rev().collect();
        assert_eq!(reversed, vec![2, 1]);
    }

    #[test]
    fn test_into_iter_refs() {
        let mut v: BoundedList<i32, 4> = BoundedList::try_from(&[1, 2, 3][..]).unwrap();

        let mut collected = Vec::new();
        for x in &v {
            collected.push(*x);
        }
        assert_eq!(collected, vec![1, 2, 3]);

        for x in &mut v {
            *x *= 10;
        }
        assert_eq!(v.as_slice(), &[10, 20, 30]);

        let empty: BoundedList<i32, 4> = BoundedList::new();
        assert_eq!((&empty).into_iter().count(), 0);
    }
}
