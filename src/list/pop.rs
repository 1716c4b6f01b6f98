// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::BoundedList};

impl<T: Copy, const N: usize> BoundedList<T, N> {
    /// Removes the last element without returning it.
    ///
    /// The freed slot keeps its value; read it with [`last`](Self::last)
    /// beforehand if it is needed. Returns [`Error::Underflow`] on an empty list.
    #[inline]
    pub fn pop_back(&mut self) -> Result<(), Error> {
        if self.len == 0 {
            return Err(Error::Underflow);
        }
        self.len -= 1;
        Ok(())
    }

    /// Like [`pop_back`](Self::pop_back), but hands back a copy of the removed
    /// element. `None` on an empty list.
    #[inline]
    #[must_use]
    pub fn pop(&mut self) -> Option<T> {
        let value = *self.last().ok()?;
        self.len -= 1;
        Some(value)
    }

    /// Returns the element at index 0, or [`Error::Underflow`] when empty.
    ///
    /// Shadows the `Option`-returning slice method, like [`last`](Self::last).
    #[inline]
    pub fn first(&self) -> Result<&T, Error> {
        self.as_slice().first().ok_or(Error::Underflow)
    }

    /// Mutable counterpart of [`first`](Self::first).
    #[inline]
    pub fn first_mut(&mut self) -> Result<&mut T, Error> {
        self.as_mut_slice().first_mut().ok_or(Error::Underflow)
    }

    /// Returns the element at `len - 1`, or [`Error::Underflow`] when empty.
    #[inline]
    pub fn last(&self) -> Result<&T, Error> {
        self.as_slice().last().ok_or(Error::Underflow)
    }

    /// Mutable counterpart of [`last`](Self::last).
    #[inline]
    pub fn last_mut(&mut self) -> Result<&mut T, Error> {
        self.as_mut_slice().last_mut().ok_or(Error::Underflow)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{BoundedList, Error};

    #[test]
    fn test_pop_back_then_pop() {
        let mut v: BoundedList<u8, 3> = [1, 2, 3].into();
        assert_eq!(v.pop_back(), Ok(()));
        assert_eq!(v.pop(), Some(2));
        assert_eq!(v.as_slice(), &[1]);
        assert_eq!(v.pop(), Some(1));
        assert_eq!(v.pop(), None);
        assert_eq!(v.pop_back(), Err(Error::Underflow));
    }

    #[test]
    fn test_last_tracks_pushes() {
        let mut v: BoundedList<u8, 3> = BoundedList::new();
        assert_eq!(v.last(), Err(Error::Underflow));
        v.push_back(4).unwrap();
        assert_eq!(v.last(), Ok(&4));
        v.push_back(5).unwrap();
        assert_eq!(v.last(), Ok(&5));
    }

    #[test]
    fn test_first_mirrors_last() {
        let mut v: BoundedList<u8, 3> = BoundedList::new();
        assert_eq!(v.first(), Err(Error::Underflow));
        assert_eq!(v.first_mut(), Err(Error::Underflow));

        v.push_back(4).unwrap();
        assert_eq!(v.first(), v.last());
        v.push_back(5).unwrap();
        assert_eq!(v.first(), Ok(&4));
        *v.first_mut().unwrap() = 40;
        assert_eq!(v.as_slice(), &[40, 5]);
    }
}
